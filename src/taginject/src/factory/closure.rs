use std::error::Error;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::container::Managed;
use crate::factory::TypedFactory;

/// A specialized form of [`Fn`] which takes no argument and produces a value
/// or fails.
///
/// Any `Fn() -> Result<T, E> + Send + Sync + 'static` closure where
/// `T: Managed` is a [`Closure`].
pub trait Closure
where
    Self: Fn() -> Result<Self::Produced, Self::Error>,
    Self: Send + Sync + 'static,
{
    /// The successfully produced value.
    type Produced: Managed;

    /// The error reported by the closure itself.
    type Error: Into<Box<dyn Error + Send + Sync>>;
}

impl<F, T, E> Closure for F
where
    T: Managed,
    E: Into<Box<dyn Error + Send + Sync>>,
    Self: Fn() -> Result<T, E>,
    Self: Send + Sync + 'static,
{
    type Produced = T;

    type Error = E;
}

/// A [`Factory`] which produces values from a [`Closure`].
///
/// # Examples
///
/// ```rust
/// # use std::convert::Infallible;
/// # use std::sync::Arc;
/// # use taginject::factory::ClosureFactory;
/// let factory = ClosureFactory::new(|| Ok::<_, Infallible>(Arc::new(42)));
/// ```
///
/// [`Factory`]: crate::factory::Factory
pub struct ClosureFactory<C>
where
    C: Closure,
{
    closure: C,
}

impl<C> ClosureFactory<C>
where
    C: Closure,
{
    pub fn new(closure: C) -> Self {
        Self { closure }
    }
}

impl<C> Debug for ClosureFactory<C>
where
    C: Closure,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ClosureFactory<C>").finish_non_exhaustive()
    }
}

impl<C> TypedFactory for ClosureFactory<C>
where
    C: Closure,
{
    type Output = C::Produced;

    fn produce(&self) -> Result<Option<Self::Output>, Box<dyn Error + Send + Sync>> {
        (self.closure)().map(Some).map_err(Into::into)
    }
}

/// A [`Factory`] backed by a [`Closure`] which may legitimately produce
/// nothing by returning `Ok(None)`.
///
/// [`Factory`]: crate::factory::Factory
pub struct OptionalClosureFactory<T, C>
where
    T: Managed,
    C: Closure<Produced = Option<T>>,
{
    closure: C,
    _marker: PhantomData<fn() -> T>,
}

impl<T, C> OptionalClosureFactory<T, C>
where
    T: Managed,
    C: Closure<Produced = Option<T>>,
{
    pub fn new(closure: C) -> Self {
        Self {
            closure,
            _marker: PhantomData,
        }
    }
}

impl<T, C> Debug for OptionalClosureFactory<T, C>
where
    T: Managed,
    C: Closure<Produced = Option<T>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OptionalClosureFactory<T, C>")
            .finish_non_exhaustive()
    }
}

impl<T, C> TypedFactory for OptionalClosureFactory<T, C>
where
    T: Managed,
    C: Closure<Produced = Option<T>>,
{
    type Output = T;

    fn produce(&self) -> Result<Option<Self::Output>, Box<dyn Error + Send + Sync>> {
        (self.closure)().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use std::any;
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use snafu::prelude::*;

    use crate::factory::Factory;
    use crate::util::any::Downcast;

    use super::*;

    #[derive(Debug, Snafu)]
    enum TestError {
        #[snafu(display("test error"))]
        Failed,
    }

    #[test]
    fn closure_factory_produce_succeeds() {
        let counter = Arc::new(AtomicU32::new(0));
        let factory = ClosureFactory::new({
            let counter = Arc::clone(&counter);
            move || Ok::<_, Infallible>(Arc::new(counter.fetch_add(1, Ordering::SeqCst)))
        });

        let first = factory.produce().unwrap().unwrap();
        let second = factory.produce().unwrap().unwrap();
        assert_eq!(*first, 0);
        assert_eq!(*second, 1);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn closure_factory_dyn_produce_succeeds() {
        let factory = ClosureFactory::new(|| Ok::<_, Infallible>(Arc::new("str")));

        let produced = factory.dyn_produce().unwrap().unwrap();
        let produced = produced.downcast::<Arc<&str>>().ok().unwrap();
        assert_eq!(**produced, "str");
        assert_eq!(factory.output_type(), any::type_name::<Arc<&str>>());
    }

    #[test]
    fn closure_factory_produce_fails_when_closure_fails() {
        let factory = ClosureFactory::new(|| Err::<Arc<i32>, _>(TestError::Failed));

        let err = factory.dyn_produce().err().unwrap();
        assert!(err.downcast_ref::<TestError>().is_some());
    }

    #[test]
    fn optional_closure_factory_produce_succeeds_when_nothing_is_produced() {
        let factory = OptionalClosureFactory::new(|| Ok::<Option<Arc<i32>>, Infallible>(None));

        assert!(factory.produce().unwrap().is_none());
        assert!(factory.dyn_produce().unwrap().is_none());
        assert_eq!(factory.output_type(), any::type_name::<Arc<i32>>());
    }

    #[test]
    fn optional_closure_factory_produce_succeeds_when_value_is_produced() {
        let factory = OptionalClosureFactory::new(|| Ok::<_, Infallible>(Some(Arc::new(7))));

        assert_eq!(factory.produce().unwrap().as_deref(), Some(&7));
    }
}
