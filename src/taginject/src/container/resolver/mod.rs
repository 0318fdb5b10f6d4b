mod ensure;

use std::error::Error;
use std::sync::Arc;

use snafu::prelude::*;

use crate::container::Managed;
use crate::inject::Injectable;
use crate::util::any::Downcast;

/// Read access to the bindings of a container.
#[cfg_attr(test, mockall::automock)]
pub trait Resolver: Send + Sync {
    /// Looks up the shared value bound to `name`. Absence is not an error here;
    /// the caller decides what it means.
    fn dyn_lookup_singleton(&self, name: &str) -> Option<Box<dyn Managed>>;

    /// Invokes the factory bound to `name` once.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::FactoryNotFound`] if no factory is bound to
    /// `name`, or [`ResolveError::FactoryExecution`] carrying the factory's
    /// own error.
    fn dyn_invoke_factory(&self, name: &str) -> Result<Option<Box<dyn Managed>>, ResolveError>;
}

pub trait TypedResolver: Resolver {
    /// Populates every annotated field of `consumer` in declaration order.
    ///
    /// Fields without an annotation are left alone. Singleton fields receive
    /// the registered shared value, prototype fields a freshly produced one.
    /// The first failure aborts the walk; fields assigned before it keep their
    /// new values.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::FactoryNotFound`],
    /// [`ResolveError::FactoryExecution`],
    /// [`ResolveError::DependencyNotFound`] or [`ResolveError::TypeMismatch`]
    /// for the first field that couldn't be populated.
    fn ensure<C>(&self, consumer: &mut C) -> Result<(), ResolveError>
    where
        C: Injectable + ?Sized,
    {
        ensure::ensure(self, consumer)
    }

    /// Fetches the shared value bound to `name` as a `T`.
    fn get_singleton<T>(&self, name: &str) -> Result<T, ResolveError>
    where
        T: Managed,
    {
        let object = self
            .dyn_lookup_singleton(name)
            .context(DependencyNotFoundSnafu { name })?;
        downcast_resolved(name, object)
    }

    /// Produces a new value from the factory bound to `name` as a `T`.
    fn get_prototype<T>(&self, name: &str) -> Result<T, ResolveError>
    where
        T: Managed,
    {
        let object = self
            .dyn_invoke_factory(name)?
            .context(DependencyNotFoundSnafu { name })?;
        downcast_resolved(name, object)
    }
}

impl<T: Resolver + ?Sized> TypedResolver for T {}

fn downcast_resolved<T: Managed>(name: &str, object: Box<dyn Managed>) -> Result<T, ResolveError> {
    object
        .downcast::<T>()
        .map(|object| *object)
        .map_err(|rejected| ResolveError::TypeMismatch {
            name: name.to_owned(),
            field: None,
            expected: std::any::type_name::<T>(),
            found: (*rejected).type_name(),
        })
}

#[derive(Debug, Clone, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum ResolveError {
    #[snafu(display("could not find any factory bound to `{name}`"))]
    #[non_exhaustive]
    FactoryNotFound { name: String },
    #[snafu(display("could not find the dependency `{name}`"))]
    #[non_exhaustive]
    DependencyNotFound { name: String },
    #[snafu(display("could not produce a value from the factory bound to `{name}`"))]
    #[non_exhaustive]
    FactoryExecution {
        name: String,
        source: Arc<dyn Error + Send + Sync>,
    },
    #[snafu(display(
        "could not inject a {found} bound to `{name}` into {} of {expected}",
        mismatch_target(*field)
    ))]
    #[non_exhaustive]
    TypeMismatch {
        name: String,
        /// The consumer field being populated, if the value was headed for one.
        field: Option<&'static str>,
        expected: &'static str,
        found: &'static str,
    },
}

fn mismatch_target(field: Option<&str>) -> String {
    match field {
        Some(field) => format!("the field `{field}`"),
        None => String::from("a value"),
    }
}

impl ResolveError {
    /// Returns the name of the binding that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            Self::FactoryNotFound { name }
            | Self::DependencyNotFound { name }
            | Self::FactoryExecution { name, .. }
            | Self::TypeMismatch { name, .. } => name,
        }
    }

    /// Returns the error reported by a failing factory, exactly as the factory
    /// returned it.
    pub fn factory_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::FactoryExecution { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any;

    use super::*;

    #[derive(Debug, Snafu)]
    enum TestError {
        #[snafu(display("test error"))]
        Failed,
    }

    #[test]
    fn typed_resolver_get_singleton_succeeds() {
        let value = Arc::new(42i32);
        let mut resolver = MockResolver::new();
        resolver.expect_dyn_lookup_singleton().returning({
            let value = Arc::clone(&value);
            move |_| Some(Box::new(Arc::clone(&value)))
        });

        let object: Arc<i32> = resolver.get_singleton("answer").unwrap();
        assert!(Arc::ptr_eq(&object, &value));
    }

    #[test]
    fn typed_resolver_get_singleton_fails_when_not_found() {
        let mut resolver = MockResolver::new();
        resolver.expect_dyn_lookup_singleton().returning(|_| None);

        let res: Result<Arc<i32>, _> = resolver.get_singleton("answer");
        assert!(matches!(
            res,
            Err(ResolveError::DependencyNotFound { name, .. }) if name == "answer"
        ));
    }

    #[test]
    fn typed_resolver_get_singleton_fails_when_type_differs() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_dyn_lookup_singleton()
            .returning(|_| Some(Box::new(Arc::new("str"))));

        let err = resolver.get_singleton::<Arc<i32>>("answer").unwrap_err();
        let ResolveError::TypeMismatch {
            field,
            expected,
            found,
            ..
        } = &err
        else {
            panic!("expected a type mismatch, got {err}");
        };
        assert_eq!(*field, None);
        assert_eq!(*expected, any::type_name::<Arc<i32>>());
        assert_eq!(*found, any::type_name::<Arc<&str>>());
    }

    #[test]
    fn typed_resolver_get_prototype_succeeds() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_dyn_invoke_factory()
            .times(2)
            .returning(|_| Ok(Some(Box::new(Arc::new(0u8)))));

        let first: Arc<u8> = resolver.get_prototype("zero").unwrap();
        let second: Arc<u8> = resolver.get_prototype("zero").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn typed_resolver_get_prototype_fails_when_nothing_is_produced() {
        let mut resolver = MockResolver::new();
        resolver.expect_dyn_invoke_factory().returning(|_| Ok(None));

        let res: Result<Arc<u8>, _> = resolver.get_prototype("zero");
        assert!(matches!(res, Err(ResolveError::DependencyNotFound { .. })));
    }

    #[test]
    fn resolve_error_factory_error_succeeds() {
        let err = ResolveError::FactoryExecution {
            name: String::from("b"),
            source: Arc::new(TestError::Failed),
        };

        assert_eq!(err.name(), "b");
        assert!(err
            .factory_error()
            .is_some_and(|source| source.downcast_ref::<TestError>().is_some()));
        assert!(ResolveError::FactoryNotFound {
            name: String::from("b")
        }
        .factory_error()
        .is_none());
    }
}
