mod closure;

use std::any;
use std::error::Error;
use std::fmt::Debug;

use crate::container::Managed;

pub use closure::{Closure, ClosureFactory, OptionalClosureFactory};

/// A zero-argument producer of type-erased values, backing a prototype
/// binding.
///
/// A [`Factory`] is invoked once per resolution and must hand out a new value
/// on each call. The container owns the factory but never the values it
/// produces; those belong to whichever consumer receives them.
///
/// Usually you don't need to implement [`Factory`] manually, since this is
/// automatically done by [`TypedFactory`]'s blanket implementation.
pub trait Factory: Debug + Send + Sync + 'static {
    /// Produces a new type-erased value.
    ///
    /// `Ok(None)` means the factory ran successfully but had nothing to offer,
    /// which the resolver reports as a missing dependency.
    ///
    /// # Errors
    ///
    /// Returns the factory's own error unchanged.
    fn dyn_produce(&self) -> Result<Option<Box<dyn Managed>>, Box<dyn Error + Send + Sync>>;

    /// Returns the name of the type this factory produces.
    fn output_type(&self) -> &'static str;
}

/// A static variant of the [`Factory`] trait.
pub trait TypedFactory: Factory {
    /// The type of each produced value.
    type Output: Managed;

    /// Produces a new value of type [`TypedFactory::Output`].
    ///
    /// # Errors
    ///
    /// Returns the factory's own error unchanged.
    fn produce(&self) -> Result<Option<Self::Output>, Box<dyn Error + Send + Sync>>;
}

impl<T: TypedFactory> Factory for T {
    fn dyn_produce(&self) -> Result<Option<Box<dyn Managed>>, Box<dyn Error + Send + Sync>> {
        self.produce()
            .map(|produced| produced.map(|obj| -> Box<dyn Managed> { Box::new(obj) }))
    }

    fn output_type(&self) -> &'static str {
        any::type_name::<T::Output>()
    }
}
