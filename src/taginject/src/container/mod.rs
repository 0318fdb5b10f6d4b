pub mod registry;
pub mod resolver;

mod core;
mod dump;
mod handle;

use std::sync::Arc;

use crate::util::any::AsAny;

pub use dump::{BindingInfo, RegistryDump};
pub use handle::Container;

/// A type-erased value travelling between the registries and a consumer.
///
/// Factories hand their output to the container as a `Box<dyn Managed>`, and
/// singleton lookups return one too. [`ensure`] then recovers the concrete
/// type through [`AsAny`] and reports the registered type name when it
/// doesn't fit the field.
///
/// [`ensure`]: crate::container::resolver::TypedResolver::ensure
pub trait Managed: AsAny + Send + Sync + 'static {}

impl<T> Managed for T where T: AsAny + Send + Sync + 'static {}

/// A [`Managed`] value that can be handed out to several consumers while
/// still referring to one underlying object.
///
/// Only [`Arc`] implements it, which makes every singleton injection an
/// identity-preserving pointer copy.
pub trait SharedManaged: Managed {
    /// Clones the handle, not the object behind it.
    fn dyn_clone(&self) -> Box<dyn SharedManaged>;

    fn upcast_managed(self: Box<Self>) -> Box<dyn Managed>;
}

impl<T> SharedManaged for Arc<T>
where
    T: Send + Sync + ?Sized + 'static,
{
    fn dyn_clone(&self) -> Box<dyn SharedManaged> {
        Box::new(Arc::clone(self))
    }

    fn upcast_managed(self: Box<Self>) -> Box<dyn Managed> {
        self
    }
}
