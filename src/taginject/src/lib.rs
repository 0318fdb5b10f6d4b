#![allow(clippy::new_without_default)]

pub mod container;
pub mod factory;
pub mod inject;
pub mod module;
mod util;

pub use taginject_derive::Inject;

pub mod prelude {
    pub use crate::container::registry::RegistryError;
    pub use crate::container::resolver::{ResolveError, Resolver, TypedResolver};
    pub use crate::container::Container;
    pub use crate::inject::{Injectable, InjectionPoint};
    pub use crate::module::Module;
    pub use crate::Inject;
}
