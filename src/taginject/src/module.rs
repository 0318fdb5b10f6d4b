use std::error::Error;

use crate::container::Container;

/// A group of bindings registered together.
///
/// Modules are the application-level configuration path: the top of the
/// program builds one [`Container`], installs its modules with
/// [`Container::install`] and passes the container down explicitly.
///
/// # Examples
///
/// ```rust
/// # use std::convert::Infallible;
/// # use std::error::Error;
/// # use std::sync::Arc;
/// # use taginject::prelude::*;
/// struct StorageModule {
///     dsn: String,
/// }
///
/// impl Module for StorageModule {
///     fn configure(&self, container: &Container) -> Result<(), Box<dyn Error + Send + Sync>> {
///         if self.dsn.is_empty() {
///             return Err("the storage DSN must not be empty".into());
///         }
///         container.register_singleton("dsn", Arc::new(self.dsn.clone()));
///         Ok(())
///     }
/// }
///
/// let container = Container::new();
/// container.install(StorageModule { dsn: String::from("root@localhost") }).unwrap();
/// assert!(container.install(StorageModule { dsn: String::new() }).is_err());
/// ```
pub trait Module {
    /// Registers this module's bindings on `container`.
    ///
    /// # Errors
    ///
    /// Returns an error if the module can't finish its configuration.
    fn configure(&self, container: &Container) -> Result<(), Box<dyn Error + Send + Sync>>;
}
