use std::any;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use snafu::prelude::*;
use tracing::debug;

use crate::container::core::ContainerCore;
use crate::container::dump::{BindingInfo, RegistryDump};
use crate::container::registry::{ModuleInnerSnafu, RegistryError};
use crate::container::resolver::{ResolveError, Resolver};
use crate::container::{Managed, SharedManaged};
use crate::factory::{Closure, ClosureFactory, Factory, OptionalClosureFactory};
use crate::module::Module;

/// A thread-safe registry of named singletons and factories.
///
/// Cloning a [`Container`] is cheap and yields another handle to the same
/// bindings. Resolution is offered through [`TypedResolver`], most notably
/// [`TypedResolver::ensure`].
///
/// # Examples
///
/// ```rust
/// # use std::convert::Infallible;
/// # use std::sync::Arc;
/// # use taginject::prelude::*;
/// struct Database;
/// struct Session;
///
/// #[derive(Default, Inject)]
/// struct Handler {
///     #[inject("db")]
///     db: Option<Arc<Database>>,
///     #[inject("session,prototype")]
///     session: Option<Arc<Session>>,
/// }
///
/// let container = Container::new();
/// container.register_singleton("db", Arc::new(Database));
/// container.register_factory("session", || Ok::<_, Infallible>(Arc::new(Session)));
///
/// let mut handler = Handler::default();
/// container.ensure(&mut handler).unwrap();
/// assert!(handler.db.is_some() && handler.session.is_some());
/// ```
///
/// [`TypedResolver`]: crate::container::resolver::TypedResolver
/// [`TypedResolver::ensure`]: crate::container::resolver::TypedResolver::ensure
#[derive(Clone)]
pub struct Container {
    core: Arc<ContainerCore>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            core: Arc::new(ContainerCore::new()),
        }
    }

    /// Binds a shared value to `name`, replacing any previous singleton of
    /// that name. Returns whether a binding was replaced.
    ///
    /// Consumers injected earlier keep the value they already received.
    pub fn register_singleton<T>(&self, name: impl Into<String>, singleton: T) -> bool
    where
        T: SharedManaged,
    {
        self.core.insert_singleton(name.into(), Box::new(singleton))
    }

    /// Binds a factory to `name`, replacing any previous factory of that name.
    /// Returns whether a binding was replaced.
    pub fn register_factory<C>(&self, name: impl Into<String>, factory: C) -> bool
    where
        C: Closure,
    {
        self.register_dyn_factory(name, Arc::new(ClosureFactory::new(factory)))
    }

    /// Like [`Container::register_factory`], but the factory may report that
    /// it has nothing to produce by returning `Ok(None)`.
    pub fn register_optional_factory<T, C>(&self, name: impl Into<String>, factory: C) -> bool
    where
        T: Managed,
        C: Closure<Produced = Option<T>>,
    {
        self.register_dyn_factory(name, Arc::new(OptionalClosureFactory::new(factory)))
    }

    pub fn register_dyn_factory(&self, name: impl Into<String>, factory: Arc<dyn Factory>) -> bool {
        self.core.insert_factory(name.into(), factory)
    }

    pub fn remove_singleton(&self, name: &str) -> bool {
        self.core.remove_singleton(name)
    }

    pub fn remove_factory(&self, name: &str) -> bool {
        self.core.remove_factory(name)
    }

    pub fn contains_singleton(&self, name: &str) -> bool {
        self.core.contains_singleton(name)
    }

    pub fn contains_factory(&self, name: &str) -> bool {
        self.core.contains_factory(name)
    }

    /// Lets `module` register its bindings on this container.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ModuleInner`] if the module reports an error.
    /// Bindings the module registered before failing are kept.
    pub fn install<M>(&self, module: M) -> Result<(), RegistryError>
    where
        M: Module,
    {
        let name = any::type_name::<M>();
        debug!(module = name, "installing module");
        module
            .configure(self)
            .context(ModuleInnerSnafu { module: name })
    }

    pub fn dump(&self) -> RegistryDump {
        self.core.dump()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let dump = self.dump();
        let names = |bindings: &[BindingInfo]| {
            bindings
                .iter()
                .map(|binding| binding.name().to_owned())
                .collect::<Vec<_>>()
        };
        f.debug_struct("Container")
            .field("singletons", &names(dump.singletons()))
            .field("factories", &names(dump.factories()))
            .finish()
    }
}

impl Resolver for Container {
    fn dyn_lookup_singleton(&self, name: &str) -> Option<Box<dyn Managed>> {
        self.core.dyn_lookup_singleton(name)
    }

    fn dyn_invoke_factory(&self, name: &str) -> Result<Option<Box<dyn Managed>>, ResolveError> {
        self.core.dyn_invoke_factory(name)
    }
}
