use std::sync::Arc;

use parking_lot::RwLock;
use snafu::prelude::*;
use tracing::debug;

use crate::container::dump::{BindingInfo, RegistryDump};
use crate::container::registry::BindingMap;
use crate::container::resolver::{FactoryNotFoundSnafu, ResolveError, Resolver};
use crate::container::{Managed, SharedManaged};
use crate::factory::Factory;

pub struct ContainerCore {
    singletons: RwLock<BindingMap<Box<dyn SharedManaged>>>,
    factories: RwLock<BindingMap<Arc<dyn Factory>>>,
}

impl ContainerCore {
    pub fn new() -> Self {
        Self {
            singletons: RwLock::new(BindingMap::new()),
            factories: RwLock::new(BindingMap::new()),
        }
    }

    pub fn insert_singleton(&self, name: String, singleton: Box<dyn SharedManaged>) -> bool {
        let type_name = (*singleton).type_name();
        let replaced = self.singletons.write().insert(name.clone(), singleton);
        if replaced.is_some() {
            debug!(binding = %name, value_type = type_name, "singleton replaced");
        } else {
            debug!(binding = %name, value_type = type_name, "singleton registered");
        }
        replaced.is_some()
    }

    pub fn insert_factory(&self, name: String, factory: Arc<dyn Factory>) -> bool {
        let output = factory.output_type();
        let replaced = self.factories.write().insert(name.clone(), factory);
        if replaced.is_some() {
            debug!(binding = %name, output, "factory replaced");
        } else {
            debug!(binding = %name, output, "factory registered");
        }
        replaced.is_some()
    }

    pub fn remove_singleton(&self, name: &str) -> bool {
        self.singletons.write().remove(name).is_some()
    }

    pub fn remove_factory(&self, name: &str) -> bool {
        self.factories.write().remove(name).is_some()
    }

    pub fn contains_singleton(&self, name: &str) -> bool {
        self.singletons.read().contains(name)
    }

    pub fn contains_factory(&self, name: &str) -> bool {
        self.factories.read().contains(name)
    }

    pub fn dump(&self) -> RegistryDump {
        let singletons = self
            .singletons
            .read()
            .iter_sorted()
            .map(|(name, singleton)| BindingInfo::new(name, (**singleton).type_name()))
            .collect();
        let factories = self
            .factories
            .read()
            .iter_sorted()
            .map(|(name, factory)| BindingInfo::new(name, factory.output_type()))
            .collect();
        RegistryDump::new(singletons, factories)
    }

    fn try_get_factory(&self, name: &str) -> Result<Arc<dyn Factory>, ResolveError> {
        let factories = self.factories.read();
        factories
            .get(name)
            .map(Arc::clone)
            .context(FactoryNotFoundSnafu { name })
    }
}

impl Resolver for ContainerCore {
    fn dyn_lookup_singleton(&self, name: &str) -> Option<Box<dyn Managed>> {
        let singletons = self.singletons.read();
        singletons
            .get(name)
            .map(|singleton| singleton.dyn_clone().upcast_managed())
    }

    fn dyn_invoke_factory(&self, name: &str) -> Result<Option<Box<dyn Managed>>, ResolveError> {
        // The guard is released before the factory runs, so a slow or
        // reentrant factory never holds up registrations.
        let factory = self.try_get_factory(name)?;
        factory
            .dyn_produce()
            .map_err(|err| ResolveError::FactoryExecution {
                name: name.to_owned(),
                source: Arc::from(err),
            })
    }
}
