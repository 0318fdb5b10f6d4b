mod binding_map;

use std::error::Error;

use snafu::prelude::*;

pub(super) use binding_map::BindingMap;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum RegistryError {
    #[snafu(display("module {module} fails to configure the container"))]
    #[non_exhaustive]
    ModuleInner {
        module: &'static str,
        source: Box<dyn Error + Send + Sync>,
    },
}
