use std::fmt::{Display, Formatter, Result as FmtResult};

/// A snapshot of a container's bindings, for debugging only.
///
/// The rendering is meant for humans and may change at any time:
///
/// ```text
/// singletons:
///   db: alloc::sync::Arc<demo::Database>
/// factories:
///   b: alloc::sync::Arc<demo::B>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryDump {
    singletons: Vec<BindingInfo>,
    factories: Vec<BindingInfo>,
}

impl RegistryDump {
    pub(super) fn new(singletons: Vec<BindingInfo>, factories: Vec<BindingInfo>) -> Self {
        Self {
            singletons,
            factories,
        }
    }

    /// Singleton bindings with the type of each stored value, sorted by name.
    pub fn singletons(&self) -> &[BindingInfo] {
        &self.singletons
    }

    /// Factory bindings with the type each factory produces, sorted by name.
    pub fn factories(&self) -> &[BindingInfo] {
        &self.factories
    }
}

impl Display for RegistryDump {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "singletons:")?;
        for binding in &self.singletons {
            writeln!(f, "  {binding}")?;
        }
        writeln!(f, "factories:")?;
        for binding in &self.factories {
            writeln!(f, "  {binding}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingInfo {
    name: String,
    type_name: &'static str,
}

impl BindingInfo {
    pub(super) fn new(name: &str, type_name: &'static str) -> Self {
        Self {
            name: name.to_owned(),
            type_name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Display for BindingInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.name, self.type_name)
    }
}
