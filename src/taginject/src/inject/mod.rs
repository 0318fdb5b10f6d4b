mod slot;
mod tag;

pub use slot::Slot;
pub use tag::{Policy, Tag};

use crate::container::Managed;

/// A consumer record whose fields can be populated by a container.
///
/// Implementors list their injection points in field declaration order. The
/// list is rebuilt on every call, so each point borrows its field only for the
/// duration of one [`ensure`] pass.
///
/// Usually this is derived with [`#[derive(Inject)]`](crate::Inject), but a
/// manual implementation is just as valid:
///
/// ```rust
/// # use std::sync::Arc;
/// # use taginject::inject::{Injectable, InjectionPoint};
/// struct Handler {
///     db: Option<Arc<String>>,
///     retries: u32,
/// }
///
/// impl Injectable for Handler {
///     fn injection_points(&mut self) -> Vec<InjectionPoint<'_>> {
///         vec![InjectionPoint::new("db", "db", &mut self.db)]
///     }
/// }
/// ```
///
/// [`ensure`]: crate::container::resolver::TypedResolver::ensure
pub trait Injectable {
    fn injection_points(&mut self) -> Vec<InjectionPoint<'_>>;
}

/// One annotated field of a consumer.
pub struct InjectionPoint<'a> {
    field: &'static str,
    annotation: &'static str,
    slot: &'a mut dyn Slot,
}

impl<'a> InjectionPoint<'a> {
    pub fn new(field: &'static str, annotation: &'static str, slot: &'a mut dyn Slot) -> Self {
        Self {
            field,
            annotation,
            slot,
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn annotation(&self) -> &'static str {
        self.annotation
    }

    /// Parses the raw annotation, returning `None` if the field opts out.
    pub fn tag(&self) -> Option<Tag<'static>> {
        Tag::parse(self.annotation)
    }

    pub fn expected_type(&self) -> &'static str {
        self.slot.expected_type()
    }

    /// Writes `value` into the field. The value is handed back if its type
    /// doesn't match the field, in which case the field is left untouched.
    pub fn assign(self, value: Box<dyn Managed>) -> Result<(), Box<dyn Managed>> {
        self.slot.assign(value)
    }
}
