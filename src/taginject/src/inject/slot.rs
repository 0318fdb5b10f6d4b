use std::any;

use crate::container::Managed;
use crate::util::any::Downcast;

/// A type-checked storage location for an injected value.
///
/// `Option<T>` is the canonical slot: `None` stands for a field that has not
/// been injected yet.
pub trait Slot {
    fn assign(&mut self, value: Box<dyn Managed>) -> Result<(), Box<dyn Managed>>;

    fn expected_type(&self) -> &'static str;
}

impl<T: Managed> Slot for Option<T> {
    fn assign(&mut self, value: Box<dyn Managed>) -> Result<(), Box<dyn Managed>> {
        let value = value.downcast::<T>()?;
        *self = Some(*value);
        Ok(())
    }

    fn expected_type(&self) -> &'static str {
        any::type_name::<T>()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn option_slot_assign_succeeds() {
        let value = Arc::new(42i32);
        let mut slot: Option<Arc<i32>> = None;

        assert!(slot.assign(Box::new(Arc::clone(&value))).is_ok());
        assert!(Arc::ptr_eq(slot.as_ref().unwrap(), &value));

        assert!(slot.assign(Box::new(Arc::new(0i32))).is_ok());
        assert_eq!(slot.as_deref(), Some(&0));
    }

    #[test]
    fn option_slot_assign_fails_when_type_differs() {
        let mut slot: Option<Arc<i32>> = Some(Arc::new(1));

        let rejected = slot.assign(Box::new(Arc::new("str"))).unwrap_err();
        assert_eq!((*rejected).type_name(), any::type_name::<Arc<&str>>());
        assert_eq!(slot.as_deref(), Some(&1));
    }

    #[test]
    fn option_slot_expected_type_succeeds() {
        let slot: Option<Arc<String>> = None;
        assert_eq!(slot.expected_type(), any::type_name::<Arc<String>>());
    }
}
