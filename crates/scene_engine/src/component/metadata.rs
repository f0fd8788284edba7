//! Metadata component
//!
//! String properties that tools and scripts attach to nodes. The property
//! table is reference counted so that shallow clones can share it.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{CloneOption, CloneableComponent, Component, ComponentBase, Layouts};

/// Key/value property component
#[derive(Debug, Default)]
pub struct Metadata {
    base: ComponentBase,
    properties: Rc<RefCell<HashMap<String, String>>>,
}

impl Metadata {
    /// Create an empty metadata component
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty metadata component with a specific layout mask
    pub fn with_layout_mask(layout_mask: Layouts) -> Self {
        Self {
            base: ComponentBase::new(layout_mask),
            properties: Rc::default(),
        }
    }

    /// Get a property value
    pub fn get(&self, key: &str) -> Option<String> {
        self.properties.borrow().get(key).cloned()
    }

    /// Set a property, returning the previous value
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.borrow_mut().insert(key.into(), value.into())
    }

    /// Remove a property, returning its value
    pub fn remove(&self, key: &str) -> Option<String> {
        self.properties.borrow_mut().remove(key)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.borrow().len()
    }

    /// Whether there are no properties
    pub fn is_empty(&self) -> bool {
        self.properties.borrow().is_empty()
    }

    /// Whether both components read and write the same property table
    pub fn shares_properties_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.properties, &other.properties)
    }
}

impl Component for Metadata {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_cloneable(&self) -> Option<&dyn CloneableComponent> {
        Some(self)
    }
}

impl CloneableComponent for Metadata {
    fn clone_with(&self, option: CloneOption) -> Box<dyn Component> {
        let properties = match option {
            CloneOption::Shallow => Rc::clone(&self.properties),
            CloneOption::Deep => Rc::new(RefCell::new(self.properties.borrow().clone())),
        };

        Box::new(Self {
            base: ComponentBase::cloned_from(&self.base),
            properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metadata {
        let metadata = Metadata::new();
        metadata.set("name", "turret");
        metadata
    }

    #[test]
    fn test_properties() {
        let metadata = sample();
        assert_eq!(metadata.get("name").as_deref(), Some("turret"));
        assert_eq!(metadata.set("name", "tower").as_deref(), Some("turret"));
        assert_eq!(metadata.remove("name").as_deref(), Some("tower"));
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_shallow_clone_shares_properties() {
        let source = sample();
        let clone = source.clone_component(CloneOption::Shallow).unwrap();
        let clone = clone.downcast_ref::<Metadata>().unwrap();

        assert!(clone.shares_properties_with(&source));
        clone.set("team", "red");
        assert_eq!(source.get("team").as_deref(), Some("red"));
    }

    #[test]
    fn test_deep_clone_copies_properties() {
        let source = sample();
        let clone = source.clone_component(CloneOption::Deep).unwrap();
        let clone = clone.downcast_ref::<Metadata>().unwrap();

        assert!(!clone.shares_properties_with(&source));
        assert_eq!(clone.get("name").as_deref(), Some("turret"));
        clone.set("team", "blue");
        assert_eq!(source.get("team"), None);
        assert_eq!(source.len(), 1);
    }
}
