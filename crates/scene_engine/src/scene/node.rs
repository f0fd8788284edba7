//! Scene node

use crate::component::{ComponentId, Layouts};

/// A node in the scene arena
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    layouts: Layouts,
    pub(super) components: Vec<ComponentId>,
}

impl Node {
    pub(super) fn new(name: String) -> Self {
        Self {
            name,
            layouts: Layouts::DEFAULT,
            components: Vec::new(),
        }
    }

    /// Get the node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Layout groups the node belongs to
    pub fn layouts(&self) -> Layouts {
        self.layouts
    }

    pub(super) fn set_layouts(&mut self, layouts: Layouts) {
        self.layouts = layouts;
    }

    /// Components attached to this node, in attachment order
    pub fn components(&self) -> &[ComponentId] {
        &self.components
    }

    /// Whether the component is attached to this node
    pub fn has_component(&self, component: ComponentId) -> bool {
        self.components.contains(&component)
    }
}
