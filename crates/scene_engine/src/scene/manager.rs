//! # Scene
//!
//! Owns nodes and components and performs every attach/detach so that a
//! component's target list and a node's component list never disagree.

use std::collections::HashMap;

use thiserror::Error;

use super::node::Node;
use crate::component::{CloneOption, Component, ComponentError, ComponentId, Layouts};
use crate::config::SceneSettings;
use crate::foundation::collections::{HandleMap, NodeId};

/// Scene errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// No node with this handle
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// No component with this id
    #[error("Component not found: {0:?}")]
    ComponentNotFound(ComponentId),

    /// Component bookkeeping error
    #[error(transparent)]
    Component(#[from] ComponentError),
}

/// Node arena and component store
pub struct Scene {
    nodes: HandleMap<NodeId, Node>,
    components: HashMap<ComponentId, Box<dyn Component>>,
    default_layout_mask: Layouts,
}

impl Scene {
    /// Create an empty scene with default settings
    pub fn new() -> Self {
        Self::with_settings(&SceneSettings::default())
    }

    /// Create an empty scene from settings
    pub fn with_settings(settings: &SceneSettings) -> Self {
        Self {
            nodes: HandleMap::with_key(),
            components: HashMap::new(),
            default_layout_mask: settings.layout_mask(),
        }
    }

    /// Layout mask new components should start with
    pub fn default_layout_mask(&self) -> Layouts {
        self.default_layout_mask
    }

    /// Create a node
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.nodes.insert(Node::new(name.into()));
        log::debug!("Created node {:?}", id);
        id
    }

    /// Remove a node, detaching every component first
    pub fn remove_node(&mut self, node: NodeId) -> Result<Node, SceneError> {
        let attached = self
            .nodes
            .get(node)
            .ok_or(SceneError::NodeNotFound(node))?
            .components
            .clone();

        for component in attached.into_iter().rev() {
            self.detach(node, component)?;
        }

        self.nodes
            .remove(node)
            .ok_or(SceneError::NodeNotFound(node))
    }

    /// Get a node
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    /// Set the layout groups of a node
    pub fn set_node_layouts(&mut self, node: NodeId, layouts: Layouts) -> Result<(), SceneError> {
        self.nodes
            .get_mut(node)
            .ok_or(SceneError::NodeNotFound(node))?
            .set_layouts(layouts);
        Ok(())
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Store a component without attaching it
    pub fn insert_component(&mut self, component: Box<dyn Component>) -> ComponentId {
        let id = component.id();
        log::debug!("Inserted component {:?} ({})", id, component.type_name());
        self.components.insert(id, component);
        id
    }

    /// Store a concrete component without attaching it
    pub fn insert<C: Component>(&mut self, component: C) -> ComponentId {
        self.insert_component(Box::new(component))
    }

    /// Remove a component, detaching it from every target first
    pub fn remove_component(&mut self, component: ComponentId) -> Result<Box<dyn Component>, SceneError> {
        let targets = self
            .components
            .get(&component)
            .ok_or(SceneError::ComponentNotFound(component))?
            .targets()
            .to_vec();

        for node in targets.into_iter().rev() {
            self.detach(node, component)?;
        }

        self.components
            .remove(&component)
            .ok_or(SceneError::ComponentNotFound(component))
    }

    /// Number of stored components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Get a component
    pub fn component(&self, component: ComponentId) -> Option<&(dyn Component + 'static)> {
        self.components.get(&component).map(Box::as_ref)
    }

    /// Get a component mutably
    pub fn component_mut(&mut self, component: ComponentId) -> Option<&mut (dyn Component + 'static)> {
        self.components.get_mut(&component).map(Box::as_mut)
    }

    /// Get a component as its concrete type
    pub fn component_as<T: Component>(&self, component: ComponentId) -> Option<&T> {
        self.component(component)?.downcast_ref::<T>()
    }

    /// Get a component mutably as its concrete type
    pub fn component_as_mut<T: Component>(&mut self, component: ComponentId) -> Option<&mut T> {
        self.component_mut(component)?.downcast_mut::<T>()
    }

    /// Components attached to a node, in attachment order
    pub fn components_of(
        &self,
        node: NodeId,
    ) -> Result<impl Iterator<Item = &(dyn Component + 'static)> + '_, SceneError> {
        let node = self.nodes.get(node).ok_or(SceneError::NodeNotFound(node))?;
        Ok(node
            .components
            .iter()
            .filter_map(|id| self.components.get(id).map(Box::as_ref)))
    }

    /// First component of type `T` attached to a node
    pub fn find_component<T: Component>(&self, node: NodeId) -> Option<ComponentId> {
        self.nodes
            .get(node)?
            .components
            .iter()
            .copied()
            .find(|id| self.component_as::<T>(*id).is_some())
    }

    /// Attach a component to a node
    ///
    /// The component's `target_added` signal fires once the node has been
    /// appended to its targets.
    pub fn attach(&mut self, node: NodeId, component: ComponentId) -> Result<(), SceneError> {
        let entry = self.nodes.get_mut(node).ok_or(SceneError::NodeNotFound(node))?;
        let target = self
            .components
            .get_mut(&component)
            .ok_or(SceneError::ComponentNotFound(component))?;

        if entry.has_component(component) {
            return Err(ComponentError::AlreadyAttached { component, node }.into());
        }

        entry.components.push(component);
        if let Err(err) = target.base_mut().add_target(node) {
            entry.components.retain(|id| *id != component);
            return Err(err.into());
        }

        log::debug!("Attached component {:?} to node {:?}", component, node);
        Ok(())
    }

    /// Detach a component from a node
    ///
    /// The component's `target_removed` signal fires once the node has been
    /// removed from its targets.
    pub fn detach(&mut self, node: NodeId, component: ComponentId) -> Result<(), SceneError> {
        let entry = self.nodes.get_mut(node).ok_or(SceneError::NodeNotFound(node))?;
        let target = self
            .components
            .get_mut(&component)
            .ok_or(SceneError::ComponentNotFound(component))?;

        if !entry.has_component(component) {
            return Err(ComponentError::NotAttached { component, node }.into());
        }

        entry.components.retain(|id| *id != component);
        target.base_mut().remove_target(node)?;

        log::debug!("Detached component {:?} from node {:?}", component, node);
        Ok(())
    }

    /// Clone a component and store the clone unattached
    pub fn clone_component(
        &mut self,
        component: ComponentId,
        option: CloneOption,
    ) -> Result<ComponentId, SceneError> {
        let clone = self
            .components
            .get(&component)
            .ok_or(SceneError::ComponentNotFound(component))?
            .clone_component(option)?;

        Ok(self.insert_component(clone))
    }

    /// Whether the component's layout mask intersects the node's layouts
    pub fn is_compatible(&self, component: ComponentId, node: NodeId) -> Result<bool, SceneError> {
        let node = self.nodes.get(node).ok_or(SceneError::NodeNotFound(node))?;
        let component = self
            .components
            .get(&component)
            .ok_or(SceneError::ComponentNotFound(component))?;

        Ok(component.layout_mask().overlaps(node.layouts()))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
