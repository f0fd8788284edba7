//! Scene components
//!
//! A component is a unit of state or behavior attached to zero or more scene
//! nodes. Every component embeds a [`ComponentBase`] that tracks its targets,
//! its layout mask and the signals announcing changes to both.
//!
//! Duplication is a capability: components that can be copied implement
//! [`CloneableComponent`] and return themselves from
//! [`Component::as_cloneable`]. Asking any other component for a clone yields
//! [`ComponentError::CloneUnsupported`].

mod base;
mod layout;
pub mod metadata;
pub mod transform;

pub use base::{ComponentBase, ComponentId, LayoutMaskChange, TargetChange};
pub use layout::Layouts;
pub use metadata::Metadata;
pub use transform::Transform;

use std::any::Any;

use thiserror::Error;

use crate::foundation::collections::NodeId;
use crate::signal::Signal;

/// How a component duplication treats shared payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneOption {
    /// Share reference-counted payloads with the source
    Shallow,
    /// Copy every payload
    Deep,
}

/// Component errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// Target index past the end of the target list
    #[error("Target index {index} out of range (component has {len} targets)")]
    TargetIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of targets
        len: usize,
    },

    /// The component does not support duplication
    #[error("Missing clone function for component {type_name}")]
    CloneUnsupported {
        /// Concrete component type
        type_name: &'static str,
    },

    /// The node is already a target of the component
    #[error("Component {component:?} is already attached to node {node:?}")]
    AlreadyAttached {
        /// Component being attached
        component: ComponentId,
        /// Node it is already attached to
        node: NodeId,
    },

    /// The node is not a target of the component
    #[error("Component {component:?} is not attached to node {node:?}")]
    NotAttached {
        /// Component being detached
        component: ComponentId,
        /// Node it is not attached to
        node: NodeId,
    },
}

/// Duplication capability
pub trait CloneableComponent {
    /// Produce a detached copy of this component
    fn clone_with(&self, option: CloneOption) -> Box<dyn Component>;
}

/// Anything attachable to a scene node
pub trait Component: Any {
    /// Shared bookkeeping
    fn base(&self) -> &ComponentBase;

    /// Mutable shared bookkeeping
    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Downcast support
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Duplication capability, if the component supports it
    fn as_cloneable(&self) -> Option<&dyn CloneableComponent> {
        None
    }

    /// Concrete type name, used in diagnostics
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Get the component identity
    fn id(&self) -> ComponentId {
        self.base().id()
    }

    /// Nodes this component is attached to
    fn targets(&self) -> &[NodeId] {
        self.base().targets()
    }

    /// Number of nodes this component is attached to
    fn num_targets(&self) -> usize {
        self.base().num_targets()
    }

    /// Get the target at `index`
    fn target(&self, index: usize) -> Result<NodeId, ComponentError> {
        self.base().target(index)
    }

    /// Get the layout mask
    fn layout_mask(&self) -> Layouts {
        self.base().layout_mask()
    }

    /// Set the layout mask, notifying subscribers on change
    fn set_layout_mask(&mut self, value: Layouts) {
        self.base_mut().set_layout_mask(value);
    }

    /// Signal emitted after a node was added to the targets
    fn target_added(&self) -> &Signal<TargetChange> {
        self.base().target_added()
    }

    /// Signal emitted after a node was removed from the targets
    fn target_removed(&self) -> &Signal<TargetChange> {
        self.base().target_removed()
    }

    /// Signal emitted after the layout mask changed
    fn layout_mask_changed(&self) -> &Signal<LayoutMaskChange> {
        self.base().layout_mask_changed()
    }

    /// Duplicate the component
    fn clone_component(&self, option: CloneOption) -> Result<Box<dyn Component>, ComponentError> {
        match self.as_cloneable() {
            Some(cloneable) => Ok(cloneable.clone_with(option)),
            None => Err(ComponentError::CloneUnsupported {
                type_name: self.type_name(),
            }),
        }
    }
}

impl dyn Component {
    /// Borrow as a concrete component type
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow as a concrete component type
    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
