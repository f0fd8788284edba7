//! Shared bookkeeping embedded by every component

use std::sync::atomic::{AtomicU64, Ordering};

use super::{ComponentError, Layouts};
use crate::foundation::collections::NodeId;
use crate::signal::Signal;

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);

/// Component identifier, unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId {
    id: u64,
}

impl ComponentId {
    fn next() -> Self {
        Self {
            id: NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Get the raw identifier
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Payload of the target-added and target-removed signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetChange {
    /// Component whose target list changed
    pub component: ComponentId,
    /// Node that was attached or detached
    pub target: NodeId,
}

/// Payload of the layout-mask-changed signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMaskChange {
    /// Component whose mask changed
    pub component: ComponentId,
    /// Mask before the change
    pub previous: Layouts,
    /// Mask after the change
    pub current: Layouts,
}

/// State common to all components
///
/// Concrete components embed a `ComponentBase` and expose it through
/// [`super::Component::base`]. Targets are only ever added or removed by the
/// owning [`crate::scene::Scene`].
#[derive(Debug)]
pub struct ComponentBase {
    id: ComponentId,
    targets: Vec<NodeId>,
    layout_mask: Layouts,
    target_added: Signal<TargetChange>,
    target_removed: Signal<TargetChange>,
    layout_mask_changed: Signal<LayoutMaskChange>,
}

impl ComponentBase {
    /// Create a detached base with the given layout mask
    pub fn new(layout_mask: Layouts) -> Self {
        Self {
            id: ComponentId::next(),
            targets: Vec::new(),
            layout_mask,
            target_added: Signal::new(),
            target_removed: Signal::new(),
            layout_mask_changed: Signal::new(),
        }
    }

    /// Create the base of a clone of `source`
    ///
    /// Only the layout mask is carried over. The clone gets a new identity,
    /// no targets and signals without subscribers.
    pub fn cloned_from(source: &Self) -> Self {
        Self::new(source.layout_mask)
    }

    /// Get the component identity
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Nodes this component is attached to, in attachment order
    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    /// Number of nodes this component is attached to
    pub fn num_targets(&self) -> usize {
        self.targets.len()
    }

    /// Get the target at `index`
    pub fn target(&self, index: usize) -> Result<NodeId, ComponentError> {
        self.targets
            .get(index)
            .copied()
            .ok_or(ComponentError::TargetIndexOutOfRange {
                index,
                len: self.targets.len(),
            })
    }

    /// Whether `node` is one of the targets
    pub fn has_target(&self, node: NodeId) -> bool {
        self.targets.contains(&node)
    }

    /// Get the layout mask
    pub fn layout_mask(&self) -> Layouts {
        self.layout_mask
    }

    /// Set the layout mask
    ///
    /// Emits `layout_mask_changed` and returns `true` only when the value
    /// actually changes.
    pub fn set_layout_mask(&mut self, value: Layouts) -> bool {
        if self.layout_mask == value {
            return false;
        }

        let previous = self.layout_mask;
        self.layout_mask = value;
        self.layout_mask_changed.execute(&LayoutMaskChange {
            component: self.id,
            previous,
            current: value,
        });
        true
    }

    /// Signal emitted after a node was added to the targets
    pub fn target_added(&self) -> &Signal<TargetChange> {
        &self.target_added
    }

    /// Signal emitted after a node was removed from the targets
    pub fn target_removed(&self) -> &Signal<TargetChange> {
        &self.target_removed
    }

    /// Signal emitted after the layout mask changed
    pub fn layout_mask_changed(&self) -> &Signal<LayoutMaskChange> {
        &self.layout_mask_changed
    }

    pub(crate) fn add_target(&mut self, node: NodeId) -> Result<(), ComponentError> {
        if self.has_target(node) {
            return Err(ComponentError::AlreadyAttached {
                component: self.id,
                node,
            });
        }

        self.targets.push(node);
        self.target_added.execute(&TargetChange {
            component: self.id,
            target: node,
        });
        Ok(())
    }

    pub(crate) fn remove_target(&mut self, node: NodeId) -> Result<(), ComponentError> {
        let position = self
            .targets
            .iter()
            .position(|target| *target == node)
            .ok_or(ComponentError::NotAttached {
                component: self.id,
                node,
            })?;

        self.targets.remove(position);
        self.target_removed.execute(&TargetChange {
            component: self.id,
            target: node,
        });
        Ok(())
    }
}

impl Default for ComponentBase {
    fn default() -> Self {
        Self::new(Layouts::EVERYTHING)
    }
}
