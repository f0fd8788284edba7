//! Scene management
//!
//! A minimal node arena that owns components and attaches them to nodes.
//! Nodes are addressed by [`NodeId`] handles and components by
//! [`ComponentId`]; neither side holds owning references to the other.
//!
//! ```text
//! Scene
//!  ├── nodes:      NodeId      -> Node { components: [ComponentId] }
//!  └── components: ComponentId -> Box<dyn Component> { targets: [NodeId] }
//! ```
//!
//! Attaching and detaching go through the scene, which keeps both lists in
//! sync and lets the component emit its target signals.

mod manager;
mod node;

pub use manager::{Scene, SceneError};
pub use node::Node;

pub use crate::foundation::collections::NodeId;
