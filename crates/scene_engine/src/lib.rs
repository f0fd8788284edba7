//! # Scene Engine
//!
//! Scene components with change signals, and the DOM event bridge of the
//! HTML overlay.
//!
//! ## Features
//!
//! - **Components**: attachable units of state with target bookkeeping,
//!   layout masks and change signals
//! - **Signals**: synchronous multi-subscriber broadcast channels
//! - **Scene**: node arena that attaches and detaches components
//! - **HTML Overlay**: DOM events and elements living in an embedded script
//!   engine (QuickJS with the `quickjs` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! let mut scene = Scene::new();
//! let node = scene.create_node("ship");
//! let transform = scene.insert(Transform::identity());
//!
//! let slot = scene
//!     .component(transform)
//!     .unwrap()
//!     .target_added()
//!     .connect(|change: &TargetChange| println!("attached to {:?}", change.target));
//!
//! scene.attach(node, transform).unwrap();
//! assert_eq!(scene.component(transform).unwrap().num_targets(), 1);
//! drop(slot);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod signal;
pub mod component;
pub mod scene;
pub mod overlay;

mod engine;

pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineError,
        config::{Config, EngineSettings, OverlaySettings, SceneSettings},
        signal::{Signal, SignalSlot},
        component::{
            CloneOption, CloneableComponent, Component, ComponentBase, ComponentError,
            ComponentId, LayoutMaskChange, Layouts, Metadata, TargetChange, Transform,
        },
        scene::{Node, NodeId, Scene, SceneError},
        overlay::dom::{
            DomElement, DomElementRegistry, DomError, DomEvent, ScriptDomElement,
            ScriptDomEvent, ScriptEngine, ScriptError,
        },
    };
}
