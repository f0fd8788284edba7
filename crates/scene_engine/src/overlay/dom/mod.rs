//! DOM bridge
//!
//! Native handles for DOM objects that live inside an embedded script engine.
//! Each handle is just an accessor string (a JavaScript expression such as
//! `Module.events[3]`) and every operation is a synchronous round-trip through
//! [`ScriptEngine`]. All string evaluation stays behind that trait.

mod element;
mod event;
#[cfg(feature = "quickjs")]
mod quickjs;
mod script;

pub use element::{DomElement, DomElementRegistry, ScriptDomElement};
pub use event::{DomEvent, ScriptDomEvent};
#[cfg(feature = "quickjs")]
pub use quickjs::QuickJsEngine;
pub use script::{ScriptEngine, ScriptError};

use thiserror::Error;

/// DOM bridge errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The script engine failed to evaluate the generated expression
    #[error(transparent)]
    Script(#[from] ScriptError),
}
