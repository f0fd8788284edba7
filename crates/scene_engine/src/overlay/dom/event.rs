//! DOM event handles

use std::fmt;
use std::rc::Rc;

use super::{DomElement, DomElementRegistry, DomError, ScriptEngine};
use crate::config::OverlaySettings;

/// Native view of a DOM event
pub trait DomEvent {
    /// Ask the host not to run the default action
    fn prevent_default(&self) -> Result<(), DomError>;

    /// Stop the event from reaching further listeners
    fn stop_propagation(&self) -> Result<(), DomError>;

    /// Event type, e.g. `click`
    fn event_type(&self) -> Result<String, DomError>;

    /// Element the event was dispatched to
    fn target(&self) -> Rc<dyn DomElement>;
}

/// DOM event backed by a script accessor
pub struct ScriptDomEvent {
    accessor: String,
    engine: Rc<dyn ScriptEngine>,
    elements: Rc<DomElementRegistry>,
}

impl ScriptDomEvent {
    /// Wrap the event found at `accessor`
    pub fn new(accessor: impl Into<String>, elements: Rc<DomElementRegistry>) -> Self {
        Self {
            accessor: accessor.into(),
            engine: Rc::clone(elements.engine()),
            elements,
        }
    }

    /// Wrap the event the host is currently dispatching
    pub fn current(settings: &OverlaySettings, elements: Rc<DomElementRegistry>) -> Self {
        Self::new(settings.event_accessor.clone(), elements)
    }

    /// Script expression that evaluates to the event
    pub fn accessor(&self) -> &str {
        &self.accessor
    }

    fn call(&self, method: &str) -> Result<(), DomError> {
        let script = format!("{}.{}()", self.accessor, method);
        log::trace!("Evaluating {}", script);
        Ok(self.engine.run_script(&script)?)
    }
}

impl DomEvent for ScriptDomEvent {
    // The host dispatches the event before native listeners run, so the
    // call is forwarded but cannot change what already happened.
    fn prevent_default(&self) -> Result<(), DomError> {
        log::warn!("DomEvent::prevent_default will have no effect");
        self.call("preventDefault")
    }

    fn stop_propagation(&self) -> Result<(), DomError> {
        log::warn!("DomEvent::stop_propagation will have no effect");
        self.call("stopPropagation")
    }

    fn event_type(&self) -> Result<String, DomError> {
        let script = format!("({}.type)", self.accessor);
        log::trace!("Evaluating {}", script);
        Ok(self.engine.run_script_string(&script)?)
    }

    fn target(&self) -> Rc<dyn DomElement> {
        self.elements
            .get_or_create(&format!("{}.target", self.accessor))
    }
}

impl fmt::Debug for ScriptDomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptDomEvent")
            .field("accessor", &self.accessor)
            .finish_non_exhaustive()
    }
}
