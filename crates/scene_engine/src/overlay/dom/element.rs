//! DOM element handles

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::{DomError, ScriptEngine};

/// Native view of a DOM element
pub trait DomElement {
    /// Script expression that evaluates to the element
    fn accessor(&self) -> &str;

    /// Upper-case tag name, e.g. `DIV`
    fn tag_name(&self) -> Result<String, DomError>;

    /// Value of the `id` attribute
    fn id(&self) -> Result<String, DomError>;
}

/// DOM element backed by a script accessor
pub struct ScriptDomElement {
    accessor: String,
    engine: Rc<dyn ScriptEngine>,
}

impl ScriptDomElement {
    fn query(&self, property: &str) -> Result<String, DomError> {
        let script = format!("({}.{})", self.accessor, property);
        log::trace!("Evaluating {}", script);
        Ok(self.engine.run_script_string(&script)?)
    }
}

impl DomElement for ScriptDomElement {
    fn accessor(&self) -> &str {
        &self.accessor
    }

    fn tag_name(&self) -> Result<String, DomError> {
        self.query("tagName")
    }

    fn id(&self) -> Result<String, DomError> {
        self.query("id")
    }
}

impl fmt::Debug for ScriptDomElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptDomElement")
            .field("accessor", &self.accessor)
            .finish_non_exhaustive()
    }
}

/// Element handles interned by accessor
///
/// Looking up the same accessor twice yields the same handle.
pub struct DomElementRegistry {
    engine: Rc<dyn ScriptEngine>,
    elements: RefCell<HashMap<String, Rc<ScriptDomElement>>>,
}

impl DomElementRegistry {
    /// Create an empty registry on top of a script engine
    pub fn new(engine: Rc<dyn ScriptEngine>) -> Self {
        Self {
            engine,
            elements: RefCell::new(HashMap::new()),
        }
    }

    /// Script engine shared by every handle
    pub fn engine(&self) -> &Rc<dyn ScriptEngine> {
        &self.engine
    }

    /// Look up the handle for `accessor`, creating it on first use
    pub fn get_or_create(&self, accessor: &str) -> Rc<ScriptDomElement> {
        if let Some(element) = self.elements.borrow().get(accessor) {
            return Rc::clone(element);
        }

        log::debug!("Creating DOM element handle for {}", accessor);
        let element = Rc::new(ScriptDomElement {
            accessor: accessor.to_string(),
            engine: Rc::clone(&self.engine),
        });
        self.elements
            .borrow_mut()
            .insert(accessor.to_string(), Rc::clone(&element));
        element
    }

    /// Look up an existing handle
    pub fn get(&self, accessor: &str) -> Option<Rc<ScriptDomElement>> {
        self.elements.borrow().get(accessor).cloned()
    }

    /// Forget a handle; outstanding clones stay usable
    pub fn remove(&self, accessor: &str) -> Option<Rc<ScriptDomElement>> {
        self.elements.borrow_mut().remove(accessor)
    }

    /// Number of interned handles
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Whether no handle has been created
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    /// Forget every handle
    pub fn clear(&self) {
        self.elements.borrow_mut().clear();
    }
}
