//! QuickJS-backed script engine

use rquickjs::convert::Coerced;
use rquickjs::{Context, Ctx, Error as JsError, FromJs, Runtime, Value};

use super::{ScriptEngine, ScriptError};

/// Script engine embedding QuickJS
///
/// Scripts run in the global scope of a single context, so variables declared
/// by one call are visible to the next.
pub struct QuickJsEngine {
    // Keeps the runtime alive for as long as the context.
    _runtime: Runtime,
    context: Context,
}

impl QuickJsEngine {
    /// Create a runtime and a full context
    pub fn new() -> Result<Self, ScriptError> {
        let runtime = Runtime::new().map_err(|e| ScriptError::Engine(e.to_string()))?;
        let context = Context::full(&runtime).map_err(|e| ScriptError::Engine(e.to_string()))?;
        Ok(Self {
            _runtime: runtime,
            context,
        })
    }

    fn eval<V>(&self, script: &str) -> Result<V, ScriptError>
    where
        V: for<'js> FromJs<'js>,
    {
        self.context.with(|ctx| match ctx.eval::<V, _>(script) {
            Ok(value) => Ok(value),
            Err(JsError::Exception) => Err(ScriptError::Exception(exception_message(&ctx))),
            Err(err) => Err(ScriptError::Engine(err.to_string())),
        })
    }
}

impl ScriptEngine for QuickJsEngine {
    fn run_script(&self, script: &str) -> Result<(), ScriptError> {
        log::trace!(target: "quickjs", "run_script: {}", script);
        self.eval::<()>(script)
    }

    fn run_script_string(&self, script: &str) -> Result<String, ScriptError> {
        log::trace!(target: "quickjs", "run_script_string: {}", script);
        self.eval::<Coerced<String>>(script).map(|value| value.0)
    }
}

fn exception_message(ctx: &Ctx<'_>) -> String {
    let exception: Value = ctx.catch();

    if let Some(obj) = exception.as_object() {
        if let Ok(message) = obj.get::<_, String>("message") {
            return message;
        }
    }

    format!("{exception:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::dom::{DomElementRegistry, DomEvent, ScriptDomEvent};
    use std::rc::Rc;

    const EVENT_FIXTURE: &str = r"
        var e = {
            type: 'click',
            prevented: false,
            target: { tagName: 'DIV', id: 'hud' },
            preventDefault: function () { this.prevented = true; },
            stopPropagation: function () {}
        };
    ";

    #[test]
    fn test_event_through_quickjs() {
        let engine = Rc::new(QuickJsEngine::new().unwrap());
        engine.run_script(EVENT_FIXTURE).unwrap();
        let registry = Rc::new(DomElementRegistry::new(engine.clone()));
        let event = ScriptDomEvent::new("e", registry);

        assert_eq!(event.event_type().unwrap(), "click");
        event.prevent_default().unwrap();
        event.stop_propagation().unwrap();
        assert_eq!(engine.run_script_string("e.prevented").unwrap(), "true");

        let target = event.target();
        assert_eq!(target.tag_name().unwrap(), "DIV");
        assert_eq!(target.id().unwrap(), "hud");
    }

    #[test]
    fn test_string_result_of_statements() {
        let engine = QuickJsEngine::new().unwrap();

        assert_eq!(engine.run_script_string("'click';").unwrap(), "click");
        assert_eq!(engine.run_script_string("var t = 'click'; t").unwrap(), "click");
        assert_eq!(engine.run_script_string("1 + 2").unwrap(), "3");
    }

    #[test]
    fn test_exception_message() {
        let engine = QuickJsEngine::new().unwrap();
        let err = engine.run_script("throw new Error('boom')").unwrap_err();
        assert_eq!(err, ScriptError::Exception("boom".to_string()));
    }

    #[test]
    fn test_missing_event_is_an_error() {
        let engine = Rc::new(QuickJsEngine::new().unwrap());
        let registry = Rc::new(DomElementRegistry::new(engine));
        let event = ScriptDomEvent::new("missingEvent", registry);

        assert!(event.prevent_default().is_err());
    }
}
