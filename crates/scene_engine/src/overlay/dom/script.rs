//! Script engine boundary

use thiserror::Error;

/// Script evaluation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The script threw
    #[error("Script exception: {0}")]
    Exception(String),

    /// The engine itself failed (allocation, setup, conversion)
    #[error("Script engine error: {0}")]
    Engine(String),
}

/// String-evaluation entry point into an embedded script engine
pub trait ScriptEngine {
    /// Evaluate a script for its side effects
    fn run_script(&self, script: &str) -> Result<(), ScriptError>;

    /// Evaluate a script and return its completion value converted to a string
    fn run_script_string(&self, script: &str) -> Result<String, ScriptError>;
}
