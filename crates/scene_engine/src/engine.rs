//! Core engine implementation

use std::rc::Rc;

use crate::{
    component::ComponentError,
    config::{Config, ConfigError, EngineSettings},
    foundation::logging,
    overlay::dom::{DomElementRegistry, DomError, ScriptDomEvent, ScriptEngine},
    scene::{Scene, SceneError},
};
use thiserror::Error;

/// Main engine struct
/// 
/// The engine owns the scene and the DOM element registry of the HTML
/// overlay, both built from [`EngineSettings`].
pub struct Engine {
    /// Scene containing every node and component
    pub scene: Scene,
    
    /// Element handles of the HTML overlay
    elements: Rc<DomElementRegistry>,
    
    /// Engine settings
    settings: EngineSettings,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(settings: EngineSettings, script_engine: Rc<dyn ScriptEngine>) -> Self {
        log::info!("Initializing engine...");
        
        Self {
            scene: Scene::with_settings(&settings.scene),
            elements: Rc::new(DomElementRegistry::new(script_engine)),
            settings,
        }
    }
    
    /// Load settings from a TOML or RON file, initialize logging and create
    /// the engine
    pub fn from_config_file(path: &str, script_engine: Rc<dyn ScriptEngine>) -> Result<Self, EngineError> {
        let settings = EngineSettings::load_from_file(path)?;
        logging::init_with_level(&settings.log_level);
        log::info!("Loaded engine settings from {}", path);
        
        Ok(Self::new(settings, script_engine))
    }
    
    /// Engine settings
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
    
    /// Element handles of the HTML overlay
    pub fn elements(&self) -> &Rc<DomElementRegistry> {
        &self.elements
    }
    
    /// Event the overlay host is currently dispatching
    pub fn current_event(&self) -> ScriptDomEvent {
        ScriptDomEvent::current(&self.settings.overlay, Rc::clone(&self.elements))
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    
    /// Scene error
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
    
    /// Component error
    #[error("Component error: {0}")]
    Component(#[from] ComponentError),
    
    /// DOM bridge error
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}
