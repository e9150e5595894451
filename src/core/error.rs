/// Errors that can occur during engine registration and lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A component with the same name is already registered
    DuplicateComponent(String),
    /// No component registered under the given name
    ComponentNotFound(String),
    /// The component exists but exposes no signal with the given name
    SignalNotFound(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::DuplicateComponent(name) => {
                write!(f, "component '{}' is already registered", name)
            }
            EngineError::ComponentNotFound(name) => {
                write!(f, "component '{}' not found", name)
            }
            EngineError::SignalNotFound(name) => {
                write!(f, "signal '{}' not found", name)
            }
        }
    }
}

impl std::error::Error for EngineError {}
