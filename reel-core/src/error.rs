use reel_model::ModelError;

/// Errors surfaced by engine construction and reconfiguration.
///
/// Interaction paths (pointer, scroll, navigation) never fail; they degrade
/// to no-ops instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
