use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::logos::Difficulty;

/// Errors surfaced by the game core. None of these occur during normal play;
/// they flag a broken dataset, a bad config, or misuse of the JS entry points.
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("no logo entries for difficulty '{0}'")]
    EmptyDifficulty(Difficulty),
    #[error("duplicate logo name '{0}'")]
    DuplicateName(&'static str),
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[cfg(feature = "serde_json")]
    #[error("config parse error: {0}")]
    Config(String),
    #[error("game screen is already running")]
    AlreadyRunning,
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
