use crate::error::GameError;
use crate::logos::Difficulty;

/// Round parameters. The defaults are the classic 3 attempts / 60 seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub starting_attempts: u32,
    pub round_seconds: u32,
    pub tick_interval_ms: i32, // setInterval period
    pub default_difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_attempts: 3,
            round_seconds: 60,
            tick_interval_ms: 1000,
            default_difficulty: Difficulty::Easy,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_attempts == 0 {
            return Err(GameError::InvalidConfig("starting_attempts must be at least 1"));
        }
        if self.round_seconds == 0 {
            return Err(GameError::InvalidConfig("round_seconds must be at least 1"));
        }
        if self.tick_interval_ms <= 0 {
            return Err(GameError::InvalidConfig("tick_interval_ms must be positive"));
        }
        Ok(())
    }

    /// Parse a JSON config; missing fields fall back to the defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.starting_attempts, 3);
        assert_eq!(cfg.round_seconds, 60);
        assert_eq!(cfg.default_difficulty, Difficulty::Easy);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        let cfg = GameConfig { starting_attempts: 0, ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
        let cfg = GameConfig { round_seconds: 0, ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
        let cfg = GameConfig { tick_interval_ms: 0, ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = GameConfig::from_json(r#"{"round_seconds": 30, "default_difficulty": "hard"}"#)
            .unwrap();
        assert_eq!(cfg.round_seconds, 30);
        assert_eq!(cfg.starting_attempts, 3);
        assert_eq!(cfg.default_difficulty, Difficulty::Hard);
        assert!(matches!(GameConfig::from_json("{"), Err(GameError::Config(_))));
    }
}
