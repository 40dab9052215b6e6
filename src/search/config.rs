//! Engine configuration parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Engine configuration parameters.
///
/// The three probabilities control how far the engine strays from perfect
/// play. Values are checked by [`EngineConfig::validate`], which
/// [`crate::search::BalancedEngine::new`] calls before any search runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chance of skipping search and playing a uniformly random legal move.
    pub p_random: f64,

    /// Chance, per child evaluation, of scaling the child's value by a
    /// uniform factor from [0.5, 1.5] before it is compared.
    pub p_noise: f64,

    /// Chance of ignoring a valid alpha-beta cutoff and continuing to
    /// explore the node's remaining actions.
    pub p_skip_prune: f64,

    /// Random seed. Same seed gives the same move for the same board.
    /// `None` draws a fresh seed from entropy on every call.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            p_random: 0.5,
            p_noise: 0.3,
            p_skip_prune: 0.3,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a validated config with the given probabilities and no seed.
    pub fn new(p_random: f64, p_noise: f64, p_skip_prune: f64) -> Result<Self> {
        let config = Self {
            p_random,
            p_noise,
            p_skip_prune,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// A config with every perturbation disabled: plain alpha-beta.
    #[must_use]
    pub fn perfect() -> Self {
        Self {
            p_random: 0.0,
            p_noise: 0.0,
            p_skip_prune: 0.0,
            seed: None,
        }
    }

    /// Set the random-move probability.
    #[must_use]
    pub fn with_random(mut self, p: f64) -> Self {
        self.p_random = p;
        self
    }

    /// Set the value-noise probability.
    #[must_use]
    pub fn with_noise(mut self, p: f64) -> Self {
        self.p_noise = p;
        self
    }

    /// Set the prune-skip probability.
    #[must_use]
    pub fn with_skip_prune(mut self, p: f64) -> Self {
        self.p_skip_prune = p;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every probability lies in [0, 1]. NaN is rejected.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("p_random", self.p_random),
            ("p_noise", self.p_noise),
            ("p_skip_prune", self.p_skip_prune),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}

/// Named strength presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Balanced,
    Hard,
    Perfect,
}

impl Difficulty {
    /// The engine configuration for this preset.
    #[must_use]
    pub fn config(self) -> EngineConfig {
        match self {
            Difficulty::Easy => EngineConfig {
                p_random: 0.8,
                p_noise: 0.5,
                p_skip_prune: 0.5,
                seed: None,
            },
            Difficulty::Balanced => EngineConfig::default(),
            Difficulty::Hard => EngineConfig {
                p_random: 0.1,
                p_noise: 0.1,
                p_skip_prune: 0.1,
                seed: None,
            },
            Difficulty::Perfect => EngineConfig::perfect(),
        }
    }
}

impl From<Difficulty> for EngineConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "balanced" | "normal" | "medium" => Ok(Difficulty::Balanced),
            "hard" => Ok(Difficulty::Hard),
            "perfect" | "expert" => Ok(Difficulty::Perfect),
            _ => Err(Error::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.p_random, 0.5);
        assert_eq!(config.p_noise, 0.3);
        assert_eq!(config.p_skip_prune, 0.3);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::perfect()
            .with_random(0.25)
            .with_noise(0.1)
            .with_seed(123);

        assert_eq!(config.p_random, 0.25);
        assert_eq!(config.p_noise, 0.1);
        assert_eq!(config.p_skip_prune, 0.0);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert_eq!(
            EngineConfig::new(1.5, 0.0, 0.0),
            Err(Error::InvalidProbability { name: "p_random", value: 1.5 })
        );
        assert!(EngineConfig::new(0.0, -0.1, 0.0).is_err());
        assert!(EngineConfig::new(0.0, 0.0, f64::NAN).is_err());
        assert!(EngineConfig::new(0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Perfect.config(), EngineConfig::perfect());
        assert_eq!(EngineConfig::from(Difficulty::Balanced), EngineConfig::default());
        for d in [Difficulty::Easy, Difficulty::Balanced, Difficulty::Hard, Difficulty::Perfect] {
            assert!(d.config().validate().is_ok());
        }
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" normal ".parse::<Difficulty>(), Ok(Difficulty::Balanced));
        assert_eq!("expert".parse::<Difficulty>(), Ok(Difficulty::Perfect));
        assert!(matches!(
            "impossible".parse::<Difficulty>(),
            Err(Error::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        // Missing fields fall back to defaults
        let partial: EngineConfig = serde_json::from_str(r#"{"p_random": 0.0}"#).unwrap();
        assert_eq!(partial.p_random, 0.0);
        assert_eq!(partial.p_noise, 0.3);
    }
}
