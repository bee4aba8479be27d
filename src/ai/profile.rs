//! AI profile configuration loaded from TOML
//!
//! A profile switches the steps of the decision chain on or off and sets
//! their thresholds. The three built-in variants cover the basic,
//! intermediate and advanced bots; anything else comes from
//! `data/ai_profiles/{name}.toml`.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{QuoridorError, Result};

/// Opening book usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningConfig {
    pub enabled: bool,
    /// Chance of consulting the book at all in a given game
    pub probability: f64,
    /// Book is only consulted while the decision counter is at most this
    pub last_decision: u32,
}

impl Default for OpeningConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            probability: 0.75,
            last_decision: 1,
        }
    }
}

/// Unconditional random pawn moves early in the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomMoveConfig {
    pub probability: f64,
    /// Number of leading decisions during which the roll is made
    pub early_turns: u32,
}

impl Default for RandomMoveConfig {
    fn default() -> Self {
        Self {
            probability: 0.0,
            early_turns: 3,
        }
    }
}

/// Fence placement thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceConfig {
    pub enabled: bool,
    /// Minimum gain in (opponent - self) weighted distance for an attacking fence
    pub aggressive_threshold: f64,
    /// Defend only when the opponent's weighted distance is at most this
    pub defensive_distance_threshold: f64,
    /// ...and the opponent is at most this many rows from its goal
    pub defensive_row_threshold: i32,
}

impl Default for FenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            aggressive_threshold: 3.0,
            defensive_distance_threshold: 3.0,
            defensive_row_threshold: 4,
        }
    }
}

/// Complete AI profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiProfile {
    /// Name of this profile (set from filename or variant)
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub opening: OpeningConfig,
    #[serde(default)]
    pub random_moves: RandomMoveConfig,
    #[serde(default)]
    pub fences: FenceConfig,
}

impl Default for AiProfile {
    fn default() -> Self {
        BotVariant::Advanced.profile()
    }
}

impl AiProfile {
    /// Check probabilities and thresholds are in range
    pub fn validate(&self) -> Result<()> {
        for (label, p) in [
            ("opening.probability", self.opening.probability),
            ("random_moves.probability", self.random_moves.probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(QuoridorError::Profile(format!(
                    "{} ({}) must be within 0..=1",
                    label, p
                )));
            }
        }
        if self.fences.aggressive_threshold < 0.0
            || self.fences.defensive_distance_threshold < 0.0
            || self.fences.defensive_row_threshold < 0
        {
            return Err(QuoridorError::Profile(
                "fence thresholds must be non-negative".into(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(name: &str, contents: &str) -> Result<Self> {
        let mut profile: AiProfile = toml::from_str(contents)?;
        profile.name = name.to_string();
        profile.validate()?;
        Ok(profile)
    }
}

/// The built-in policy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotVariant {
    /// Always walks the best path; never fences
    Basic,
    /// Fences, plus random moves early on; no opening book
    Intermediate,
    /// Full priority chain with opening book
    Advanced,
}

impl BotVariant {
    pub fn profile(&self) -> AiProfile {
        match self {
            BotVariant::Basic => AiProfile {
                name: self.to_string(),
                opening: OpeningConfig {
                    enabled: false,
                    ..OpeningConfig::default()
                },
                random_moves: RandomMoveConfig::default(),
                fences: FenceConfig {
                    enabled: false,
                    ..FenceConfig::default()
                },
            },
            BotVariant::Intermediate => AiProfile {
                name: self.to_string(),
                opening: OpeningConfig {
                    enabled: false,
                    ..OpeningConfig::default()
                },
                random_moves: RandomMoveConfig {
                    probability: 0.3,
                    early_turns: 3,
                },
                fences: FenceConfig::default(),
            },
            BotVariant::Advanced => AiProfile {
                name: self.to_string(),
                opening: OpeningConfig::default(),
                random_moves: RandomMoveConfig::default(),
                fences: FenceConfig::default(),
            },
        }
    }
}

impl fmt::Display for BotVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BotVariant::Basic => "basic",
            BotVariant::Intermediate => "intermediate",
            BotVariant::Advanced => "advanced",
        };
        f.write_str(name)
    }
}

impl FromStr for BotVariant {
    type Err = QuoridorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "basic" | "bot0" => Ok(BotVariant::Basic),
            "intermediate" | "bot1" => Ok(BotVariant::Intermediate),
            "advanced" | "bot2" => Ok(BotVariant::Advanced),
            other => Err(QuoridorError::Profile(format!("unknown bot variant '{}'", other))),
        }
    }
}

/// Load profile from TOML file
///
/// Loads from `data/ai_profiles/{name}.toml`
pub fn load_profile(name: &str) -> Result<AiProfile> {
    let path = profile_path(name);
    let contents = fs::read_to_string(&path)?;
    AiProfile::from_toml_str(name, &contents)
}

/// Built-in variant by name, otherwise a profile file
pub fn resolve_profile(name: &str) -> Result<AiProfile> {
    match name.parse::<BotVariant>() {
        Ok(variant) => Ok(variant.profile()),
        Err(_) => load_profile(name),
    }
}

/// Get path to profile file
fn profile_path(name: &str) -> PathBuf {
    PathBuf::from("data/ai_profiles").join(format!("{}.toml", name))
}
