use crate::errors::PromptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// The accepted sampling temperature range.
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// The accepted range for the completion's `max_tokens`.
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 200..=2000;

pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// The models a user may pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelChoice {
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 2] = [ModelChoice::Gpt35Turbo, ModelChoice::Gpt4oMini];

    /// The model identifier sent to the completion endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelChoice::Gpt35Turbo => "gpt-3.5-turbo",
            ModelChoice::Gpt4oMini => "gpt-4o-mini",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelChoice {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelChoice::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| PromptError::InvalidOption(format!("unknown model '{s}'")))
    }
}

/// Per-request sampling parameters chosen by the user.
///
/// Values are validated on construction and never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationOptions {
    model: ModelChoice,
    temperature: f32,
    max_tokens: u32,
}

impl GenerationOptions {
    pub fn new(model: ModelChoice, temperature: f32, max_tokens: u32) -> Result<Self, PromptError> {
        if !TEMPERATURE_RANGE.contains(&temperature) {
            return Err(PromptError::InvalidOption(format!(
                "temperature must be between {} and {}, got {temperature}",
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end()
            )));
        }
        if !MAX_TOKENS_RANGE.contains(&max_tokens) {
            return Err(PromptError::InvalidOption(format!(
                "max_tokens must be between {} and {}, got {max_tokens}",
                MAX_TOKENS_RANGE.start(),
                MAX_TOKENS_RANGE.end()
            )));
        }
        Ok(Self {
            model,
            temperature,
            max_tokens,
        })
    }

    /// Builds options from optional request fields, using the UI defaults for
    /// anything left unset.
    pub fn from_parts(
        model: Option<ModelChoice>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Result<Self, PromptError> {
        Self::new(
            model.unwrap_or_default(),
            temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        )
    }

    pub fn model(&self) -> ModelChoice {
        self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: ModelChoice::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_round_trips_through_its_identifier() {
        for model in ModelChoice::ALL {
            assert_eq!(model.as_str().parse::<ModelChoice>().unwrap(), model);
        }
        assert!("gpt-5".parse::<ModelChoice>().is_err());
    }

    #[test]
    fn options_accept_the_inclusive_bounds() {
        assert!(GenerationOptions::new(ModelChoice::Gpt4oMini, 0.0, 200).is_ok());
        assert!(GenerationOptions::new(ModelChoice::Gpt4oMini, 1.0, 2000).is_ok());
    }

    #[test]
    fn options_reject_out_of_range_values() {
        assert!(matches!(
            GenerationOptions::new(ModelChoice::Gpt35Turbo, 1.05, 1000),
            Err(PromptError::InvalidOption(_))
        ));
        assert!(matches!(
            GenerationOptions::new(ModelChoice::Gpt35Turbo, -0.1, 1000),
            Err(PromptError::InvalidOption(_))
        ));
        assert!(matches!(
            GenerationOptions::new(ModelChoice::Gpt35Turbo, 0.5, 199),
            Err(PromptError::InvalidOption(_))
        ));
        assert!(matches!(
            GenerationOptions::new(ModelChoice::Gpt35Turbo, 0.5, 2001),
            Err(PromptError::InvalidOption(_))
        ));
        assert!(GenerationOptions::new(ModelChoice::Gpt35Turbo, f32::NAN, 1000).is_err());
    }

    #[test]
    fn from_parts_falls_back_to_ui_defaults() {
        let options = GenerationOptions::from_parts(None, None, None).unwrap();
        assert_eq!(options, GenerationOptions::default());
        assert_eq!(options.model(), ModelChoice::Gpt35Turbo);
        assert_eq!(options.max_tokens(), 1000);
    }
}
