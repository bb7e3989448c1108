//! Tone selection — the fixed set of style hints a caller may attach to a
//! request. Anything outside this set is rejected before prompt composition;
//! free-form tone strings never reach the upstream prompt.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unsupported tone: {0}")]
pub struct UnsupportedTone(String);

/// Style hint appended to the composed prompt. `Neutral` is the default and
/// contributes no clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Formal,
    Casual,
    Friendly,
    Professional,
    Persuasive,
    Humorous,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
            Tone::Persuasive => "persuasive",
            Tone::Humorous => "humorous",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = UnsupportedTone;

    /// Case-insensitive. A blank string is treated as unset, i.e. `Neutral`,
    /// matching what the form sends before a tone is picked. The rejection
    /// message echoes the caller's value as supplied, not the normalized form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "neutral" => Ok(Tone::Neutral),
            "formal" => Ok(Tone::Formal),
            "casual" => Ok(Tone::Casual),
            "friendly" => Ok(Tone::Friendly),
            "professional" => Ok(Tone::Professional),
            "persuasive" => Ok(Tone::Persuasive),
            "humorous" => Ok(Tone::Humorous),
            _ => Err(UnsupportedTone(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Formal".parse::<Tone>().unwrap(), Tone::Formal);
        assert_eq!("HUMOROUS".parse::<Tone>().unwrap(), Tone::Humorous);
    }

    #[test]
    fn blank_string_is_neutral() {
        assert_eq!("".parse::<Tone>().unwrap(), Tone::Neutral);
        assert_eq!("  ".parse::<Tone>().unwrap(), Tone::Neutral);
    }

    #[test]
    fn default_is_neutral() {
        assert_eq!(Tone::default(), Tone::Neutral);
    }

    #[test]
    fn unknown_tone_is_rejected_with_literal_message() {
        let err = "angry".parse::<Tone>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported tone: angry");
    }

    #[test]
    fn rejection_echoes_the_caller_value_not_the_normalized_form() {
        let err = "SARCASTIC".parse::<Tone>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported tone: SARCASTIC");

        let err = " Angry ".parse::<Tone>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported tone: Angry");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for tone in [
            Tone::Neutral,
            Tone::Formal,
            Tone::Casual,
            Tone::Friendly,
            Tone::Professional,
            Tone::Persuasive,
            Tone::Humorous,
        ] {
            assert_eq!(tone.to_string().parse::<Tone>().unwrap(), tone);
        }
    }
}
