//! Prompt composition — per-mode base templates plus the optional
//! parenthesized constraint clause.

use crate::transform::tone::Tone;

/// One of the two user-facing operations. Selects the base instruction
/// template, the upstream sampling parameters, and the user-facing error
/// literals for that endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Rewrite,
    Generate,
}

impl Mode {
    /// Sampling temperature sent to the upstream API.
    pub fn temperature(&self) -> f32 {
        match self {
            Mode::Rewrite => 0.7,
            Mode::Generate => 0.9,
        }
    }

    /// Hard token ceiling for the upstream call. Bounds tokens, not words;
    /// word-count guidance travels in the composed prompt, so this stays
    /// high enough for the model to finish its thought.
    pub fn max_output_tokens(&self) -> u32 {
        match self {
            Mode::Rewrite => 1000,
            Mode::Generate => 500,
        }
    }

    pub fn missing_input_message(&self) -> &'static str {
        match self {
            Mode::Rewrite => "No text provided for rewriting.",
            Mode::Generate => "No prompt provided for generation.",
        }
    }

    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Mode::Rewrite => "Failed to rewrite text: ",
            Mode::Generate => "Failed to generate text: ",
        }
    }

    /// Base instruction with the caller's literal input embedded, quoted.
    fn base_template(&self, input: &str) -> String {
        match self {
            Mode::Rewrite => format!(
                "Perform a grammar check and rewrite the following text in perfect, \
                 natural-sounding English. Correct any grammatical errors, awkward phrasing, \
                 spelling mistakes, or unclear expressions. Focus on clarity, conciseness, \
                 and accuracy while maintaining the original meaning.\
                 \n\n    Text to rewrite: \"{input}\"\n\n    Rewritten text:"
            ),
            Mode::Generate => format!(
                "Generate a message based on the following request. Be creative and helpful.\
                 \n\n    Request: \"{input}\"\n\n    Generated message:"
            ),
        }
    }
}

/// Builds the final upstream instruction: the mode's base template, then —
/// when at least one constraint is supplied — a single space and a
/// parenthesized clause list in fixed order (minimum words, approximate
/// words, tone), joined with " and ". Pure string construction; identical
/// inputs always yield an identical prompt.
pub fn compose(
    mode: Mode,
    input: &str,
    min_word_limit: Option<u32>,
    max_word_limit: Option<u32>,
    tone: Tone,
) -> String {
    let mut prompt = mode.base_template(input);

    let mut constraints = Vec::new();
    if let Some(min) = min_word_limit.filter(|&n| n > 0) {
        constraints.push(format!("minimum {min} words"));
    }
    if let Some(max) = max_word_limit.filter(|&n| n > 0) {
        constraints.push(format!("approximately {max} words"));
    }
    if tone != Tone::Neutral {
        constraints.push(format!("in a {tone} tone"));
    }

    if !constraints.is_empty() {
        prompt.push_str(&format!(" ({})", constraints.join(" and ")));
    }

    prompt
}
