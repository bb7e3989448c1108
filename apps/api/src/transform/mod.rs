//! The transform domain: word-limit validation, tone selection, prompt
//! composition, and the rewrite/generate endpoint handlers.

pub mod handlers;
pub mod prompts;
pub mod tone;
pub mod validation;
