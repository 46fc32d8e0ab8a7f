pub mod catalog;
pub mod handlers;
pub mod prompts;
pub mod sequencer;
pub mod suggestions;
pub mod validation;
