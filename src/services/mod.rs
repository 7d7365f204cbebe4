pub mod email_classifier;
pub mod prompts;
pub mod response_parser;

pub use email_classifier::*;
