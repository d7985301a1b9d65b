use crate::config::Config;

mod core;
pub mod emoji;
pub mod rules;
pub mod tags;
pub mod validator;

// Re-export the main types
pub use core::Formatter;
pub use emoji::{EmojiTranslator, ImageEmojiTranslator, TranslatorSettings};
pub use rules::{Rule, Style};

/// Format `input` with empty user and emoji registries.
pub fn format(input: &str, config: Option<Config>) -> String {
    let config = config.unwrap_or_default();
    log::info!(
        "Formatting {} bytes (boundaries={:?}, replacement={:?})",
        input.len(),
        config.boundaries,
        config.replacement
    );
    Formatter::new(config).format(input)
}
