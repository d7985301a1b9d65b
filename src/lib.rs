pub mod config;
pub mod error;
pub mod formatter;
pub mod html;
pub mod registry;

pub use config::BoundaryPolicy;
pub use config::Config;
pub use config::ConfigBuilder;
pub use config::Options;
pub use config::ReplacementMode;
pub use error::Error;
pub use formatter::Formatter;
pub use registry::UserRecord;

/// Formats Slack-style message text as an HTML fragment.
///
/// Mentions of users fall back to their raw ids, since no user directory is
/// registered. Build a [`Formatter`] to register users and custom emoji.
///
/// # Examples
///
/// ```rust
/// let html = slackfmt::format("Hello *world*\n:smile:", None);
/// assert!(html.starts_with("Hello <strong>world</strong><br/>"));
/// ```
///
/// # Arguments
///
/// * `input` - Raw message text
/// * `config` - Optional configuration (defaults to default config)
pub fn format(input: &str, config: Option<Config>) -> String {
    formatter::format(input, config)
}

pub fn format_with_defaults(input: &str) -> String {
    format(input, None)
}
