use std::collections::HashMap;

use serde_json::Value;

use super::emoji::{EmojiTranslator, ImageEmojiTranslator};
use super::rules::Rule;
use super::validator::MatchContext;
use crate::config::{BoundaryPolicy, Config, Options, ReplacementMode};
use crate::error::{Error, Result};
use crate::html;
use crate::registry::{self, CustomEmojiRegistry, UserRecord, UserRegistry};

/// Renders message markup to HTML.
///
/// A formatter owns its user directory, custom emoji and options, so
/// separate callers never observe each other's registrations. Registration
/// needs `&mut self` and formatting `&self`; wrap the formatter in an
/// `RwLock` to share it between threads.
pub struct Formatter {
    config: Config,
    users: UserRegistry,
    custom_emoji: CustomEmojiRegistry,
    translator: Box<dyn EmojiTranslator>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("config", &self.config)
            .field("users", &self.users.len())
            .field("custom_emoji", &self.custom_emoji.len())
            .finish_non_exhaustive()
    }
}

impl Formatter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            users: UserRegistry::default(),
            custom_emoji: CustomEmojiRegistry::default(),
            translator: Box::new(ImageEmojiTranslator),
        }
    }

    /// Swap the translator used for emoji without a custom registration.
    pub fn with_translator(mut self, translator: impl EmojiTranslator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    pub fn options(&self) -> &Options {
        &self.config.options
    }

    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    pub fn custom_emoji(&self) -> &CustomEmojiRegistry {
        &self.custom_emoji
    }

    pub(crate) fn translator(&self) -> &dyn EmojiTranslator {
        self.translator.as_ref()
    }

    pub fn boundaries(&self) -> BoundaryPolicy {
        self.config.boundaries
    }

    pub fn set_boundaries(&mut self, policy: BoundaryPolicy) {
        self.config.boundaries = policy;
    }

    pub fn replacement(&self) -> ReplacementMode {
        self.config.replacement
    }

    pub fn set_replacement(&mut self, mode: ReplacementMode) {
        self.config.replacement = mode;
    }

    /// Replace the user directory.
    pub fn register_users(&mut self, users: HashMap<String, UserRecord>) {
        log::debug!("Registering {} users", users.len());
        self.users.replace(users);
    }

    /// Merge user records into the directory, keyed by their `id`.
    pub fn register_user_list(&mut self, users: impl IntoIterator<Item = UserRecord>) {
        self.users.merge(users);
    }

    /// Register users from JSON.
    ///
    /// An object keyed by id replaces the directory. An array of records is
    /// merged, and rejected as a whole if any element is not a record with an
    /// `id`. Anything else is rejected. Returns whether the payload was
    /// accepted; a rejected payload leaves the directory unchanged.
    pub fn register_users_value(&mut self, users: &Value) -> bool {
        match users {
            Value::Object(object) => {
                self.register_users(registry::users_from_object(object));
                true
            }
            Value::Array(items) => match registry::users_from_list(items) {
                Some(list) => {
                    log::debug!("Merging {} users", list.len());
                    self.register_user_list(list);
                    true
                }
                None => false,
            },
            other => {
                log::warn!("Rejected user registration: not an object ({other})");
                false
            }
        }
    }

    /// Replace the custom emoji table (name to image URL).
    pub fn register_custom_emoji(&mut self, emoji: HashMap<String, String>) {
        log::debug!("Registering {} custom emoji", emoji.len());
        self.custom_emoji.replace(emoji);
    }

    /// Register custom emoji from a JSON object. Anything else is rejected and
    /// leaves the table unchanged.
    pub fn register_custom_emoji_value(&mut self, emoji: &Value) -> bool {
        match emoji {
            Value::Object(object) => {
                self.register_custom_emoji(registry::emoji_from_object(object));
                true
            }
            other => {
                log::warn!("Rejected custom emoji registration: not an object ({other})");
                false
            }
        }
    }

    /// Overwrite recognized options; unknown keys are ignored.
    pub fn configure<K, V>(&mut self, options: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in options {
            let key = key.as_ref();
            if !self.config.options.set(key, value) {
                log::debug!("Ignoring unknown option '{}'", key);
            }
        }
    }

    /// [`Formatter::configure`] from a JSON object. String values are used
    /// as-is, other values by their JSON text. Non-objects are ignored.
    pub fn configure_value(&mut self, options: &Value) {
        let Value::Object(object) = options else {
            log::debug!("Ignoring non-object options ({options})");
            return;
        };
        self.configure(object.iter().map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key, value)
        }));
    }

    /// Format a dynamically typed value, failing unless it is a string.
    pub fn format_value(&self, text: &Value) -> Result<String> {
        match text {
            Value::String(text) => Ok(self.format(text)),
            _ => Err(Error::NotText),
        }
    }

    /// Format raw bytes, failing unless they are UTF-8.
    pub fn format_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes).map_err(|_| Error::NotText)?;
        Ok(self.format(text))
    }

    /// Render `text` as an HTML fragment.
    pub fn format(&self, text: &str) -> String {
        let mut text = text.to_string();
        for rule in Rule::ALL {
            text = self.apply_rule(rule, &text);
        }
        html::strip_empty_elements(&text)
    }

    /// One rule pass. Matches are found in `source`, the text as it was when
    /// the pass began.
    fn apply_rule(&self, rule: Rule, source: &str) -> String {
        let mut replaced = 0usize;
        let output = match self.config.replacement {
            ReplacementMode::FirstOccurrence => {
                let mut working = source.to_string();
                for caps in rule.pattern().captures_iter(source) {
                    let m = caps.get_match();
                    let ctx = MatchContext::new(source, m.start(), m.end());
                    if let Some(html) = rule.replacement(self, &caps, &ctx) {
                        log::trace!("{}: {:?} -> {:?}", rule, m.as_str(), html);
                        working = working.replacen(m.as_str(), &html, 1);
                        replaced += 1;
                    }
                }
                working
            }
            ReplacementMode::Offset => {
                let mut out = String::with_capacity(source.len());
                let mut last = 0;
                for caps in rule.pattern().captures_iter(source) {
                    let m = caps.get_match();
                    let ctx = MatchContext::new(source, m.start(), m.end());
                    if let Some(html) = rule.replacement(self, &caps, &ctx) {
                        log::trace!("{}: {:?} at {} -> {:?}", rule, m.as_str(), m.start(), html);
                        out.push_str(&source[last..m.start()]);
                        out.push_str(&html);
                        last = m.end();
                        replaced += 1;
                    }
                }
                out.push_str(&source[last..]);
                out
            }
        };

        if replaced > 0 {
            log::debug!("Rule {}: {} replacement(s)", rule, replaced);
        }
        output
    }
}
