//! Emoji short-code resolution.
//!
//! Custom emoji registered by the caller win. Everything else goes through an
//! [`EmojiTranslator`], whose markup gets the configured emoji class.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::config::Options;
use crate::html;
use crate::registry::CustomEmojiRegistry;

/// Settings handed to the translator for each short-code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorSettings<'a> {
    /// Prefix for image file names
    pub image_path: &'a str,
    /// Emit the Unicode glyph instead of image markup
    pub allow_native: bool,
    /// Emit sprite-sheet markup instead of one image per emoji
    pub use_sheet: bool,
}

/// Turns a `:short-code:` into markup.
///
/// Output must carry a `class="..."` attribute for the configured emoji class
/// to be applied. Unknown short-codes are whatever the translator decides;
/// the formatter inserts the result as-is.
pub trait EmojiTranslator: Send + Sync {
    fn translate(&self, shortcode: &str, settings: &TranslatorSettings<'_>) -> String;
}

/// Translator backed by the gemoji short-code table of the `emojis` crate.
///
/// Produces `<img src="{path}{codepoints}.png" class="emoji" ... />` with
/// codepoints as lowercase hex joined by `-`. Unknown short-codes come back
/// as `:name:`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageEmojiTranslator;

impl EmojiTranslator for ImageEmojiTranslator {
    fn translate(&self, shortcode: &str, settings: &TranslatorSettings<'_>) -> String {
        let Some(emoji) = emojis::get_by_shortcode(shortcode) else {
            log::debug!("Unknown emoji short-code '{}'", shortcode);
            return format!(":{shortcode}:");
        };

        if settings.allow_native {
            return emoji.as_str().to_string();
        }
        if settings.use_sheet {
            log::debug!("Sprite sheets are not supported, emitting an image for '{shortcode}'");
        }

        let codepoints = codepoints(emoji.as_str());
        format!(
            r#"<img src="{}{}.png" class="emoji" data-codepoints="{}" />"#,
            settings.image_path, codepoints, codepoints
        )
    }
}

fn codepoints(glyph: &str) -> String {
    glyph
        .chars()
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="(.*?)""#).expect("class attribute pattern"));

/// Resolve a short-code name (without colons) to markup.
pub(crate) fn resolve(
    name: &str,
    custom: &CustomEmojiRegistry,
    options: &Options,
    translator: &dyn EmojiTranslator,
) -> String {
    if let Some(url) = custom.get(name) {
        let style = format!("background-image: url('{url}')");
        return html::element(
            "span",
            "",
            &[("class", options.emoji_class.as_str()), ("style", style.as_str())],
        );
    }

    let settings = TranslatorSettings {
        image_path: &options.emoji_path,
        allow_native: false,
        use_sheet: false,
    };
    let markup = translator.translate(name, &settings);
    let class = format!(r#"class="{}""#, options.emoji_class);
    CLASS_ATTR.replace(&markup, NoExpand(&class)).into_owned()
}
