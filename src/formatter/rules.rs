//! The ordered set of format rules.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Formatter;
use super::emoji;
use super::tags::Tag;
use super::validator::{MatchContext, validate};
use crate::html;

/// Text-style markers wrapped in a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italics,
    Strike,
    Preformatted,
    Code,
}

/// A format rule: a pattern plus the replacement for each of its matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Tag,
    Emoji,
    Style(Style),
    Quote,
    Newline,
}

impl Rule {
    /// Application order. Tags and emoji produce markup the style rules must
    /// see as finished, and preformatted blocks must be consumed before inline
    /// code.
    pub const ALL: [Rule; 9] = [
        Rule::Tag,
        Rule::Emoji,
        Rule::Style(Style::Bold),
        Rule::Style(Style::Italics),
        Rule::Style(Style::Strike),
        Rule::Style(Style::Preformatted),
        Rule::Style(Style::Code),
        Rule::Quote,
        Rule::Newline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Tag => "tag",
            Rule::Emoji => "emoji",
            Rule::Style(Style::Bold) => "bold",
            Rule::Style(Style::Italics) => "italics",
            Rule::Style(Style::Strike) => "strike",
            Rule::Style(Style::Preformatted) => "preformatted",
            Rule::Style(Style::Code) => "code",
            Rule::Quote => "quote",
            Rule::Newline => "newline",
        }
    }

    pub fn pattern(self) -> &'static Regex {
        let patterns = &*PATTERNS;
        match self {
            Rule::Tag => &patterns.tag,
            Rule::Emoji => &patterns.emoji,
            Rule::Style(Style::Bold) => &patterns.bold,
            Rule::Style(Style::Italics) => &patterns.italics,
            Rule::Style(Style::Strike) => &patterns.strike,
            Rule::Style(Style::Preformatted) => &patterns.preformatted,
            Rule::Style(Style::Code) => &patterns.code,
            Rule::Quote => &patterns.quote,
            Rule::Newline => &patterns.newline,
        }
    }

    /// Markup for one match, or `None` when the match must stay as it is.
    pub(crate) fn replacement(
        self,
        formatter: &Formatter,
        caps: &Captures<'_>,
        ctx: &MatchContext<'_>,
    ) -> Option<String> {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        let options = formatter.options();

        match self {
            Rule::Tag => Some(Tag::classify(inner).render(formatter.users(), options)),
            Rule::Emoji => Some(emoji::resolve(
                inner,
                formatter.custom_emoji(),
                options,
                formatter.translator(),
            )),
            Rule::Style(style) => {
                let html = style.wrap(inner, &options.pre_class);
                validate(ctx, html, formatter.boundaries())
            }
            Rule::Quote => validate(ctx, html::element("q", inner, &[]), formatter.boundaries()),
            Rule::Newline => Some("<br/>".to_string()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Style {
    fn wrap(self, inner: &str, pre_class: &str) -> String {
        match self {
            Style::Bold => html::element("strong", inner, &[]),
            Style::Italics => html::element("em", inner, &[]),
            Style::Strike => html::element("del", inner, &[]),
            Style::Preformatted => {
                let inner = inner.strip_prefix('\n').unwrap_or(inner);
                let inner = inner.strip_suffix('\n').unwrap_or(inner);
                html::element("code", inner, &[("class", pre_class)])
            }
            Style::Code => html::element("code", inner, &[]),
        }
    }
}

/// Anything but a line terminator.
const LINE_CHAR: &str = r"[^\n\r\x{2028}\x{2029}]";

struct Patterns {
    tag: Regex,
    emoji: Regex,
    bold: Regex,
    italics: Regex,
    strike: Regex,
    preformatted: Regex,
    code: Regex,
    quote: Regex,
    newline: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    tag: Regex::new(&format!("<({LINE_CHAR}*?)>")).expect("tag pattern"),
    emoji: Regex::new(r":([a-zA-Z0-9_+\-]+):").expect("emoji pattern"),
    bold: Regex::new(r"\*([^*]*?)\*").expect("bold pattern"),
    italics: Regex::new(r"_([^_]*?)_").expect("italics pattern"),
    strike: Regex::new(r"~([^~]*?)~").expect("strike pattern"),
    preformatted: Regex::new(r"```([^`]*?)```").expect("preformatted pattern"),
    code: Regex::new(r"`([^`]*?)`").expect("code pattern"),
    // Anchored to the start of the text, not of each line.
    quote: Regex::new(&format!(r"\A(?:>|&gt;)\s*({LINE_CHAR}+)")).expect("quote pattern"),
    newline: Regex::new(r"\r\n|\r|\n").expect("newline pattern"),
});
