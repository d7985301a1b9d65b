//! Resolution of `<...>` tags into mentions and links.

use crate::config::Options;
use crate::html;
use crate::registry::UserRegistry;

/// The classified contents of an angle-bracket tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `<@U123>`, `<!U123>`, `<@U123|label>`
    User(Mention<'a>),
    /// `<#C123>`, `<#C123|general>`
    Channel(Mention<'a>),
    /// Anything else: `<http://x>`, `<http://x|label>`
    Link(Link<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention<'a> {
    pub id: &'a str,
    pub label: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    pub parts: Vec<&'a str>,
}

impl<'a> Tag<'a> {
    /// Classify tag contents (the text between `<` and `>`) by their first
    /// character.
    pub fn classify(contents: &'a str) -> Self {
        let mut chars = contents.chars();
        match chars.next() {
            Some('@' | '!') => Tag::User(Mention::user(chars.as_str())),
            Some('#') => Tag::Channel(Mention::channel(chars.as_str())),
            _ => Tag::Link(Link::parse(contents)),
        }
    }

    pub fn render(&self, users: &UserRegistry, options: &Options) -> String {
        match self {
            Tag::User(mention) => html::element(
                "span",
                &mention.user_display(users),
                &[("class", options.user_class.as_str())],
            ),
            Tag::Channel(mention) => html::element(
                "span",
                mention.label.unwrap_or(mention.id),
                &[("class", options.channel_class.as_str())],
            ),
            Tag::Link(link) => html::element("a", link.text(), &[("href", link.href().as_str())]),
        }
    }
}

impl<'a> Mention<'a> {
    /// A label is only recognized when the body splits into exactly two
    /// parts.
    fn user(body: &'a str) -> Self {
        let parts: Vec<&str> = body.split('|').collect();
        match parts.as_slice() {
            [id, label] => Self {
                id: *id,
                label: Some(*label),
            },
            _ => Self {
                id: parts[0],
                label: None,
            },
        }
    }

    /// Any second part is the label, whatever follows it.
    fn channel(body: &'a str) -> Self {
        let mut parts = body.split('|');
        let id = parts.next().unwrap_or_default();
        Self {
            id,
            label: parts.next(),
        }
    }

    fn user_display(&self, users: &UserRegistry) -> String {
        if let Some(label) = self.label {
            return label.to_string();
        }
        match users.get(self.id) {
            Some(user) => user.name.clone(),
            None => {
                log::debug!("Unknown user '{}', showing raw id", self.id);
                self.id.to_string()
            }
        }
    }
}

impl<'a> Link<'a> {
    fn parse(contents: &'a str) -> Self {
        Self {
            parts: contents.split('|').collect(),
        }
    }

    pub fn text(&self) -> &'a str {
        match self.parts.as_slice() {
            [url] => *url,
            [_, label, ..] => *label,
            [] => "",
        }
    }

    /// Every part joined with `,`, so a labelled link keeps its label in the
    /// href.
    pub fn href(&self) -> String {
        self.parts.join(",")
    }
}
