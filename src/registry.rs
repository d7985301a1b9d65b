//! Lookup tables for user mentions and custom emoji.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user directory entry. Only `id` and `name` are interpreted; any other
/// fields supplied by the caller are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: HashMap<String, UserRecord>,
}

impl UserRegistry {
    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.users.get(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Drop every known user and take `users` as the new directory.
    pub fn replace(&mut self, users: HashMap<String, UserRecord>) {
        self.users = users;
    }

    /// Add records keyed by their `id`, overwriting existing entries.
    pub fn merge(&mut self, users: impl IntoIterator<Item = UserRecord>) {
        for user in users {
            self.users.insert(user.id.clone(), user);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomEmojiRegistry {
    emoji: HashMap<String, String>,
}

impl CustomEmojiRegistry {
    /// Image URL registered for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.emoji.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.emoji.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emoji.is_empty()
    }

    pub fn replace(&mut self, emoji: HashMap<String, String>) {
        self.emoji = emoji;
    }
}

/// Build a user directory from a JSON object keyed by id.
///
/// Entries that are not records with a string `name` are skipped, since
/// they could never resolve a mention. A record without an `id` takes its
/// key.
pub(crate) fn users_from_object(object: &Map<String, Value>) -> HashMap<String, UserRecord> {
    let mut users = HashMap::with_capacity(object.len());
    for (key, value) in object {
        match UserRecord::deserialize(value) {
            Ok(mut user) => {
                if user.id.is_empty() {
                    user.id = key.clone();
                }
                users.insert(key.clone(), user);
            }
            Err(e) => log::warn!("Skipping user entry '{}': {}", key, e),
        }
    }
    users
}

/// Parse a JSON list of user records. The whole list is rejected when any
/// element lacks a usable `id` or `name`.
pub(crate) fn users_from_list(items: &[Value]) -> Option<Vec<UserRecord>> {
    items
        .iter()
        .enumerate()
        .map(|(idx, value)| match UserRecord::deserialize(value) {
            Ok(user) if !user.id.is_empty() => Some(user),
            Ok(_) => {
                log::warn!("User list entry {} has no id", idx);
                None
            }
            Err(e) => {
                log::warn!("User list entry {} is not a user record: {}", idx, e);
                None
            }
        })
        .collect()
}

/// Build a custom emoji table from a JSON object of name to URL. Non-string
/// URLs are skipped.
pub(crate) fn emoji_from_object(object: &Map<String, Value>) -> HashMap<String, String> {
    object
        .iter()
        .filter_map(|(name, url)| match url {
            Value::String(url) => Some((name.clone(), url.clone())),
            other => {
                log::warn!("Skipping custom emoji '{}': URL is {}", name, other);
                None
            }
        })
        .collect()
}
