use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Rendering options consulted by the format rules.
///
/// Keys may be spelled in snake_case or in the camelCase used by chat
/// client integrations (`emojiPath`, `userClass`, ...).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Base path prepended to emoji image file names
    #[serde(alias = "emojiPath")]
    pub emoji_path: String,
    /// Class on `<span>` elements produced for channel mentions
    #[serde(alias = "channelClass")]
    pub channel_class: String,
    /// Class on `<span>` elements produced for user mentions
    #[serde(alias = "userClass")]
    pub user_class: String,
    /// Class applied to every emoji element
    #[serde(alias = "emojiClass")]
    pub emoji_class: String,
    /// Class on `<code>` elements produced for preformatted blocks
    #[serde(alias = "preClass")]
    pub pre_class: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            emoji_path: "/assets/img/emoji/".to_string(),
            channel_class: "slack-channel".to_string(),
            user_class: "slack-user".to_string(),
            emoji_class: "slack-emoji".to_string(),
            pre_class: "is-pre".to_string(),
        }
    }
}

impl Options {
    /// Overwrite a single option by key. Returns `false` for unrecognized keys,
    /// leaving the options untouched.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "emoji_path" | "emojiPath" => &mut self.emoji_path,
            "channel_class" | "channelClass" => &mut self.channel_class,
            "user_class" | "userClass" => &mut self.user_class,
            "emoji_class" | "emojiClass" => &mut self.emoji_class,
            "pre_class" | "preClass" => &mut self.pre_class,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

/// Whether style matches must sit on whitespace boundaries.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// Boundaries are computed but every match is accepted
    #[default]
    Ignore,
    /// Reject style matches not preceded and followed by whitespace or the
    /// edge of the text
    Enforce,
}

/// How an accepted match is written back into the working text.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReplacementMode {
    /// Replace the first occurrence of the matched text, wherever it is
    #[default]
    FirstOccurrence,
    /// Replace exactly the span that was matched
    Offset,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub options: Options,
    pub boundaries: BoundaryPolicy,
    pub replacement: ReplacementMode,
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn emoji_path(mut self, path: impl Into<String>) -> Self {
        self.config.options.emoji_path = path.into();
        self
    }

    pub fn channel_class(mut self, class: impl Into<String>) -> Self {
        self.config.options.channel_class = class.into();
        self
    }

    pub fn user_class(mut self, class: impl Into<String>) -> Self {
        self.config.options.user_class = class.into();
        self
    }

    pub fn emoji_class(mut self, class: impl Into<String>) -> Self {
        self.config.options.emoji_class = class.into();
        self
    }

    pub fn pre_class(mut self, class: impl Into<String>) -> Self {
        self.config.options.pre_class = class.into();
        self
    }

    pub fn boundaries(mut self, policy: BoundaryPolicy) -> Self {
        self.config.boundaries = policy;
        self
    }

    pub fn replacement(mut self, mode: ReplacementMode) -> Self {
        self.config.replacement = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".slackfmt.toml", "slackfmt.toml"];

fn parse_config_str(s: &str, path: &Path) -> Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_config(path: &Path) -> Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("slackfmt").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    let p = dirs::config_dir()?.join("slackfmt").join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .slackfmt.toml, slackfmt.toml
/// 3) $XDG_CONFIG_HOME/slackfmt/config.toml, then the platform config dir
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = user_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
