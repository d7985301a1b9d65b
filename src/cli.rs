use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slackfmt")]
#[command(author, version)]
#[command(about = "Render Slack-style message markup as HTML")]
#[command(
    long_about = "slackfmt converts chat message markup (user and channel mentions, links, \
    emoji short-codes, bold, italics, strike, code, quotes and line breaks) into an HTML \
    fragment ready to be inserted into a page."
)]
#[command(after_help = "\
EXAMPLES:

    # Format a message from stdin
    echo 'Hello *world* :wave:' | slackfmt format

    # Resolve user mentions and custom emoji
    slackfmt format --users users.json --emoji emoji.json message.txt

    # Override a rendering option
    slackfmt format --option userClass=mention message.txt

    # Show the rule pipeline
    slackfmt rules

CONFIGURATION:

slackfmt looks for configuration files in this order:
  1. Explicit --config path
  2. slackfmt.toml or .slackfmt.toml in current/parent directories
  3. ~/.config/slackfmt/config.toml (XDG)
  4. Built-in defaults

Example .slackfmt.toml:

    emoji_path = \"/static/emoji/\"
    user_class = \"mention\"
    boundaries = \"enforce\"
    replacement = \"offset\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, slackfmt will \
        search for .slackfmt.toml or slackfmt.toml in the current directory and its parents, \
        then fall back to ~/.config/slackfmt/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a message as HTML
    #[command(
        long_about = "Format a message as an HTML fragment and print it to stdout. Reads the \
        message from FILE, or from stdin when no file is given."
    )]
    Format {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// User directory
        #[arg(long, value_name = "FILE")]
        #[arg(
            long_help = "JSON file with the user directory: either an object keyed by user id \
            ({\"U1\": {\"name\": \"Jane\"}}) or a list of records with an id and a name."
        )]
        users: Option<PathBuf>,

        /// Custom emoji
        #[arg(long, value_name = "FILE")]
        #[arg(long_help = "JSON object mapping custom emoji names to image URLs.")]
        emoji: Option<PathBuf>,

        /// Override a rendering option
        #[arg(long = "option", value_name = "KEY=VALUE")]
        #[arg(
            long_help = "Override a rendering option (emojiPath, channelClass, userClass, \
            emojiClass, preClass). May be repeated. Unknown keys are ignored."
        )]
        options: Vec<String>,

        /// Only style text surrounded by whitespace
        #[arg(long)]
        enforce_boundaries: bool,

        /// Replace matched spans in place
        #[arg(long)]
        #[arg(
            long_help = "Replace every match at the exact position it was found, instead of \
            replacing the first occurrence of the matched text."
        )]
        offset_replacement: bool,
    },
    /// List the format rules in the order they are applied
    Rules,
}
