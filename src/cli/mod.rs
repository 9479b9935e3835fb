//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::store::Backend;
use output::OutputFormat;

/// jotbox - titled notes for LLM tool calling
#[derive(Parser, Debug)]
#[command(name = "jotbox", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file and JOTBOX_DIR)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Storage backend (overrides config file)
    #[arg(short = 'b', long, global = true, value_enum)]
    pub backend: Option<Backend>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a note, replacing any note with the same title
    Save(SaveArgs),

    /// Show a note's content
    Get(GetArgs),

    /// List note titles
    Titles(TitlesArgs),

    /// List notes with their modification dates
    #[command(name = "ls")]
    List(ListArgs),

    /// Delete a note
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Print the tool definitions offered to a model
    Tools,

    /// Run a tool call the way a host runtime would
    Call(CallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `save` command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Note title
    pub title: String,

    /// Note content (read from stdin if omitted)
    pub content: Option<String>,
}

/// Arguments for the `get` command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Note title
    pub title: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `titles` command
#[derive(Parser, Debug)]
pub struct TitlesArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Note title
    pub title: String,
}

/// Arguments for the `call` command
#[derive(Parser, Debug)]
pub struct CallArgs {
    /// Tool name (see `jotbox tools`)
    pub tool: String,

    /// Tool arguments as a JSON object
    #[arg(default_value = "{}")]
    pub arguments: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["jotbox", "titles", "--dir", "/tmp/n", "-b", "sqlite"])
            .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/n")));
        assert_eq!(cli.backend, Some(Backend::Sqlite));
    }

    #[test]
    fn save_content_is_optional() {
        let cli = Cli::try_parse_from(["jotbox", "save", "Groceries"]).unwrap();
        match cli.command {
            Command::Save(args) => {
                assert_eq!(args.title, "Groceries");
                assert!(args.content.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn call_arguments_default_to_empty_object() {
        let cli = Cli::try_parse_from(["jotbox", "call", "list_notes"]).unwrap();
        match cli.command {
            Command::Call(args) => assert_eq!(args.arguments, "{}"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Cli::try_parse_from(["jotbox", "-b", "redis", "titles"]).is_err());
    }
}
