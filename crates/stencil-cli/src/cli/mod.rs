//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use stencil_core::domain::RenderMode;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Template engine mode configuration and artifact coordinates",
    long_about = "Stencil prints or exports the property set a template engine \
                  needs for production or development mode, and parses and \
                  formats groupId:artifactId:classifier:type coordinates.",
    after_help = "EXAMPLES:\n\
        \x20 stencil engine\n\
        \x20 stencil engine --mode development --format json\n\
        \x20 stencil engine -o conf/engine.properties\n\
        \x20 stencil coordinate org.example:widget --classifier sources --type jar\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print or export template engine properties.
    #[command(
        visible_alias = "e",
        about = "Print or export template engine properties",
        after_help = "EXAMPLES:\n\
            \x20 stencil engine\n\
            \x20 stencil engine --mode development\n\
            \x20 stencil engine --format toml -o engine.toml --force"
    )]
    Engine(EngineArgs),

    /// Parse, edit and print an artifact coordinate.
    #[command(
        visible_alias = "coord",
        about = "Parse and format an artifact coordinate",
        after_help = "EXAMPLES:\n\
            \x20 stencil coordinate org.example:widget\n\
            \x20 stencil coordinate g:a:c:t --type pom\n\
            \x20 stencil coordinate --group g --artifact a --format json"
    )]
    Coordinate(CoordinateArgs),

    /// Initialise a Stencil configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stencil init\n\
            \x20 stencil init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Stencil configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config get engine.production\n\
            \x20 stencil config list\n\
            \x20 stencil config path"
    )]
    Config(ConfigCommands),
}

// ── engine ────────────────────────────────────────────────────────────────────

/// Arguments for `stencil engine`.
#[derive(Debug, Args)]
pub struct EngineArgs {
    /// Render mode; falls back to `engine.production` from the configuration.
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        value_parser = RenderMode::from_str,
        help = "Render mode: production (prod, true) or development (dev, false)"
    )]
    pub mode: Option<RenderMode>,

    /// Property syntax; falls back to `engine.format` from the configuration.
    #[arg(short = 'f', long = "format", value_enum, help = "Property format")]
    pub format: Option<PropertyFormat>,

    /// Write to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write properties to FILE"
    )]
    pub output: Option<PathBuf>,

    /// Replace an existing output file.
    #[arg(long = "force", requires = "output", help = "Overwrite existing file")]
    pub force: bool,
}

/// Serialization syntax for engine properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyFormat {
    /// `key=value` lines (`java.util.Properties`).
    #[default]
    Properties,
    /// JSON object.
    Json,
    /// TOML table.
    Toml,
}

// ── coordinate ────────────────────────────────────────────────────────────────

/// Arguments for `stencil coordinate`.
#[derive(Debug, Args)]
pub struct CoordinateArgs {
    /// Coordinate to start from, `groupId:artifactId[:classifier[:type]]`.
    #[arg(value_name = "COORDINATE", help = "Coordinate to parse")]
    pub coordinate: Option<String>,

    #[arg(short = 'g', long = "group", value_name = "GROUP_ID", help = "Set the groupId")]
    pub group_id: Option<String>,

    #[arg(short = 'a', long = "artifact", value_name = "ARTIFACT_ID", help = "Set the artifactId")]
    pub artifact_id: Option<String>,

    #[arg(long = "classifier", value_name = "CLASSIFIER", help = "Set the classifier")]
    pub classifier: Option<String>,

    #[arg(short = 't', long = "type", value_name = "TYPE", help = "Set the type")]
    pub artifact_type: Option<String>,

    /// Output format; defaults to JSON under `--output-format json`.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<CoordinateFormat>,
}

/// Output format for the `coordinate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoordinateFormat {
    /// `groupId:artifactId:classifier:type`.
    Plain,
    /// JSON object with Maven field names.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stencil config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `engine.production`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

impl std::fmt::Display for PropertyFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Properties => write!(f, "properties"),
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn property_format_display() {
        assert_eq!(PropertyFormat::Properties.to_string(), "properties");
        assert_eq!(PropertyFormat::Json.to_string(), "json");
        assert_eq!(PropertyFormat::Toml.to_string(), "toml");
    }

    #[test]
    fn parse_engine_command() {
        let cli = Cli::parse_from(["stencil", "engine", "--mode", "development", "-f", "json"]);
        if let Commands::Engine(args) = cli.command {
            assert_eq!(args.mode, Some(RenderMode::Development));
            assert_eq!(args.format, Some(PropertyFormat::Json));
            assert!(args.output.is_none());
        } else {
            panic!("expected Engine command");
        }
    }

    fn parsed_mode(value: &str) -> Option<RenderMode> {
        match Cli::parse_from(["stencil", "e", "-m", value]).command {
            Commands::Engine(args) => args.mode,
            _ => panic!("expected Engine command"),
        }
    }

    #[test]
    fn mode_aliases() {
        assert_eq!(parsed_mode("dev"), Some(RenderMode::Development));
        assert_eq!(parsed_mode("prod"), Some(RenderMode::Production));
        assert_eq!(parsed_mode("false"), Some(RenderMode::Development));
        assert_eq!(parsed_mode("TRUE"), Some(RenderMode::Production));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["stencil", "engine", "--mode", "staging"]).is_err());
    }

    #[test]
    fn force_requires_output() {
        let result = Cli::try_parse_from(["stencil", "engine", "--force"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_coordinate_with_overrides() {
        let cli = Cli::parse_from([
            "stencil",
            "coord",
            "g:a",
            "--classifier",
            "sources",
            "-t",
            "jar",
        ]);
        if let Commands::Coordinate(args) = cli.command {
            assert_eq!(args.coordinate.as_deref(), Some("g:a"));
            assert_eq!(args.classifier.as_deref(), Some("sources"));
            assert_eq!(args.artifact_type.as_deref(), Some("jar"));
            assert!(args.group_id.is_none());
        } else {
            panic!("expected Coordinate command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stencil", "--quiet", "--verbose", "engine"]);
        assert!(result.is_err());
    }
}
