//! Command line definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokenbridge::{DEFAULT_FRAMEWORK_IMPORT, DEFAULT_VARIABLES_IMPORT};

/// Generate CSS variable maps and utility theme stylesheets from design tokens.
#[derive(Debug, Parser)]
#[command(name = "tokenbridge", version, about)]
pub struct Cli {
    /// Token source file (.json, .yaml or .yml)
    #[arg(
        long,
        global = true,
        env = "TOKENBRIDGE_TOKENS",
        default_value = "tokens.json",
        value_name = "FILE"
    )]
    pub tokens: PathBuf,

    /// Directory the artifacts are written to
    #[arg(
        long,
        global = true,
        env = "TOKENBRIDGE_OUT_DIR",
        default_value = "generated",
        value_name = "DIR"
    )]
    pub out_dir: PathBuf,

    /// Verify committed artifacts are up to date instead of writing them
    #[arg(long, global = true)]
    pub check: bool,

    /// Log generation details (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the CSS variable map module
    Map,
    /// Generate the theme stylesheet
    Theme(ThemeArgs),
    /// Generate every artifact
    All(ThemeArgs),
}

/// Import targets of the theme stylesheet.
#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    /// Utility framework stylesheet to import
    #[arg(long, default_value = DEFAULT_FRAMEWORK_IMPORT, value_name = "IMPORT")]
    pub framework_import: String,

    /// Raw CSS variable stylesheet to import
    #[arg(long, default_value = DEFAULT_VARIABLES_IMPORT, value_name = "IMPORT")]
    pub variables_import: String,
}

impl Default for ThemeArgs {
    fn default() -> Self {
        Self {
            framework_import: DEFAULT_FRAMEWORK_IMPORT.to_string(),
            variables_import: DEFAULT_VARIABLES_IMPORT.to_string(),
        }
    }
}

impl Cli {
    /// The command to run; `all` when none is given.
    pub fn resolved_command(&self) -> Command {
        match &self.command {
            Some(Command::Map) => Command::Map,
            Some(Command::Theme(args)) => Command::Theme(args.clone()),
            Some(Command::All(args)) => Command::All(args.clone()),
            None => Command::All(ThemeArgs::default()),
        }
    }
}
