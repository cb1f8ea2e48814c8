use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "quickadd")]
#[command(about = "Natural language quick-add parser for task titles")]
#[command(long_about = "quickadd - natural language quick-add for tasks

Detects due dates, #labels and priority markers in a task title as it is
typed, and turns them into structured values.

QUICK START:
  quickadd parse \"Buy milk tomorrow #errands !!\"   Show detected patterns
  quickadd add \"Buy milk tomorrow #errands !!\"     Accept everything, show the task
  quickadd session                                 Interactive accept/dismiss loop

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  quickadd <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. Defaults to the
    /// configured format.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file (defaults to ~/.quickadd/config.yaml)
    #[arg(long, global = true, env = "QUICKADD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the patterns detected in a task title
    ///
    /// Reports every date, label and priority match with its position,
    /// plus the clean title left once they are removed.
    ///
    /// # Examples
    ///
    ///   quickadd parse "buy milk tomorrow #errands"
    ///   quickadd parse "ship it !! #p3" -o json
    ///   quickadd parse "dentist june 20" --today 2025-06-10
    ///
    /// # Supported Patterns
    ///
    ///   Dates:      today, tomorrow, friday, next monday, june 5, 6/5, in 3 days
    ///   Labels:     #label (matched against configured labels)
    ///   Priority:   !, !!, !!!, #p0-#p3, p:0-p:3
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Accept every suggestion and show the resulting task
    ///
    /// Equivalent to typing the text into an input field and accepting each
    /// suggestion chip in turn: dates become the due date, labels are
    /// attached (or queued for creation), priority markers set the priority.
    ///
    /// # Examples
    ///
    ///   quickadd add "Buy milk tomorrow #errands !!"
    ///   quickadd add "call mom tmrw" --label family -o json
    #[command(alias = "a")]
    Add(ParseArgs),

    /// Interactive editing session over stdin
    ///
    /// Each plain line replaces the input text. Commands:
    ///
    ///   :accept N    accept suggestion N
    ///   :dismiss N   hide suggestion N until the input is cleared
    ///   :submit      print the task and start over
    ///   :clear       discard the input
    ///   :quit        exit
    Session(SessionArgs),

    /// List the configured labels
    Labels,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   quickadd completions zsh > ~/.zsh/completions/_quickadd
    ///   quickadd completions bash --install
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Print installation instructions instead of the script
        #[arg(long)]
        install: bool,
    },
}

#[derive(Args)]
pub struct ParseArgs {
    /// The task title in natural language
    pub text: String,

    /// Reference date for relative phrases (defaults to today)
    ///
    /// Accepts YYYY-MM-DD or any single date phrase such as "tomorrow".
    #[arg(long)]
    pub today: Option<String>,

    /// Extra known label, on top of the configured ones (repeatable)
    #[arg(short, long = "label")]
    pub labels: Vec<String>,
}

#[derive(Args)]
pub struct SessionArgs {
    /// Reference date for relative phrases (defaults to today)
    #[arg(long)]
    pub today: Option<String>,

    /// Extra known label, on top of the configured ones (repeatable)
    #[arg(short, long = "label")]
    pub labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "quickadd", "-o", "json", "parse", "ship it !!", "--label", "work", "-l", "home",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Parse(args) => {
                assert_eq!(args.text, "ship it !!");
                assert_eq!(args.labels, vec!["work", "home"]);
                assert!(args.today.is_none());
            },
            _ => panic!("expected parse"),
        }
    }

    #[test]
    fn test_add_alias() {
        let cli = Cli::try_parse_from(["quickadd", "a", "buy milk", "--today", "2025-06-10"]).unwrap();
        assert!(matches!(cli.command, Commands::Add(ref args) if args.today.as_deref() == Some("2025-06-10")));
    }
}
