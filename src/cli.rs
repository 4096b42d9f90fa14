//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// plugin-detect - Rider plugin installation detector for Unity projects
///
/// Works out whether the Rider editor plugin is installed in a Unity project,
/// where, and at which version.
#[derive(Parser, Debug)]
#[command(
    name = "plugin-detect",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Detect the Rider editor plugin in a Unity project",
    long_about = "plugin-detect inspects a Unity project (the solution, its generated .csproj files \
                  and Assets/) and decides whether the Rider editor plugin should be installed, \
                  where it lives, and which version is present.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  plugin-detect detect Game.sln\n    \
                  plugin-detect detect Game.sln --json\n    \
                  plugin-detect detect Game.sln --previous-dir Assets/Plugins/Editor/JetBrains\n    \
                  plugin-detect detect Game.sln --save"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the plugin installation for a solution
    Detect(DetectArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the detect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  First detection after checkout:\n    plugin-detect detect Game.sln\n\n\
                  Remember the result for the next run:\n    plugin-detect detect Game.sln --save\n\n\
                  Only search specific projects:\n    plugin-detect detect Game.sln --project Assembly-CSharp-Editor.csproj\n\n\
                  Machine-readable output:\n    plugin-detect detect Game.sln --json")]
pub struct DetectArgs {
    /// Path to the solution (.sln) file
    pub solution: PathBuf,

    /// Directory the plugin was installed into last time (overrides the state file)
    #[arg(long, value_name = "DIR")]
    pub previous_dir: Option<PathBuf>,

    /// Project files to search, in order (defaults to every .csproj beside the solution)
    #[arg(long = "project", value_name = "CSPROJ", num_args = 1..)]
    pub projects: Vec<PathBuf>,

    /// State file remembering the installation directory
    #[arg(long, value_name = "FILE", env = "PLUGIN_DETECT_STATE")]
    pub state: Option<PathBuf>,

    /// Remember the resolved target directory in the state file
    #[arg(long)]
    pub save: bool,

    /// Print the decision as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_detect() {
        let cli = Cli::try_parse_from(["plugin-detect", "detect", "Game.sln"]).unwrap_or_else(|e| {
            panic!("parse failed: {e}");
        });
        match cli.command {
            Commands::Detect(args) => {
                assert_eq!(args.solution, PathBuf::from("Game.sln"));
                assert!(args.previous_dir.is_none());
                assert!(args.projects.is_empty());
                assert!(!args.save);
                assert!(!args.json);
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_cli_parsing_detect_with_options() {
        let cli = Cli::try_parse_from([
            "plugin-detect",
            "detect",
            "Game.sln",
            "--previous-dir",
            "Assets/X",
            "--project",
            "A.csproj",
            "B.csproj",
            "--save",
            "--json",
        ])
        .unwrap_or_else(|e| panic!("parse failed: {e}"));
        match cli.command {
            Commands::Detect(args) => {
                assert_eq!(args.previous_dir, Some(PathBuf::from("Assets/X")));
                assert_eq!(
                    args.projects,
                    vec![PathBuf::from("A.csproj"), PathBuf::from("B.csproj")]
                );
                assert!(args.save);
                assert!(args.json);
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["plugin-detect", "-vv", "version"])
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["plugin-detect", "completions", "--shell", "bash"])
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_detect_requires_solution() {
        assert!(Cli::try_parse_from(["plugin-detect", "detect"]).is_err());
    }
}
