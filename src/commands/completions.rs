//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell_name = args.shell.to_lowercase();
    let shell = match shell_name.as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => {
            eprintln!("Unknown shell: {}", args.shell);
            eprintln!("Supported shells: bash, elvish, fish, powershell, zsh");
            std::process::exit(1);
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "plugin-detect", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(shell: &str) -> CompletionsArgs {
        CompletionsArgs {
            shell: shell.to_string(),
        }
    }

    #[test]
    fn test_completions_known_shells() {
        for shell in ["bash", "elvish", "fish", "powershell", "pwsh", "zsh"] {
            assert!(run(args(shell)).is_ok(), "shell {shell} should be supported");
        }
    }

    #[test]
    fn test_completions_case_insensitive() {
        assert!(run(args("BASH")).is_ok());
        assert!(run(args("Zsh")).is_ok());
    }
}
