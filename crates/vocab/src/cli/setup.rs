use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vocab", bin_name = "vocab", version)]
#[command(about = "Personal vocabulary manager backed by a CSV file", long_about = None)]
pub struct Cli {
    /// Configuration file [default: vocab.toml]
    #[arg(short, long, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Word list file, overrides `word_file_path`
    #[arg(short, long, value_name = "PATH", help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Front end to run (cli or tui), overrides `ui_mode`
    #[arg(short, long, value_name = "MODE", help_heading = "Options")]
    pub mode: Option<String>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::try_parse_from(["vocab", "--data-file", "x.csv", "-m", "tui", "-v"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("x.csv")));
        assert_eq!(cli.mode.as_deref(), Some("tui"));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["vocab"]).unwrap();
        assert!(cli.data_file.is_none());
        assert!(cli.mode.is_none());
        assert!(!cli.verbose);
    }
}
