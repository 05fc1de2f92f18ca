//! Command line definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "relkit")]
#[command(about = "Inspect relkit release descriptors", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log loader activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the descriptor and print a summary
    Check {
        /// Descriptor to load (defaults to .relkit.yml in the current directory)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the loaded descriptor with empty fields removed
    Show {
        /// Descriptor to load (defaults to .relkit.yml in the current directory)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_with_file() {
        let cli =
            Cli::try_parse_from(["relkit", "check", "-f", "custom.yml"]).expect("Should parse");

        match cli.command {
            Commands::Check { file } => assert_eq!(file, Some(PathBuf::from("custom.yml"))),
            other => panic!("Expected Check, got {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_show_json_verbose() {
        let cli = Cli::try_parse_from(["relkit", "show", "--json", "-v"]).expect("Should parse");

        match cli.command {
            Commands::Show { file, json } => {
                assert_eq!(file, None);
                assert!(json);
            }
            other => panic!("Expected Show, got {:?}", other),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["relkit"]).is_err());
    }
}
