use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotegen", bin_name = "quotegen", version)]
#[command(about = "Pick inspiring quotes by topic", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Read quotes from this JSON file instead of the configured corpus
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub corpus: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show quotes for a topic (unknown topics draw from every topic)
    #[command(alias = "g")]
    Generate {
        /// Topic to look up, e.g. motivation
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,

        /// Show at most this many quotes
        #[arg(short, long, value_parser = parse_limit)]
        limit: Option<usize>,

        /// Copy the first quote to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// List the available topics
    #[command(alias = "t")]
    Topics,

    /// Browse quotes interactively, one at a time
    #[command(alias = "i")]
    Interactive,

    /// Get or set configuration (max-quotes, delay-ms, corpus)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_joins_words() {
        let cli = Cli::parse_from(["quotegen", "g", "hard", "work", "--limit", "3"]);
        match cli.command {
            Some(Commands::Generate { topic, limit, copy }) => {
                assert_eq!(topic.join(" "), "hard work");
                assert_eq!(limit, Some(3));
                assert!(!copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["quotegen", "generate", "x", "--limit", "0"]).is_err());
        assert!(Cli::try_parse_from(["quotegen", "generate", "x", "--limit", "-2"]).is_err());
        assert!(
            Cli::try_parse_from(["quotegen", "generate", "x", "--limit", "99999999999999999999999"])
                .is_err()
        );
    }

    #[test]
    fn test_generate_requires_topic() {
        assert!(Cli::try_parse_from(["quotegen", "generate"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["quotegen", "topics", "-vv", "--no-color", "--corpus", "q.json"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert_eq!(cli.corpus, Some(PathBuf::from("q.json")));
        assert!(matches!(cli.command, Some(Commands::Topics)));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["quotegen"]);
        assert!(cli.command.is_none());
    }
}
