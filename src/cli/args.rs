//! CLI argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Boredom Buster - find something fun to do
#[derive(Debug, Parser)]
#[command(name = "boredom-buster", version, about)]
pub struct CliConfig {
    /// Seed the random generator for repeatable suggestions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum suggestions shown for mood and time filters (default: 3)
    #[arg(short = 'n', long)]
    pub suggestions: Option<usize>,

    /// Disable coloured headings
    #[arg(long)]
    pub no_color: bool,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliConfig {
    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("boredom-buster").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_arguments() {
        let config = parse(&[]);
        assert_eq!(config.seed, None);
        assert_eq!(config.suggestions, None);
        assert!(!config.no_color);
        assert_eq!(config.config, None);
        assert_eq!(config.default_log_filter(), "warn");
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&["--seed", "7", "-n", "5", "--no-color", "-c", "cfg.json", "-vv"]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.suggestions, Some(5));
        assert!(config.no_color);
        assert_eq!(config.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(config.default_log_filter(), "trace");
    }

    #[test]
    fn test_invalid_seed_rejected() {
        let result = CliConfig::try_parse_from(["boredom-buster", "--seed", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }
}
