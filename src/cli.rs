//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

/// Sentence Vibe Check - terminal client for a sentiment analysis endpoint
///
/// Type a sentence, press Enter, and the title, colors and emoji follow the
/// sentiment the endpoint reports.
///
/// Examples:
///   vibecheck
///   vibecheck --endpoint http://localhost:5001/api/analyze
///   vibecheck --once "What a lovely morning"
///   vibecheck --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Analysis endpoint URL (overrides the config file)
    #[arg(short, long, value_name = "URL", env = "VIBECHECK_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Path to configuration file
    ///
    /// Defaults to vibecheck/config.toml under the user config directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file instead of the data directory
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Analyze a single sentence, print the result and exit
    #[arg(long, value_name = "TEXT")]
    pub once: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["vibecheck"]);
        assert!(args.config.is_none());
        assert!(args.once.is_none());
        assert!(!args.verbose);
        assert!(!args.init_config);
    }

    #[test]
    fn test_once_mode() {
        let args = Args::parse_from(["vibecheck", "--once", "hello there", "-v"]);
        assert_eq!(args.once.as_deref(), Some("hello there"));
        assert!(args.verbose);
    }
}
