use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stash-extractor")]
#[command(about = "Pulls product name, brand and image from marketplace product links")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(short, long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract product fields from a single link and print them as JSON
    Extract {
        /// Product page URL
        url: String,
    },

    /// Run the HTTP extraction endpoint
    Serve {
        /// Address to bind (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract() {
        let args = Args::parse_from([
            "stash-extractor",
            "extract",
            "https://www.amazon.com/dp/B000FAKE",
            "--timeout",
            "3",
        ]);
        assert_eq!(args.timeout, Some(3));
        assert!(matches!(
            args.command,
            Command::Extract { ref url } if url.ends_with("B000FAKE")
        ));
    }

    #[test]
    fn test_parse_serve() {
        let args = Args::parse_from([
            "stash-extractor",
            "--config",
            "cfg.json",
            "serve",
            "-b",
            "0.0.0.0:9000",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));
        assert!(matches!(
            args.command,
            Command::Serve { bind: Some(ref b) } if b == "0.0.0.0:9000"
        ));
    }
}
