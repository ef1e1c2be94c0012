use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Pick the installed nodebrew version satisfying a semver range
#[derive(Parser, Debug)]
#[command(name = "avn-nodebrew", version, about)]
pub struct Cli {
    /// Settings file (default: settings.json in the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// nodebrew executable to run
    #[arg(long, global = true, value_name = "PATH")]
    pub nodebrew: Option<PathBuf>,

    /// Seconds to wait for the installed-version listing (0 waits forever)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the shell command activating the best installed match
    Match {
        /// Requested version, e.g. `node@^4.0.0`, `iojs@^1.0.0` or `4.x`
        specifier: String,

        /// Print `{"version", "command"}` as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Print installed versions as nodebrew reports them
    List,
    /// Find the best match in a saved listing without running nodebrew
    Find {
        specifier: String,

        /// File holding `nodebrew list` output, `-` for stdin
        #[arg(long, default_value = "-", value_name = "FILE")]
        from: String,
    },
    /// Show where nodebrew was found
    Detect,
}
