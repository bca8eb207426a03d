//! CLI Argument Parsing
//!
//! A single command with two flags. The help footer lists the required
//! capabilities and the resolved source and output paths.

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::config::GeneratorConfig;
use crate::presentation::factory::REQUIRED_CAPABILITIES;

/// Generate web icons from the mod icon
#[derive(Parser, Debug)]
#[command(name = "web-icons")]
pub struct Cli {
    /// Overwrite existing icons
    #[arg(short, long)]
    pub force: bool,
}

/// Help footer naming the codecs and the paths this run would use.
pub fn help_footer(config: &GeneratorConfig) -> String {
    let mut out = String::from("Requires:\n");
    for capability in REQUIRED_CAPABILITIES {
        out.push_str(&format!("  {}\n", capability));
    }
    out.push_str(&format!("\nSource: {}\n", config.source.display()));
    out.push_str(&format!("Output: {}", config.output_dir.display()));
    out
}

/// Parse `args` (including the program name).
///
/// `--help` and parse failures come back as `clap::Error`; calling `exit()`
/// on it prints the message and exits with 0 for help, 2 otherwise.
pub fn parse_args<I, T>(args: I, config: &GeneratorConfig) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command()
        .after_help(help_footer(config))
        .try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}
