use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// CLI arguments parsed from command line.
#[derive(Debug, Default, Parser)]
#[command(
    name = "spec-split",
    version,
    about = "開発設計書を自動分割してClaude用タスクを生成"
)]
pub struct CliArgs {
    /// Path to the design document.
    #[arg(value_name = "SPEC_FILE")]
    pub input: PathBuf,

    /// Output directory [default: claude-tasks].
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Also generate the schedule chart.
    #[arg(short, long)]
    pub gantt: bool,

    /// Path to config file [default: spec-split.toml].
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a generation timestamp into the listings and task map.
    #[arg(long)]
    pub timestamp: bool,

    /// Do not write the run log.
    #[arg(long)]
    pub no_log: bool,
}

/// Parse CLI arguments from an iterator (the first item is the program name).
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}
