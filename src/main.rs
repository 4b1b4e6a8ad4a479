use std::env;
use std::process;

use spec_splitter::config::{self, Config};
use spec_splitter::pipeline;
use spec_splitter::SplitError;

mod output;

fn main() {
    let cli = match config::parse_args(env::args_os()) {
        Ok(cli) => cli,
        // Prints help/version or the usage error and exits with clap's code.
        Err(e) => e.exit(),
    };

    let result = Config::load(&cli)
        .map_err(SplitError::from)
        .and_then(|config| cmd_split(&config));

    if let Err(e) = result {
        output::print_error(&e);
        process::exit(1);
    }
}

/// Split the design document and print the assignment summary.
fn cmd_split(config: &Config) -> Result<(), SplitError> {
    let report = pipeline::run_with_progress(config, output::print_progress)?;
    output::print_summary(&report);
    Ok(())
}
