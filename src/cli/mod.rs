//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `run`: configuration resolution and the collect/compact pipeline
//! - `report`: table formatting and stderr diagnostics
//! - `init`: writes a default config file
//! - `exit_status`: process exit codes

use anyhow::Result;

mod args;
mod exit_status;
mod init;
pub mod report;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    if args.init {
        return init::init();
    }

    let Some(dir) = args.dir.as_deref() else {
        eprintln!("{}", Arguments::usage());
        eprintln!();
        eprintln!("For more information, try '--help'.");
        return Ok(ExitStatus::Failure);
    };

    let config = run::resolve_config(&args)?;
    let result = run::run(dir, &config, args.verbose)?;
    report::print(&result, args.verbose)?;

    Ok(ExitStatus::Success)
}
