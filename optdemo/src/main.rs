mod arguments;
mod error;

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::arguments::Parsed;
use crate::error::Result;

/// Command line usage error, from sysexits.h.
const EX_USAGE: u8 = 64;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(argv: &[String]) -> Result<ExitCode> {
    let table = arguments::build_options();
    let progname = argv.first().map(String::as_str).unwrap_or("optdemo");

    match arguments::parse_cmdline(&table, argv)? {
        Parsed::Run(cmdline) => {
            debug!(?cmdline, "parsed command line");
            writeln!(io::stdout().lock(), "{}", cmdline)?;
            Ok(ExitCode::SUCCESS)
        }
        Parsed::Help => {
            let mut out = io::stdout().lock();
            optparse::write_usage(&table, &mut out, progname)?;
            optparse::write_help(&table, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Parsed::Usage(e) => {
            debug!(kind = %e.kind(), "rejected command line");
            let mut err = io::stderr().lock();
            optparse::write_error(&e, &mut err)?;
            optparse::write_usage(&table, &mut err, progname)?;
            Ok(ExitCode::from(EX_USAGE))
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let argv: Vec<String> = std::env::args().collect();
    match run(&argv) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("optdemo: {}", e);
            ExitCode::FAILURE
        }
    }
}
