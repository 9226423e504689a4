use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;
use lproj_check::cli::{Arguments, ExitStatus, init_logging, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose);

    let mut stderr = io::stderr().lock();
    match run_cli(&args, &mut stderr) {
        Ok(status) => status.into(),
        Err(err) => {
            let _ = writeln!(stderr, "{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
