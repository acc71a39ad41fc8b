use std::process::ExitCode;

use clap::Parser;

use mesh_convert::{Args, run};

pub fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
