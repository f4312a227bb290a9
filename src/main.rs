mod args;
mod digest;

use clap::Parser;
use log::{debug, info};

use crate::args::Args;

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    debug!("args: {:?}", args);

    let res = digest::run_digest(&args);
    match res {
        Ok(()) => info!("Processing complete"),
        Err(e) => {
            digest::report_error(&e);
            std::process::exit(1);
        }
    }
}
