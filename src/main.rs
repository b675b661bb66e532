use clap::Parser;
use plp_log_processor::cli::{self, Args};
use std::process;

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);

    match cli::run(&args) {
        Ok(_stats) => {
            // Summary already printed; an unknown command is reported but not fatal
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
