use clap::Parser;
use tracing::error;

use nichescout::{run, utils, Args, Config};

fn main() {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    let config = Config::from_args(&args);

    match run(&config) {
        Ok(summary) => {
            if summary.failed > 0 {
                println!(
                    "Note: {} of {} niches failed and were left out of the report.",
                    summary.failed,
                    summary.analyzed + summary.failed
                );
            }
        }
        Err(e) => {
            error!(action = "abort", component = "run", error = %e, "Run aborted");
            eprintln!("[ERROR] {:#}", e);
            std::process::exit(1);
        }
    }
}
