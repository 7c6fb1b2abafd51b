mod app;
mod cli;
mod effects;
mod headless;
mod logging;
mod ui;

use clap::Parser;
use query_logging::query_info;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::initialize(args.log);
    query_info!("Starting query menu against {}", args.base_url);

    match args.option {
        Some(option) => {
            if !headless::run_once(args.base_url, option)? {
                std::process::exit(1);
            }
            Ok(())
        }
        None => app::run_app(args.base_url),
    }
}
