use clap::Parser;
use volatility_analyzer::{Cli, run};

fn main() {
    // A. Init Logging (stderr, so `--json` output stays clean on stdout)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    // C. Analyse
    if let Err(e) = run(&args) {
        log::error!("{:#}", e);
        // Printed as well, so the failure is visible whatever RUST_LOG says
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
