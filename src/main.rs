use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::cli::logging;
use tasklist::io::config_io::load_config;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_file.as_deref()) {
        eprintln!("error: could not open log file: {}", e);
        std::process::exit(1);
    }

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(filter) = cli.filter {
        config.ui.default_filter = filter;
    }

    if let Err(e) = tasklist::tui::run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
