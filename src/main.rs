use clap::Parser;
use roster_pager::cli::dispatcher::Dispatcher;
use roster_pager::cli::main_types::Cli;
use roster_pager::display::DisplayOptions;
use roster_pager::error::AppError;
use roster_pager::storage::config::Config;
use roster_pager::utils::logging::{init_logging, print_verbose};
use roster_pager::utils::validation::validate_page_size;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} Error: {}", err.severity().emoji(), err);
        if let Some(hint) = err.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = Config::load(cli.config.clone())?;

    // Command line flags win over the configuration file
    if let Some(page_size) = cli.page_size {
        validate_page_size(page_size)?;
        config.page_size = page_size;
    }
    if cli.pattern {
        config.search_mode = roster_pager::core::SearchMode::Pattern;
    }
    if cli.no_clamp {
        config.clamp_pages = false;
    }

    if cli.verbose {
        print_verbose(true, &format!("Page size: {}", config.page_size));
        print_verbose(true, &format!("Search mode: {}", config.search_mode));
        if let Some(path) = &cli.config {
            print_verbose(true, &format!("Using config file: {}", path.display()));
        }
    }

    let display = DisplayOptions::from_env()
        .with_format(cli.format)
        .with_no_color(cli.no_color || std::env::var("NO_COLOR").is_ok());

    let dispatcher = Dispatcher::new(config, cli.config, display, cli.verbose);
    dispatcher.dispatch(cli.command)
}
