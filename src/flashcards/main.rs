use clap::Parser;
use flashcards::config::{resolve_config_dir, FlashcardsConfig};
use flashcards::error::Result;
use flashcards::picker::RandomPicker;
use flashcards::session::{Session, SessionOptions};
use std::io::{self, IsTerminal};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli);
    let options = SessionOptions {
        import_from: cli.import_from.or(config.import_from),
        export_to: cli.export_to.or(config.export_to),
        color: config.color && !cli.no_color && io::stdout().is_terminal(),
    };
    log::debug!("session options: {:?}", options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), RandomPicker::new(), options);
    session.run()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> FlashcardsConfig {
    let Some(dir) = resolve_config_dir(cli.config_dir.clone()) else {
        return FlashcardsConfig::default();
    };
    FlashcardsConfig::load(&dir).unwrap_or_else(|e| {
        log::warn!("ignoring config in {}: {}", dir.display(), e);
        FlashcardsConfig::default()
    })
}
