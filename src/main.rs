use anyhow::Context;
use std::io;
use wordle_game::cli::{CliInterface, parse_cli};
use wordle_game::logging;
use wordle_game::persistence::{self, FileStore, MemoryStore, PersistenceStore};
use wordle_game::session::{GameInterface, game_loop};
use wordle_game::tui::TuiInterface;
use wordle_game::{DifficultyConfig, RandomWordSetProvider};

fn run<S, I>(config: &DifficultyConfig, store: S, interface: &mut I)
where
    S: PersistenceStore,
    I: GameInterface,
{
    let mut provider = RandomWordSetProvider::new();
    game_loop(config, &mut provider, store, interface);
}

fn run_with_store<I: GameInterface>(
    config: &DifficultyConfig,
    store: Option<FileStore>,
    interface: &mut I,
) {
    match store {
        Some(store) => run(config, store, interface),
        None => {
            log::warn!("No data directory available, progress will not be saved");
            run(config, MemoryStore::new(), interface);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    let config = cli.difficulty_config();

    if cli.plain {
        logging::init_stderr_logger().context("failed to initialise logger")?;
    } else if let Some(path) = logging::default_log_path() {
        // The TUI owns the terminal, so log lines go to a file
        if let Err(e) = logging::init_file_logger(&path) {
            eprintln!("Logging disabled ({}): {e}", path.display());
        }
    }

    let store = cli
        .state_path
        .clone()
        .or_else(persistence::default_state_path)
        .map(FileStore::open);
    if let Some(store) = &store {
        log::info!("Saving progress to {}", store.path().display());
    }
    log::info!(
        "Starting {} game ({} letters, {} tries)",
        config.label,
        config.word_length,
        config.row_count
    );

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        run_with_store(&config, store, &mut interface);
    } else {
        let mut interface = TuiInterface::new().context("failed to initialise terminal")?;
        run_with_store(&config, store, &mut interface);
        interface.cleanup().context("failed to restore terminal")?;
    }
    Ok(())
}
