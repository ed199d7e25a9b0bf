use jumble_words::cli::{CliInterface, parse_cli};
use jumble_words::logging::{default_log_path, init_logging};
use jumble_words::tui::TuiInterface;
use jumble_words::{GameSession, WordSource, game_loop};
use std::io;

fn main() {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path)
        && let Err(e) = init_logging(&path)
    {
        eprintln!("Logging disabled, could not open '{}': {e}", path.display());
    }

    let source = match cli.wordbank_path {
        Some(path) => WordSource::File(path),
        None => WordSource::Embedded,
    };
    log::info!("Starting with {}", source.describe());
    let mut session = GameSession::new(source, rand::rng());

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut session, &mut interface);
        return;
    }

    match TuiInterface::new() {
        Ok(mut interface) => game_loop(&mut session, &mut interface),
        Err(e) => {
            log::error!("Failed to start terminal UI: {e}");
            eprintln!("Failed to start terminal UI: {e}. Try --plain.");
        }
    }
}
