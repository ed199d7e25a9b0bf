// Library interface for jumble-words
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod round;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::GameError;
pub use game_state::{GameInterface, GamePhase, GameSession, SessionEvent, UserAction, game_loop};
pub use round::{Round, SlotStatus, WORDS_PER_ROUND, generate, normalize_guess, shuffle_word};
pub use wordbank::{WordSource, load_wordbank_from_file, load_wordbank_from_str};
