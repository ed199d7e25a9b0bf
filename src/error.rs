use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading words or playing a round.
#[derive(Debug, Error)]
pub enum GameError {
    /// The word list could not be opened or read.
    #[error("word list '{}' is unavailable: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list holds fewer words than a round needs.
    #[error("need {required} words for a round but only {available} are available")]
    InsufficientWords { required: usize, available: usize },

    /// A guess slot outside the round was addressed.
    #[error("guess slot {index} is out of range (round has {len} slots)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl GameError {
    /// True for the errors that leave the player with no words to play.
    #[must_use]
    pub fn is_no_words(&self) -> bool {
        matches!(
            self,
            Self::ResourceUnavailable { .. } | Self::InsufficientWords { .. }
        )
    }
}
