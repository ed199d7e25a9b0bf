use crate::error::GameError;
use crate::round::{Round, WORDS_PER_ROUND, generate};
use crate::wordbank::WordSource;
use crate::{debug_log, info_log};
use rand::Rng;

/// Where the session currently is. `AllCorrect` is not terminal: editing a
/// slot or starting a new round leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Empty,
    Active,
    AllCorrect,
}

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    EditGuess { index: usize, text: String },
    NewRound,
    Exit,
}

/// Emitted by every successful session mutation so the front end knows what
/// to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    RoundReplaced,
    GuessChanged { index: usize },
}

/// Front-end boundary. Implementations render the round they are handed and
/// turn raw input into [`UserAction`]s.
pub trait GameInterface {
    /// A new round replaced the old one; redraw every slot.
    fn display_round(&mut self, round: &Round);
    /// Slot `index` changed; refresh its indicator and the overall banner.
    fn display_guess_update(&mut self, round: &Round, index: usize);
    fn display_error(&mut self, error: &GameError);
    /// `None` means nothing actionable happened yet.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_exit_message(&mut self);
}

/// Sole owner of the current round.
pub struct GameSession<R: Rng> {
    source: WordSource,
    rng: R,
    round: Round,
}

impl<R: Rng> GameSession<R> {
    /// A session with no round loaded yet.
    pub fn new(source: WordSource, rng: R) -> Self {
        Self {
            source,
            rng,
            round: Round::empty(),
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn phase(&self) -> GamePhase {
        if self.round.is_empty() {
            GamePhase::Empty
        } else if self.round.all_correct() {
            GamePhase::AllCorrect
        } else {
            GamePhase::Active
        }
    }

    /// Re-read the word source and swap in a freshly generated round. On error
    /// the previous round stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ResourceUnavailable`] or
    /// [`GameError::InsufficientWords`].
    pub fn new_round(&mut self) -> Result<SessionEvent, GameError> {
        let words = self.source.load()?;
        let round = generate(&words, WORDS_PER_ROUND, &mut self.rng)?;
        self.round = round;
        info_log!(
            "New round from {} ({} words available)",
            self.source.describe(),
            words.len()
        );
        Ok(SessionEvent::RoundReplaced)
    }

    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index` is not a slot of the
    /// current round.
    pub fn set_guess(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<SessionEvent, GameError> {
        self.round.set_guess(index, text)?;
        debug_log!("Phase after edit of slot {}: {:?}", index, self.phase());
        Ok(SessionEvent::GuessChanged { index })
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.round.is_correct(index)
    }

    pub fn all_correct(&self) -> bool {
        self.round.all_correct()
    }
}

fn notify<I: GameInterface + ?Sized>(interface: &mut I, round: &Round, event: SessionEvent) {
    match event {
        SessionEvent::RoundReplaced => interface.display_round(round),
        SessionEvent::GuessChanged { index } => interface.display_guess_update(round, index),
    }
}

fn report<I: GameInterface + ?Sized>(interface: &mut I, error: &GameError) {
    if error.is_no_words() {
        log::warn!("No words available: {error}");
    } else {
        // Front ends only emit slots they display, so this is a caller bug.
        log::error!("Front end addressed a missing slot: {error}");
    }
    interface.display_error(error);
}

fn start_round<R: Rng, I: GameInterface + ?Sized>(
    session: &mut GameSession<R>,
    interface: &mut I,
) {
    match session.new_round() {
        Ok(event) => notify(interface, session.round(), event),
        Err(e) => report(interface, &e),
    }
}

/// Drive one session until the player exits. Every event is handled to
/// completion before the next one is read.
pub fn game_loop<R: Rng, I: GameInterface + ?Sized>(
    session: &mut GameSession<R>,
    interface: &mut I,
) {
    start_round(session, interface);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewRound => start_round(session, interface),
            UserAction::EditGuess { index, text } => match session.set_guess(index, text) {
                Ok(event) => notify(interface, session.round(), event),
                Err(e) => report(interface, &e),
            },
        }
    }
}
