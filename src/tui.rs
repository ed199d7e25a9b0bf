//! TUI (Terminal User Interface) module for Jumble Words
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! One row per round slot: the scrambled word, the player's guess and a
//! check/cross once something has been typed. A blinking banner appears when
//! every slot is correct.
//!
//! # Input
//! Typing edits the focused slot, Up/Down/Tab move focus, Ctrl-N or F2 loads
//! new words, Esc quits. Every edit is returned to the game loop as a
//! [`UserAction::EditGuess`]; the round shown here is only ever replaced by
//! what the session hands back.

use crate::error::GameError;
use crate::game_state::{GameInterface, UserAction};
use crate::round::{Round, SlotStatus};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_GUESS_LENGTH: usize = 32;
const SHUFFLED_COLUMN_WIDTH: usize = 14;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const SCRAMBLED_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const BANNER_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Green)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::SLOW_BLINK);

fn status_span(status: SlotStatus) -> Span<'static> {
    match status {
        SlotStatus::Blank => Span::raw(""),
        SlotStatus::Correct => Span::styled("✓", Style::new().fg(Color::Green)),
        SlotStatus::Incorrect => Span::styled("✗", Style::new().fg(Color::Red)),
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    round: &'a Round,
    focus: usize,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: Round,
    focus: usize,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            round: Round::empty(),
            focus: 0,
            message: String::new(),
            error_message: String::new(),
            status: "Loading words...".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            round: &self.round,
            focus: self.focus,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(14),    // Word slots
                Constraint::Length(5),  // Messages and banner
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.round, ctx.focus);
        Self::render_info(f, chunks[2], ctx.round, ctx.message, ctx.error_message);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("JUMBLE WORD GAME")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, round: &Round, focus: usize) {
        let block = Block::default()
            .title("Unscramble")
            .borders(Borders::ALL)
            .style(Style::default());

        let inner = block.inner(area);
        f.render_widget(block, area);

        if round.is_empty() {
            let empty = Paragraph::new(NO_WORDS_MESSAGE)
                .style(ERROR_STYLE);
            f.render_widget(empty, inner);
            return;
        }

        for index in 0..round.len() {
            Self::render_slot(f, inner, round, index, index == focus);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_slot(f: &mut Frame, area: Rect, round: &Round, index: usize, focused: bool) {
        let y = area.y + (index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let shuffled = round.shuffled_words().get(index).map_or("", String::as_str);
        let guess = round.guess(index).unwrap_or_default();
        let caret = if focused { "_" } else { " " };
        let input_style = if focused {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { "> " } else { "  " };

        let spans = vec![
            Span::raw(marker),
            Span::raw(format!("{}. ", index + 1)),
            Span::styled(
                format!("{shuffled:<width$}", width = SHUFFLED_COLUMN_WIDTH),
                SCRAMBLED_STYLE,
            ),
            Span::styled(format!(" {guess}{caret} "), input_style),
            Span::raw(" "),
            status_span(round.slot_status(index)),
        ];

        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(
        f: &mut Frame,
        area: Rect,
        round: &Round,
        message: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();

        if round.all_correct() {
            lines.push(Line::from(vec![Span::styled(
                " All words are correct! ",
                BANNER_STYLE,
            )]));
        } else if !round.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                format!("{} of {} correct", round.correct_count(), round.len()),
                SUCCESS_STYLE,
            )]));
        }

        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }

        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(
            "Type to guess | UP/DOWN/TAB: Move | CTRL-N or F2: New words | ESC: Quit",
        )
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        let Event::Key(key) = event else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Escape sequences from alt-tab show up as replacement or control characters
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        Ok(self.handle_key(key))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        match map_key(&self.round, self.focus, key) {
            KeyOutcome::Action(action) => {
                info_log!("handle_key() - Returning {:?}", action);
                Some(action)
            }
            KeyOutcome::Focus(focus) => {
                self.focus = focus;
                None
            }
            KeyOutcome::Error(message) => {
                self.error_message = message;
                None
            }
            KeyOutcome::Ignored => {
                debug_log!("handle_key() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }
}

/// What a single key press means for the board.
#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Action(UserAction),
    Focus(usize),
    Error(String),
    Ignored,
}

const NO_WORDS_MESSAGE: &str = "No words loaded. Press Ctrl-N to try again.";

/// Translate a key press against the displayed round and focused slot.
fn map_key(round: &Round, focus: usize, key: KeyEvent) -> KeyOutcome {
    let has_modifier = key
        .modifiers
        .intersects(KeyModifiers::ALT | KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => KeyOutcome::Action(UserAction::Exit),
        KeyCode::F(2) => KeyOutcome::Action(UserAction::NewRound),
        KeyCode::Char('n' | 'N') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::Action(UserAction::NewRound)
        }
        KeyCode::Up | KeyCode::BackTab => shifted_focus(round.len(), focus, false),
        KeyCode::Down | KeyCode::Tab | KeyCode::Enter => shifted_focus(round.len(), focus, true),
        KeyCode::Char(_) if has_modifier => KeyOutcome::Ignored,
        KeyCode::Char(_) | KeyCode::Backspace => {
            let Some(guess) = round.guess(focus) else {
                return KeyOutcome::Error(NO_WORDS_MESSAGE.to_string());
            };
            let mut text = guess.to_string();
            if let KeyCode::Char(c) = key.code {
                if text.chars().count() >= MAX_GUESS_LENGTH {
                    return KeyOutcome::Error(format!(
                        "Guesses are limited to {MAX_GUESS_LENGTH} characters."
                    ));
                }
                text.push(c);
            } else if text.pop().is_none() {
                return KeyOutcome::Ignored;
            }
            KeyOutcome::Action(UserAction::EditGuess { index: focus, text })
        }
        _ => KeyOutcome::Ignored,
    }
}

/// Status line after a failed action; `None` leaves the current one.
fn error_status(round: &Round, error: &GameError) -> Option<&'static str> {
    match (error.is_no_words(), round.is_empty()) {
        (true, true) => Some("No words loaded"),
        (true, false) => Some("Could not load new words - keeping the current ones"),
        (false, _) => None,
    }
}

fn shifted_focus(len: usize, focus: usize, forward: bool) -> KeyOutcome {
    if len == 0 {
        return KeyOutcome::Ignored;
    }
    KeyOutcome::Focus(if forward {
        (focus + 1) % len
    } else {
        (focus + len - 1) % len
    })
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, round: &Round) {
        self.round = round.clone();
        self.focus = 0;
        self.message = "New words loaded. Unscramble them!".to_string();
        self.error_message.clear();
        self.status = format!("{} words to solve", round.len());
        self.draw_or_log();
    }

    fn display_guess_update(&mut self, round: &Round, index: usize) {
        self.round = round.clone();
        self.message.clear();
        self.status = if round.all_correct() {
            "Solved - press Ctrl-N for new words".to_string()
        } else {
            format!("Editing word {}", index + 1)
        };
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &GameError) {
        self.message.clear();
        self.error_message = if error.is_no_words() {
            format!("No words available: {error}")
        } else {
            error.to_string()
        };
        if let Some(status) = error_status(&self.round, error) {
            self.status = status.to_string();
        }
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        if self.draw().is_err() {
            info_log!("read_action() - Draw failed, returning Exit");
            return Some(UserAction::Exit);
        }

        match self.handle_input() {
            Ok(action) => action,
            Err(e) => {
                log::error!("Error handling input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{WORDS_PER_ROUND, generate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn six_word_round() -> Round {
        let words: Vec<String> = ["apple", "brave", "cider", "delta", "eagle", "frost"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        generate(&words, WORDS_PER_ROUND, &mut StdRng::seed_from_u64(4)).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_appends_to_focused_slot() {
        let mut round = six_word_round();
        round.set_guess(2, "ci").unwrap();
        assert_eq!(
            map_key(&round, 2, key(KeyCode::Char('d'))),
            KeyOutcome::Action(UserAction::EditGuess {
                index: 2,
                text: "cid".to_string()
            })
        );
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut round = six_word_round();
        round.set_guess(0, "ap").unwrap();
        assert_eq!(
            map_key(&round, 0, key(KeyCode::Backspace)),
            KeyOutcome::Action(UserAction::EditGuess {
                index: 0,
                text: "a".to_string()
            })
        );
    }

    #[test]
    fn test_backspace_on_empty_slot_is_ignored() {
        let round = six_word_round();
        assert_eq!(map_key(&round, 1, key(KeyCode::Backspace)), KeyOutcome::Ignored);
    }

    #[test]
    fn test_guess_length_cap() {
        let mut round = six_word_round();
        round.set_guess(3, "x".repeat(MAX_GUESS_LENGTH)).unwrap();
        assert!(matches!(
            map_key(&round, 3, key(KeyCode::Char('y'))),
            KeyOutcome::Error(_)
        ));

        round.set_guess(3, "x".repeat(MAX_GUESS_LENGTH - 1)).unwrap();
        assert!(matches!(
            map_key(&round, 3, key(KeyCode::Char('y'))),
            KeyOutcome::Action(UserAction::EditGuess { index: 3, .. })
        ));
    }

    #[test]
    fn test_new_round_keys() {
        let round = six_word_round();
        assert_eq!(
            map_key(&round, 0, key(KeyCode::F(2))),
            KeyOutcome::Action(UserAction::NewRound)
        );
        assert_eq!(
            map_key(
                &round,
                0,
                KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)
            ),
            KeyOutcome::Action(UserAction::NewRound)
        );
        // Without Ctrl, 'n' is just a letter
        assert!(matches!(
            map_key(&round, 0, key(KeyCode::Char('n'))),
            KeyOutcome::Action(UserAction::EditGuess { .. })
        ));
    }

    #[test]
    fn test_other_modifiers_ignored() {
        let round = six_word_round();
        assert_eq!(
            map_key(&round, 0, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT)),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn test_focus_wraps_around() {
        let round = six_word_round();
        assert_eq!(
            map_key(&round, WORDS_PER_ROUND - 1, key(KeyCode::Down)),
            KeyOutcome::Focus(0)
        );
        assert_eq!(map_key(&round, 0, key(KeyCode::Tab)), KeyOutcome::Focus(1));
        assert_eq!(
            map_key(&round, 0, key(KeyCode::Up)),
            KeyOutcome::Focus(WORDS_PER_ROUND - 1)
        );
    }

    #[test]
    fn test_error_status_keeps_round_on_screen() {
        let error = GameError::InsufficientWords {
            required: 6,
            available: 2,
        };
        assert_eq!(error_status(&Round::empty(), &error), Some("No words loaded"));
        assert_eq!(
            error_status(&six_word_round(), &error),
            Some("Could not load new words - keeping the current ones")
        );
        let misuse = GameError::IndexOutOfRange { index: 6, len: 6 };
        assert_eq!(error_status(&six_word_round(), &misuse), None);
    }

    #[test]
    fn test_empty_round_rejects_edits() {
        let round = Round::empty();
        assert_eq!(
            map_key(&round, 0, key(KeyCode::Char('a'))),
            KeyOutcome::Error(NO_WORDS_MESSAGE.to_string())
        );
        assert_eq!(map_key(&round, 0, key(KeyCode::Down)), KeyOutcome::Ignored);
        assert_eq!(
            map_key(&round, 0, key(KeyCode::Esc)),
            KeyOutcome::Action(UserAction::Exit)
        );
    }
}
