use crate::error::GameError;
use crate::game_state::{GameInterface, UserAction};
use crate::round::{Round, SlotStatus};
use crate::{debug_log, info_log};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Jumble Words: unscramble six words per round
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (defaults to the built-in list)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Use the line-based interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// One line of player input in plain mode.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Guess { slot: usize, text: String },
    NewRound,
    Show,
    Exit,
    Invalid(String),
}

/// `<slot> <text>` sets a guess (slots count from 1, text is kept as typed and
/// may be empty); `next`, `show` and `exit` are keywords.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\n', '\r']);
    let (head, rest) = line
        .trim_start()
        .split_once(char::is_whitespace)
        .unwrap_or((line.trim(), ""));

    match head.to_lowercase().as_str() {
        "exit" | "quit" => Command::Exit,
        "next" | "new" => Command::NewRound,
        "show" => Command::Show,
        "" => Command::Invalid("Type a slot number followed by your guess.".to_string()),
        number => match number.parse::<usize>() {
            Ok(slot) if slot > 0 => Command::Guess {
                slot,
                text: rest.to_string(),
            },
            _ => Command::Invalid(format!("Unknown command '{head}'.")),
        },
    }
}

fn status_mark(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Blank => "",
        SlotStatus::Correct => "✓",
        SlotStatus::Incorrect => "✗",
    }
}

pub fn display_board(round: &Round) {
    println!("\nJUMBLE WORD GAME");
    for (i, shuffled) in round.shuffled_words().iter().enumerate() {
        let guess = round.guess(i).unwrap_or_default();
        println!(
            "{}. {:<12} [{}] {}",
            i + 1,
            shuffled,
            guess,
            status_mark(round.slot_status(i))
        );
    }
    if round.all_correct() {
        println!("All words are correct!");
    }
}

pub fn display_instructions() {
    println!("\nEnter '<slot> <guess>' (e.g. '1 planet'), 'next' for new words, 'show' to redraw, or 'exit' to quit:");
}

/// Line-based front end reading commands from any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
    round: Round,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            round: Round::empty(),
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, round: &Round) {
        self.round = round.clone();
        display_board(round);
    }

    fn display_guess_update(&mut self, round: &Round, index: usize) {
        self.round = round.clone();
        let guess = round.guess(index).unwrap_or_default();
        match round.slot_status(index) {
            SlotStatus::Blank => println!("Slot {} cleared.", index + 1),
            status => println!("{}. {} {}", index + 1, guess, status_mark(status)),
        }
        if round.all_correct() {
            println!("All words are correct!");
        }
    }

    fn display_error(&mut self, error: &GameError) {
        if error.is_no_words() {
            println!("No words available: {error}");
        } else {
            println!("{error}");
        }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        display_instructions();
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => {
                info_log!("read_action() - end of input, exiting");
                return Some(UserAction::Exit);
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read input: {e}");
                return Some(UserAction::Exit);
            }
        }

        let command = parse_command(&input);
        debug_log!("read_action() - parsed {:?}", command);
        match command {
            Command::Guess { slot, text } => {
                if self.round.is_empty() {
                    println!("No words loaded. Type 'next' to try again.");
                    None
                } else if slot > self.round.len() {
                    println!("Slot must be between 1 and {}.", self.round.len());
                    None
                } else {
                    Some(UserAction::EditGuess {
                        index: slot - 1,
                        text,
                    })
                }
            }
            Command::NewRound => Some(UserAction::NewRound),
            Command::Exit => Some(UserAction::Exit),
            Command::Show => {
                display_board(&self.round);
                None
            }
            Command::Invalid(message) => {
                println!("{message}");
                None
            }
        }
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
