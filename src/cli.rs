use crate::engine::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig};
use crate::feedback::{FeedbackMode, LetterFeedback};
use crate::game_state::{GameInterface, Rejection, UserAction};
use crate::warn_log;
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;

/// Wordle game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Number of letters in the secret word
    #[arg(long, default_value_t = DEFAULT_WORD_LENGTH as u8, value_parser = clap::value_parser!(u8).range(1..))]
    pub word_length: u8,

    /// Number of attempts per game
    #[arg(long, default_value_t = DEFAULT_MAX_GUESSES as u8, value_parser = clap::value_parser!(u8).range(1..))]
    pub max_guesses: u8,

    /// Seed for secret selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Credit repeated letters only up to their count in the secret
    #[arg(long)]
    pub duplicate_aware: bool,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Extract fixed-length words from a raw dictionary into a word list
    Filter {
        /// Raw dictionary, one word per line
        source: PathBuf,
        /// Where to write the filtered list
        output: PathBuf,
        /// Word length to keep
        #[arg(long, default_value_t = DEFAULT_WORD_LENGTH)]
        length: usize,
    },
}

impl Cli {
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        let mode = if self.duplicate_aware {
            FeedbackMode::DuplicateAware
        } else {
            FeedbackMode::Simple
        };
        GameConfig::new(usize::from(self.word_length), usize::from(self.max_guesses))
            .with_feedback_mode(mode)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Render one feedback row: `[A]` correct, `(A)` misplaced, ` A ` absent.
#[must_use]
pub fn format_feedback(feedback: &[LetterFeedback]) -> String {
    feedback.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter your guess (or 'exit' to quit, or 'next' to start a new game):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return Some(UserAction::Exit),
        Ok(_) => {}
        Err(e) => {
            warn_log!("Failed to read input: {}", e);
            return Some(UserAction::Exit);
        }
    }
    let input = input.trim().to_uppercase();

    match input.as_str() {
        "" => None,
        "EXIT" => Some(UserAction::Exit),
        "NEXT" => Some(UserAction::NewGame),
        _ => Some(UserAction::Guess(input)),
    }
}

pub fn display_welcome(config: &GameConfig, word_count: usize) {
    println!("Loaded {word_count} words.");
    println!(
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_guesses
    );
    println!("[A] = right spot, (A) = wrong spot, A = not in word");
}

pub fn display_rejection(guess: &str, rejection: &Rejection) {
    println!("Invalid guess '{guess}': {rejection}.");
}

pub fn display_feedback(feedback: &[LetterFeedback], remaining: usize) {
    println!("{}", format_feedback(feedback));
    println!("You have {remaining} guesses left.");
}

pub fn display_won(secret: &str, attempts: usize) {
    println!("You win! The word was {secret} (solved in {attempts}).");
}

pub fn display_lost(secret: &str) {
    println!("Out of guesses. The word was {secret}.");
}

pub fn display_game_over_hint() {
    println!("The game is over. Type 'next' for a new game or 'exit' to quit.");
}

pub fn display_new_game_message(word_count: usize) {
    println!("New game started. Picked a word from {word_count} words.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_welcome(&mut self, config: &GameConfig, word_count: usize) {
        display_welcome(config, word_count);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        read_guess(&mut self.reader)
    }

    fn display_rejection(&mut self, guess: &str, rejection: &Rejection) {
        display_rejection(guess, rejection);
    }

    fn display_feedback(&mut self, feedback: &[LetterFeedback], remaining: usize) {
        display_feedback(feedback, remaining);
    }

    fn display_won(&mut self, secret: &str, attempts: usize) {
        display_won(secret, attempts);
    }

    fn display_lost(&mut self, secret: &str) {
        display_lost(secret);
    }

    fn display_game_over_hint(&mut self) {
        display_game_over_hint();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        display_new_game_message(word_count);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::try_parse_from(["wordle-game"]).unwrap();
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.word_length, 5);
        assert_eq!(cli.max_guesses, 6);
        assert_eq!(cli.seed, None);
        assert!(!cli.tui);
        assert_eq!(cli.command, None);
        assert_eq!(cli.game_config(), GameConfig::default());
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::try_parse_from([
            "wordle-game",
            "-i",
            "words.txt",
            "--word-length",
            "6",
            "--max-guesses",
            "8",
            "--seed",
            "42",
            "--duplicate-aware",
        ])
        .unwrap();
        assert_eq!(cli.wordbank_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.seed, Some(42));

        let config = cli.game_config();
        assert_eq!(config.word_length, 6);
        assert_eq!(config.max_guesses, 8);
        assert_eq!(config.feedback_mode, FeedbackMode::DuplicateAware);
    }

    #[test]
    fn test_parse_cli_rejects_zero_guesses() {
        assert!(Cli::try_parse_from(["wordle-game", "--max-guesses", "0"]).is_err());
        assert!(Cli::try_parse_from(["wordle-game", "--word-length", "0"]).is_err());
    }

    #[test]
    fn test_parse_filter_subcommand() {
        let cli = Cli::try_parse_from(["wordle-game", "filter", "raw.txt", "out.txt", "--length", "6"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Filter {
                source: PathBuf::from("raw.txt"),
                output: PathBuf::from("out.txt"),
                length: 6,
            })
        );
    }

    #[test]
    fn test_format_feedback() {
        let row = [
            LetterFeedback::new('C', false, false),
            LetterFeedback::new('A', true, false),
            LetterFeedback::new('E', true, true),
        ];
        assert_eq!(format_feedback(&row), " C  (A) [E]");
    }

    #[test]
    fn test_read_guess_uppercases() {
        let mut reader = Cursor::new("crane\n");
        assert_eq!(read_guess(&mut reader), Some(UserAction::Guess("CRANE".to_string())));
    }

    #[test]
    fn test_read_guess_passes_malformed_input_through() {
        // Structural validation belongs to the engine
        let mut reader = Cursor::new("  cr4n  \n");
        assert_eq!(read_guess(&mut reader), Some(UserAction::Guess("CR4N".to_string())));
    }

    #[test]
    fn test_read_guess_commands() {
        let mut reader = Cursor::new("exit\nNEXT\nExit\n");
        assert_eq!(read_guess(&mut reader), Some(UserAction::Exit));
        assert_eq!(read_guess(&mut reader), Some(UserAction::NewGame));
        assert_eq!(read_guess(&mut reader), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_guess_blank_line() {
        let mut reader = Cursor::new("   \n");
        assert_eq!(read_guess(&mut reader), None);
    }

    #[test]
    fn test_read_guess_eof_exits() {
        let mut reader = Cursor::new("");
        assert_eq!(read_guess(&mut reader), Some(UserAction::Exit));
    }
}
