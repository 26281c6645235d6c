//! Game-state engine: one secret, an append-only guess history, and the rules that
//! decide whether the session is still running, won, or lost.

use crate::feedback::{FeedbackMode, LetterFeedback, evaluate};
use crate::{debug_log, warn_log};
use std::fmt;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Immutable rules for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub feedback_mode: FeedbackMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            feedback_mode: FeedbackMode::Simple,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(word_length: usize, max_guesses: usize) -> Self {
        Self {
            word_length,
            max_guesses,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_feedback_mode(mut self, feedback_mode: FeedbackMode) -> Self {
        self.feedback_mode = feedback_mode;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Why a guess was not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    WrongLength { expected: usize, actual: usize },
    NonAlphabetic(char),
    /// The session already reached `Won` or `Lost`.
    GameFinished,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters, got {actual}")
            }
            Self::NonAlphabetic(c) => write!(f, "Only letters are allowed ('{c}' is not a letter)"),
            Self::GameFinished => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// State of a single game session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    secret: String,
    guesses: Vec<String>,
    config: GameConfig,
}

impl GameEngine {
    /// Start a session. The secret is uppercased as given (no trimming) and not checked
    /// against any word list; picking a valid secret is the caller's job.
    #[must_use]
    pub fn new(secret: &str, config: GameConfig) -> Self {
        let secret = secret.to_ascii_uppercase();
        if secret.chars().count() != config.word_length {
            warn_log!(
                "Secret has {} letters but the game expects {}",
                secret.chars().count(),
                config.word_length
            );
        }
        debug_log!("GameEngine::new() - {:?}", config);
        Self {
            secret,
            guesses: Vec::with_capacity(config.max_guesses),
            config,
        }
    }

    #[must_use]
    pub fn with_defaults(secret: &str) -> Self {
        Self::new(secret, GameConfig::default())
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn is_solved(&self) -> bool {
        match self.guesses.last() {
            Some(last) => *last == self.secret,
            None => false,
        }
    }

    /// The one gate the input loop should consult before prompting again.
    pub fn can_guess(&self) -> bool {
        self.guesses.len() < self.config.max_guesses && !self.is_solved()
    }

    pub fn remaining_guesses(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.guesses.len())
    }

    /// Out of attempts. Says nothing about whether the game was won.
    pub fn is_over(&self) -> bool {
        self.remaining_guesses() == 0
    }

    pub fn status(&self) -> GameStatus {
        if self.is_solved() {
            GameStatus::Won
        } else if self.is_over() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Structural check only: length and letters. Word-list membership is not consulted.
    pub fn validate_guess(&self, candidate: &str) -> bool {
        self.check_structure(candidate).is_ok()
    }

    fn check_structure(&self, candidate: &str) -> Result<(), GuessError> {
        let actual = candidate.chars().count();
        if actual != self.config.word_length {
            return Err(GuessError::WrongLength {
                expected: self.config.word_length,
                actual,
            });
        }
        match candidate.chars().find(|c| !c.is_ascii_alphabetic()) {
            Some(c) => Err(GuessError::NonAlphabetic(c)),
            None => Ok(()),
        }
    }

    /// Record a guess and report whether it matched the secret.
    ///
    /// # Errors
    /// Returns a `GuessError` and records nothing if the candidate is malformed or the
    /// session is already won or lost.
    pub fn submit(&mut self, candidate: &str) -> Result<bool, GuessError> {
        self.check_structure(candidate)?;
        if !self.can_guess() {
            warn_log!("Guess submitted after the game finished ({})", self.status());
            return Err(GuessError::GameFinished);
        }
        let normalized = candidate.to_ascii_uppercase();
        let matched = normalized == self.secret;
        debug_log!(
            "GameEngine::submit() - guess #{} '{}' matched={}",
            self.guesses.len() + 1,
            normalized,
            matched
        );
        self.guesses.push(normalized);
        Ok(matched)
    }

    /// `true` only when the guess was recorded and equals the secret.
    pub fn guess(&mut self, candidate: &str) -> bool {
        matches!(self.submit(candidate), Ok(true))
    }

    /// Feedback for any candidate. Does not touch the history.
    pub fn guess_feedback(&self, candidate: &str) -> Vec<LetterFeedback> {
        evaluate(
            &candidate.to_ascii_uppercase(),
            &self.secret,
            self.config.word_length,
            self.config.feedback_mode,
        )
    }
}
