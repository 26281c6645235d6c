use crate::engine::{GameConfig, GameEngine, GameStatus, GuessError};
use crate::feedback::LetterFeedback;
use crate::wordbank::WordCorpus;
use crate::{debug_log, info_log, warn_log};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
    NewGame,
}

/// Why the session driver refused to forward a guess to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Malformed(GuessError),
    NotInWordList,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "{err}"),
            Self::NotInWordList => write!(f, "Not in word list"),
        }
    }
}

/// Result of one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: String,
    pub status: GameStatus,
    pub attempts: usize,
}

/// How `play_session` returned control to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(GameOutcome),
    NewGame,
    Exit,
}

/// Trait for presentation layers the session driver talks to.
/// This allows both CLI and TUI front-ends to share the same game loop.
pub trait GameInterface {
    fn display_welcome(&mut self, config: &GameConfig, word_count: usize);
    /// `None` means the input was empty or unusable and the player should be asked again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_rejection(&mut self, guess: &str, rejection: &Rejection);
    fn display_feedback(&mut self, feedback: &[LetterFeedback], remaining: usize);
    fn display_won(&mut self, secret: &str, attempts: usize);
    fn display_lost(&mut self, secret: &str);
    fn display_game_over_hint(&mut self);
    fn display_new_game_message(&mut self, word_count: usize);
    fn display_exit_message(&mut self);
}

/// Drive one game until it is won, lost, restarted or abandoned.
///
/// Structure is checked first, then word-list membership; only guesses passing both
/// reach the engine and consume an attempt.
pub fn play_session<I: GameInterface + ?Sized>(
    engine: &mut GameEngine,
    corpus: &WordCorpus,
    interface: &mut I,
) -> SessionEnd {
    while engine.can_guess() {
        let guess = match interface.read_guess() {
            Some(UserAction::Guess(guess)) => guess,
            Some(UserAction::NewGame) => return SessionEnd::NewGame,
            Some(UserAction::Exit) => return SessionEnd::Exit,
            None => continue,
        };

        if !engine.validate_guess(&guess) {
            if let Err(err) = engine.submit(&guess) {
                interface.display_rejection(&guess, &Rejection::Malformed(err));
            }
            continue;
        }
        if !corpus.contains(&guess) {
            debug_log!("play_session() - '{}' not in word list", guess);
            interface.display_rejection(&guess, &Rejection::NotInWordList);
            continue;
        }

        let feedback = engine.guess_feedback(&guess);
        if let Err(err) = engine.submit(&guess) {
            // can_guess() was checked above, so only a malformed guess could land here
            warn_log!("play_session() - engine refused '{}': {}", guess, err);
            interface.display_rejection(&guess, &Rejection::Malformed(err));
            continue;
        }
        interface.display_feedback(&feedback, engine.remaining_guesses());
    }

    let outcome = GameOutcome {
        secret: engine.secret().to_string(),
        status: engine.status(),
        attempts: engine.guesses().len(),
    };
    info_log!(
        "Session finished: {} after {} guesses",
        outcome.status,
        outcome.attempts
    );
    match outcome.status {
        GameStatus::Won => interface.display_won(&outcome.secret, outcome.attempts),
        GameStatus::Lost | GameStatus::InProgress => interface.display_lost(&outcome.secret),
    }
    SessionEnd::Finished(outcome)
}

/// Wait for the player to start another game or quit. Guesses are ignored.
fn await_next_game<I: GameInterface + ?Sized>(interface: &mut I) -> bool {
    loop {
        match interface.read_guess() {
            Some(UserAction::NewGame) => return true,
            Some(UserAction::Exit) => return false,
            Some(UserAction::Guess(_)) | None => interface.display_game_over_hint(),
        }
    }
}

/// Play games with random secrets from `corpus` until the player exits.
///
/// Returns the outcome of every game that reached a terminal state.
pub fn game_loop<I, R>(
    corpus: &WordCorpus,
    config: GameConfig,
    rng: &mut R,
    interface: &mut I,
) -> Vec<GameOutcome>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let mut outcomes = Vec::new();
    interface.display_welcome(&config, corpus.len());

    loop {
        let Some(secret) = corpus.pick_random(rng) else {
            warn_log!("game_loop() - word list is empty, nothing to play");
            break;
        };
        let mut engine = GameEngine::new(secret, config);

        match play_session(&mut engine, corpus, interface) {
            SessionEnd::Finished(outcome) => {
                outcomes.push(outcome);
                if !await_next_game(interface) {
                    break;
                }
            }
            SessionEnd::NewGame => {}
            SessionEnd::Exit => break,
        }
        interface.display_new_game_message(corpus.len());
    }

    interface.display_exit_message();
    outcomes
}
