use thiserror::Error;

/// The only internal failure in the engine. Invalid user input is never an
/// error; the table re-prompts instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A draw was requested from an empty deck. Unreachable under the
    /// fixed single-deck, two-hand rule set; fatal to the round if it
    /// ever happens.
    #[error("deck exhausted")]
    DeckExhausted,
}
