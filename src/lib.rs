//! A single-player terminal blackjack engine.
//!
//! The [`Table`] runs the whole game: it shuffles a fresh [`Deck`] each
//! round, deals to the player and the dealer, asks for hit/stay decisions,
//! plays the dealer out to seventeen, and announces the result, looping
//! until the player declines another round. All input and output go
//! through the [`Console`] trait, so the engine itself never touches a
//! terminal.
//!
//! ```no_run
//! use blackjack::{StdinConsole, Table};
//!
//! let mut table = Table::new(StdinConsole::new());
//! table.run().expect("deck can cover a two-hand round");
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod hand;
pub mod participant;
pub mod table;

pub use card::{Card, Rank, Suit};
pub use console::{Console, Event, Outcome, Prompt, StdinConsole};
pub use deck::Deck;
pub use error::GameError;
pub use hand::{Hand, DEALER_STAND};
pub use participant::Participant;
pub use table::Table;
