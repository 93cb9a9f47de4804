use colored::Colorize;
use dialoguer::Input;
use serde::Serialize;

use crate::card::Card;

/// A decision the table needs from the outside world. The console only
/// renders the question; token validation stays in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// "1" to hit, "2" to stay.
    HitOrStay,
    /// "Y" to start a new round, "N" to quit. Case-insensitive.
    PlayAgain,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    PlayerBlackjack,
    DealerBlackjack,
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Push,
}

/// Everything the engine wants shown. Fire-and-forget; the engine never
/// reads anything back from a display call.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Welcome,
    /// A participant's current cards, in deal order, with the computed total.
    Hand {
        name: String,
        cards: Vec<Card>,
        total: u8,
    },
    PlayerStays,
    DealerDrawing,
    InvalidChoice(Prompt),
    Outcome(Outcome),
    Goodbye,
}

/// The table's window to the player. Implemented over stdin/stdout in
/// production and over canned scripts in tests.
pub trait Console {
    /// Asked once, before the first round.
    fn request_name(&mut self) -> String;

    /// Returns a raw token. The table parses it and re-prompts through
    /// [`Event::InvalidChoice`] when it does not recognize the token.
    fn request_choice(&mut self, prompt: Prompt) -> String;

    fn display(&mut self, event: Event);
}

/// Interactive terminal console.
#[derive(Debug, Default)]
pub struct StdinConsole;

impl StdinConsole {
    pub fn new() -> Self {
        StdinConsole
    }
}

impl Console for StdinConsole {
    fn request_name(&mut self) -> String {
        Input::new()
            .with_prompt("What is your name?")
            .interact_text()
            .unwrap()
    }

    fn request_choice(&mut self, prompt: Prompt) -> String {
        let text = match prompt {
            Prompt::HitOrStay => "Do you want to 1 Hit or 2 Stay?",
            Prompt::PlayAgain => "Do you want to play another game? (Y for new game or N to exit)",
        };
        Input::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text()
            .unwrap()
    }

    fn display(&mut self, event: Event) {
        match event {
            Event::Welcome => println!("Welcome to Blackjack!"),
            Event::Hand { name, cards, total } => {
                println!("----- {name}'s cards: -----");
                for card in cards {
                    println!("=> {card}");
                }
                println!("Total: {total}");
            }
            Event::PlayerStays => println!("You chose to stay."),
            Event::DealerDrawing => println!("Dealing the other card for the dealer..."),
            Event::InvalidChoice(Prompt::HitOrStay) => {
                println!("Your choice is invalid. Please press 1 for Hit or 2 for Stay.")
            }
            Event::InvalidChoice(Prompt::PlayAgain) => {
                println!("Your choice is invalid. Please enter Y or N.")
            }
            Event::Outcome(outcome) => {
                let line = match outcome {
                    Outcome::PlayerBlackjack => "You have Blackjack! You win!".green(),
                    Outcome::DealerBlackjack => "Dealer has Blackjack! You lost.".red(),
                    Outcome::PlayerBust => "Sorry, you busted. You lost.".red(),
                    Outcome::DealerBust => "Dealer busted. You win!".green(),
                    Outcome::PlayerWin => "You won! Congratulations!".green().bold(),
                    Outcome::DealerWin => "Dealer wins!".red(),
                    Outcome::Push => "It's a draw!".yellow(),
                };
                println!("{line}");
            }
            Event::Goodbye => println!("Goodbye!"),
        }
    }
}
