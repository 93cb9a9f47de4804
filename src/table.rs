use std::cmp::Ordering;

use log::{debug, info};

use crate::console::{Console, Event, Outcome, Prompt};
use crate::deck::Deck;
use crate::error::GameError;
use crate::participant::Participant;

/// Phases of one round, in the order they run. Replay handling sits
/// outside the round, in [`Table::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Dealing,
    NaturalCheck,
    PlayerTurn,
    DealerTurn,
    Resolution,
}

/// One table: a deck, the player, the dealer, and the console they talk
/// through. The table moves cards from the deck into hands and never
/// holds a card itself.
pub struct Table<C: Console> {
    console: C,
    deck: Deck,
    player: Participant,
    dealer: Participant,
}

impl<C: Console> Table<C> {
    pub fn new(console: C) -> Self {
        Self::with_deck(console, Deck::new())
    }

    /// A table over a prepared deck. The console is asked for the
    /// player's name immediately; it persists for the whole session.
    pub fn with_deck(mut console: C, deck: Deck) -> Self {
        let name = console.request_name();
        console.display(Event::Welcome);
        Table {
            console,
            deck,
            player: Participant::player(name),
            dealer: Participant::dealer(),
        }
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Hands the console back, e.g. to inspect what a scripted console
    /// recorded.
    pub fn into_console(self) -> C {
        self.console
    }

    /// The full interactive session: rounds separated by replay prompts,
    /// until the player declines another game.
    pub fn run(&mut self) -> Result<(), GameError> {
        loop {
            self.play_round()?;
            loop {
                let token = self.console.request_choice(Prompt::PlayAgain);
                match token.trim().to_ascii_uppercase().as_str() {
                    "Y" => {
                        self.next_round();
                        break;
                    }
                    "N" => {
                        self.console.display(Event::Goodbye);
                        return Ok(());
                    }
                    _ => self.console.display(Event::InvalidChoice(Prompt::PlayAgain)),
                }
            }
        }
    }

    /// Plays one round on the current deck and hands, from the opening
    /// deal through the outcome announcement.
    pub fn play_round(&mut self) -> Result<Outcome, GameError> {
        let mut phase = Phase::Dealing;
        loop {
            phase = match phase {
                Phase::Dealing => {
                    // One to the player, one to the dealer, one more to
                    // the player. The dealer's second card waits until
                    // the dealer's turn.
                    deal(&mut self.deck, &mut self.player)?;
                    deal(&mut self.deck, &mut self.dealer)?;
                    deal(&mut self.deck, &mut self.player)?;
                    self.show(true);
                    self.show(false);
                    Phase::NaturalCheck
                }
                Phase::NaturalCheck => {
                    if self.player.hand().is_blackjack() {
                        return self.finish(Outcome::PlayerBlackjack);
                    }
                    if self.dealer.hand().is_blackjack() {
                        return self.finish(Outcome::DealerBlackjack);
                    }
                    Phase::PlayerTurn
                }
                Phase::PlayerTurn => {
                    loop {
                        let token = self.console.request_choice(Prompt::HitOrStay);
                        match token.trim() {
                            "1" => {
                                deal(&mut self.deck, &mut self.player)?;
                                self.show(true);
                                if self.player.hand().is_busted() {
                                    return self.finish(Outcome::PlayerBust);
                                }
                            }
                            "2" => {
                                self.console.display(Event::PlayerStays);
                                break;
                            }
                            _ => self.console.display(Event::InvalidChoice(Prompt::HitOrStay)),
                        }
                    }
                    Phase::DealerTurn
                }
                Phase::DealerTurn => {
                    self.console.display(Event::DealerDrawing);
                    deal(&mut self.deck, &mut self.dealer)?;
                    self.show(false);
                    // The dealer can only now reach a natural; a lone up
                    // card never totals 21.
                    if self.dealer.hand().is_blackjack() {
                        return self.finish(Outcome::DealerBlackjack);
                    }
                    while !self.dealer.hand().dealer_should_stop() {
                        deal(&mut self.deck, &mut self.dealer)?;
                        self.show(false);
                        if self.dealer.hand().is_busted() {
                            return self.finish(Outcome::DealerBust);
                        }
                    }
                    Phase::Resolution
                }
                Phase::Resolution => {
                    let outcome = match self.player.hand().total().cmp(&self.dealer.hand().total())
                    {
                        Ordering::Greater => Outcome::PlayerWin,
                        Ordering::Equal => Outcome::Push,
                        Ordering::Less => Outcome::DealerWin,
                    };
                    return self.finish(outcome);
                }
            };
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Outcome, GameError> {
        info!("round over: {outcome:?}");
        self.console.display(Event::Outcome(outcome));
        Ok(outcome)
    }

    fn show(&mut self, player_side: bool) {
        let participant = if player_side { &self.player } else { &self.dealer };
        let event = Event::Hand {
            name: participant.name().to_string(),
            cards: participant.hand().cards().to_vec(),
            total: participant.hand().total(),
        };
        self.console.display(event);
    }

    fn next_round(&mut self) {
        self.player.reset();
        self.dealer.reset();
        self.deck = Deck::new();
        info!("fresh deck shuffled, hands cleared");
    }
}

fn deal(deck: &mut Deck, participant: &mut Participant) -> Result<(), GameError> {
    let card = deck.draw_one()?;
    debug!("{} draws {card}", participant.name());
    participant.add_card(card);
    Ok(())
}
