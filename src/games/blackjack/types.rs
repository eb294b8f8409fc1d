//! Blackjack data structures: cards, deck, hands and the round state.

use crate::core::constants::{BLACKJACK, DEALER_DRAW_DELAY_MS};
use crate::core::game_loop::TickGate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(&self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// Card rank. Aces count 11 until a hand needs them to count 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    pub fn value(&self) -> u16 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn value(&self) -> u16 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Short label such as `10♥` or `A♠`.
    pub fn label(&self) -> String {
        format!("{}{}", self.rank.name(), self.suit.symbol())
    }
}

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

/// A single 52-card deck. Cards only ever leave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every (suit, rank) pair once, suit-major.
    pub fn ordered() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}

/// An ordered hand of cards. The total is always recomputed from the cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the best total and how many aces still count as 11.
    fn evaluate(&self) -> (u16, usize) {
        let mut total: u16 = self.cards.iter().map(Card::value).sum();
        let mut aces = self.cards.iter().filter(|c| c.is_ace()).count();

        while total > BLACKJACK && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        (total, aces)
    }

    pub fn total(&self) -> u16 {
        self.evaluate().0
    }

    /// True if an ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.evaluate().1 > 0
    }

    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Two-card 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }
}

/// Round phases. `Betting -> PlayerTurn -> DealerTurn -> RoundOver -> Betting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlackjackPhase {
    Betting,
    PlayerTurn,
    DealerTurn,
    RoundOver,
}

/// How a round was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player natural against a dealer without one.
    Blackjack,
    PlayerWins,
    DealerBust,
    Push,
    DealerWins,
    PlayerBust,
}

impl RoundOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Blackjack | Self::PlayerWins | Self::DealerBust)
    }

    pub fn is_loss(&self) -> bool {
        matches!(self, Self::DealerWins | Self::PlayerBust)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack! You win",
            Self::PlayerWins => "You win",
            Self::DealerBust => "Dealer busts, you win",
            Self::Push => "Push",
            Self::DealerWins => "Dealer wins",
            Self::PlayerBust => "Bust! Dealer wins",
        }
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct BlackjackGame {
    pub phase: BlackjackPhase,
    pub deck: Deck,
    pub player: Hand,
    pub dealer: Hand,
    pub outcome: Option<RoundOutcome>,
    /// Paces dealer draws while in `DealerTurn`.
    pub dealer_gate: TickGate,

    // Session tallies
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    /// Consecutive wins; the persisted best-score value.
    pub streak: u32,
}

impl BlackjackGame {
    pub fn new() -> Self {
        Self {
            phase: BlackjackPhase::Betting,
            deck: Deck::ordered(),
            player: Hand::new(),
            dealer: Hand::new(),
            outcome: None,
            dealer_gate: TickGate::new(DEALER_DRAW_DELAY_MS),
            rounds: 0,
            wins: 0,
            losses: 0,
            pushes: 0,
            streak: 0,
        }
    }

    /// True while the dealer's second card should be drawn face down.
    pub fn hole_card_hidden(&self) -> bool {
        self.phase == BlackjackPhase::PlayerTurn
    }
}

impl Default for BlackjackGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(ranks.iter().map(|&r| Card::new(Suit::Spades, r)).collect())
    }

    #[test]
    fn test_ordered_deck_has_every_card_once() {
        let deck = Deck::ordered();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        assert_ne!(deck, Deck::ordered());
    }

    #[test]
    fn test_draw_removes_cards() {
        let mut deck = Deck::ordered();
        let first = deck.draw().unwrap();
        assert_eq!(deck.len(), DECK_SIZE - 1);
        assert!(!deck.cards().contains(&first));
        while deck.draw().is_some() {}
        assert!(deck.is_empty());
        assert!(deck.draw().is_none());
    }

    #[test]
    fn test_card_values() {
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).label(), "10♥");
    }

    #[test]
    fn test_hand_totals() {
        assert_eq!(hand(&[Rank::Ten, Rank::Seven]).total(), 17);
        assert_eq!(hand(&[Rank::Ace, Rank::Nine]).total(), 20);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).total(), 21);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).total(), 12);
        assert_eq!(hand(&[Rank::King, Rank::Queen, Rank::Two]).total(), 22);
        assert_eq!(Hand::new().total(), 0);
    }

    #[test]
    fn test_soft_and_natural() {
        assert!(hand(&[Rank::Ace, Rank::Six]).is_soft());
        assert!(!hand(&[Rank::Ace, Rank::Six, Rank::Ten]).is_soft());
        assert!(hand(&[Rank::Ace, Rank::King]).is_natural());
        assert!(!hand(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_natural());
        assert!(hand(&[Rank::Ten, Rank::Six, Rank::Nine]).is_bust());
    }

    #[test]
    fn test_total_never_exceeds_21_when_aces_can_absorb() {
        // Every multiset of up to 4 aces plus up to 3 other cards.
        for aces in 1..=4usize {
            for a in Rank::ALL {
                for b in Rank::ALL {
                    let mut ranks = vec![Rank::Ace; aces];
                    ranks.push(a);
                    ranks.push(b);
                    let h = hand(&ranks);
                    let raw: u16 = ranks.iter().map(Rank::value).sum();
                    let ace_count = ranks.iter().filter(|r| **r == Rank::Ace).count() as u16;
                    if raw <= 21 + 10 * ace_count {
                        assert!(h.total() <= 21, "{:?} -> {}", ranks, h.total());
                    }
                }
            }
        }
    }

    #[test]
    fn test_new_game_defaults() {
        let game = BlackjackGame::new();
        assert_eq!(game.phase, BlackjackPhase::Betting);
        assert_eq!(game.deck.len(), DECK_SIZE);
        assert!(game.player.is_empty());
        assert!(game.dealer.is_empty());
        assert!(game.outcome.is_none());
        assert_eq!(game.streak, 0);
        assert!(!game.hole_card_hidden());
    }
}
