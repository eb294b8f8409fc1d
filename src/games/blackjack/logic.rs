//! Blackjack round logic: dealing, player actions, dealer play and settlement.

use super::types::*;
use crate::core::constants::DEALER_STAND_TOTAL;
use crate::core::game_loop::ArcadeGame;
use crate::core::records::ScoreRecord;
use rand::Rng;

/// UI-agnostic input actions for Blackjack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlackjackInput {
    /// Start a round from `Betting`, or return to `Betting` from `RoundOver`.
    Deal,
    Hit,
    Stand,
    /// Clear tallies and hands and go back to `Betting`.
    Restart,
}

/// Process player input. Intents that do not fit the current phase are ignored.
pub fn process_input<R: Rng + ?Sized>(game: &mut BlackjackGame, input: BlackjackInput, rng: &mut R) {
    match (game.phase, input) {
        (_, BlackjackInput::Restart) => restart(game),
        (BlackjackPhase::Betting, BlackjackInput::Deal) => deal_round(game, rng),
        (BlackjackPhase::PlayerTurn, BlackjackInput::Hit) => hit(game),
        (BlackjackPhase::PlayerTurn, BlackjackInput::Stand) => stand(game),
        (BlackjackPhase::RoundOver, BlackjackInput::Deal) => clear_table(game),
        _ => {}
    }
}

/// Shuffle a fresh deck and deal player, dealer, player, dealer.
pub fn deal_round<R: Rng + ?Sized>(game: &mut BlackjackGame, rng: &mut R) {
    game.deck = Deck::shuffled(rng);
    game.player.clear();
    game.dealer.clear();
    game.outcome = None;
    game.dealer_gate.reset();
    game.rounds += 1;

    for _ in 0..2 {
        if let Some(card) = game.deck.draw() {
            game.player.push(card);
        }
        if let Some(card) = game.deck.draw() {
            game.dealer.push(card);
        }
    }
    game.phase = BlackjackPhase::PlayerTurn;

    match (game.player.is_natural(), game.dealer.is_natural()) {
        (true, true) => settle(game, RoundOutcome::Push),
        (true, false) => settle(game, RoundOutcome::Blackjack),
        (false, true) => settle(game, RoundOutcome::DealerWins),
        (false, false) => {}
    }
}

/// Draw one card for the player. Busting ends the round without dealer play.
pub fn hit(game: &mut BlackjackGame) {
    if game.phase != BlackjackPhase::PlayerTurn {
        return;
    }
    if let Some(card) = game.deck.draw() {
        game.player.push(card);
    }
    if game.player.is_bust() {
        settle(game, RoundOutcome::PlayerBust);
    }
}

pub fn stand(game: &mut BlackjackGame) {
    if game.phase != BlackjackPhase::PlayerTurn {
        return;
    }
    game.phase = BlackjackPhase::DealerTurn;
    game.dealer_gate.reset();
}

/// One dealer action: draw below 17, then settle once the dealer stands or
/// busts. Returns true if a card was drawn.
pub fn dealer_step(game: &mut BlackjackGame) -> bool {
    if game.phase != BlackjackPhase::DealerTurn {
        return false;
    }

    let mut drew = false;
    if game.dealer.total() < DEALER_STAND_TOTAL {
        if let Some(card) = game.deck.draw() {
            game.dealer.push(card);
            drew = true;
        }
    }

    if game.dealer.total() >= DEALER_STAND_TOTAL || game.deck.is_empty() {
        settle(game, showdown(&game.player, &game.dealer));
    }
    drew
}

/// Run the dealer to completion. Returns the number of cards drawn.
pub fn play_dealer(game: &mut BlackjackGame) -> usize {
    let mut draws = 0;
    while game.phase == BlackjackPhase::DealerTurn {
        if dealer_step(game) {
            draws += 1;
        }
    }
    draws
}

/// Compare totals once the dealer is done. Player busts never reach here.
pub fn showdown(player: &Hand, dealer: &Hand) -> RoundOutcome {
    if dealer.is_bust() {
        return RoundOutcome::DealerBust;
    }
    let (p, d) = (player.total(), dealer.total());
    if p > d {
        RoundOutcome::PlayerWins
    } else if p == d {
        RoundOutcome::Push
    } else {
        RoundOutcome::DealerWins
    }
}

fn settle(game: &mut BlackjackGame, outcome: RoundOutcome) {
    game.outcome = Some(outcome);
    game.phase = BlackjackPhase::RoundOver;

    if outcome.is_win() {
        game.wins += 1;
        game.streak += 1;
    } else if outcome.is_loss() {
        game.losses += 1;
        game.streak = 0;
    } else {
        game.pushes += 1;
    }
}

/// `RoundOver -> Betting`: clear the hands, keep the tallies.
fn clear_table(game: &mut BlackjackGame) {
    game.player.clear();
    game.dealer.clear();
    game.outcome = None;
    game.phase = BlackjackPhase::Betting;
}

fn restart(game: &mut BlackjackGame) {
    *game = BlackjackGame::new();
}

impl BlackjackGame {
    /// Offer the streak as a record if this step just settled a round with a
    /// streak above the stored best.
    fn settled_record(&self, was_over: bool, best: &ScoreRecord) -> Option<ScoreRecord> {
        if !was_over && self.is_over() && self.streak > best.score {
            Some(ScoreRecord { score: self.streak })
        } else {
            None
        }
    }
}

impl ArcadeGame for BlackjackGame {
    type Input = BlackjackInput;
    type Record = ScoreRecord;
    const RECORD_FILE: &'static str = "blackjack_record.json";

    fn handle_input<R: Rng + ?Sized>(
        &mut self,
        input: BlackjackInput,
        best: &ScoreRecord,
        rng: &mut R,
    ) -> Option<ScoreRecord> {
        let was_over = self.is_over();
        process_input(self, input, rng);
        self.settled_record(was_over, best)
    }

    fn advance<R: Rng + ?Sized>(
        &mut self,
        dt_ms: u64,
        best: &ScoreRecord,
        _rng: &mut R,
    ) -> Option<ScoreRecord> {
        if self.phase != BlackjackPhase::DealerTurn || !self.dealer_gate.advance(dt_ms) {
            return None;
        }
        dealer_step(self);
        self.settled_record(false, best)
    }

    fn score(&self) -> u32 {
        self.streak
    }

    fn is_over(&self) -> bool {
        self.phase == BlackjackPhase::RoundOver
    }

    fn summary(&self) -> String {
        match self.outcome {
            Some(outcome) => format!(
                "{} ({} vs {})",
                outcome.message(),
                self.player.total(),
                self.dealer.total()
            ),
            None => "Round abandoned".to_string(),
        }
    }
}
