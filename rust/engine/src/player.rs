use std::fmt::{Debug, Display};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;

/// Capability the engine needs from a player: identity and a pile of won cards.
///
/// The engine only ever credits cards into the pile and debits a number of
/// cards out of it; it never inspects the pile directly.
pub trait SetPlayer {
    /// Identifier used to address the player through the engine.
    type Id: Clone + Eq + Debug + Display;

    fn with_id(id: Self::Id) -> Self;
    fn id(&self) -> &Self::Id;
    /// Number of cards currently in the won pile.
    fn score(&self) -> usize;
    /// Adds cards to the won pile.
    fn credit(&mut self, cards: &[Card]);
    /// Removes up to `count` cards from the won pile and returns them.
    ///
    /// When fewer than `count` cards are held, all of them are returned and
    /// the pile is left empty.
    fn debit(&mut self, count: usize) -> Vec<Card>;
}

/// Reference player: a numeric id and a pile of won cards.
///
/// Debits pick cards uniformly at random from the pile using a ChaCha20
/// stream seeded from the id.
///
/// ```
/// use setgame_engine::player::{Player, SetPlayer};
/// use setgame_engine::cards::full_deck;
///
/// let mut p = Player::with_id(0);
/// p.credit(&full_deck()[..3]);
/// assert_eq!(p.debit(1).len(), 1);
/// assert_eq!(p.score(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Player {
    /// Player identifier
    id: usize,
    /// Cards won so far
    won: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Player {
    pub fn new_with_seed(id: usize, seed: u64) -> Self {
        Self {
            id,
            won: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn cards_won(&self) -> &[Card] {
        &self.won
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl SetPlayer for Player {
    type Id = usize;

    fn with_id(id: usize) -> Self {
        Self::new_with_seed(id, id as u64)
    }

    fn id(&self) -> &usize {
        &self.id
    }

    fn score(&self) -> usize {
        self.won.len()
    }

    fn credit(&mut self, cards: &[Card]) {
        self.won.extend_from_slice(cards);
    }

    fn debit(&mut self, count: usize) -> Vec<Card> {
        if count >= self.won.len() {
            return std::mem::take(&mut self.won);
        }
        let mut removed = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = self.rng.random_range(0..self.won.len());
            removed.push(self.won.swap_remove(idx));
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::full_deck;

    #[test]
    fn players_compare_by_id() {
        let mut a = Player::with_id(3);
        let b = Player::new_with_seed(3, 99);
        a.credit(&full_deck()[..3]);
        assert_eq!(a, b);
        assert_ne!(a, Player::with_id(4));
    }

    #[test]
    fn debit_zero_is_a_no_op() {
        let mut p = Player::with_id(1);
        p.credit(&full_deck()[..2]);
        assert!(p.debit(0).is_empty());
        assert_eq!(p.score(), 2);
    }
}
