use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The undrawn cards of a game.
///
/// Draws pick cards uniformly at random without replacement using a seeded
/// ChaCha20 stream, so two stocks built from the same seed hand out cards in
/// the same order.
///
/// ```
/// use setgame_engine::stock::Stock;
///
/// let mut stock = Stock::new_with_seed(42);
/// assert_eq!(stock.remaining(), 81);
/// let drawn = stock.draw(12);
/// assert_eq!(drawn.len(), 12);
/// assert_eq!(stock.remaining(), 69);
/// ```
#[derive(Debug, Clone)]
pub struct Stock {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Stock {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_cards(full_deck(), seed)
    }

    /// Stock holding exactly `cards`; duplicates are kept as given.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Removes up to `n` random cards; fewer when the stock runs short.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            let idx = self.rng.random_range(0..self.cards.len());
            drawn.push(self.cards.swap_remove(idx));
        }
        drawn
    }

    pub fn put_back(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// RNG shared with set searches so a seed reproduces a whole game.
    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draw_never_exceeds_remaining() {
        let mut stock = Stock::new_with_seed(1);
        assert_eq!(stock.draw(80).len(), 80);
        assert_eq!(stock.draw(5).len(), 1);
        assert!(stock.draw(3).is_empty());
        assert!(stock.is_empty());
    }

    #[test]
    fn drawn_cards_leave_the_stock() {
        let mut stock = Stock::new_with_seed(9);
        let drawn = stock.draw(20);
        let unique: HashSet<Card> = drawn.iter().copied().collect();
        assert_eq!(unique.len(), 20);
        assert!(drawn.iter().all(|c| !stock.cards().contains(c)));
        stock.put_back(drawn);
        assert_eq!(stock.remaining(), 81);
    }
}
