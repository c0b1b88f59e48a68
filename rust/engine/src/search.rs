//! Searching a group of cards for sets.
//!
//! All searches enumerate the 3-card combinations of the input and shuffle
//! the enumeration order with the caller's RNG before testing, so which set
//! [`find_one`] reports depends on the RNG state.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::cards::Card;
use crate::combinations::combinations;
use crate::rules::{is_set, sorted_triple};

fn shuffled_triples<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<[Card; 3]> {
    let mut triples: Vec<[Card; 3]> = combinations(cards, 3)
        .into_iter()
        .filter_map(|combo| <[Card; 3]>::try_from(combo).ok())
        .collect();
    triples.shuffle(rng);
    triples
}

/// Returns the first set found in a shuffled walk over all triples of `cards`.
///
/// With `except`, a set equal to it (ignoring card order) is skipped so a
/// caller can ask for "another" set. The skip only applies when more than one
/// triple exists; if no other set turns up, `None` is returned even though
/// `except` itself is still a set.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use setgame_engine::cards::full_deck;
/// use setgame_engine::rules::is_set;
/// use setgame_engine::search::find_one;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let deck = full_deck();
/// let found = find_one(&deck[..12], None, &mut rng).expect("a set among 12 ordered cards");
/// assert!(is_set(&found));
/// ```
pub fn find_one<R: Rng + ?Sized>(
    cards: &[Card],
    except: Option<&[Card; 3]>,
    rng: &mut R,
) -> Option<[Card; 3]> {
    let triples = shuffled_triples(cards, rng);
    let skip = except
        .filter(|_| triples.len() > 1)
        .map(sorted_triple);

    for triple in triples {
        if !is_set(&triple) {
            continue;
        }
        if skip.is_some_and(|s| s == sorted_triple(&triple)) {
            debug!(?triple, "skipping previously shown set");
            continue;
        }
        return Some(triple);
    }
    None
}

/// Collects every set among `cards`, in no particular order.
pub fn find_all<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<[Card; 3]> {
    shuffled_triples(cards, rng)
        .into_iter()
        .filter(is_set)
        .collect()
}

/// True when at least one set exists among `cards`.
///
/// Deterministic and shuffle-free: membership does not depend on
/// enumeration order.
pub fn exists(cards: &[Card]) -> bool {
    combinations(cards, 3)
        .iter()
        .any(|combo| crate::rules::is_set_slice(combo))
}
