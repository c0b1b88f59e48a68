use crate::cards::Card;
use crate::errors::GameError;

/// True when the three values are all equal or all pairwise distinct.
fn same_or_all_different<T: PartialEq>(a: T, b: T, c: T) -> bool {
    (a == b && b == c) || (a != b && a != c && b != c)
}

/// Tests whether three cards form a set.
///
/// Every attribute (color, fill, shape, count) must independently be either
/// identical on all three cards or different on all three cards.
///
/// # Examples
///
/// ```
/// use setgame_engine::cards::{Card, Color, Count, Fill, Shape};
/// use setgame_engine::rules::is_set;
///
/// let red = Card::new(Color::Red, Fill::Empty, Shape::Capsule, Count::One);
/// let green = Card::new(Color::Green, Fill::Empty, Shape::Capsule, Count::One);
/// let blue = Card::new(Color::Blue, Fill::Empty, Shape::Capsule, Count::One);
/// assert!(is_set(&[red, green, blue]));
///
/// let two = Card::new(Color::Red, Fill::Empty, Shape::Capsule, Count::Two);
/// let solid = Card::new(Color::Red, Fill::Solid, Shape::Capsule, Count::One);
/// assert!(!is_set(&[red, two, solid]));
/// ```
pub fn is_set(cards: &[Card; 3]) -> bool {
    let [a, b, c] = cards;
    same_or_all_different(a.fill, b.fill, c.fill)
        && same_or_all_different(a.shape, b.shape, c.shape)
        && same_or_all_different(a.color, b.color, c.color)
        && same_or_all_different(a.count, b.count, c.count)
}

/// Slice variant of [`is_set`]; anything other than exactly three cards is not a set.
pub fn is_set_slice(cards: &[Card]) -> bool {
    match <&[Card; 3]>::try_from(cards) {
        Ok(triple) => is_set(triple),
        Err(_) => false,
    }
}

/// Validates a claimed set, handing the triple back when it holds.
///
/// # Errors
///
/// Returns [`GameError::InvalidSet`] when the cards break the
/// same-or-all-different rule on any attribute.
///
/// ```
/// use setgame_engine::cards::{Card, Color, Count, Fill, Shape};
/// use setgame_engine::errors::GameError;
/// use setgame_engine::rules::validate_set;
///
/// let a = Card::new(Color::Red, Fill::Empty, Shape::Capsule, Count::One);
/// let b = Card::new(Color::Red, Fill::Empty, Shape::Capsule, Count::Two);
/// let c = Card::new(Color::Red, Fill::Solid, Shape::Capsule, Count::One);
/// assert!(matches!(validate_set([a, b, c]), Err(GameError::InvalidSet { .. })));
/// ```
pub fn validate_set(cards: [Card; 3]) -> Result<[Card; 3], GameError> {
    if is_set(&cards) {
        Ok(cards)
    } else {
        Err(GameError::InvalidSet { cards })
    }
}

/// Canonical form of a triple, used to compare sets regardless of card order.
pub fn sorted_triple(cards: &[Card; 3]) -> [Card; 3] {
    let mut sorted = *cards;
    sorted.sort_unstable();
    sorted
}

/// Completes a set: the unique card that forms a set with `a` and `b`.
///
/// For each attribute the third value is the shared one when `a` and `b`
/// agree, otherwise the one value neither of them has.
pub fn third_card(a: &Card, b: &Card) -> Card {
    fn complete<T: Copy + PartialEq>(x: T, y: T, domain: [T; 3]) -> T {
        if x == y {
            return x;
        }
        domain
            .into_iter()
            .find(|v| *v != x && *v != y)
            .unwrap_or(x)
    }
    use crate::cards::{all_colors, all_counts, all_fills, all_shapes};
    Card::new(
        complete(a.color, b.color, all_colors()),
        complete(a.fill, b.fill, all_fills()),
        complete(a.shape, b.shape, all_shapes()),
        complete(a.count, b.count, all_counts()),
    )
}
