use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Ink color printed on a card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// How the symbols on a card are filled in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Fill {
    /// Outline only
    Empty,
    /// Striped interior
    Hatch,
    /// Fully shaded
    Solid,
}

/// Outline of the symbols on a card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Shape {
    Capsule,
    Eyebrow,
    Rhombus,
}

/// Number of symbols printed on a card (1 to 3).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Count {
    One = 1,
    Two,
    Three,
}

impl Count {
    /// Converts a symbol count into its domain value.
    ///
    /// Anything outside `1..=3` is a malformed attribute and is rejected.
    ///
    /// ```
    /// use setgame_engine::cards::Count;
    ///
    /// assert_eq!(Count::from_u8(2), Ok(Count::Two));
    /// assert!(Count::from_u8(4).is_err());
    /// ```
    pub fn from_u8(v: u8) -> Result<Count, GameError> {
        match v {
            1 => Ok(Count::One),
            2 => Ok(Count::Two),
            3 => Ok(Count::Three),
            _ => Err(GameError::InvalidAttribute {
                attribute: "count",
                value: v,
            }),
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

/// A single Set card, fully described by its four attributes.
///
/// Cards are plain values: two cards with the same attributes are the same
/// card. Field order drives the derived ordering, so cards sort by count
/// first, then fill, color and finally shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Number of symbols (primary sort key)
    pub count: Count,
    /// Fill pattern of the symbols
    pub fill: Fill,
    /// Ink color of the symbols
    pub color: Color,
    /// Symbol outline (least significant sort key)
    pub shape: Shape,
}

impl Card {
    pub const fn new(color: Color, fill: Fill, shape: Shape, count: Count) -> Self {
        Self {
            count,
            fill,
            color,
            shape,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {:?} - {:?} - {:?}",
            self.count.value(),
            self.color,
            self.fill,
            self.shape
        )
    }
}

pub fn all_colors() -> [Color; 3] {
    [Color::Red, Color::Green, Color::Blue]
}

pub fn all_fills() -> [Fill; 3] {
    [Fill::Empty, Fill::Hatch, Fill::Solid]
}

pub fn all_shapes() -> [Shape; 3] {
    [Shape::Capsule, Shape::Eyebrow, Shape::Rhombus]
}

pub fn all_counts() -> [Count; 3] {
    [Count::One, Count::Two, Count::Three]
}

/// Number of cards in a complete deck (3^4).
pub const DECK_SIZE: usize = 81;

/// Builds the canonical 81-card deck: every attribute combination exactly once.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &shape in &all_shapes() {
        for &color in &all_colors() {
            for &fill in &all_fills() {
                for &count in &all_counts() {
                    v.push(Card::new(color, fill, shape, count));
                }
            }
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_count_then_fill_then_color_then_shape() {
        let low = Card::new(Color::Blue, Fill::Solid, Shape::Rhombus, Count::One);
        let high = Card::new(Color::Red, Fill::Empty, Shape::Capsule, Count::Two);
        assert!(low < high);

        let a = Card::new(Color::Blue, Fill::Empty, Shape::Rhombus, Count::One);
        let b = Card::new(Color::Red, Fill::Hatch, Shape::Capsule, Count::One);
        assert!(a < b);

        let c = Card::new(Color::Red, Fill::Empty, Shape::Rhombus, Count::One);
        let d = Card::new(Color::Green, Fill::Empty, Shape::Capsule, Count::One);
        assert!(c < d);

        let e = Card::new(Color::Red, Fill::Empty, Shape::Capsule, Count::One);
        let f = Card::new(Color::Red, Fill::Empty, Shape::Eyebrow, Count::One);
        assert!(e < f);
    }

    #[test]
    fn display_lists_count_first() {
        let c = Card::new(Color::Green, Fill::Hatch, Shape::Eyebrow, Count::Three);
        assert_eq!(c.to_string(), "3 - Green - Hatch - Eyebrow");
    }
}
