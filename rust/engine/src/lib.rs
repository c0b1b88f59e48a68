//! # setgame-engine: Rules Engine for the Card Game Set
//!
//! Owns the 81-card deck, the stock of undrawn cards, the face-up table and
//! the players' won piles, and implements the matching logic: generating
//! card combinations, testing the set rule and searching the table for sets.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card attributes (Color, Fill, Shape, Count), Card and deck construction
//! - [`combinations`] - Order-preserving k-combination enumeration
//! - [`rules`] - The same-or-all-different set predicate
//! - [`search`] - Finding one, all, or any set among a group of cards
//! - [`stock`] - Undrawn cards with seeded random draws
//! - [`engine`] - Table/stock management and scoring
//! - [`game`] - Game state and observer callbacks
//! - [`player`] - Player capability trait and reference player
//! - [`config`] - Engine configuration (seed, capacities, end policy)
//! - [`logger`] - Event history and JSONL game records
//! - [`logging`] - `tracing` subscriber setup
//! - [`errors`] - Error types for game and config operations
//!
//! ## Quick Start
//!
//! ```rust
//! use setgame_engine::cards::{Card, Color, Count, Fill, Shape};
//! use setgame_engine::rules::is_set;
//!
//! let set = [
//!     Card::new(Color::Red, Fill::Empty, Shape::Capsule, Count::One),
//!     Card::new(Color::Red, Fill::Hatch, Shape::Capsule, Count::One),
//!     Card::new(Color::Red, Fill::Solid, Shape::Capsule, Count::One),
//! ];
//! assert!(is_set(&set));
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Draws and searches share one seeded RNG, so a seed replays a game:
//!
//! ```rust
//! use setgame_engine::config::EngineConfig;
//! use setgame_engine::engine::Engine;
//! use setgame_engine::player::Player;
//!
//! let mut e1 = Engine::<Player>::with_config(vec![], EngineConfig::with_seed(42)).unwrap();
//! let mut e2 = Engine::<Player>::with_config(vec![], EngineConfig::with_seed(42)).unwrap();
//! assert_eq!(e1.draw().unwrap(), e2.draw().unwrap());
//! ```

pub mod cards;
pub mod combinations;
pub mod config;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod logging;
pub mod player;
pub mod rules;
pub mod search;
pub mod stock;
