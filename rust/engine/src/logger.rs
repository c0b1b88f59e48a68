use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::GameState;

/// Kind of change recorded in a game's event history.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Cards moved from the stock to the table
    Draw,
    /// Table cards returned to the stock before drawing again
    Redraw,
    /// Table topped up to its extended capacity
    AddCards,
    /// A valid set was taken off the table and credited
    SetFound,
    /// Cards removed from the table without scoring
    RemovedFromTable,
    /// Cards credited to a player outside of `set_found`
    ScoreAdded,
    /// Cards debited from a player's pile
    ScoreRemoved,
    /// Game state transition
    StateChanged,
}

/// One entry of the engine's event history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the history, starting at 1
    pub seq: usize,
    pub kind: EventKind,
    /// Cards involved in the change
    pub cards: Vec<Card>,
    /// Display form of the player id, for scoring events
    #[serde(default)]
    pub player: Option<String>,
    /// New state, for `StateChanged` events
    #[serde(default)]
    pub state: Option<GameState>,
    /// Timestamp (RFC3339), filled in by [`write_record`] when missing
    #[serde(default)]
    pub ts: Option<String>,
}

/// Summary of a whole game, written as one JSON line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed the game was played with
    pub seed: u64,
    pub events: Vec<EventRecord>,
    /// Final (player, score) pairs
    pub scores: Vec<(String, usize)>,
    #[serde(default)]
    pub ts: Option<String>,
}

/// Game id for the `seq`-th game of `date` (format: YYYYMMDD-NNNNNN).
pub fn game_id(date: NaiveDate, seq: u32) -> String {
    format!("{}-{:06}", date.format("%Y%m%d"), seq)
}

/// Writes `record` as one LF-terminated JSON line.
///
/// The game and every event without a timestamp get the current time.
pub fn write_record<W: Write>(w: &mut W, record: &GameRecord) -> io::Result<()> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut rec = record.clone();
    rec.ts.get_or_insert_with(|| now.clone());
    for ev in &mut rec.events {
        ev.ts.get_or_insert_with(|| now.clone());
    }
    serde_json::to_writer(&mut *w, &rec).map_err(io::Error::other)?;
    w.write_all(b"\n")?;
    w.flush()
}

/// Appends `record` to the JSONL file at `path`, creating it if needed.
pub fn append_record<P: AsRef<Path>>(path: P, record: &GameRecord) -> io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_record(&mut file, record)
}
