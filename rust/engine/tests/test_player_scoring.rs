use setgame_engine::cards::{Card, Color as C, Count as N, Fill as F, Shape as S};
use setgame_engine::engine::Engine;
use setgame_engine::errors::GameError;
use setgame_engine::logger::EventKind;
use setgame_engine::player::{Player, SetPlayer};

fn three_cards() -> [Card; 3] {
    [
        Card::new(C::Blue, F::Empty, S::Capsule, N::One),
        Card::new(C::Red, F::Empty, S::Capsule, N::One),
        Card::new(C::Green, F::Empty, S::Capsule, N::One),
    ]
}

#[test]
fn engine_holds_the_players_it_was_given() {
    let e: Engine<Player> = Engine::with_ids([0]);
    assert_eq!(e.players().len(), 1);
    assert_eq!(e.player(&0).map(|p| *p.id()), Some(0));
    assert!(e.player(&1).is_none());
}

#[test]
fn score_round_trip_through_the_engine() {
    let mut e: Engine<Player> = Engine::with_ids([0]);
    assert_eq!(e.player(&0).unwrap().score(), 0);

    e.add_score(&three_cards(), &0).unwrap();
    assert_eq!(e.player(&0).unwrap().score(), 3);

    let removed = e.remove_score(1, &0).unwrap();
    assert_eq!(removed.len(), 1);
    assert!(three_cards().contains(&removed[0]));
    assert_eq!(e.player(&0).unwrap().score(), 2);

    let rest = e.remove_score(10, &0).unwrap();
    assert_eq!(rest.len(), 2);
    assert!(!rest.contains(&removed[0]));
    assert_eq!(e.player(&0).unwrap().score(), 0);

    let kinds: Vec<EventKind> = e.history().iter().map(|ev| ev.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::ScoreAdded,
            EventKind::ScoreRemoved,
            EventKind::ScoreRemoved
        ]
    );
}

#[test]
fn debit_on_an_empty_pile_returns_nothing() {
    let mut p = Player::with_id(4);
    assert!(p.debit(3).is_empty());
    assert_eq!(p.score(), 0);
}

#[test]
fn debit_exactly_the_pile_empties_it() {
    let mut p = Player::with_id(4);
    p.credit(&three_cards());
    let mut all = p.debit(3);
    all.sort();
    let mut expected = three_cards().to_vec();
    expected.sort();
    assert_eq!(all, expected);
    assert_eq!(p.score(), 0);
}

#[test]
fn scoring_an_unknown_player_fails() {
    let mut e: Engine<Player> = Engine::with_ids([0, 1]);
    assert_eq!(
        e.add_score(&three_cards(), &7),
        Err(GameError::UnknownPlayer { id: "7".into() })
    );
    assert!(e.remove_score(1, &7).is_err());
}

/// Player keyed by name, to show the engine is generic over the id type.
#[derive(Debug)]
struct Named {
    name: String,
    pile: Vec<Card>,
}

impl SetPlayer for Named {
    type Id = String;

    fn with_id(id: String) -> Self {
        Self {
            name: id,
            pile: Vec::new(),
        }
    }
    fn id(&self) -> &String {
        &self.name
    }
    fn score(&self) -> usize {
        self.pile.len()
    }
    fn credit(&mut self, cards: &[Card]) {
        self.pile.extend_from_slice(cards);
    }
    fn debit(&mut self, count: usize) -> Vec<Card> {
        let keep = self.pile.len().saturating_sub(count);
        self.pile.split_off(keep)
    }
}

#[test]
fn custom_player_types_plug_in() {
    let mut e: Engine<Named> = Engine::with_ids(["ada".to_string(), "bo".to_string()]);
    e.add_score(&three_cards(), &"bo".to_string()).unwrap();
    assert_eq!(e.player(&"bo".to_string()).unwrap().score(), 3);
    assert_eq!(e.remove_score(5, &"bo".to_string()).unwrap().len(), 3);
    assert_eq!(e.player(&"ada".to_string()).unwrap().score(), 0);
}
