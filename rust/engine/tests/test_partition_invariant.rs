use std::collections::HashSet;

use proptest::prelude::*;

use setgame_engine::cards::{full_deck, Card};
use setgame_engine::config::EngineConfig;
use setgame_engine::engine::Engine;
use setgame_engine::player::{Player, SetPlayer};

#[derive(Debug, Clone)]
enum Op {
    Draw,
    Redraw,
    AddCards,
    TakeSet(usize),
    SubmitTableTriple(usize, usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Draw),
        1 => Just(Op::Redraw),
        2 => Just(Op::AddCards),
        4 => (0usize..3).prop_map(Op::TakeSet),
        2 => (0usize..15, 0usize..15, 0usize..15)
            .prop_map(|(a, b, c)| Op::SubmitTableTriple(a, b, c)),
    ]
}

fn assert_partition(e: &Engine<Player>) {
    let mut seen: Vec<Card> = e.stock().to_vec();
    seen.extend_from_slice(e.table());
    for p in e.players() {
        seen.extend_from_slice(p.cards_won());
    }
    assert_eq!(seen.len(), 81, "stock + table + won piles must cover the deck");
    let unique: HashSet<Card> = seen.iter().copied().collect();
    let deck: HashSet<Card> = full_deck().into_iter().collect();
    assert_eq!(unique, deck);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_card_is_in_exactly_one_place(seed in any::<u64>(), ops in prop::collection::vec(op(), 1..60)) {
        let players = vec![Player::with_id(0), Player::with_id(1), Player::with_id(2)];
        let mut e = Engine::with_config(players, EngineConfig::with_seed(seed)).unwrap();
        for op in ops {
            match op {
                Op::Draw => { e.draw().unwrap(); }
                Op::Redraw => { e.redraw().unwrap(); }
                Op::AddCards => { e.add_cards().unwrap(); }
                Op::TakeSet(player) => {
                    if let Some(set) = e.find_set_on_table(None) {
                        e.set_found(set, &player).unwrap();
                    }
                }
                Op::SubmitTableTriple(a, b, c) => {
                    let t = e.table();
                    if a != b && b != c && a != c && a.max(b).max(c) < t.len() {
                        let triple = [t[a], t[b], t[c]];
                        // valid or not, the deck must stay partitioned
                        let _ = e.set_found(triple, &0);
                    }
                }
            }
            assert_partition(&e);
            prop_assert!(e.table().len() <= 15);
        }
    }
}
