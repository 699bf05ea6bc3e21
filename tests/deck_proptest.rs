use std::collections::HashSet;

use proptest::prelude::*;

use set_engine::domain::deck::{Deck, MAX_SELECTION_COUNT, UNIQUE_CARD_COUNT};
use set_engine::domain::CardId;

#[derive(Clone, Debug)]
enum Op {
    Deal(usize),
    Toggle(CardId),
    ReplaceSelected,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => (0usize..6).prop_map(Op::Deal),
        4 => (0u32..90).prop_map(Op::Toggle),
        1 => Just(Op::ReplaceSelected),
    ]
}

fn check_partition(deck: &Deck) -> Result<(), TestCaseError> {
    prop_assert_eq!(deck.len(), UNIQUE_CARD_COUNT);
    prop_assert!(deck.first_undealt() <= deck.len());
    prop_assert_eq!(deck.deck_remaining_count(), deck.len() - deck.first_undealt());

    let ids: HashSet<CardId> = deck.cards().iter().map(|c| c.id).collect();
    prop_assert_eq!(ids.len(), UNIQUE_CARD_COUNT);

    for card in deck.cards() {
        prop_assert_eq!(deck.card(card.id).map(|c| c.id), Some(card.id));
    }
    for card in deck.deck_cards() {
        prop_assert!(!card.is_selected() && !card.is_matched());
    }

    let matched = deck.dealt_cards().iter().filter(|c| c.is_matched()).count();
    prop_assert_eq!(deck.playable_count() + matched, deck.first_undealt());

    prop_assert!(deck.selection_count() <= MAX_SELECTION_COUNT);
    for card in deck.selected_cards() {
        prop_assert!(deck.is_playable(card.id));
    }
    Ok(())
}

proptest! {
    #[test]
    fn deck_partition_invariants_hold(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut deck = Deck::standard_81();

        for op in ops {
            match op {
                Op::Deal(n) => {
                    let before = deck.deck_remaining_count();
                    let dealt = deck.deal(n);
                    prop_assert_eq!(dealt, n.min(before));
                }
                Op::Toggle(id) => {
                    let playable = deck.is_playable(id);
                    let generation = deck.generation();
                    let changed = deck.toggle_selection(id);
                    if !playable {
                        prop_assert!(!changed);
                        prop_assert_eq!(deck.generation(), generation);
                    }
                }
                Op::ReplaceSelected => {
                    let selected = deck.selected_ids();
                    let playable_before = deck.playable_count();
                    let remaining_before = deck.deck_remaining_count();

                    let result = deck.replace_matched(&selected);

                    prop_assert_eq!(&result.retired, &selected);
                    prop_assert_eq!(result.dealt_in.len(), selected.len().min(remaining_before));
                    prop_assert_eq!(
                        deck.playable_count(),
                        playable_before - selected.len() + result.dealt_in.len()
                    );
                    for id in &selected {
                        prop_assert!(!deck.is_playable(*id));
                    }
                    for id in &result.dealt_in {
                        prop_assert!(deck.is_playable(*id));
                    }
                    prop_assert_eq!(deck.selection_count(), 0);
                }
            }
            check_partition(&deck)?;
        }
    }
}
