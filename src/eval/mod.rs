//! Модуль правил Set: проверка тройки, очки, объяснение, поиск сетов.
//!
//! Основные функции:
//!   `is_matched_set(cards) -> bool`
//!   `score_for_set(cards) -> Option<Points>`
//!   `find_all_matches_in_playable(deck) -> Vec<MatchRecord>`

pub mod evaluator;
pub mod lookup_tables;
pub mod search;
pub mod set_rank;

pub use evaluator::{analyze_triple, is_matched_set, match_result_explanation, score_for_set};
pub use search::{
    cards_from_match_record, find_all_matches, find_all_matches_in_playable, game_outcome,
    random_hint, random_match, GameOutcome, Hint, MatchRecord,
};
pub use set_rank::{FeatureVerdict, TripleAnalysis, SCORE_FOR_RUN, SCORE_FOR_TRIPLE};
