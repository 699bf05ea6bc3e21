use serde::{Deserialize, Serialize};

use crate::domain::deck::MAX_SELECTION_COUNT;
use crate::domain::points::Points;
use crate::engine::{GameEvent, GameSession, RandomSource};
use crate::eval::cards_from_match_record;
use crate::infra::mapping::{cards_to_dto, phase_label};

use super::dto::{CardDto, TableauViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Расклад и состояние партии.
    GetTableau,

    /// Выбранные карты.
    SelectedCards,

    DeckRemaining,

    /// Объяснение результата проверки текущего выбора.
    MatchExplanation,

    /// Очки за текущий выбор, если это сет.
    ScoreForSelection,

    /// Все сеты в раскладе (кубический перебор).
    AllMatches,

    /// Журнал событий партии.
    History,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Tableau(TableauViewDto),
    Cards(Vec<CardDto>),
    DeckRemaining(usize),
    Explanation(String),
    Score(Option<Points>),
    /// Каждый сет: три карты.
    Matches(Vec<Vec<CardDto>>),
    History(Vec<GameEvent>),
}

pub fn answer<R: RandomSource>(session: &GameSession<R>, query: &Query) -> QueryResponse {
    match query {
        Query::GetTableau => QueryResponse::Tableau(build_tableau_view(session)),
        Query::SelectedCards => QueryResponse::Cards(cards_to_dto(&session.selected_cards())),
        Query::DeckRemaining => QueryResponse::DeckRemaining(session.deck_remaining_count()),
        Query::MatchExplanation => QueryResponse::Explanation(session.match_result_explanation()),
        Query::ScoreForSelection => QueryResponse::Score(session.score_for_current_selection()),
        Query::AllMatches => {
            let playable = session.playable_cards();
            let matches = session
                .find_all_matches_in_playable()
                .into_iter()
                .map(|record| cards_to_dto(&cards_from_match_record(&playable, record)))
                .collect();
            QueryResponse::Matches(matches)
        }
        Query::History => QueryResponse::History(session.history().events.clone()),
    }
}

/// Сформировать DTO расклада по сессии.
pub fn build_tableau_view<R: RandomSource>(session: &GameSession<R>) -> TableauViewDto {
    let selected = session.selected_cards();
    let explanation = if selected.len() == MAX_SELECTION_COUNT {
        Some(session.match_result_explanation())
    } else {
        None
    };

    TableauViewDto {
        cards: cards_to_dto(&session.playable_cards()),
        selected: selected.iter().map(|c| c.id).collect(),
        deck_remaining: session.deck_remaining_count(),
        score: session.score(),
        phase: phase_label(session.phase()).to_string(),
        explanation,
        panel_visible: session.is_panel_visible(),
        outcome: session.outcome(),
        generation: session.deck_generation(),
    }
}
