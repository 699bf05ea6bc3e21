use crate::api::dto::{CardDto, HintDto};
use crate::domain::card::Card;
use crate::engine::Phase;
use crate::eval::Hint;

/// Маппинг карты в DTO для оболочки.
pub fn card_to_dto(card: &Card) -> CardDto {
    CardDto {
        id: card.id,
        code: card.to_string(),
        description: card.describe(),
        count: card.shape_count,
        shape: card.shape,
        color: card.color,
        shading: card.shading,
        selected: card.is_selected(),
    }
}

pub fn cards_to_dto(cards: &[Card]) -> Vec<CardDto> {
    cards.iter().map(card_to_dto).collect()
}

pub fn hint_to_dto(hint: &Hint) -> HintDto {
    HintDto {
        card_ids: hint.cards.iter().map(|c| c.id).collect(),
        cards: cards_to_dto(&hint.cards),
        message: hint.message.clone(),
        sets_available: hint.sets_available,
    }
}

/// Текстовое имя фазы; "NotStarted", если автомат ещё не запущен.
pub fn phase_label(phase: Option<Phase>) -> &'static str {
    match phase {
        Some(Phase::Selecting) => "Selecting",
        Some(Phase::Evaluating) => "Evaluating",
        None => "NotStarted",
    }
}
