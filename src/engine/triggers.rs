use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::CardId;

/// Входной сигнал для автоматов игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum InputTrigger {
    /// Игрок тапнул карту. `was_selected`: была ли она выбрана в момент тапа.
    CardTapped { card_id: CardId, was_selected: bool },

    /// Правила проверили выбранную тройку.
    MatchStatusEvaluated { is_match: bool },

    /// В колоде закончились карты.
    CardsExhausted,

    /// Игрок подтвердил панель с результатом проверки.
    MatchIndicatorAcknowledged,

    /// Игрок нажал "раздать ещё 3".
    DealThreeTapped,
}

impl fmt::Display for InputTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputTrigger::CardTapped {
                card_id,
                was_selected,
            } => write!(f, "CardTapped(card={card_id}, selected={was_selected})"),
            InputTrigger::MatchStatusEvaluated { is_match } => {
                write!(f, "MatchStatusEvaluated({is_match})")
            }
            InputTrigger::CardsExhausted => write!(f, "CardsExhausted"),
            InputTrigger::MatchIndicatorAcknowledged => write!(f, "MatchIndicatorAcknowledged"),
            InputTrigger::DealThreeTapped => write!(f, "DealThreeTapped"),
        }
    }
}
