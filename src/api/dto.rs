use serde::{Deserialize, Serialize};

use crate::domain::card::{Color, Shading, Shape};
use crate::domain::points::Points;
use crate::domain::CardId;
use crate::engine::GameEvent;
use crate::eval::GameOutcome;

/// DTO карты в раскладе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub id: CardId,
    /// Короткий код, например "2GTO".
    pub code: String,
    /// "2 green striped ovals".
    pub description: String,
    pub count: u8,
    pub shape: Shape,
    pub color: Color,
    pub shading: Shading,
    pub selected: bool,
}

/// DTO расклада и состояния партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableauViewDto {
    /// Играбельные карты в порядке раскладки.
    pub cards: Vec<CardDto>,
    pub selected: Vec<CardId>,
    pub deck_remaining: usize,
    pub score: Points,
    /// "Selecting" / "Evaluating".
    pub phase: String,
    /// Объяснение проверки: только когда выбрано 3 карты.
    pub explanation: Option<String>,
    pub panel_visible: bool,
    pub outcome: Option<GameOutcome>,
    /// Счётчик мутаций колоды.
    pub generation: u64,
}

/// DTO подсказки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HintDto {
    pub card_ids: Vec<CardId>,
    pub cards: Vec<CardDto>,
    pub message: String,
    pub sets_available: usize,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// События, порождённые командой, и расклад после неё.
    TableauState {
        events: Vec<GameEvent>,
        tableau: TableauViewDto,
    },

    /// Подсказка (очки уже списаны, если было нужно).
    Hint {
        hint: HintDto,
        tableau: TableauViewDto,
    },
}
