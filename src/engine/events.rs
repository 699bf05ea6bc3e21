use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::CardId;
use crate::eval::GameOutcome;

use super::effects::Phase;

/// Тип события партии (то, что видит оболочка).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEventKind {
    /// Карта выбрана.
    CardSelected { card_id: CardId },

    /// С карты снят выбор.
    CardDeselected { card_id: CardId },

    /// В расклад ушло `count` карт из колоды (может быть меньше запрошенного).
    CardsDealt { count: usize },

    /// Сыгранный сет убран. `did_replace`: пришли ли карты на замену.
    CardsReplaced {
        card_ids: Vec<CardId>,
        did_replace: bool,
    },

    /// Верхний автомат сменил фазу.
    PhaseChanged { phase: Phase },

    /// Тройка проверена. `points`: сколько начислено (0 для не-сета).
    MatchJudged { is_match: bool, points: Points },

    /// Панель с результатом скрыта.
    JudgementDismissed,

    /// Списаны очки за раздачу или подсказку.
    ScoreCharged { amount: Points },

    /// Партия окончена.
    GameOver { outcome: GameOutcome },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Журнал событий партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// События начиная с номера `from` (для выдачи результата одной команды).
    pub fn since(&self, from: usize) -> &[GameEvent] {
        &self.events[from.min(self.events.len())..]
    }
}
