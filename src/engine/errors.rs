use thiserror::Error;

use crate::domain::points::Points;
use crate::domain::CardId;
use crate::eval::GameOutcome;

use super::triggers::InputTrigger;

/// Ошибки автоматов игры. Все они: нарушение протокола вызывающей стороной.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Состояние {state} не обрабатывает сигнал {trigger}")]
    UnhandledTrigger {
        state: &'static str,
        trigger: InputTrigger,
    },

    #[error("Автомат игры ещё не запущен")]
    NotStarted,
}

/// Ошибки сессии игры (то, что видит оболочка).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Карта {0} не в раскладе")]
    CardNotPlayable(CardId),

    #[error("Партия уже окончена: {0:?}")]
    GameOver(GameOutcome),

    #[error("Недостаточно очков: нужно {needed}, есть {available}")]
    InsufficientScore { needed: Points, available: Points },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
