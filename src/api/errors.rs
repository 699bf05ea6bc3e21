use serde::{Deserialize, Serialize};

use crate::domain::config::ConfigError;
use crate::domain::points::Points;
use crate::domain::CardId;
use crate::engine::SessionError;
use crate::eval::GameOutcome;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, плохой конфиг, неизвестная команда).
    BadRequest(String),

    /// Карты нет среди играбельных.
    CardNotPlayable(CardId),

    /// Партия окончена, нужна новая игра.
    GameOver(GameOutcome),

    /// Не хватает очков на раздачу / подсказку.
    InsufficientScore { needed: Points, available: Points },

    /// Сигнал не подходит к текущему состоянию автомата.
    ProtocolViolation(String),
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::CardNotPlayable(card_id) => ApiError::CardNotPlayable(card_id),
            SessionError::GameOver(outcome) => ApiError::GameOver(outcome),
            SessionError::InsufficientScore { needed, available } => {
                ApiError::InsufficientScore { needed, available }
            }
            SessionError::Engine(e) => ApiError::ProtocolViolation(e.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
