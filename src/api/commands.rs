use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::CardId;
use crate::engine::{GameSession, RandomSource};
use crate::infra::mapping::hint_to_dto;

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_tableau_view;

/// Команда оболочки: всё, что меняет состояние партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Тап по карте из расклада.
    TapCard { card_id: CardId },

    /// "Раздать ещё 3".
    DealThree,

    /// Закрыть панель с результатом проверки.
    Acknowledge,

    /// Подсказка.
    RequestHint,

    /// Новая партия.
    NewGame,

    /// Прошло `millis` миллисекунд (таймер панели).
    Tick { millis: u64 },
}

impl Command {
    /// Разобрать команду из JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ApiError> {
        serde_json::from_str(json).map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

/// Выполнить команду на сессии и собрать ответ.
pub fn execute<R: RandomSource>(
    session: &mut GameSession<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let events = match command {
        Command::TapCard { card_id } => session.tap_card(card_id)?,
        Command::DealThree => session.deal_three()?,
        Command::Acknowledge => session.acknowledge()?,
        Command::NewGame => session.new_game(),
        Command::Tick { millis } => session.tick(Duration::from_millis(millis))?,
        Command::RequestHint => {
            let hint = session.request_hint()?;
            return Ok(CommandResponse::Hint {
                hint: hint_to_dto(&hint),
                tableau: build_tableau_view(session),
            });
        }
    };

    Ok(CommandResponse::TableauState {
        events,
        tableau: build_tableau_view(session),
    })
}
