use serde::{Deserialize, Serialize};

use crate::domain::CardId;

/// Фаза верхнего уровня.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Phase {
    Selecting,
    Evaluating,
}

/// Намерение, которое автомат возвращает вызывающему коду.
///
/// Автоматы сами не трогают колоду: они возвращают список намерений,
/// а `GameSession` применяет их к `Deck` строго по порядку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Effect {
    /// Выбрать карту.
    Select(CardId),
    /// Снять выбор с карты.
    Deselect(CardId),
    /// Раздать ещё 3 карты в расклад (`Deck::deal(3)`).
    DealThree,
    /// Убрать выбранный сет и заменить его картами из колоды (`Deck::replace_matched`).
    ReplaceSelected,
    /// Снять выбор со всех выбранных карт (они остаются в игре).
    ClearSelection,
    /// Нужна проверка выбранной тройки (`is_matched_set`) и ответ через
    /// `accept_match_status_evaluated`.
    RequestJudgement,
    /// Тройка проверена.
    MatchJudged(bool),
    /// Панель с результатом можно скрыть.
    DismissJudgement,
    /// Проверить выигрыш / пат.
    CheckGameOver,
    /// Верхний автомат сменил фазу.
    PhaseChanged(Phase),
}

/// Код выхода под-автомата: что делать верхнему автомату.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PhaseExit {
    /// Остаёмся в текущей фазе.
    None,
    /// Выбрано 3 карты: в Evaluating.
    Evaluating,
    /// Назад в Selecting без выбранных карт.
    SelectingZeroSelected,
    /// Назад в Selecting, и указанная карта становится первой выбранной.
    SelectingOneSelected(CardId),
}

/// Результат обработки одного сигнала под-автоматом.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub effects: Vec<Effect>,
    pub exit: PhaseExit,
}

impl Step {
    /// Ничего не произошло.
    pub fn idle() -> Self {
        Self {
            effects: Vec::new(),
            exit: PhaseExit::None,
        }
    }

    pub fn stay(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            exit: PhaseExit::None,
        }
    }

    pub fn exit(effects: Vec<Effect>, exit: PhaseExit) -> Self {
        Self { effects, exit }
    }
}
