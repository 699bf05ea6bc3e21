//! Под-автомат фазы выбора карт.
//!
//! ```text
//! ZeroSelected --tap(не выбрана)--> OneSelected    [Select]
//! OneSelected  --tap(выбрана)-->    ZeroSelected   [Deselect]
//! OneSelected  --tap(не выбрана)--> TwoSelected    [Select]
//! TwoSelected  --tap(выбрана)-->    OneSelected    [Deselect]
//! TwoSelected  --tap(не выбрана)--> ThreeSelected  [Select; выход в Evaluating]
//! ThreeSelected --tap-->            без перехода
//! любое --deal three-->             без перехода   [DealThree]
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::CardId;

use super::effects::{Effect, PhaseExit, Step};
use super::errors::EngineError;
use super::handler::TriggerHandler;
use super::triggers::InputTrigger;

/// Сколько карт выбрано.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SelectingState {
    ZeroSelected,
    OneSelected,
    TwoSelected,
    /// Терминальное: сигнал выхода в Evaluating.
    ThreeSelected,
}

impl SelectingState {
    pub fn next(self) -> Option<Self> {
        match self {
            SelectingState::ZeroSelected => Some(SelectingState::OneSelected),
            SelectingState::OneSelected => Some(SelectingState::TwoSelected),
            SelectingState::TwoSelected => Some(SelectingState::ThreeSelected),
            SelectingState::ThreeSelected => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            SelectingState::ZeroSelected => None,
            SelectingState::OneSelected => Some(SelectingState::ZeroSelected),
            SelectingState::TwoSelected => Some(SelectingState::OneSelected),
            SelectingState::ThreeSelected => Some(SelectingState::TwoSelected),
        }
    }

    pub fn selected_count(self) -> usize {
        match self {
            SelectingState::ZeroSelected => 0,
            SelectingState::OneSelected => 1,
            SelectingState::TwoSelected => 2,
            SelectingState::ThreeSelected => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SelectingState::ZeroSelected => "ZeroSelected",
            SelectingState::OneSelected => "OneSelected",
            SelectingState::TwoSelected => "TwoSelected",
            SelectingState::ThreeSelected => "ThreeSelected",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SelectingMachine {
    state: SelectingState,
}

impl SelectingMachine {
    pub fn new() -> Self {
        Self {
            state: SelectingState::ZeroSelected,
        }
    }

    pub fn state(&self) -> SelectingState {
        self.state
    }

    fn on_card_tapped(&mut self, card_id: CardId, was_selected: bool) -> Step {
        if self.state == SelectingState::ThreeSelected {
            // Поглощающее: автомат вот-вот будет выброшен.
            return Step::idle();
        }

        let target = if was_selected {
            self.state.previous()
        } else {
            self.state.next()
        };

        let Some(target) = target else {
            warn!(
                "selecting: tap on card {card_id} (selected={was_selected}) in {} ignored",
                self.state.name()
            );
            return Step::idle();
        };

        debug!("selecting: {} -> {}", self.state.name(), target.name());
        self.state = target;

        let effect = if was_selected {
            Effect::Deselect(card_id)
        } else {
            Effect::Select(card_id)
        };

        if target == SelectingState::ThreeSelected {
            Step::exit(vec![effect], PhaseExit::Evaluating)
        } else {
            Step::stay(vec![effect])
        }
    }
}

impl Default for SelectingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerHandler for SelectingMachine {
    fn start(&mut self) -> Vec<Effect> {
        self.state = SelectingState::ZeroSelected;
        Vec::new()
    }

    fn accept_trigger(&mut self, trigger: InputTrigger) -> Result<Step, EngineError> {
        match trigger {
            InputTrigger::CardTapped {
                card_id,
                was_selected,
            } => Ok(self.on_card_tapped(card_id, was_selected)),
            // Состояние не меняется, просто пробрасываем раздачу.
            InputTrigger::DealThreeTapped => Ok(Step::stay(vec![Effect::DealThree])),
            InputTrigger::CardsExhausted => Ok(Step::stay(vec![Effect::CheckGameOver])),
            InputTrigger::MatchStatusEvaluated { .. }
            | InputTrigger::MatchIndicatorAcknowledged => Err(EngineError::UnhandledTrigger {
                state: self.state.name(),
                trigger,
            }),
        }
    }

    fn state_name(&self) -> &'static str {
        self.state.name()
    }
}
