//! Под-автомат фазы проверки выбранной тройки.
//!
//! Создаётся заново при каждом входе в Evaluating и всегда стартует в
//! `AwaitingJudgement`.
//!
//! ```text
//! AwaitingJudgement --match(true)-->  ConfirmedSet
//! AwaitingJudgement --match(false)--> ConfirmedNotSet
//!
//! ConfirmedSet --tap(карта из сета)-->     ExitZeroSelected       [ReplaceSelected]
//! ConfirmedSet --tap(карта не из сета)-->  ExitOneSelected(card)  [ReplaceSelected]
//! ConfirmedSet --deal three-->             ExitZeroSelected       [ReplaceSelected]
//!
//! ConfirmedNotSet --tap(любая)-->          ExitOneSelected(card)  [ClearSelection]
//! ConfirmedNotSet --deal three-->          ExitZeroSelected       [ClearSelection, DealThree]
//! ```
//!
//! Сет при "deal three" заменяется (3 карты уходят, до 3 приходят),
//! а не-сет только сбрасывает выбор и отдельно добавляет 3 карты в расклад.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::CardId;

use super::effects::{Effect, PhaseExit, Step};
use super::errors::EngineError;
use super::handler::TriggerHandler;
use super::triggers::InputTrigger;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EvaluatingState {
    AwaitingJudgement,
    ConfirmedSet,
    ConfirmedNotSet,
    /// Терминальное: назад в Selecting без выбора.
    ExitZeroSelected,
    /// Терминальное: назад в Selecting, карта станет выбранной.
    ExitOneSelected(CardId),
}

impl EvaluatingState {
    pub fn name(self) -> &'static str {
        match self {
            EvaluatingState::AwaitingJudgement => "AwaitingJudgement",
            EvaluatingState::ConfirmedSet => "ConfirmedSet",
            EvaluatingState::ConfirmedNotSet => "ConfirmedNotSet",
            EvaluatingState::ExitZeroSelected => "ExitZeroSelected",
            EvaluatingState::ExitOneSelected(_) => "ExitOneSelected",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            EvaluatingState::ExitZeroSelected | EvaluatingState::ExitOneSelected(_)
        )
    }

    /// Код выхода для верхнего автомата.
    pub fn exit(self) -> PhaseExit {
        match self {
            EvaluatingState::ExitZeroSelected => PhaseExit::SelectingZeroSelected,
            EvaluatingState::ExitOneSelected(card_id) => PhaseExit::SelectingOneSelected(card_id),
            _ => PhaseExit::None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EvaluatingMachine {
    state: EvaluatingState,
}

impl EvaluatingMachine {
    pub fn new() -> Self {
        Self {
            state: EvaluatingState::AwaitingJudgement,
        }
    }

    pub fn state(&self) -> EvaluatingState {
        self.state
    }

    fn enter(&mut self, target: EvaluatingState) {
        debug!("evaluating: {} -> {}", self.state.name(), target.name());
        self.state = target;
    }

    fn unhandled(&self, trigger: InputTrigger) -> EngineError {
        EngineError::UnhandledTrigger {
            state: self.state.name(),
            trigger,
        }
    }

    /// Перейти в терминальное состояние и вернуть его код выхода.
    fn finish(&mut self, target: EvaluatingState, effects: Vec<Effect>) -> Step {
        self.enter(target);
        Step::exit(effects, target.exit())
    }
}

impl Default for EvaluatingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerHandler for EvaluatingMachine {
    fn start(&mut self) -> Vec<Effect> {
        self.state = EvaluatingState::AwaitingJudgement;
        vec![Effect::RequestJudgement]
    }

    fn accept_trigger(&mut self, trigger: InputTrigger) -> Result<Step, EngineError> {
        use EvaluatingState::*;

        match (self.state, trigger) {
            (AwaitingJudgement, InputTrigger::MatchStatusEvaluated { is_match }) => {
                self.enter(if is_match { ConfirmedSet } else { ConfirmedNotSet });
                Ok(Step::stay(vec![Effect::MatchJudged(is_match)]))
            }

            (
                ConfirmedSet,
                InputTrigger::CardTapped {
                    card_id,
                    was_selected,
                },
            ) => {
                let target = if was_selected {
                    ExitZeroSelected
                } else {
                    ExitOneSelected(card_id)
                };
                Ok(self.finish(target, vec![Effect::ReplaceSelected]))
            }
            (ConfirmedSet, InputTrigger::DealThreeTapped) => {
                Ok(self.finish(ExitZeroSelected, vec![Effect::ReplaceSelected]))
            }

            (ConfirmedNotSet, InputTrigger::CardTapped { card_id, .. }) => {
                Ok(self.finish(ExitOneSelected(card_id), vec![Effect::ClearSelection]))
            }
            (ConfirmedNotSet, InputTrigger::DealThreeTapped) => Ok(self.finish(
                ExitZeroSelected,
                vec![Effect::ClearSelection, Effect::DealThree],
            )),

            (ConfirmedSet | ConfirmedNotSet, InputTrigger::MatchIndicatorAcknowledged) => {
                Ok(Step::stay(vec![Effect::DismissJudgement]))
            }

            // Терминальные: экземпляр уже отдал код выхода и будет выброшен.
            (ExitZeroSelected | ExitOneSelected(_), _) => Ok(Step::idle()),

            (_, trigger) => Err(self.unhandled(trigger)),
        }
    }

    fn state_name(&self) -> &'static str {
        self.state.name()
    }
}
