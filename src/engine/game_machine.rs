use std::rc::Rc;

use log::{debug, error};

use crate::domain::CardId;
use crate::engine::effects::{Effect, Phase, PhaseExit};
use crate::engine::errors::EngineError;
use crate::engine::handler::{StandardFactory, SubMachineFactory, TriggerHandler};
use crate::engine::triggers::InputTrigger;

/// Верхний автомат игры: Selecting <-> Evaluating.
///
/// Своих данных не хранит. В каждой фазе живёт свежий экземпляр
/// под-автомата из фабрики, все сигналы уходят ему, а код выхода
/// под-автомата решает, куда переходить дальше.
pub struct GameStateMachine {
    phase: Option<Phase>,
    child: Option<Box<dyn TriggerHandler>>,
    factory: Rc<dyn SubMachineFactory>,
    /// Паниковать на нарушении протокола (иначе `error!` + Err).
    strict: bool,
}

impl GameStateMachine {
    pub fn new(factory: Box<dyn SubMachineFactory>, strict: bool) -> Self {
        Self {
            phase: None,
            child: None,
            factory: Rc::from(factory),
            strict,
        }
    }

    /// Новый, ещё не запущенный автомат с той же фабрикой и строгостью.
    pub fn fresh(&self) -> Self {
        Self {
            phase: None,
            child: None,
            factory: Rc::clone(&self.factory),
            strict: self.strict,
        }
    }

    /// Автомат с настоящими под-автоматами.
    pub fn standard(strict: bool) -> Self {
        Self::new(Box::new(StandardFactory), strict)
    }

    /// Войти в Selecting. Повторный вызов начинает фазу заново.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.enter(Phase::Selecting, &mut effects);
        effects
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.child.is_some()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Имя состояния живого под-автомата.
    pub fn child_state_name(&self) -> Option<&'static str> {
        self.child.as_ref().map(|c| c.state_name())
    }

    // MARK: публичные сигналы

    pub fn accept_card_tapped(
        &mut self,
        card_id: CardId,
        was_selected: bool,
    ) -> Result<Vec<Effect>, EngineError> {
        self.dispatch(InputTrigger::CardTapped {
            card_id,
            was_selected,
        })
    }

    pub fn accept_deal_three_tapped(&mut self) -> Result<Vec<Effect>, EngineError> {
        self.dispatch(InputTrigger::DealThreeTapped)
    }

    /// Вердикт правил по выбранной тройке (ответ на `Effect::RequestJudgement`).
    pub fn accept_match_status_evaluated(
        &mut self,
        is_match: bool,
    ) -> Result<Vec<Effect>, EngineError> {
        self.dispatch(InputTrigger::MatchStatusEvaluated { is_match })
    }

    pub fn accept_acknowledge(&mut self) -> Result<Vec<Effect>, EngineError> {
        self.dispatch(InputTrigger::MatchIndicatorAcknowledged)
    }

    pub fn accept_cards_exhausted(&mut self) -> Result<Vec<Effect>, EngineError> {
        self.dispatch(InputTrigger::CardsExhausted)
    }

    // MARK: маршрутизация

    fn dispatch(&mut self, trigger: InputTrigger) -> Result<Vec<Effect>, EngineError> {
        let mut effects = Vec::new();
        match self.route(trigger, &mut effects) {
            Ok(()) => Ok(effects),
            Err(err) => Err(self.violation(err)),
        }
    }

    /// Отдать сигнал живому под-автомату и применить таблицу переходов к коду выхода.
    fn route(&mut self, trigger: InputTrigger, effects: &mut Vec<Effect>) -> Result<(), EngineError> {
        let child = self.child.as_mut().ok_or(EngineError::NotStarted)?;
        let step = child.accept_trigger(trigger)?;
        effects.extend(step.effects);

        match step.exit {
            PhaseExit::None => {}
            PhaseExit::Evaluating => self.enter(Phase::Evaluating, effects),
            PhaseExit::SelectingZeroSelected => self.enter(Phase::Selecting, effects),
            PhaseExit::SelectingOneSelected(card_id) => {
                self.enter(Phase::Selecting, effects);
                // Тапнутая карта становится первой выбранной в новом раунде.
                self.route(
                    InputTrigger::CardTapped {
                        card_id,
                        was_selected: false,
                    },
                    effects,
                )?;
            }
        }
        Ok(())
    }

    /// Старый под-автомат выбрасывается, новый берётся из фабрики.
    fn enter(&mut self, phase: Phase, effects: &mut Vec<Effect>) {
        debug!("game: {:?} -> {:?}", self.phase, phase);
        let mut child = match phase {
            Phase::Selecting => self.factory.create_selecting(),
            Phase::Evaluating => self.factory.create_evaluating(),
        };
        self.phase = Some(phase);
        effects.push(Effect::PhaseChanged(phase));
        effects.extend(child.start());
        self.child = Some(child);
    }

    fn violation(&self, err: EngineError) -> EngineError {
        if self.strict {
            panic!("нарушение протокола автомата игры: {err}");
        }
        error!("protocol violation ignored: {err}");
        err
    }
}
