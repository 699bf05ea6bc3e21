use super::effects::{Effect, Step};
use super::errors::EngineError;
use super::evaluating::EvaluatingMachine;
use super::selecting::SelectingMachine;
use super::triggers::InputTrigger;

/// Под-автомат фазы: верхний автомат пересылает ему все сигналы.
pub trait TriggerHandler {
    /// Вход в под-автомат. Возвращает намерения, которые нужно выполнить сразу.
    fn start(&mut self) -> Vec<Effect>;

    /// Обработать сигнал.
    ///
    /// Сигнал без обработчика в текущем состоянии: `EngineError::UnhandledTrigger`.
    fn accept_trigger(&mut self, trigger: InputTrigger) -> Result<Step, EngineError>;

    /// Имя текущего состояния (для логов и ошибок).
    fn state_name(&self) -> &'static str;
}

/// Фабрика под-автоматов. Через неё тесты подставляют моки.
pub trait SubMachineFactory {
    fn create_selecting(&self) -> Box<dyn TriggerHandler>;
    fn create_evaluating(&self) -> Box<dyn TriggerHandler>;
}

/// Фабрика настоящих под-автоматов.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardFactory;

impl SubMachineFactory for StandardFactory {
    fn create_selecting(&self) -> Box<dyn TriggerHandler> {
        Box::new(SelectingMachine::new())
    }

    fn create_evaluating(&self) -> Box<dyn TriggerHandler> {
        Box::new(EvaluatingMachine::new())
    }
}
