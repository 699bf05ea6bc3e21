//! Движок партии Set: автоматы фаз, намерения, журнал, сессия.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `tap_card` – тап по карте из расклада
//!   - `deal_three` – раздать ещё 3 карты
//!   - `acknowledge` / `tick` – закрыть панель с результатом проверки
//!   - `request_hint` – подсказка
//!   - `new_game` – начать заново

pub mod effects;
pub mod errors;
pub mod evaluating;
pub mod events;
pub mod game_machine;
pub mod handler;
pub mod selecting;
pub mod session;
pub mod triggers;

pub use effects::{Effect, Phase, PhaseExit, Step};
pub use errors::{EngineError, SessionError};
pub use evaluating::{EvaluatingMachine, EvaluatingState};
pub use events::{EventLog, GameEvent, GameEventKind};
pub use game_machine::GameStateMachine;
pub use handler::{StandardFactory, SubMachineFactory, TriggerHandler};
pub use selecting::{SelectingMachine, SelectingState};
pub use session::GameSession;
pub use triggers::InputTrigger;

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс в `0..len`. `len` должен быть больше нуля.
    fn pick_index(&mut self, len: usize) -> usize;
}
