// src/time_ctrl/mod.rs
//! Таймер панели с результатом проверки тройки.
//!
//! Панель показывается после `MatchJudged` и скрывается:
//! - явным подтверждением игрока;
//! - выходом из фазы Evaluating;
//! - по истечении `auto_dismiss_secs`, если он задан.

pub mod clock;
pub mod time_rules;

use std::time::Duration;

pub use clock::{PanelClock, PanelTimeout};
pub use time_rules::PanelRules;

/// Что сделать сессии после `on_time_passed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissDecision {
    None,
    /// Задержка вышла: подтвердить панель за игрока.
    AutoAcknowledge,
}

/// Панель: правила + таймер.
#[derive(Clone, Debug)]
pub struct EvaluationPanel {
    pub rules: PanelRules,
    pub clock: PanelClock,
}

impl EvaluationPanel {
    pub fn new(rules: PanelRules) -> Self {
        Self {
            rules,
            clock: PanelClock::new(),
        }
    }

    pub fn show(&mut self) {
        self.clock.start();
    }

    pub fn hide(&mut self) {
        self.clock.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.clock.is_running()
    }

    /// Авто-подтверждение срабатывает один раз: панель сразу скрывается.
    pub fn on_time_passed(&mut self, delta: Duration) -> DismissDecision {
        match self.clock.elapse(delta, &self.rules) {
            PanelTimeout::Hidden | PanelTimeout::Ongoing => DismissDecision::None,
            PanelTimeout::Elapsed => {
                self.clock.clear();
                DismissDecision::AutoAcknowledge
            }
        }
    }
}

impl Default for EvaluationPanel {
    fn default() -> Self {
        Self::new(PanelRules::default())
    }
}
