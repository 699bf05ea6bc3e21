// src/time_ctrl/clock.rs
//! Таймер видимой панели.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::PanelRules;

/// Сколько времени панель уже на экране.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelClock {
    /// None, если панель скрыта.
    pub shown_for: Option<Duration>,
}

/// Результат "протекания" времени.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PanelTimeout {
    /// Панели нет, считать нечего.
    Hidden,
    /// Панель ещё висит.
    Ongoing,
    /// Задержка вышла, панель надо закрыть.
    Elapsed,
}

impl PanelClock {
    pub fn new() -> Self {
        Self { shown_for: None }
    }

    /// Панель показана: счётчик с нуля.
    pub fn start(&mut self) {
        self.shown_for = Some(Duration::ZERO);
    }

    pub fn clear(&mut self) {
        self.shown_for = None;
    }

    pub fn is_running(&self) -> bool {
        self.shown_for.is_some()
    }

    /// Добавить `delta` и сравнить с задержкой из правил.
    ///
    /// Без задержки (`auto_dismiss_secs = None`) панель никогда не истекает.
    pub fn elapse(&mut self, delta: Duration, rules: &PanelRules) -> PanelTimeout {
        let Some(shown_for) = self.shown_for.as_mut() else {
            return PanelTimeout::Hidden;
        };
        *shown_for = shown_for.saturating_add(delta);

        match rules.auto_dismiss_delay() {
            Some(delay) if *shown_for >= delay => PanelTimeout::Elapsed,
            _ => PanelTimeout::Ongoing,
        }
    }
}
