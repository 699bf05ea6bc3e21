// src/time_ctrl/time_rules.rs
//! Правила показа панели с результатом проверки.
//!
//! Только конфигурация, без состояния.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::config::GameConfig;

/// Когда панель закрывается сама.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelRules {
    /// None: только явное подтверждение игроком.
    pub auto_dismiss_secs: Option<u32>,
}

impl PanelRules {
    pub const fn new(auto_dismiss_secs: Option<u32>) -> Self {
        Self { auto_dismiss_secs }
    }

    pub const fn manual() -> Self {
        Self::new(None)
    }

    pub const fn timed() -> Self {
        Self::new(Some(10))
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.auto_dismiss_secs)
    }

    pub fn auto_dismiss_delay(&self) -> Option<Duration> {
        self.auto_dismiss_secs
            .map(|secs| Duration::from_secs(u64::from(secs)))
    }
}

impl Default for PanelRules {
    fn default() -> Self {
        Self::manual()
    }
}
