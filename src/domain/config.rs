use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::deck::{DEFAULT_INITIAL_DEAL, UNIQUE_CARD_COUNT};
use crate::domain::points::Points;

/// Ошибки загрузки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Стартовая раздача должна быть от 1 до {max}, получено {got}")]
    InvalidInitialDeal { got: usize, max: usize },
}

/// Правила начисления и списания очков.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringRules {
    /// Очки на старте партии.
    pub start_score: Points,
    /// Цена кнопки "раздать ещё 3", когда на столе есть сет.
    pub deal_three_cost: Points,
    /// Цена подсказки, когда на столе есть сет.
    pub hint_cost: Points,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            start_score: Points(100),
            deal_three_cost: Points(3),
            hint_cost: Points(6),
        }
    }
}

/// Конфиг партии: стартовая раздача, перемешивание, строгость протокола и т.д.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Сколько карт раздать в начале (обычно 12).
    pub initial_deal: usize,
    /// Перемешивать ли колоду. `false`: порядок генерации, для детерминированных тестов.
    pub shuffle: bool,
    /// Seed для детерминированного RNG (используется dev-CLI).
    pub seed: Option<u64>,
    /// Паниковать при нарушении протокола автоматов (debug/assert-переключатель).
    pub strict_protocol: bool,
    /// Через сколько секунд панель результата закрывается сама. None: только вручную.
    pub auto_dismiss_secs: Option<u32>,
    pub scoring: ScoringRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_deal: DEFAULT_INITIAL_DEAL,
            shuffle: true,
            seed: None,
            strict_protocol: cfg!(debug_assertions),
            auto_dismiss_secs: None,
            scoring: ScoringRules::default(),
        }
    }
}

impl GameConfig {
    /// Конфиг без перемешивания и без паник: удобно для тестов и реплея.
    pub fn ordered() -> Self {
        Self {
            shuffle: false,
            strict_protocol: false,
            ..Self::default()
        }
    }

    /// Разобрать конфиг из JSON. Отсутствующие поля берутся по умолчанию.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_deal == 0 || self.initial_deal > UNIQUE_CARD_COUNT {
            return Err(ConfigError::InvalidInitialDeal {
                got: self.initial_deal,
                max: UNIQUE_CARD_COUNT,
            });
        }
        Ok(())
    }
}
