//! Движок правил карточной игры Set.
//!
//! Слои:
//! - `domain`: карты, колода с раскладом, очки, конфиг;
//! - `eval`: проверка тройки, очки, объяснение, поиск сетов;
//! - `engine`: автоматы Selecting / Evaluating, верхний автомат, сессия;
//! - `time_ctrl`: таймер панели с результатом проверки;
//! - `infra`: RNG и маппинги;
//! - `api`: команды, запросы, DTO для оболочки.
//!
//! Ядро однопоточное и синхронное: каждый вызов отрабатывает до конца.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod time_ctrl;
