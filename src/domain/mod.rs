//! Доменная модель игры Set: карты, признаки, колода с раскладом, очки, конфиг.

pub mod card;
pub mod config;
pub mod deck;
pub mod points;

/// Идентификатор карты: индекс в порядке генерации полной колоды.
pub type CardId = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use config::*;
pub use deck::*;
pub use points::*;
