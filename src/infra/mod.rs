//! Инфраструктурный слой вокруг движка Set:
//! - RNG-реализации для движка;
//! - маппинги из domain в DTO для API.

pub mod mapping;
pub mod rng;

pub use mapping::*;
pub use rng::*;
