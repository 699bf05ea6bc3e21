use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Color, Feature, Shading, Shape};
use crate::domain::points::Points;

/// Очки за признак, одинаковый у всех трёх карт.
pub const SCORE_FOR_TRIPLE: Points = Points(3);
/// Очки за признак, разный у всех трёх карт.
pub const SCORE_FOR_RUN: Points = Points(6);

/// Вердикт по одному признаку у тройки карт.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeatureVerdict {
    /// Все три одинаковые.
    Triple,
    /// Все три разные.
    Run,
    /// Ровно два различных значения: тройка не сет.
    Mismatch,
}

impl FeatureVerdict {
    /// По количеству различных значений среди трёх карт.
    pub fn from_distinct_count(count: u32) -> Self {
        match count {
            1 => FeatureVerdict::Triple,
            3 => FeatureVerdict::Run,
            _ => FeatureVerdict::Mismatch,
        }
    }

    pub fn points(self) -> Points {
        match self {
            FeatureVerdict::Triple => SCORE_FOR_TRIPLE,
            FeatureVerdict::Run => SCORE_FOR_RUN,
            FeatureVerdict::Mismatch => Points::ZERO,
        }
    }
}

impl fmt::Display for FeatureVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeatureVerdict::Triple => "Triple",
            FeatureVerdict::Run => "Run",
            FeatureVerdict::Mismatch => "Mismatch",
        };
        write!(f, "{s}")
    }
}

/// Разбор тройки карт по всем четырём признакам (в порядке `Feature::ALL`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripleAnalysis {
    pub verdicts: [(Feature, FeatureVerdict); 4],
}

impl TripleAnalysis {
    /// Сет, если ни один признак не дал Mismatch.
    pub fn is_set(&self) -> bool {
        self.first_mismatch().is_none()
    }

    /// Первый несовпавший признак в порядке проверки.
    pub fn first_mismatch(&self) -> Option<Feature> {
        self.verdicts
            .iter()
            .find(|(_, v)| *v == FeatureVerdict::Mismatch)
            .map(|(f, _)| *f)
    }

    /// Очки за сет: 3 за каждый Triple, 6 за каждый Run (итого 12..=24).
    /// Для не-сета: None.
    pub fn score(&self) -> Option<Points> {
        if !self.is_set() {
            return None;
        }
        Some(self.verdicts.iter().map(|(_, v)| v.points()).sum())
    }
}

/// Заглавное имя признака.
pub fn feature_title(feature: Feature) -> &'static str {
    match feature {
        Feature::Count => "Count",
        Feature::Shape => "Shape",
        Feature::Color => "Color",
        Feature::Shading => "Shading",
    }
}

/// Имя значения признака по индексу 0..=2.
pub fn feature_value_name(feature: Feature, value: u8) -> String {
    match feature {
        Feature::Count => (value + 1).to_string(),
        Feature::Shape => Shape::ALL[value as usize].name().to_string(),
        Feature::Color => Color::ALL[value as usize].name().to_string(),
        Feature::Shading => Shading::ALL[value as usize].name().to_string(),
    }
}
