//! Очки партии.
//!
//! Партия начинается с `ScoringRules::start_score`. Сет приносит сумму
//! по признакам (`SCORE_FOR_TRIPLE` / `SCORE_FOR_RUN`), а "раздать ещё 3"
//! и подсказка списывают штраф, если на столе был невыбранный сет.
//! Списание проверяется заранее через `checked_sub`: счёт в минус не уходит.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Счёт игрока или величина начисления/штрафа.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Points(pub u64);

impl Points {
    pub const ZERO: Points = Points(0);

    /// Бесплатное действие: событие `ScoreCharged` не пишется.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// None, если очков не хватает на штраф.
    pub fn checked_sub(self, cost: Points) -> Option<Points> {
        self.0.checked_sub(cost.0).map(Points)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Self::Output {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        *self = *self + rhs;
    }
}

impl Sub for Points {
    type Output = Points;

    fn sub(self, rhs: Points) -> Self::Output {
        Points(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Points {
    fn sub_assign(&mut self, rhs: Points) {
        *self = *self - rhs;
    }
}

/// Сумма очков по признакам сета.
impl core::iter::Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, Add::add)
    }
}
