use crate::domain::card::{Card, Feature};

/// Битовая маска значений одного признака.
///
/// Используем 3 бита: бит i = значение с индексом i встречается.
pub type FeatureMask = u8;

/// Маска "все три значения".
pub const FULL_MASK: FeatureMask = 0b111;

/// Получить битовую маску для одного значения признака (0..=2).
pub const fn value_to_bit(value: u8) -> FeatureMask {
    1 << value
}

/// Маска значений признака по набору карт.
pub fn feature_mask(cards: &[Card], feature: Feature) -> FeatureMask {
    cards
        .iter()
        .fold(0, |mask, c| mask | value_to_bit(c.feature_value(feature)))
}

/// Сколько различных значений признака в маске.
pub const fn distinct_values(mask: FeatureMask) -> u32 {
    mask.count_ones()
}

/// Индексы значений, присутствующих в маске, по возрастанию.
pub fn values_in_mask(mask: FeatureMask) -> Vec<u8> {
    (0u8..3).filter(|v| mask & value_to_bit(*v) != 0).collect()
}
