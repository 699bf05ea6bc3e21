use log::debug;

use crate::domain::card::{Card, Feature};
use crate::domain::deck::MAX_SELECTION_COUNT;
use crate::domain::points::Points;

use super::lookup_tables::{distinct_values, feature_mask, values_in_mask};
use super::set_rank::{feature_title, feature_value_name, FeatureVerdict, TripleAnalysis};

/// Разобрать тройку по всем признакам.
///
/// Возвращает None, если карт не ровно три.
pub fn analyze_triple(cards: &[Card]) -> Option<TripleAnalysis> {
    if cards.len() != MAX_SELECTION_COUNT {
        return None;
    }

    let verdicts = Feature::ALL.map(|feature| {
        let mask = feature_mask(cards, feature);
        (feature, FeatureVerdict::from_distinct_count(distinct_values(mask)))
    });

    Some(TripleAnalysis { verdicts })
}

/// Главная функция: является ли выбранная тройка сетом.
///
/// Для каждого признака собираем множество значений. Одно значение значит
/// все одинаковые, три значат все разные, два дают не-сет.
/// Не ровно три карты дают false.
pub fn is_matched_set(cards: &[Card]) -> bool {
    let is_set = analyze_triple(cards).is_some_and(|a| a.is_set());
    debug!("is_matched_set({}) = {is_set}", format_cards(cards));
    is_set
}

/// Очки за подтверждённый сет. Для не-сета или не тройки: None.
pub fn score_for_set(cards: &[Card]) -> Option<Points> {
    analyze_triple(cards).and_then(|a| a.score())
}

/// Человеческое объяснение результата проверки.
///
/// Сначала проверяются все четыре признака, и только потом строится текст:
/// - не сет: первый признак с двумя значениями (порядок: количество,
///   фигура, цвет, заливка);
/// - сет: по каждому признаку Triple или Run.
pub fn match_result_explanation(cards: &[Card]) -> String {
    let Some(analysis) = analyze_triple(cards) else {
        return format!(
            "Not a set: {MAX_SELECTION_COUNT} cards are needed, {} selected",
            cards.len()
        );
    };

    if let Some(feature) = analysis.first_mismatch() {
        let values: Vec<String> = values_in_mask(feature_mask(cards, feature))
            .into_iter()
            .map(|v| feature_value_name(feature, v))
            .collect();
        return format!(
            "Not a set: {} are {}",
            feature.plural_name(),
            values.join(" and ")
        );
    }

    let parts: Vec<String> = analysis
        .verdicts
        .iter()
        .map(|(feature, verdict)| format!("{}: {}", feature_title(*feature), verdict))
        .collect();
    format!("Set! {}", parts.join(", "))
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
