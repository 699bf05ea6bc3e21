use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::RandomSource;

use super::evaluator::is_matched_set;

/// Тройка индексов в `playable_cards`, образующая (кандидат в) сет.
/// Временная: пересчитывается по запросу, нигде не хранится.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MatchRecord(pub usize, pub usize, pub usize);

impl MatchRecord {
    pub fn indices(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }
}

/// Чем закончилась партия.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    /// Колода пуста, расклад пуст.
    Win,
    /// Колода пуста, в раскладе нет ни одного сета.
    Stalemate,
}

/// Подсказка: карты одного сета и сообщение игроку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hint {
    pub cards: Vec<Card>,
    pub message: String,
    /// Сколько всего сетов в раскладе на момент подсчёта.
    pub sets_available: usize,
}

/// Перебираем все C(n,3) комбинации карт и оставляем сеты.
///
/// Стоимость кубическая по размеру расклада (обычно n = 12–21), поэтому
/// вызывается только по запросу (подсказка, проверка конца игры).
pub fn find_all_matches(cards: &[Card]) -> Vec<MatchRecord> {
    let n = cards.len();
    let mut matches = Vec::new();
    if n < 3 {
        return matches;
    }

    for a in 0..(n - 2) {
        for b in (a + 1)..(n - 1) {
            for c in (b + 1)..n {
                if is_matched_set(&[cards[a], cards[b], cards[c]]) {
                    matches.push(MatchRecord(a, b, c));
                }
            }
        }
    }

    matches
}

/// Все сеты среди играбельных карт расклада.
pub fn find_all_matches_in_playable(deck: &Deck) -> Vec<MatchRecord> {
    find_all_matches(&deck.playable_cards())
}

/// Карты по записи. Индексы относятся к тому же срезу, по которому искали.
pub fn cards_from_match_record(cards: &[Card], record: MatchRecord) -> Vec<Card> {
    record
        .indices()
        .iter()
        .filter_map(|&i| cards.get(i).copied())
        .collect()
}

/// Случайный сет среди играбельных карт (равновероятно), либо None.
pub fn random_match<R: RandomSource>(deck: &Deck, rng: &mut R) -> Option<Vec<Card>> {
    let playable = deck.playable_cards();
    let matches = find_all_matches(&playable);
    if matches.is_empty() {
        return None;
    }
    let record = matches[rng.pick_index(matches.len())];
    Some(cards_from_match_record(&playable, record))
}

/// Подсказка с сообщением. Если сетов нет: пустой список карт и совет раздать ещё.
pub fn random_hint<R: RandomSource>(deck: &Deck, rng: &mut R) -> Hint {
    let playable = deck.playable_cards();
    let matches = find_all_matches(&playable);
    let card_count = playable.len();

    if matches.is_empty() {
        return Hint {
            cards: Vec::new(),
            message: format!(
                "The current {card_count} cards dealt do not have any Sets that can be made. Deal some more cards!"
            ),
            sets_available: 0,
        };
    }

    let record = matches[rng.pick_index(matches.len())];
    Hint {
        cards: cards_from_match_record(&playable, record),
        message: format!(
            "The current {card_count} cards dealt has {} sets to find! Here's one to get you started.",
            matches.len()
        ),
        sets_available: matches.len(),
    }
}

/// Проверка конца партии. Пока в колоде есть карты: игра продолжается.
pub fn game_outcome(deck: &Deck) -> Option<GameOutcome> {
    if deck.deck_remaining_count() > 0 {
        return None;
    }
    if deck.playable_count() == 0 {
        return Some(GameOutcome::Win);
    }
    if find_all_matches_in_playable(deck).is_empty() {
        return Some(GameOutcome::Stalemate);
    }
    None
}
