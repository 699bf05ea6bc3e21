use std::collections::HashMap;

use log::{trace, warn};

use crate::domain::card::{Card, Color, Shading, Shape};
use crate::domain::CardId;

/// Количество уникальных карт в полной колоде.
pub const UNIQUE_CARD_COUNT: usize = 81;
/// Максимальное количество фигур на карте.
pub const NUMBER_OF_SHAPES_MAX: u8 = 3;
/// Сколько карт может быть выбрано одновременно.
pub const MAX_SELECTION_COUNT: usize = 3;
/// Стандартная стартовая раздача.
pub const DEFAULT_INITIAL_DEAL: usize = 12;

/// Итог `replace_matched`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Replacement {
    /// Карты, ушедшие из игры.
    pub retired: Vec<CardId>,
    /// Карты из колоды, вставшие на освободившиеся места.
    pub dealt_in: Vec<CardId>,
}

impl Replacement {
    pub fn did_replace(&self) -> bool {
        !self.dealt_in.is_empty()
    }
}

/// Колода + расклад.
///
/// Один массив всех карт и индекс-разрез `first_undealt`:
/// - до разреза: розданные карты (`dealt_cards`);
/// - от разреза: ещё не розданные (`deck_cards`).
///
/// Перемешивание делает вызывающий код (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    first_undealt: usize,
    /// id -> позиция в `cards`. Обновляется при каждом swap.
    index_by_id: HashMap<CardId, usize>,
    /// Счётчик мутаций: позволяет отбросить подсказку, посчитанную по старому раскладу.
    generation: u64,
}

impl Deck {
    /// Полный набор из 81 карты в порядке генерации:
    /// фигура (Squiggle, Diamond, Oval) → цвет (Green, Purple, Red) →
    /// заливка (Solid, Striped, Open) → количество (1..=3).
    /// id карты = её индекс в этом порядке.
    pub fn fill_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(UNIQUE_CARD_COUNT);
        for shape in Shape::ALL {
            for color in Color::ALL {
                for shading in Shading::ALL {
                    for count in 1..=NUMBER_OF_SHAPES_MAX {
                        let id = cards.len() as CardId;
                        cards.push(Card::new(id, count, shape, shading, color));
                    }
                }
            }
        }
        debug_assert_eq!(cards.len(), UNIQUE_CARD_COUNT);
        cards
    }

    /// Полная колода в порядке генерации, ничего не роздано.
    pub fn standard_81() -> Self {
        Self::from_cards(Self::fill_deck())
    }

    /// Колода из произвольного набора карт (укороченные колоды, тесты).
    /// Флаги выбора/сыгранности сбрасываются.
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        let mut index_by_id = HashMap::with_capacity(cards.len());
        for (idx, card) in cards.iter_mut().enumerate() {
            card.selected = false;
            card.matched = false;
            let previous = index_by_id.insert(card.id, idx);
            debug_assert!(previous.is_none(), "duplicate card id {}", card.id);
        }
        Self {
            cards,
            first_undealt: 0,
            index_by_id,
            generation: 0,
        }
    }

    /// Все карты (розданные и нет) в текущем порядке массива.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn first_undealt(&self) -> usize {
        self.first_undealt
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.index_by_id.get(&id).map(|&idx| &self.cards[idx])
    }

    /// Карта лежит в раскладе и ещё не сыграна.
    pub fn is_playable(&self, id: CardId) -> bool {
        match self.index_by_id.get(&id) {
            Some(&idx) => idx < self.first_undealt && !self.cards[idx].matched,
            None => false,
        }
    }

    pub fn dealt_cards(&self) -> &[Card] {
        &self.cards[..self.first_undealt]
    }

    pub fn deck_cards(&self) -> &[Card] {
        &self.cards[self.first_undealt..]
    }

    pub fn deck_remaining_count(&self) -> usize {
        self.cards.len() - self.first_undealt
    }

    /// Розданные и ещё не сыгранные карты, в порядке раскладки.
    pub fn playable_cards(&self) -> Vec<Card> {
        self.dealt_cards()
            .iter()
            .filter(|c| !c.matched)
            .copied()
            .collect()
    }

    pub fn playable_count(&self) -> usize {
        self.dealt_cards().iter().filter(|c| !c.matched).count()
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.dealt_cards()
            .iter()
            .filter(|c| !c.matched && c.selected)
            .copied()
            .collect()
    }

    pub fn selected_ids(&self) -> Vec<CardId> {
        self.dealt_cards()
            .iter()
            .filter(|c| !c.matched && c.selected)
            .map(|c| c.id)
            .collect()
    }

    pub fn selection_count(&self) -> usize {
        self.dealt_cards()
            .iter()
            .filter(|c| !c.matched && c.selected)
            .count()
    }

    // MARK: мутации

    /// Сдвинуть разрез на `count` карт (не дальше конца колоды).
    /// Возвращает, сколько карт реально ушло в расклад.
    pub fn deal(&mut self, count: usize) -> usize {
        let before = self.first_undealt;
        self.first_undealt = (self.first_undealt + count).min(self.cards.len());
        let dealt = self.first_undealt - before;
        if dealt > 0 {
            self.generation += 1;
        }
        trace!("deal({count}): dealt {dealt}, remaining {}", self.deck_remaining_count());
        dealt
    }

    /// Переключить флаг выбора у карты из расклада.
    ///
    /// Неизвестный или неиграбельный id: no-op (возвращает false).
    /// Выбор четвёртой карты тоже игнорируется.
    pub fn toggle_selection(&mut self, id: CardId) -> bool {
        if !self.is_playable(id) {
            warn!("toggle_selection: card {id} is not playable, ignored");
            return false;
        }
        let idx = self.index_by_id[&id];
        if !self.cards[idx].selected && self.selection_count() >= MAX_SELECTION_COUNT {
            warn!("toggle_selection: card {id} would be a 4th selection, ignored");
            return false;
        }
        self.cards[idx].selected = !self.cards[idx].selected;
        self.generation += 1;
        trace!("toggle_selection({id}) -> {}", self.cards[idx].selected);
        true
    }

    /// Убрать сыгранные карты и поставить на их места новые из колоды.
    ///
    /// Для каждого id: `matched = true`, `selected = false`; если в колоде
    /// ещё есть карты: первая неразданная меняется местами с сыгранной,
    /// разрез сдвигается на одну. Когда колода пуста, место просто
    /// освобождается и расклад уменьшается.
    pub fn replace_matched(&mut self, card_ids: &[CardId]) -> Replacement {
        let mut result = Replacement::default();

        for &id in card_ids {
            if !self.is_playable(id) {
                warn!("replace_matched: card {id} is not playable, skipped");
                continue;
            }
            let slot = self.index_by_id[&id];
            self.cards[slot].selected = false;
            self.cards[slot].matched = true;
            result.retired.push(id);

            if self.first_undealt < self.cards.len() {
                let incoming = self.first_undealt;
                let incoming_id = self.cards[incoming].id;
                self.cards.swap(slot, incoming);
                self.index_by_id.insert(incoming_id, slot);
                self.index_by_id.insert(id, incoming);
                self.first_undealt += 1;
                result.dealt_in.push(incoming_id);
            }
        }

        if !result.retired.is_empty() {
            self.generation += 1;
        }
        trace!(
            "replace_matched({card_ids:?}): retired {:?}, dealt in {:?}",
            result.retired,
            result.dealt_in
        );
        debug_assert!(self.first_undealt <= self.cards.len());
        result
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_81()
    }
}
