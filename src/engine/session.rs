// src/engine/session.rs

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, info, warn};

use crate::domain::card::Card;
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::points::Points;
use crate::domain::CardId;
use crate::eval::{
    self, find_all_matches_in_playable, game_outcome, is_matched_set, random_hint, GameOutcome,
    Hint, MatchRecord,
};
use crate::time_ctrl::{DismissDecision, EvaluationPanel, PanelRules};

use super::effects::{Effect, Phase};
use super::errors::SessionError;
use super::events::{EventLog, GameEvent, GameEventKind};
use super::game_machine::GameStateMachine;
use super::handler::{StandardFactory, SubMachineFactory};
use super::RandomSource;

/// Одна партия: колода + автомат игры + очки + журнал.
///
/// Автоматы возвращают намерения (`Effect`), сессия применяет их к `Deck`
/// строго по порядку, отвечает на `RequestJudgement` вердиктом правил и
/// пишет всё видимое оболочке в `EventLog`.
///
/// Все мутирующие вызовы должны идти последовательно из одного места.
pub struct GameSession<R: RandomSource> {
    config: GameConfig,
    deck: Deck,
    machine: GameStateMachine,
    rng: R,
    score: Points,
    panel: EvaluationPanel,
    history: EventLog,
    outcome: Option<GameOutcome>,
}

impl<R: RandomSource> GameSession<R> {
    /// Новая партия: 81 карта (перемешанная, если `config.shuffle`), стартовая раздача.
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let deck = build_deck(&config, &mut rng);
        Self::with_deck(config, deck, rng)
    }

    /// Партия на готовой колоде (укороченные колоды, сценарии в тестах).
    /// Колода не перемешивается.
    pub fn with_deck(config: GameConfig, deck: Deck, rng: R) -> Self {
        Self::with_factory(config, deck, rng, Box::new(StandardFactory))
    }

    /// Как `with_deck`, но под-автоматы берутся из указанной фабрики.
    pub fn with_factory(
        config: GameConfig,
        deck: Deck,
        rng: R,
        factory: Box<dyn SubMachineFactory>,
    ) -> Self {
        let machine = GameStateMachine::new(factory, config.strict_protocol);
        let mut session = Self {
            score: config.scoring.start_score,
            panel: EvaluationPanel::new(PanelRules::from_config(&config)),
            config,
            deck,
            machine,
            rng,
            history: EventLog::new(),
            outcome: None,
        };
        session.begin();
        session
    }

    /// Начать заново: новая колода, новый автомат игры, очки и журнал с нуля.
    pub fn new_game(&mut self) -> Vec<GameEvent> {
        self.deck = build_deck(&self.config, &mut self.rng);
        self.machine = self.machine.fresh();
        self.score = self.config.scoring.start_score;
        self.panel.hide();
        self.history = EventLog::new();
        self.outcome = None;
        self.begin();
        self.history.events.clone()
    }

    fn begin(&mut self) {
        let dealt = self.deck.deal(self.config.initial_deal);
        self.history.push(GameEventKind::CardsDealt { count: dealt });
        info!(
            "new game: dealt {dealt}, deck remaining {}",
            self.deck.deck_remaining_count()
        );

        let mut effects = self.machine.start();
        if self.deck.deck_remaining_count() == 0 {
            effects.push(Effect::CheckGameOver);
        }
        if let Err(err) = self.apply(effects) {
            warn!("new game: start effects failed: {err}");
        }
    }

    // MARK: команды

    /// Тап по карте из расклада.
    ///
    /// Карта должна быть среди `playable_cards()`; `was_selected` берётся из колоды.
    pub fn tap_card(&mut self, card_id: CardId) -> Result<Vec<GameEvent>, SessionError> {
        self.ensure_running()?;
        let was_selected = match self.deck.card(card_id) {
            Some(card) if self.deck.is_playable(card_id) => card.is_selected(),
            _ => return Err(SessionError::CardNotPlayable(card_id)),
        };

        let mark = self.history.len();
        let effects = self.machine.accept_card_tapped(card_id, was_selected)?;
        self.apply(effects)?;
        Ok(self.history.since(mark).to_vec())
    }

    /// "Раздать ещё 3". Платная, если на столе есть сет и он не выбран.
    /// При пустой колоде раздавать нечего, штраф не берётся.
    pub fn deal_three(&mut self) -> Result<Vec<GameEvent>, SessionError> {
        self.ensure_running()?;
        let cost = if self.deck.deck_remaining_count() == 0 {
            Points::ZERO
        } else {
            self.penalty(self.config.scoring.deal_three_cost)
        };
        self.ensure_affordable(cost)?;

        let mark = self.history.len();
        let effects = self.machine.accept_deal_three_tapped()?;
        self.charge(cost);
        self.apply(effects)?;
        Ok(self.history.since(mark).to_vec())
    }

    /// Игрок закрыл панель с результатом проверки.
    pub fn acknowledge(&mut self) -> Result<Vec<GameEvent>, SessionError> {
        self.ensure_running()?;
        let mark = self.history.len();
        let effects = self.machine.accept_acknowledge()?;
        self.apply(effects)?;
        Ok(self.history.since(mark).to_vec())
    }

    /// Подсказка: один случайный сет из расклада. Стоимость как у `deal_three`.
    pub fn request_hint(&mut self) -> Result<Hint, SessionError> {
        self.ensure_running()?;
        let cost = self.penalty(self.config.scoring.hint_cost);
        self.ensure_affordable(cost)?;
        self.charge(cost);
        Ok(random_hint(&self.deck, &mut self.rng))
    }

    /// Прошло `elapsed` времени. Если панель висит дольше `auto_dismiss_secs`,
    /// она подтверждается за игрока.
    pub fn tick(&mut self, elapsed: Duration) -> Result<Vec<GameEvent>, SessionError> {
        match self.panel.on_time_passed(elapsed) {
            DismissDecision::None => Ok(Vec::new()),
            DismissDecision::AutoAcknowledge => {
                debug!("panel auto-dismissed after {elapsed:?}");
                self.acknowledge()
            }
        }
    }

    // MARK: запросы

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Счётчик мутаций колоды: подсказку, посчитанную по старому значению, надо выбросить.
    pub fn deck_generation(&self) -> u64 {
        self.deck.generation()
    }

    pub fn playable_cards(&self) -> Vec<Card> {
        self.deck.playable_cards()
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.deck.selected_cards()
    }

    pub fn deck_remaining_count(&self) -> usize {
        self.deck.deck_remaining_count()
    }

    pub fn match_result_explanation(&self) -> String {
        eval::match_result_explanation(&self.deck.selected_cards())
    }

    pub fn score_for_current_selection(&self) -> Option<Points> {
        eval::score_for_set(&self.deck.selected_cards())
    }

    /// Кубический перебор. Для больших раскладов оболочка может звать
    /// `eval::find_all_matches_in_playable` на клоне `deck()` в другом потоке.
    pub fn find_all_matches_in_playable(&self) -> Vec<MatchRecord> {
        find_all_matches_in_playable(&self.deck)
    }

    pub fn score(&self) -> Points {
        self.score
    }

    pub fn phase(&self) -> Option<Phase> {
        self.machine.phase()
    }

    /// Имя состояния текущего под-автомата (для отладки).
    pub fn machine_state(&self) -> Option<&'static str> {
        self.machine.child_state_name()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel.is_visible()
    }

    pub fn history(&self) -> &EventLog {
        &self.history
    }

    // MARK: внутреннее

    fn ensure_running(&self) -> Result<(), SessionError> {
        match self.outcome {
            Some(outcome) => Err(SessionError::GameOver(outcome)),
            None => Ok(()),
        }
    }

    /// Штраф не берётся, если выбран сет или сетов на столе нет вовсе.
    fn penalty(&self, cost: Points) -> Points {
        let selection_is_set = is_matched_set(&self.deck.selected_cards());
        if selection_is_set || self.find_all_matches_in_playable().is_empty() {
            Points::ZERO
        } else {
            cost
        }
    }

    fn ensure_affordable(&self, cost: Points) -> Result<(), SessionError> {
        if self.score.checked_sub(cost).is_none() {
            return Err(SessionError::InsufficientScore {
                needed: cost,
                available: self.score,
            });
        }
        Ok(())
    }

    fn charge(&mut self, cost: Points) {
        if cost.is_zero() {
            return;
        }
        self.score -= cost;
        self.history.push(GameEventKind::ScoreCharged { amount: cost });
    }

    /// Применить намерения по порядку. Ответы автомата (вердикт, конец колоды)
    /// дописываются в хвост очереди.
    fn apply(&mut self, effects: Vec<Effect>) -> Result<(), SessionError> {
        let mut queue: VecDeque<Effect> = effects.into();

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Select(card_id) => {
                    if self.set_selected(card_id, true) {
                        self.history.push(GameEventKind::CardSelected { card_id });
                    }
                }
                Effect::Deselect(card_id) => {
                    if self.set_selected(card_id, false) {
                        self.history.push(GameEventKind::CardDeselected { card_id });
                    }
                }
                Effect::ClearSelection => {
                    for card_id in self.deck.selected_ids() {
                        if self.deck.toggle_selection(card_id) {
                            self.history.push(GameEventKind::CardDeselected { card_id });
                        }
                    }
                }
                Effect::DealThree => {
                    let count = self.deck.deal(3);
                    self.history.push(GameEventKind::CardsDealt { count });
                    self.after_deck_change(&mut queue)?;
                }
                Effect::ReplaceSelected => {
                    let card_ids = self.deck.selected_ids();
                    let replacement = self.deck.replace_matched(&card_ids);
                    self.history.push(GameEventKind::CardsReplaced {
                        card_ids,
                        did_replace: replacement.did_replace(),
                    });
                    self.after_deck_change(&mut queue)?;
                }
                Effect::RequestJudgement => {
                    let is_match = is_matched_set(&self.deck.selected_cards());
                    queue.extend(self.machine.accept_match_status_evaluated(is_match)?);
                }
                Effect::MatchJudged(is_match) => {
                    let points = if is_match {
                        self.score_for_current_selection().unwrap_or(Points::ZERO)
                    } else {
                        Points::ZERO
                    };
                    self.score += points;
                    self.panel.show();
                    self.history.push(GameEventKind::MatchJudged { is_match, points });
                }
                Effect::DismissJudgement => {
                    self.panel.hide();
                    self.history.push(GameEventKind::JudgementDismissed);
                }
                Effect::CheckGameOver => self.check_game_over(),
                Effect::PhaseChanged(phase) => {
                    if phase == Phase::Selecting {
                        self.panel.hide();
                    }
                    self.history.push(GameEventKind::PhaseChanged { phase });
                }
            }
        }
        Ok(())
    }

    /// Привести флаг выбора к `selected`. true, если флаг поменялся.
    fn set_selected(&mut self, card_id: CardId, selected: bool) -> bool {
        match self.deck.card(card_id) {
            Some(card) if card.is_selected() != selected => self.deck.toggle_selection(card_id),
            Some(_) => false,
            None => {
                warn!("effect for unknown card {card_id} ignored");
                false
            }
        }
    }

    fn after_deck_change(&mut self, queue: &mut VecDeque<Effect>) -> Result<(), SessionError> {
        if self.deck.deck_remaining_count() > 0 {
            return Ok(());
        }
        if self.machine.phase() == Some(Phase::Selecting) {
            queue.extend(self.machine.accept_cards_exhausted()?);
        } else {
            debug!("deck exhausted outside Selecting, game over check deferred");
        }
        Ok(())
    }

    fn check_game_over(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if let Some(outcome) = game_outcome(&self.deck) {
            info!("game over: {outcome:?}, score {}", self.score);
            self.outcome = Some(outcome);
            self.history.push(GameEventKind::GameOver { outcome });
        }
    }
}

/// 81 карта в порядке генерации, перемешанная по конфигу.
fn build_deck<R: RandomSource>(config: &GameConfig, rng: &mut R) -> Deck {
    let mut cards = Deck::fill_deck();
    if config.shuffle {
        rng.shuffle(&mut cards);
    }
    Deck::from_cards(cards)
}
