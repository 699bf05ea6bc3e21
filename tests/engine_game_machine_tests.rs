use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use set_engine::engine::{
    Effect, EngineError, GameStateMachine, InputTrigger, Phase, PhaseExit, Step,
    SubMachineFactory, TriggerHandler,
};

type Script = Rc<RefCell<VecDeque<Result<Step, EngineError>>>>;
type Log = Rc<RefCell<Vec<String>>>;

/// Под-автомат по сценарию: пишет в общий лог и отвечает заготовленными шагами.
struct ScriptedHandler {
    name: String,
    log: Log,
    script: Script,
}

impl TriggerHandler for ScriptedHandler {
    fn start(&mut self) -> Vec<Effect> {
        self.log.borrow_mut().push(format!("{} start", self.name));
        Vec::new()
    }

    fn accept_trigger(&mut self, trigger: InputTrigger) -> Result<Step, EngineError> {
        self.log.borrow_mut().push(format!("{} {trigger}", self.name));
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Step::idle()))
    }

    fn state_name(&self) -> &'static str {
        "Scripted"
    }
}

#[derive(Default)]
struct MockFactory {
    log: Log,
    selecting_script: Script,
    evaluating_script: Script,
    created: Rc<Cell<usize>>,
}

impl MockFactory {
    fn handler(&self, kind: &str, script: &Script) -> Box<dyn TriggerHandler> {
        self.created.set(self.created.get() + 1);
        Box::new(ScriptedHandler {
            name: format!("{kind}#{}", self.created.get()),
            log: self.log.clone(),
            script: script.clone(),
        })
    }
}

impl SubMachineFactory for MockFactory {
    fn create_selecting(&self) -> Box<dyn TriggerHandler> {
        self.handler("selecting", &self.selecting_script)
    }

    fn create_evaluating(&self) -> Box<dyn TriggerHandler> {
        self.handler("evaluating", &self.evaluating_script)
    }
}

struct Harness {
    machine: GameStateMachine,
    log: Log,
    selecting: Script,
    evaluating: Script,
}

fn harness(strict: bool) -> Harness {
    let factory = MockFactory::default();
    let log = factory.log.clone();
    let selecting = factory.selecting_script.clone();
    let evaluating = factory.evaluating_script.clone();
    Harness {
        machine: GameStateMachine::new(Box::new(factory), strict),
        log,
        selecting,
        evaluating,
    }
}

fn log_of(h: &Harness) -> Vec<String> {
    h.log.borrow().clone()
}

//
// TEST 1: start
//
#[test]
fn start_enters_selecting_with_fresh_child() {
    let mut h = harness(true);
    assert_eq!(h.machine.phase(), None);
    assert!(!h.machine.is_started());

    let effects = h.machine.start();
    assert_eq!(effects, vec![Effect::PhaseChanged(Phase::Selecting)]);
    assert_eq!(h.machine.phase(), Some(Phase::Selecting));
    assert_eq!(log_of(&h), vec!["selecting#1 start"]);
}

#[test]
fn fresh_machine_is_unstarted_and_shares_factory() {
    let mut h = harness(true);
    h.machine.start();
    h.selecting
        .borrow_mut()
        .push_back(Ok(Step::exit(Vec::new(), PhaseExit::Evaluating)));
    h.machine.accept_card_tapped(3, false).unwrap();
    assert_eq!(h.machine.phase(), Some(Phase::Evaluating));

    let mut fresh = h.machine.fresh();
    assert_eq!(fresh.phase(), None);
    assert!(!fresh.is_started());
    assert!(fresh.is_strict());

    let effects = fresh.start();
    assert_eq!(effects, vec![Effect::PhaseChanged(Phase::Selecting)]);
    assert_eq!(log_of(&h).last().map(String::as_str), Some("selecting#3 start"));
}

#[test]
fn triggers_before_start_are_rejected() {
    let mut h = harness(false);
    assert_eq!(
        h.machine.accept_card_tapped(1, false),
        Err(EngineError::NotStarted)
    );
    assert!(log_of(&h).is_empty());
}

//
// TEST 2: routing and exits
//
#[test]
fn triggers_are_routed_to_live_child() {
    let mut h = harness(true);
    h.machine.start();

    let effects = h.machine.accept_deal_three_tapped().unwrap();
    assert!(effects.is_empty());
    h.machine.accept_cards_exhausted().unwrap();

    assert_eq!(
        log_of(&h),
        vec![
            "selecting#1 start",
            "selecting#1 DealThreeTapped",
            "selecting#1 CardsExhausted",
        ]
    );
    assert_eq!(h.machine.phase(), Some(Phase::Selecting));
}

#[test]
fn selecting_exit_enters_evaluating() {
    let mut h = harness(true);
    h.machine.start();
    h.selecting
        .borrow_mut()
        .push_back(Ok(Step::exit(vec![Effect::Select(9)], PhaseExit::Evaluating)));

    let effects = h.machine.accept_card_tapped(9, false).unwrap();
    assert_eq!(
        effects,
        vec![Effect::Select(9), Effect::PhaseChanged(Phase::Evaluating)]
    );
    assert_eq!(h.machine.phase(), Some(Phase::Evaluating));
    assert_eq!(log_of(&h).last().map(String::as_str), Some("evaluating#2 start"));

    // Следующий сигнал уходит уже новому под-автомату.
    h.machine.accept_match_status_evaluated(true).unwrap();
    assert_eq!(
        log_of(&h).last().map(String::as_str),
        Some("evaluating#2 MatchStatusEvaluated(true)")
    );
}

#[test]
fn exit_zero_selected_returns_to_fresh_selecting() {
    let mut h = harness(true);
    h.machine.start();
    h.selecting
        .borrow_mut()
        .push_back(Ok(Step::exit(Vec::new(), PhaseExit::Evaluating)));
    h.evaluating.borrow_mut().push_back(Ok(Step::exit(
        vec![Effect::ReplaceSelected],
        PhaseExit::SelectingZeroSelected,
    )));

    h.machine.accept_card_tapped(1, false).unwrap();
    let effects = h.machine.accept_deal_three_tapped().unwrap();

    assert_eq!(
        effects,
        vec![Effect::ReplaceSelected, Effect::PhaseChanged(Phase::Selecting)]
    );
    assert_eq!(h.machine.phase(), Some(Phase::Selecting));
    assert_eq!(log_of(&h).last().map(String::as_str), Some("selecting#3 start"));
}

#[test]
fn exit_one_selected_replays_tap_into_new_selecting() {
    let mut h = harness(true);
    h.machine.start();
    h.selecting
        .borrow_mut()
        .push_back(Ok(Step::exit(Vec::new(), PhaseExit::Evaluating)));
    h.evaluating.borrow_mut().push_back(Ok(Step::exit(
        vec![Effect::ClearSelection],
        PhaseExit::SelectingOneSelected(42),
    )));
    h.selecting
        .borrow_mut()
        .push_back(Ok(Step::stay(vec![Effect::Select(42)])));

    h.machine.accept_card_tapped(1, false).unwrap();
    let effects = h.machine.accept_card_tapped(42, true).unwrap();

    assert_eq!(
        effects,
        vec![
            Effect::ClearSelection,
            Effect::PhaseChanged(Phase::Selecting),
            Effect::Select(42),
        ]
    );
    let log = log_of(&h);
    assert_eq!(
        &log[log.len() - 3..],
        &[
            "evaluating#2 CardTapped(card=42, selected=true)".to_string(),
            "selecting#3 start".to_string(),
            "selecting#3 CardTapped(card=42, selected=false)".to_string(),
        ]
    );
}

//
// TEST 3: protocol violations
//
#[test]
fn unhandled_trigger_is_returned_in_lenient_mode() {
    let mut h = harness(false);
    h.machine.start();
    let violation = EngineError::UnhandledTrigger {
        state: "Scripted",
        trigger: InputTrigger::MatchIndicatorAcknowledged,
    };
    h.selecting.borrow_mut().push_back(Err(violation.clone()));

    assert_eq!(h.machine.accept_acknowledge(), Err(violation));
    assert_eq!(h.machine.phase(), Some(Phase::Selecting));
}

#[test]
#[should_panic]
fn unhandled_trigger_panics_in_strict_mode() {
    let mut h = harness(true);
    h.machine.start();
    h.selecting
        .borrow_mut()
        .push_back(Err(EngineError::UnhandledTrigger {
            state: "Scripted",
            trigger: InputTrigger::MatchIndicatorAcknowledged,
        }));
    let _ = h.machine.accept_acknowledge();
}

//
// TEST 4: standard sub-machines end to end (no deck)
//
#[test]
fn standard_machine_full_round() {
    let mut machine = GameStateMachine::standard(true);
    machine.start();

    machine.accept_card_tapped(0, false).unwrap();
    machine.accept_card_tapped(1, false).unwrap();
    let effects = machine.accept_card_tapped(2, false).unwrap();
    assert_eq!(
        effects,
        vec![
            Effect::Select(2),
            Effect::PhaseChanged(Phase::Evaluating),
            Effect::RequestJudgement,
        ]
    );
    assert_eq!(machine.child_state_name(), Some("AwaitingJudgement"));

    let effects = machine.accept_match_status_evaluated(true).unwrap();
    assert_eq!(effects, vec![Effect::MatchJudged(true)]);
    assert_eq!(machine.child_state_name(), Some("ConfirmedSet"));

    let effects = machine.accept_card_tapped(7, false).unwrap();
    assert_eq!(
        effects,
        vec![
            Effect::ReplaceSelected,
            Effect::PhaseChanged(Phase::Selecting),
            Effect::Select(7),
        ]
    );
    assert_eq!(machine.phase(), Some(Phase::Selecting));
    assert_eq!(machine.child_state_name(), Some("OneSelected"));
}

#[test]
fn standard_machine_rejects_acknowledge_while_selecting() {
    let mut machine = GameStateMachine::standard(false);
    machine.start();
    assert!(matches!(
        machine.accept_acknowledge(),
        Err(EngineError::UnhandledTrigger {
            state: "ZeroSelected",
            trigger: InputTrigger::MatchIndicatorAcknowledged,
        })
    ));
}
