use set_engine::engine::{
    EngineError, Effect, EvaluatingMachine, EvaluatingState, InputTrigger, PhaseExit, Step,
    TriggerHandler,
};

fn judged(is_match: bool) -> EvaluatingMachine {
    let mut machine = EvaluatingMachine::new();
    assert_eq!(machine.start(), vec![Effect::RequestJudgement]);
    let step = machine
        .accept_trigger(InputTrigger::MatchStatusEvaluated { is_match })
        .unwrap();
    assert_eq!(step, Step::stay(vec![Effect::MatchJudged(is_match)]));
    machine
}

fn tap(card_id: u32, was_selected: bool) -> InputTrigger {
    InputTrigger::CardTapped {
        card_id,
        was_selected,
    }
}

#[test]
fn judgement_moves_to_confirmed_states() {
    assert_eq!(judged(true).state(), EvaluatingState::ConfirmedSet);
    assert_eq!(judged(false).state(), EvaluatingState::ConfirmedNotSet);
}

#[test]
fn confirmed_set_tap_on_set_card_exits_with_zero_selected() {
    let mut machine = judged(true);
    let step = machine.accept_trigger(tap(3, true)).unwrap();
    assert_eq!(
        step,
        Step::exit(vec![Effect::ReplaceSelected], PhaseExit::SelectingZeroSelected)
    );
    assert_eq!(machine.state(), EvaluatingState::ExitZeroSelected);
    assert!(machine.state().is_terminal());
}

#[test]
fn confirmed_set_tap_on_other_card_exits_with_that_card() {
    for card_id in [0, 17, 80] {
        let mut machine = judged(true);
        let step = machine.accept_trigger(tap(card_id, false)).unwrap();
        assert_eq!(
            step,
            Step::exit(
                vec![Effect::ReplaceSelected],
                PhaseExit::SelectingOneSelected(card_id)
            )
        );
        assert_eq!(machine.state(), EvaluatingState::ExitOneSelected(card_id));
    }
}

#[test]
fn confirmed_set_deal_three_replaces_without_extra_deal() {
    let mut machine = judged(true);
    let step = machine.accept_trigger(InputTrigger::DealThreeTapped).unwrap();
    assert_eq!(
        step,
        Step::exit(vec![Effect::ReplaceSelected], PhaseExit::SelectingZeroSelected)
    );
}

#[test]
fn confirmed_not_set_tap_clears_and_reselects() {
    for was_selected in [true, false] {
        let mut machine = judged(false);
        let step = machine.accept_trigger(tap(6, was_selected)).unwrap();
        assert_eq!(
            step,
            Step::exit(vec![Effect::ClearSelection], PhaseExit::SelectingOneSelected(6))
        );
    }
}

#[test]
fn confirmed_not_set_deal_three_clears_then_deals() {
    let mut machine = judged(false);
    let step = machine.accept_trigger(InputTrigger::DealThreeTapped).unwrap();
    assert_eq!(
        step,
        Step::exit(
            vec![Effect::ClearSelection, Effect::DealThree],
            PhaseExit::SelectingZeroSelected
        )
    );
}

#[test]
fn acknowledge_dismisses_panel_and_stays() {
    for is_match in [true, false] {
        let mut machine = judged(is_match);
        let before = machine.state();
        let step = machine
            .accept_trigger(InputTrigger::MatchIndicatorAcknowledged)
            .unwrap();
        assert_eq!(step, Step::stay(vec![Effect::DismissJudgement]));
        assert_eq!(machine.state(), before);
    }
}

#[test]
fn awaiting_judgement_rejects_taps() {
    let mut machine = EvaluatingMachine::new();
    machine.start();
    let err = machine.accept_trigger(tap(1, true)).unwrap_err();
    assert_eq!(
        err,
        EngineError::UnhandledTrigger {
            state: "AwaitingJudgement",
            trigger: tap(1, true),
        }
    );
    assert!(machine
        .accept_trigger(InputTrigger::DealThreeTapped)
        .is_err());
    assert_eq!(machine.state(), EvaluatingState::AwaitingJudgement);
}

#[test]
fn confirmed_states_reject_second_judgement_and_exhaustion() {
    let mut machine = judged(true);
    assert!(machine
        .accept_trigger(InputTrigger::MatchStatusEvaluated { is_match: false })
        .is_err());
    assert!(machine.accept_trigger(InputTrigger::CardsExhausted).is_err());
    assert_eq!(machine.state(), EvaluatingState::ConfirmedSet);
}

#[test]
fn terminal_states_ignore_everything() {
    let mut machine = judged(true);
    machine.accept_trigger(tap(2, false)).unwrap();
    assert_eq!(machine.accept_trigger(tap(3, false)).unwrap(), Step::idle());
    assert_eq!(
        machine.accept_trigger(InputTrigger::DealThreeTapped).unwrap(),
        Step::idle()
    );
    assert_eq!(machine.state(), EvaluatingState::ExitOneSelected(2));
    assert_eq!(machine.state().exit(), PhaseExit::SelectingOneSelected(2));
}
