use std::time::Duration;

use set_engine::domain::GameConfig;
use set_engine::time_ctrl::{
    DismissDecision, EvaluationPanel, PanelClock, PanelRules, PanelTimeout,
};

#[test]
fn rules_from_config_and_presets() {
    assert_eq!(PanelRules::from_config(&GameConfig::default()), PanelRules::manual());
    let config = GameConfig {
        auto_dismiss_secs: Some(4),
        ..GameConfig::default()
    };
    assert_eq!(
        PanelRules::from_config(&config).auto_dismiss_delay(),
        Some(Duration::from_secs(4))
    );
    assert_eq!(PanelRules::timed().auto_dismiss_secs, Some(10));
    assert_eq!(PanelRules::manual().auto_dismiss_delay(), None);
}

#[test]
fn hidden_clock_does_not_count() {
    let mut clock = PanelClock::new();
    assert_eq!(
        clock.elapse(Duration::from_secs(100), &PanelRules::timed()),
        PanelTimeout::Hidden
    );
    assert!(!clock.is_running());
}

#[test]
fn timed_panel_dismisses_once_at_delay() {
    let mut panel = EvaluationPanel::new(PanelRules::timed());
    panel.show();
    assert!(panel.is_visible());

    assert_eq!(panel.on_time_passed(Duration::from_secs(9)), DismissDecision::None);
    assert_eq!(
        panel.on_time_passed(Duration::from_secs(1)),
        DismissDecision::AutoAcknowledge
    );
    assert!(!panel.is_visible());
    assert_eq!(panel.on_time_passed(Duration::from_secs(30)), DismissDecision::None);
}

#[test]
fn show_restarts_the_countdown() {
    let mut panel = EvaluationPanel::new(PanelRules::timed());
    panel.show();
    panel.on_time_passed(Duration::from_secs(8));
    panel.hide();
    panel.show();
    assert_eq!(panel.on_time_passed(Duration::from_secs(8)), DismissDecision::None);
}

#[test]
fn manual_panel_never_expires() {
    let mut panel = EvaluationPanel::default();
    panel.show();
    assert_eq!(
        panel.on_time_passed(Duration::from_secs(1_000_000)),
        DismissDecision::None
    );
    assert!(panel.is_visible());
}
