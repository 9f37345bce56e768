//! Full-frame rendering tests for `view`

use super::*;
use crate::test_utils::{create_test_state, TestTerminal};
use coverplan_app::config::Settings;
use coverplan_core::Slider;

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view(frame, state));
}

#[test]
fn test_view_renders_every_section() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    draw(&mut term, &mut state);

    assert!(term.line_contains(0, "Plan for the Unexpected"));
    assert!(term.buffer_contains("Income Protection Calculator"));
    assert!(term.buffer_contains("Projected Income Visualization"));
    assert!(term.buffer_contains("RM 5,000"));
    assert!(term.buffer_contains("5 Years"));
    assert!(term.buffer_contains("TOTAL COVERAGE NEEDED"));
    assert!(term.buffer_contains("RM 300,000"));
    assert!(term.buffer_contains("Calculate & Get Quote"));
    assert!(term.line_contains(35, "q quit"));
}

#[test]
fn test_view_side_by_side_when_wide() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    draw(&mut term, &mut state);

    let calc_row = term.find_line("Income Protection Calculator");
    let chart_row = term.find_line("Projected Income Visualization");
    assert_eq!(calc_row, chart_row);
}

#[test]
fn test_view_stacked_when_narrow() {
    let mut term = TestTerminal::narrow();
    let mut state = create_test_state();
    draw(&mut term, &mut state);

    let calc_row = term.find_line("Income Protection Calculator");
    let chart_row = term.find_line("Projected Income Visualization");
    assert!(calc_row < chart_row, "{}", term.content());
    assert!(term.buffer_contains("RM 300,000"));
}

#[test]
fn test_view_reflects_slider_changes() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    state.calculator.adjust(Slider::Years, 5);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("10 Years"));
    assert!(term.buffer_contains("RM 600,000"));
    assert!(term.buffer_contains("Year 10"));
}

#[test]
fn test_view_reuses_projection_between_frames() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    draw(&mut term, &mut state);
    draw(&mut term, &mut state);

    assert_eq!(state.projection_computations(), 1);

    state.calculator.adjust(Slider::MonthlyAmount, 1);
    draw(&mut term, &mut state);
    assert_eq!(state.projection_computations(), 2);
}

#[test]
fn test_view_shows_modal_over_calculator() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    state.open_quote_modal();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Save Your Quote"));
    assert!(term.buffer_contains("you need approximately RM 300,000"));
    assert!(term.line_contains(35, "Ctrl+S submit"));
    assert!(!term.buffer_contains("q quit"));
}

#[test]
fn test_view_hides_rule_of_thumb_when_disabled() {
    let mut settings = Settings::default();
    settings.ui.show_rule_of_thumb = false;
    let mut state = AppState::with_settings(settings);
    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(!term.buffer_contains("Rule of thumb"));
}

#[test]
fn test_view_survives_tiny_terminals() {
    let mut state = create_test_state();
    state.open_quote_modal();
    for (w, h) in [(1, 1), (20, 6), (40, 12)] {
        let mut term = TestTerminal::with_size(w, h);
        draw(&mut term, &mut state);
    }
}
