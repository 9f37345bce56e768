//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use coverplan_app::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI.
///
/// Takes `&mut AppState` only to reuse the memoised chart projection.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(), areas.header);

    let panel = widgets::CalculatorPanel::new(&state.calculator, state.calculator_focus)
        .show_rule_of_thumb(state.settings.ui.show_rule_of_thumb);
    frame.render_widget(panel, areas.calculator);

    let cursor = state.chart_cursor();
    let points = state.projection_points();
    frame.render_widget(widgets::ProtectionChart::new(points, cursor), areas.chart);

    // Modal dims everything beneath it; hints are drawn last so they stay legible
    if let Some(modal) = state.quote_modal.as_ref() {
        frame.render_widget(widgets::QuoteModal::new(modal), area);
    }

    frame.render_widget(widgets::KeyHints::new(state), areas.hints);
}
