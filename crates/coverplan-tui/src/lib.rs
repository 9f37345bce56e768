//! coverplan-tui - Terminal UI for coverplan
//!
//! This crate provides the ratatui-based terminal interface: the event loop,
//! key conversion, layout, and the calculator, chart and quote modal widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
