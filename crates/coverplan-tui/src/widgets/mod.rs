//! Custom widget components

mod calculator_panel;
mod header;
mod key_hints;
pub mod modal_overlay;
mod protection_chart;
mod quote_modal;

pub use calculator_panel::CalculatorPanel;
pub use header::Header;
pub use key_hints::KeyHints;
pub use protection_chart::ProtectionChart;
pub use quote_modal::QuoteModal;
