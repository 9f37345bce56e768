//! Terminal setup and restoration

/// Restore the terminal before the default hook prints the panic, and
/// record the panic in the log file.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        tracing::error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
