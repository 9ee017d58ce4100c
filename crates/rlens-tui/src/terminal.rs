//! Terminal setup and restoration

use std::cell::Cell;

thread_local! {
    static ISOLATED_RENDER: Cell<bool> = const { Cell::new(false) };
}

/// Install a panic hook that restores the terminal.
///
/// Panics raised inside [`isolated`] leave the terminal alone; they are
/// logged and the caller draws a fallback instead.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if ISOLATED_RENDER.with(Cell::get) {
            tracing::error!("Render panic: {}", panic_info);
            return;
        }
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run `f` with the isolation flag set, catching any panic.
pub fn isolated<R>(f: impl FnOnce() -> R) -> std::thread::Result<R> {
    ISOLATED_RENDER.with(|flag| flag.set(true));
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    ISOLATED_RENDER.with(|flag| flag.set(false));
    result
}
