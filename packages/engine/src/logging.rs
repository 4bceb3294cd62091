//! Log output for the engine.
//!
//! Records go to the browser console on wasm32 and to stderr on native
//! targets (tests, tools).

use log::LevelFilter;

fn dispatch(level: LevelFilter, output: impl Into<fern::Output>) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(output)
}

#[cfg(target_arch = "wasm32")]
fn console_output() -> fern::Output {
    use log::Level;

    fern::Output::call(|record| {
        let msg = wasm_bindgen::JsValue::from_str(&record.args().to_string());
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn console_output() -> fern::Output {
    std::io::stderr().into()
}

/// Install the engine logger. Later calls are ignored.
pub fn init() {
    // Fails only when a logger is already installed.
    let _ = dispatch(LevelFilter::Debug, console_output()).apply();
}
