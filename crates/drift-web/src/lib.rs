//! Browser host for the snow scene.
//!
//! Holds a single `SceneRunner` in `thread_local!` storage and exports plain
//! functions through `wasm-bindgen`. Every export is a no-op (or returns zero)
//! until `drift_init` has been called.

pub mod runner;

pub use runner::SceneRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner>> = RefCell::new(None);
}

fn with_runner<R: Default>(f: impl FnOnce(&mut SceneRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => R::default(),
    })
}

#[wasm_bindgen]
pub fn drift_init(width: u32, height: u32, config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = SceneRunner::from_json(config_json.as_deref());
    runner.resize(width, height);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("drift: initialized at {}x{}", width, height);
}

#[wasm_bindgen]
pub fn drift_resize(width: u32, height: u32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn drift_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn drift_commands_ptr() -> *const f32 {
    RUNNER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |r| r.commands_ptr())
    })
}

#[wasm_bindgen]
pub fn drift_command_count() -> u32 {
    with_runner(|r| r.command_count())
}

#[wasm_bindgen]
pub fn drift_command_stride() -> u32 {
    with_runner(|r| r.command_stride())
}

/// Copy of the current frame's commands, for hosts without direct memory access.
#[wasm_bindgen]
pub fn drift_command_floats() -> js_sys::Float32Array {
    RUNNER.with(|cell| match cell.borrow().as_ref() {
        Some(r) => js_sys::Float32Array::from(r.command_floats()),
        None => js_sys::Float32Array::new_with_length(0),
    })
}

#[wasm_bindgen]
pub fn drift_width() -> u32 {
    with_runner(|r| r.width())
}

#[wasm_bindgen]
pub fn drift_height() -> u32 {
    with_runner(|r| r.height())
}
