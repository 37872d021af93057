//! Diagnostic output.
//!
//! Native builds print through `tracing_subscriber`; in the browser the
//! logger installed by `dioxus::launch` forwards `tracing` events to the
//! console.

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {}
