//! Hand Viewer Control - gesture-driven 3D model viewer input
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! JavaScript feeds MediaPipe hand landmarks in once per perception
//! frame; the gesture engine turns them into a dwell-click pointer
//! (cursor mode) or model rotation/scale (model mode).

mod bridge;
mod gesture;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    get_interaction_mode, get_model_transform, on_hand_frame, set_gesture_params, set_model_ready,
};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
