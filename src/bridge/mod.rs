//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod frames;
mod viewer;

pub use frames::on_hand_frame;
pub use viewer::{get_interaction_mode, get_model_transform, set_gesture_params, set_model_ready};
