//! Per-frame landmark ingestion and effect application
//!
//! Receives MediaPipe hand landmarks from JavaScript once per
//! perception frame, runs the gesture engine, and applies its output
//! to the page: pointer indicator, status readout, synthetic clicks.
//! The engine itself never touches the DOM.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::gesture::{
    GestureEngine, HandObservation, InteractionMode, PointerOutput, Viewport,
    HAND_LANDMARK_COUNT, POINTER_SIZE,
};

/// x, y, z per landmark
const FLOATS_PER_HAND: usize = HAND_LANDMARK_COUNT * 3;

const POINTER_ID: &str = "pointer";
const STATUS_BOX_ID: &str = "statusBox";

// Thread-local storage (WASM is single-threaded). The perception
// callback is the only writer; the render loop reads via the getters
// in viewer.rs.
thread_local! {
    static ENGINE: RefCell<GestureEngine> = RefCell::new(GestureEngine::new());
}

pub(crate) fn with_engine<R>(f: impl FnOnce(&mut GestureEngine) -> R) -> R {
    ENGINE.with(|cell| f(&mut cell.borrow_mut()))
}

// ============================================================================
// WASM ENTRY POINT
// ============================================================================

/// Called from JavaScript once per perception frame with a flat
/// Float32Array of `num_hands * 63` values (21 landmarks × x, y, z).
/// `num_hands` beyond 2 is capped; a short payload is a contract
/// violation in the perception layer and drops the whole frame.
#[wasm_bindgen]
pub fn on_hand_frame(flat_data: &[f32], num_hands: usize) {
    let num_hands = num_hands.min(2);
    if flat_data.len() < num_hands * FLOATS_PER_HAND {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected {} for {} hands)",
                flat_data.len(),
                num_hands * FLOATS_PER_HAND,
                num_hands
            )
            .into(),
        );
        return;
    }

    let hands: Vec<HandObservation> = (0..num_hands)
        .map(|h| {
            HandObservation::from_flat(&flat_data[h * FLOATS_PER_HAND..(h + 1) * FLOATS_PER_HAND])
        })
        .collect();

    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let viewport = viewport_of(&window);
    let now = js_sys::Date::now();

    let output = with_engine(|engine| engine.update(&hands, viewport, now));

    if let Some(mode) = output.mode_change {
        web_sys::console::log_1(&format!("Mode changed: {}", mode.name()).into());
        update_status_box(&window, mode);
    }
    apply_pointer(&window, output.pointer);
    if output.awaiting_model {
        web_sys::console::warn_1(&"Model target not loaded yet; transform skipped".into());
    }
}

// ============================================================================
// DOM EFFECTS
// ============================================================================

fn viewport_of(window: &web_sys::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport {
        width: dim(window.inner_width()),
        height: dim(window.inner_height()),
    }
}

fn apply_pointer(window: &web_sys::Window, pointer: PointerOutput) {
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };
    let element = match pointer_element(&document) {
        Some(e) => e,
        None => return,
    };
    let style = element.style();

    match pointer {
        PointerOutput::Hidden => {
            let _ = style.set_property("display", "none");
        }
        PointerOutput::At { x, y, click } => {
            let _ = style.set_property("display", "block");
            let _ = style.set_property("left", &format!("{x}px"));
            let _ = style.set_property("top", &format!("{y}px"));
            if click {
                trigger_click(window, &document, x, y);
            }
        }
    }
}

/// The indicator div, created on first use
fn pointer_element(document: &web_sys::Document) -> Option<web_sys::HtmlElement> {
    if let Some(existing) = document.get_element_by_id(POINTER_ID) {
        return existing.dyn_into::<web_sys::HtmlElement>().ok();
    }

    let element = document
        .create_element("div")
        .ok()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    element.set_id(POINTER_ID);

    let style = element.style();
    let size = format!("{POINTER_SIZE}px");
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("width", &size);
    let _ = style.set_property("height", &size);
    let _ = style.set_property("background-color", "red");
    let _ = style.set_property("border-radius", "50%");
    let _ = style.set_property("z-index", "1000");
    let _ = style.set_property("pointer-events", "none");
    let _ = style.set_property("display", "none");

    document.body()?.append_child(&element).ok()?;
    Some(element)
}

/// Synthetic click delivered to whatever sits under the pointer
fn trigger_click(window: &web_sys::Window, document: &web_sys::Document, x: f32, y: f32) {
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_view(Some(window));
    init.set_client_x(x as i32);
    init.set_client_y(y as i32);

    let event = match web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &init) {
        Ok(e) => e,
        Err(_) => return,
    };
    if let Some(target) = document.element_from_point(x, y) {
        let _ = target.dispatch_event(&event);
    }
}

fn update_status_box(window: &web_sys::Window, mode: InteractionMode) {
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };
    match document.get_element_by_id(STATUS_BOX_ID) {
        Some(element) => {
            element.set_text_content(Some(&format!("Mode: {}", mode.name())));
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let color = match mode {
                    InteractionMode::Cursor => "red",
                    InteractionMode::Model => "blue",
                };
                let _ = element.style().set_property("background-color", color);
            }
        }
        None => web_sys::console::warn_1(&"Status box element not found".into()),
    }
}
