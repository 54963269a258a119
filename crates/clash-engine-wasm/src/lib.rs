//! WASM bindings for clash-engine.
//!
//! Exposes clash detection and the time/day helpers to the dashboard via
//! `wasm-bindgen`. Slot collections cross the boundary as JSON strings of raw
//! API records; they are normalized here before detection.
//!
//! Clash records borrow the slots they reference, so nothing is cached between
//! calls: `hasClash` and `getClashDetails` re-run detection over the slot list
//! they are given.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p clash-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/clash-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/clash_engine_wasm.wasm
//! ```

use clash_engine::{normalize_slot, DayValue, RawSlot, Slot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON in, JSON out
// ---------------------------------------------------------------------------

fn parse_slots_json(json: &str) -> Result<Vec<Slot>, String> {
    clash_engine::slots_from_json(json).map_err(|e| format!("Invalid slots JSON: {}", e))
}

fn parse_slot_json(json: &str) -> Result<Slot, String> {
    let raw: RawSlot =
        serde_json::from_str(json).map_err(|e| format!("Invalid slot JSON: {}", e))?;
    Ok(normalize_slot(raw))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Plain-Rust implementations (testable off-wasm)
// ---------------------------------------------------------------------------

fn detect_impl(slots_json: &str) -> Result<String, String> {
    let slots = parse_slots_json(slots_json)?;
    let clashes = clash_engine::detect_clashes(&slots);
    to_json(&clashes)
}

fn has_clash_impl(slot_json: &str, slots_json: &str) -> Result<bool, String> {
    let slot = parse_slot_json(slot_json)?;
    let slots = parse_slots_json(slots_json)?;
    let clashes = clash_engine::detect_clashes(&slots);
    Ok(clash_engine::has_clash(&slot, &clashes))
}

fn clash_details_impl(slot_json: &str, slots_json: &str) -> Result<String, String> {
    let slot = parse_slot_json(slot_json)?;
    let slots = parse_slots_json(slots_json)?;
    let clashes = clash_engine::detect_clashes(&slots);
    to_json(&clash_engine::get_clash_details(&slot, &clashes))
}

fn summarize_impl(slots_json: &str) -> Result<String, String> {
    let slots = parse_slots_json(slots_json)?;
    let clashes = clash_engine::detect_clashes(&slots);
    to_json(&clash_engine::summarize(&clashes))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Detect room and teacher clashes among a JSON array of slot records.
///
/// Returns a JSON array of clash objects (`type`, `slot1`, `slot2`, `day`,
/// `day_of_week`, `time_slot1`, `time_slot2`, the room or teacher identity, and
/// per-slot details).
#[wasm_bindgen(js_name = "detectClashes")]
pub fn detect_clashes(slots_json: &str) -> Result<String, JsValue> {
    detect_impl(slots_json).map_err(|e| JsValue::from_str(&e))
}

/// Whether the slot (a JSON object) takes part in any clash within `slots_json`.
#[wasm_bindgen(js_name = "hasClash")]
pub fn has_clash(slot_json: &str, slots_json: &str) -> Result<bool, JsValue> {
    has_clash_impl(slot_json, slots_json).map_err(|e| JsValue::from_str(&e))
}

/// JSON array of every clash the slot takes part in within `slots_json`.
#[wasm_bindgen(js_name = "getClashDetails")]
pub fn get_clash_details(slot_json: &str, slots_json: &str) -> Result<String, JsValue> {
    clash_details_impl(slot_json, slots_json).map_err(|e| JsValue::from_str(&e))
}

/// JSON summary of the clashes in `slots_json` (counts per axis and per day).
#[wasm_bindgen(js_name = "summarizeClashes")]
pub fn summarize_clashes(slots_json: &str) -> Result<String, JsValue> {
    summarize_impl(slots_json).map_err(|e| JsValue::from_str(&e))
}

/// Minutes since midnight for an "HH:MM" string; `undefined` when the hour is not a number.
#[wasm_bindgen(js_name = "timeToMinutes")]
pub fn time_to_minutes(time_str: &str) -> Option<i32> {
    clash_engine::time_to_minutes(time_str)
}

#[wasm_bindgen(js_name = "formatTimeSlot")]
pub fn format_time_slot(start_time: &str, end_time: &str) -> String {
    clash_engine::format_time_slot(start_time, end_time)
}

/// Day name for an ordinal (0 = Monday). Strings pass through unchanged;
/// out-of-range, fractional or non-numeric values give `""`.
#[wasm_bindgen(js_name = "dayNumberToName")]
pub fn day_number_to_name(day: JsValue) -> String {
    let value = match day.as_string() {
        Some(name) => Some(DayValue::Name(name)),
        None => day.as_f64().and_then(day_value_from_f64),
    };
    value
        .map(|v| clash_engine::day_number_to_name(&v))
        .unwrap_or_default()
}

/// JS numbers are doubles; only whole numbers can name a day.
fn day_value_from_f64(n: f64) -> Option<DayValue> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64 {
        Some(DayValue::Number(n as i64))
    } else {
        None
    }
}

#[wasm_bindgen(js_name = "dayNameToNumber")]
pub fn day_name_to_number(name: &str) -> Option<u8> {
    clash_engine::day_name_to_number(name)
}
