//! # clash-engine
//!
//! Double-booking detection for timetable slots.
//!
//! Given the flat list of class slots a dashboard has fetched, the engine finds
//! every pair of slots that uses the same room or the same teacher at
//! overlapping times on the same day. Detection is a pure function of its input:
//! no I/O, no retained state, and malformed records degrade to "not compared"
//! rather than errors.
//!
//! ## Quick start
//!
//! ```rust
//! use clash_engine::{detect_clashes, has_clash, ClashKind, Slot};
//!
//! let slots = vec![
//!     Slot::new(1).room(5).day(0).times("08:00", "09:00"),
//!     Slot::new(2).room(5).day(0).times("08:30", "09:30"),
//! ];
//!
//! let clashes = detect_clashes(&slots);
//! assert_eq!(clashes.len(), 1);
//! assert_eq!(clashes[0].kind, ClashKind::Room);
//! assert_eq!(clashes[0].day, "Monday");
//! assert!(has_clash(&slots[0], &clashes));
//! ```
//!
//! ## Modules
//!
//! - [`time`] — "HH:MM" parsing, time-range formatting, day ordinal ↔ name
//! - [`slot`] — Canonical `Slot` record and `ResourceId`
//! - [`normalize`] — Raw API records and timetables → canonical slots
//! - [`clash`] — Room/teacher clash detection and identity-based lookup
//! - [`report`] — Human-readable clash lines and summaries
//! - [`error`] — Error types for the JSON boundary

pub mod clash;
pub mod error;
pub mod normalize;
pub mod report;
pub mod slot;
pub mod time;

pub use clash::{
    detect_clashes, detect_clashes_with, get_clash_details, has_clash, overlaps, Clash,
    ClashKind, ClashResource, DetectOptions, SlotDetails,
};
pub use error::ClashError;
pub use normalize::{
    flatten_timetables, normalize_slot, slots_from_json, timetables_from_json, RawSlot, Timetable,
};
pub use report::{describe_clash, summarize, ClashSummary};
pub use slot::{ResourceId, Slot};
pub use time::{day_name, day_name_to_number, day_number_to_name, format_time_slot, time_to_minutes, DayValue};
