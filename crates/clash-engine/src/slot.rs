//! The canonical slot record consumed by the detector.
//!
//! Every field is optional: preview slots built in the editor have no `id`,
//! unassigned slots have no room or teacher, and drafts may lack times. The
//! detector decides per test which fields it needs; see [`crate::clash`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::time_to_minutes;

pub const UNKNOWN_COURSE: &str = "Unknown Course";
pub const UNKNOWN_DEPARTMENT: &str = "Unknown Department";
pub const UNKNOWN_LEVEL: &str = "Unknown Level";
pub const UNKNOWN_ROOM: &str = "Unknown Room";
pub const UNKNOWN_TEACHER: &str = "Unknown Teacher";
pub const UNKNOWN_TIMETABLE: &str = "Unknown Timetable";
pub const TBA: &str = "TBA";
pub const NOT_AVAILABLE: &str = "N/A";

/// Identifier of a slot, room or teacher. Backends hand out both integer and
/// string keys, so both are accepted; `Int(5)` and `Str("5")` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Int(n) => write!(f, "{}", n),
            ResourceId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        ResourceId::Int(n)
    }
}

impl From<i32> for ResourceId {
    fn from(n: i32) -> Self {
        ResourceId::Int(n as i64)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId::Str(s.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        ResourceId::Str(s)
    }
}

/// A single scheduled occurrence of a course on one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub day_of_week: Option<u8>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub room_id: Option<ResourceId>,
    pub teacher_id: Option<ResourceId>,

    // Display fields joined in by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timetable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
}

impl Slot {
    /// Start a slot with the given identity. Use [`Slot::default`] for a preview
    /// slot without one.
    pub fn new(id: impl Into<ResourceId>) -> Self {
        Slot {
            id: Some(id.into()),
            ..Slot::default()
        }
    }

    pub fn day(mut self, day_of_week: u8) -> Self {
        self.day_of_week = Some(day_of_week);
        self
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.start_time = Some(start.to_string());
        self.end_time = Some(end.to_string());
        self
    }

    pub fn room(mut self, room_id: impl Into<ResourceId>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    pub fn teacher(mut self, teacher_id: impl Into<ResourceId>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    pub fn course(mut self, code: &str, name: &str) -> Self {
        self.course_code = Some(code.to_string());
        self.course_name = Some(name.to_string());
        self
    }

    /// Start and end as minutes since midnight.
    ///
    /// `None` when either time is missing, blank, or its hour does not parse;
    /// such a slot is left out of every overlap test.
    pub fn minutes(&self) -> Option<(i32, i32)> {
        let start = time_to_minutes(non_blank(&self.start_time)?)?;
        let end = time_to_minutes(non_blank(&self.end_time)?)?;
        Some((start, end))
    }

    /// `"HH:MM - HH:MM"` for display; missing ends render empty.
    pub fn time_range(&self) -> String {
        crate::time::format_time_slot(
            self.start_time.as_deref().unwrap_or_default(),
            self.end_time.as_deref().unwrap_or_default(),
        )
    }

    pub fn course_name_or_default(&self) -> &str {
        self.course_name.as_deref().unwrap_or(UNKNOWN_COURSE)
    }

    pub fn course_code_or_default(&self) -> &str {
        self.course_code.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn department_or_default(&self) -> &str {
        self.department_name.as_deref().unwrap_or(UNKNOWN_DEPARTMENT)
    }

    /// Level name, falling back to the level code.
    pub fn level_or_default(&self) -> &str {
        self.level_name
            .as_deref()
            .or(self.level_code.as_deref())
            .unwrap_or(UNKNOWN_LEVEL)
    }

    pub fn room_name_or_default(&self) -> &str {
        self.room_name.as_deref().unwrap_or(UNKNOWN_ROOM)
    }

    pub fn teacher_name_or_default(&self) -> &str {
        self.teacher_name.as_deref().unwrap_or(UNKNOWN_TEACHER)
    }

    pub fn timetable_or_default(&self) -> &str {
        self.timetable_name.as_deref().unwrap_or(UNKNOWN_TIMETABLE)
    }

    pub fn semester_or_default(&self) -> &str {
        self.semester.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn academic_year_or_default(&self) -> &str {
        self.academic_year.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
