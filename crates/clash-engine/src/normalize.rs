//! Turn loosely-shaped API records into canonical [`Slot`]s.
//!
//! The timetable backend returns slots with flat display fields, nested
//! `course`/`teacher`/`room`/`department`/`level` objects, or a mix of both.
//! All fallback chains live here so the detector works on one shape only.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClashError, Result};
use crate::slot::{ResourceId, Slot};
use crate::time::{day_name_to_number, DayValue};

/// A nested reference object such as `"teacher": {"id": 7, "full_name": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NestedRef {
    pub id: Option<ResourceId>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub code: Option<String>,
}

/// A slot exactly as the API sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSlot {
    pub id: Option<ResourceId>,
    pub day_of_week: Option<DayValue>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub room_id: Option<ResourceId>,
    pub teacher_id: Option<ResourceId>,

    pub room_name: Option<String>,
    pub teacher_name: Option<String>,
    pub department_name: Option<String>,
    pub level_name: Option<String>,
    pub level_code: Option<String>,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub timetable_name: Option<String>,
    pub semester: Option<String>,
    pub academic_year: Option<String>,

    pub room: Option<NestedRef>,
    pub teacher: Option<NestedRef>,
    pub course: Option<NestedRef>,
    pub department: Option<NestedRef>,
    pub level: Option<NestedRef>,
}

/// A published timetable with its slots.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Timetable {
    pub id: Option<ResourceId>,
    pub name: Option<String>,
    pub semester: Option<String>,
    pub academic_year: Option<String>,
    pub slots: Vec<RawSlot>,
}

/// Apply the fallback chains and produce a canonical slot.
///
/// Blank strings, including blank string ids, count as absent. A day given by
/// name is mapped to its ordinal; an unknown name or an out-of-range number
/// leaves the day unset.
pub fn normalize_slot(raw: RawSlot) -> Slot {
    let RawSlot {
        id,
        day_of_week,
        start_time,
        end_time,
        room_id,
        teacher_id,
        room_name,
        teacher_name,
        department_name,
        level_name,
        level_code,
        course_name,
        course_code,
        timetable_name,
        semester,
        academic_year,
        room,
        teacher,
        course,
        department,
        level,
    } = raw;

    let room = room.unwrap_or_default();
    let teacher = teacher.unwrap_or_default();
    let course = course.unwrap_or_default();
    let department = department.unwrap_or_default();
    let level = level.unwrap_or_default();

    let day_of_week = day_of_week.and_then(|day| {
        let ordinal = match &day {
            DayValue::Number(n) => u8::try_from(*n).ok(),
            DayValue::Name(name) => day_name_to_number(name.trim()),
        };
        if ordinal.is_none() {
            log::debug!("Dropping unrecognised day_of_week {:?} on slot {:?}", day, id);
        }
        ordinal
    });

    Slot {
        day_of_week,
        start_time: present(start_time),
        end_time: present(end_time),
        room_id: present_id(room_id).or_else(|| present_id(room.id)),
        teacher_id: present_id(teacher_id).or_else(|| present_id(teacher.id)),
        room_name: present(room_name).or_else(|| present(room.name)),
        teacher_name: present(teacher_name)
            .or_else(|| present(teacher.name))
            .or_else(|| present(teacher.full_name)),
        department_name: present(department_name).or_else(|| present(department.name)),
        level_name: present(level_name).or_else(|| present(level.name)),
        level_code: present(level_code).or_else(|| present(level.code)),
        course_name: present(course_name).or_else(|| present(course.name)),
        course_code: present(course_code).or_else(|| present(course.code)),
        timetable_name: present(timetable_name),
        semester: present(semester),
        academic_year: present(academic_year),
        id,
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn present_id(value: Option<ResourceId>) -> Option<ResourceId> {
    value.filter(|id| !matches!(id, ResourceId::Str(s) if s.trim().is_empty()))
}

/// Flatten slots across timetables, in order, stamping each slot with its
/// timetable's name, semester and academic year where the slot has none.
pub fn flatten_timetables(timetables: &[Timetable]) -> Vec<Slot> {
    timetables
        .iter()
        .flat_map(|timetable| {
            timetable.slots.iter().cloned().map(move |raw| {
                let mut slot = normalize_slot(raw);
                if slot.timetable_name.is_none() {
                    slot.timetable_name = present(timetable.name.clone());
                }
                if slot.semester.is_none() {
                    slot.semester = present(timetable.semester.clone());
                }
                if slot.academic_year.is_none() {
                    slot.academic_year = present(timetable.academic_year.clone());
                }
                slot
            })
        })
        .collect()
}

/// Parse a JSON array of raw slot records into canonical slots.
pub fn slots_from_json(json: &str) -> Result<Vec<Slot>> {
    let raws: Vec<RawSlot> = serde_json::from_str(json)?;
    Ok(raws.into_iter().map(normalize_slot).collect())
}

/// Parse timetables and flatten their slots.
///
/// Accepts a bare array, or a paginated envelope with the array under
/// `"results"` or `"timetables"`.
pub fn timetables_from_json(json: &str) -> Result<Vec<Slot>> {
    let value: Value = serde_json::from_str(json)?;
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map
            .remove("results")
            .or_else(|| map.remove("timetables"))
            .ok_or_else(|| {
                ClashError::InvalidInput(
                    "expected an array of timetables or an object with \"results\"".to_string(),
                )
            })?,
        other => {
            return Err(ClashError::InvalidInput(format!(
                "expected timetables, found {}",
                json_kind(&other)
            )))
        }
    };

    let timetables: Vec<Timetable> = serde_json::from_value(list)?;
    Ok(flatten_timetables(&timetables))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
