//! Detect room and teacher double-bookings among timetable slots.
//!
//! Slots are grouped into (room, day) and (teacher, day) buckets, and every pair
//! inside a bucket is tested for overlap. Intervals are half-open: a slot ending
//! at 10:00 and another starting at 10:00 do NOT clash.
//!
//! Slots without the grouping key (room or teacher, and day) never enter that
//! axis's buckets. Pairs where either side lacks a parseable start or end time
//! are skipped. Nothing here returns an error.

use std::collections::HashMap;

use serde::Serialize;

use crate::slot::{ResourceId, Slot, TBA};
use crate::time::day_name;

/// Which resource two slots are fighting over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClashKind {
    Room,
    Teacher,
}

/// The double-booked resource, serialized as `room_id`/`room_name` or
/// `teacher_id`/`teacher_name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClashResource {
    Room { room_id: ResourceId, room_name: String },
    Teacher { teacher_id: ResourceId, teacher_name: String },
}

impl ClashResource {
    pub fn id(&self) -> &ResourceId {
        match self {
            ClashResource::Room { room_id, .. } => room_id,
            ClashResource::Teacher { teacher_id, .. } => teacher_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ClashResource::Room { room_name, .. } => room_name,
            ClashResource::Teacher { teacher_name, .. } => teacher_name,
        }
    }
}

/// Cross-reference fields for one side of a clash, with placeholders filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotDetails {
    pub course_name: String,
    pub course_code: String,
    pub department: String,
    pub level: String,
    /// The resource that is not the clash axis: the teacher for a room clash,
    /// the room for a teacher clash. `"TBA"` when unassigned.
    pub counterpart: String,
    pub timetable_name: String,
    pub semester: String,
    pub academic_year: String,
}

impl SlotDetails {
    fn for_slot(slot: &Slot, kind: ClashKind) -> Self {
        let counterpart = match kind {
            ClashKind::Room => slot.teacher_name.as_deref(),
            ClashKind::Teacher => slot.room_name.as_deref(),
        };
        SlotDetails {
            course_name: slot.course_name_or_default().to_string(),
            course_code: slot.course_code_or_default().to_string(),
            department: slot.department_or_default().to_string(),
            level: slot.level_or_default().to_string(),
            counterpart: counterpart.unwrap_or(TBA).to_string(),
            timetable_name: slot.timetable_or_default().to_string(),
            semester: slot.semester_or_default().to_string(),
            academic_year: slot.academic_year_or_default().to_string(),
        }
    }
}

/// A detected conflict between two slots.
///
/// `slot1` is the one that appeared first in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clash<'a> {
    #[serde(rename = "type")]
    pub kind: ClashKind,
    pub slot1: &'a Slot,
    pub slot2: &'a Slot,
    pub day: String,
    pub day_of_week: u8,
    pub time_slot1: String,
    pub time_slot2: String,
    pub overlap_minutes: i32,
    #[serde(flatten)]
    pub resource: ClashResource,
    pub slot1_details: SlotDetails,
    pub slot2_details: SlotDetails,
}

impl Clash<'_> {
    /// Whether `slot` is one of the two parties, by `id`.
    pub fn involves(&self, slot: &Slot) -> bool {
        match &slot.id {
            Some(id) => self.slot1.id.as_ref() == Some(id) || self.slot2.id.as_ref() == Some(id),
            None => false,
        }
    }
}

/// Which axes to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectOptions {
    pub room: bool,
    pub teacher: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        DetectOptions {
            room: true,
            teacher: true,
        }
    }
}

impl DetectOptions {
    pub fn only(kind: ClashKind) -> Self {
        DetectOptions {
            room: kind == ClashKind::Room,
            teacher: kind == ClashKind::Teacher,
        }
    }
}

/// Find every room and teacher clash among `slots`.
///
/// Room clashes come first, then teacher clashes. Within an axis, buckets are
/// visited in order of first appearance and pairs in input order. A pair that
/// shares both room and teacher yields two records, one per axis.
pub fn detect_clashes(slots: &[Slot]) -> Vec<Clash<'_>> {
    detect_clashes_with(slots, &DetectOptions::default())
}

/// [`detect_clashes`] restricted to the axes enabled in `options`.
pub fn detect_clashes_with<'a>(slots: &'a [Slot], options: &DetectOptions) -> Vec<Clash<'a>> {
    let mut clashes = Vec::new();
    if slots.is_empty() {
        return clashes;
    }

    if options.room {
        let buckets = partition(slots, |s| s.room_id.as_ref());
        scan_buckets(&buckets, ClashKind::Room, &mut clashes);
    }
    let room_count = clashes.len();

    if options.teacher {
        let buckets = partition(slots, |s| s.teacher_id.as_ref());
        scan_buckets(&buckets, ClashKind::Teacher, &mut clashes);
    }

    log::debug!(
        "Detected {} clashes among {} slots ({} room, {} teacher)",
        clashes.len(),
        slots.len(),
        room_count,
        clashes.len() - room_count
    );

    clashes
}

/// Half-open overlap test on the two slots' times, ignoring room, teacher and day.
///
/// `false` when either slot lacks a time or its hour does not parse.
pub fn overlaps(a: &Slot, b: &Slot) -> bool {
    overlap_minutes(a, b).is_some()
}

/// Whether `slot` takes part in any of `clashes`. Slots without an `id` never do.
pub fn has_clash(slot: &Slot, clashes: &[Clash<'_>]) -> bool {
    clashes.iter().any(|c| c.involves(slot))
}

/// Every clash `slot` takes part in, in detection order.
pub fn get_clash_details<'c, 'a>(slot: &Slot, clashes: &'c [Clash<'a>]) -> Vec<&'c Clash<'a>> {
    clashes.iter().filter(|c| c.involves(slot)).collect()
}

/// Minutes of overlap, or `None` if the slots do not overlap or cannot be compared.
fn overlap_minutes(a: &Slot, b: &Slot) -> Option<i32> {
    let (start_a, end_a) = a.minutes()?;
    let (start_b, end_b) = b.minutes()?;

    // [start_a, end_a) and [start_b, end_b) intersect iff each starts before
    // the other ends. Touching endpoints are excluded.
    if start_a < end_b && end_a > start_b {
        Some(end_a.min(end_b) - start_a.max(start_b))
    } else {
        None
    }
}

/// Group slots by `(resource, day)`, keeping buckets in order of first
/// appearance and slots in input order within each bucket.
fn partition<'a, F>(slots: &'a [Slot], resource: F) -> Vec<(&'a ResourceId, u8, Vec<&'a Slot>)>
where
    F: Fn(&'a Slot) -> Option<&'a ResourceId>,
{
    let mut index: HashMap<(&'a ResourceId, u8), usize> = HashMap::new();
    let mut buckets: Vec<(&'a ResourceId, u8, Vec<&'a Slot>)> = Vec::new();

    for slot in slots {
        let (Some(id), Some(day)) = (resource(slot), slot.day_of_week) else {
            continue;
        };
        match index.get(&(id, day)) {
            Some(&i) => buckets[i].2.push(slot),
            None => {
                index.insert((id, day), buckets.len());
                buckets.push((id, day, vec![slot]));
            }
        }
    }

    log::trace!(
        "Partitioned {} slots into {} buckets",
        slots.len(),
        buckets.len()
    );

    buckets
}

fn scan_buckets<'a>(
    buckets: &[(&'a ResourceId, u8, Vec<&'a Slot>)],
    kind: ClashKind,
    clashes: &mut Vec<Clash<'a>>,
) {
    for (resource_id, day, members) in buckets {
        if members.len() < 2 {
            continue;
        }
        for (i, &first) in members.iter().enumerate() {
            for &second in &members[i + 1..] {
                if first.minutes().is_none() || second.minutes().is_none() {
                    log::debug!(
                        "Skipping {:?} pair {:?}/{:?}: missing or unparsable time",
                        kind,
                        first.id,
                        second.id
                    );
                    continue;
                }
                if let Some(overlap) = overlap_minutes(first, second) {
                    clashes.push(build_clash(kind, resource_id, *day, first, second, overlap));
                }
            }
        }
    }
}

fn build_clash<'a>(
    kind: ClashKind,
    resource_id: &ResourceId,
    day: u8,
    slot1: &'a Slot,
    slot2: &'a Slot,
    overlap_minutes: i32,
) -> Clash<'a> {
    let resource = match kind {
        ClashKind::Room => ClashResource::Room {
            room_id: resource_id.clone(),
            room_name: slot1.room_name_or_default().to_string(),
        },
        ClashKind::Teacher => ClashResource::Teacher {
            teacher_id: resource_id.clone(),
            teacher_name: slot1.teacher_name_or_default().to_string(),
        },
    };

    Clash {
        kind,
        slot1,
        slot2,
        day: day_name(day).to_string(),
        day_of_week: day,
        time_slot1: slot1.time_range(),
        time_slot2: slot2.time_range(),
        overlap_minutes,
        resource,
        slot1_details: SlotDetails::for_slot(slot1, kind),
        slot2_details: SlotDetails::for_slot(slot2, kind),
    }
}
