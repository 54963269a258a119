//! Shape detected clashes for the dashboard's inspector panel.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::clash::{Clash, ClashKind};

/// Aggregate counts over a clash list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClashSummary {
    pub total: usize,
    pub room: usize,
    pub teacher: usize,
    /// Clash count per day, keyed by day name and ordered Monday first.
    #[serde(serialize_with = "serialize_by_day")]
    pub by_day: BTreeMap<u8, usize>,
    /// Distinct slot ids taking part in at least one clash.
    pub affected_slots: usize,
}

impl ClashSummary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Count for a day given by name, 0 when the day has no clashes.
    pub fn on_day(&self, day: &str) -> usize {
        crate::time::day_name_to_number(day)
            .and_then(|d| self.by_day.get(&d).copied())
            .unwrap_or(0)
    }
}

fn serialize_by_day<S>(by_day: &BTreeMap<u8, usize>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(by_day.len()))?;
    for (day, count) in by_day {
        let name = crate::time::day_name(*day);
        if name.is_empty() {
            map.serialize_entry(&day.to_string(), count)?;
        } else {
            map.serialize_entry(name, count)?;
        }
    }
    map.end()
}

/// Count clashes per axis and per day.
pub fn summarize(clashes: &[Clash<'_>]) -> ClashSummary {
    let mut summary = ClashSummary {
        total: clashes.len(),
        ..ClashSummary::default()
    };
    let mut slot_ids = HashSet::new();

    for clash in clashes {
        match clash.kind {
            ClashKind::Room => summary.room += 1,
            ClashKind::Teacher => summary.teacher += 1,
        }
        *summary.by_day.entry(clash.day_of_week).or_insert(0) += 1;
        slot_ids.extend(clash.slot1.id.as_ref());
        slot_ids.extend(clash.slot2.id.as_ref());
    }

    summary.affected_slots = slot_ids.len();
    summary
}

/// One line describing a clash, e.g.
/// `Room clash in R101 on Monday: CS101 Algorithms (08:00 - 09:00) vs MA201 Calculus (08:30 - 09:30)`.
pub fn describe_clash(clash: &Clash<'_>) -> String {
    let axis = match clash.kind {
        ClashKind::Room => "Room",
        ClashKind::Teacher => "Teacher",
    };
    let day = if clash.day.is_empty() {
        format!("day {}", clash.day_of_week)
    } else {
        clash.day.clone()
    };

    format!(
        "{} clash in {} on {}: {} {} ({}) vs {} {} ({})",
        axis,
        clash.resource.name(),
        day,
        clash.slot1_details.course_code,
        clash.slot1_details.course_name,
        clash.time_slot1,
        clash.slot2_details.course_code,
        clash.slot2_details.course_name,
        clash.time_slot2,
    )
}
