use crate::extract::locate::{Candidate, TableContext};
use lazy_static::lazy_static;
use regex::Regex;

/// Lowercase weekday names, Monday to Friday; `day` indexes into this table.
pub const WEEKDAYS: [&str; 5] = ["lundi", "mardi", "mercredi", "jeudi", "vendredi"];

/// Sentinel day name for candidates whose day could not be resolved.
pub const UNKNOWN_DAY: &str = "inconnu";

const LAST_DAY: usize = WEEKDAYS.len() - 1;

lazy_static! {
    static ref PREFIX_TIME_REGEX: Regex =
        Regex::new(r"^(\d{1,2})[h:]?(\d{0,2})$").expect("Failed to create prefix time regex");
    static ref TIME_RANGE_REGEX: Regex =
        Regex::new(r"(\d{1,2})[h:](\d{2})?\s*(?:-|à)\s*(\d{1,2})(?:[h:](\d{2})?)?")
            .expect("Failed to create time range regex");
    static ref TIME_SINGLE_REGEX: Regex =
        Regex::new(r"(\d{1,2})[h:](\d{2})").expect("Failed to create single time regex");
    static ref BARE_HOUR_REGEX: Regex =
        Regex::new(r"(\d{1,2})h").expect("Failed to create bare hour regex");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub day: Option<usize>,
    pub start_time: String,
    pub end_time: String,
}

pub fn resolve(candidate: &Candidate, context: &TableContext, slot_minutes: u32) -> Resolution {
    let (start_time, end_time) = match &candidate.time_prefix {
        Some(prefix) => prefix_times(prefix, candidate.row_span, slot_minutes),
        None => text_times(&candidate.text),
    };

    Resolution {
        day: resolve_day(candidate, context),
        start_time,
        end_time,
    }
}

/// Day resolution order: recorded header columns, then ancestor text, then
/// the `column - 1` estimate. The estimate can silently pick the wrong day on
/// pages without structural hints; known limitation, kept for compatibility.
pub fn resolve_day(candidate: &Candidate, context: &TableContext) -> Option<usize> {
    if let Some(position) = candidate.position {
        let col_span = candidate.col_span as usize;
        let matched = context
            .day_columns
            .iter()
            .position(|&header_column| {
                position.column >= header_column
                    && position.column < header_column.saturating_add(col_span)
            });

        if let Some(day) = matched {
            return Some(day.min(LAST_DAY));
        }
    }

    for ancestor in &candidate.ancestor_texts {
        let lower = ancestor.to_lowercase();
        if let Some(day) = WEEKDAYS.iter().position(|name| lower.contains(name)) {
            return Some(day);
        }
    }

    match candidate.position {
        Some(position) if position.column > 0 => Some((position.column - 1).min(LAST_DAY)),
        _ => None,
    }
}

/// Start comes from the data row's first cell ("8h00", "14:30", "9"); the end
/// is projected forward by the row span, one slot per spanned row.
pub fn prefix_times(prefix: &str, row_span: u32, slot_minutes: u32) -> (String, String) {
    let Some(caps) = PREFIX_TIME_REGEX.captures(prefix) else {
        return (String::new(), String::new());
    };

    let hour: u32 = caps[1].parse().unwrap_or(0);
    let minutes: u32 = match caps.get(2) {
        Some(m) if !m.as_str().is_empty() => m.as_str().parse().unwrap_or(0),
        _ => 0,
    };

    // rowspan is page-controlled and can be absurdly large
    let end_total = (hour * 60 + minutes).saturating_add(row_span.saturating_mul(slot_minutes));

    (format_time(hour, minutes), format_time(end_total / 60, end_total % 60))
}

/// Matches, in order, a range ("9h30 - 12h"), a single time ("14h30"), then a
/// bare hour ("8h"). Only the range form carries its own end time.
pub fn text_times(text: &str) -> (String, String) {
    if let Some(caps) = TIME_RANGE_REGEX.captures(text) {
        let start = format_time(number(&caps, 1), number(&caps, 2));
        let end = format_time(number(&caps, 3), number(&caps, 4));
        return (start, end);
    }

    if let Some(caps) = TIME_SINGLE_REGEX.captures(text) {
        return (format_time(number(&caps, 1), number(&caps, 2)), String::new());
    }

    if let Some(caps) = BARE_HOUR_REGEX.captures(text) {
        return (format_time(number(&caps, 1), 0), String::new());
    }

    (String::new(), String::new())
}

pub fn format_time(hour: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hour, minutes)
}

fn number(caps: &regex::Captures, group: usize) -> u32 {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
