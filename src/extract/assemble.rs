use crate::extract::locate::{Candidate, TableContext, ALL_WEEKDAYS};
use crate::extract::resolve::{self, UNKNOWN_DAY, WEEKDAYS};
use crate::extract::{fields, ExtractOptions};
use crate::planning::model::Event;
use itertools::Itertools;
use tracing::trace;

const MIN_TITLE_CHARS: usize = 4;

const BANNED_TITLE_PHRASES: [&str; 4] =
    ["Sélectionnez", "Appliquer", "JURA SPORT", "Planning public"];

/// Builds the final event list: one event per acceptable candidate, stable
/// dedup on (raw text, title), then contiguous ids in discovery order.
pub fn assemble(
    candidates: &[Candidate],
    context: &TableContext,
    options: ExtractOptions,
) -> Vec<Event> {
    let events = candidates
        .iter()
        .filter_map(|candidate| build_event(candidate, context, options))
        .collect();

    dedup_events(events)
        .into_iter()
        .enumerate()
        .map(|(id, event)| Event { id, ..event })
        .collect()
}

fn build_event(
    candidate: &Candidate,
    context: &TableContext,
    options: ExtractOptions,
) -> Option<Event> {
    let lines: Vec<&str> = candidate
        .text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let title = lines.first().copied().unwrap_or_default();

    if !acceptable_title(title) {
        trace!("Rejected candidate titled {:?}", title);
        return None;
    }

    let resolution = resolve::resolve(candidate, context, options.slot_minutes);
    let (day, day_name) = match resolution.day {
        Some(day) => (day as u8, WEEKDAYS[day]),
        None => (0, UNKNOWN_DAY),
    };

    Some(Event {
        id: 0,
        title: title.to_string(),
        description: lines[1..].join(" "),
        start_time: resolution.start_time,
        end_time: resolution.end_time,
        day,
        day_name: day_name.to_string(),
        teacher: fields::extract_teacher(&candidate.text),
        room: fields::extract_room(&candidate.text),
        group: fields::extract_group(&candidate.text),
        event_type: fields::detect_event_type(&candidate.text),
        color: fields::color_from_style(&candidate.style_descriptor).to_string(),
        raw_text: candidate.text.clone(),
    })
}

fn acceptable_title(title: &str) -> bool {
    if title.chars().count() < MIN_TITLE_CHARS {
        return false;
    }
    if ALL_WEEKDAYS.iter().any(|day| title.eq_ignore_ascii_case(day)) {
        return false;
    }

    !BANNED_TITLE_PHRASES.iter().any(|phrase| title.contains(phrase))
}

/// Order-preserving dedup keeping the first occurrence; running it again on
/// its own output removes nothing.
pub fn dedup_events(events: Vec<Event>) -> Vec<Event> {
    events
        .into_iter()
        .unique_by(|event| (event.raw_text.clone(), event.title.clone()))
        .collect()
}
