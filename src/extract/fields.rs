use crate::planning::model::EventType;
use lazy_static::lazy_static;
use regex::Regex;

pub const DEFAULT_COLOR: &str = "#E3F2FD";

// Keyword tables are priority-ordered: the first matching row wins.
const TYPE_RULES: [(&[&str], EventType); 5] = [
    (&["communication"], EventType::Communication),
    (&["concevoir", "projet"], EventType::Projet),
    (&["caractéristiques", "publics"], EventType::Theorie),
    (&["tp", "pratique"], EventType::Tp),
    (&["sport", "gym"], EventType::Sport),
];

const COLOR_RULES: [(&[&str], &str); 4] = [
    (&["rgb(144, 238, 144)", "green"], "#90EE90"),
    (&["rgb(0, 255, 255)", "cyan", "aqua"], "#00FFFF"),
    (&["rgb(255, 182, 193)", "pink"], "#FFB6C1"),
    (&["rgb(255, 255, 0)", "yellow"], "#FFFF00"),
];

lazy_static! {
    static ref NUMBERED_ROOM_REGEX: Regex =
        Regex::new(r"^[A-Z\s]+\d+$").expect("Failed to create numbered room regex");
    static ref FACILITY_PREFIX_REGEX: Regex =
        Regex::new(r"(?i)^(Salle|Gymnase|Studio|CAP|INSPE|MJC)").expect("Failed to create facility prefix regex");
    static ref TEACHER_LINE_REGEX: Regex =
        Regex::new(r"^(M\.|Mme|Mr|Mlle)\s+[A-Z]+").expect("Failed to create teacher line regex");
    static ref GROUP_REGEX: Regex =
        Regex::new(r"(\d{2}\s+\d{2}\s+[A-Z\s]+BPJEPS[A-Z ]+)").expect("Failed to create group regex");
}

/// Finds the first line naming a room, like "CAP MAURIANA 2" or "Salle B12".
pub fn extract_room(text: &str) -> String {
    for line in text.lines().map(str::trim) {
        if NUMBERED_ROOM_REGEX.is_match(line) {
            return line.to_string();
        }

        let lower = line.to_lowercase();
        if lower.contains("distance") {
            return "À distance".to_string();
        }
        if lower.contains("prescrit") {
            return "Prescrit".to_string();
        }

        if FACILITY_PREFIX_REGEX.is_match(line) {
            return line.to_string();
        }
    }

    String::new()
}

/// Finds the first civility-prefixed line, like "M. CARVALHO M." or "Mme JACOTOT J.".
pub fn extract_teacher(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| TEACHER_LINE_REGEX.is_match(line))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Finds a cohort label, like "25 26 MOIRANS BPJEPS AF HM CE".
pub fn extract_group(text: &str) -> String {
    GROUP_REGEX
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

pub fn detect_event_type(text: &str) -> EventType {
    let lower = text.to_lowercase();

    for (keywords, event_type) in TYPE_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return event_type;
        }
    }

    EventType::Cours
}

pub fn color_from_style(style_descriptor: &str) -> &'static str {
    let lower = style_descriptor.to_lowercase();

    for (hints, color) in COLOR_RULES {
        if hints.iter().any(|hint| lower.contains(hint)) {
            return color;
        }
    }

    DEFAULT_COLOR
}
