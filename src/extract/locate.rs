use crate::extract::resolve::WEEKDAYS;
use crate::extract::Strategy;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// All seven French weekday names; cells holding exactly one of these are
/// headers, not events.
pub(crate) const ALL_WEEKDAYS: [&str; 7] = [
    "lundi",
    "mardi",
    "mercredi",
    "jeudi",
    "vendredi",
    "samedi",
    "dimanche",
];

/// Selection-widget text found on the public planning page.
const UI_CHROME: [&str; 2] = ["Sélectionnez", "Appliquer"];

const SKIPPED_SUBTREES: [&str; 5] = ["script", "style", "head", "noscript", "template"];

const MIN_TABLE_TEXT_CHARS: usize = 5;
const MIN_BLOCK_TEXT_CHARS: usize = 10;
const MIN_FREE_LINE_CHARS: usize = 15;
const MAX_ANCESTOR_DEPTH: usize = 5;

lazy_static! {
    static ref TABLE_SELECTOR: Selector =
        Selector::parse("table").expect("Failed to create table selector");
    static ref ROW_SELECTOR: Selector = Selector::parse("tr").expect("Failed to create row selector");
    static ref ANY_CELL_SELECTOR: Selector =
        Selector::parse("th, td").expect("Failed to create cell selector");
    static ref DATA_CELL_SELECTOR: Selector =
        Selector::parse("td").expect("Failed to create data cell selector");
    static ref STYLED_BLOCK_SELECTOR: Selector =
        Selector::parse("div[style*='background'], td[style*='background']")
            .expect("Failed to create styled block selector");
    static ref CLASS_HINT_SELECTOR: Selector =
        Selector::parse("[class*='event'], [class*='cours'], [class*='seance'], [class*='planning']")
            .expect("Failed to create class hint selector");
    static ref TIME_PREFIX_REGEX: Regex =
        Regex::new(r"^\d{1,2}[h:]?\d{0,2}$").expect("Failed to create time prefix regex");
}

/// A node that plausibly represents one timetable entry, with everything the
/// later stages need captured at discovery time.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub text: String,
    pub style_descriptor: String,
    pub row_span: u32,
    pub col_span: u32,
    pub position: Option<CellPosition>,
    pub time_prefix: Option<String>,
    pub ancestor_texts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

/// Structural context recorded while scanning: the header cell indices that
/// name a weekday, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableContext {
    pub day_columns: Vec<usize>,
}

pub fn scan(document: &Html, strategy: Strategy) -> (Vec<Candidate>, TableContext) {
    match strategy {
        Strategy::StructuredTable => scan_structured_table(document),
        Strategy::StyledBlocks => (
            scan_elements(document, &STYLED_BLOCK_SELECTOR),
            TableContext::default(),
        ),
        Strategy::ClassHints => (
            scan_elements(document, &CLASS_HINT_SELECTOR),
            TableContext::default(),
        ),
        Strategy::FreeText => (scan_free_text(document), TableContext::default()),
    }
}

fn scan_structured_table(document: &Html) -> (Vec<Candidate>, TableContext) {
    let Some(table) = elect_table(document) else {
        return (Vec::new(), TableContext::default());
    };

    let mut rows = table.select(&ROW_SELECTOR);
    let context = TableContext {
        day_columns: rows.next().map(header_day_columns).unwrap_or_default(),
    };

    debug!("Recorded day columns: {:?}", context.day_columns);

    let mut candidates = Vec::new();
    for (row_index, row) in rows.enumerate() {
        let Some(first_cell) = row.select(&ANY_CELL_SELECTOR).next() else {
            continue;
        };

        let prefix = element_text(&first_cell);
        if !TIME_PREFIX_REGEX.is_match(&prefix) {
            continue;
        }

        for (column, cell) in row.select(&DATA_CELL_SELECTOR).enumerate() {
            // column 0 is the time column itself
            if column == 0 {
                continue;
            }

            if let Some(candidate) = cell_candidate(&cell, row_index, column, &prefix) {
                trace!("Candidate at row {} column {}: {:?}", row_index, column, candidate.text);
                candidates.push(candidate);
            }
        }
    }

    (candidates, context)
}

/// Picks the table whose first row mentions a weekday or the week itself;
/// pages with a single unlabeled table fall back to that one.
fn elect_table(document: &Html) -> Option<ElementRef<'_>> {
    let tables: Vec<ElementRef> = document.select(&TABLE_SELECTOR).collect();

    tables
        .iter()
        .find(|table| {
            table
                .select(&ROW_SELECTOR)
                .next()
                .map(|first_row| {
                    let text = element_text(&first_row).to_lowercase();
                    WEEKDAYS.iter().any(|day| text.contains(day))
                        || text.contains("semaine")
                        || text.contains("week")
                })
                .unwrap_or(false)
        })
        .or_else(|| tables.first())
        .copied()
}

fn header_day_columns(header_row: ElementRef) -> Vec<usize> {
    header_row
        .select(&ANY_CELL_SELECTOR)
        .enumerate()
        .filter(|(_, cell)| {
            let text = element_text(cell).to_lowercase();
            WEEKDAYS.iter().any(|day| text.contains(day))
        })
        .map(|(index, _)| index)
        .collect()
}

fn cell_candidate(
    cell: &ElementRef,
    row: usize,
    column: usize,
    prefix: &str,
) -> Option<Candidate> {
    let text = element_text(cell);
    if text.chars().count() < MIN_TABLE_TEXT_CHARS || is_filtered_text(&text) {
        return None;
    }

    Some(Candidate {
        text,
        style_descriptor: style_descriptor(cell),
        row_span: span_attr(cell, "rowspan"),
        col_span: span_attr(cell, "colspan"),
        position: Some(CellPosition { row, column }),
        time_prefix: Some(prefix.to_string()),
        ancestor_texts: ancestor_texts(cell),
    })
}

fn scan_elements(document: &Html, selector: &Selector) -> Vec<Candidate> {
    document
        .select(selector)
        .filter_map(|element| block_candidate(&element))
        .collect()
}

fn block_candidate(element: &ElementRef) -> Option<Candidate> {
    let text = element_text(element);
    if text.chars().count() < MIN_BLOCK_TEXT_CHARS || is_filtered_text(&text) {
        return None;
    }

    // a lone line cannot be split into title and body
    if text.lines().filter(|line| !line.trim().is_empty()).count() < 2 {
        return None;
    }

    Some(Candidate {
        text,
        style_descriptor: style_descriptor(element),
        row_span: span_attr(element, "rowspan"),
        col_span: span_attr(element, "colspan"),
        position: None,
        time_prefix: None,
        ancestor_texts: ancestor_texts(element),
    })
}

fn scan_free_text(document: &Html) -> Vec<Candidate> {
    visible_text(document)
        .lines()
        .map(str::trim)
        .filter(|line| qualifies_as_free_line(line))
        .map(|line| Candidate {
            text: line.to_string(),
            style_descriptor: String::new(),
            row_span: 1,
            col_span: 1,
            position: None,
            time_prefix: None,
            ancestor_texts: Vec::new(),
        })
        .collect()
}

fn qualifies_as_free_line(line: &str) -> bool {
    line.chars().count() > MIN_FREE_LINE_CHARS
        && line.chars().any(|c| c.is_ascii_digit())
        && !is_filtered_text(line)
}

fn is_filtered_text(text: &str) -> bool {
    let trimmed = text.trim();

    ALL_WEEKDAYS.iter().any(|day| trimmed.eq_ignore_ascii_case(day))
        || UI_CHROME.iter().any(|phrase| text.contains(phrase))
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn style_descriptor(element: &ElementRef) -> String {
    let style = element.value().attr("style").unwrap_or_default();
    let class = element.value().attr("class").unwrap_or_default();

    format!("{} {}", style, class).trim().to_string()
}

fn span_attr(element: &ElementRef, name: &str) -> u32 {
    element
        .value()
        .attr(name)
        .and_then(|value| value.trim().parse().ok())
        .filter(|span| *span >= 1)
        .unwrap_or(1)
}

fn ancestor_texts(element: &ElementRef) -> Vec<String> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .take(MAX_ANCESTOR_DEPTH)
        .map(|ancestor| ancestor.text().collect::<String>())
        .collect()
}

fn visible_text(document: &Html) -> String {
    let mut text = String::new();
    push_visible_text(document.root_element(), &mut text);
    text
}

fn push_visible_text(element: ElementRef, out: &mut String) {
    if SKIPPED_SUBTREES.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        if let Node::Text(text) = child.value() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            push_visible_text(child_element, out);
        }
    }
}
