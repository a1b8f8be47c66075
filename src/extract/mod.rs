pub mod assemble;
pub mod fields;
pub mod locate;
pub mod resolve;

use crate::planning::model::Event;
use scraper::Html;
use tracing::{debug, info};

/// Locator strategies, strongest structure first. Each one is tried only
/// when every earlier one produced zero events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Strategy {
    StructuredTable,
    StyledBlocks,
    ClassHints,
    FreeText,
}

impl Strategy {
    pub fn next(self) -> Option<Strategy> {
        match self {
            Strategy::StructuredTable => Some(Strategy::StyledBlocks),
            Strategy::StyledBlocks => Some(Strategy::ClassHints),
            Strategy::ClassHints => Some(Strategy::FreeText),
            Strategy::FreeText => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Minutes covered by one spanned table row when projecting end times.
    pub slot_minutes: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { slot_minutes: 60 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub events: Vec<Event>,
    /// The strategy that produced the events; `None` when all came up empty.
    pub strategy: Option<Strategy>,
}

pub fn extract_events(html: &str) -> Extraction {
    extract_events_with(html, ExtractOptions::default())
}

/**
Runs the strategy chain over one timetable document
* an unparseable or empty page yields an empty list, never an error
*/
pub fn extract_events_with(html: &str, options: ExtractOptions) -> Extraction {
    let document = Html::parse_document(html);

    let mut strategy = Some(Strategy::StructuredTable);
    while let Some(current) = strategy {
        let (candidates, context) = locate::scan(&document, current);
        let events = assemble::assemble(&candidates, &context, options);

        let name: &'static str = current.into();
        debug!("Strategy {} produced {} events", name, events.len());

        if !events.is_empty() {
            info!("Extracted {} events with strategy {}", events.len(), name);
            return Extraction {
                events,
                strategy: Some(current),
            };
        }

        strategy = current.next();
    }

    Extraction {
        events: Vec::new(),
        strategy: None,
    }
}
