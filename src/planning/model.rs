use serde::Serialize;

/// Capitalized weekday names for response metadata, Monday to Friday.
pub const WEEKDAYS_DISPLAY: [&str; 5] = ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub day: u8,
    pub day_name: String,
    pub teacher: String,
    pub room: String,
    pub group: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub color: String,
    pub raw_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Communication,
    Projet,
    #[serde(rename = "théorie")]
    #[strum(serialize = "théorie")]
    Theorie,
    Tp,
    Sport,
    Cours,
}

/// The two formations published on the provider's public planning page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr)]
pub enum Formation {
    CC,
    HM,
}

impl Formation {
    pub fn type_ressource(&self) -> &'static str {
        "63000"
    }

    pub fn code_ressource(&self) -> &'static str {
        match self {
            Formation::CC => "11606",
            Formation::HM => "11603",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Formation::CC => "BPJEPS AF CC (Cours Collectifs)",
            Formation::HM => "BPJEPS AF HM (Haltérophilie Musculation)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanningData {
    pub events: Vec<Event>,
    pub meta: PlanningMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningMeta {
    pub formation: String,
    pub formation_code: String,
    pub semaine: String,
    pub total_events: usize,
    pub weekdays: [&'static str; 5],
    pub execution_time: String,
}
