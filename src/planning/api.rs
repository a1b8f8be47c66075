use crate::cache::ResponseCache;
use crate::extract;
use crate::planning::model::{Formation, PlanningData, PlanningMeta, WEEKDAYS_DISPLAY};
use crate::week::YearWeek;
use lazy_static::lazy_static;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, REFERER};
use reqwest::{Client, StatusCode};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

const BASE_URL: &str = "https://js-formation.ymag.cloud/index.php/planning/public/";

// The provider blocks requests that do not look like a desktop browser.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

lazy_static! {
    static ref HTTP_CLIENT: Client = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(browser_headers())
        .build()
        .expect("Failed to create planning HTTP client");
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("fr-FR,fr;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static(BASE_URL));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}

pub struct PlanningAPI;

impl PlanningAPI {
    /**
    Returns the planning for one formation and week
    * served from the cache when a fresh entry exists, fetched and extracted otherwise
    */
    #[tracing::instrument(skip(cache), fields(request_id = %Uuid::new_v4()))]
    pub async fn get_planning(
        formation: Formation,
        semaine: YearWeek,
        cache: &dyn ResponseCache,
    ) -> Result<PlanningData, APIError> {
        let started = Instant::now();
        let key = cache_key(formation, semaine);

        if let Some(data) = cache.get(&key) {
            info!("Cache HIT for {}", key);
            return Ok(data);
        }

        debug!("Cache MISS for {}", key);

        let html = Self::fetch_week(formation, semaine).await?;
        debug!("Received {} bytes of planning HTML", html.len());

        let data = build_planning(formation, semaine, &html, started);
        info!(
            "Extracted {} events in {}",
            data.meta.total_events, data.meta.execution_time
        );

        cache.set(key, data.clone());
        cache.sweep_expired();

        Ok(data)
    }

    #[tracing::instrument]
    pub async fn fetch_week(formation: Formation, semaine: YearWeek) -> Result<String, APIError> {
        let url = format!(
            "{}?typeRessource={}&codeRessource={}&semaine={}",
            BASE_URL,
            formation.type_ressource(),
            formation.code_ressource(),
            semaine
        );

        debug!("Fetching {}", url);

        let response = HTTP_CLIENT.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Planning page answered {}", status);
            return Err(APIError::BadStatus(status));
        }

        Ok(response.text().await?)
    }
}

/// Wraps the extracted events in the response shape, stamping the metadata
/// block with the formation, the week, and the elapsed time since `started`.
pub fn build_planning(
    formation: Formation,
    semaine: YearWeek,
    html: &str,
    started: Instant,
) -> PlanningData {
    let extraction = extract::extract_events(html);
    let formation_code: &'static str = formation.into();

    let meta = PlanningMeta {
        formation: formation.display_name().to_string(),
        formation_code: formation_code.to_string(),
        semaine: semaine.to_string(),
        total_events: extraction.events.len(),
        weekdays: WEEKDAYS_DISPLAY,
        execution_time: format!("{}ms", started.elapsed().as_millis()),
    };

    PlanningData {
        events: extraction.events,
        meta,
    }
}

fn cache_key(formation: Formation, semaine: YearWeek) -> String {
    let code: &'static str = formation.into();
    format!("{}-{}", code, semaine)
}

#[derive(Debug)]
pub enum APIError {
    RequestFailed(reqwest::Error),
    BadStatus(StatusCode),
}

impl From<reqwest::Error> for APIError {
    fn from(error: reqwest::Error) -> Self {
        APIError::RequestFailed(error)
    }
}
