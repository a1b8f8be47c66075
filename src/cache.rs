use crate::planning::model::PlanningData;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Time-bounded response store keyed by formation and week, injected into the
/// fetch path so extraction itself stays a pure function of the page text.
pub trait ResponseCache: Send + Sync {
    fn get(&self, key: &str) -> Option<PlanningData>;

    fn set(&self, key: String, data: PlanningData);

    fn sweep_expired(&self);
}

struct CacheEntry {
    data: PlanningData,
    stored_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

pub struct MemoryCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("Planning cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> Option<PlanningData> {
        self.entries
            .lock()
            .expect("Planning cache lock poisoned")
            .get(key)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.data.clone())
    }

    fn set(&self, key: String, data: PlanningData) {
        self.entries
            .lock()
            .expect("Planning cache lock poisoned")
            .insert(
                key,
                CacheEntry {
                    data,
                    stored_at: Instant::now(),
                },
            );
    }

    fn sweep_expired(&self) {
        let mut entries = self.entries.lock().expect("Planning cache lock poisoned");
        let before = entries.len();

        entries.retain(|_, entry| entry.is_fresh(self.ttl));

        if entries.len() < before {
            debug!("Swept {} expired planning entries", before - entries.len());
        }
    }
}
