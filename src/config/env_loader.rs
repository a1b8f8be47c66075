use crate::cache::DEFAULT_CACHE_TTL;
use crate::config::model::Config;
use crate::planning::model::Formation;
use crate::week::YearWeek;
use std::env;
use std::time::Duration;

pub fn load_config() -> Config {
    Config {
        formation: load_formation_config("FORMATION"),
        semaine: load_week_config("SEMAINE"),
        cache_ttl: load_ttl_config("CACHE_TTL_SECONDS"),
    }
}

fn load_formation_config(name: &str) -> Formation {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected 'CC' or 'HM'", name)),
        Err(_) => Formation::CC,
    }
}

fn load_week_config(name: &str) -> Option<YearWeek> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a week like '202540'", name)
        })),
        Err(_) => None,
    }
}

fn load_ttl_config(name: &str) -> Duration {
    match env::var(name) {
        Ok(value) => Duration::from_secs(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a number of seconds", name)
        })),
        Err(_) => DEFAULT_CACHE_TTL,
    }
}
