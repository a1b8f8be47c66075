use planning_bpjeps::cache::MemoryCache;
use planning_bpjeps::config::env_loader::load_config;
use planning_bpjeps::logging;
use planning_bpjeps::planning::api::PlanningAPI;
use planning_bpjeps::week::YearWeek;
use tracing::info;

#[tokio::main]
async fn main() {
    logging::setup();

    let config = load_config();
    let semaine = config.semaine.unwrap_or_else(YearWeek::current);
    let cache = MemoryCache::new(config.cache_ttl);

    info!("Loading planning of {:?} for week {}", config.formation, semaine);

    let planning = PlanningAPI::get_planning(config.formation, semaine, &cache)
        .await
        .unwrap();

    println!(
        "{}",
        serde_json::to_string_pretty(&planning).expect("Failed to serialize planning")
    );
}
