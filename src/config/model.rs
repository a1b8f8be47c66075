use crate::planning::model::Formation;
use crate::week::YearWeek;
use std::time::Duration;

#[derive(Debug)]
pub struct Config {
    pub formation: Formation,
    /// Target week; the current ISO week is used when unset.
    pub semaine: Option<YearWeek>,
    pub cache_ttl: Duration,
}
