use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use portfolio_shared_contracts::time::TimeService;
use portfolio_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        truncate_millis(Utc::now())
    }
}

fn truncate_millis(time: DateTime<Utc>) -> DateTime<Utc> {
    time.duration_trunc(TimeDelta::milliseconds(1))
        .unwrap_or(time)
}
