use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Daily posting window. Hours are inclusive, local wall clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Schedule {
    pub start_hour: u32,
    pub end_hour: u32,
    pub posts_per_day: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            start_hour: 1,
            end_hour: 22,
            posts_per_day: 10,
        }
    }
}

impl Schedule {
    /// Fixed minutes between slots: floor((end - start) * 60 / count).
    /// By construction interval * count never exceeds the window. Clamped
    /// to one minute because the timer cannot run on a zero period; config
    /// validation rejects such schedules before an engine is built.
    pub fn interval_minutes(&self) -> i64 {
        ((((self.end_hour - self.start_hour) * 60) / self.posts_per_day) as i64).max(1)
    }

    /// How long to wait before the first cycle.
    ///
    /// Before today's start-hour slot the wait is exact. After it, the wait
    /// lands on the next multiple of the interval past the slot; sitting
    /// exactly on a slot boundary waits a full interval.
    pub fn delay_until_first_slot(&self, now: NaiveDateTime) -> Duration {
        let start = NaiveTime::from_hms_opt(self.start_hour, 0, 0).unwrap_or(NaiveTime::MIN);
        let first_slot = now.date().and_time(start);

        if now <= first_slot {
            first_slot - now
        } else {
            let elapsed_minutes = (now - first_slot).num_minutes();
            let interval = self.interval_minutes();
            Duration::minutes(interval - elapsed_minutes % interval)
        }
    }

    pub fn in_window(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour <= self.end_hour
    }
}

/// Twitter OAuth 1.0a user-context credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_key: String,
    pub app_secret: String,
    pub access_token: String,
    pub access_secret: String,
}
