use crate::core::{ContentGenerator, Publisher, Schedule};
use chrono::{Local, Timelike};
use std::sync::Arc;
use std::time::Duration;

/// Drives generate-then-publish cycles on the daily schedule.
///
/// Cycles are spawned rather than awaited in the loop, so a hanging remote
/// call stalls only its own cycle while ticks keep firing on the wall clock.
pub struct BotEngine<G, P> {
    schedule: Schedule,
    generator: Arc<G>,
    publisher: Arc<P>,
}

impl<G, P> BotEngine<G, P>
where
    G: ContentGenerator + 'static,
    P: Publisher + 'static,
{
    pub fn new(schedule: Schedule, generator: G, publisher: P) -> Self {
        Self {
            schedule,
            generator: Arc::new(generator),
            publisher: Arc::new(publisher),
        }
    }

    /// Runs forever. Waits for the first slot, fires one cycle, then ticks
    /// at the fixed interval, skipping ticks outside the posting window.
    /// The first-slot alignment is computed once and never recomputed, so
    /// the effective window drifts across day boundaries on long runs.
    pub async fn run(&self) {
        let delay = self.schedule.delay_until_first_slot(Local::now().naive_local());
        tracing::info!(
            "⏳ Waiting {} minutes until the first slot...",
            delay.num_minutes()
        );
        tokio::time::sleep(delay.to_std().unwrap_or_default()).await;

        self.spawn_cycle();

        let period = Duration::from_secs(self.schedule.interval_minutes() as u64 * 60);
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await; // consume the immediate tick

        loop {
            ticker.tick().await;
            self.tick(Local::now().hour());
        }
    }

    /// One timer tick: fire a cycle when the hour is inside the posting
    /// window, otherwise skip without any network activity.
    fn tick(&self, hour: u32) {
        if self.schedule.in_window(hour) {
            self.spawn_cycle();
        } else {
            tracing::info!("⏸️ Off hours. Skipping post.");
        }
    }

    /// One generate-then-publish attempt, awaited to completion. Generation
    /// never fails (the adapter substitutes its fallback); publish failures
    /// are logged and dropped.
    pub async fn post_once(&self) {
        Self::cycle(Arc::clone(&self.generator), Arc::clone(&self.publisher)).await;
    }

    fn spawn_cycle(&self) {
        let generator = Arc::clone(&self.generator);
        let publisher = Arc::clone(&self.publisher);
        tokio::spawn(async move {
            Self::cycle(generator, publisher).await;
        });
    }

    async fn cycle(generator: Arc<G>, publisher: Arc<P>) {
        let tweet = generator.generate().await;
        match publisher.publish(&tweet).await {
            Ok(()) => tracing::info!("✅ Tweet posted: {}", tweet),
            Err(e) => tracing::error!("❌ Twitter API error: {}", e),
        }
    }
}
