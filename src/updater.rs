//! # Status updater
//!
//! Polls the ephemeris, renders the status block and hands it to a
//! [`Publisher`] when it differs from the last block successfully published.
//!
//! ```text
//! tick ─▶ compute(now) ─▶ render ─▶ same as last? ──yes──▶ skip
//!                                        │ no
//!                                        ▼
//!                                     publish ──ok──▶ remember block
//!                                        │ err
//!                                        ▼
//!                               log, keep previous block (retried next tick)
//! ```
use std::future::Future;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::config::Config;
use crate::constants::UnixSeconds;
use crate::ephemeris::MarsEphemeris;
use crate::marsclock_errors::MarsClockError;
use crate::patch::Markers;
use crate::publisher::Publisher;
use crate::status::render_status;
use crate::time::now_unix_seconds;

/// Result of one polling cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The status changed and the publisher accepted it
    Published,
    /// The status is identical to the last published one
    Unchanged,
    /// The status changed but the publisher failed
    Failed,
}

pub struct StatusUpdater<P: Publisher> {
    ephemeris: MarsEphemeris,
    publisher: P,
    destination: String,
    markers: Markers,
    last_published: Option<String>,
}

impl<P: Publisher> StatusUpdater<P> {
    pub fn new(
        ephemeris: MarsEphemeris,
        publisher: P,
        destination: impl Into<String>,
        markers: Markers,
    ) -> Self {
        StatusUpdater {
            ephemeris,
            publisher,
            destination: destination.into(),
            markers,
            last_published: None,
        }
    }

    pub fn from_config(config: &Config, publisher: P) -> Self {
        Self::new(
            MarsEphemeris::new(config.time_config()),
            publisher,
            config.subreddit.clone(),
            config.markers.clone(),
        )
    }

    /// Last status block accepted by the publisher
    pub fn last_published(&self) -> Option<&str> {
        self.last_published.as_deref()
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Run one cycle for the given instant.
    ///
    /// Return
    /// ------
    /// * the [`CycleOutcome`]; publisher failures are reported as
    ///   [`CycleOutcome::Failed`], only an invalid timestamp is an error
    pub async fn run_cycle_at(
        &mut self,
        epoch_seconds: UnixSeconds,
    ) -> Result<CycleOutcome, MarsClockError> {
        let snapshot = self.ephemeris.compute(epoch_seconds)?;
        let status = render_status(&snapshot);

        if self.last_published.as_deref() == Some(status.as_str()) {
            tracing::trace!(msd = snapshot.mars_sol_date_msd, "status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }

        tracing::info!(
            destination = %self.destination,
            mars_sol = snapshot.mars_sol(),
            curiosity_sol = snapshot.curiosity.sol_index,
            "Updating status"
        );

        match self
            .publisher
            .publish(&self.destination, &status, &self.markers)
            .await
        {
            Ok(()) => {
                self.last_published = Some(status);
                Ok(CycleOutcome::Published)
            }
            Err(e) => {
                tracing::warn!("Status publication failed, retrying next cycle: {}", e);
                Ok(CycleOutcome::Failed)
            }
        }
    }

    /// Run one cycle for the current system time
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, MarsClockError> {
        let now = now_unix_seconds()?;
        self.run_cycle_at(now).await
    }

    /// Poll every `poll_interval` until `shutdown` completes.
    ///
    /// The first cycle runs immediately. Late ticks are delayed rather than
    /// bunched, since each cycle always uses the current time.
    pub async fn run<F>(&mut self, poll_interval: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        tracing::info!(
            "Status updater started for {} (every {:?})",
            self.destination,
            poll_interval
        );

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping status updater");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.run_cycle().await {
                        tracing::error!("Status cycle failed: {}", e);
                    }
                }
            }
        }
    }
}
