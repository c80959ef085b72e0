//! Public bank-holiday feed client and snapshot cache.
//!
//! The feed is the only network dependency of the engine. A fetch or parse
//! failure is a configuration error and propagates; it is never downgraded
//! to an empty holiday set, because an empty set would silently turn
//! holidays into working days and corrupt statutory deadlines.

use std::sync::{Arc, RwLock};

use shared_types::{BankHolidays, EngineError, HolidaySet};

use crate::config;

/// Client for the bank-holidays JSON feed.
pub struct BankHolidaysApi {
    url: String,
    client: reqwest::Client,
}

impl BankHolidaysApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Client for the configured feed URL.
    pub fn from_config() -> Self {
        Self::new(config::config().holidays.feed_url.clone())
    }

    /// Fetch the full feed payload.
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn retrieve_all(&self) -> Result<BankHolidays, EngineError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| EngineError::configuration(format!("Bank holidays request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(EngineError::configuration(format!(
                "Bank holidays API error ({})",
                response.status()
            )));
        }

        let feed: BankHolidays = response.json().await.map_err(|e| {
            EngineError::configuration(format!("Bank holidays payload could not be parsed: {}", e))
        })?;

        tracing::info!(
            events = feed.england_and_wales.events.len(),
            "Bank holidays retrieved"
        );
        Ok(feed)
    }
}

/// Immutable-snapshot holiday cache.
///
/// Readers clone out an `Arc<HolidaySet>`; a refresh builds a whole new set
/// and swaps the pointer, so a reader never observes a partially updated
/// set. A failed refresh keeps the previous snapshot (stale-but-valid is
/// preferred over unavailable); only a cache that has never been filled
/// reports an error.
#[derive(Default)]
pub struct PublicHolidayCache {
    current: RwLock<Option<Arc<HolidaySet>>>,
}

impl PublicHolidayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly built set and return the shared handle.
    pub fn store(&self, holidays: HolidaySet) -> Arc<HolidaySet> {
        let holidays = Arc::new(holidays);
        let mut slot = self.current.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::clone(&holidays));
        holidays
    }

    /// The current snapshot, or a configuration error if no feed data has
    /// ever been loaded.
    pub fn snapshot(&self) -> Result<Arc<HolidaySet>, EngineError> {
        let slot = self.current.read().unwrap_or_else(|e| e.into_inner());
        slot.clone().ok_or_else(|| {
            EngineError::configuration("Bank holidays have not been loaded")
        })
    }

    /// Fetch the feed and swap the snapshot.
    pub async fn refresh(&self, api: &BankHolidaysApi) -> Result<Arc<HolidaySet>, EngineError> {
        self.apply_refresh(api.retrieve_all().await)
    }

    /// Fold a fetch outcome into the cache: success replaces the snapshot,
    /// failure falls back to the previous one if there is any.
    pub fn apply_refresh(
        &self,
        fetched: Result<BankHolidays, EngineError>,
    ) -> Result<Arc<HolidaySet>, EngineError> {
        match fetched {
            Ok(feed) => {
                let holidays = self.store(HolidaySet::from_feed(&feed));
                tracing::info!(holidays = holidays.len(), "Holiday cache refreshed");
                Ok(holidays)
            }
            Err(refresh_error) => match self.snapshot() {
                Ok(stale) => {
                    tracing::warn!(
                        error = %refresh_error,
                        "Holiday refresh failed; serving previous snapshot"
                    );
                    Ok(stale)
                }
                Err(_) => Err(refresh_error),
            },
        }
    }
}
