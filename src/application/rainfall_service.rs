// Rainfall service - Use case for fetching, aggregating and charting station rainfall
use crate::application::chart_surface::ChartSurface;
use crate::application::error::{FetchError, PipelineError, RenderError};
use crate::application::readings_repository::ReadingsRepository;
use crate::domain::chart::BarChart;
use crate::domain::rainfall::{process_rainfall, DailyTotals};
use chrono::{DateTime, Days, TimeDelta, TimeZone, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct RainfallService {
    repository: Arc<dyn ReadingsRepository>,
    lookback_days: u32,
    element_id: String,
}

impl RainfallService {
    pub fn new(
        repository: Arc<dyn ReadingsRepository>,
        lookback_days: u32,
        element_id: String,
    ) -> Self {
        Self {
            repository,
            lookback_days,
            element_id,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Start of the lookback window: `now` minus the configured number of calendar days.
    ///
    /// A start that repeats in local time resolves to its earlier instant. One skipped by a
    /// DST jump falls back to exactly `lookback_days * 24h` before `now`.
    pub fn window_start<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<DateTime<Utc>, FetchError> {
        let days = self.lookback_days;
        let out_of_range = || {
            FetchError::InvalidRequest(format!("{days} days before {} is out of range", now.naive_utc()))
        };

        let local_start = now
            .naive_local()
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(out_of_range)?;

        let start = match now.timezone().from_local_datetime(&local_start).earliest() {
            Some(start) => start,
            None => now
                .clone()
                .checked_sub_signed(TimeDelta::days(i64::from(days)))
                .ok_or_else(out_of_range)?,
        };

        Ok(start.with_timezone(&Utc))
    }

    pub async fn daily_totals<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<DailyTotals, PipelineError> {
        let since = self.window_start(now)?;
        let readings = self.repository.readings_since(since).await?;
        tracing::debug!("Fetched {} readings since {}", readings.len(), since);

        let totals = process_rainfall(&readings);
        tracing::debug!("Aggregated readings into {} days", totals.len());
        Ok(totals)
    }

    pub fn render<S: ChartSurface + ?Sized>(
        &self,
        totals: &DailyTotals,
        surface: &mut S,
    ) -> Result<(), RenderError> {
        let chart = BarChart::rainfall(totals);
        surface.draw(&self.element_id, &chart)
    }

    /// Run the whole pipeline once. Nothing is drawn unless the fetch succeeds.
    pub async fn run<Tz: TimeZone, S: ChartSurface + ?Sized>(
        &self,
        now: &DateTime<Tz>,
        surface: &mut S,
    ) -> Result<DailyTotals, PipelineError> {
        let totals = self.daily_totals(now).await?;
        self.render(&totals, surface)?;
        Ok(totals)
    }
}
