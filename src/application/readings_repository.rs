// Repository trait for station readings
use crate::application::error::PipelineError;
use crate::domain::reading::Reading;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ReadingsRepository: Send + Sync {
    /// Fetch every reading recorded at or after `since`, up to the repository's item cap.
    ///
    /// Fails with `FetchError` on transport or status problems and `ParseError` on a
    /// malformed body.
    async fn readings_since(&self, since: DateTime<Utc>) -> Result<Vec<Reading>, PipelineError>;
}
