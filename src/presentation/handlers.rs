// HTTP request handlers
use crate::application::error::PipelineError;
use crate::infrastructure::html_surface::HtmlChartSurface;
use crate::infrastructure::http_response::{accepts_brotli, html_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Rainfall chart page, rendered fresh for every request
pub async fn rainfall_page(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);
    let service = &state.rainfall_service;
    let mut surface = HtmlChartSurface::page(service.element_id());

    if let Err(e) = service.run(&Local::now(), &mut surface).await {
        return pipeline_failure(e);
    }

    match html_response(surface.into_document(), compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Daily rainfall totals as JSON, in first-seen day order
pub async fn rainfall_totals(State(state): State<Arc<AppState>>) -> Response {
    match state.rainfall_service.daily_totals(&Local::now()).await {
        Ok(totals) => Json(totals).into_response(),
        Err(e) => pipeline_failure(e),
    }
}

fn pipeline_failure(error: PipelineError) -> Response {
    tracing::error!("Error building rainfall chart: {}", error);
    (StatusCode::BAD_GATEWAY, error.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::FetchError;
    use crate::application::rainfall_service::RainfallService;
    use crate::application::readings_repository::ReadingsRepository;
    use crate::domain::reading::Reading;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    struct FixedRepository(Option<Vec<Reading>>);

    #[async_trait]
    impl ReadingsRepository for FixedRepository {
        async fn readings_since(&self, _since: DateTime<Utc>) -> Result<Vec<Reading>, PipelineError> {
            self.0.clone().ok_or_else(|| FetchError::Status(503).into())
        }
    }

    fn state(readings: Option<Vec<Reading>>) -> Arc<AppState> {
        Arc::new(AppState {
            rainfall_service: RainfallService::new(
                Arc::new(FixedRepository(readings)),
                14,
                "fieldChart".to_string(),
            ),
        })
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_rainfall_page() {
        let readings = vec![
            Reading::new("2024-05-01T08:00:00Z", 1.2),
            Reading::new("2024-05-01T20:00:00Z", 0.8),
        ];

        let response = rainfall_page(HeaderMap::new(), State(state(Some(readings)))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#"<canvas id="fieldChart"></canvas>"#));
        assert!(body.contains(r#""labels":["2024-05-01"]"#));
        assert!(body.contains(r#""data":[2.0]"#));
    }

    #[tokio::test]
    async fn test_rainfall_totals() {
        let readings = vec![
            Reading::new("2024-05-02T05:00:00Z", 3.0),
            Reading::new("2024-05-01T08:00:00Z", 1.5),
        ];

        let response = rainfall_totals(State(state(Some(readings)))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"day": "2024-05-02", "total": 3.0},
                {"day": "2024-05-01", "total": 1.5}
            ])
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let response = rainfall_page(HeaderMap::new(), State(state(None))).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_string(response).await, "readings request failed with status 503");
    }
}
