// HTTP response utilities for HTML pages with optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use tokio::io::AsyncReadExt;

/// Whether the client advertised Brotli in `Accept-Encoding` with a non-zero weight
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| {
            s.split(',').any(|coding| {
                let mut params = coding.split(';').map(str::trim);
                let name = params.next().unwrap_or_default();
                name.eq_ignore_ascii_case("br") && !params.any(is_zero_weight)
            })
        })
        .unwrap_or(false)
}

fn is_zero_weight(param: &str) -> bool {
    param
        .strip_prefix("q=")
        .or_else(|| param.strip_prefix("Q="))
        .and_then(|q| q.trim().parse::<f32>().ok())
        .is_some_and(|q| q == 0.0)
}

/// Build an HTML response, compressing the body with Brotli when asked to
pub async fn html_response(page: String, compress: bool) -> Result<Response<Body>, StatusCode> {
    let page_bytes = page.into_bytes();

    let (body_bytes, content_encoding) = if compress {
        let cursor = std::io::Cursor::new(page_bytes.as_slice());
        let mut encoder = BrotliEncoder::new(cursor);
        let mut compressed = Vec::new();
        encoder.read_to_end(&mut compressed).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!("Compressed page: {} → {} bytes", page_bytes.len(), compressed.len());
        (compressed, Some("br"))
    } else {
        (page_bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()));

    if let Some(encoding) = content_encoding {
        response_builder = response_builder
            .header(header::CONTENT_ENCODING, encoding)
            .header(header::VARY, "accept-encoding");
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_brotli() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        assert!(accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip;q=1.0, br;q=0.5"));
        assert!(accepts_brotli(&headers));
    }

    #[test]
    fn test_rejects_disabled_or_lookalike_brotli() {
        let mut headers = HeaderMap::new();

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, br;q=0"));
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("br; q=0.000"));
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("x-brotli, gzip"));
        assert!(!accepts_brotli(&headers));
    }

    #[tokio::test]
    async fn test_uncompressed_page() {
        let response = html_response("<p>rain</p>".to_string(), false).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "11");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<p>rain</p>");
    }

    #[tokio::test]
    async fn test_compressed_page() {
        let page = "<p>rain</p>".repeat(200);
        let response = html_response(page.clone(), true).await.unwrap();

        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.len() < page.len());
    }
}
