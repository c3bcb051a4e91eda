// =============================================================================
// HTTPミドルウェア
// =============================================================================
// リクエスト追跡（リクエストID・アクセスログ）とセキュリティヘッダー付与
// =============================================================================

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use uuid::Uuid;

/// リクエストIDの長さ（UUID先頭の16進8文字）
const REQUEST_ID_LEN: usize = 8;

/// レスポンスに付与するContent-Security-Policy
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    style-src 'self' https://cdn.jsdelivr.net; \
    script-src 'self'; \
    img-src 'self' data:; \
    font-src 'self' https://cdn.jsdelivr.net";

/// リクエストIDを生成する
fn new_request_id() -> String {
    Uuid::new_v4().simple().to_string()[..REQUEST_ID_LEN].to_string()
}

/// リクエスト追跡ミドルウェア
///
/// リクエストごとにIDを発行し、完了時にメソッド・パス・ステータス・
/// 所要時間をログに出力する。IDはX-Request-IDヘッダーとして返す。
pub async fn track_request(request: Request, next: Next) -> Response {
    let request_id = new_request_id();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let mut response = next.run(request).await;

    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    log::info!(
        "{} {} -> {} ({:.2} ms) [{}]",
        method,
        path,
        response.status().as_u16(),
        duration_ms,
        request_id
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }

    response
}

/// セキュリティヘッダー付与ミドルウェア
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("x-xss-protection", HeaderValue::from_static("1; mode=block"));
    headers.insert(
        "referrer-policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        "content-security-policy",
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );

    response
}
