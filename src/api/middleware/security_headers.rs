//! Conservative security response headers applied to every route.

use axum::http::header::{self, HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Header layers: no MIME sniffing, no framing, no referrer.
pub fn layers() -> [SetResponseHeaderLayer<HeaderValue>; 3] {
    [
        overriding(header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        overriding(header::X_FRAME_OPTIONS, "DENY"),
        overriding(header::REFERRER_POLICY, "no-referrer"),
    ]
}

fn overriding(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}
