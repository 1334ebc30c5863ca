//! Gzip for card, login and debug-dump responses.

use tower_http::compression::CompressionLayer;

/// Gzip only. Clients that do not send `Accept-Encoding: gzip` get the
/// body unchanged.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}
