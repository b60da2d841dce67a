use poem::middleware::Cors;

/// Initialize CORS middleware for cross-origin requests
///
/// Configuration:
/// - Origins: any
/// - Methods: GET, POST, PUT, PATCH, DELETE
/// - Headers: origin, content-type, accept, authorization
/// - Exposed headers: x-request-id
pub fn init_cors() -> Cors {
    // No explicit origins means every origin is allowed.
    Cors::new()
        .allow_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allow_headers(vec!["origin", "content-type", "accept", "authorization"])
        .expose_headers(vec!["x-request-id"])
}
