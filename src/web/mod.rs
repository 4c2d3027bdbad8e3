//! Static host for the compiled client.

pub mod routes;

pub use routes::configure;

use actix_web::middleware::DefaultHeaders;

/// Baseline security headers for every response.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Frame-Options", "DENY"))
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
}
