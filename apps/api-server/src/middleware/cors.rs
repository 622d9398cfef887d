//! CORS - the frontend is served from a different origin.

use actix_cors::Cors;

/// Allow any origin, method and header.
pub fn cors() -> Cors {
    Cors::permissive()
}
