//! Middleware stack for the gateway.
//!
//! Layer order: Request → CORS → Trace → BodyLimit → Handler

mod cors;

pub use cors::create_cors_layer;
