pub mod cors;
pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

use actix_web::{web, HttpRequest};

pub use cors::cors_middleware;
pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;

use crate::state::app_state::AppState;

/// Whether a round is running, or `None` when the app has no `AppState`.
pub(crate) fn round_active(req: &HttpRequest) -> Option<bool> {
    req.app_data::<web::Data<AppState>>()
        .map(|state| state.engine().status().round_active)
}
