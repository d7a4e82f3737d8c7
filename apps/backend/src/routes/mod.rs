use actix_web::web;

pub mod game;
pub mod health;

/// Register every HTTP route.
///
/// Shared by `main.rs` and the integration tests so both serve the same
/// paths; middleware is wrapped around the `App` by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.configure(game::configure_routes);
}
