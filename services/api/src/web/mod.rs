pub mod analysis;
pub mod auth;
pub mod rest;
pub mod state;

// Re-export the handlers to make them easily accessible to the binary
// that builds the web server router.
pub use analysis::analyze_handler;
pub use auth::login_handler;
pub use rest::{health_handler, method_not_allowed};
