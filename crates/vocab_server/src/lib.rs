pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
