pub mod server;
pub mod templates;

pub use server::AppState;
