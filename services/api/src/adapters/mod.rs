pub mod gemini;
pub mod store;

pub use gemini::{GeminiConfig, GeminiTextClient};
pub use store::SqliteUserStore;
