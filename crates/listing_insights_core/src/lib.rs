pub mod domain;
pub mod ports;
pub mod prompt;

pub use domain::{ListingItem, UserCredentials};
pub use ports::{PortError, PortResult, TextGenerationService, UserStore};
pub use prompt::build_prompt;
