pub mod error;
pub mod keyboard;
pub mod loader;
pub mod patterns;
pub mod report;
pub mod settings;
pub mod timings;
pub mod tokens;

pub use error::{TokenError, TokenResult};
pub use loader::load_document;
pub use tokens::TokenSet;
