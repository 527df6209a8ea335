pub mod ids;
pub mod security;
pub mod theme;

pub use ids::{CategoryId, TaskId};
pub use security::ApiKey;
pub use theme::{Theme, UnknownTheme};
