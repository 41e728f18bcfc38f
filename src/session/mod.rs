pub mod manager;
pub mod store;

pub use manager::{AuthToken, SessionManager};
pub use store::SessionStore;
