pub mod settings;
pub mod validator;

pub use settings::{AuthSettings, ClientSettings, LogFormat, LoggingConfig};
