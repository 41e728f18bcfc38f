pub mod codec;
pub mod expiry;

pub use codec::{decode_token, Claims};
pub use expiry::{is_token_expired, should_refresh_token, token_remaining_time};
