// tests/common/mod.rs
pub use httpmock::Method::{GET, POST};
pub use httpmock::{Mock, MockServer};
pub use serde_json::json;

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};

use crate::api::client::ApiClient;
use crate::config::settings::ClientSettings;
use crate::content::service::CarouselService;
use crate::session::manager::SessionManager;

/// Build a decodable three-segment token with the given expiry claim.
/// The signature segment is fake; nothing in this crate verifies it.
pub fn token_expiring_at(at: DateTime<Utc>) -> String {
    let header = STANDARD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = STANDARD.encode(
        json!({ "sub": "ToolboxMobileTest", "expireDate": at.to_rfc3339() }).to_string(),
    );
    format!("{}.{}.fake_signature", header, payload)
}

/// A token with a comfortable hour of life, well outside the refresh buffer.
pub fn fresh_token() -> String {
    token_expiring_at(Utc::now() + Duration::hours(1))
}

/// A token inside the 30s refresh buffer but not yet expired.
pub fn near_expiry_token() -> String {
    token_expiring_at(Utc::now() + Duration::seconds(10))
}

/// Settings pointed at a mock server.
pub fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        base_url: server.base_url(),
        ..ClientSettings::default()
    }
}

/// Wire the full stack against a mock server.
pub fn build_stack(server: &MockServer) -> (Arc<SessionManager>, CarouselService) {
    let client = Arc::new(ApiClient::new(&settings_for(server)).expect("api client"));
    let session = Arc::new(SessionManager::new(client.clone()));
    let service = CarouselService::new(client, session.clone());
    (session, service)
}

/// Mount a login mock answering with the given token.
pub async fn mount_login<'a>(server: &'a MockServer, token: &str) -> Mock<'a> {
    let body = json!({ "token": token, "type": "Bearer" });
    server
        .mock_async(move |when, then| {
            when.method(POST).path("/v1/mobile/auth");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body.clone());
        })
        .await
}

/// Mount a data mock answering with the given carousel array.
pub async fn mount_data(server: &MockServer, carousels: serde_json::Value) -> Mock<'_> {
    server
        .mock_async(move |when, then| {
            when.method(GET).path("/v1/mobile/data");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(carousels.clone());
        })
        .await
}

/// Two raw carousels the way the API serves them, one of each kind.
pub fn sample_raw_carousels() -> serde_json::Value {
    json!([
        {
            "title": "Top Movies",
            "type": "poster",
            "items": [
                {
                    "title": "First",
                    "description": "A movie",
                    "imageUrl": "http://placeimg.com/640/480/any",
                    "videoUrl": "https://example.com/first.mp4"
                },
                {
                    "title": "Second",
                    "imageUrl": "http://example.com/second.jpg"
                }
            ]
        },
        {
            "title": "Recommended",
            "type": "thumb",
            "items": [
                { "title": "Third", "imageUrl": "https://example.com/third.jpg" }
            ]
        }
    ])
}
