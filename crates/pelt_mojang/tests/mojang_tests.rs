use base64::{Engine as _, engine::general_purpose::STANDARD};
use pelt_core::prelude::*;
use pelt_mojang::{MojangClient, MojangConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NOTCH_ID: &str = "069a79f444e94726a5befca90e38aaf5";

fn mock_client(server: &MockServer) -> MojangClient {
    MojangClient::new(MojangConfig {
        services_url: server.uri(),
        session_url: server.uri(),
    })
}

fn textures_property(skin_url: Option<&str>) -> String {
    let textures = match skin_url {
        Some(url) => serde_json::json!({ "SKIN": { "url": url } }),
        None => serde_json::json!({}),
    };
    STANDARD.encode(
        serde_json::json!({
            "timestamp": 1700000000000u64,
            "profileId": NOTCH_ID,
            "profileName": "Notch",
            "textures": textures,
        })
        .to_string(),
    )
}

// ── Identity resolution ─────────────────────────────────────────

#[tokio::test]
async fn resolve_returns_first_record_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/minecraft/profile/lookup/bulk/byname"))
        .and(body_json(serde_json::json!(["Notch"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": NOTCH_ID, "name": "Notch" }
        ])))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let identity = client.resolve("Notch").await.unwrap();
    assert_eq!(identity.as_str(), NOTCH_ID);
}

#[tokio::test]
async fn resolve_empty_result_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/minecraft/profile/lookup/bulk/byname"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.resolve("nobody").await.unwrap_err();
    assert!(matches!(err, ResolveError::NotFound));
}

#[tokio::test]
async fn resolve_server_error_is_lookup_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/minecraft/profile/lookup/bulk/byname"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.resolve("Notch").await.unwrap_err();
    assert!(matches!(err, ResolveError::Lookup(_)));
}

#[tokio::test]
async fn resolve_garbage_body_is_lookup_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/minecraft/profile/lookup/bulk/byname"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.resolve("Notch").await.unwrap_err();
    assert!(matches!(err, ResolveError::Lookup(_)));
}

// ── Skin reference (fail-soft profile fetch) ────────────────────

#[tokio::test]
async fn skin_reference_returns_custom_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/session/minecraft/profile/{NOTCH_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": NOTCH_ID,
            "name": "Notch",
            "properties": [
                { "name": "textures", "value": textures_property(Some("http://textures.example/skin.png")) }
            ]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let identity = PlayerIdentity::new(NOTCH_ID);
    assert_eq!(
        client.skin_reference(&identity).await,
        SkinReference::Url("http://textures.example/skin.png".to_string())
    );
}

#[tokio::test]
async fn profile_without_textures_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/session/minecraft/profile/{NOTCH_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": NOTCH_ID,
            "name": "Notch",
            "properties": []
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let identity = PlayerIdentity::new(NOTCH_ID);
    assert_eq!(
        client.skin_reference(&identity).await,
        SkinReference::Default(identity.default_skin())
    );
}

#[tokio::test]
async fn manifest_without_skin_entry_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/session/minecraft/profile/{NOTCH_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": NOTCH_ID,
            "name": "Notch",
            "properties": [
                { "name": "textures", "value": textures_property(None) }
            ]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let identity = PlayerIdentity::new(NOTCH_ID);
    assert_eq!(
        client.skin_reference(&identity).await,
        SkinReference::Default(DefaultSkin::Alex)
    );
}

#[tokio::test]
async fn corrupt_manifest_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/session/minecraft/profile/{NOTCH_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": NOTCH_ID,
            "name": "Notch",
            "properties": [
                { "name": "textures", "value": "@@ not base64 @@" }
            ]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let identity = PlayerIdentity::new(NOTCH_ID);
    assert_eq!(
        client.skin_reference(&identity).await,
        SkinReference::Default(identity.default_skin())
    );
}

#[tokio::test]
async fn session_outage_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/session/minecraft/profile/{NOTCH_ID}")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let identity = PlayerIdentity::new(NOTCH_ID);
    assert_eq!(
        client.skin_reference(&identity).await,
        SkinReference::Default(identity.default_skin())
    );
}

// ── Image proxying ──────────────────────────────────────────────

#[tokio::test]
async fn fetch_image_mirrors_bytes_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/texture/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"\x89PNGskin".to_vec(), "image/png"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let image = client
        .fetch_image(&format!("{}/texture/abc123", server.uri()))
        .await
        .unwrap();

    assert_eq!(image.bytes.as_ref(), b"\x89PNGskin");
    assert_eq!(image.content_type, "image/png");
}

#[tokio::test]
async fn fetch_image_non_success_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/texture/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .fetch_image(&format!("{}/texture/gone", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, ImageError::Status(404)));
}
