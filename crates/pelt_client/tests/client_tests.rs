use pelt_client::{PeltClient, PeltClientError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_skin_returns_bytes_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/skin"))
        .and(query_param("player", "Notch"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"skin-bytes".to_vec(), "image/png"))
        .mount(&server)
        .await;

    let client = PeltClient::new(server.uri());
    let image = client.fetch_skin("Notch").await.unwrap();

    assert_eq!(image.bytes.as_ref(), b"skin-bytes");
    assert_eq!(image.content_type, "image/png");
}

#[tokio::test]
async fn fetch_skin_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/skin"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Player not found"))
        .mount(&server)
        .await;

    let client = PeltClient::new(server.uri());
    let err = client.fetch_skin("nobody").await.unwrap_err();

    let PeltClientError::ServerError(status, body) = err else {
        panic!("expected server error");
    };
    assert_eq!(status, 404);
    assert_eq!(body, "Player not found");
}
