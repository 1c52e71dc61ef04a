use api::{ApiError, NotesApi, NotesClient};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn note_json(id: &str, title: &str, content: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "content": content,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "user_id": "user-1"
    })
}

#[tokio::test]
async fn test_list_notes_attaches_bearer_and_keeps_order() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/notes/get-all-notes"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            note_json("b", "Second", "2"),
            note_json("a", "First", "1"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notes = client.list_notes(Some("tok-1")).await.unwrap();
    let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[tokio::test]
async fn test_missing_token_never_reaches_the_network() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    assert!(matches!(
        client.list_notes(None).await,
        Err(ApiError::Unauthenticated)
    ));
    assert!(matches!(
        client.create_note(Some(""), "t", "c").await,
        Err(ApiError::Unauthenticated)
    ));
    assert!(matches!(
        client.update_note(None, "1", "t", "c").await,
        Err(ApiError::Unauthenticated)
    ));
    assert!(matches!(
        client.delete_note(None, "1").await,
        Err(ApiError::Unauthenticated)
    ));
    assert!(matches!(
        client.get_or_create_summary(None, "1").await,
        Err(ApiError::Unauthenticated)
    ));
}

#[tokio::test]
async fn test_create_note_sends_title_and_content() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/notes/create-note"))
        .and(header("Authorization", "Bearer tok"))
        .and(body_json(json!({ "title": "Groceries", "content": "Milk, eggs" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(note_json("9", "Groceries", "Milk, eggs")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let note = client
        .create_note(Some("tok"), "Groceries", "Milk, eggs")
        .await
        .unwrap();
    assert_eq!(note.id, "9");
    assert_eq!(note.title, "Groceries");
}

#[tokio::test]
async fn test_update_note_posts_id_with_fields() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/notes/update-note"))
        .and(header("Authorization", "Bearer tok"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "id": "42", "title": "Title", "content": "New" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json("42", "Title", "New")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let note = client
        .update_note(Some("tok"), "42", "Title", "New")
        .await
        .unwrap();
    assert_eq!(note.content, "New");
}

#[tokio::test]
async fn test_delete_note_sends_id_in_body() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("DELETE"))
        .and(path("/api/notes/delete-note"))
        .and(header("Authorization", "Bearer tok"))
        .and(body_json(json!({ "id": "42" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.delete_note(Some("tok"), "42").await.unwrap();
}

#[tokio::test]
async fn test_unauthorized_status_is_flagged() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/notes/get-all-notes"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let err = client.list_notes(Some("expired")).await.unwrap_err();
    assert!(matches!(err, ApiError::RequestFailed { status: 401 }));
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_server_error_maps_to_request_failed() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/notes/create-note"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = client.create_note(Some("tok"), "t", "c").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn test_existing_summary_skips_generation() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/ai/get-summary"))
        .and(body_json(json!({ "noteId": "7" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "Short." })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/ai/create-summary"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let summary = client.get_or_create_summary(Some("tok"), "7").await.unwrap();
    assert_eq!(summary, "Short.");
}

#[tokio::test]
async fn test_missing_summary_is_generated() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/ai/get-summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": null })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/ai/create-summary"))
        .and(header("Authorization", "Bearer tok"))
        .and(body_json(json!({ "noteId": "7" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "Fresh." })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let summary = client.get_or_create_summary(Some("tok"), "7").await.unwrap();
    assert_eq!(summary, "Fresh.");
}

#[tokio::test]
async fn test_empty_get_summary_body_falls_through_to_generation() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/ai/get-summary"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/ai/create-summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "Fresh." })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let summary = client.get_or_create_summary(Some("tok"), "7").await.unwrap();
    assert_eq!(summary, "Fresh.");
}

#[tokio::test]
async fn test_generation_without_summary_is_malformed() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/ai/get-summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/ai/create-summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let err = client.get_or_create_summary(Some("tok"), "7").await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_summary_lookup_401_stops_before_generation() {
    let mock_server = MockServer::start().await;
    let client = NotesClient::with_base_url(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/ai/get-summary"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/ai/create-summary"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client.get_or_create_summary(Some("tok"), "7").await.unwrap_err();
    assert!(err.is_unauthorized());
}
