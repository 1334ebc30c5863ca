//! Integration tests for card creation, lookup, and editing.

mod helpers;

use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;

#[tokio::test]
async fn test_card_lifecycle_scenario() {
    let app = helpers::TestApp::new().await;

    let created = app
        .request(
            "POST",
            "/card",
            Some(json!({"emailContato": "a@x.com", "nome": "A"})),
            None,
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let card_id = created.body["card_id"].as_str().expect("card_id").to_string();
    let suffix = card_id.strip_prefix("card-").expect("card- prefix");
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));

    let again = app
        .request("POST", "/card", Some(json!({"emailContato": "a@x.com"})), None)
        .await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body["card_id"], card_id.as_str());

    let fetched = app.request("GET", &format!("/card/{card_id}"), None, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["nome"], "A");

    let updated = app
        .request(
            "PUT",
            &format!("/card/{card_id}"),
            Some(json!({"nome": "B", "empresa": "Acme"})),
            None,
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["card_id"], card_id.as_str());

    let fetched = app.request("GET", &format!("/card/{card_id}"), None, None).await;
    assert_eq!(fetched.body["nome"], "B");
    assert_eq!(fetched.body["empresa"], "Acme");
    assert_eq!(fetched.body["emailContato"], "a@x.com");
}

#[tokio::test]
async fn test_create_requires_contact_email() {
    let app = helpers::TestApp::new().await;

    for body in [json!({"nome": "A"}), json!({"emailContato": ""})] {
        let response = app.request("POST", "/card", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["details"][0]["field"], "emailContato");
    }
}

#[tokio::test]
async fn test_create_validates_fields() {
    let app = helpers::TestApp::new().await;

    let bad_email = app
        .request("POST", "/card", Some(json!({"emailContato": "nope"})), None)
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let bad_type = app
        .request(
            "POST",
            "/card",
            Some(json!({"emailContato": "a@x.com", "telefone": 123})),
            None,
        )
        .await;
    assert_eq!(bad_type.status, StatusCode::BAD_REQUEST);

    let bad_image = app
        .request(
            "POST",
            "/card",
            Some(json!({"emailContato": "a@x.com", "foto_perfil": "%%%"})),
            None,
        )
        .await;
    assert_eq!(bad_image.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_image.body["details"][0]["field"], "foto_perfil");
}

#[tokio::test]
async fn test_round_trip_keeps_all_fields() {
    let app = helpers::TestApp::new().await;
    let card_id = app
        .create_card(json!({
            "emailContato": "a@x.com",
            "nome": "A",
            "biografia": "Bio",
            "empresa": "Acme",
            "telefone": "+55 11 99999-0000",
            "whatsapp": "5511999990000",
            "instagram": "https://instagram.com/a",
            "linkedin": "https://linkedin.com/in/a",
            "site": "https://a.example.com",
            "chave_pix": "a@x.com",
            "unknown": "dropped"
        }))
        .await;

    let fetched = app.request("GET", &format!("/card/{card_id}"), None, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.body,
        json!({
            "card_id": card_id,
            "emailContato": "a@x.com",
            "nome": "A",
            "biografia": "Bio",
            "empresa": "Acme",
            "telefone": "+55 11 99999-0000",
            "whatsapp": "5511999990000",
            "instagram": "https://instagram.com/a",
            "linkedin": "https://linkedin.com/in/a",
            "site": "https://a.example.com",
            "chave_pix": "a@x.com"
        })
    );
}

#[tokio::test]
async fn test_get_unknown_card() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/card/card-ffffffff", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_ignores_non_editable_fields() {
    let app = helpers::TestApp::new().await;
    let card_id = app
        .create_card(json!({"emailContato": "a@x.com", "nome": "A", "site": "https://a.com"}))
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/card/{card_id}"),
            Some(json!({"site": "https://evil.com", "card_id": "card-00000000", "telefone": "123"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let fetched = app.request("GET", &format!("/card/{card_id}"), None, None).await;
    assert_eq!(fetched.body["site"], "https://a.com");
    assert_eq!(fetched.body["card_id"], card_id.as_str());
    assert_eq!(fetched.body["telefone"], "123");
    assert_eq!(fetched.body["nome"], "A");

    let missing = app
        .request("GET", "/card/card-00000000", None, None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_null_clears_and_type_errors() {
    let app = helpers::TestApp::new().await;
    let card_id = app
        .create_card(json!({"emailContato": "a@x.com", "nome": "A", "empresa": "Acme"}))
        .await;

    let cleared = app
        .request("PUT", &format!("/card/{card_id}"), Some(json!({"empresa": null})), None)
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    let fetched = app.request("GET", &format!("/card/{card_id}"), None, None).await;
    assert!(fetched.body.get("empresa").is_none());

    let bad = app
        .request("PUT", &format!("/card/{card_id}"), Some(json!({"nome": ["B"]})), None)
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    let fetched = app.request("GET", &format!("/card/{card_id}"), None, None).await;
    assert_eq!(fetched.body["nome"], "A");
}

#[tokio::test]
async fn test_update_unknown_card() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request("PUT", "/card/card-ffffffff", Some(json!({"nome": "B"})), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_photo_is_stored_and_served() {
    let app = helpers::TestApp::new().await;
    let photo = format!("data:image/png;base64,{}", STANDARD.encode(b"\x89PNG-bytes"));
    let card_id = app
        .create_card(json!({"emailContato": "a@x.com", "foto_perfil": photo}))
        .await;

    let fetched = app.request("GET", &format!("/card/{card_id}"), None, None).await;
    let reference = fetched.body["foto_perfil"].as_str().expect("reference");
    assert_eq!(reference, format!("/uploads/{card_id}.png"));

    let image = app.request("GET", reference, None, None).await;
    assert_eq!(image.status, StatusCode::OK);
    assert_eq!(image.headers["content-type"], "image/png");
    assert_eq!(image.raw.as_ref(), b"\x89PNG-bytes");
}
