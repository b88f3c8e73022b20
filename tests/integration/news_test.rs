//! Integration tests for news and category CRUD across partitions.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_reads_are_public() {
    let app = TestApp::new().await;

    let news = app.request("GET", "/api/news", None, None).await;
    assert_eq!(news.status, StatusCode::OK);
    assert_eq!(news.body, serde_json::json!([]));

    let regional = app.request("GET", "/api/europe/news", None, None).await;
    assert_eq!(regional.status, StatusCode::OK);

    let categories = app
        .request("GET", "/api/europe/news-categories", None, None)
        .await;
    assert_eq!(categories.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_region_is_not_found() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/antarctica/news", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // `global` is addressed by the unprefixed routes only.
    let response = app.request("GET", "/api/global/news", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_writes_are_gated_by_role_and_partition() {
    let app = TestApp::new().await;
    app.create_account("chief", "password123", "editor").await;
    app.create_account("asia-desk", "password123", "asia").await;

    let body = serde_json::json!({"heading": "Test", "content": "c", "source": "s"});

    let anonymous = app
        .request("POST", "/api/asia/news", Some(body.clone()), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let asia_cookie = app.login("asia-desk", "password123").await;
    let wrong_region = app
        .request("POST", "/api/europe/news", Some(body.clone()), Some(&asia_cookie))
        .await;
    assert_eq!(wrong_region.status, StatusCode::FORBIDDEN);

    // The global partition is editor-only.
    let global = app
        .request("POST", "/api/news", Some(body.clone()), Some(&asia_cookie))
        .await;
    assert_eq!(global.status, StatusCode::FORBIDDEN);

    let own_region = app
        .request("POST", "/api/asia/news", Some(body.clone()), Some(&asia_cookie))
        .await;
    assert_eq!(own_region.status, StatusCode::CREATED);

    let editor_cookie = app.login("chief", "password123").await;
    for path in ["/api/news", "/api/asia/news", "/api/europe/news"] {
        let response = app
            .request("POST", path, Some(body.clone()), Some(&editor_cookie))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "editor blocked on {path}");
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamp_and_lists_newest_first() {
    let app = TestApp::new().await;
    app.create_account("chief", "password123", "editor").await;
    let cookie = app.login("chief", "password123").await;

    let first = app
        .request(
            "POST",
            "/api/europe/news",
            Some(serde_json::json!({"heading": "First", "websiteLink": "https://example.org"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert!(first.body["id"].as_str().is_some());
    assert!(first.body["timestamp"].as_str().is_some());
    assert_eq!(first.body["websiteLink"], "https://example.org");

    let second = app
        .request(
            "POST",
            "/api/europe/news",
            Some(serde_json::json!({"heading": "Second"})),
            Some(&cookie),
        )
        .await;
    assert_ne!(first.body["id"], second.body["id"]);

    let listed = app.request("GET", "/api/europe/news", None, None).await;
    let items = listed.body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["heading"], "Second");
    assert_eq!(items[1]["heading"], "First");

    // Partitions are independent: nothing leaked into the global feed.
    let global = app.request("GET", "/api/news", None, None).await;
    assert_eq!(global.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_merges_and_protects_immutable_fields() {
    let app = TestApp::new().await;
    app.create_account("chief", "password123", "editor").await;
    let cookie = app.login("chief", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/news",
            Some(serde_json::json!({"heading": "Before", "content": "body", "source": "wire"})),
            Some(&cookie),
        )
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let updated = app
        .request(
            "PUT",
            &format!("/api/news/{id}"),
            Some(serde_json::json!({"heading": "After"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["heading"], "After");
    assert_eq!(updated.body["content"], "body");
    assert_eq!(updated.body["id"], created.body["id"]);
    assert_eq!(updated.body["timestamp"], created.body["timestamp"]);

    let missing = app
        .request(
            "PUT",
            "/api/news/00000000-0000-0000-0000-000000000000",
            Some(serde_json::json!({"heading": "x"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request(
            "PUT",
            "/api/news/not-a-uuid",
            Some(serde_json::json!({"heading": "x"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_news_then_gone() {
    let app = TestApp::new().await;
    app.create_account("chief", "password123", "editor").await;
    let cookie = app.login("chief", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/africa/news",
            Some(serde_json::json!({"heading": "Ephemeral"})),
            Some(&cookie),
        )
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let deleted = app
        .request("DELETE", &format!("/api/africa/news/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = app
        .request("DELETE", &format!("/api/africa/news/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_lifecycle_with_referential_integrity() {
    // The scenario from the reference behavior: create category, reference
    // it from an item, fail to delete it, free it, delete it.
    let app = TestApp::new().await;
    app.create_account("chief", "password123", "editor").await;
    let cookie = app.login("chief", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/asia/news-categories",
            Some(serde_json::json!({"category": "Tech"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body, serde_json::json!(["Tech"]));

    let item = app
        .request(
            "POST",
            "/api/asia/news",
            Some(serde_json::json!({"heading": "Chips", "category": "Tech"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(item.status, StatusCode::CREATED);
    let id = item.body["id"].as_str().unwrap().to_string();

    let blocked = app
        .request("DELETE", "/api/asia/news-categories/Tech", None, Some(&cookie))
        .await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(blocked.body["message"], "Category is in use");

    let freed = app
        .request("DELETE", &format!("/api/asia/news/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(freed.status, StatusCode::NO_CONTENT);

    let removed = app
        .request("DELETE", "/api/asia/news-categories/Tech", None, Some(&cookie))
        .await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let gone = app
        .request("DELETE", "/api/asia/news-categories/Tech", None, Some(&cookie))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_category_rejected_but_partitions_are_independent() {
    let app = TestApp::new().await;
    app.create_account("chief", "password123", "editor").await;
    let cookie = app.login("chief", "password123").await;

    let body = serde_json::json!({"category": "Sport"});
    let first = app
        .request("POST", "/api/asia/news-categories", Some(body.clone()), Some(&cookie))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let duplicate = app
        .request("POST", "/api/asia/news-categories", Some(body.clone()), Some(&cookie))
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

    let elsewhere = app
        .request("POST", "/api/europe/news-categories", Some(body), Some(&cookie))
        .await;
    assert_eq!(elsewhere.status, StatusCode::CREATED);

    let empty = app
        .request(
            "POST",
            "/api/asia/news-categories",
            Some(serde_json::json!({"category": ""})),
            Some(&cookie),
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_news_category_reference_is_not_validated() {
    // Lenient ingestion: an item may name a category that was never
    // created in its partition.
    let app = TestApp::new().await;
    app.create_account("chief", "password123", "editor").await;
    let cookie = app.login("chief", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/europe/news",
            Some(serde_json::json!({"heading": "Loose", "category": "NeverCreated"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["category"], "NeverCreated");
}
