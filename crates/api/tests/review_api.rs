//! HTTP-level integration tests for reviews and their ownership rules.

mod common;

use axum::http::StatusCode;
use common::{body_json, book_body, delete_auth, get, post_json_auth, put_json_auth, ALICE, BOB};
use sqlx::PgPool;

/// Register alice and bob and give them one book to review.
async fn seed_book(pool: &PgPool) -> i64 {
    common::register(pool, ALICE).await;
    common::register(pool, BOB).await;
    let category_id = common::create_category(pool, ALICE, "Fiction").await;
    common::create_book(pool, ALICE, book_body(category_id, "Reviewed", 250)).await
}

async fn review_row(pool: &PgPool, id: i64) -> (i32, String) {
    sqlx::query_as("SELECT rating, comment FROM reviews WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn review_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rating_out_of_range_is_400(pool: PgPool) {
    let book_id = seed_book(&pool).await;

    for rating in [0, 6] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            &format!("/books/{book_id}/reviews"),
            ALICE,
            serde_json::json!({ "rating": rating, "comment": "nope" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["detail"],
            "Rating must be between 1 and 5"
        );
    }
    assert_eq!(review_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_review_by_same_user_is_409(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    common::create_review(&pool, ALICE, book_id, 4).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/books/{book_id}/reviews"),
        ALICE,
        serde_json::json!({ "rating": 2, "comment": "changed my mind" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("has already reviewed book"));
    assert_eq!(review_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn different_users_may_review_the_same_book(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    common::create_review(&pool, ALICE, book_id, 4).await;
    common::create_review(&pool, BOB, book_id, 2).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/books/{book_id}/reviews")).await).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_author_cannot_update_or_delete(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    let review_id = common::create_review(&pool, ALICE, book_id, 4).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/reviews/{review_id}"),
        BOB,
        serde_json::json!({ "rating": 1, "comment": "hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["detail"],
        "You are not authorized to update this review"
    );

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/reviews/{review_id}"), BOB).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["detail"],
        "You are not authorized to delete this review"
    );

    let (rating, comment) = review_row(&pool, review_id).await;
    assert_eq!(rating, 4);
    assert_eq!(comment, "test review");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn author_can_update_then_delete(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    let review_id = common::create_review(&pool, ALICE, book_id, 4).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/reviews/{review_id}"),
        ALICE,
        serde_json::json!({ "rating": 5, "comment": "even better on reread" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Review updated successfully");

    let (rating, comment) = review_row(&pool, review_id).await;
    assert_eq!(rating, 5);
    assert_eq!(comment, "even better on reread");

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/reviews/{review_id}"), ALICE).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(review_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_bad_rating_leaves_review_unchanged(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    let review_id = common::create_review(&pool, ALICE, book_id, 3).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/reviews/{review_id}"),
        ALICE,
        serde_json::json!({ "rating": 9 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(review_row(&pool, review_id).await.0, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_review_is_404(pool: PgPool) {
    common::register(&pool, ALICE).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/reviews/424242",
        ALICE,
        serde_json::json!({ "rating": 3 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/reviews/424242", ALICE).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn book_without_reviews_is_404(pool: PgPool) {
    let book_id = seed_book(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/books/{book_id}/reviews")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["detail"],
        format!("no reviews found for book ID {book_id}")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reviews_by_user_are_public(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    common::create_review(&pool, BOB, book_id, 5).await;

    let (bob_id,): (i64,) = sqlx::query_as("SELECT id FROM users WHERE username = 'bob'")
        .fetch_one(&pool)
        .await
        .unwrap();
    let (alice_id,): (i64,) = sqlx::query_as("SELECT id FROM users WHERE username = 'alice'")
        .fetch_one(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/users/{bob_id}/reviews")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["rating"], 5);
    assert_eq!(items[0]["book_id"], book_id);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/users/{alice_id}/reviews")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_book_removes_its_reviews(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    common::create_review(&pool, ALICE, book_id, 4).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/books/{book_id}"), BOB).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(review_count(&pool).await, 0);
}
