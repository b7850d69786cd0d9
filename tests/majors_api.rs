#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use chrono::Utc;
use serde_json::{Value, json};

use bookcase_api::models::exams::requests::CreateExamRequest;
use bookcase_api::models::majors::requests::CreateMajorRequest;
use common::{TestContext, bearer};

async fn seed_exam(ctx: &TestContext, owner: i64, name: &str) -> i64 {
    ctx.storage
        .create_exam(CreateExamRequest {
            client_id: Some(owner),
            date: Utc::now(),
            address: "Hall A".to_string(),
            test_name: name.to_string(),
        })
        .await
        .unwrap()
        .id
}

async fn seed_major(ctx: &TestContext, owner: i64, name: &str, exam_ids: Vec<i64>) -> i64 {
    ctx.storage
        .create_major(CreateMajorRequest {
            client_id: Some(owner),
            name: name.to_string(),
            exam_ids,
            ..CreateMajorRequest::default()
        })
        .await
        .unwrap()
        .id
}

#[actix_web::test]
async fn test_create_major_forces_owner_for_regular_user() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/majors")
        .insert_header(bearer(&token))
        .set_json(json!({
            "client_id": 999,
            "name": "Computer Science",
            "university_name": "TU Delft",
            "status": "ApplyTo"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["client_id"], alice);
    assert_eq!(body["data"]["status"], "ApplyTo");
    assert_eq!(location, format!("/api/majors/{}", body["data"]["id"]));
}

#[actix_web::test]
async fn test_list_majors_is_scoped_to_owner() {
    let ctx = TestContext::new().await;
    let (alice, alice_token) = ctx.user("alice").await;
    let (bob, _) = ctx.user("bob").await;
    let (_, admin_token) = ctx.admin("root").await;
    seed_major(&ctx, alice, "Physics", vec![]).await;
    seed_major(&ctx, bob, "History", vec![]).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/majors")
        .insert_header(bearer(&alice_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Physics");

    let req = test::TestRequest::get()
        .uri("/api/majors")
        .insert_header(bearer(&admin_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_foreign_major_is_forbidden_but_admin_may_access() {
    let ctx = TestContext::new().await;
    let (alice, _) = ctx.user("alice").await;
    let (_, bob_token) = ctx.user("bob").await;
    let (_, admin_token) = ctx.admin("root").await;
    let major = seed_major(&ctx, alice, "Physics", vec![]).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri(&format!("/api/majors/{major}"))
        .insert_header(bearer(&bob_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/majors/{major}"))
        .insert_header(bearer(&bob_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(ctx.storage.get_major_by_id(major).await.unwrap().is_some());

    let req = test::TestRequest::get()
        .uri(&format!("/api/majors/{major}"))
        .insert_header(bearer(&admin_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_missing_major_and_bad_id() {
    let ctx = TestContext::new().await;
    let (_, token) = ctx.user("alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/majors/4242")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 4000);

    let req = test::TestRequest::get()
        .uri("/api/majors/abc")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_major_replaces_exam_links() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let ielts = seed_exam(&ctx, alice, "IELTS").await;
    let gre = seed_exam(&ctx, alice, "GRE").await;
    let major = seed_major(&ctx, alice, "Physics", vec![ielts]).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/majors/{major}"))
        .insert_header(bearer(&token))
        .set_json(json!({
            "id": major,
            "name": "Applied Physics",
            "status": "Applied",
            "exam_ids": [gre, gre]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let stored = ctx.storage.get_major_by_id(major).await.unwrap().unwrap();
    assert_eq!(stored.name, "Applied Physics");
    assert_eq!(stored.status.to_string(), "Applied");
    assert_eq!(stored.exam_ids, vec![gre]);
    assert_eq!(stored.client_id, alice);
}

#[actix_web::test]
async fn test_update_major_id_mismatch() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let major = seed_major(&ctx, alice, "Physics", vec![]).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/majors/{major}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "id": major + 1, "name": "Chemistry" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1005);

    let stored = ctx.storage.get_major_by_id(major).await.unwrap().unwrap();
    assert_eq!(stored.name, "Physics");
}

#[actix_web::test]
async fn test_foreign_exam_link_is_rejected() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let (bob, _) = ctx.user("bob").await;
    let own = seed_exam(&ctx, alice, "IELTS").await;
    let foreign = seed_exam(&ctx, bob, "TOEFL").await;
    let major = seed_major(&ctx, alice, "Physics", vec![own]).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/majors/{major}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "id": major, "name": "Physics", "exam_ids": [own, foreign] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 5004);

    let stored = ctx.storage.get_major_by_id(major).await.unwrap().unwrap();
    assert_eq!(stored.exam_ids, vec![own]);

    let req = test::TestRequest::post()
        .uri("/api/majors")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Maths", "exam_ids": [9999] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_delete_major_removes_links_and_applications() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let exam = seed_exam(&ctx, alice, "IELTS").await;
    let major = seed_major(&ctx, alice, "Physics", vec![exam]).await;
    let application = ctx
        .storage
        .create_application(
            bookcase_api::models::applications::requests::CreateApplicationRequest {
                student_id: Some(alice),
                major_id: major,
                deadline: Utc::now(),
                stage: "Draft".to_string(),
                notes: String::new(),
                exam_ids: vec![exam],
            },
        )
        .await
        .unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/majors/{major}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert!(ctx.storage.get_major_by_id(major).await.unwrap().is_none());
    assert!(
        ctx.storage
            .get_application_by_id(application.id)
            .await
            .unwrap()
            .is_none()
    );
    // 考试本身保留
    assert!(ctx.storage.get_exam_by_id(exam).await.unwrap().is_some());
}
