#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use chrono::Utc;
use serde_json::{Value, json};

use bookcase_api::models::applications::requests::CreateApplicationRequest;
use bookcase_api::models::exams::requests::CreateExamRequest;
use bookcase_api::models::majors::requests::CreateMajorRequest;
use common::{TestContext, bearer};

async fn seed_major(ctx: &TestContext, owner: i64) -> i64 {
    ctx.storage
        .create_major(CreateMajorRequest {
            client_id: Some(owner),
            name: "Architecture".to_string(),
            ..CreateMajorRequest::default()
        })
        .await
        .unwrap()
        .id
}

async fn seed_exam(ctx: &TestContext, owner: i64) -> i64 {
    ctx.storage
        .create_exam(CreateExamRequest {
            client_id: Some(owner),
            date: Utc::now(),
            address: String::new(),
            test_name: "SAT".to_string(),
        })
        .await
        .unwrap()
        .id
}

#[actix_web::test]
async fn test_create_application_uses_caller_as_student() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let major = seed_major(&ctx, alice).await;
    let exam = seed_exam(&ctx, alice).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(bearer(&token))
        .set_json(json!({
            "student_id": 999,
            "major_id": major,
            "deadline": "2026-12-01T00:00:00Z",
            "stage": "Draft",
            "exam_ids": [exam]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["student_id"], alice);
    assert_eq!(body["data"]["exam_ids"], json!([exam]));
}

#[actix_web::test]
async fn test_create_application_requires_existing_major() {
    let ctx = TestContext::new().await;
    let (_, token) = ctx.user("alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(bearer(&token))
        .set_json(json!({ "major_id": 31337, "deadline": "2026-12-01T00:00:00Z" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 6004);
}

#[actix_web::test]
async fn test_admin_creates_application_for_other_client() {
    let ctx = TestContext::new().await;
    let (alice, _) = ctx.user("alice").await;
    let (_, admin_token) = ctx.admin("root").await;
    let major = seed_major(&ctx, alice).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(bearer(&admin_token))
        .set_json(json!({
            "student_id": alice,
            "major_id": major,
            "deadline": "2026-12-01T00:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["student_id"], alice);

    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(bearer(&admin_token))
        .set_json(json!({
            "student_id": 4040,
            "major_id": major,
            "deadline": "2026-12-01T00:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3000);
}

#[actix_web::test]
async fn test_update_application_keeps_student() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let (_, bob_token) = ctx.user("bob").await;
    let major = seed_major(&ctx, alice).await;
    let exam = seed_exam(&ctx, alice).await;
    let application = ctx
        .storage
        .create_application(CreateApplicationRequest {
            student_id: Some(alice),
            major_id: major,
            deadline: Utc::now(),
            stage: "Draft".to_string(),
            notes: String::new(),
            exam_ids: vec![exam],
        })
        .await
        .unwrap()
        .id;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/applications/{application}"))
        .insert_header(bearer(&bob_token))
        .set_json(json!({
            "id": application,
            "major_id": major,
            "deadline": "2026-12-01T00:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&format!("/api/applications/{application}"))
        .insert_header(bearer(&token))
        .set_json(json!({
            "id": application,
            "major_id": major,
            "deadline": "2026-12-01T00:00:00Z",
            "stage": "Submitted",
            "notes": "sent by post",
            "exam_ids": []
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let stored = ctx
        .storage
        .get_application_by_id(application)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.student_id, alice);
    assert_eq!(stored.stage, "Submitted");
    assert_eq!(stored.notes, "sent by post");
    assert!(stored.exam_ids.is_empty());
}

#[actix_web::test]
async fn test_delete_application() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let major = seed_major(&ctx, alice).await;
    let exam = seed_exam(&ctx, alice).await;
    let application = ctx
        .storage
        .create_application(CreateApplicationRequest {
            student_id: Some(alice),
            major_id: major,
            deadline: Utc::now(),
            stage: String::new(),
            notes: String::new(),
            exam_ids: vec![exam],
        })
        .await
        .unwrap()
        .id;
    let app = init_app!(ctx);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/applications/{application}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/applications/{application}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 父资源不受影响
    assert!(ctx.storage.get_major_by_id(major).await.unwrap().is_some());
    assert!(ctx.storage.get_exam_by_id(exam).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_list_applications_is_scoped_to_owner() {
    let ctx = TestContext::new().await;
    let (alice, alice_token) = ctx.user("alice").await;
    let (bob, bob_token) = ctx.user("bob").await;
    let (_, admin_token) = ctx.admin("root").await;
    let major = seed_major(&ctx, alice).await;
    for student in [alice, alice, bob] {
        ctx.storage
            .create_application(CreateApplicationRequest {
                student_id: Some(student),
                major_id: major,
                deadline: Utc::now(),
                stage: String::new(),
                notes: String::new(),
                exam_ids: vec![],
            })
            .await
            .unwrap();
    }
    let app = init_app!(ctx);

    for (token, owner, expected) in [(&alice_token, alice, 2), (&bob_token, bob, 1)] {
        let req = test::TestRequest::get()
            .uri("/api/applications")
            .insert_header(bearer(token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), expected);
        assert!(items.iter().all(|item| item["student_id"] == owner));
    }

    let req = test::TestRequest::get()
        .uri("/api/applications")
        .insert_header(bearer(&admin_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_application_exam_links_must_belong_to_student() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let (bob, _) = ctx.user("bob").await;
    let major = seed_major(&ctx, alice).await;
    let own = seed_exam(&ctx, alice).await;
    let foreign = seed_exam(&ctx, bob).await;
    let application = ctx
        .storage
        .create_application(CreateApplicationRequest {
            student_id: Some(alice),
            major_id: major,
            deadline: Utc::now(),
            stage: "Draft".to_string(),
            notes: String::new(),
            exam_ids: vec![own],
        })
        .await
        .unwrap()
        .id;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/applications/{application}"))
        .insert_header(bearer(&token))
        .set_json(json!({
            "id": application,
            "major_id": major,
            "deadline": "2026-12-01T00:00:00Z",
            "exam_ids": [own, foreign]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 5004);

    let stored = ctx
        .storage
        .get_application_by_id(application)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.exam_ids, vec![own]);
    assert_eq!(stored.stage, "Draft");

    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(bearer(&token))
        .set_json(json!({
            "major_id": major,
            "deadline": "2026-12-01T00:00:00Z",
            "exam_ids": [own, 8888]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 5004);

    let req = test::TestRequest::get()
        .uri("/api/applications")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_application_deadline_keeps_milliseconds() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let major = seed_major(&ctx, alice).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(bearer(&token))
        .set_json(json!({ "major_id": major, "deadline": "2026-12-01T23:59:59.125Z" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let stored = ctx.storage.get_application_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.deadline.timestamp_subsec_millis(), 125);
}
