#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use chrono::Utc;
use serde_json::{Value, json};

use bookcase_api::models::applications::requests::CreateApplicationRequest;
use bookcase_api::models::auth::requests::LoginRequest;
use bookcase_api::models::exams::requests::CreateExamRequest;
use bookcase_api::models::majors::requests::CreateMajorRequest;
use common::{TEST_PASSWORD, TestContext, bearer};

#[actix_web::test]
async fn test_only_admin_can_create_clients() {
    let ctx = TestContext::new().await;
    let (_, user_token) = ctx.user("alice").await;
    let (_, admin_token) = ctx.admin("root").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .insert_header(bearer(&user_token))
        .set_json(json!({ "username": "mallory", "password": "pw", "role": "Admin" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(
        ctx.storage
            .get_client_by_username("mallory")
            .await
            .unwrap()
            .is_none()
    );

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "username": "dave", "password": "pw-dave" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["username"], "dave");
    assert_eq!(body["data"]["role"], "User");
    // 密码哈希不会出现在响应中
    assert!(body["data"].get("password_hash").is_none());

    let dave = ctx
        .auth
        .login(LoginRequest {
            username: "dave".to_string(),
            password: "pw-dave".to_string(),
        })
        .await
        .unwrap();
    assert!(dave.is_some());
}

#[actix_web::test]
async fn test_list_clients_scope() {
    let ctx = TestContext::new().await;
    let (alice, alice_token) = ctx.user("alice").await;
    ctx.user("bob").await;
    let (_, admin_token) = ctx.admin("root").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/clients")
        .insert_header(bearer(&alice_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], alice);

    let req = test::TestRequest::get()
        .uri("/api/clients")
        .insert_header(bearer(&admin_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_user_cannot_promote_self() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/clients/{alice}"))
        .insert_header(bearer(&token))
        .set_json(json!({
            "id": alice,
            "username": "alice2",
            "password": "",
            "role": "Admin"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let stored = ctx.storage.get_client_by_id(alice).await.unwrap().unwrap();
    assert_eq!(stored.username, "alice2");
    assert!(!stored.is_admin());

    // 空密码不修改原密码
    let login = ctx
        .auth
        .login(LoginRequest {
            username: "alice2".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap();
    assert!(login.is_some());
}

#[actix_web::test]
async fn test_update_client_username_collision() {
    let ctx = TestContext::new().await;
    let (alice, token) = ctx.user("alice").await;
    ctx.user("bob").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/clients/{alice}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "id": alice, "username": "bob" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3003);
}

#[actix_web::test]
async fn test_user_cannot_touch_other_client() {
    let ctx = TestContext::new().await;
    let (_, alice_token) = ctx.user("alice").await;
    let (bob, _) = ctx.user("bob").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri(&format!("/api/clients/{bob}"))
        .insert_header(bearer(&alice_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{bob}"))
        .insert_header(bearer(&alice_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(ctx.storage.get_client_by_id(bob).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_delete_client_cascades_everything_it_owns() {
    let ctx = TestContext::new().await;
    let (alice, _) = ctx.user("alice").await;
    let (bob, _) = ctx.user("bob").await;
    let (_, admin_token) = ctx.admin("root").await;

    let exam = ctx
        .storage
        .create_exam(CreateExamRequest {
            client_id: Some(alice),
            date: Utc::now(),
            address: String::new(),
            test_name: "IELTS".to_string(),
        })
        .await
        .unwrap()
        .id;
    let major = ctx
        .storage
        .create_major(CreateMajorRequest {
            client_id: Some(alice),
            name: "Law".to_string(),
            exam_ids: vec![exam],
            ..CreateMajorRequest::default()
        })
        .await
        .unwrap()
        .id;
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
    // 其他客户针对该专业的申请也随之删除
    let bobs_application = ctx
        .storage
        .create_application(CreateApplicationRequest {
            student_id: Some(bob),
            major_id: major,
            deadline: Utc::now(),
            stage: String::new(),
            notes: String::new(),
            exam_ids: vec![],
        })
        .await
        .unwrap()
        .id;
    let app = init_app!(ctx);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{alice}"))
        .insert_header(bearer(&admin_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert!(ctx.storage.get_client_by_id(alice).await.unwrap().is_none());
    assert!(ctx.storage.get_major_by_id(major).await.unwrap().is_none());
    assert!(ctx.storage.get_exam_by_id(exam).await.unwrap().is_none());
    assert!(
        ctx.storage
            .get_application_by_id(application)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        ctx.storage
            .get_application_by_id(bobs_application)
            .await
            .unwrap()
            .is_none()
    );
    assert!(ctx.storage.get_client_by_id(bob).await.unwrap().is_some());
    assert_eq!(ctx.storage.count_clients().await.unwrap(), 2);
}

#[actix_web::test]
async fn test_delete_missing_client_is_not_found() {
    let ctx = TestContext::new().await;
    let (_, admin_token) = ctx.admin("root").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::delete()
        .uri("/api/clients/777")
        .insert_header(bearer(&admin_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_stale_token_cannot_create_after_self_delete() {
    let ctx = TestContext::new().await;
    let (bob, token) = ctx.user("bob").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{bob}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let attempts = [
        ("/api/majors", json!({ "name": "Ghost Studies" })),
        ("/api/exams", json!({ "date": "2026-06-01T09:00:00Z" })),
        (
            "/api/applications",
            json!({ "major_id": 1, "deadline": "2026-12-01T00:00:00Z" }),
        ),
    ];
    for (uri, payload) in attempts {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(bearer(&token))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 3000, "{uri}");
    }
}
