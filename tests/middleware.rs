use actix_web::{
    App, HttpResponse,
    error::{ErrorBadRequest, ErrorInternalServerError},
    http::StatusCode,
    test, web,
};

use customer_registry::middleware::UnhandledFailure;

#[actix_web::test]
async fn handler_error_becomes_bare_server_error() {
    let app = test::init_service(App::new().wrap(UnhandledFailure).default_service(web::to(
        || async { Err::<HttpResponse, _>(ErrorInternalServerError("database exploded")) },
    )))
    .await;

    let req = test::TestRequest::post().uri("/api/customers").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn panicking_blocking_task_becomes_bare_server_error() {
    let app = test::init_service(App::new().wrap(UnhandledFailure).default_service(web::to(
        || async {
            let count = web::block(|| -> usize { panic!("unexpected state") }).await?;
            Ok::<_, actix_web::Error>(HttpResponse::Ok().body(count.to_string()))
        },
    )))
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(test::read_body(resp).await.is_empty());
}

#[actix_web::test]
async fn client_errors_pass_through() {
    let app = test::init_service(App::new().wrap(UnhandledFailure).default_service(web::to(
        || async { Err::<HttpResponse, _>(ErrorBadRequest("bad input")) },
    )))
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "bad input");
}

#[actix_web::test]
async fn success_response_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(UnhandledFailure)
            .default_service(web::to(|| async { HttpResponse::Ok().body("fine") })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "fine");
}
