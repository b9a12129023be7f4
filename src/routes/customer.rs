use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::types::CustomerId;
use crate::forms::customer::{CreateCustomerForm, SearchCustomersForm};
use crate::repository::DieselRepository;
use crate::routes::bad_request;
use crate::services::customer as customer_service;

#[post("/customers")]
pub async fn create_customer(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> actix_web::Result<HttpResponse> {
    let form = match CreateCustomerForm::from_body(&body) {
        Ok(form) => form,
        Err(e) => {
            log::error!("Failed to parse create customer request: {e}");
            return Ok(bad_request(e.to_string()));
        }
    };

    let repo = repo.into_inner();
    let response =
        web::block(move || customer_service::create_customer(repo.as_ref(), form.as_ref()))
            .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/customers/index")]
pub async fn search_customers(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SearchCustomersForm>,
) -> actix_web::Result<HttpResponse> {
    run_search(repo, form).await
}

#[get("/customers")]
pub async fn list_customers(
    repo: web::Data<DieselRepository>,
    web::Query(form): web::Query<SearchCustomersForm>,
) -> actix_web::Result<HttpResponse> {
    run_search(repo, form).await
}

async fn run_search(
    repo: web::Data<DieselRepository>,
    form: SearchCustomersForm,
) -> actix_web::Result<HttpResponse> {
    let repo = repo.into_inner();
    let response =
        web::block(move || customer_service::search_customers(repo.as_ref(), &form)).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/customers/{customer_id}")]
pub async fn delete_customer(
    repo: web::Data<DieselRepository>,
    customer_id: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let customer_id = match customer_id.parse::<CustomerId>() {
        Ok(customer_id) => customer_id,
        Err(e) => {
            log::error!("Rejected customer id {customer_id}: {e}");
            return Ok(bad_request(e.to_string()));
        }
    };

    let repo = repo.into_inner();
    let response =
        web::block(move || customer_service::delete_customer(repo.as_ref(), customer_id))
            .await?;

    Ok(HttpResponse::Ok().json(response))
}
