//! Last line of defence for failures that escape a request handler.
//!
//! Services fold store failures into envelopes themselves, so anything that
//! reaches this middleware is a programming error: a handler returning an
//! error or a blocking task that panicked. The failure is logged with the
//! request method and path and the client receives a bare `500` without an
//! envelope.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::HttpResponse;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use futures_util::future::{LocalBoxFuture, Ready, ready};

/// Middleware converting unhandled failures into a generic `500` response.
///
/// ```
/// use actix_web::App;
/// use customer_registry::middleware::UnhandledFailure;
///
/// let _app = App::new().wrap(UnhandledFailure);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct UnhandledFailure;

impl<S, B> Transform<S, ServiceRequest> for UnhandledFailure
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = UnhandledFailureMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(UnhandledFailureMiddleware { service }))
    }
}

/// Service wrapper produced by [`UnhandledFailure`].
pub struct UnhandledFailureMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for UnhandledFailureMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().to_string();
        let path = req.path().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let failure = res
                        .response()
                        .error()
                        .filter(|_| res.status().is_server_error())
                        .map(ToString::to_string);

                    match failure {
                        Some(err) => {
                            log::error!("Request {method}: {path} failed: {err}");
                            let (req, _) = res.into_parts();
                            Ok(ServiceResponse::new(req, generic_failure()))
                        }
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Err(err) => {
                    log::error!("Request {method}: {path} failed: {err}");
                    // Request is owned by the inner service at this point.
                    Err(InternalError::from_response(
                        "unhandled failure",
                        HttpResponse::InternalServerError().finish(),
                    )
                    .into())
                }
            }
        })
    }
}

fn generic_failure<B>() -> HttpResponse<EitherBody<B>> {
    HttpResponse::InternalServerError()
        .finish()
        .map_into_right_body()
}
