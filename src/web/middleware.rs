//! Classifies endpoint errors into client and server failures and logs them,
//! so upload and form parsing problems surface as 4xx instead of 500.

use poem::error::{
    MethodNotAllowedError, NotFoundError, ParseFormError, ParseMultipartError, ParsePathError,
    ParseQueryError,
};
use poem::http::StatusCode;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::prelude::*;

pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

fn is_client_error(error: &poem::Error) -> bool {
    error.is::<ParseQueryError>()
        || error.is::<ParsePathError>()
        || error.is::<ParseFormError>()
        || error.is::<ParseMultipartError>()
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        match self.ep.call(request).await {
            Err(error) if error.is::<NotFoundError>() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(StatusCode::NOT_FOUND.into_response())
            }
            Err(error) if error.is::<MethodNotAllowedError>() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(StatusCode::METHOD_NOT_ALLOWED.into_response())
            }
            Err(error) if is_client_error(&error) => {
                info!(?method, ?uri, "{:#}", error);
                Ok(StatusCode::BAD_REQUEST.into_response())
            }
            Err(error) => {
                error!(?method, ?uri, "{:#}", error);
                Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response())
            }
            result => result,
        }
    }
}
