//! The prediction web application.

use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, EndpointExt, Route, Server};

use crate::model::EfficiencyModel;
use crate::opts::WebOpts;
use crate::prelude::*;
use crate::web::middleware::ErrorMiddleware;

mod middleware;
mod partials;
mod views;

pub async fn run(opts: WebOpts) -> Result {
    // The artifact is loaded once and shared read-only; there is no reloading.
    let model = Arc::new(EfficiencyModel::load(&opts.model)?);
    info!(path = ?opts.model, "model artifact loaded");

    info!(host = opts.host.as_str(), port = opts.port, "listening");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run(create_app(model))
        .await?;
    Ok(())
}

pub fn create_app(model: Arc<EfficiencyModel>) -> impl poem::Endpoint {
    Route::new()
        .at("/", get(views::index::get))
        .at("/predict", post(views::predict::post))
        .at("/batch", post(views::batch::post))
        .data(model)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
}
