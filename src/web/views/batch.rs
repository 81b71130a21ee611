//! Batch prediction: CSV upload in, the augmented table plus a download out.

use base64::Engine;
use maud::html;
use poem::http::StatusCode;
use poem::web::{Data, Html, Multipart};
use poem::{handler, IntoResponse, Response};

use crate::batch::{score_csv, ScoredBatch};
use crate::model::EfficiencyModel;
use crate::prelude::*;
use crate::web::partials::{home_button, page};

#[handler]
#[instrument(skip_all)]
pub async fn post(
    mut multipart: Multipart,
    Data(model): Data<&Arc<EfficiencyModel>>,
) -> Result<Response> {
    let mut uploaded = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            uploaded = Some(field.bytes().await?);
        }
    }
    let bytes = match uploaded {
        Some(bytes) => bytes,
        None => return Ok(error_page("No file was uploaded.")),
    };

    match score_csv(model, &bytes) {
        Ok(batch) => {
            info!(n_rows = batch.n_rows(), "batch scored");
            results_page(&batch)
        }
        Err(error) => {
            warn!("{:#}", error);
            Ok(error_page(&error.to_string()))
        }
    }
}

fn results_page(batch: &ScoredBatch) -> Result<Response> {
    let download = format!(
        "data:text/csv;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(batch.to_csv()?),
    );
    let markup = page(
        "Batch Prediction",
        html! {
            div.box {
                div.notification.is-success.is-light { "Predictions generated successfully." }
                div.table-container {
                    table.table.is-hoverable.is-striped.is-fullwidth {
                        thead {
                            tr {
                                @for header in batch.headers() {
                                    th { (header) }
                                }
                            }
                        }
                        tbody {
                            @for (row, score) in batch.rows() {
                                tr {
                                    @for value in row {
                                        td { (value) }
                                    }
                                    td { (format!("{score:.2}")) }
                                }
                            }
                        }
                    }
                }
                div.buttons {
                    a.button.is-link href=(download) download="efficiency_predictions.csv" {
                        "Download Results as CSV"
                    }
                    (home_button())
                }
            }
        },
    );
    Ok(Html(markup.into_string()).into_response())
}

fn error_page(message: &str) -> Response {
    let markup = page(
        "Batch Prediction",
        html! {
            div.box {
                div.notification.is-danger.is-light { (message) }
                (home_button())
            }
        },
    );
    Html(markup.into_string())
        .with_status(StatusCode::UNPROCESSABLE_ENTITY)
        .into_response()
}
