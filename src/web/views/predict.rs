//! Live prediction: one sensor reading in, a scored report out.

use maud::html;
use poem::web::{Data, Form, Html};
use poem::{handler, IntoResponse, Response};

use crate::diagnostics::{diagnose, RiskLevel, FALLBACK_HINT};
use crate::model::EfficiencyModel;
use crate::models::SensorReading;
use crate::prelude::*;
use crate::web::partials::{home_button, page};

#[handler]
#[instrument(skip_all)]
pub async fn post(
    Form(reading): Form<SensorReading>,
    Data(model): Data<&Arc<EfficiencyModel>>,
) -> Response {
    let score = model.predict(&reading.to_features());
    let risk = RiskLevel::from_score(score);
    let hints = diagnose(&reading);
    info!(score, ?risk, n_hints = hints.len());

    let markup = page(
        "Prediction",
        html! {
            div.box {
                h2.subtitle."is-4" {
                    "Predicted Efficiency: " strong { (format!("{score:.2}")) "%" }
                }
                progress.progress.(risk.class())
                    value=((score.clamp(0.0, 100.0) as u32))
                    max="100" {
                        (format!("{score:.0}%"))
                    }
                div.notification.(risk.class()).is-light { (risk.message()) }
                h3.subtitle."is-5" { "Diagnostic Suggestion" }
                @if hints.is_empty() {
                    p { (FALLBACK_HINT) }
                } @else {
                    ul {
                        @for hint in &hints {
                            li { (hint) }
                        }
                    }
                }
                div."mt-4" { (home_button()) }
            }
        },
    );
    Html(markup.into_string()).into_response()
}
