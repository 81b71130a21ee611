//! Home page: the live-prediction form and the batch-upload form.

use itertools::Itertools;
use maud::html;
use poem::web::Html;
use poem::{handler, IntoResponse, Response};

use crate::model::FEATURE_NAMES;
use crate::web::partials::{number_field, page, select_field};

#[handler]
pub async fn get() -> Response {
    let markup = page(
        "Smart Energy Optimizer",
        html! {
            div.columns {
                div.column."is-7" {
                    div.box {
                        h2.title."is-4" { "Live Prediction" }
                        form action="/predict" method="POST" {
                            div.columns {
                                div.column {
                                    (number_field("Temperature (°C)", "temperature", "0", "100", "0.1", "30"))
                                    (number_field("Battery Health (%)", "battery_health", "0", "100", "0.1", "80"))
                                    (number_field("Uptime (Hours)", "uptime", "0", "48", "1", "12"))
                                }
                                div.column {
                                    (number_field("Voltage (V)", "voltage", "0", "300", "0.1", "230"))
                                    (select_field("Site Type", "site_type", &["Ground", "Rooftop"]))
                                }
                                div.column {
                                    (number_field("Power Usage (W)", "power_usage", "0", "5000", "0.1", "1000"))
                                    (select_field("Location Type", "location_type", &["Rural", "Urban"]))
                                }
                            }
                            button.button.is-link type="submit" { "Predict Energy Efficiency" }
                        }
                    }
                }
                div.column {
                    div.box {
                        h2.title."is-4" { "Batch Upload" }
                        p.block {
                            "Upload a CSV file with sensor readings. Required columns: "
                            code { (FEATURE_NAMES.iter().join(", ")) }
                            "."
                        }
                        form action="/batch" method="POST" enctype="multipart/form-data" {
                            div.field {
                                div.control {
                                    input.input type="file" name="file" accept=".csv,text/csv" required;
                                }
                            }
                            button.button.is-link type="submit" { "Predict for All Rows" }
                        }
                    }
                }
            }
        },
    );
    Html(markup.into_string()).into_response()
}
