//! Shared page chrome and Bulma form controls.

use maud::{html, Markup, DOCTYPE};

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta charset="UTF-8";
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.3/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
                title { (title) }
            }
            body {
                section.section {
                    div.container {
                        h1.title.has-text-centered { "Smart Energy Optimizer" }
                        p.subtitle.has-text-centered.has-text-grey {
                            "AI tool to assess energy efficiency in telecom infrastructure"
                        }
                        (body)
                    }
                }
                (footer())
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer.footer {
            div.content.has-text-centered {
                p { "Predictions are estimates produced by an offline-trained model." }
            }
        }
    }
}

pub fn home_button() -> Markup {
    html! {
        a.button.is-link.is-light href="/" { "Back to the dashboard" }
    }
}

pub fn number_field(label: &str, name: &str, min: &str, max: &str, step: &str, value: &str) -> Markup {
    html! {
        div.field {
            label.label { (label) }
            div.control {
                input.input type="number" name=(name) min=(min) max=(max) step=(step) value=(value) required;
            }
        }
    }
}

pub fn select_field(label: &str, name: &str, options: &[&str]) -> Markup {
    html! {
        div.field {
            label.label { (label) }
            div.control {
                div.select.is-fullwidth {
                    select name=(name) {
                        @for option in options {
                            option value=(option) { (option) }
                        }
                    }
                }
            }
        }
    }
}
