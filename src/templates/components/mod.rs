use maud::{html, Markup};

use crate::domain::{MovementExtra, MovementRecord, StatusLabel};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn notice(message: &str) -> Markup {
    html! {
        p class="notice" role="status" { (message) }
    }
}

pub fn search_form(value: Option<&str>) -> Markup {
    html! {
        form method="post" action="/search" class="search" {
            label for="ot" { "Work order (OT)" }
            " "
            input
                type="text"
                id="ot"
                name="ot"
                inputmode="numeric"
                placeholder="e.g. 1001"
                value=[value]
                required;
            " "
            button type="submit" { "Search" }
        }
    }
}

pub fn status_badge(status: StatusLabel) -> Markup {
    let (class, icon) = match status {
        StatusLabel::Delivered => ("badge badge-delivered", "📦"),
        StatusLabel::ShippedOut => ("badge badge-shipped", "🚚"),
        StatusLabel::Available => ("badge badge-available", "🏠"),
        StatusLabel::NoRecords => ("badge badge-none", "⚠️"),
    };

    html! {
        span class=(class) { (icon) " " (status.as_str()) }
    }
}

/// One entry of a serial's movement history.
pub fn movement_item(movement: &MovementRecord) -> Markup {
    html! {
        li {
            strong { (movement.kind().as_str()) }
            " · " (movement.date_label())
            " · " (movement.sap_code)
            " · " (movement.description)
            @match &movement.extra {
                MovementExtra::Delivery { id_number, technician, remarks } => {
                    br;
                    "ID number: " (or_na(id_number))
                    " · Technician: " (or_na(technician))
                    " · Remarks: " (or_na(remarks))
                }
                MovementExtra::Outbound { remarks, contractor_sequence } => {
                    br;
                    "Remarks: " (or_na(remarks))
                    " · Contractor sequence: " (or_na(contractor_sequence))
                }
                MovementExtra::Inbound | MovementExtra::Return => {}
            }
        }
    }
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}
