// templates/pages/results.rs

use crate::dataset::cells::format_float;
use crate::domain::{OrderReport, SerialStatus};
use crate::templates::components::movement_item;
use crate::templates::{desktop_layout, search_form, status_badge};
use maud::{html, Markup};

pub fn results_page(report: &OrderReport) -> Markup {
    let order = report.order_id.to_string();

    desktop_layout(
        &format!("OT {order}"),
        html! {
            (search_form(Some(&order)))

            h1 { "OT " (order) }
            p {
                (report.statuses.len()) " shipped item(s). "
                a href=(format!("/export?ot={order}")) { "Download as Excel" }
            }

            table {
                thead {
                    tr {
                        th { "Serial" }
                        th { "Last movement" }
                        th { "Date" }
                        th { "Status" }
                        th { "SAP" }
                        th { "Description" }
                        th { "History" }
                    }
                }
                tbody {
                    @for status in &report.statuses {
                        (status_row(status))
                    }
                }
            }
        },
    )
}

fn status_row(status: &SerialStatus) -> Markup {
    html! {
        tr {
            td { (serial_label(status)) }
            td {
                @match status.movement {
                    Some(kind) => { (kind.as_str()) }
                    None => { "No movements" }
                }
            }
            td {
                @match status.event_date {
                    Some(date) => { (date.format("%Y-%m-%d").to_string()) }
                    None => { "-" }
                }
            }
            td { (status_badge(status.status)) }
            td { (status.sap_code) }
            td { (status.description) }
            td {
                @if status.detail.is_empty() {
                    "-"
                } @else {
                    details {
                        summary { (status.detail.len()) " movement(s)" }
                        ul {
                            @for movement in &status.detail {
                                (movement_item(movement))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Items without history also show the shipped quantity, which is all
/// there is for non-serialized material.
pub fn serial_label(status: &SerialStatus) -> String {
    if status.movement.is_some() {
        return status.serial.clone();
    }

    let quantity = status
        .quantity
        .map(format_float)
        .unwrap_or_else(|| "-".to_string());

    if status.serial.is_empty() {
        format!("quantity: {quantity}")
    } else {
        format!("{} (quantity: {quantity})", status.serial)
    }
}
