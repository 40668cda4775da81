// templates/pages/home.rs

use crate::templates::{card, desktop_layout, notice, search_form};
use maud::{html, Markup};

/// Search page. `message` carries validation and "not found" feedback.
pub fn home_page(message: Option<&str>, last_input: Option<&str>) -> Markup {
    desktop_layout(
        "Search",
        html! {
            h1 { "Equipment status by work order" }

            (card("Find an OT", html! {
                p { "Enter the work order number to see where each shipped serial is now." }
                (search_form(last_input))
            }))

            @if let Some(message) = message {
                (notice(message))
            }
        },
    )
}
