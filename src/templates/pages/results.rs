use crate::domain::PropertyTable;
use crate::templates::{data_table, desktop_layout};
use maud::{html, Markup};

/// Results view. Its whole contract: the CSV download URL and the
/// already-trimmed table.
pub fn results_page(download_url: &str, table: &PropertyTable) -> Markup {
    desktop_layout(
        "Results",
        html! {
            main class="container wide" {
                h2 { "Property Results" }
                p class="summary" {
                    "Found " strong { (table.len()) } " properties. "
                    a href=(download_url) class="download" { "Download CSV" }
                }
                @if table.is_empty() {
                    p class="empty" { "No properties matched this search." }
                }
                div class="table-scroll" {
                    (data_table(table))
                }
            }
        },
    )
}
