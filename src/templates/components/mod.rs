use crate::domain::PropertyTable;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

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

/// Header row plus one row per listing. Cells are escaped by maud.
pub fn data_table(table: &PropertyTable) -> Markup {
    html! {
        table class="data" {
            thead {
                tr {
                    @for column in &table.columns {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for cell in row {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}
