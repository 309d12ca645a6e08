use maud::{html, Markup, Render, DOCTYPE};

use crate::{
    domain::models::{Student, STUDENT_COLUMNS},
    services::errors::ServiceError,
};

/// Page returned by `/send/:email` and `/test`.
pub fn send_page(data: impl Render) -> Markup {
    layout("Send", data)
}

/// Page returned by the backend diagnostics endpoints.
pub fn test_page(data: impl Render) -> Markup {
    layout("Test page", data)
}

pub fn error_page(err: &ServiceError) -> Markup {
    layout(
        "Error",
        html! {
            span class="error" data-code=(err.code()) { (err.to_string()) }
        },
    )
}

/// Raw rows of the `student` table, one table row per record.
pub struct StudentRows<'a>(pub &'a [Student]);

impl Render for StudentRows<'_> {
    fn render(&self) -> Markup {
        html! {
            table {
                thead {
                    tr {
                        @for column in STUDENT_COLUMNS {
                            th { (column) }
                        }
                    }
                }
                tbody {
                    @for student in self.0 {
                        tr {
                            @for value in student.as_row() {
                                td { (value) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn layout(title: &str, data: impl Render) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8" {}
                title { (title) }
            }
            body {
                div id="data" { (data) }
            }
        }
    }
}
