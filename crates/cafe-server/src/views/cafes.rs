//! Cafe listing table

use super::{escape, layout};
use cafe_core::{column, Cafe, ColumnKind, FieldValue};

/// Columns shown in the table: everything but the surrogate identifier
fn displayed_columns() -> impl Iterator<Item = &'static cafe_core::Column> {
    Cafe::COLUMNS.iter().filter(|c| !c.is_identifier())
}

fn render_cell(name: &str, value: &FieldValue) -> String {
    let kind = column(name).map(|c| c.kind);
    match (kind, value) {
        (_, FieldValue::Bool(flag)) => {
            let mark = if *flag { "&#10004;" } else { "&#10008;" };
            format!(r#"<td title="{}">{}</td>"#, flag, mark)
        }
        (Some(ColumnKind::Url), FieldValue::Text(url)) => {
            let url = escape(url);
            format!(r#"<td><a href="{url}">{url}</a></td>"#)
        }
        (_, other) => format!("<td>{}</td>", escape(&other.to_string())),
    }
}

pub fn cafes_page(cafes: &[Cafe]) -> String {
    let mut body = String::from("<h1>All Cafes</h1>\n<table>\n<thead>\n<tr>");
    for column in displayed_columns() {
        body.push_str(&format!("<th>{}</th>", escape(column.name)));
    }
    body.push_str("</tr>\n</thead>\n<tbody>\n");

    for cafe in cafes {
        body.push_str("<tr>");
        for (name, value) in cafe.to_row() {
            if column(name).is_some_and(|c| c.is_identifier()) {
                continue;
            }
            body.push_str(&render_cell(name, &value));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</tbody>\n</table>\n");

    if cafes.is_empty() {
        body.push_str("<p>No cafes yet.</p>\n");
    }
    body.push_str(r#"<p><a href="/add">Add a new cafe</a></p>"#);

    layout("All Cafes", &body)
}
