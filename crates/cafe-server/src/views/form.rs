//! New-cafe submission form

use super::{escape, layout};
use cafe_core::{CafeForm, Column, ColumnKind, FieldErrors, Seating, CAFE_COLUMNS};

fn render_errors(errors: &FieldErrors, field: &str) -> String {
    errors
        .for_field(field)
        .into_iter()
        .map(|message| format!(r#"<div class="invalid-feedback">{}</div>"#, escape(message)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_field(column: &Column, form: &CafeForm, errors: &FieldErrors) -> String {
    let name = column.name;
    let label = escape(column.label);
    let invalid = if errors.contains(name) { " is-invalid" } else { "" };
    let required = if column.required { " required" } else { "" };

    let control = match column.kind {
        ColumnKind::Boolean => {
            let checked = if form.is_checked(name) { " checked" } else { "" };
            return format!(
                r#"<div class="form-check">
<input type="checkbox" class="form-check-input{invalid}" id="{name}" name="{name}" value="y"{checked}>
<label class="form-check-label" for="{name}">{label}</label>
{errors}
</div>"#,
                errors = render_errors(errors, name),
            );
        }
        ColumnKind::Choice => {
            let current = form.text(name);
            let options: String = Seating::ALL
                .iter()
                .map(|seating| {
                    let value = escape(seating.label());
                    let selected = if seating.label() == current { " selected" } else { "" };
                    format!(r#"<option value="{value}"{selected}>{value}</option>"#)
                })
                .collect();
            format!(
                r#"<select class="form-select{invalid}" id="{name}" name="{name}"{required}>{options}</select>"#
            )
        }
        ColumnKind::Url => format!(
            r#"<input type="url" class="form-control{invalid}" id="{name}" name="{name}" value="{value}"{required}>"#,
            value = escape(form.text(name)),
        ),
        ColumnKind::Text | ColumnKind::Integer => format!(
            r#"<input type="text" class="form-control{invalid}" id="{name}" name="{name}" value="{value}"{required}>"#,
            value = escape(form.text(name)),
        ),
    };

    format!(
        r#"<div class="mb-3">
<label class="form-label" for="{name}">{label}</label>
{control}
{errors}
</div>"#,
        errors = render_errors(errors, name),
    )
}

/// Render the add form, filled with `form` and annotated with `errors`
pub fn add_page(form: &CafeForm, errors: &FieldErrors) -> String {
    let mut body = String::from("<h1>Add a new cafe into the database</h1>\n");
    if !errors.is_empty() {
        body.push_str(r#"<p class="alert">Please correct the highlighted fields.</p>"#);
        body.push('\n');
    }
    body.push_str(r#"<form method="post" action="/add" novalidate>"#);
    body.push('\n');
    for column in CAFE_COLUMNS.iter().filter(|c| !c.is_identifier()) {
        body.push_str(&render_field(column, form, errors));
        body.push('\n');
    }
    body.push_str(r#"<button type="submit" name="submit" value="Submit">Submit</button>"#);
    body.push_str("\n</form>\n");
    body.push_str(r#"<p><a href="/cafes">See all cafes</a></p>"#);

    layout("Add Cafe", &body)
}
