//! HTML rendering

pub mod cafes;
pub mod form;

/// Escape text for HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared document shell
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav>
<a href="/">Home</a>
<a href="/cafes">Cafes</a>
<a href="/add">Add a cafe</a>
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

pub fn home_page() -> String {
    layout(
        "Coffee & Wifi",
        r#"<h1>&#9749;&#65039; Coffee &amp; Wifi &#128187;</h1>
<p>Want to work in a cafe but need power and wifi?</p>
<p>You've found the right place! Check out the list of cafes with data on socket availability, wifi strength and coffee quality.</p>
<a href="/cafes">Show Me!</a>"#,
    )
}

pub fn not_found_page() -> String {
    layout(
        "Not found",
        r#"<h1>Page not found</h1>
<p><a href="/">Back to the home page</a></p>"#,
    )
}

/// Generic failure page; details stay in the log
pub fn error_page() -> String {
    layout(
        "Something went wrong",
        r#"<h1>Something went wrong</h1>
<p>The cafe list is unavailable right now. Please try again later.</p>"#,
    )
}
