//! Wraps rendered component fragments into a complete HTML document for the
//! combined report endpoint. Fragments themselves come straight from the view
//! layer's `to_html()`.

/// Escapes text for safe interpolation into HTML content.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Minimal full-document shell around an already-rendered body fragment.
pub fn page(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"en\">",
            "<head><meta charset=\"utf-8\" />",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />",
            "<title>{title}</title></head>",
            "<body>{body}</body>",
            "</html>"
        ),
        title = escape_text(title),
        body = body,
    )
}
