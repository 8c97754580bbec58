//! HTML serialization
//!
//! Keeps the element ids and class names the stylesheet expects:
//! `#updatedAt`, `#lists`, `#error`, `.topic-title`, `.news-list`,
//! `.news-item`, `.meta`, `.hidden` and `.disabled`.

use super::nodes::{Anchor, NewsRow, TopicSection};
use super::page::Page;

const SITE_TITLE: &str = "OpenClaw News";

/// Render the full document for a page
pub fn render_document(page: &Page) -> String {
    let mut buf = String::new();

    buf.push_str("<!doctype html>\n");
    buf.push_str("<html lang=\"en\">\n");
    buf.push_str("<head>\n");
    buf.push_str("  <meta charset=\"utf-8\">\n");
    buf.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    buf.push_str(&format!("  <title>{}</title>\n", SITE_TITLE));
    buf.push_str("  <link rel=\"stylesheet\" href=\"styles.css\">\n");
    buf.push_str("</head>\n");
    buf.push_str("<body>\n");

    // Header
    buf.push_str("  <header class=\"site-header\">\n");
    buf.push_str(&format!("    <h1>{}</h1>\n", SITE_TITLE));
    buf.push_str(&format!(
        "    <p id=\"updatedAt\" class=\"updated\">{}</p>\n",
        escape(page.updated_at())
    ));
    buf.push_str("  </header>\n");

    buf.push_str("  <main>\n");

    // Error banner
    let banner_class = if page.error_visible() {
        "error"
    } else {
        "error hidden"
    };
    buf.push_str(&format!(
        "    <p id=\"error\" class=\"{}\" role=\"alert\">{}</p>\n",
        banner_class,
        escape(page.error_text())
    ));

    // Lists
    buf.push_str("    <div id=\"lists\">\n");
    for section in page.sections() {
        buf.push_str(&render_section(section));
    }
    buf.push_str("    </div>\n");

    buf.push_str("  </main>\n");

    buf.push_str("  <footer class=\"site-footer\">\n");
    buf.push_str("    <a href=\"contact.html\">Contact</a>\n");
    buf.push_str("  </footer>\n");

    buf.push_str("</body>\n");
    buf.push_str("</html>\n");

    buf
}

fn render_section(section: &TopicSection) -> String {
    let mut buf = String::new();

    buf.push_str("      <section class=\"topic\">\n");
    buf.push_str(&format!(
        "        <h2 class=\"topic-title\">{}</h2>\n",
        escape(&section.title)
    ));
    buf.push_str("        <ul class=\"news-list\">\n");
    for row in &section.rows {
        buf.push_str(&render_row(row));
    }
    buf.push_str("        </ul>\n");
    buf.push_str("      </section>\n");

    buf
}

fn render_row(row: &NewsRow) -> String {
    match row {
        NewsRow::Placeholder { text } => {
            format!("          <li class=\"news-item\">{}</li>\n", escape(text))
        }
        NewsRow::Story { anchor, meta } => format!(
            "          <li class=\"news-item\">{}<p class=\"meta\">{}</p></li>\n",
            render_anchor(anchor),
            escape(meta)
        ),
    }
}

fn render_anchor(anchor: &Anchor) -> String {
    let mut attrs = format!("href=\"{}\"", escape(&anchor.href));

    if let Some(target) = anchor.target {
        attrs.push_str(&format!(" target=\"{}\"", target));
    }
    if let Some(rel) = anchor.rel {
        attrs.push_str(&format!(" rel=\"{}\"", rel));
    }
    if anchor.is_disabled() {
        attrs.push_str(" aria-disabled=\"true\"");
    }
    if !anchor.classes.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", anchor.classes.join(" ")));
    }

    format!("<a {}>{}</a>", attrs, escape(&anchor.text))
}

/// Escape text for use in element content and quoted attributes
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
