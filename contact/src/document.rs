//! Contact page document
//!
//! Just enough HTML handling to rewrite start-tag attributes and replace an
//! element's text. Markup outside the touched tags is left byte-for-byte.
//! Comments and `<script>`/`<style>` bodies are not markup and are never
//! matched.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

/// Start or end tag. Quoted attribute values may contain `>`.
fn tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<(/)?([a-zA-Z][a-zA-Z0-9-]*)((?:\s(?:"[^"]*"|'[^']*'|[^'">])*)?)>"#)
            .expect("tag pattern")
    })
}

/// Comments and raw-text element bodies
fn opaque() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?is)<!--.*?(?:-->|\z)|<script\b[^>]*>(.*?)(?:</script\s*>|\z)|<style\b[^>]*>(.*?)(?:</style\s*>|\z)",
        )
        .expect("opaque span pattern")
    })
}

fn attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([^\s"'=<>/`]+)(?:\s*=\s*("[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#)
            .expect("attribute pattern")
    })
}

/// A tag as written in the document
struct Tag<'a> {
    span: Range<usize>,
    closing: bool,
    name: &'a str,
    attrs: &'a str,
}

impl Tag<'_> {
    fn self_closing(&self) -> bool {
        self.attrs.trim_end().ends_with('/')
    }
}

/// Every tag outside comments and raw-text bodies, in document order
fn scan_tags(html: &str) -> Vec<Tag<'_>> {
    let skipped: Vec<Range<usize>> = opaque()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(0)))
        .map(|m| m.range())
        .collect();

    tag()
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if skipped.iter().any(|span| span.contains(&whole.start())) {
                return None;
            }
            Some(Tag {
                span: whole.range(),
                closing: caps.get(1).is_some(),
                name: caps.get(2)?.as_str(),
                attrs: caps.get(3).map_or("", |m| m.as_str()),
            })
        })
        .collect()
}

/// An attribute as written in a start tag
struct Attr<'a> {
    name: &'a str,
    value: Option<&'a str>,
    raw: &'a str,
}

fn parse_attrs(attrs: &str) -> Vec<Attr<'_>> {
    attribute()
        .captures_iter(attrs)
        .filter_map(|caps| {
            let raw = caps.get(0)?.as_str();
            let name = caps.get(1)?.as_str();
            let value = caps
                .get(2)
                .map(|v| v.as_str().trim_matches(|c| c == '"' || c == '\''));
            Some(Attr { name, value, raw })
        })
        .collect()
}

fn has_attr(attrs: &[Attr<'_>], name: &str) -> bool {
    attrs.iter().any(|a| a.name.eq_ignore_ascii_case(name))
}

/// Escape for a double-quoted attribute or element text
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDocument {
    html: String,
}

impl ContactDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Set `href` on every element carrying `data-contact-link`.
    ///
    /// An existing `href` is replaced; a missing one is added. Returns the
    /// number of elements updated.
    pub fn set_contact_links(&mut self, href: &str) -> usize {
        let mut out = String::with_capacity(self.html.len());
        let mut last = 0;
        let mut updated = 0;

        for tag in scan_tags(&self.html).iter().filter(|t| !t.closing) {
            let attrs = parse_attrs(tag.attrs);
            if !has_attr(&attrs, "data-contact-link") {
                continue;
            }

            let mut rewritten = format!("<{} href=\"{}\"", tag.name, escape(href));
            for attr in attrs.iter().filter(|a| !a.name.eq_ignore_ascii_case("href")) {
                rewritten.push(' ');
                rewritten.push_str(attr.raw);
            }
            if tag.self_closing() {
                rewritten.push_str(" /");
            }
            rewritten.push('>');

            out.push_str(&self.html[last..tag.span.start]);
            out.push_str(&rewritten);
            last = tag.span.end;
            updated += 1;
        }

        out.push_str(&self.html[last..]);
        self.html = out;
        updated
    }

    /// Replace the text content of the element with this `id`.
    ///
    /// Everything between the start tag and its matching end tag goes,
    /// nested elements included. Returns `false`, leaving the document
    /// untouched, when there is no such element or it is never closed.
    pub fn set_text_by_id(&mut self, id: &str, text: &str) -> bool {
        let Some(content) = self.content_by_id(id) else {
            return false;
        };

        self.html.replace_range(content, &escape(text));
        true
    }

    /// Byte range between the start tag with this `id` and its end tag
    fn content_by_id(&self, id: &str) -> Option<Range<usize>> {
        let tags = scan_tags(&self.html);
        let open = tags.iter().position(|t| {
            !t.closing
                && parse_attrs(t.attrs)
                    .iter()
                    .any(|a| a.name.eq_ignore_ascii_case("id") && a.value == Some(id))
        })?;
        let start = &tags[open];

        let mut depth = 1usize;
        for tag in tags[open + 1..]
            .iter()
            .filter(|t| t.name.eq_ignore_ascii_case(start.name))
        {
            if tag.closing {
                depth -= 1;
                if depth == 0 {
                    return Some(start.span.end..tag.span.start);
                }
            } else if !tag.self_closing() {
                depth += 1;
            }
        }

        None
    }
}
