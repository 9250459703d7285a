//! Locating the graphic element inside a serialized SVG/XHTML document.
//!
//! A lightweight tag scanner, not an XML parser: it finds `<svg` start tags,
//! reads attributes, and balances nested `<svg>` elements to cut out
//! exactly one element. Markup inside comments or CDATA is not special-cased.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use super::dimensions::RawDimensions;

/// Identifier of the graphic element the exporter targets.
pub const GRAPHIC_ELEMENT_ID: &str = "svg";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const OPEN: &str = "<svg";
const CLOSE: &str = "</svg";

/// One graphic element cut out of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphicElement<'a> {
    /// The element's start tag, `<svg ...>` or `<svg .../>`.
    pub start_tag: &'a str,
    /// The complete element, start tag through matching end tag.
    pub markup: &'a str,
}

impl GraphicElement<'_> {
    /// Read an attribute value from the start tag.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        attribute(self.start_tag, name)
    }

    pub fn dimensions(&self) -> RawDimensions {
        RawDimensions::new(self.attribute("width"), self.attribute("height"))
    }

    /// Standalone markup, with the SVG namespace declared on the root so the
    /// result parses outside its original document.
    pub fn serialize(&self) -> String {
        if self.attribute("xmlns").is_some() {
            return self.markup.to_owned();
        }
        format!("{OPEN} xmlns=\"{SVG_NAMESPACE}\"{}", &self.markup[OPEN.len()..])
    }
}

/// Find the element with `id="svg"`, falling back to the first `<svg>`.
pub fn find_graphic(document: &str) -> Option<GraphicElement<'_>> {
    let tags = start_tags(document);
    let chosen = tags
        .iter()
        .find(|tag| attribute(&document[tag.start..tag.end], "id") == Some(GRAPHIC_ELEMENT_ID))
        .or_else(|| tags.first())?;
    let end = element_end(document, chosen)?;
    Some(GraphicElement { start_tag: &document[chosen.start..chosen.end], markup: &document[chosen.start..end] })
}

#[derive(Clone, Copy, Debug)]
struct StartTag {
    start: usize,
    end: usize,
    self_closing: bool,
}

fn start_tags(document: &str) -> Vec<StartTag> {
    let mut tags = Vec::new();
    let mut from = 0;
    while let Some(tag) = next_start_tag(document, from) {
        from = tag.end;
        tags.push(tag);
    }
    tags
}

/// Next `<svg` start tag at or after `from`, skipping names like `<svgx`.
fn next_start_tag(document: &str, mut from: usize) -> Option<StartTag> {
    loop {
        let start = from + document[from..].find(OPEN)?;
        let name_end = start + OPEN.len();
        let end = name_end + document[name_end..].find('>')? + 1;
        let boundary = document[name_end..].starts_with(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/');
        if boundary {
            let self_closing = document[..end - 1].ends_with('/');
            return Some(StartTag { start, end, self_closing });
        }
        from = name_end;
    }
}

/// Byte offset just past the end tag matching `open`.
fn element_end(document: &str, open: &StartTag) -> Option<usize> {
    if open.self_closing {
        return Some(open.end);
    }
    let mut depth = 1_usize;
    let mut pos = open.end;
    loop {
        let close = pos + document[pos..].find(CLOSE)?;
        match next_start_tag(document, pos) {
            Some(nested) if nested.start < close => {
                if !nested.self_closing {
                    depth += 1;
                }
                pos = nested.end;
            }
            _ => {
                let close_end = close + document[close..].find('>')? + 1;
                depth -= 1;
                if depth == 0 {
                    return Some(close_end);
                }
                pos = close_end;
            }
        }
    }
}

/// Value of attribute `name` in a start tag.
///
/// Walks the tag one attribute at a time so names inside another
/// attribute's quoted value never match. Values may be single-, double- or
/// unquoted.
fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = tag.strip_prefix(OPEN).unwrap_or(tag);
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '/');
        if rest.is_empty() || rest.starts_with('>') {
            return None;
        }
        let name_len = rest
            .find(|c: char| c.is_ascii_whitespace() || matches!(c, '=' | '>' | '/'))
            .unwrap_or(rest.len());
        let (attr, after_name) = rest.split_at(name_len);
        let after_name = after_name.trim_start();
        let Some(after_equals) = after_name.strip_prefix('=') else {
            rest = after_name;
            continue;
        };
        let after_equals = after_equals.trim_start();
        let (value, remaining) = match after_equals.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &after_equals[1..];
                let len = body.find(quote)?;
                (&body[..len], &body[len + 1..])
            }
            _ => {
                let len = after_equals
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .unwrap_or(after_equals.len());
                after_equals.split_at(len)
            }
        };
        if attr == name {
            return Some(value);
        }
        rest = remaining;
    }
}
