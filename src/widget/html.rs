// HTML markup for a mounted sidebar
//
// Class names are the styling contract: `expanded` on a chapter item shows
// its section, `active` on a link marks the current page.

use super::Sidebar;
use crate::model::{Entry, EntryId};

pub fn render_html(sidebar: &Sidebar) -> String {
    let mut out = String::from("<ol class=\"chapter\">");
    for &id in sidebar.tree().roots() {
        render_entry(sidebar, id, &mut out);
    }
    out.push_str("</ol>");
    out
}

fn render_entry(sidebar: &Sidebar, id: EntryId, out: &mut String) {
    let Some(entry) = sidebar.tree().get(id) else {
        return;
    };

    out.push_str("<li class=\"chapter-item ");
    if sidebar.is_expanded(id) {
        out.push_str("expanded ");
    }
    if entry.affix {
        out.push_str("affix ");
    }
    out.push_str("\">");

    match &entry.href {
        Some(href) => {
            out.push_str("<a href=\"");
            out.push_str(&escape_html(href));
            out.push('"');
            if sidebar.is_active(id) {
                out.push_str(" class=\"active\"");
            }
            out.push('>');
            push_caption(entry, out);
            out.push_str("</a>");
        }
        None => {
            out.push_str("<div>");
            push_caption(entry, out);
            out.push_str("</div>");
        }
    }
    if sidebar.has_toggle(id) {
        out.push_str("<a class=\"toggle\"><div>\u{2771}</div></a>");
    }
    out.push_str("</li>");

    if entry.is_section() {
        out.push_str("<li><ol class=\"section\">");
        for &child in &entry.children {
            render_entry(sidebar, child, out);
        }
        out.push_str("</ol></li>");
    }
}

fn push_caption(entry: &Entry, out: &mut String) {
    if let Some(number) = &entry.number {
        out.push_str("<strong aria-hidden=\"true\">");
        out.push_str(&escape_html(number));
        out.push_str("</strong> ");
    }
    out.push_str(&escape_html(&entry.label));
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
