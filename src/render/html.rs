//! HTML serialization of views.

use std::fmt::Write;

use super::{Cell, Fragment, Table, View};

/// Render a view as an HTML fragment.
pub fn to_html(view: &View) -> String {
    match view {
        View::Json(json) => format!("<pre>{}</pre>", escape(json)),
        View::Table(table) => table_html(table),
    }
}

fn table_html(table: &Table) -> String {
    let mut out = String::from("<table class=\"table mt-4\">\n<thead>\n<tr>");
    for column in &table.columns {
        let _ = write!(out, "<th scope=\"col\">{}</th>", escape(column));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in &row.cells {
            out.push_str("<td>");
            cell_html(&mut out, cell);
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>");
    out
}

fn cell_html(out: &mut String, cell: &Cell) {
    for (i, fragment) in cell.fragments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match fragment {
            Fragment::Text(text) => out.push_str(&escape(text)),
            Fragment::Code { text, title: None } => {
                let _ = write!(out, "<code>{}</code>", escape(text));
            }
            Fragment::Code {
                text,
                title: Some(title),
            } => {
                let _ = write!(
                    out,
                    "<code title=\"{}\">{}</code>",
                    escape(title),
                    escape(text)
                );
            }
        }
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
