//! HTML rendering for the item pages
//!
//! Plain string building. Every user-supplied value goes through
//! [`escape`] before it lands in markup.

use std::fmt::Write;

use crate::models::{Item, ItemId};

/// List page contents
pub struct ListView<'a> {
    pub items: &'a [Item],
    /// Current search term, echoed into the search box
    pub search: &'a str,
    pub error: Option<&'a str>,
    /// Create form values to restore after a failed submission
    pub name: &'a str,
    pub description: &'a str,
}

/// Edit page contents
pub struct EditView<'a> {
    pub id: &'a ItemId,
    pub name: &'a str,
    pub description: &'a str,
    pub error: Option<&'a str>,
}

impl<'a> EditView<'a> {
    pub fn for_item(item: &'a Item) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            description: &item.description,
            error: None,
        }
    }
}

/// Escape text for use in element content and quoted attributes.
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body style=\"padding: 20px\">\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn error_banner(out: &mut String, error: Option<&str>) {
    if let Some(message) = error {
        let _ = writeln!(out, "<p class=\"error\" style=\"color: red\">{}</p>", escape(message));
    }
}

pub fn list_page(view: &ListView<'_>) -> String {
    let mut body = String::new();

    body.push_str("<h1>Notes</h1>\n");
    let _ = writeln!(
        body,
        "<form method=\"get\" action=\"/\">\n\
         <input type=\"search\" name=\"q\" placeholder=\"Search items\" value=\"{}\">\n\
         <button type=\"submit\">Search</button>\n</form>",
        escape(view.search)
    );

    error_banner(&mut body, view.error);

    body.push_str("<ul>\n");
    for item in view.items {
        let _ = writeln!(
            body,
            "<li><strong>{name}</strong>: {description} - <a href=\"/items/{id}\">Edit</a>\n\
             <form method=\"post\" action=\"/\" style=\"display: inline\">\
             <input type=\"hidden\" name=\"id\" value=\"{id}\">\
             <button type=\"submit\" name=\"intent\" value=\"delete\">Delete</button>\
             </form></li>",
            name = escape(&item.name),
            description = escape(&item.description),
            id = item.id,
        );
    }
    body.push_str("</ul>\n");

    let _ = writeln!(
        body,
        "<h2>Add New Notes</h2>\n\
         <form method=\"post\" action=\"/\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Item name\" value=\"{}\" required>\n\
         <input type=\"text\" name=\"description\" placeholder=\"Description (optional)\" value=\"{}\">\n\
         <button type=\"submit\" name=\"intent\" value=\"create\">Send</button>\n</form>",
        escape(view.name),
        escape(view.description)
    );

    layout("Notes", &body)
}

pub fn edit_page(view: &EditView<'_>) -> String {
    let mut body = String::new();

    body.push_str("<h1>Edit Item</h1>\n");
    error_banner(&mut body, view.error);

    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"/items/{id}\">\n\
         <div><label>Name: <input type=\"text\" name=\"name\" value=\"{name}\" required></label></div>\n\
         <div><label>Description: <input type=\"text\" name=\"description\" value=\"{description}\" \
         placeholder=\"Optional description\"></label></div>\n\
         <div><button type=\"submit\" name=\"intent\" value=\"update\">Update</button>\n\
         <button type=\"submit\" name=\"intent\" value=\"delete\">Delete</button></div>\n</form>\n\
         <p><a href=\"/\">Back to list</a></p>",
        id = view.id,
        name = escape(view.name),
        description = escape(view.description),
    );

    layout("Edit Item", &body)
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        "<h1>Not Found</h1>\n<p><a href=\"/\">Back to list</a></p>\n",
    )
}

pub fn error_page() -> String {
    layout(
        "Error",
        "<h1>Something went wrong</h1>\n<p>An internal error occurred.</p>\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn list_page_escapes_item_fields() {
        let items = vec![Item {
            id: ItemId::generate(),
            name: "<script>".into(),
            description: "a & b".into(),
        }];
        let html = list_page(&ListView {
            items: &items,
            search: "\"q\"",
            error: None,
            name: "",
            description: "",
        });

        assert!(html.contains("<strong>&lt;script&gt;</strong>: a &amp; b"));
        assert!(html.contains("value=\"&quot;q&quot;\""));
        assert!(!html.contains("<script>"));
        assert!(html.contains(&format!("/items/{}", items[0].id)));
    }

    #[test]
    fn edit_page_shows_error_and_values() {
        let id = ItemId::generate();
        let html = edit_page(&EditView {
            id: &id,
            name: "",
            description: "kept",
            error: Some("name cannot be empty"),
        });

        assert!(html.contains("name cannot be empty"));
        assert!(html.contains("value=\"kept\""));
        assert!(html.contains(&format!("action=\"/items/{}\"", id)));
    }
}
