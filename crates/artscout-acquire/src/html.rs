use crate::normalize;
use scraper::{Html, Node};
use std::ops::Deref;

/// Elements whose content is never visible text.
const SKIPPED_TAGS: &[&str] = &["script", "style"];

/// Elements that end a line of visible text.
const BLOCK_TAGS: &[&str] = &[
    "br", "p", "div", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "section", "article",
    "header", "footer", "blockquote", "dt", "dd",
];

/// Reduce an HTML page to its visible text.
///
/// Script and style content is dropped, block elements become line
/// breaks, and the result goes through [`normalize::normalize_text`].
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_visible_text(document.tree.root().id(), &document.tree, &mut raw);
    normalize::normalize_text(&raw)
}

fn collect_visible_text(
    node_id: ego_tree::NodeId,
    tree: &ego_tree::Tree<Node>,
    out: &mut String,
) {
    let Some(node) = tree.get(node_id) else {
        return;
    };

    match node.value() {
        Node::Text(text) => out.push_str(text.deref()),
        Node::Element(elem) => {
            let tag = elem.name();
            if SKIPPED_TAGS.contains(&tag) {
                return;
            }
            for child in node.children() {
                collect_visible_text(child.id(), tree, out);
            }
            if BLOCK_TAGS.contains(&tag) {
                out.push('\n');
            }
        }
        Node::Document | Node::Fragment => {
            for child in node.children() {
                collect_visible_text(child.id(), tree, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_script_and_style() {
        let html = r#"
        <html>
        <head>
            <title>Jane Doe</title>
            <style>body { color: red; }</style>
            <script>var tracking = "secret";</script>
        </head>
        <body>
            <h1>About</h1>
            <p>Jane Doe is a painter based in Berlin.</p>
            <script type="text/javascript">console.log("nope")</script>
        </body>
        </html>
        "#;

        let text = html_to_text(html);

        assert_eq!(text, "Jane Doe About Jane Doe is a painter based in Berlin.");
        assert!(!text.contains("tracking"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_block_elements_separate_words() {
        let html = "<ul><li>MFA Yale</li><li>BFA RISD</li></ul><p>Solo<br>Group</p>";
        assert_eq!(html_to_text(html), "MFA Yale BFA RISD Solo Group");
    }

    #[test]
    fn test_inline_elements_do_not_split() {
        let html = "<p>Represented by <a href=\"/g\">Pace</a> and <em>Gagosian</em>.</p>";
        assert_eq!(html_to_text(html), "Represented by Pace and Gagosian.");
    }

    #[test]
    fn test_comments_ignored() {
        let html = "<p>Visible<!-- hidden --></p>";
        assert_eq!(html_to_text(html), "Visible");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(html_to_text(""), "");
    }
}
