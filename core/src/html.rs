use ego_tree::NodeRef;
use scraper::node::{Element, Node};
use scraper::Html;

/// Indexable text pulled out of an HTML document.
#[derive(Debug, Default)]
pub struct Extracted {
    /// First `<title>` text, trimmed; empty when the document has none.
    pub title: String,
    /// Newline-separated text chunks in document order: element text,
    /// meta description/keywords, image alt text, noscript fallback.
    pub content: String,
}

/// Extract the title and indexable content from an HTML document.
/// html5ever recovers from malformed markup, so this never fails.
pub fn extract(html: &str) -> Extracted {
    let doc = Html::parse_document(html);
    let mut walker = Walker::default();
    walker.walk(doc.tree.root());
    Extracted {
        title: walker.title.unwrap_or_default(),
        content: walker.content,
    }
}

#[derive(Default)]
struct Walker {
    title: Option<String>,
    content: String,
}

impl Walker {
    // Depth-first over the parsed tree with an explicit stack, so nesting
    // depth of the input cannot grow the call stack.
    fn walk(&mut self, root: NodeRef<'_, Node>) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            match node.value() {
                Node::Document | Node::Fragment => push_children(&mut stack, node),
                Node::Text(t) => self.push_line(&t.text),
                Node::Element(el) => match el.name() {
                    "script" | "style" => {} // subtree skipped entirely
                    "title" => self.take_title(node),
                    "meta" => self.take_meta(&el),
                    "img" => {
                        if let Some(alt) = el.attr("alt") {
                            self.push_line(alt);
                        }
                    }
                    "noscript" => self.walk_noscript(node, &mut stack),
                    _ => push_children(&mut stack, node),
                },
                _ => {} // comments, doctypes, processing instructions
            }
        }
    }

    // Depending on the parser's scripting mode, noscript fallback arrives
    // either as raw markup text (re-parse it as a fragment) or as already
    // parsed child elements (walk them in place).
    fn walk_noscript<'a>(&mut self, node: NodeRef<'a, Node>, stack: &mut Vec<NodeRef<'a, Node>>) {
        let mut raw = String::new();
        for child in node.children() {
            if let Node::Text(t) = child.value() {
                raw.push_str(&t.text);
            }
        }
        if raw.trim().is_empty() {
            push_children(stack, node);
        } else {
            let fragment = Html::parse_fragment(&raw);
            self.walk(fragment.tree.root());
        }
    }

    fn take_title(&mut self, node: NodeRef<'_, Node>) {
        // First occurrence wins; title text never reaches `content`.
        if self.title.is_some() {
            return;
        }
        if let Some(child) = node.first_child() {
            if let Node::Text(t) = child.value() {
                self.title = Some(t.text.trim().to_string());
            }
        }
    }

    fn take_meta(&mut self, el: &Element) {
        let indexable = el
            .attr("name")
            .is_some_and(|n| n.eq_ignore_ascii_case("keywords") || n.eq_ignore_ascii_case("description"));
        if !indexable {
            return;
        }
        if let Some(content) = el.attr("content") {
            self.push_line(content);
        }
    }

    fn push_line(&mut self, s: &str) {
        self.content.push_str(s);
        self.content.push('\n');
    }
}

// Children go on the stack last-first so they pop in document order.
fn push_children<'a>(stack: &mut Vec<NodeRef<'a, Node>>, node: NodeRef<'a, Node>) {
    let start = stack.len();
    stack.extend(node.children());
    stack[start..].reverse();
}
