//! Markdown to HTML rendering
//!
//! The renderer is a fixed, ordered list of rewrite stages. Each stage is a
//! pure `&str -> String` function that scans the output of the stage before
//! it, never the original text. Later stages depend on the markup produced by
//! earlier ones (list merging only works after line breaks became `<br>`), so
//! the order of [`STAGES`] is part of the rendering contract.
//!
//! This is deliberately not a CommonMark parser. Unbalanced or nested markers
//! produce whatever the mechanical rewrites produce.
//!
//! # Example
//! ```ignore
//! use crate::markdown::render;
//!
//! assert_eq!(render("# Title"), "<h1>Title</h1>");
//! assert_eq!(render("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
//! ```

use regex::{Captures, Regex};
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Stage Table
// ─────────────────────────────────────────────────────────────────────────────

/// A single named rewrite step of the rendering pipeline.
#[derive(Clone, Copy)]
pub struct Stage {
    /// Stable name, used in logs and to run a stage on its own.
    pub name: &'static str,
    /// The rewrite itself.
    pub apply: fn(&str) -> String,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

/// The rendering pipeline, in execution order.
pub const STAGES: &[Stage] = &[
    Stage { name: "heading1", apply: heading1 },
    Stage { name: "heading2", apply: heading2 },
    Stage { name: "heading3", apply: heading3 },
    Stage { name: "bold", apply: bold },
    Stage { name: "italic", apply: italic },
    Stage { name: "line_breaks", apply: line_breaks },
    Stage { name: "list_items", apply: list_items },
    Stage { name: "merge_list_items", apply: merge_list_items },
    Stage { name: "wrap_lists", apply: wrap_lists },
    Stage { name: "merge_lists", apply: merge_lists },
    Stage { name: "code_blocks", apply: code_blocks },
    Stage { name: "inline_code", apply: inline_code },
    Stage { name: "links", apply: links },
    Stage { name: "images", apply: images },
];

/// Render markdown text to an HTML fragment.
///
/// Total over all inputs: every string produces some HTML, and the empty
/// string produces the empty string.
pub fn render(text: &str) -> String {
    STAGES
        .iter()
        .fold(text.to_string(), |html, stage| (stage.apply)(&html))
}

/// Look up a stage by name.
#[allow(dead_code)]
pub fn stage(name: &str) -> Option<&'static Stage> {
    STAGES.iter().find(|s| s.name == name)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compiled Patterns
// ─────────────────────────────────────────────────────────────────────────────

/// Compile a pattern once per process. All patterns here are literals, so a
/// compile failure is a programming error caught by the tests below.
macro_rules! pattern {
    ($re:expr) => {{
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new($re).expect("invalid render pattern"))
    }};
}

// ─────────────────────────────────────────────────────────────────────────────
// Block Stages
// ─────────────────────────────────────────────────────────────────────────────

fn heading1(text: &str) -> String {
    pattern!(r"(?m)^# (.*)$")
        .replace_all(text, "<h1>$1</h1>")
        .into_owned()
}

fn heading2(text: &str) -> String {
    pattern!(r"(?m)^## (.*)$")
        .replace_all(text, "<h2>$1</h2>")
        .into_owned()
}

fn heading3(text: &str) -> String {
    pattern!(r"(?m)^### (.*)$")
        .replace_all(text, "<h3>$1</h3>")
        .into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Emphasis Stages
// ─────────────────────────────────────────────────────────────────────────────

fn bold(text: &str) -> String {
    pattern!(r"\*\*(.*?)\*\*")
        .replace_all(text, "<strong>$1</strong>")
        .into_owned()
}

// Runs after `bold`, so `**` pairs are already consumed.
fn italic(text: &str) -> String {
    pattern!(r"\*(.*?)\*")
        .replace_all(text, "<em>$1</em>")
        .into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Line and List Stages
// ─────────────────────────────────────────────────────────────────────────────

fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Wrap every line that starts with `- ` in `<li>`.
///
/// Newlines are gone by now, so a "line" is the text between `<br>` markers.
fn list_items(text: &str) -> String {
    text.split("<br>")
        .map(|line| match line.strip_prefix("- ") {
            Some(item) => format!("<li>{}</li>", item),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

fn merge_list_items(text: &str) -> String {
    text.replace("</li><br><li>", "</li><li>")
}

/// Wrap each run of adjacent list items in a single `<ul>`.
fn wrap_lists(text: &str) -> String {
    pattern!(r"(?:<li>.*?</li>)+")
        .replace_all(text, "<ul>$0</ul>")
        .into_owned()
}

fn merge_lists(text: &str) -> String {
    text.replace("</ul><br><ul>", "</ul><ul>")
}

// ─────────────────────────────────────────────────────────────────────────────
// Code Stages
// ─────────────────────────────────────────────────────────────────────────────

// Runs after `line_breaks`, so fenced content carries `<br>` instead of
// newlines and any list syntax inside it is already rewritten.
fn code_blocks(text: &str) -> String {
    pattern!(r"(?s)```(.*?)```")
        .replace_all(text, "<pre><code>$1</code></pre>")
        .into_owned()
}

fn inline_code(text: &str) -> String {
    pattern!(r"`([^`]+)`")
        .replace_all(text, "<code>$1</code>")
        .into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Link Stages
// ─────────────────────────────────────────────────────────────────────────────

/// Rewrite `[label](url)`, leaving `![alt](url)` for the image stage.
fn links(text: &str) -> String {
    pattern!(r"!?\[([^\]]+)\]\(([^)]+)\)")
        .replace_all(text, |caps: &Captures| {
            if caps[0].starts_with('!') {
                caps[0].to_string()
            } else {
                format!(r#"<a href="{}">{}</a>"#, &caps[2], &caps[1])
            }
        })
        .into_owned()
}

fn images(text: &str) -> String {
    pattern!(r"!\[([^\]]+)\]\(([^)]+)\)")
        .replace_all(text, r#"<img src="$2" alt="$1">"#)
        .into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, text: &str) -> String {
        let stage = stage(name).expect("unknown stage");
        (stage.apply)(text)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pipeline Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_stage_order() {
        let names: Vec<&str> = STAGES.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "heading1",
                "heading2",
                "heading3",
                "bold",
                "italic",
                "line_breaks",
                "list_items",
                "merge_list_items",
                "wrap_lists",
                "merge_lists",
                "code_blocks",
                "inline_code",
                "links",
                "images",
            ]
        );
    }

    #[test]
    fn test_all_patterns_compile() {
        // Every stage runs on input that reaches its pattern.
        for stage in STAGES {
            let _ = (stage.apply)("# a\n## b\n**c** *d* `e` ```f``` [g](h) ![i](j)\n- k");
        }
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(render("Add Your Markdown here <3"), "Add Your Markdown here <3");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Headings
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_heading1() {
        assert_eq!(render("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn test_render_heading2_and_3() {
        assert_eq!(render("## Sub"), "<h2>Sub</h2>");
        assert_eq!(render("### Small"), "<h3>Small</h3>");
    }

    #[test]
    fn test_heading_only_at_line_start() {
        assert_eq!(render("a # b"), "a # b");
    }

    #[test]
    fn test_headings_on_several_lines() {
        assert_eq!(
            render("# One\ntext\n## Two"),
            "<h1>One</h1><br>text<br><h2>Two</h2>"
        );
    }

    #[test]
    fn test_hash_without_space_is_literal() {
        assert_eq!(render("#tag"), "#tag");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Emphasis
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_bold() {
        assert_eq!(render("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn test_render_italic() {
        assert_eq!(render("*it*"), "<em>it</em>");
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(
            render("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_nested_emphasis_is_mechanical() {
        assert_eq!(
            render("**bold *italic* bold**"),
            "<strong>bold <em>italic</em> bold</strong>"
        );
    }

    #[test]
    fn test_unmatched_asterisk_is_literal() {
        assert_eq!(render("trailing *"), "trailing *");
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        assert_eq!(render("*a\nb*"), "*a<br>b*");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Line Breaks and Lists
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(render("a\nb\n\nc"), "a<br>b<br><br>c");
    }

    #[test]
    fn test_adjacent_items_share_one_list() {
        let html = render("- a\n- b");
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn test_separated_lists_stay_separate() {
        assert_eq!(
            render("- a\ntext\n- b"),
            "<ul><li>a</li></ul><br>text<br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_list_after_paragraph() {
        assert_eq!(
            render("Intro\n- one\n- two\n- three"),
            "Intro<br><ul><li>one</li><li>two</li><li>three</li></ul>"
        );
    }

    #[test]
    fn test_list_item_with_bold() {
        assert_eq!(
            render("- **x**"),
            "<ul><li><strong>x</strong></li></ul>"
        );
    }

    #[test]
    fn test_dash_without_space_is_literal() {
        assert_eq!(render("-x"), "-x");
    }

    #[test]
    fn test_list_items_stage_alone() {
        assert_eq!(
            run("list_items", "- a<br>b<br>- c"),
            "<li>a</li><br>b<br><li>c</li>"
        );
    }

    #[test]
    fn test_merge_lists_stage_alone() {
        assert_eq!(
            run("merge_lists", "<ul><li>a</li></ul><br><ul><li>b</li></ul>"),
            "<ul><li>a</li></ul><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_wrap_lists_stage_alone() {
        assert_eq!(
            run("wrap_lists", "<li>a</li><li>b</li><br>x"),
            "<ul><li>a</li><li>b</li></ul><br>x"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Code
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_inline_code() {
        assert_eq!(render("use `x` here"), "use <code>x</code> here");
    }

    #[test]
    fn test_fenced_code_single_line() {
        assert_eq!(render("```let x;```"), "<pre><code>let x;</code></pre>");
    }

    #[test]
    fn test_fenced_code_spans_breaks() {
        assert_eq!(
            render("```\nfn main() {}\n```"),
            "<pre><code><br>fn main() {}<br></code></pre>"
        );
    }

    #[test]
    fn test_fenced_code_content_is_pre_mangled() {
        // List syntax inside a fence is rewritten before fencing applies.
        assert_eq!(
            render("```\n- a\n```"),
            "<pre><code><br><ul><li>a</li></ul><br></code></pre>"
        );
    }

    #[test]
    fn test_empty_backticks_are_literal() {
        assert_eq!(render("``"), "``");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Links and Images
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_link() {
        assert_eq!(
            render("[Link text](https://example.com)"),
            r#"<a href="https://example.com">Link text</a>"#
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            render("![alt](https://example.com/image.jpg)"),
            r#"<img src="https://example.com/image.jpg" alt="alt">"#
        );
    }

    #[test]
    fn test_link_and_image_on_one_line() {
        assert_eq!(
            render("[a](b) ![c](d)"),
            r#"<a href="b">a</a> <img src="d" alt="c">"#
        );
    }

    #[test]
    fn test_adjacent_links() {
        assert_eq!(
            render("[a](b)[c](d)"),
            r#"<a href="b">a</a><a href="d">c</a>"#
        );
    }

    #[test]
    fn test_empty_link_label_is_literal() {
        assert_eq!(render("[](x)"), "[](x)");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Totality
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_is_total_on_odd_input() {
        let inputs = [
            "*",
            "**",
            "***",
            "`",
            "```",
            "[",
            "](",
            "- ",
            "#",
            "\n\n\n",
            "Привет **мир** 你好 🎉",
            "<li></li><br><li>",
        ];
        for input in inputs {
            let _ = render(input);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let text = "# T\n**b** *i*\n- x\n- y\n`c` [l](u)";
        assert_eq!(render(text), render(text));
    }
}
