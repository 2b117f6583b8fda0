//! Formatted preview of rendered markdown
//!
//! `render` produces a small, fixed HTML vocabulary: `h1`-`h3`, `strong`,
//! `em`, `br`, `ul`/`li`, `pre`/`code`, `code`, `a href` and `img src alt`.
//! This module reads that vocabulary back into blocks of styled spans and
//! draws them with egui widgets. Anything that is not one of those tags is
//! shown as literal text, so `<3` stays `<3`.
//!
//! # Example
//! ```ignore
//! let blocks = parse_preview(session.rendered_html());
//! let response = PreviewWidget::new(&blocks).font_size(18.0).show(ui);
//! ```

use crate::config::EditorFont;
use crate::fonts;
use eframe::egui::{self, FontId, RichText, Ui};
use regex::Regex;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Preview Model
// ─────────────────────────────────────────────────────────────────────────────

/// Inline formatting in effect for a run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
    /// Link target, when the text sits inside `<a href>`
    pub link: Option<String>,
}

/// A piece of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text { text: String, style: SpanStyle },
    Image { src: String, alt: String },
}

/// A block of the preview, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    /// One `<br>`-terminated line; empty for a blank line
    Line(Vec<Inline>),
    List(Vec<Vec<Inline>>),
    CodeBlock(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokenizer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Open(&'a str),
    Close(&'a str),
    LinkOpen(&'a str),
    Image { src: &'a str, alt: &'a str },
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"<(?P<close>/?)(?P<name>h[123]|strong|em|br|ul|li|pre|code|a)>|<a href="(?P<href>[^"]*)">|<img src="(?P<src>[^"]*)" alt="(?P<alt>[^"]*)">"#,
        )
        .expect("invalid preview tag pattern")
    })
}

fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in tag_pattern().captures_iter(html) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            tokens.push(Token::Text(&html[last..whole.start()]));
        }
        last = whole.end();

        if let Some(name) = caps.name("name") {
            let is_close = caps.name("close").is_some_and(|c| !c.as_str().is_empty());
            if is_close {
                tokens.push(Token::Close(name.as_str()));
            } else {
                tokens.push(Token::Open(name.as_str()));
            }
        } else if let Some(href) = caps.name("href") {
            tokens.push(Token::LinkOpen(href.as_str()));
        } else if let (Some(src), Some(alt)) = (caps.name("src"), caps.name("alt")) {
            tokens.push(Token::Image {
                src: src.as_str(),
                alt: alt.as_str(),
            });
        }
    }

    if last < html.len() {
        tokens.push(Token::Text(&html[last..]));
    }
    tokens
}

// ─────────────────────────────────────────────────────────────────────────────
// Block Builder
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Builder {
    blocks: Vec<Block>,
    /// Inline content of the current line, heading or list item
    line: Vec<Inline>,
    strong: u32,
    emphasis: u32,
    code: u32,
    link: Option<String>,
    heading: Option<u8>,
    list: Option<Vec<Vec<Inline>>>,
    in_item: bool,
    code_block: Option<String>,
    /// A block just ended; the `<br>` that follows it ends no line of its own
    after_block: bool,
}

impl Builder {
    fn style(&self) -> SpanStyle {
        SpanStyle {
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            code: self.code > 0,
            link: self.link.clone(),
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        self.line.push(inline);
        self.after_block = false;
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = &mut self.code_block {
            code.push_str(text);
            return;
        }
        let style = self.style();
        self.push_inline(Inline::Text {
            text: text.to_string(),
            style,
        });
    }

    /// End whatever inline run is open before a new block starts.
    fn end_run(&mut self) {
        if self.heading.is_some() {
            self.finish_heading();
        } else {
            self.flush_line();
        }
    }

    fn flush_line(&mut self) {
        if !self.line.is_empty() {
            let line = std::mem::take(&mut self.line);
            self.blocks.push(Block::Line(line));
        }
    }

    fn line_break(&mut self) {
        if let Some(code) = &mut self.code_block {
            code.push('\n');
            return;
        }
        if self.list.is_some() && !self.in_item {
            return;
        }
        if self.line.is_empty() && self.after_block {
            self.after_block = false;
            return;
        }
        let line = std::mem::take(&mut self.line);
        self.blocks.push(Block::Line(line));
        self.after_block = false;
    }

    fn finish_item(&mut self) {
        if !self.in_item {
            return;
        }
        self.in_item = false;
        let item = std::mem::take(&mut self.line);
        self.list.get_or_insert_with(Vec::new).push(item);
    }

    fn finish_list(&mut self) {
        self.finish_item();
        if let Some(items) = self.list.take() {
            self.blocks.push(Block::List(items));
            self.after_block = true;
        }
    }

    fn finish_heading(&mut self) {
        if let Some(level) = self.heading.take() {
            let content = std::mem::take(&mut self.line);
            self.blocks.push(Block::Heading { level, content });
            self.after_block = true;
        }
    }

    fn finish_code_block(&mut self) {
        if let Some(code) = self.code_block.take() {
            self.blocks
                .push(Block::CodeBlock(code.trim_matches('\n').to_string()));
            self.after_block = true;
        }
    }

    fn open(&mut self, name: &str) {
        if self.code_block.is_some() && name != "br" {
            return;
        }
        match name {
            "br" => self.line_break(),
            "h1" | "h2" | "h3" => {
                self.end_run();
                self.heading = name[1..].parse().ok();
            }
            "strong" => self.strong += 1,
            "em" => self.emphasis += 1,
            "code" => self.code += 1,
            "a" => self.link = Some(String::new()),
            "ul" => {
                self.end_run();
                self.list.get_or_insert_with(Vec::new);
            }
            "li" => {
                if self.list.is_none() {
                    self.end_run();
                    self.list = Some(Vec::new());
                }
                self.finish_item();
                self.in_item = true;
            }
            "pre" => {
                self.end_run();
                self.code_block = Some(String::new());
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        if self.code_block.is_some() && name != "pre" {
            return;
        }
        match name {
            "h1" | "h2" | "h3" => self.finish_heading(),
            "strong" => self.strong = self.strong.saturating_sub(1),
            "em" => self.emphasis = self.emphasis.saturating_sub(1),
            "code" => self.code = self.code.saturating_sub(1),
            "a" => self.link = None,
            "ul" => self.finish_list(),
            "li" => self.finish_item(),
            "pre" => self.finish_code_block(),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.finish_code_block();
        self.finish_heading();
        if self.list.is_some() {
            self.finish_list();
        } else {
            self.flush_line();
        }
        self.blocks
    }
}

/// Read rendered preview HTML back into blocks of styled spans.
///
/// Unclosed tags are closed at the end of the input.
pub fn parse_preview(html: &str) -> Vec<Block> {
    let mut builder = Builder::default();
    for token in tokenize(html) {
        match token {
            Token::Text(text) => builder.text(text),
            Token::Open(name) => builder.open(name),
            Token::Close(name) => builder.close(name),
            Token::LinkOpen(href) => builder.link = Some(href.to_string()),
            Token::Image { src, alt } => {
                if let Some(code) = &mut builder.code_block {
                    code.push_str(alt);
                } else {
                    builder.push_inline(Inline::Image {
                        src: src.to_string(),
                        alt: alt.to_string(),
                    });
                }
            }
        }
    }
    builder.finish()
}

/// Font size of a heading relative to body text.
fn heading_scale(level: u8) -> f32 {
    match level {
        1 => 1.8,
        2 => 1.5,
        _ => 1.3,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preview Widget
// ─────────────────────────────────────────────────────────────────────────────

/// Draws parsed preview blocks. The whole preview is one click target.
pub struct PreviewWidget<'a> {
    blocks: &'a [Block],
    font: EditorFont,
    font_size: f32,
}

impl<'a> PreviewWidget<'a> {
    pub fn new(blocks: &'a [Block]) -> Self {
        Self {
            blocks,
            font: EditorFont::default(),
            font_size: 18.0,
        }
    }

    #[must_use]
    pub fn font(mut self, font: EditorFont) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Show the preview. The returned response senses clicks.
    pub fn show(self, ui: &mut Ui) -> egui::Response {
        let response = ui
            .vertical(|ui| {
                // Labels must not swallow the click that returns to editing
                ui.style_mut().interaction.selectable_labels = false;
                ui.set_min_width(ui.available_width());
                for block in self.blocks {
                    self.show_block(ui, block);
                }
            })
            .response;
        response.interact(egui::Sense::click())
    }

    fn show_block(&self, ui: &mut Ui, block: &Block) {
        match block {
            Block::Heading { level, content } => {
                ui.add_space(if *level == 1 { 8.0 } else { 4.0 });
                let size = self.font_size * heading_scale(*level);
                self.show_inlines(ui, content, size, true);
            }
            Block::Line(content) if content.is_empty() => {
                ui.add_space(self.font_size);
            }
            Block::Line(content) => {
                self.show_inlines(ui, content, self.font_size, false);
            }
            Block::List(items) => {
                for item in items {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        ui.add_space(8.0);
                        ui.label(RichText::new("•  ").size(self.font_size));
                        for inline in item {
                            self.show_inline(ui, inline, self.font_size, false);
                        }
                    });
                }
            }
            Block::CodeBlock(code) => {
                egui::Frame::none()
                    .fill(ui.visuals().code_bg_color)
                    .inner_margin(egui::Margin::same(8.0))
                    .rounding(4.0)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(
                            RichText::new(code).font(FontId::monospace(self.font_size * 0.9)),
                        );
                    });
            }
        }
    }

    fn show_inlines(&self, ui: &mut Ui, content: &[Inline], size: f32, strong: bool) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for inline in content {
                self.show_inline(ui, inline, size, strong);
            }
        });
    }

    fn show_inline(&self, ui: &mut Ui, inline: &Inline, size: f32, strong: bool) {
        match inline {
            Inline::Text { text, style } => {
                let rich = self.styled_text(ui, text, style, size, strong);
                ui.label(rich);
            }
            Inline::Image { src, alt } => {
                ui.label(
                    RichText::new(format!("🖼 {}", alt))
                        .size(size)
                        .italics()
                        .weak(),
                )
                .on_hover_text(src);
            }
        }
    }

    fn styled_text(
        &self,
        ui: &Ui,
        text: &str,
        style: &SpanStyle,
        size: f32,
        strong: bool,
    ) -> RichText {
        if style.code {
            return RichText::new(text)
                .font(FontId::monospace(size * 0.9))
                .background_color(ui.visuals().code_bg_color);
        }

        let mut rich = RichText::new(text).font(fonts::editor_font_id(self.font, size));
        if strong || style.strong {
            rich = rich.strong();
        }
        if style.emphasis {
            rich = rich.italics();
        }
        if style.link.is_some() {
            rich = rich.color(ui.visuals().hyperlink_color).underline();
        }
        rich
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render;

    fn plain(text: &str) -> Inline {
        Inline::Text {
            text: text.to_string(),
            style: SpanStyle::default(),
        }
    }

    fn styled(text: &str, style: SpanStyle) -> Inline {
        Inline::Text {
            text: text.to_string(),
            style,
        }
    }

    fn preview(markdown: &str) -> Vec<Block> {
        parse_preview(&render(markdown))
    }

    #[test]
    fn test_empty_preview() {
        assert!(preview("").is_empty());
    }

    #[test]
    fn test_plain_text_with_angle_bracket() {
        assert_eq!(
            preview("Add Your Markdown here <3"),
            vec![Block::Line(vec![plain("Add Your Markdown here <3")])]
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            preview("# One\n## Two\n### Three"),
            vec![
                Block::Heading {
                    level: 1,
                    content: vec![plain("One")]
                },
                Block::Heading {
                    level: 2,
                    content: vec![plain("Two")]
                },
                Block::Heading {
                    level: 3,
                    content: vec![plain("Three")]
                },
            ]
        );
    }

    #[test]
    fn test_lines_and_blank_line() {
        assert_eq!(
            preview("a\n\nb"),
            vec![
                Block::Line(vec![plain("a")]),
                Block::Line(vec![]),
                Block::Line(vec![plain("b")]),
            ]
        );
    }

    #[test]
    fn test_heading_then_text_has_no_blank_line() {
        assert_eq!(
            preview("# T\nbody"),
            vec![
                Block::Heading {
                    level: 1,
                    content: vec![plain("T")]
                },
                Block::Line(vec![plain("body")]),
            ]
        );
    }

    #[test]
    fn test_list_items() {
        assert_eq!(
            preview("Intro\n- one\n- **two**"),
            vec![
                Block::Line(vec![plain("Intro")]),
                Block::List(vec![
                    vec![plain("one")],
                    vec![styled(
                        "two",
                        SpanStyle {
                            strong: true,
                            ..SpanStyle::default()
                        }
                    )],
                ]),
            ]
        );
    }

    #[test]
    fn test_inline_styles() {
        let blocks = preview("**b** *i* `c`");
        let strong = SpanStyle {
            strong: true,
            ..SpanStyle::default()
        };
        let emphasis = SpanStyle {
            emphasis: true,
            ..SpanStyle::default()
        };
        let code = SpanStyle {
            code: true,
            ..SpanStyle::default()
        };
        assert_eq!(
            blocks,
            vec![Block::Line(vec![
                styled("b", strong),
                plain(" "),
                styled("i", emphasis),
                plain(" "),
                styled("c", code),
            ])]
        );
    }

    #[test]
    fn test_code_block_keeps_line_breaks() {
        assert_eq!(
            preview("```\nfn main() {}\nlet x;\n```"),
            vec![Block::CodeBlock("fn main() {}\nlet x;".to_string())]
        );
    }

    #[test]
    fn test_link_and_image() {
        let link = SpanStyle {
            link: Some("https://example.com".to_string()),
            ..SpanStyle::default()
        };
        assert_eq!(
            preview("[docs](https://example.com) ![pic](p.png)"),
            vec![Block::Line(vec![
                styled("docs", link),
                plain(" "),
                Inline::Image {
                    src: "p.png".to_string(),
                    alt: "pic".to_string()
                },
            ])]
        );
    }

    #[test]
    fn test_unclosed_tags_are_closed_at_end() {
        assert_eq!(
            parse_preview("<h2>open<ul><li>x"),
            vec![
                Block::Heading {
                    level: 2,
                    content: vec![plain("open")]
                },
                Block::List(vec![vec![plain("x")]]),
            ]
        );
    }

    #[test]
    fn test_unknown_tags_are_literal() {
        assert_eq!(
            parse_preview("<b>x</b>"),
            vec![Block::Line(vec![plain("<b>x</b>")])]
        );
    }

    #[test]
    fn test_heading_scale() {
        assert!(heading_scale(1) > heading_scale(2));
        assert!(heading_scale(2) > heading_scale(3));
    }

    #[test]
    fn test_show_preview_without_input() {
        let ctx = egui::Context::default();
        let blocks = preview("# T\n- a\n```x```\n[l](u)");
        let mut clicked = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                clicked = PreviewWidget::new(&blocks).show(ui).clicked();
            });
        });
        assert!(!clicked);
    }
}
