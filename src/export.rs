/*!
 * Document export pipeline.
 *
 * One-way transformation from a markdown summary to a downloadable,
 * branded document artifact. The pipeline is pure: markdown in, bytes
 * out, no session state touched. Malformed markdown never fails the
 * export; input that produces no block elements degrades to a single
 * plain-text paragraph.
 */

use anyhow::{anyhow, Result};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{markdown_to_html, parse_document, Arena, Options};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::app_config::ExportConfig;
use crate::errors::ExportError;

/// Kind of artifact produced by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Portrait A4 PDF document
    #[default]
    Pdf,
    /// Self-contained branded HTML page
    Html,
}

impl ExportFormat {
    /// File extension for the artifact, without leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "html" => Ok(Self::Html),
            _ => Err(anyhow!("Invalid export format: {}", s)),
        }
    }
}

/// Derive the artifact filename from the source file name.
///
/// A trailing `.txt` suffix is replaced by `-summary.<ext>`; any other
/// name gets `-summary.<ext>` appended.
pub fn artifact_filename(source_name: &str, format: ExportFormat) -> String {
    let base = source_name.strip_suffix(".txt").unwrap_or(source_name);
    format!("{}-summary.{}", base, format.extension())
}

/// Produce the document artifact bytes for the requested format
pub fn render_document(
    markdown: &str,
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Html => Ok(render_html(markdown, config).into_bytes()),
        ExportFormat::Pdf => render_pdf(markdown, config),
    }
}

/// Convert the markdown summary into a styled, self-contained HTML page.
///
/// The fixed visual wrapper: A4-width page, brand header, title label,
/// rendered body with paragraph spacing normalized to a fixed margin, and
/// a footer disclosing the generating product.
pub fn render_html(markdown: &str, config: &ExportConfig) -> String {
    let body = markdown_to_html(markdown, &Options::default());

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ margin: 0; background: #f3f4f6; font-family: Helvetica, Arial, sans-serif; color: #1f2937; }}
  .page {{ width: 794px; margin: 0 auto; background: #ffffff; padding: 48px 56px; box-sizing: border-box; }}
  .brand {{ font-size: 14px; font-weight: 700; letter-spacing: 1px; text-transform: uppercase; color: #111827; }}
  h1.title {{ font-size: 28px; margin: 12px 0 24px; }}
  .summary p, .summary ul, .summary ol, .summary pre {{ margin: 0 0 12px; }}
  .summary h1, .summary h2, .summary h3 {{ margin: 18px 0 8px; }}
  .footer {{ margin-top: 32px; padding-top: 12px; border-top: 1px solid #e5e7eb; font-size: 11px; color: #6b7280; }}
</style>
</head>
<body>
<div class="page">
  <div class="brand">{brand}</div>
  <h1 class="title">{title}</h1>
  <div class="summary">
{body}
  </div>
  <div class="footer">{footer}</div>
</div>
</body>
</html>
"#,
        brand = html_escape(&config.brand_name),
        title = html_escape(&config.title_label),
        footer = html_escape(&config.footer_text),
        body = body,
    )
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Block-level element extracted from the markdown AST
#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    ListItem { marker: String, text: String },
}

/// Flatten the markdown AST into typesettable blocks.
///
/// Headings, paragraphs, bullet and ordered list items survive; code
/// blocks and block quotes flatten to paragraphs; inline emphasis
/// collapses into plain text.
fn collect_blocks(markdown: &str) -> Vec<Block> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &Options::default());

    let mut blocks = Vec::new();
    for node in root.children() {
        collect_block(node, &mut blocks);
    }

    if blocks.is_empty() {
        let fallback = markdown.trim();
        if !fallback.is_empty() {
            blocks.push(Block::Paragraph(fallback.to_string()));
        }
    }

    blocks
}

fn collect_block<'a>(node: &'a AstNode<'a>, blocks: &mut Vec<Block>) {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => {
            blocks.push(Block::Heading {
                level: heading.level,
                text: collect_text(node),
            });
        },
        NodeValue::Paragraph => {
            let text = collect_text(node);
            if !text.is_empty() {
                blocks.push(Block::Paragraph(text));
            }
        },
        NodeValue::List(list) => {
            let ordered = list.list_type == ListType::Ordered;
            let mut number = list.start;
            for item in node.children() {
                let text = collect_text(item);
                if text.is_empty() {
                    continue;
                }
                let marker = if ordered {
                    let marker = format!("{}.", number);
                    number += 1;
                    marker
                } else {
                    "\u{2022}".to_string()
                };
                blocks.push(Block::ListItem { marker, text });
            }
        },
        NodeValue::CodeBlock(code) => {
            for line in code.literal.lines() {
                if !line.trim().is_empty() {
                    blocks.push(Block::Paragraph(line.to_string()));
                }
            }
        },
        NodeValue::BlockQuote => {
            for child in node.children() {
                collect_block(child, blocks);
            }
        },
        NodeValue::ThematicBreak => {},
        _ => {
            let text = collect_text(node);
            if !text.is_empty() {
                blocks.push(Block::Paragraph(text));
            }
        },
    }
}

/// Collect the plain text beneath a node, inline markup flattened
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    append_text(node, &mut out);
    out.trim().to_string()
}

fn append_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        _ => {
            for child in node.children() {
                append_text(child, out);
            }
        },
    }
}

// A4 portrait geometry, all in millimeters
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;
const TOP_MM: f32 = PAGE_HEIGHT_MM - 20.0;
const BOTTOM_LIMIT_MM: f32 = 24.0;
const FOOTER_MM: f32 = 12.0;

const BODY_SIZE_PT: f32 = 11.0;
const FOOTER_SIZE_PT: f32 = 8.0;
const BRAND_SIZE_PT: f32 = 13.0;
const TITLE_SIZE_PT: f32 = 20.0;

// Approximate Helvetica advance width, in millimeters per point of font size
const CHAR_WIDTH_MM_PER_PT: f32 = 0.176;
// Point-to-millimeter conversion with line spacing baked in
const LINE_HEIGHT_MM_PER_PT: f32 = 0.49;

/// Typeset the markdown summary onto portrait A4 pages.
///
/// Vector text output with built-in Helvetica fonts; long blocks wrap at
/// an estimated character budget and pages break when the body area is
/// exhausted. Every page carries the product footer.
pub fn render_pdf(markdown: &str, config: &ExportConfig) -> Result<Vec<u8>, ExportError> {
    let blocks = collect_blocks(markdown);

    let mut typesetter = Typesetter::new(config)?;
    for block in &blocks {
        match block {
            Block::Heading { level, text } => {
                let size = match level {
                    1 => 17.0,
                    2 => 14.5,
                    3 => 13.0,
                    _ => 12.0,
                };
                typesetter.advance(2.5);
                typesetter.write_wrapped(text, size, true, 0.0)?;
                typesetter.advance(1.5);
            },
            Block::Paragraph(text) => {
                typesetter.write_wrapped(text, BODY_SIZE_PT, false, 0.0)?;
                typesetter.advance(3.0);
            },
            Block::ListItem { marker, text } => {
                typesetter.write_list_item(marker, text)?;
                typesetter.advance(1.2);
            },
        }
    }

    typesetter.finish()
}

/// Cursor-based writer over a growing printpdf document
struct Typesetter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Baseline of the next line, measured from the page bottom
    cursor_mm: f32,
    footer_text: String,
}

impl Typesetter {
    fn new(config: &ExportConfig) -> Result<Self, ExportError> {
        let (doc, page, layer) = PdfDocument::new(
            &config.title_label,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Document(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Document(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut typesetter = Self {
            doc,
            layer,
            regular,
            bold,
            cursor_mm: TOP_MM,
            footer_text: config.footer_text.clone(),
        };

        typesetter.write_footer();
        typesetter.write_line(&config.brand_name.to_uppercase(), BRAND_SIZE_PT, true, 0.0);
        typesetter.advance(4.0);
        typesetter.write_line(&config.title_label, TITLE_SIZE_PT, true, 0.0);
        typesetter.advance(6.0);

        Ok(typesetter)
    }

    fn write_footer(&mut self) {
        self.layer.use_text(
            self.footer_text.clone(),
            FOOTER_SIZE_PT,
            Mm(MARGIN_MM),
            Mm(FOOTER_MM),
            &self.regular,
        );
    }

    fn break_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor_mm = TOP_MM;
        self.write_footer();
    }

    fn ensure_room(&mut self, needed_mm: f32) {
        if self.cursor_mm - needed_mm < BOTTOM_LIMIT_MM {
            self.break_page();
        }
    }

    fn advance(&mut self, gap_mm: f32) {
        self.cursor_mm -= gap_mm;
    }

    fn write_line(&mut self, text: &str, size_pt: f32, bold: bool, indent_mm: f32) {
        let line_height = size_pt * LINE_HEIGHT_MM_PER_PT;
        self.ensure_room(line_height);
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(
            text.to_string(),
            size_pt,
            Mm(MARGIN_MM + indent_mm),
            Mm(self.cursor_mm),
            font,
        );
        self.cursor_mm -= line_height;
    }

    fn write_wrapped(
        &mut self,
        text: &str,
        size_pt: f32,
        bold: bool,
        indent_mm: f32,
    ) -> Result<(), ExportError> {
        let usable_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - indent_mm;
        let max_chars = ((usable_mm / (size_pt * CHAR_WIDTH_MM_PER_PT)) as usize).max(16);
        for line in wrap_text(text, max_chars) {
            self.write_line(&line, size_pt, bold, indent_mm);
        }
        Ok(())
    }

    fn write_list_item(&mut self, marker: &str, text: &str) -> Result<(), ExportError> {
        let usable_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - 8.0;
        let max_chars = ((usable_mm / (BODY_SIZE_PT * CHAR_WIDTH_MM_PER_PT)) as usize).max(16);
        // The marker rides on the first line so an item never splits
        // between marker and text at a page break
        for (index, line) in wrap_text(text, max_chars).into_iter().enumerate() {
            if index == 0 {
                self.write_line(&format!("{} {}", marker, line), BODY_SIZE_PT, false, 2.0);
            } else {
                self.write_line(&line, BODY_SIZE_PT, false, 8.0);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ExportError::Document(e.to_string()))
    }
}

/// Greedy word wrap at a fixed character budget, hard-splitting words
/// longer than the budget
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        // Hard-split very long tokens so they cannot overflow the page
        while word.chars().count() > max_chars {
            let split_at = word
                .char_indices()
                .nth(max_chars)
                .map(|(idx, _)| idx)
                .unwrap_or(word.len());
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word[..split_at].to_string());
            word = &word[split_at..];
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
