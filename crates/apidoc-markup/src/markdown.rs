//! Markdown backend for page rendering.
//!
//! Produces GitHub Flavored Markdown: pipe tables, fenced code blocks and
//! `> [!NOTE]` alerts for callouts. Cross-references become relative links
//! to sibling `.md` files.

use std::fmt::Write;

use crate::backend::{InlineContext, RenderBackend};

/// Markdown render backend.
pub struct MarkdownBackend;

impl RenderBackend for MarkdownBackend {
    const FILE_EXTENSION: &'static str = ".md";

    fn text(text: &str, bold: bool, italics: bool, ctx: InlineContext, out: &mut String) {
        // Emphasis markers must hug the text, so surrounding spaces stay outside.
        let content = text.trim();
        if content.is_empty() {
            out.push_str(text);
            return;
        }
        let leading = &text[..text.len() - text.trim_start().len()];
        let trailing = &text[text.trim_end().len()..];
        let opens_line = ctx == InlineContext::Block && (out.is_empty() || out.ends_with('\n'));

        out.push_str(leading);
        if bold {
            out.push_str("**");
        }
        if italics {
            out.push('_');
        }
        let escaped = escape_markdown(content, ctx);
        if opens_line && !bold && !italics {
            out.push_str(&escape_block_marker(&escaped));
        } else {
            out.push_str(&escaped);
        }
        if italics {
            out.push('_');
        }
        if bold {
            out.push_str("**");
        }
        out.push_str(trailing);
    }

    fn code_span(code: &str, ctx: InlineContext, out: &mut String) {
        let code = match ctx {
            InlineContext::Block => code.replace('\n', " "),
            InlineContext::TableCell => code.replace('\n', " ").replace('|', "\\|"),
        };
        let fence = if code.contains('`') { "``" } else { "`" };
        let pad = if code.starts_with('`') || code.ends_with('`') {
            " "
        } else {
            ""
        };
        let _ = write!(out, "{fence}{pad}{code}{pad}{fence}");
    }

    fn link(label: &str, href: &str, out: &mut String) {
        let _ = write!(out, "[{label}]({href})");
    }

    fn page_href(page_id: &str) -> String {
        format!("./{page_id}.md")
    }

    fn paragraph(ctx: InlineContext, out: &mut String) {
        match ctx {
            InlineContext::Block => {
                let trimmed = out.trim_end_matches(' ').len();
                out.truncate(trimmed);
                if !out.is_empty() && !out.ends_with("\n\n") {
                    out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
                }
            }
            InlineContext::TableCell => {
                if !out.is_empty() {
                    out.push_str("<br/><br/>");
                }
            }
        }
    }

    fn line_break(ctx: InlineContext, out: &mut String) {
        match ctx {
            InlineContext::Block => out.push_str("  \n"),
            InlineContext::TableCell => out.push_str("<br/>"),
        }
    }

    fn heading(level: u8, text: &str, out: &mut String) {
        let hashes = "#".repeat(usize::from(level.clamp(1, 6)));
        let _ = write!(out, "{hashes} {}\n\n", escape_markdown(text, InlineContext::Block));
    }

    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        let fence = if content.contains("```") { "````" } else { "```" };
        let _ = writeln!(out, "{fence}{}", lang.unwrap_or_default());
        out.push_str(content);
        if !content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(fence);
        out.push_str("\n\n");
    }

    fn note_box(content: &str, out: &mut String) {
        out.push_str("> [!NOTE]\n");
        for line in content.trim().lines() {
            let line = line.trim_end();
            if line.is_empty() {
                out.push_str(">\n");
            } else {
                let _ = writeln!(out, "> {line}");
            }
        }
        out.push('\n');
    }

    fn table(header: &[String], rows: &[Vec<String>], out: &mut String) {
        write_row(header, out);
        let separator: Vec<String> = header.iter().map(|_| "---".to_owned()).collect();
        write_row(&separator, out);
        for row in rows {
            write_row(row, out);
        }
        out.push('\n');
    }
}

fn write_row(cells: &[String], out: &mut String) {
    out.push('|');
    for cell in cells {
        if cell.is_empty() {
            out.push_str("  |");
        } else {
            let _ = write!(out, " {cell} |");
        }
    }
    out.push('\n');
}

/// Escape characters that Markdown would otherwise interpret.
#[must_use]
pub fn escape_markdown(text: &str, ctx: InlineContext) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '*' | '_' | '`' | '[' | ']' | '<' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '|' if ctx == InlineContext::TableCell => escaped.push_str("\\|"),
            '\n' if ctx == InlineContext::TableCell => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape a marker that would turn the start of a line into a block
/// (heading, quote, list item, thematic break or fence).
fn escape_block_marker(text: &str) -> String {
    if text.starts_with(['#', '>', '-', '+', '=', '~']) {
        return format!("\\{text}");
    }
    let digits = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && text[digits..].starts_with(['.', ')']) {
        return format!("{}\\{}", &text[..digits], &text[digits..]);
    }
    text.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{
        PARAGRAPH, TextStyle, create_api_link_from_text, create_code, create_code_box,
        create_heading1, create_note_box_from_text, create_page, create_styled_text_elements,
        create_table, create_table_row, create_text_elements, create_web_link_from_text,
    };
    use crate::renderer::PageRenderer;
    use pretty_assertions::assert_eq;

    fn render(page: &crate::Page) -> String {
        PageRenderer::<MarkdownBackend>::new().render(page)
    }

    #[test]
    fn test_escape_markdown_specials() {
        assert_eq!(
            escape_markdown("a*b_c[d]", InlineContext::Block),
            "a\\*b\\_c\\[d\\]"
        );
    }

    #[test]
    fn test_escape_markdown_pipe_only_in_cells() {
        assert_eq!(escape_markdown("a|b", InlineContext::Block), "a|b");
        assert_eq!(escape_markdown("a|b", InlineContext::TableCell), "a\\|b");
    }

    #[test]
    fn test_text_escapes_marker_at_line_start() {
        let mut out = String::new();
        MarkdownBackend::text("# Not a heading", false, false, InlineContext::Block, &mut out);
        assert_eq!(out, "\\# Not a heading");
    }

    #[test]
    fn test_text_escapes_marker_after_line_break() {
        let mut out = String::from("First line  \n");
        MarkdownBackend::text("1. second", false, false, InlineContext::Block, &mut out);
        MarkdownBackend::line_break(InlineContext::Block, &mut out);
        MarkdownBackend::text("> quoted", false, false, InlineContext::Block, &mut out);
        assert_eq!(out, "First line  \n1\\. second  \n\\> quoted");
    }

    #[test]
    fn test_render_summary_starting_with_hash() {
        let mut page = create_page("Widget class", "demo.widget");
        page.extend_basic(create_text_elements("# Not a heading\n- not a list"));

        assert_eq!(
            render(&page),
            "# Widget class\n\n\\# Not a heading  \n\\- not a list\n"
        );
    }

    #[test]
    fn test_text_keeps_marker_mid_line() {
        let mut out = String::from("Value ");
        MarkdownBackend::text("- 1 # x", false, false, InlineContext::Block, &mut out);
        assert_eq!(out, "Value - 1 # x");
    }

    #[test]
    fn test_text_keeps_marker_in_table_cell() {
        let mut out = String::new();
        MarkdownBackend::text("# tag", false, false, InlineContext::TableCell, &mut out);
        assert_eq!(out, "# tag");
    }

    #[test]
    fn test_escape_block_marker_leaves_plain_numbers() {
        assert_eq!(escape_block_marker("2024 release"), "2024 release");
        assert_eq!(escape_block_marker("3) third"), "3\\) third");
    }

    #[test]
    fn test_bold_text_keeps_spaces_outside() {
        let mut out = String::new();
        MarkdownBackend::text("Returns: ", true, false, InlineContext::Block, &mut out);
        assert_eq!(out, "**Returns:** ");
    }

    #[test]
    fn test_code_span_with_backtick() {
        let mut out = String::new();
        MarkdownBackend::code_span("a`b", InlineContext::Block, &mut out);
        assert_eq!(out, "``a`b``");
    }

    #[test]
    fn test_code_span_escapes_pipe_in_cell() {
        let mut out = String::new();
        MarkdownBackend::code_span("string | number", InlineContext::TableCell, &mut out);
        assert_eq!(out, "`string \\| number`");
    }

    #[test]
    fn test_page_href() {
        assert_eq!(MarkdownBackend::page_href("demo.widget"), "./demo.widget.md");
    }

    #[test]
    fn test_render_page_layout() {
        let mut page = create_page("Widget class", "demo.widget");
        page.breadcrumb
            .push(create_web_link_from_text("Home", "./index"));
        page.breadcrumb.extend(create_text_elements(" > "));
        page.breadcrumb
            .push(create_api_link_from_text("demo", "demo"));
        page.extend_basic(create_text_elements("A widget."));
        page.push(create_heading1("Methods"));
        let mut table = create_table(&["Method", "Description"]);
        table.push_row(create_table_row(vec![
            vec![create_api_link_from_text("render()", "demo.widget.render")],
            create_text_elements("Renders it."),
        ]));
        page.push(table);

        let expected = "\
[Home](./index) > [demo](./demo.md)

# Widget class

A widget.

## Methods

| Method | Description |
| --- | --- |
| [render()](./demo.widget.render.md) | Renders it. |
";
        assert_eq!(render(&page), expected);
    }

    #[test]
    fn test_render_signature_block() {
        let mut page = create_page("Widget.render method", "demo.widget.render");
        page.extend_basic(create_text_elements("Renders it."));
        page.extend_basic([PARAGRAPH]);
        page.extend_basic(create_styled_text_elements("Signature:", TextStyle::BOLD));
        page.push(create_code_box("render(): string", "javascript"));
        page.extend_basic(create_styled_text_elements("Returns:", TextStyle::BOLD));
        page.extend_basic(create_text_elements(" "));
        page.extend_basic([create_code("string")]);

        let expected = "\
# Widget.render method

Renders it.

**Signature:**

```javascript
render(): string
```

**Returns:** `string`
";
        assert_eq!(render(&page), expected);
    }

    #[test]
    fn test_render_note_box() {
        let mut page = create_page("T", "t");
        page.push(create_note_box_from_text("Preview only."));

        assert_eq!(render(&page), "# T\n\n> [!NOTE]\n> Preview only.\n");
    }

    #[test]
    fn test_render_empty_cell() {
        let mut table = create_table(&["Parameter", "Type", "Description"]);
        table.push_row(create_table_row(vec![
            vec![create_code("x")],
            Vec::new(),
            create_text_elements("The x."),
        ]));
        let mut page = create_page("T", "t");
        page.push(table);

        let rendered = render(&page);

        assert!(rendered.contains("| `x` |  | The x. |"), "{rendered}");
    }
}
