use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::Write;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::board::GroupBoard;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:rPr><w:b/><w:sz w:val="56"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:rPr><w:b/><w:sz w:val="32"/></w:rPr></w:style></w:styles>"#;

/// Writes a draw result as a minimal Word-compatible .docx package.
///
/// A .docx is a ZIP of OOXML parts; only the four parts Word needs are
/// emitted: the content types, the package relationships, the document
/// body, and a styles part for the title/heading looks.
pub struct DocxWriter<'a> {
    board: &'a GroupBoard,
    title: String,
}

impl<'a> DocxWriter<'a> {
    /// Create a writer with the default document title
    pub fn new(board: &'a GroupBoard) -> Self {
        Self {
            board,
            title: "Group Assignment".to_string(),
        }
    }

    /// Override the document title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Write the document to a file
    pub fn write_to_file(&self, output_path: &str) -> Result<()> {
        eprintln!("[docx] Writing document to: {}", output_path);

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create output file: {}", output_path))?;
        let mut zip = ZipWriter::new(file);
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);

        let parts: [(&str, String); 5] = [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", PACKAGE_RELS.to_string()),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS.to_string()),
            ("word/styles.xml", STYLES.to_string()),
            ("word/document.xml", self.document_xml()),
        ];

        for (name, contents) in parts {
            zip.start_file(name, options)
                .with_context(|| format!("Failed to start {} in archive", name))?;
            zip.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write {} to archive", name))?;
        }

        zip.finish().context("Failed to finalize .docx file")?;

        eprintln!(
            "[docx] ✓ Wrote {} groups to {}",
            self.board.len(),
            output_path
        );

        Ok(())
    }

    /// Build the document body part
    fn document_xml(&self) -> String {
        let mut paragraphs = String::new();

        paragraphs.push_str(&styled_paragraph("Title", &self.title));
        let date_line = format!("Date: {}", Local::now().format("%A, %-d %B %Y"));
        paragraphs.push_str(&plain_paragraph(&date_line));

        for (index, group) in self.board.groups().iter().enumerate() {
            paragraphs.push_str(&styled_paragraph("Heading1", &self.board.display_name(index)));
            for (i, name) in group.members.iter().enumerate() {
                paragraphs.push_str(&plain_paragraph(&format!("{}. {}", i + 1, name)));
            }
        }

        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}</w:body></w:document>",
            paragraphs
        )
    }
}

fn styled_paragraph(style: &str, text: &str) -> String {
    format!(
        "<w:p><w:pPr><w:pStyle w:val=\"{}\"/></w:pPr><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
        style,
        escape_xml(text)
    )
}

fn plain_paragraph(text: &str) -> String {
    format!(
        "<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
        escape_xml(text)
    )
}

/// Escape the five XML-reserved characters in text content
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
