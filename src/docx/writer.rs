use super::{
    APP_PROPS_PART, CONTENT_TYPES_PART, CORE_PROPS_PART, DOCUMENT_PART, DOCUMENT_RELS_PART,
    NUMBERING_PART, RELATIONSHIPS_NS, ROOT_RELS_PART, STYLES_PART, WORDML_NS, check_text, parts,
    xml_part,
};
use crate::document::Document;
use crate::error::DocxResult;
use crate::model::Block;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::{Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const CREATOR: &str = env!("CARGO_PKG_NAME");

/// Writes `document` as a complete `.docx` package and returns the
/// underlying writer once the archive is finished.
pub fn write_package<W: Write + Seek>(document: &Document, writer: W) -> DocxResult<W> {
    // Fixed timestamps keep the archive byte-identical across runs.
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let part_contents = [
        (CONTENT_TYPES_PART, parts::content_types()?),
        (ROOT_RELS_PART, parts::root_relationships()?),
        (
            CORE_PROPS_PART,
            parts::core_properties(document.title(), CREATOR)?,
        ),
        (APP_PROPS_PART, parts::app_properties(CREATOR)?),
        (DOCUMENT_PART, render_document_xml(document)?),
        (STYLES_PART, parts::styles()?),
        (NUMBERING_PART, parts::numbering()?),
        (DOCUMENT_RELS_PART, parts::document_relationships()?),
    ];

    let mut zip = ZipWriter::new(writer);
    for (name, bytes) in part_contents {
        zip.start_file(name, options)?;
        zip.write_all(&bytes)?;
        tracing::trace!(part = name, bytes = bytes.len(), "wrote package part");
    }
    Ok(zip.finish()?)
}

/// Renders the main `word/document.xml` part.
pub fn render_document_xml(document: &Document) -> DocxResult<Vec<u8>> {
    for block in document.blocks() {
        check_text(block.text())?;
    }
    xml_part(|w| {
        w.write_event(Event::Start(BytesStart::new("w:document").with_attributes([
            ("xmlns:w", WORDML_NS),
            ("xmlns:r", RELATIONSHIPS_NS),
        ])))?;
        w.write_event(Event::Start(BytesStart::new("w:body")))?;
        for block in document.blocks() {
            write_paragraph(w, block)?;
        }
        write_section_properties(w)?;
        w.write_event(Event::End(BytesEnd::new("w:body")))?;
        w.write_event(Event::End(BytesEnd::new("w:document")))
    })
}

fn write_paragraph(w: &mut Writer<Vec<u8>>, block: &Block) -> quick_xml::Result<()> {
    let style_id = block.style_id();
    let text = block.text();

    if style_id.is_none() && text.is_empty() {
        return w.write_event(Event::Empty(BytesStart::new("w:p")));
    }

    w.write_event(Event::Start(BytesStart::new("w:p")))?;
    if let Some(style_id) = style_id.as_deref() {
        w.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        w.write_event(Event::Empty(
            BytesStart::new("w:pStyle").with_attributes([("w:val", style_id)]),
        ))?;
        w.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    }
    if !text.is_empty() {
        w.write_event(Event::Start(BytesStart::new("w:r")))?;
        for segment in RunSegments::new(text) {
            match segment {
                RunSegment::Tab => w.write_event(Event::Empty(BytesStart::new("w:tab")))?,
                RunSegment::Break => w.write_event(Event::Empty(BytesStart::new("w:br")))?,
                RunSegment::Text(chunk) => {
                    let mut start = BytesStart::new("w:t");
                    if chunk.starts_with(char::is_whitespace) || chunk.ends_with(char::is_whitespace)
                    {
                        start.push_attribute(("xml:space", "preserve"));
                    }
                    w.write_event(Event::Start(start))?;
                    w.write_event(Event::Text(BytesText::new(chunk)))?;
                    w.write_event(Event::End(BytesEnd::new("w:t")))?;
                }
            }
        }
        w.write_event(Event::End(BytesEnd::new("w:r")))?;
    }
    w.write_event(Event::End(BytesEnd::new("w:p")))
}

/// A4 portrait with one-inch margins.
fn write_section_properties(w: &mut Writer<Vec<u8>>) -> quick_xml::Result<()> {
    w.write_event(Event::Start(BytesStart::new("w:sectPr")))?;
    w.write_event(Event::Empty(
        BytesStart::new("w:pgSz").with_attributes([("w:w", "11906"), ("w:h", "16838")]),
    ))?;
    w.write_event(Event::Empty(BytesStart::new("w:pgMar").with_attributes([
        ("w:top", "1440"),
        ("w:right", "1440"),
        ("w:bottom", "1440"),
        ("w:left", "1440"),
        ("w:header", "720"),
        ("w:footer", "720"),
        ("w:gutter", "0"),
    ])))?;
    w.write_event(Event::End(BytesEnd::new("w:sectPr")))
}

#[derive(Debug, PartialEq, Eq)]
enum RunSegment<'a> {
    Text(&'a str),
    Tab,
    Break,
}

/// Splits run text on tab and newline, which Word encodes as elements.
struct RunSegments<'a> {
    rest: &'a str,
    pending: Option<RunSegment<'a>>,
}

impl<'a> RunSegments<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            pending: None,
        }
    }
}

impl<'a> Iterator for RunSegments<'a> {
    type Item = RunSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(['\t', '\n']) {
            None => {
                let chunk = self.rest;
                self.rest = "";
                Some(RunSegment::Text(chunk))
            }
            Some(idx) => {
                let marker = if self.rest.as_bytes()[idx] == b'\t' {
                    RunSegment::Tab
                } else {
                    RunSegment::Break
                };
                let chunk = &self.rest[..idx];
                self.rest = &self.rest[idx + 1..];
                if chunk.is_empty() {
                    Some(marker)
                } else {
                    self.pending = Some(marker);
                    Some(RunSegment::Text(chunk))
                }
            }
        }
    }
}
