use super::DOCUMENT_PART;
use crate::error::{DocxError, DocxResult};
use crate::model::{Block, HeadingLevel, ParagraphStyle};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::io::{BufRead, BufReader, Read, Seek};
use zip::ZipArchive;
use zip::result::ZipError;

/// Reads the body blocks of a `.docx` package.
pub fn read_blocks<R: Read + Seek>(reader: R) -> DocxResult<Vec<Block>> {
    let mut archive = ZipArchive::new(reader)?;
    let part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Err(DocxError::missing_part(DOCUMENT_PART)),
        Err(err) => return Err(err.into()),
    };
    parse_document_xml(BufReader::new(part))
}

#[derive(Default)]
struct OpenParagraph {
    style_id: Option<String>,
    text: String,
    in_run: bool,
    in_text: bool,
}

impl OpenParagraph {
    fn into_block(self) -> DocxResult<Block> {
        block_from_parts(self.style_id.as_deref(), self.text)
    }
}

/// Parses a `word/document.xml` stream into blocks, one per `w:p`.
pub fn parse_document_xml<R: BufRead>(source: R) -> DocxResult<Vec<Block>> {
    let mut reader = Reader::from_reader(source);
    let mut blocks = Vec::new();
    let mut current: Option<OpenParagraph> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => current = Some(OpenParagraph::default()),
                b"w:pStyle" => set_style(&mut current, &e)?,
                b"w:r" => {
                    if let Some(p) = current.as_mut() {
                        p.in_run = true;
                    }
                }
                b"w:t" => {
                    if let Some(p) = current.as_mut() {
                        p.in_text = p.in_run;
                    }
                }
                _ => (),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => blocks.push(block_from_parts(None, String::new())?),
                b"w:pStyle" => set_style(&mut current, &e)?,
                b"w:tab" => push_in_run(&mut current, '\t'),
                b"w:br" | b"w:cr" => push_in_run(&mut current, '\n'),
                _ => (),
            },
            Event::Text(e) => {
                if let Some(p) = current.as_mut().filter(|p| p.in_text) {
                    p.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(p) = current.as_mut().filter(|p| p.in_text) {
                    p.text.push_str(std::str::from_utf8(&e)?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(p) = current.take() {
                        blocks.push(p.into_block()?);
                    }
                }
                b"w:r" => {
                    if let Some(p) = current.as_mut() {
                        p.in_run = false;
                    }
                }
                b"w:t" => {
                    if let Some(p) = current.as_mut() {
                        p.in_text = false;
                    }
                }
                _ => (),
            },
            Event::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    Ok(blocks)
}

fn set_style(current: &mut Option<OpenParagraph>, e: &BytesStart) -> DocxResult<()> {
    let Some(p) = current.as_mut() else {
        return Ok(());
    };
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == b"w:val" {
            p.style_id = Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    Ok(())
}

fn push_in_run(current: &mut Option<OpenParagraph>, ch: char) {
    if let Some(p) = current.as_mut().filter(|p| p.in_run) {
        p.text.push(ch);
    }
}

fn block_from_parts(style_id: Option<&str>, text: String) -> DocxResult<Block> {
    let Some(style_id) = style_id else {
        return Ok(Block::paragraph(text));
    };
    if let Some(style) = ParagraphStyle::from_style_id(style_id) {
        return Ok(Block::Paragraph { text, style });
    }
    if let Some(level) = HeadingLevel::from_style_id(style_id) {
        return Ok(Block::heading(text, level));
    }
    Err(DocxError::UnknownStyle {
        style: style_id.to_string(),
    })
}
