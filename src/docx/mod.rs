//! Minimal WordprocessingML (`.docx`) package support.
//!
//! Only the subset needed for flat documents is produced: headings,
//! default-style paragraphs and bulleted paragraphs. The reader understands
//! exactly what the writer emits and is used to verify saved files.

use crate::error::{DocxError, DocxResult};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, Event};

pub mod parts;
pub mod reader;
pub mod writer;

pub use reader::{parse_document_xml, read_blocks};
pub use writer::{render_document_xml, write_package};

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELS_PART: &str = "_rels/.rels";
pub const CORE_PROPS_PART: &str = "docProps/core.xml";
pub const APP_PROPS_PART: &str = "docProps/app.xml";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const STYLES_PART: &str = "word/styles.xml";
pub const NUMBERING_PART: &str = "word/numbering.xml";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Parts in the order they are written to the archive.
pub const PACKAGE_PARTS: &[&str] = &[
    CONTENT_TYPES_PART,
    ROOT_RELS_PART,
    CORE_PROPS_PART,
    APP_PROPS_PART,
    DOCUMENT_PART,
    STYLES_PART,
    NUMBERING_PART,
    DOCUMENT_RELS_PART,
];

pub(crate) const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(crate) const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Numbering instance referenced by the `ListBullet` style.
pub(crate) const BULLET_NUM_ID: &str = "1";

/// Rejects text that would not survive as XML 1.0 character data.
///
/// Tab and newline are written as `w:tab` and `w:br`. A carriage return has
/// no lossless encoding and is refused along with the other C0 controls and
/// U+FFFE/U+FFFF.
pub(crate) fn check_text(text: &str) -> DocxResult<()> {
    match text.chars().find(|&c| !is_storable(c)) {
        Some(c) => Err(DocxError::InvalidText { code: u32::from(c) }),
        None => Ok(()),
    }
}

fn is_storable(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Serializes one XML part, prefixed with the standalone declaration Word expects.
pub(crate) fn xml_part<F>(build: F) -> DocxResult<Vec<u8>>
where
    F: FnOnce(&mut Writer<Vec<u8>>) -> quick_xml::Result<()>,
{
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new(
        "1.0",
        Some("UTF-8"),
        Some("yes"),
    )))?;
    build(&mut writer)?;
    Ok(writer.into_inner())
}
