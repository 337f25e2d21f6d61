//! Package parts that do not depend on document content, plus the
//! properties parts that only carry the title.

use super::{BULLET_NUM_ID, RELATIONSHIPS_NS, WORDML_NS, check_text, xml_part};
use crate::error::DocxResult;
use crate::model::HeadingLevel;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

const PACKAGE_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const OFFICE_REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const MAIN_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const STYLES_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
const NUMBERING_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
const CORE_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const APP_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

pub fn content_types() -> DocxResult<Vec<u8>> {
    xml_part(|w| {
        w.write_event(Event::Start(BytesStart::new("Types").with_attributes([(
            "xmlns",
            "http://schemas.openxmlformats.org/package/2006/content-types",
        )])))?;
        empty(
            w,
            "Default",
            &[
                ("Extension", "rels"),
                (
                    "ContentType",
                    "application/vnd.openxmlformats-package.relationships+xml",
                ),
            ],
        )?;
        empty(
            w,
            "Default",
            &[("Extension", "xml"), ("ContentType", "application/xml")],
        )?;
        for (part, content_type) in [
            ("/word/document.xml", MAIN_CONTENT_TYPE),
            ("/word/styles.xml", STYLES_CONTENT_TYPE),
            ("/word/numbering.xml", NUMBERING_CONTENT_TYPE),
            ("/docProps/core.xml", CORE_CONTENT_TYPE),
            ("/docProps/app.xml", APP_CONTENT_TYPE),
        ] {
            empty(
                w,
                "Override",
                &[("PartName", part), ("ContentType", content_type)],
            )?;
        }
        w.write_event(Event::End(BytesEnd::new("Types")))
    })
}

pub fn root_relationships() -> DocxResult<Vec<u8>> {
    let office_document = format!("{OFFICE_REL_BASE}/officeDocument");
    let extended = format!("{OFFICE_REL_BASE}/extended-properties");
    relationships(&[
        ("rId1", office_document.as_str(), "word/document.xml"),
        (
            "rId2",
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            "docProps/core.xml",
        ),
        ("rId3", extended.as_str(), "docProps/app.xml"),
    ])
}

pub fn document_relationships() -> DocxResult<Vec<u8>> {
    let styles = format!("{OFFICE_REL_BASE}/styles");
    let numbering = format!("{OFFICE_REL_BASE}/numbering");
    relationships(&[
        ("rId1", styles.as_str(), "styles.xml"),
        ("rId2", numbering.as_str(), "numbering.xml"),
    ])
}

fn relationships(entries: &[(&str, &str, &str)]) -> DocxResult<Vec<u8>> {
    xml_part(|w| {
        w.write_event(Event::Start(
            BytesStart::new("Relationships").with_attributes([("xmlns", PACKAGE_RELS_NS)]),
        ))?;
        for &(id, rel_type, target) in entries {
            empty(
                w,
                "Relationship",
                &[("Id", id), ("Type", rel_type), ("Target", target)],
            )?;
        }
        w.write_event(Event::End(BytesEnd::new("Relationships")))
    })
}

/// Core properties carry no timestamps so repeated runs stay byte-identical.
pub fn core_properties(title: Option<&str>, creator: &str) -> DocxResult<Vec<u8>> {
    check_text(title.unwrap_or_default())?;
    check_text(creator)?;
    xml_part(|w| {
        w.write_event(Event::Start(BytesStart::new("cp:coreProperties").with_attributes([
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ])))?;
        if let Some(title) = title {
            text_element(w, "dc:title", title)?;
        }
        text_element(w, "dc:creator", creator)?;
        w.write_event(Event::End(BytesEnd::new("cp:coreProperties")))
    })
}

pub fn app_properties(application: &str) -> DocxResult<Vec<u8>> {
    xml_part(|w| {
        w.write_event(Event::Start(BytesStart::new("Properties").with_attributes([(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )])))?;
        text_element(w, "Application", application)?;
        w.write_event(Event::End(BytesEnd::new("Properties")))
    })
}

/// Single-level bullet list used by `ListBullet`.
pub fn numbering() -> DocxResult<Vec<u8>> {
    xml_part(|w| {
        w.write_event(Event::Start(
            BytesStart::new("w:numbering").with_attributes([("xmlns:w", WORDML_NS)]),
        ))?;
        w.write_event(Event::Start(
            BytesStart::new("w:abstractNum").with_attributes([("w:abstractNumId", "0")]),
        ))?;
        empty(w, "w:multiLevelType", &[("w:val", "singleLevel")])?;
        w.write_event(Event::Start(
            BytesStart::new("w:lvl").with_attributes([("w:ilvl", "0")]),
        ))?;
        empty(w, "w:start", &[("w:val", "1")])?;
        empty(w, "w:numFmt", &[("w:val", "bullet")])?;
        empty(w, "w:lvlText", &[("w:val", "\u{2022}")])?;
        empty(w, "w:lvlJc", &[("w:val", "left")])?;
        w.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        empty(w, "w:ind", &[("w:left", "360"), ("w:hanging", "360")])?;
        w.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        w.write_event(Event::End(BytesEnd::new("w:lvl")))?;
        w.write_event(Event::End(BytesEnd::new("w:abstractNum")))?;

        w.write_event(Event::Start(
            BytesStart::new("w:num").with_attributes([("w:numId", BULLET_NUM_ID)]),
        ))?;
        empty(w, "w:abstractNumId", &[("w:val", "0")])?;
        w.write_event(Event::End(BytesEnd::new("w:num")))?;
        w.write_event(Event::End(BytesEnd::new("w:numbering")))
    })
}

/// Half-point font sizes for Heading1..Heading9.
const HEADING_SIZES: [&str; 9] = ["32", "26", "24", "22", "22", "22", "22", "22", "22"];

pub fn styles() -> DocxResult<Vec<u8>> {
    xml_part(|w| {
        w.write_event(Event::Start(BytesStart::new("w:styles").with_attributes([
            ("xmlns:w", WORDML_NS),
            ("xmlns:r", RELATIONSHIPS_NS),
        ])))?;

        w.write_event(Event::Start(BytesStart::new("w:docDefaults")))?;
        w.write_event(Event::Start(BytesStart::new("w:rPrDefault")))?;
        w.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        empty(
            w,
            "w:rFonts",
            &[("w:ascii", "Calibri"), ("w:hAnsi", "Calibri"), ("w:cs", "Calibri")],
        )?;
        empty(w, "w:sz", &[("w:val", "22")])?;
        w.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        w.write_event(Event::End(BytesEnd::new("w:rPrDefault")))?;
        w.write_event(Event::End(BytesEnd::new("w:docDefaults")))?;

        w.write_event(Event::Start(BytesStart::new("w:style").with_attributes([
            ("w:type", "paragraph"),
            ("w:default", "1"),
            ("w:styleId", "Normal"),
        ])))?;
        empty(w, "w:name", &[("w:val", "Normal")])?;
        empty(w, "w:qFormat", &[])?;
        w.write_event(Event::End(BytesEnd::new("w:style")))?;

        style_start(w, "Title", "Title")?;
        w.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        empty(w, "w:spacing", &[("w:after", "300")])?;
        w.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        w.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        empty(w, "w:sz", &[("w:val", "52")])?;
        w.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        w.write_event(Event::End(BytesEnd::new("w:style")))?;

        for level in 1..=HeadingLevel::MAX {
            let id = format!("Heading{level}");
            let name = format!("heading {level}");
            let outline = (level - 1).to_string();
            style_start(w, &id, &name)?;
            w.write_event(Event::Start(BytesStart::new("w:pPr")))?;
            empty(w, "w:keepNext", &[])?;
            empty(w, "w:spacing", &[("w:before", "240")])?;
            empty(w, "w:outlineLvl", &[("w:val", outline.as_str())])?;
            w.write_event(Event::End(BytesEnd::new("w:pPr")))?;
            w.write_event(Event::Start(BytesStart::new("w:rPr")))?;
            empty(w, "w:b", &[])?;
            empty(w, "w:sz", &[("w:val", HEADING_SIZES[usize::from(level - 1)])])?;
            w.write_event(Event::End(BytesEnd::new("w:rPr")))?;
            w.write_event(Event::End(BytesEnd::new("w:style")))?;
        }

        style_start(w, "ListBullet", "List Bullet")?;
        w.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        w.write_event(Event::Start(BytesStart::new("w:numPr")))?;
        empty(w, "w:numId", &[("w:val", BULLET_NUM_ID)])?;
        w.write_event(Event::End(BytesEnd::new("w:numPr")))?;
        empty(w, "w:contextualSpacing", &[])?;
        w.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        w.write_event(Event::End(BytesEnd::new("w:style")))?;

        w.write_event(Event::End(BytesEnd::new("w:styles")))
    })
}

/// Opens a paragraph style derived from Normal. Caller closes `w:style`.
fn style_start(w: &mut Writer<Vec<u8>>, id: &str, name: &str) -> quick_xml::Result<()> {
    w.write_event(Event::Start(
        BytesStart::new("w:style").with_attributes([("w:type", "paragraph"), ("w:styleId", id)]),
    ))?;
    empty(w, "w:name", &[("w:val", name)])?;
    empty(w, "w:basedOn", &[("w:val", "Normal")])?;
    empty(w, "w:next", &[("w:val", "Normal")])?;
    empty(w, "w:qFormat", &[])
}

fn empty(w: &mut Writer<Vec<u8>>, name: &str, attrs: &[(&str, &str)]) -> quick_xml::Result<()> {
    w.write_event(Event::Empty(
        BytesStart::new(name).with_attributes(attrs.iter().copied()),
    ))
}

fn text_element(w: &mut Writer<Vec<u8>>, name: &str, text: &str) -> quick_xml::Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_styles_define_every_produced_style() {
        let xml = as_text(styles().unwrap());
        for id in ["Normal", "Title", "Heading1", "Heading9", "ListBullet"] {
            assert!(
                xml.contains(&format!("w:styleId=\"{id}\"")),
                "missing style {id}"
            );
        }
        assert!(xml.contains("<w:numId w:val=\"1\"/>"));
    }

    #[test]
    fn test_core_properties_escape_title() {
        let xml = as_text(core_properties(Some("Printen & delen"), "tester").unwrap());
        assert!(xml.contains("<dc:title>Printen &amp; delen</dc:title>"));
        assert!(xml.contains("<dc:creator>tester</dc:creator>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_core_properties_reject_control_characters() {
        let err = core_properties(Some("Titel\u{7}"), "tester").unwrap_err();
        assert!(matches!(err, crate::error::DocxError::InvalidText { code: 0x7 }));
    }

    #[test]
    fn test_content_types_cover_parts() {
        let xml = as_text(content_types().unwrap());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
        assert!(xml.contains("PartName=\"/word/document.xml\""));
        assert!(xml.contains("PartName=\"/word/numbering.xml\""));
    }
}
