use crate::config::GeneratorConfig;
use crate::document::Document;
use crate::error::DocxResult;
use crate::model::{CommandEntry, HeadingLevel, ParagraphStyle};
use std::path::Path;

/// Turns a title and an ordered list of command entries into a flat document:
/// the title heading, then for every entry a bullet with the command, a
/// paragraph with the explanation and an empty spacer paragraph.
#[derive(Debug, Clone, Copy)]
pub struct DocumentBuilder<'a> {
    title: &'a str,
    entries: &'a [CommandEntry],
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(title: &'a str, entries: &'a [CommandEntry]) -> Self {
        Self { title, entries }
    }

    pub fn from_config(config: &'a GeneratorConfig) -> Self {
        Self::new(&config.title, &config.entries)
    }

    pub fn build(&self) -> Document {
        let mut document = Document::new();
        document.add_heading(self.title, HeadingLevel::TITLE);
        for entry in self.entries {
            document.add_paragraph(entry.command.as_str(), ParagraphStyle::ListBullet);
            document.add_paragraph(entry.explanation.as_str(), ParagraphStyle::Normal);
            document.add_paragraph("", ParagraphStyle::Normal);
        }
        tracing::debug!(
            entries = self.entries.len(),
            blocks = document.len(),
            "document built"
        );
        document
    }

    /// Writes `document` to `path`, overwriting any existing file.
    pub fn save(document: &Document, path: impl AsRef<Path>) -> DocxResult<()> {
        document.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn test_two_entry_scenario() {
        let entries = vec![
            CommandEntry::new("cmd1", "desc1"),
            CommandEntry::new("cmd2", "desc2"),
        ];
        let document = DocumentBuilder::new("title", &entries).build();

        assert_eq!(
            document.blocks(),
            &[
                Block::heading("title", HeadingLevel::TITLE),
                Block::bullet("cmd1"),
                Block::paragraph("desc1"),
                Block::paragraph(""),
                Block::bullet("cmd2"),
                Block::paragraph("desc2"),
                Block::paragraph(""),
            ]
        );
    }

    #[test]
    fn test_no_entries_yields_heading_only() {
        let document = DocumentBuilder::new("title", &[]).build();
        assert_eq!(document.blocks(), &[Block::heading("title", HeadingLevel::TITLE)]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let entries = vec![
            CommandEntry::new("lpstat -p MG5100", "status"),
            CommandEntry::new("lpstat -p MG5100", "status"),
        ];
        let document = DocumentBuilder::new("title", &entries).build();
        assert_eq!(document.len(), 7);
        assert_eq!(document.blocks()[1], document.blocks()[4]);
    }
}
