//! In-memory word-processing document.
//!
//! A [`Document`] is an ordered list of [`Block`]s. It is built by appending
//! headings and paragraphs, and becomes a `.docx` file through [`Document::save`].

use crate::docx;
use crate::error::DocxResult;
use crate::model::{Block, HeadingLevel, ParagraphStyle};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_heading(&mut self, text: impl Into<String>, level: HeadingLevel) -> &Block {
        self.push(Block::heading(text, level))
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>, style: ParagraphStyle) -> &Block {
        self.push(Block::Paragraph {
            text: text.into(),
            style,
        })
    }

    fn push(&mut self, block: Block) -> &Block {
        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text of the first level-0 heading, used for the package title.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading { text, level } if *level == HeadingLevel::TITLE => Some(text.as_str()),
            _ => None,
        })
    }

    /// Serializes the document into an in-memory `.docx` package.
    pub fn to_bytes(&self) -> DocxResult<Vec<u8>> {
        let cursor = docx::write_package(self, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Writes the document to `path`, replacing any existing file.
    ///
    /// The package is written to a temporary file next to the target and
    /// renamed into place, so a failure leaves the target untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> DocxResult<()> {
        let path = path.as_ref();
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut staged = staging_file(dir)?;
        {
            let mut writer = docx::write_package(self, BufWriter::new(staged.as_file_mut()))?;
            writer.flush()?;
        }
        staged.as_file().sync_all()?;
        keep_existing_permissions(staged.path(), path)?;
        staged.persist(path).map_err(|err| err.error)?;

        tracing::debug!(path = %path.display(), blocks = self.blocks.len(), "document saved");
        Ok(())
    }

    /// Loads the body blocks of an existing `.docx` file.
    pub fn open(path: impl AsRef<Path>) -> DocxResult<Self> {
        let file = File::open(path.as_ref())?;
        let blocks = docx::read_blocks(BufReader::new(file))?;
        Ok(Self { blocks })
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

// Requested as 0o666 so the process umask decides the final mode, the same
// as a plainly created file.
#[cfg(unix)]
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

/// An overwritten document keeps the mode of the file it replaces.
#[cfg(unix)]
fn keep_existing_permissions(staged: &Path, target: &Path) -> io::Result<()> {
    match std::fs::metadata(target) {
        Ok(metadata) => std::fs::set_permissions(staged, metadata.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(not(unix))]
fn keep_existing_permissions(_staged: &Path, _target: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_add_blocks_in_order() {
        let mut document = Document::new();
        assert!(document.is_empty());

        let heading = document.add_heading("Titel", HeadingLevel::TITLE).clone();
        document.add_paragraph("cmd", ParagraphStyle::ListBullet);
        document.add_paragraph("", ParagraphStyle::Normal);

        assert_eq!(heading, Block::heading("Titel", HeadingLevel::TITLE));
        assert_eq!(document.len(), 3);
        assert_eq!(document.blocks()[1], Block::bullet("cmd"));
        assert_eq!(document.blocks()[2], Block::paragraph(""));
    }

    #[test]
    fn test_title_uses_first_level_zero_heading() {
        let mut document = Document::new();
        assert_eq!(document.title(), None);

        document.add_heading("Sectie", HeadingLevel::new(1).unwrap());
        document.add_heading("Titel", HeadingLevel::TITLE);
        document.add_heading("Tweede", HeadingLevel::TITLE);
        assert_eq!(document.title(), Some("Titel"));
    }

    #[test]
    fn test_bytes_read_back_to_same_blocks() {
        let mut document = Document::new();
        document.add_heading("Titel", HeadingLevel::TITLE);
        document.add_paragraph("sudo lpinfo -m | grep -i mg5100", ParagraphStyle::ListBullet);
        document.add_paragraph("Zoekt naar drivers.", ParagraphStyle::Normal);
        document.add_paragraph("", ParagraphStyle::Normal);

        let bytes = document.to_bytes().unwrap();
        let blocks = docx::read_blocks(Cursor::new(bytes)).unwrap();
        assert_eq!(Document::from(blocks), document);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.txt");
        File::create(&reference).unwrap();
        let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;

        let target = dir.path().join("nieuw.docx");
        Document::new().save(&target).unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("bestaand.docx");
        fs::write(&target, b"oud").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o600)).unwrap();

        let mut document = Document::new();
        document.add_heading("Titel", HeadingLevel::TITLE);
        document.save(&target).unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        assert_eq!(Document::open(&target).unwrap(), document);
    }
}
