//! Property-based checks of the entry-to-block mapping.

use proptest::prelude::*;
use wsl_print_cheatsheet::{
    Block, CommandEntry, Document, DocumentBuilder, HeadingLevel, ParagraphStyle, docx,
};

fn entry_strategy() -> impl Strategy<Value = CommandEntry> {
    ("[a-z0-9 |&<>\"'./-]{0,40}", "[A-Za-z0-9 ,.()'&-]{0,60}")
        .prop_map(|(command, explanation)| CommandEntry::new(command, explanation))
}

proptest! {
    #[test]
    fn prop_one_heading_then_three_blocks_per_entry(
        entries in prop::collection::vec(entry_strategy(), 0..25)
    ) {
        let document = DocumentBuilder::new("title", &entries).build();
        let blocks = document.blocks();

        prop_assert_eq!(blocks.len(), 1 + 3 * entries.len());
        prop_assert_eq!(&blocks[0], &Block::heading("title", HeadingLevel::TITLE));

        for (i, entry) in entries.iter().enumerate() {
            let triple = &blocks[1 + 3 * i..4 + 3 * i];
            prop_assert_eq!(
                &triple[0],
                &Block::Paragraph { text: entry.command.clone(), style: ParagraphStyle::ListBullet }
            );
            prop_assert_eq!(&triple[1], &Block::paragraph(entry.explanation.clone()));
            prop_assert_eq!(&triple[2], &Block::paragraph(""));
        }
    }

    #[test]
    fn prop_saved_package_preserves_text(
        entries in prop::collection::vec(entry_strategy(), 1..8)
    ) {
        let document = DocumentBuilder::new("title", &entries).build();
        let bytes = document.to_bytes().unwrap();
        let blocks = docx::read_blocks(std::io::Cursor::new(bytes)).unwrap();

        prop_assert_eq!(Document::from(blocks), document);
    }
}
