#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};
use wsl_print_cheatsheet::{CommandEntry, GeneratorConfig};

pub struct TestWorkspace {
    _tempdir: TempDir,
    root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let tempdir = tempdir().expect("tempdir");
        let root = tempdir.path().to_path_buf();
        Self {
            _tempdir: tempdir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Built-in cheatsheet, written inside the workspace.
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            output_path: self.path("cheatsheet.docx"),
            ..GeneratorConfig::default()
        }
    }

    pub fn config_with_entries(&self, title: &str, entries: &[(&str, &str)]) -> GeneratorConfig {
        GeneratorConfig {
            title: title.to_string(),
            entries: entries.iter().copied().map(CommandEntry::from).collect(),
            output_path: self.path("custom.docx"),
            verify: true,
        }
    }
}
