//! Template sources: the bundle compiled into the binary, or a directory on
//! disk laid out the same way.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use include_dir::{Dir, DirEntry, include_dir};

use crate::application::ports::TemplateSource;

/// Every template under `cli/templates/`, compiled in at build time.
static BUNDLED_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Templates embedded in the binary. This is the default package root.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn read(&self, relative: &Path) -> Result<Cow<'static, [u8]>> {
        BUNDLED_TEMPLATES
            .get_file(relative)
            .map(|f| Cow::Borrowed(f.contents()))
            .ok_or_else(|| anyhow::anyhow!("embedded template not found: {}", relative.display()))
    }

    fn describe(&self) -> String {
        "the bundled templates".to_string()
    }
}

/// Relative paths of every bundled template file, sorted.
#[must_use]
pub fn bundled_paths() -> Vec<PathBuf> {
    fn walk(dir: &Dir<'_>, out: &mut Vec<PathBuf>) {
        for entry in dir.entries() {
            match entry {
                DirEntry::Dir(d) => walk(d, out),
                DirEntry::File(f) => out.push(f.path().to_path_buf()),
            }
        }
    }
    let mut out = Vec::new();
    walk(&BUNDLED_TEMPLATES, &mut out);
    out.sort();
    out
}

/// Templates read from a package root on disk (`--source <dir>`).
#[derive(Debug, Clone)]
pub struct DirTemplates {
    root: PathBuf,
}

impl DirTemplates {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for DirTemplates {
    fn read(&self, relative: &Path) -> Result<Cow<'static, [u8]>> {
        let path = self.root.join(relative);
        std::fs::read(&path)
            .map(Cow::Owned)
            .with_context(|| format!("reading {}", path.display()))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
