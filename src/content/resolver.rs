//! Transclusion resolver
//!
//! A line whose first byte is `!` names another file in the content
//! directory. The whole line is replaced by that file's resolved content,
//! recursively and depth-first. Every other line is copied verbatim, so a
//! file without directives resolves to exactly its raw bytes.
//!
//! Inclusions are not cached: a file included twice is read and resolved
//! twice. A file that includes itself, directly or through others, is
//! reported as a cycle.

use super::{ContentError, PageTable};
use crate::logger;
use hyper::body::Bytes;
use std::fs;
use std::path::Path;

/// First byte of a transclusion directive line
pub const DIRECTIVE_MARKER: u8 = b'!';

/// Resolve every file in `dir` into a page table.
pub fn resolve(dir: impl AsRef<Path>) -> Result<PageTable, ContentError> {
    let resolver = Resolver::new(dir.as_ref());
    let mut table = PageTable::new();

    for name in resolver.list_pages()? {
        let content = resolver.resolve_page(&name)?;
        logger::log_page_loaded(&name, content.len());
        table.insert(name, Bytes::from(content));
    }

    Ok(table)
}

/// File name named by a directive line, without its line terminator.
///
/// Returns `None` for ordinary lines.
pub fn directive_target(line: &[u8]) -> Option<&[u8]> {
    let rest = line.strip_prefix(&[DIRECTIVE_MARKER])?;
    let rest = rest.strip_suffix(b"\n").unwrap_or(rest);
    Some(rest.strip_suffix(b"\r").unwrap_or(rest))
}

pub struct Resolver<'a> {
    root: &'a Path,
}

impl<'a> Resolver<'a> {
    pub const fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Names of all non-directory entries, sorted
    pub fn list_pages(&self) -> Result<Vec<String>, ContentError> {
        let read_dir_error = |source| ContentError::ReadDir {
            path: self.root.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(self.root).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            if entry.file_type().map_err(read_dir_error)?.is_dir() {
                continue;
            }
            let name = entry
                .file_name()
                .into_string()
                .map_err(|raw| ContentError::InvalidName {
                    name: raw.to_string_lossy().into_owned(),
                    within: self.root.to_path_buf(),
                })?;
            names.push(name);
        }

        names.sort_unstable();
        Ok(names)
    }

    /// Fully resolved content of one file
    pub fn resolve_page(&self, name: &str) -> Result<Vec<u8>, ContentError> {
        let mut chain = Vec::new();
        let mut out = Vec::new();
        self.expand(name, &mut chain, &mut out)?;
        Ok(out)
    }

    fn expand(
        &self,
        name: &str,
        chain: &mut Vec<String>,
        out: &mut Vec<u8>,
    ) -> Result<(), ContentError> {
        // Names are always relative to the content root
        let name = name.trim_start_matches('/');
        if chain.iter().any(|open| open == name) {
            let mut cycle = chain.clone();
            cycle.push(name.to_string());
            return Err(ContentError::Cycle { chain: cycle });
        }

        let path = self.root.join(name);
        let raw = fs::read(&path).map_err(|source| ContentError::ReadFile { path, source })?;

        chain.push(name.to_string());
        for line in raw.split_inclusive(|&b| b == b'\n') {
            match directive_target(line) {
                Some(target) => {
                    let target =
                        std::str::from_utf8(target).map_err(|_| ContentError::InvalidName {
                            name: String::from_utf8_lossy(target).into_owned(),
                            within: self.root.join(name),
                        })?;
                    self.expand(target, chain, out)?;
                }
                None => out.extend_from_slice(line),
            }
        }
        chain.pop();

        Ok(())
    }
}
