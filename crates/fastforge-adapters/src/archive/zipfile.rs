//! Zip packaging of a generated tree.

use std::{
    fs::File,
    io::{self, Write},
    path::{Component, Path},
};

use fastforge_core::{
    application::{ApplicationError, ports::Archiver},
    error::{ForgeError, ForgeResult},
};
use tracing::{debug, instrument};
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Writes every regular file under a directory into a deflated zip.
///
/// Entry names are relative to the directory's parent, so the archive
/// unpacks into a folder named after the project.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }
}

fn archive_error(destination: &Path, reason: impl ToString) -> ForgeError {
    ApplicationError::ArchiveFailed {
        path: destination.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

/// `a/b/c.py` with forward slashes on every platform.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

impl Archiver for ZipArchiver {
    #[instrument(skip_all, fields(source = %source.display(), destination = %destination.display()))]
    fn archive(&self, source: &Path, destination: &Path) -> ForgeResult<usize> {
        if !source.is_dir() {
            let reason = format!("{} is not a directory", source.display());
            return Err(archive_error(destination, reason));
        }

        let base = source.parent().unwrap_or_else(|| Path::new(""));
        let file = File::create(destination).map_err(|e| archive_error(destination, e))?;
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut entries = 0;
        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry.map_err(|e| archive_error(destination, e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(base)
                .map_err(|e| archive_error(destination, e))?;
            let name = entry_name(relative);

            writer
                .start_file(name.as_str(), options)
                .map_err(|e| archive_error(destination, e))?;
            let mut input = File::open(entry.path()).map_err(|e| archive_error(destination, e))?;
            io::copy(&mut input, &mut writer).map_err(|e| archive_error(destination, e))?;

            debug!(entry = %name, "Archived");
            entries += 1;
        }

        writer
            .finish()
            .map_err(|e| archive_error(destination, e))?
            .flush()
            .map_err(|e| archive_error(destination, e))?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn entries_are_prefixed_with_project_directory() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("shop");
        std::fs::create_dir_all(project.join("app/models")).unwrap();
        std::fs::write(project.join("app/models/item.py"), "class Item: ...\n").unwrap();
        std::fs::write(project.join("README.md"), "# shop\n").unwrap();

        let destination = dir.path().join("shop.zip");
        let count = ZipArchiver::new().archive(&project, &destination).unwrap();
        assert_eq!(count, 2);

        let mut archive = zip::ZipArchive::new(File::open(&destination).unwrap()).unwrap();
        let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(names, vec!["shop/README.md", "shop/app/models/item.py"]);

        let mut content = String::new();
        archive
            .by_name("shop/app/models/item.py")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "class Item: ...\n");
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result =
            ZipArchiver::new().archive(&dir.path().join("nope"), &dir.path().join("nope.zip"));
        assert!(result.is_err());
    }
}
