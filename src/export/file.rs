//! Package output paths and atomic file writes.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Result;
use crate::qti::QtiDocuments;

use super::Exporter;
use super::package::PackageExporter;

/// Input path with its extension replaced by `.zip`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("zip")
}

/// Pick the package path: the explicit output (with `.zip` appended when it
/// has no extension), or the input path with a `.zip` extension.
pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) if path.extension().is_none() => path.with_extension("zip"),
        Some(path) => path.to_path_buf(),
        None => default_output_path(input),
    }
}

/// Write a package to `path` atomically.
///
/// The archive is written to a temporary file in the destination directory
/// and renamed over `path` only once complete, so a failure never leaves a
/// partial archive behind. The result keeps the mode of a file it replaces,
/// or gets `0o644` on Unix when new.
pub fn write_package_file(
    exporter: &PackageExporter,
    docs: &QtiDocuments,
    path: &Path,
) -> Result<PathBuf> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        exporter.export(docs, &mut writer)?;
        writer.flush()?;
    }
    apply_permissions(temp.as_file(), path)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    tracing::info!(
        path = %path.display(),
        assessment_id = %docs.assessment_id,
        "wrote QTI package"
    );
    Ok(path.to_path_buf())
}

// Temp files are created owner-only; give the final archive ordinary
// permissions before it replaces `path`.
#[cfg(unix)]
fn apply_permissions(file: &File, path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    file.set_permissions(permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn apply_permissions(file: &File, path: &Path) -> Result<()> {
    if let Ok(meta) = fs::metadata(path) {
        file.set_permissions(meta.permissions())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn docs() -> QtiDocuments {
        QtiDocuments {
            assessment_id: "gabc".to_string(),
            assessment_xml: "<questestinterop/>".to_string(),
            manifest_xml: "<manifest/>".to_string(),
        }
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path(Path::new("exam.md")), PathBuf::from("exam.zip"));
        assert_eq!(default_output_path(Path::new("dir/exam")), PathBuf::from("dir/exam.zip"));
    }

    #[test]
    fn test_resolve_output_path() {
        let input = Path::new("exam.md");
        assert_eq!(resolve_output_path(input, None), PathBuf::from("exam.zip"));
        assert_eq!(
            resolve_output_path(input, Some(Path::new("out/quiz"))),
            PathBuf::from("out/quiz.zip")
        );
        assert_eq!(
            resolve_output_path(input, Some(Path::new("quiz.pkg"))),
            PathBuf::from("quiz.pkg")
        );
    }

    #[test]
    fn test_write_package_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quiz.zip");

        let written = write_package_file(&PackageExporter::new(), &docs(), &path).unwrap();

        assert_eq!(written, path);
        let archive = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 2);
        // Only the final archive remains in the directory.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_package_file_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quiz.zip");
        std::fs::write(&path, b"stale").unwrap();

        write_package_file(&PackageExporter::new(), &docs(), &path).unwrap();

        assert_ne!(std::fs::read(&path).unwrap(), b"stale");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_package_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quiz.zip");

        write_package_file(&PackageExporter::new(), &docs(), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_replaced_package_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quiz.zip");
        fs::write(&path, b"stale").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o664)).unwrap();

        write_package_file(&PackageExporter::new(), &docs(), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o664);
    }

    #[test]
    fn test_write_package_file_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("quiz.zip");

        let result = write_package_file(&PackageExporter::new(), &docs(), &path);

        assert!(matches!(result, Err(crate::Error::Io(_))));
        assert!(!path.exists());
    }
}
