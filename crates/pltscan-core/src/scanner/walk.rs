/// Recursive enumerator built on `jwalk`.
///
/// The walk runs serially with entries sorted by file name, so two walks over
/// an unchanged tree yield the same paths in the same order. Only regular
/// files (or symlinks resolving to one) whose extension matches the target
/// are yielded; everything else is filtered here, before classification.
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::trace;

/// One item produced by the enumerator.
#[derive(Debug)]
pub enum WalkEvent {
    /// A file whose extension matched the filter.
    Match(PathBuf),
    /// A directory or entry that could not be read. The walk continues.
    Error {
        path: Option<PathBuf>,
        message: String,
    },
}

/// Walk `root` lazily, yielding files whose extension equals `extension`
/// (no leading dot) ignoring ASCII case.
pub fn matching_files<'a>(root: &Path, extension: &'a str) -> impl Iterator<Item = WalkEvent> + 'a {
    jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
        .into_iter()
        .filter_map(move |entry_result| {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    return Some(WalkEvent::Error {
                        path: err.path().map(Path::to_path_buf),
                        message: err.to_string(),
                    });
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                // jwalk reports a failed read_dir on the directory entry itself.
                return entry
                    .read_children_error
                    .as_ref()
                    .map(|err| WalkEvent::Error {
                        path: Some(entry.path()),
                        message: err.to_string(),
                    });
            }

            let path = entry.path();
            if !has_extension(&path, extension) {
                trace!("Filtered out {}", path.display());
                return None;
            }

            let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
            is_file.then_some(WalkEvent::Match(path))
        })
}

/// Case-insensitive extension check. Non-UTF-8 extensions never match.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn matches(root: &Path, ext: &str) -> Vec<PathBuf> {
        matching_files(root, ext)
            .filter_map(|e| match e {
                WalkEvent::Match(p) => Some(p),
                WalkEvent::Error { .. } => None,
            })
            .collect()
    }

    #[test]
    fn has_extension_ignores_case() {
        assert!(has_extension(Path::new("/a/b.plt"), "plt"));
        assert!(has_extension(Path::new("/a/b.PLT"), "plt"));
        assert!(has_extension(Path::new("/a/b.Plt"), "plt"));
        assert!(!has_extension(Path::new("/a/b.plt.bak"), "plt"));
        assert!(!has_extension(Path::new("/a/plt"), "plt"));
        // Dotfiles have no extension.
        assert!(!has_extension(Path::new("/a/.plt"), "plt"));
    }

    #[test]
    fn yields_only_matching_files_sorted() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::create_dir_all(root.join("a").join("x.plt")).unwrap(); // directory, not a file
        fs::write(root.join("b").join("2.plt"), b"").unwrap();
        fs::write(root.join("b").join("1.PLT"), b"").unwrap();
        fs::write(root.join("b").join("note.txt"), b"").unwrap();
        fs::write(root.join("a").join("z.plt"), b"").unwrap();

        let found = matches(root, "plt");
        assert_eq!(
            found,
            vec![
                root.join("a").join("z.plt"),
                root.join("b").join("1.PLT"),
                root.join("b").join("2.plt"),
            ]
        );
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(matches(tmp.path(), "plt").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_file_is_yielded() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("real.dat");
        fs::write(&target, b"").unwrap();
        std::os::unix::fs::symlink(&target, tmp.path().join("link.plt")).unwrap();

        assert_eq!(
            matches(tmp.path(), "plt"),
            vec![tmp.path().join("link.plt")]
        );
    }
}
