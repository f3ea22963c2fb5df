//! Rotated output path derivation.

use std::path::{Path, PathBuf};

/// Path for file number `index` of a sitemap set.
///
/// File 1 uses `base` verbatim; file N (N ≥ 2) becomes
/// `<dir>/<stem>_<N>.<ext>` (or `<dir>/<stem>_<N>` when `base` has no
/// extension). Built from `Path` components rather than string splicing so
/// multi-dot filenames behave predictably.
pub(crate) fn numbered_path(base: &Path, index: u32) -> PathBuf {
    if index < 2 {
        return base.to_path_buf();
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{}", stem, index),
    };

    match base.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_file_uses_base_verbatim() {
        let base = Path::new("/srv/www/sitemap.xml");
        assert_eq!(numbered_path(base, 0), base);
        assert_eq!(numbered_path(base, 1), base);
    }

    #[test]
    fn later_files_get_numbered_suffix() {
        let base = Path::new("/srv/www/sitemap.xml");
        assert_eq!(
            numbered_path(base, 2),
            Path::new("/srv/www/sitemap_2.xml")
        );
        assert_eq!(
            numbered_path(base, 10),
            Path::new("/srv/www/sitemap_10.xml")
        );
    }

    #[test]
    fn relative_base_without_directory() {
        assert_eq!(numbered_path(Path::new("site.xml"), 3), Path::new("site_3.xml"));
    }

    #[test]
    fn multi_dot_filename() {
        assert_eq!(
            numbered_path(Path::new("/tmp/archive.tar.gz"), 2),
            Path::new("/tmp/archive.tar_2.gz")
        );
    }

    #[test]
    fn no_extension() {
        assert_eq!(
            numbered_path(Path::new("/tmp/sitemap"), 2),
            Path::new("/tmp/sitemap_2")
        );
    }
}
