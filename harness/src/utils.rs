use std::fs;
use std::path::{Path, PathBuf};
use std::io;

pub fn get_absolute_paths(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_symlink() {
            continue;
        }

        if path.is_dir() {
            paths.extend(get_absolute_paths(&path)?);
        } else {
            paths.push(fs::canonicalize(path)?);
        }
    }

    paths.sort();
    Ok(paths)
}
