use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};

use fs2::FileExt;

/// Appends `data` to the file at `path`, creating it if necessary.
///
/// The write happens under an exclusive advisory lock that is released as
/// soon as the append has finished.
pub(crate) fn append_locked(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    FileExt::lock_exclusive(&file)?;
    let result = write_all(&mut file, data);
    let unlocked = FileExt::unlock(&file);
    result.and(unlocked)
}

fn write_all(file: &mut File, data: &[u8]) -> std::io::Result<()> {
    file.write_all(data)?;
    file.flush()
}

#[cfg(test)]
pub(crate) fn temp_path(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("mailform-{}-{name}", std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}
