use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Ensure the output tree for fetched resources exists
pub fn ensure_directories(base_path: &str) -> io::Result<()> {
    let base_path = Path::new(base_path);

    let dirs_to_create = vec![
        base_path.to_path_buf(),
        base_path.join("styles"),
        base_path.join("uitemplates"),
    ];

    // Probe which directories are missing
    let missing_dirs: Vec<PathBuf> = dirs_to_create
        .into_par_iter()
        .filter(|dir| !dir.exists())
        .collect();

    missing_dirs
        .par_iter()
        .try_for_each(|dir| -> io::Result<()> {
            fs::create_dir_all(dir)?;
            println!("Created directory: {}", dir.display());
            Ok(())
        })?;

    println!("All required directories are ready!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_directories_creates_output_tree() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("out");

        ensure_directories(base.to_str().unwrap()).unwrap();

        assert!(base.is_dir());
        assert!(base.join("styles").is_dir());
        assert!(base.join("uitemplates").is_dir());
    }

    #[test]
    fn test_ensure_directories_accepts_existing_tree() {
        let dir = tempdir().unwrap();
        let base = dir.path().to_str().unwrap().to_string();

        ensure_directories(&base).unwrap();
        ensure_directories(&base).unwrap();

        assert!(dir.path().join("styles").is_dir());
        assert!(dir.path().join("uitemplates").is_dir());
    }
}
