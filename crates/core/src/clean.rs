use std::{fs::remove_dir_all, path::Path};

use crate::error::{Error, Result};

/// Remove each directory that exists, returning how many were removed.
pub fn clean(dirs: &[&Path]) -> Result<usize> {
    let mut removed = 0;

    for dir in dirs {
        if dir.exists() {
            remove_dir_all(dir).map_err(|e| Error::io(*dir, e))?;
            println!("Removed {}", dir.display());
            removed += 1;
        } else {
            println!("Skipped {} (not found)", dir.display());
        }
    }

    println!("Cleaned {removed} directories");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_clean_removes_existing_only() {
        let dir = tempdir().unwrap();
        let cache = dir.path().join("cache");
        let out = dir.path().join("out");
        fs::create_dir_all(cache.join("nested")).unwrap();

        let removed = clean(&[cache.as_path(), out.as_path()]).unwrap();

        assert_eq!(removed, 1);
        assert!(!cache.exists());
    }
}
