use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Story file used when none is given on the command line.
pub const DEFAULT_STORY_FILE: &str = "story.ron";

/// Cached path to the directory containing the bundled story files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from("gamebook_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("gamebook_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("gamebook_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    first_existing_dir(candidates).unwrap_or_else(|| PathBuf::from("gamebook_engine/data"))
}

fn first_existing_dir(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|candidate| candidate.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_directory_that_exists() {
        let dir = tempfile::tempdir().unwrap();
        let found = first_existing_dir([dir.path().join("missing"), dir.path().to_path_buf()]);
        assert_eq!(found.as_deref(), Some(dir.path()));
        assert_eq!(first_existing_dir([dir.path().join("missing")]), None);
    }

    #[test]
    fn data_path_joins_relative_names() {
        assert!(data_path(DEFAULT_STORY_FILE).ends_with(DEFAULT_STORY_FILE));
    }
}
