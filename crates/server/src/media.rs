//! Sound selection for the cabinet UI.
//!
//! Layout under the sounds directory:
//!
//! ```text
//! sounds/
//!   ching.wav
//!   win/
//!     gona_win.mp3   (preferred win jingle, optional)
//!     victory.mp3
//!     *.mp3
//!   loose/
//!     *.mp3
//! ```

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;

const WIN_DIR: &str = "win";
const LOOSE_DIR: &str = "loose";
const WIN_JINGLE: &str = "gona_win.mp3";
const VICTORY: &str = "victory.mp3";
const CHING: &str = "ching.wav";

/// Resolves media kinds requested by the UI to files on disk.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    sounds_dir: PathBuf,
}

impl MediaLibrary {
    /// Kinds the UI may request.
    pub const KINDS: [&'static str; 4] = ["victory", "ching", "win", "loose"];

    pub fn new(sounds_dir: PathBuf) -> Self {
        Self { sounds_dir }
    }

    /// Pick the file for `kind`, or `None` if the kind is unknown or the file
    /// is missing.
    ///
    /// `win` prefers the dedicated jingle and otherwise picks any win track
    /// except the victory fanfare; `loose` picks any losing track.
    pub fn resolve(&self, kind: &str) -> Option<PathBuf> {
        let win_dir = self.sounds_dir.join(WIN_DIR);
        let path = match kind.to_lowercase().as_str() {
            "victory" => win_dir.join(VICTORY),
            "ching" => self.sounds_dir.join(CHING),
            "win" => {
                let jingle = win_dir.join(WIN_JINGLE);
                if jingle.is_file() {
                    jingle
                } else {
                    pick_mp3(&win_dir, &[VICTORY])?
                }
            }
            "loose" => pick_mp3(&self.sounds_dir.join(LOOSE_DIR), &[])?,
            _ => return None,
        };
        path.is_file().then_some(path)
    }
}

/// Random `.mp3` file in `dir`, skipping names in `exclude`.
fn pick_mp3(dir: &Path, exclude: &[&str]) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"))
        })
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| !exclude.contains(&name))
        })
        .collect();
    candidates.choose(&mut rand::thread_rng()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sounds() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("win")).unwrap();
        std::fs::create_dir_all(dir.path().join("loose")).unwrap();
        dir
    }

    fn touch(path: PathBuf) {
        std::fs::write(path, b"audio").unwrap();
    }

    #[test]
    fn test_unknown_kind() {
        let dir = sounds();
        let library = MediaLibrary::new(dir.path().to_path_buf());
        assert!(library.resolve("jackpot").is_none());
    }

    #[test]
    fn test_missing_files_resolve_to_none() {
        let dir = sounds();
        let library = MediaLibrary::new(dir.path().to_path_buf());
        assert!(library.resolve("victory").is_none());
        assert!(library.resolve("ching").is_none());
        assert!(library.resolve("win").is_none());
        assert!(library.resolve("loose").is_none());
    }

    #[test]
    fn test_win_prefers_jingle() {
        let dir = sounds();
        touch(dir.path().join("win/gona_win.mp3"));
        touch(dir.path().join("win/other.mp3"));
        let library = MediaLibrary::new(dir.path().to_path_buf());
        assert_eq!(
            library.resolve("WIN").unwrap(),
            dir.path().join("win/gona_win.mp3")
        );
    }

    #[test]
    fn test_win_never_picks_victory() {
        let dir = sounds();
        touch(dir.path().join("win/victory.mp3"));
        let library = MediaLibrary::new(dir.path().to_path_buf());
        assert!(library.resolve("win").is_none());

        touch(dir.path().join("win/fanfare.mp3"));
        for _ in 0..10 {
            assert_eq!(
                library.resolve("win").unwrap(),
                dir.path().join("win/fanfare.mp3")
            );
        }
        assert_eq!(
            library.resolve("victory").unwrap(),
            dir.path().join("win/victory.mp3")
        );
    }

    #[test]
    fn test_loose_picks_only_mp3() {
        let dir = sounds();
        touch(dir.path().join("loose/notes.txt"));
        touch(dir.path().join("loose/sad.MP3"));
        let library = MediaLibrary::new(dir.path().to_path_buf());
        assert_eq!(
            library.resolve("loose").unwrap(),
            dir.path().join("loose/sad.MP3")
        );
    }
}
