//! Fake yt-dlp / gallery-dl shell scripts for integration tests.
//!
//! Each script appends `<name> <args...>` to a shared log file. The fake
//! yt-dlp decides its result from the last argument (the URL):
//! `*photo*` prints the no-video error, `*fail*` prints a generic error,
//! anything else succeeds. The fake gallery-dl fails for `*broken*`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct FakeTools {
    pub bin: TempDir,
    pub log: PathBuf,
}

impl FakeTools {
    /// Installs fake tools; `with_gallery_dl = false` leaves the fallback missing.
    pub fn install(with_gallery_dl: bool) -> Self {
        let bin = tempfile::tempdir().unwrap();
        let log = bin.path().join("calls.log");

        write_script(
            bin.path(),
            "yt-dlp",
            &format!(
                r#"#!/bin/sh
echo "yt-dlp $*" >> "{log}"
for last; do :; done
case "$last" in
  *photo*) echo "ERROR: [twitter] 2: No video could be found in this tweet" >&2; exit 1 ;;
  *fail*) echo "ERROR: Unable to download webpage" >&2; exit 1 ;;
esac
exit 0
"#,
                log = log.display()
            ),
        );

        if with_gallery_dl {
            write_script(
                bin.path(),
                "gallery-dl",
                &format!(
                    r#"#!/bin/sh
echo "gallery-dl $*" >> "{log}"
for last; do :; done
case "$last" in
  *broken*) exit 4 ;;
esac
exit 0
"#,
                    log = log.display()
                ),
            );
        }

        Self { bin, log }
    }

    /// Logged invocations, one per line.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn write_script(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}
