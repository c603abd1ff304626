//! Init command implementation

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};
use resultxml_core::OutputConfig;
use tracing::info;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(OutputConfig::CONFIG_FILES[0]);

    let mut contents = serde_json::to_string_pretty(&OutputConfig::new()).into_diagnostic()?;
    contents.push('\n');

    if force {
        remove_existing(&config_path).into_diagnostic()?;
    }

    match create_new(&config_path) {
        Ok(mut file) => {
            file.write_all(contents.as_bytes()).into_diagnostic()?;
            info!("Created {}", config_path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(miette::miette!(
            "Config file {} already exists. Use --force to overwrite.",
            config_path.display()
        )),
        Err(e) => Err(e).into_diagnostic(),
    }
}

/// Creates `path`, refusing to follow a symlink placed there.
fn create_new(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}

fn remove_existing(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
