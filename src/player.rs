use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::error;
use which::which;

use crate::errors::{Error, Result};

#[cfg(target_os = "macos")]
const OPENER: &str = "open";

#[cfg(target_os = "windows")]
const OPENER: &str = "cmd";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

/// Opens urls with the OS default handler.
///
/// The opener binary is resolved once at construction; [`Launcher::open`]
/// spawns it detached with stdout and stderr discarded.
pub struct Launcher {
    opener: PathBuf,
}

impl Launcher {
    pub fn detect() -> Result<Self> {
        let opener = which(OPENER).map_err(|_| Error::Launcher)?;

        Ok(Self { opener })
    }

    pub fn open(&self, url: &str) -> Result<()> {
        let mut cmd = Command::new(&self.opener);

        // `start` is a cmd builtin, it has no binary of its own
        #[cfg(target_os = "windows")]
        cmd.args(["/C", "start", ""]);

        cmd.arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|_| Error::Launcher)?;

        Ok(())
    }
}

/// Fire-and-forget playback: failures are logged, never returned.
pub(crate) fn play(url: &str) {
    if let Err(err) = Launcher::detect().and_then(|launcher| launcher.open(url)) {
        error!("Error: {err}");
    }
}
