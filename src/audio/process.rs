//! Cue playback through an external audio player

use std::{
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::{process::Command, task::JoinHandle};
use tracing::{debug, info, trace};

use super::{AudioCue, CueHandle};
use crate::error::AudioError;

/// One running playback task
#[derive(Debug)]
struct Playback {
    cue: CueHandle,
    looping: bool,
    task: JoinHandle<()>,
}

/// Plays cue files by spawning `player <file>` on the tokio runtime.
///
/// Each playback is a task owning one child process at a time; aborting
/// the task kills the child.
#[derive(Debug)]
pub struct ProcessAudio {
    player: String,
    cues: Vec<PathBuf>,
    playing: Vec<Playback>,
    suspended: Vec<CueHandle>,
    disposed: bool,
}

impl ProcessAudio {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            cues: Vec::new(),
            playing: Vec::new(),
            suspended: Vec::new(),
            disposed: false,
        }
    }

    /// Check that the player command can be executed
    pub async fn check_player(&self) -> Result<(), AudioError> {
        Command::new(&self.player)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|_| AudioError::PlayerUnavailable(self.player.clone()))?;

        info!("Audio player {} is available", self.player);
        Ok(())
    }

    /// Register a cue file and return its handle
    pub fn load_cue(&mut self, path: impl AsRef<Path>) -> Result<CueHandle, AudioError> {
        if self.disposed {
            return Err(AudioError::Disposed);
        }

        let path = path.as_ref();
        if !path.is_file() {
            return Err(AudioError::MissingCue(path.to_path_buf()));
        }

        self.cues.push(path.to_path_buf());
        debug!("Loaded cue {} from {}", self.cues.len() - 1, path.display());
        Ok(CueHandle(self.cues.len() - 1))
    }

    /// Number of playbacks still running
    pub fn active_playbacks(&mut self) -> usize {
        self.playing.retain(|playback| !playback.task.is_finished());
        self.playing.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn spawn(&mut self, cue: CueHandle, looping: bool) {
        if self.disposed {
            trace!("Ignoring cue {:?} after dispose", cue);
            return;
        }

        let Some(path) = self.cues.get(cue.0).cloned() else {
            trace!("Ignoring unknown cue {:?}", cue);
            return;
        };

        self.playing.retain(|playback| !playback.task.is_finished());

        let task = tokio::spawn(run_player(self.player.clone(), path, looping));
        self.playing.push(Playback { cue, looping, task });
    }

    fn stop_all(&mut self) {
        for playback in self.playing.drain(..) {
            playback.task.abort();
        }
    }
}

impl AudioCue for ProcessAudio {
    fn play_looping(&mut self, cue: CueHandle) {
        self.spawn(cue, true);
    }

    fn play_once(&mut self, cue: CueHandle) {
        self.spawn(cue, false);
    }

    fn pause_all(&mut self) {
        self.suspended.clear();
        self.stop_all();
    }

    fn suspend(&mut self) {
        self.suspended = self
            .playing
            .iter()
            .filter(|playback| playback.looping && !playback.task.is_finished())
            .map(|playback| playback.cue)
            .collect();
        debug!("Suspending audio, {} looping cue(s) to resume", self.suspended.len());
        self.stop_all();
    }

    fn resume(&mut self) {
        for cue in std::mem::take(&mut self.suspended) {
            self.play_looping(cue);
        }
    }

    fn dispose(&mut self) {
        self.stop_all();
        self.suspended.clear();
        self.cues.clear();
        self.disposed = true;
        info!("Audio cues released");
    }
}

impl Drop for ProcessAudio {
    fn drop(&mut self) {
        self.stop_all();
    }
}

async fn run_player(player: String, path: PathBuf, looping: bool) {
    loop {
        let status = Command::new(&player)
            .arg(&path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await;

        match status {
            Ok(status) if !status.success() => {
                debug!("{} exited with {} playing {}", player, status, path.display());
                break;
            }
            Ok(_) => {}
            Err(e) => {
                debug!("Failed to run {}: {}", player, e);
                break;
            }
        }

        if !looping {
            break;
        }
    }
}
