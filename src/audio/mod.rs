//! Audio cue playback
//!
//! The timer drives cues through the [`AudioCue`] trait. Two backends are
//! provided: [`ProcessAudio`], which runs an external player per cue, and
//! [`SilentAudio`] for hosts without sound.

pub mod process;

pub use process::ProcessAudio;

use serde::Serialize;

/// Handle to a loaded cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CueHandle(pub(crate) usize);

/// Cues used by the countdown. A missing cue is simply not played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CueSet {
    pub ticking: Option<CueHandle>,
    pub bell: Option<CueHandle>,
}

/// Fire-and-forget cue playback plus the host lifecycle hooks
pub trait AudioCue {
    fn play_looping(&mut self, cue: CueHandle);
    fn play_once(&mut self, cue: CueHandle);
    fn pause_all(&mut self);

    /// Host went to the background
    fn suspend(&mut self);
    /// Host came back to the foreground
    fn resume(&mut self);
    /// Host is shutting down; release every cue
    fn dispose(&mut self);
}

impl<A: AudioCue + ?Sized> AudioCue for Box<A> {
    fn play_looping(&mut self, cue: CueHandle) {
        (**self).play_looping(cue)
    }

    fn play_once(&mut self, cue: CueHandle) {
        (**self).play_once(cue)
    }

    fn pause_all(&mut self) {
        (**self).pause_all()
    }

    fn suspend(&mut self) {
        (**self).suspend()
    }

    fn resume(&mut self) {
        (**self).resume()
    }

    fn dispose(&mut self) {
        (**self).dispose()
    }
}

/// Backend that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioCue for SilentAudio {
    fn play_looping(&mut self, _cue: CueHandle) {}
    fn play_once(&mut self, _cue: CueHandle) {}
    fn pause_all(&mut self) {}
    fn suspend(&mut self) {}
    fn resume(&mut self) {}
    fn dispose(&mut self) {}
}
