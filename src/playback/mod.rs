//! Playback state and the control operations that drive the host element.
//!
//! Everything here is platform independent. The Dioxus component keeps a
//! [`PlaybackState`] in a signal and hands each operation whichever
//! [`MediaHandle`] is bound at the time, or `None` before mount completes.

mod handle;
mod input;
mod shortcuts;
#[cfg(test)]
pub(crate) mod testing;

pub use handle::{HostEvent, ListenerId, MediaHandle, Subscription};
pub use input::parse_control_value;
pub use shortcuts::{control_consumes_key, shortcut_action, ControlKind, ShortcutAction};

use crate::config::{PlayerConfig, Preload, Track, TrackChangePolicy};
use crate::utils::{format_duration, format_time};
use dioxus::logger::tracing::{debug, warn};

/// Session-scoped mirror of the host element's transport state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// Seconds, never negative and never past a known duration
    pub current_time: f64,
    /// `None` until the host reports metadata for the current source
    pub duration: Option<f64>,
    /// In `[0, 1]`
    pub volume: f64,
    pub current_track_index: usize,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: None,
            volume: 1.0,
            current_track_index: 0,
        }
    }
}

/// A host duration is only usable once it is a real, non-negative number.
fn known_duration(raw: f64) -> Option<f64> {
    (raw.is_finite() && raw >= 0.0).then_some(raw)
}

impl PlaybackState {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            volume: config.initial_volume.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    /// Upper bound of the seek slider; zero while the duration is unknown.
    pub fn seek_max(&self) -> f64 {
        self.duration.unwrap_or(0.0)
    }

    pub fn elapsed_label(&self) -> String {
        format_time(self.current_time)
    }

    pub fn total_label(&self) -> String {
        format_duration(self.duration)
    }

    /// Push the current track and volume onto a freshly bound handle.
    pub fn bind<H: MediaHandle + ?Sized>(&self, handle: &H, tracks: &[Track], preload: Preload) {
        handle.set_preload(preload);
        if let Some(track) = tracks.get(self.current_track_index) {
            handle.set_source(&track.source);
        }
        handle.set_volume(self.volume);
    }

    pub fn toggle_playback<H: MediaHandle + ?Sized>(&mut self, handle: Option<&H>) {
        let Some(handle) = handle else {
            debug!("[player] toggle ignored, no audio element bound");
            return;
        };

        if self.is_playing {
            if let Err(err) = handle.pause() {
                warn!("[player] pause failed: {err}");
            }
            self.is_playing = false;
        } else {
            match handle.play() {
                Ok(()) => self.is_playing = true,
                Err(err) => warn!("[player] play refused: {err}"),
            }
        }
    }

    /// Move the host position and mirror it before the host confirms.
    pub fn seek<H: MediaHandle + ?Sized>(&mut self, target_seconds: f64, handle: Option<&H>) {
        let Some(handle) = handle else {
            debug!("[player] seek ignored, no audio element bound");
            return;
        };
        if target_seconds.is_nan() {
            return;
        }

        let target = target_seconds.clamp(0.0, self.seek_max());
        handle.set_current_time(target);
        self.current_time = target;
    }

    /// Local volume always follows the slider; the host follows when bound.
    pub fn set_volume<H: MediaHandle + ?Sized>(&mut self, level: f64, handle: Option<&H>) {
        if level.is_nan() {
            return;
        }

        let level = level.clamp(0.0, 1.0);
        self.volume = level;
        if let Some(handle) = handle {
            handle.set_volume(level);
        }
    }

    pub fn select_next<H: MediaHandle + ?Sized>(
        &mut self,
        tracks: &[Track],
        policy: TrackChangePolicy,
        handle: Option<&H>,
    ) {
        if tracks.is_empty() {
            return;
        }
        let next = (self.current_track_index + 1) % tracks.len();
        self.change_track(next, tracks, policy, handle);
    }

    pub fn select_previous<H: MediaHandle + ?Sized>(
        &mut self,
        tracks: &[Track],
        policy: TrackChangePolicy,
        handle: Option<&H>,
    ) {
        if tracks.is_empty() {
            return;
        }
        let prev = if self.current_track_index == 0 {
            tracks.len() - 1
        } else {
            self.current_track_index - 1
        };
        self.change_track(prev, tracks, policy, handle);
    }

    fn change_track<H: MediaHandle + ?Sized>(
        &mut self,
        index: usize,
        tracks: &[Track],
        policy: TrackChangePolicy,
        handle: Option<&H>,
    ) {
        // A one-track list wraps onto itself; the source stays put.
        if index == self.current_track_index {
            return;
        }
        self.current_track_index = index;
        self.current_time = 0.0;
        self.duration = None;

        let Some(handle) = handle else {
            return;
        };
        let Some(track) = tracks.get(index) else {
            return;
        };

        debug!("[player] switching to track {index}: {}", track.title);
        handle.set_source(&track.source);

        match policy {
            TrackChangePolicy::Resume if self.is_playing => {
                if let Err(err) = handle.play() {
                    warn!("[player] could not resume on new track: {err}");
                    self.is_playing = false;
                }
            }
            TrackChangePolicy::Resume => {}
            TrackChangePolicy::Stop => {
                if self.is_playing {
                    if let Err(err) = handle.pause() {
                        warn!("[player] pause failed: {err}");
                    }
                }
                self.is_playing = false;
            }
        }
    }

    /// Copy the host's live position and duration after it notifies us.
    pub fn apply_host_event<H: MediaHandle + ?Sized>(&mut self, event: HostEvent, handle: &H) {
        match event {
            HostEvent::TimeUpdate | HostEvent::MetadataLoaded => {
                self.duration = known_duration(handle.duration());
                let position = handle.current_time();
                if position.is_finite() {
                    let position = position.max(0.0);
                    self.current_time = match self.duration {
                        Some(duration) => position.min(duration),
                        None => position,
                    };
                }
            }
            HostEvent::Ended => {
                self.is_playing = false;
                if let Some(duration) = self.duration {
                    self.current_time = duration;
                }
            }
        }
    }

    pub fn apply_shortcut<H: MediaHandle + ?Sized>(
        &mut self,
        action: ShortcutAction,
        tracks: &[Track],
        policy: TrackChangePolicy,
        handle: Option<&H>,
    ) {
        match action {
            ShortcutAction::TogglePlayback => self.toggle_playback(handle),
            ShortcutAction::SeekBy(delta) => self.seek(self.current_time + delta, handle),
            ShortcutAction::VolumeBy(delta) => self.set_volume(self.volume + delta, handle),
            ShortcutAction::Previous => self.select_previous(tracks, policy, handle),
            ShortcutAction::Next => self.select_next(tracks, policy, handle),
        }
    }
}
