use crate::components::audio_manager::{AudioHandle, AUDIO_ELEMENT_ID};
use crate::config::{PlayerConfig, SHIPPED_CONFIG};
use crate::playback::{shortcut_action, PlaybackState, Subscription};
use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton, SeekBar, VolumeControl};

/// Shared handles for the control components.
#[derive(Clone, Copy)]
pub(crate) struct PlayerContext {
    pub state: Signal<PlaybackState>,
    pub handle: Signal<Option<AudioHandle>>,
    pub config: &'static PlayerConfig,
}

impl PlayerContext {
    /// Run a control operation against the state with whatever handle is bound.
    pub fn update(&mut self, f: impl FnOnce(&mut PlaybackState, Option<&AudioHandle>)) {
        let handle: Option<AudioHandle> = (*self.handle.peek()).clone();
        self.state.with_mut(|state| f(state, handle.as_ref()));
    }
}

type Listeners = Rc<RefCell<Option<Subscription<AudioHandle>>>>;

#[component]
pub fn PlayerWidget() -> Element {
    let config: &'static PlayerConfig = &SHIPPED_CONFIG;
    let state = use_signal(|| PlaybackState::new(config));
    let mut handle = use_signal(|| None::<AudioHandle>);
    let listeners: Listeners = use_hook(|| Rc::new(RefCell::new(None)));

    let mut player = use_context_provider(|| PlayerContext {
        state,
        handle,
        config,
    });

    // Bind once the <audio> element is in the document.
    {
        let listeners = listeners.clone();
        use_effect(move || {
            let Some(audio) = AudioHandle::find(AUDIO_ELEMENT_ID) else {
                warn!("[player] audio element #{AUDIO_ELEMENT_ID} not found, controls stay inert");
                return;
            };

            state
                .peek()
                .bind(&audio, &config.tracks, config.preload);

            let observed = audio.clone();
            let mut state = state;
            let subscription = Subscription::attach(audio.clone(), move |event| {
                state.with_mut(|s| s.apply_host_event(event, &observed));
            });

            // Replacing an older subscription drops it, which detaches its listeners.
            *listeners.borrow_mut() = Some(subscription);
            handle.set(Some(audio));
            info!("[player] bound to #{AUDIO_ELEMENT_ID}");
        });
    }

    use_drop(move || {
        listeners.borrow_mut().take();
        debug!("[player] unmounted");
    });

    let on_keydown = move |evt: KeyboardEvent| {
        let modifiers = evt.modifiers();
        let modifier_held = modifiers.ctrl() || modifiers.meta() || modifiers.alt();
        let key = evt.key().to_string();
        let Some(action) = shortcut_action(
            &key,
            modifier_held,
            config.seek_step_secs,
            config.volume_step,
        ) else {
            return;
        };
        evt.prevent_default();
        player.update(|s, h| s.apply_shortcut(action, &config.tracks, config.track_change, h));
    };

    let current_index = state.read().current_track_index;

    rsx! {
        div {
            class: "player-container",
            tabindex: "0",
            onkeydown: on_keydown,
            h2 { class: "player-title", "{config.title}" }
            ul { class: "playlist",
                for (index , track) in config.tracks.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: if index == current_index { "active" } else { "" },
                        "{track.title}"
                    }
                }
            }

            div { class: "player-bar",
                div { class: "controls",
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                }
                SeekBar {}
                VolumeControl {}
            }

            audio { id: AUDIO_ELEMENT_ID }
        }
    }
}
