use super::PlayerContext;
use crate::components::Icon;
use crate::playback::{control_consumes_key, parse_control_value, ControlKind};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Keeps a control's native keys away from the widget shortcuts.
fn keep_native_keys(kind: ControlKind) -> impl FnMut(KeyboardEvent) {
    move |evt: KeyboardEvent| {
        if control_consumes_key(kind, &evt.key().to_string()) {
            evt.stop_propagation();
        }
    }
}

/// Play/Pause button - mirrors `is_playing`
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut player = use_context::<PlayerContext>();
    let playing = player.state.read().is_playing;
    let label = if playing { "Pausar" } else { "Reproducir" };

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "control-btn control-btn-primary",
            title: label,
            aria_label: label,
            onclick: move |_| player.update(|s, h| s.toggle_playback(h)),
            onkeydown: keep_native_keys(ControlKind::Button),
            if playing {
                Icon { name: "pause".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
        }
    }
}

/// Previous button - wraps to the last track from the first
#[component]
pub(super) fn PrevButton() -> Element {
    let mut player = use_context::<PlayerContext>();
    let config = player.config;

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "control-btn",
            title: "Anterior",
            aria_label: "Anterior",
            onkeydown: keep_native_keys(ControlKind::Button),
            onclick: move |_| {
                player.update(|s, h| s.select_previous(&config.tracks, config.track_change, h))
            },
            Icon { name: "prev".to_string(), class: "icon".to_string() }
        }
    }
}

/// Next button - wraps to the first track from the last
#[component]
pub(super) fn NextButton() -> Element {
    let mut player = use_context::<PlayerContext>();
    let config = player.config;

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "control-btn",
            title: "Siguiente",
            aria_label: "Siguiente",
            onkeydown: keep_native_keys(ControlKind::Button),
            onclick: move |_| {
                player.update(|s, h| s.select_next(&config.tracks, config.track_change, h))
            },
            Icon { name: "next".to_string(), class: "icon".to_string() }
        }
    }
}

/// Elapsed label, seek slider and total label
#[component]
pub(super) fn SeekBar() -> Element {
    let mut player = use_context::<PlayerContext>();
    let snapshot = player.state.read().clone();
    let max = snapshot.seek_max();
    let current = snapshot.current_time;
    let elapsed = snapshot.elapsed_label();
    let total = snapshot.total_label();

    let on_seek = move |e: Event<FormData>| {
        let max = player.state.peek().seek_max();
        match parse_control_value("seek", &e.value(), 0.0, max) {
            Ok(target) => player.update(|s, h| s.seek(target, h)),
            Err(err) => debug!("[player] {err}"),
        }
    };

    rsx! {
        div { class: "progress-wrapper",
            span { class: "time time-elapsed", "{elapsed}" }
            input {
                r#type: "range",
                class: "seek-slider",
                aria_label: "Seek",
                min: "0",
                max: "{max}",
                step: "0.1",
                value: "{current}",
                disabled: snapshot.duration.is_none(),
                oninput: on_seek,
                onkeydown: keep_native_keys(ControlKind::Slider),
            }
            span { class: "time time-total", "{total}" }
        }
    }
}

/// Volume icon and slider
#[component]
pub(super) fn VolumeControl() -> Element {
    let mut player = use_context::<PlayerContext>();
    let volume = player.state.read().volume;

    let on_volume_change = move |e: Event<FormData>| match parse_control_value(
        "volume",
        &e.value(),
        0.0,
        1.0,
    ) {
        Ok(level) => player.update(|s, h| s.set_volume(level, h)),
        Err(err) => debug!("[player] {err}"),
    };

    rsx! {
        div { class: "volume",
            Icon {
                name: if volume > 0.0 { "volume".to_string() } else { "volume-mute".to_string() },
                class: "icon".to_string(),
            }
            input {
                r#type: "range",
                class: "volume-slider",
                aria_label: "Volume",
                min: "0",
                max: "1",
                step: "0.01",
                value: "{volume}",
                oninput: on_volume_change,
                onkeydown: keep_native_keys(ControlKind::Slider),
            }
        }
    }
}
