//! Audio Manager - binds the widget to the host audio element.
//! The web build talks to the element directly; native builds reach the
//! webview's element through an eval bridge.

#[cfg(not(target_arch = "wasm32"))]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use bridge::BridgeAudioHandle as AudioHandle;
#[cfg(target_arch = "wasm32")]
pub use web::WebAudioHandle as AudioHandle;

/// DOM id of the `<audio>` element the player renders.
pub const AUDIO_ELEMENT_ID: &str = "dasc-player-audio";
