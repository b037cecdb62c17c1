// Desktop-webview backend: the <audio> element lives in the webview, so
// commands go out through `document::eval` and host events come back on a
// long-lived eval channel.
use crate::config::Preload;
use crate::error::Result;
use crate::playback::{HostEvent, ListenerId, MediaHandle};
use dioxus::logger::tracing::{debug, warn};
use dioxus::core::Task;
use dioxus::prelude::*;
use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// What the webview reports with every forwarded media event.
#[derive(Debug, Clone, Deserialize)]
struct BridgeMessage {
    event: String,
    current_time: f64,
    duration: Option<f64>,
}

type BridgeListener = (ListenerId, HostEvent, Rc<RefCell<Box<dyn FnMut()>>>);

#[derive(Default)]
struct BridgeShared {
    current_time: Cell<f64>,
    duration: Cell<f64>,
    listeners: RefCell<Vec<BridgeListener>>,
    next_id: Cell<u32>,
    pump: RefCell<Option<Task>>,
}

/// Handle that mirrors the webview's audio element.
///
/// Position and duration answer from the last snapshot the webview pushed;
/// commands are forwarded as they come.
#[derive(Clone)]
pub struct BridgeAudioHandle {
    element_id: String,
    shared: Rc<BridgeShared>,
}

impl BridgeAudioHandle {
    pub fn find(element_id: &str) -> Option<Self> {
        let shared = BridgeShared::default();
        shared.duration.set(f64::NAN);
        Some(Self {
            element_id: element_id.to_string(),
            shared: Rc::new(shared),
        })
    }

    fn element_literal(&self) -> String {
        serde_json::to_string(&self.element_id).unwrap_or_else(|_| "\"\"".to_string())
    }

    fn command(&self, body: &str) {
        let script = format!(
            r#"(function () {{
                const audio = document.getElementById({id});
                if (!audio) return false;
                {body}
                return true;
            }})();"#,
            id = self.element_literal()
        );
        let _ = document::eval(&script);
    }

    fn start_pump(&self) {
        let names: Vec<&str> = HostEvent::ALL.iter().map(|e| e.dom_name()).collect();
        let names = serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string());
        let script = format!(
            r#"
            const audio = document.getElementById({id});
            if (audio) {{
              const bridge = window.__dascPlayerBridge || (window.__dascPlayerBridge = {{}});
              if (typeof bridge.detach === "function") bridge.detach();
              const names = {names};
              const forward = (event) => {{
                dioxus.send({{
                  event: event.type,
                  current_time: Number.isFinite(audio.currentTime) ? audio.currentTime : 0,
                  duration: Number.isFinite(audio.duration) ? audio.duration : null,
                }});
              }};
              names.forEach((name) => audio.addEventListener(name, forward));
              bridge.detach = () => {{
                names.forEach((name) => audio.removeEventListener(name, forward));
                bridge.detach = null;
              }};
              await new Promise(() => {{}});
            }}
            "#,
            id = self.element_literal()
        );

        let shared = self.shared.clone();
        let task = spawn(async move {
            let mut eval = document::eval(&script);
            loop {
                let message = match eval.recv::<BridgeMessage>().await {
                    Ok(message) => message,
                    Err(err) => {
                        warn!("[audio] bridge channel closed: {err:?}");
                        break;
                    }
                };
                let Some(event) = HostEvent::from_dom_name(&message.event) else {
                    continue;
                };

                shared.current_time.set(message.current_time);
                shared.duration.set(message.duration.unwrap_or(f64::NAN));

                let callbacks: Vec<_> = shared
                    .listeners
                    .borrow()
                    .iter()
                    .filter(|(_, e, _)| *e == event)
                    .map(|(_, _, cb)| cb.clone())
                    .collect();
                for cb in callbacks {
                    let mut callback = cb.borrow_mut();
                    (*callback)();
                }
            }
            // Channel gone; the next `listen` starts a fresh pump.
            shared.pump.borrow_mut().take();
            debug!("[audio] bridge event pump exited");
        });
        *self.shared.pump.borrow_mut() = Some(task);
        debug!("[audio] bridge event pump started");
    }

    fn stop_pump(&self) {
        if let Some(task) = self.shared.pump.borrow_mut().take() {
            task.cancel();
            let _ = document::eval(
                r#"(function () {
                    const bridge = window.__dascPlayerBridge;
                    if (bridge && typeof bridge.detach === "function") bridge.detach();
                })();"#,
            );
            debug!("[audio] bridge event pump stopped");
        }
    }
}

impl MediaHandle for BridgeAudioHandle {
    fn play(&self) -> Result<()> {
        self.command("audio.play().catch(() => {});");
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.command("audio.pause();");
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.shared.current_time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.shared.current_time.set(seconds);
        self.command(&format!("audio.currentTime = {};", seconds.max(0.0)));
    }

    fn duration(&self) -> f64 {
        self.shared.duration.get()
    }

    fn set_volume(&self, level: f64) {
        self.command(&format!("audio.volume = {};", level.clamp(0.0, 1.0)));
    }

    fn set_source(&self, locator: &str) {
        self.shared.current_time.set(0.0);
        self.shared.duration.set(f64::NAN);
        let locator = serde_json::to_string(locator).unwrap_or_else(|_| "\"\"".to_string());
        self.command(&format!("audio.src = {locator}; audio.load();"));
    }

    fn set_preload(&self, preload: Preload) {
        self.command(&format!("audio.preload = \"{}\";", preload.as_attr()));
    }

    fn listen(&self, event: HostEvent, callback: Box<dyn FnMut()>) -> Result<ListenerId> {
        let id = ListenerId(self.shared.next_id.get());
        self.shared.next_id.set(id.0 + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, event, Rc::new(RefCell::new(callback))));
        if self.shared.pump.borrow().is_none() {
            self.start_pump();
        }
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) {
        let now_empty = {
            let mut listeners = self.shared.listeners.borrow_mut();
            listeners.retain(|(lid, _, _)| *lid != id);
            listeners.is_empty()
        };
        if now_empty {
            self.stop_pump();
        }
    }
}
