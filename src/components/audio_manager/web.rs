// Browser backend: drives the widget's own <audio> element through web-sys.
use crate::config::Preload;
use crate::error::{PlayerError, Result};
use crate::playback::{HostEvent, ListenerId, MediaHandle};
use dioxus::logger::tracing::warn;
use dioxus::prelude::spawn;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlAudioElement};

type WebListener = (ListenerId, HostEvent, Closure<dyn FnMut()>);

/// Handle around the rendered `HtmlAudioElement`.
///
/// Clones share the listener table so a [`crate::playback::Subscription`]
/// can detach closures registered through any clone.
#[derive(Clone)]
pub struct WebAudioHandle {
    element: HtmlAudioElement,
    listeners: Rc<RefCell<Vec<WebListener>>>,
    next_id: Rc<Cell<u32>>,
}

impl WebAudioHandle {
    /// Look up the widget's audio element once it is in the document.
    pub fn find(element_id: &str) -> Option<Self> {
        let document = window()?.document()?;
        let element = document
            .get_element_by_id(element_id)?
            .dyn_into::<HtmlAudioElement>()
            .ok()?;
        Some(Self {
            element,
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        })
    }
}

fn js_error(err: JsValue) -> PlayerError {
    PlayerError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl MediaHandle for WebAudioHandle {
    fn play(&self) -> Result<()> {
        let promise: js_sys::Promise = self.element.play().map_err(js_error)?;
        // Autoplay policy rejections arrive asynchronously.
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                warn!("[audio] play() rejected: {}", js_error(err));
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.element.pause().map_err(js_error)
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }

    fn set_volume(&self, level: f64) {
        self.element.set_volume(level);
    }

    fn set_source(&self, locator: &str) {
        self.element.set_src(locator);
        self.element.load();
    }

    fn set_preload(&self, preload: Preload) {
        self.element.set_preload(preload.as_attr());
    }

    fn listen(&self, event: HostEvent, callback: Box<dyn FnMut()>) -> Result<ListenerId> {
        let closure = Closure::wrap(callback);
        self.element
            .add_event_listener_with_callback(event.dom_name(), closure.as_ref().unchecked_ref())
            .map_err(js_error)?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, event, closure));
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) {
        let removed = {
            let mut listeners = self.listeners.borrow_mut();
            listeners
                .iter()
                .position(|(lid, _, _)| *lid == id)
                .map(|pos| listeners.remove(pos))
        };
        if let Some((_, event, closure)) = removed {
            if let Err(err) = self
                .element
                .remove_event_listener_with_callback(event.dom_name(), closure.as_ref().unchecked_ref())
            {
                warn!("[audio] could not detach {}: {}", event.dom_name(), js_error(err));
            }
        }
    }
}
