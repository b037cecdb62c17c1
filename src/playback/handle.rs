// Host audio control surface and scoped event subscriptions.
use crate::config::Preload;
use crate::error::Result;
use dioxus::logger::tracing::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Notifications the host audio element emits while it works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// Playback position moved
    TimeUpdate,
    /// Duration became known for the current source
    MetadataLoaded,
    /// Playback reached the end of the source
    Ended,
}

impl HostEvent {
    pub const ALL: [HostEvent; 3] = [
        HostEvent::TimeUpdate,
        HostEvent::MetadataLoaded,
        HostEvent::Ended,
    ];

    /// DOM event name for `addEventListener`.
    pub fn dom_name(self) -> &'static str {
        match self {
            HostEvent::TimeUpdate => "timeupdate",
            HostEvent::MetadataLoaded => "loadedmetadata",
            HostEvent::Ended => "ended",
        }
    }

    pub fn from_dom_name(name: &str) -> Option<Self> {
        HostEvent::ALL.into_iter().find(|event| event.dom_name() == name)
    }
}

/// Token returned by [`MediaHandle::listen`], used to detach the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

/// The small control surface the widget drives on the host audio element.
///
/// Position and duration are in seconds, volume is in `[0, 1]`. Before
/// metadata loads the host reports a NaN duration.
pub trait MediaHandle {
    fn play(&self) -> Result<()>;
    fn pause(&self) -> Result<()>;
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn duration(&self) -> f64;
    fn set_volume(&self, level: f64);
    /// Re-point the element at a new locator and start loading it.
    fn set_source(&self, locator: &str);
    fn set_preload(&self, preload: Preload);
    fn listen(&self, event: HostEvent, callback: Box<dyn FnMut()>) -> Result<ListenerId>;
    fn unlisten(&self, id: ListenerId);
}

/// Listeners attached to one handle, detached again on drop.
///
/// Holding a `Subscription` is what keeps the widget synchronized with the
/// host. Dropping it (unmount, re-bind, early teardown) releases every
/// listener it registered.
pub struct Subscription<H: MediaHandle> {
    handle: H,
    ids: Vec<ListenerId>,
}

impl<H: MediaHandle> Subscription<H> {
    /// Register `on_event` for every [`HostEvent`].
    ///
    /// An event the host refuses to register is logged and skipped; the
    /// remaining events still subscribe.
    pub fn attach<F>(handle: H, on_event: F) -> Self
    where
        F: FnMut(HostEvent) + 'static,
    {
        let on_event = Rc::new(RefCell::new(on_event));
        let mut ids = Vec::with_capacity(HostEvent::ALL.len());

        for event in HostEvent::ALL {
            let on_event = on_event.clone();
            let callback = Box::new(move || {
                if let Ok(mut f) = on_event.try_borrow_mut() {
                    (*f)(event);
                }
            });
            match handle.listen(event, callback) {
                Ok(id) => ids.push(id),
                Err(err) => warn!("[audio] could not subscribe to {}: {err}", event.dom_name()),
            }
        }

        debug!("[audio] subscribed to {} host event(s)", ids.len());
        Self { handle, ids }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.ids.len()
    }
}

impl<H: MediaHandle> Drop for Subscription<H> {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            self.handle.unlisten(id);
        }
        debug!("[audio] host event listeners released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::testing::MockHandle;
    use std::cell::Cell;

    #[test]
    fn dom_names_round_trip() {
        for event in HostEvent::ALL {
            assert_eq!(HostEvent::from_dom_name(event.dom_name()), Some(event));
        }
        assert_eq!(HostEvent::from_dom_name("play"), None);
    }

    #[test]
    fn attach_registers_every_event() {
        let handle = MockHandle::default();
        let sub = Subscription::attach(handle.clone(), |_| {});
        assert_eq!(sub.listener_count(), 3);
        assert_eq!(handle.listener_count(), 3);
    }

    #[test]
    fn events_reach_the_callback_while_subscribed() {
        let handle = MockHandle::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = Subscription::attach(handle.clone(), move |event| sink.borrow_mut().push(event));

        handle.emit(HostEvent::MetadataLoaded);
        handle.emit(HostEvent::TimeUpdate);

        assert_eq!(
            *seen.borrow(),
            vec![HostEvent::MetadataLoaded, HostEvent::TimeUpdate]
        );
    }

    #[test]
    fn drop_releases_all_listeners() {
        let handle = MockHandle::default();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let sub = Subscription::attach(handle.clone(), move |_| counter.set(counter.get() + 1));

        handle.emit(HostEvent::TimeUpdate);
        drop(sub);
        handle.emit(HostEvent::TimeUpdate);

        assert_eq!(hits.get(), 1);
        assert_eq!(handle.listener_count(), 0);
    }

    #[test]
    fn refused_listener_is_skipped() {
        let handle = MockHandle::default();
        handle.refuse_listener(HostEvent::Ended);
        let sub = Subscription::attach(handle.clone(), |_| {});
        assert_eq!(sub.listener_count(), 2);
        drop(sub);
        assert_eq!(handle.listener_count(), 0);
    }
}
