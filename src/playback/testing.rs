// In-memory host audio element for unit tests.
use super::handle::{HostEvent, ListenerId, MediaHandle};
use crate::config::Preload;
use crate::error::{PlayerError, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Every command the widget issued, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Seek(f64),
    Volume(f64),
    Source(String),
    Preload(Preload),
}

struct MockMedia {
    current_time: f64,
    duration: f64,
    volume: f64,
    source: Option<String>,
    reject_play: bool,
    refused: Vec<HostEvent>,
    commands: Vec<Command>,
}

impl Default for MockMedia {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
            source: None,
            reject_play: false,
            refused: Vec::new(),
            commands: Vec::new(),
        }
    }
}

type Listener = (ListenerId, HostEvent, Rc<RefCell<Box<dyn FnMut()>>>);

#[derive(Clone, Default)]
pub struct MockHandle {
    media: Rc<RefCell<MockMedia>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    next_id: Rc<RefCell<u32>>,
}

impl MockHandle {
    pub fn commands(&self) -> Vec<Command> {
        self.media.borrow().commands.clone()
    }

    pub fn count(&self, command: &Command) -> usize {
        self.media
            .borrow()
            .commands
            .iter()
            .filter(|c| *c == command)
            .count()
    }

    pub fn source(&self) -> Option<String> {
        self.media.borrow().source.clone()
    }

    pub fn volume(&self) -> f64 {
        self.media.borrow().volume
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn reject_play(&self) {
        self.media.borrow_mut().reject_play = true;
    }

    pub fn refuse_listener(&self, event: HostEvent) {
        self.media.borrow_mut().refused.push(event);
    }

    /// Simulate the host advancing on its own.
    pub fn set_position(&self, seconds: f64) {
        self.media.borrow_mut().current_time = seconds;
    }

    pub fn set_duration(&self, seconds: f64) {
        self.media.borrow_mut().duration = seconds;
    }

    /// Fire `event` at every listener registered for it.
    pub fn emit(&self, event: HostEvent) {
        let callbacks: Vec<_> = self
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
}

impl MediaHandle for MockHandle {
    fn play(&self) -> Result<()> {
        let mut media = self.media.borrow_mut();
        if media.reject_play {
            return Err(PlayerError::Host("NotAllowedError".to_string()));
        }
        media.commands.push(Command::Play);
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.media.borrow_mut().commands.push(Command::Pause);
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.media.borrow().current_time
    }

    fn set_current_time(&self, seconds: f64) {
        let mut media = self.media.borrow_mut();
        media.current_time = seconds;
        media.commands.push(Command::Seek(seconds));
    }

    fn duration(&self) -> f64 {
        self.media.borrow().duration
    }

    fn set_volume(&self, level: f64) {
        let mut media = self.media.borrow_mut();
        media.volume = level;
        media.commands.push(Command::Volume(level));
    }

    fn set_source(&self, locator: &str) {
        let mut media = self.media.borrow_mut();
        media.source = Some(locator.to_string());
        media.current_time = 0.0;
        media.duration = f64::NAN;
        media.commands.push(Command::Source(locator.to_string()));
    }

    fn set_preload(&self, preload: Preload) {
        self.media.borrow_mut().commands.push(Command::Preload(preload));
    }

    fn listen(&self, event: HostEvent, callback: Box<dyn FnMut()>) -> Result<ListenerId> {
        if self.media.borrow().refused.contains(&event) {
            return Err(PlayerError::Host(format!("{} refused", event.dom_name())));
        }
        let mut next = self.next_id.borrow_mut();
        let id = ListenerId(*next);
        *next += 1;
        self.listeners
            .borrow_mut()
            .push((id, event, Rc::new(RefCell::new(callback))));
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _, _)| *lid != id);
    }
}
