//! Transient Message Notifier
//!
//! Shows a success/error message and hides it after a fixed delay. Only one
//! hide timer is ever outstanding: a new `show` cancels the previous one, so a
//! stale timer can never hide a newer message.

use std::cell::RefCell;
use std::time::Duration;

use gloo_timers::callback::Timeout;

use crate::models::{MessageKind, UiMessage};

/// Default message lifetime
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Where messages are displayed
pub trait MessageSink: Clone + 'static {
    fn display(&self, message: &UiMessage);
    fn hide(&self);
}

/// Schedules and cancels delayed callbacks
pub trait TimerHost {
    type Handle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Browser timers (`setTimeout` via gloo)
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimers;

impl TimerHost for GlooTimers {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }

    fn cancel(&self, handle: Timeout) {
        let _ = handle.cancel();
    }
}

pub struct Notifier<S: MessageSink, T: TimerHost> {
    sink: S,
    timers: T,
    ttl: Duration,
    pending: RefCell<Option<T::Handle>>,
}

impl<S: MessageSink, T: TimerHost> Notifier<S, T> {
    pub fn new(sink: S, timers: T, ttl: Duration) -> Self {
        Self {
            sink,
            timers,
            ttl,
            pending: RefCell::new(None),
        }
    }

    /// Display `text` and (re)start the hide timer
    pub fn show(&self, text: impl Into<String>, kind: MessageKind) {
        let message = UiMessage { text: text.into(), kind };
        self.sink.display(&message);

        if let Some(previous) = self.pending.borrow_mut().take() {
            self.timers.cancel(previous);
        }
        let sink = self.sink.clone();
        let handle = self.timers.schedule(self.ttl, Box::new(move || sink.hide()));
        *self.pending.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory sink and manually fired timers for notifier/board tests.

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::{MessageSink, TimerHost};
    use crate::models::{MessageState, UiMessage};

    #[derive(Clone, Default)]
    pub struct RecordingSink(pub Rc<RefCell<MessageState>>);

    impl RecordingSink {
        pub fn state(&self) -> MessageState {
            self.0.borrow().clone()
        }
    }

    impl MessageSink for RecordingSink {
        fn display(&self, message: &UiMessage) {
            *self.0.borrow_mut() = MessageState::shown(message.clone());
        }

        fn hide(&self) {
            self.0.borrow_mut().visible = false;
        }
    }

    struct Scheduled {
        id: usize,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    }

    /// Timers that only fire when the test says so
    #[derive(Clone, Default)]
    pub struct ManualTimers {
        queue: Rc<RefCell<Vec<Scheduled>>>,
        next_id: Rc<RefCell<usize>>,
    }

    impl ManualTimers {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        pub fn delays(&self) -> Vec<Duration> {
            self.queue.borrow().iter().map(|s| s.delay).collect()
        }

        /// Fire every pending timer in scheduling order
        pub fn fire_all(&self) {
            let due: Vec<Scheduled> = self.queue.borrow_mut().drain(..).collect();
            for scheduled in due {
                (scheduled.callback)();
            }
        }
    }

    impl TimerHost for ManualTimers {
        type Handle = usize;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> usize {
            let mut next_id = self.next_id.borrow_mut();
            let id = *next_id;
            *next_id += 1;
            self.queue.borrow_mut().push(Scheduled { id, delay, callback });
            id
        }

        fn cancel(&self, handle: usize) {
            self.queue.borrow_mut().retain(|s| s.id != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{ManualTimers, RecordingSink};
    use super::*;

    fn notifier() -> (Notifier<RecordingSink, ManualTimers>, RecordingSink, ManualTimers) {
        let sink = RecordingSink::default();
        let timers = ManualTimers::default();
        (Notifier::new(sink.clone(), timers.clone(), MESSAGE_TTL), sink, timers)
    }

    #[test]
    fn test_show_then_hide_after_timer() {
        let (notifier, sink, timers) = notifier();

        notifier.show("ok", MessageKind::Success);
        let state = sink.state();
        assert!(state.visible);
        assert_eq!(state.message.unwrap().kind, MessageKind::Success);
        assert_eq!(timers.delays(), vec![Duration::from_secs(5)]);

        timers.fire_all();
        assert!(!sink.state().visible);
    }

    #[test]
    fn test_second_show_cancels_first_timer() {
        let (notifier, sink, timers) = notifier();

        notifier.show("first", MessageKind::Success);
        notifier.show("second", MessageKind::Error);
        assert_eq!(timers.pending(), 1);

        let state = sink.state();
        assert_eq!(state.message.unwrap().text, "second");
        assert!(state.visible);
    }

    #[test]
    fn test_fired_timer_is_replaced_on_next_show() {
        let (notifier, sink, timers) = notifier();

        notifier.show("first", MessageKind::Success);
        timers.fire_all();
        notifier.show("second", MessageKind::Success);

        assert_eq!(timers.pending(), 1);
        assert!(sink.state().visible);
    }

    #[test]
    fn test_message_kind_classes() {
        assert_eq!(MessageKind::Success.class(), "success");
        assert_eq!(MessageKind::Error.class(), "error");
    }
}
