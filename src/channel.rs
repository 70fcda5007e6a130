use crate::{Action, AsListener, Listener};
use std::{
    cell::RefCell,
    collections::VecDeque,
    fmt::{self, Debug},
    rc::Rc,
};

/// A [Listener] associated with (listening to) actions published on
/// an [ActionChannel], optionally restricted to a single kind.
struct ActionSubscriber<A: Action> {
    listener: Listener<Rc<A>>,
    kind: Option<A::Kind>,
}

impl<A: Action> ActionSubscriber<A> {
    fn matches(&self, action: &A) -> bool {
        match self.kind {
            Some(kind) => kind == action.kind(),
            None => true,
        }
    }
}

impl<A: Action> Clone for ActionSubscriber<A> {
    fn clone(&self) -> Self {
        Self {
            listener: self.listener.clone(),
            kind: self.kind,
        }
    }
}

/// A broadcast pipe carrying dispatched actions to their subscribers.
///
/// The channel keeps no memory of published actions: a subscriber
/// only observes actions published after it subscribed. Actions which
/// no subscriber matches are dropped.
///
/// Publishing from within a subscriber is allowed; the action is
/// queued, and delivered once the action currently being delivered
/// has reached every subscriber.
pub struct ActionChannel<A: Action> {
    /// This lock is used to prevent delivery recursion.
    dispatch_lock: RefCell<()>,
    /// Queue of actions to be delivered by [ActionChannel::next()].
    dispatch_queue: RefCell<VecDeque<A>>,
    subscribers: RefCell<Vec<ActionSubscriber<A>>>,
}

impl<A: Action> ActionChannel<A> {
    pub fn new() -> Self {
        Self {
            dispatch_lock: RefCell::new(()),
            dispatch_queue: RefCell::new(VecDeque::new()),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Publish `action`, delivering it synchronously, in subscription
    /// order, to every live subscriber whose filter matches it.
    pub fn next(&self, action: A) {
        self.dispatch_queue.borrow_mut().push_back(action);

        if let Ok(_lock) = self.dispatch_lock.try_borrow_mut() {
            loop {
                let next_action = self.dispatch_queue.borrow_mut().pop_front();

                match next_action {
                    Some(action) => self.deliver(Rc::new(action)),
                    None => break,
                }
            }
        }
    }

    /// Subscribe a [Listener] to every action published after this
    /// call.
    ///
    /// The listener is a weak reference; when the strong reference
    /// associated with it (usually [Callback](crate::Callback)) is
    /// dropped, it stops receiving actions and is removed from this
    /// channel upon the next [ActionChannel::next()].
    pub fn subscribe<L: AsListener<Rc<A>>>(&self, listener: L) {
        self.subscribers.borrow_mut().push(ActionSubscriber {
            listener: listener.as_listener(),
            kind: None,
        });
    }

    /// Subscribe a [Listener] to the actions of the given `kind`
    /// published after this call.
    pub fn subscribe_kind<L: AsListener<Rc<A>>>(&self, listener: L, kind: A::Kind) {
        self.subscribers.borrow_mut().push(ActionSubscriber {
            listener: listener.as_listener(),
            kind: Some(kind),
        });
    }

    /// The number of subscribers which have not yet been dropped.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|subscriber| !subscriber.listener.is_dead())
            .count()
    }

    fn deliver(&self, action: Rc<A>) {
        let subscribers: Vec<ActionSubscriber<A>> = self.subscribers.borrow().clone();
        let mut delivered = 0;

        for subscriber in subscribers.iter().filter(|s| s.matches(&action)) {
            if let Some(callback) = subscriber.listener.as_callback() {
                callback.emit(action.clone());
                delivered += 1;
            }
        }

        if delivered == 0 {
            log::trace!("no subscriber for action {:?}, dropped", action.kind());
        }

        self.subscribers
            .borrow_mut()
            .retain(|subscriber| !subscriber.listener.is_dead());
    }
}

impl<A: Action> Default for ActionChannel<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> Debug for ActionChannel<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionChannel")
            .field("subscribers", &self.subscribers.borrow().len())
            .field("queued", &self.dispatch_queue.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Action, ActionChannel, Callback};
    use std::{cell::RefCell, rc::Rc};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Add(i32),
        Clear,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestKind {
        Add,
        Clear,
    }

    impl Action for TestAction {
        type Kind = TestKind;

        fn kind(&self) -> TestKind {
            match self {
                TestAction::Add(_) => TestKind::Add,
                TestAction::Clear => TestKind::Clear,
            }
        }
    }

    fn recorder(
        tag: &'static str,
        log: &Rc<RefCell<Vec<(&'static str, TestAction)>>>,
    ) -> Callback<Rc<TestAction>> {
        let log = log.clone();
        Callback::new(move |action: Rc<TestAction>| {
            log.borrow_mut().push((tag, (*action).clone()));
        })
    }

    #[test]
    fn no_replay_of_past_actions() {
        let channel = ActionChannel::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        channel.next(TestAction::Add(1));
        let callback = recorder("all", &log);
        channel.subscribe(&callback);
        assert!(log.borrow().is_empty());

        channel.next(TestAction::Add(2));
        assert_eq!(vec![("all", TestAction::Add(2))], *log.borrow());
    }

    #[test]
    fn delivers_in_subscription_order_with_filters() {
        let channel = ActionChannel::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = recorder("first", &log);
        let adds = recorder("adds", &log);
        let clears = recorder("clears", &log);
        channel.subscribe(&first);
        channel.subscribe_kind(&adds, TestKind::Add);
        channel.subscribe_kind(&clears, TestKind::Clear);

        channel.next(TestAction::Add(1));
        channel.next(TestAction::Clear);

        assert_eq!(
            vec![
                ("first", TestAction::Add(1)),
                ("adds", TestAction::Add(1)),
                ("first", TestAction::Clear),
                ("clears", TestAction::Clear),
            ],
            *log.borrow()
        );
    }

    #[test]
    fn unmatched_action_is_dropped() {
        let channel = ActionChannel::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let adds = recorder("adds", &log);
        channel.subscribe_kind(&adds, TestKind::Add);

        channel.next(TestAction::Clear);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn dropped_subscriber_is_removed() {
        let channel = ActionChannel::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let callback = recorder("all", &log);
        channel.subscribe(&callback);
        assert_eq!(1, channel.subscriber_count());

        drop(callback);
        channel.next(TestAction::Clear);
        assert!(log.borrow().is_empty());
        assert_eq!(0, channel.subscriber_count());
    }

    #[test]
    fn reentrant_next_completes_current_delivery_first() {
        let channel = Rc::new(ActionChannel::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let channel_copy = Rc::downgrade(&channel);
        let chain: Callback<Rc<TestAction>> = Callback::new(move |action: Rc<TestAction>| {
            if let TestAction::Add(_) = *action {
                if let Some(channel) = channel_copy.upgrade() {
                    channel.next(TestAction::Clear);
                }
            }
        });
        let callback = recorder("after", &log);
        channel.subscribe(&chain);
        channel.subscribe(&callback);

        channel.next(TestAction::Add(5));
        assert_eq!(
            vec![("after", TestAction::Add(5)), ("after", TestAction::Clear)],
            *log.borrow()
        );
    }
}
