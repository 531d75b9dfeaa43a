//! Frame loop and listener bookkeeping for canvas animators
//!
//! An [`AnimatorMount`] registers one pending animation frame and a set of
//! event listeners on an [`AnimationHost`]. Teardown, explicit or on drop,
//! cancels the pending frame and removes every listener it added, so nothing
//! keeps firing after the component is gone.

/// Events an animator listens to on the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    PointerMove,
    PointerLeave,
    Resize,
}

impl HostEvent {
    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::PointerMove => "pointermove",
            HostEvent::PointerLeave => "pointerleave",
            HostEvent::Resize => "resize",
        }
    }
}

/// Scheduling primitives an animator needs from its environment
pub trait AnimationHost {
    /// Schedule the host's frame callback; returns the request id
    fn request_frame(&mut self) -> Option<i32>;

    fn cancel_frame(&mut self, id: i32);

    /// Returns `false` if the listener could not be attached
    fn add_listener(&mut self, event: HostEvent) -> bool;

    fn remove_listener(&mut self, event: HostEvent);
}

pub struct AnimatorMount<H: AnimationHost> {
    host: H,
    pending_frame: Option<i32>,
    listeners: Vec<HostEvent>,
    running: bool,
}

impl<H: AnimationHost> AnimatorMount<H> {
    /// Attach listeners for `events` and schedule the first frame
    pub fn mount(mut host: H, events: &[HostEvent]) -> Self {
        let listeners = events
            .iter()
            .copied()
            .filter(|event| host.add_listener(*event))
            .collect();
        let pending_frame = host.request_frame();
        Self {
            host,
            pending_frame,
            listeners,
            running: true,
        }
    }

    /// Call at the start of every frame callback. Schedules the next frame
    /// while the mount is live; returns whether the frame should be drawn.
    pub fn on_frame(&mut self) -> bool {
        self.pending_frame = None;
        if !self.running {
            return false;
        }
        self.pending_frame = self.host.request_frame();
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Cancel the pending frame and detach every listener. Idempotent.
    pub fn teardown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(id) = self.pending_frame.take() {
            self.host.cancel_frame(id);
        }
        for event in self.listeners.drain(..) {
            self.host.remove_listener(event);
        }
    }
}

impl<H: AnimationHost> Drop for AnimatorMount<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[derive(Default)]
    struct Registry {
        next_id: i32,
        frames: HashSet<i32>,
        listeners: Vec<HostEvent>,
    }

    #[derive(Clone, Default)]
    struct RecordingHost {
        registry: Rc<RefCell<Registry>>,
        refuse: Option<HostEvent>,
    }

    impl AnimationHost for RecordingHost {
        fn request_frame(&mut self) -> Option<i32> {
            let mut registry = self.registry.borrow_mut();
            registry.next_id += 1;
            let id = registry.next_id;
            registry.frames.insert(id);
            Some(id)
        }

        fn cancel_frame(&mut self, id: i32) {
            self.registry.borrow_mut().frames.remove(&id);
        }

        fn add_listener(&mut self, event: HostEvent) -> bool {
            if self.refuse == Some(event) {
                return false;
            }
            self.registry.borrow_mut().listeners.push(event);
            true
        }

        fn remove_listener(&mut self, event: HostEvent) {
            let mut registry = self.registry.borrow_mut();
            if let Some(pos) = registry.listeners.iter().position(|e| *e == event) {
                registry.listeners.remove(pos);
            }
        }
    }

    impl RecordingHost {
        /// Simulate the browser delivering the pending frame
        fn deliver(&self, id: i32) {
            self.registry.borrow_mut().frames.remove(&id);
        }
    }

    const EVENTS: [HostEvent; 2] = [HostEvent::PointerMove, HostEvent::Resize];

    #[test]
    fn test_mount_registers_frame_and_listeners() {
        let host = RecordingHost::default();
        let registry = host.registry.clone();
        let _mount = AnimatorMount::mount(host, &EVENTS);

        let registry = registry.borrow();
        assert_eq!(registry.frames.len(), 1);
        assert_eq!(registry.listeners, EVENTS.to_vec());
    }

    #[test]
    fn test_teardown_removes_everything() {
        let host = RecordingHost::default();
        let registry = host.registry.clone();
        let mut mount = AnimatorMount::mount(host, &EVENTS);
        mount.teardown();

        assert!(registry.borrow().frames.is_empty());
        assert!(registry.borrow().listeners.is_empty());
        assert!(!mount.is_running());
        mount.teardown();
    }

    #[test]
    fn test_drop_tears_down() {
        let host = RecordingHost::default();
        let registry = host.registry.clone();
        {
            let _mount = AnimatorMount::mount(host, &EVENTS);
        }
        assert!(registry.borrow().frames.is_empty());
        assert!(registry.borrow().listeners.is_empty());
    }

    #[test]
    fn test_each_frame_schedules_exactly_one_more() {
        let host = RecordingHost::default();
        let registry = host.registry.clone();
        let mut mount = AnimatorMount::mount(host.clone(), &EVENTS);

        for _ in 0..10 {
            let pending = *registry.borrow().frames.iter().next().unwrap();
            host.deliver(pending);
            assert!(mount.on_frame());
            assert_eq!(registry.borrow().frames.len(), 1);
        }

        drop(mount);
        assert!(registry.borrow().frames.is_empty());
    }

    #[test]
    fn test_frame_after_teardown_does_not_reschedule() {
        let host = RecordingHost::default();
        let registry = host.registry.clone();
        let mut mount = AnimatorMount::mount(host, &EVENTS);
        mount.teardown();

        assert!(!mount.on_frame());
        assert!(registry.borrow().frames.is_empty());
    }

    #[test]
    fn test_refused_listener_is_not_removed_later() {
        let host = RecordingHost {
            refuse: Some(HostEvent::Resize),
            ..Default::default()
        };
        let registry = host.registry.clone();
        let mount = AnimatorMount::mount(host, &EVENTS);
        assert_eq!(registry.borrow().listeners, vec![HostEvent::PointerMove]);
        drop(mount);
        assert!(registry.borrow().listeners.is_empty());
    }
}
