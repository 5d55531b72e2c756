//! Test-only allocation tracking, for detecting leaked elements and
//! observing the order in which elements are dropped.
use std::{
    cell::RefCell,
    format,
    string::String,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, Weak,
    },
    vec::Vec,
};

#[derive(Clone, Debug, Default)]
pub(crate) struct Registry(Arc<Mutex<RegistryInner>>);

#[derive(Debug, Default)]
struct RegistryInner {
    tracks: Vec<Weak<TrackData>>,
    dropped: Vec<usize>,
    next_id: usize,
}

#[derive(Debug)]
struct TrackData {
    was_leaked: AtomicBool,
    location: &'static core::panic::Location<'static>,
    id: usize,
    registry: Weak<Mutex<RegistryInner>>,
}

/// A leak-tracked marker, registered with the current thread's [`Registry`]
/// when it is created and released when it is dropped.
#[derive(Debug)]
pub(crate) struct Track {
    data: Option<Arc<TrackData>>,
}

thread_local! {
    static REGISTRY: RefCell<Option<Registry>> = const { RefCell::new(None) };
}

/// Runs `f` with a fresh [`Registry`] set as the default for this thread,
/// and panics if any value tracked while `f` ran is still alive afterwards.
#[track_caller]
pub(crate) fn check(f: impl FnOnce(&Registry)) {
    let registry = Registry::default();
    let _tracking = registry.set_default();
    f(&registry);
    registry.check();
}

// === impl Registry ===

impl Registry {
    fn current() -> Option<Registry> {
        REGISTRY.with(|current| current.borrow().clone())
    }

    fn set_default(&self) -> impl Drop {
        struct Unset(Option<Registry>);
        impl Drop for Unset {
            fn drop(&mut self) {
                let _ = REGISTRY.try_with(|current| *current.borrow_mut() = self.0.take());
            }
        }

        REGISTRY.with(|current| {
            let mut current = current.borrow_mut();
            let unset = Unset(current.clone());
            *current = Some(self.clone());
            unset
        })
    }

    #[track_caller]
    fn start_tracking() -> Option<Arc<TrackData>> {
        // we don't use `Option::map` here because it creates a closure, which
        // breaks `#[track_caller]`.
        #[allow(clippy::manual_map)]
        match Self::current() {
            Some(registry) => Some(registry.insert()),
            _ => None,
        }
    }

    #[track_caller]
    fn insert(&self) -> Arc<TrackData> {
        let mut inner = self.0.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        let location = core::panic::Location::caller();
        let data = Arc::new(TrackData {
            location,
            id,
            was_leaked: AtomicBool::new(false),
            registry: Arc::downgrade(&self.0),
        });
        test_trace!(id, allocated_at = %location, "started tracking allocation");
        inner.tracks.push(Arc::downgrade(&data));
        data
    }

    /// Returns the number of tracked values which are still alive.
    pub(crate) fn live(&self) -> usize {
        self.0
            .lock()
            .unwrap()
            .tracks
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Returns the number of values tracked by this registry so far.
    pub(crate) fn tracked(&self) -> usize {
        self.0.lock().unwrap().next_id
    }

    /// Returns the IDs of every tracked value that has been dropped, in the
    /// order they were dropped in.
    pub(crate) fn dropped(&self) -> Vec<usize> {
        self.0.lock().unwrap().dropped.clone()
    }

    #[track_caller]
    pub(crate) fn check(&self) {
        let leaked = self
            .0
            .lock()
            .unwrap()
            .tracks
            .iter()
            .filter_map(|weak| {
                let data = weak.upgrade()?;
                data.was_leaked.store(true, Ordering::SeqCst);
                Some(format!(
                    " - id {}, allocated at {}",
                    data.id, data.location
                ))
            })
            .collect::<Vec<String>>();
        if !leaked.is_empty() {
            let leaked = leaked.join("\n  ");
            panic!("the following allocations were leaked:\n  {leaked}");
        }
    }
}

// === impl TrackData ===

impl Drop for TrackData {
    fn drop(&mut self) {
        if self.was_leaked.load(Ordering::SeqCst) {
            return;
        }

        test_trace!(id = self.id, "dropped a tracked allocation");
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut inner) = registry.lock() {
                inner.dropped.push(self.id);
            }
        }
    }
}

// === impl Track ===

impl Track {
    /// Starts tracking a new allocation, if a [`Registry`] is set for this
    /// thread.
    #[inline(always)]
    #[track_caller]
    pub(crate) fn new() -> Track {
        Track {
            data: Registry::start_tracking(),
        }
    }

    /// Returns the ID assigned to this allocation by the current registry.
    pub(crate) fn id(&self) -> Option<usize> {
        self.data.as_ref().map(|data| data.id)
    }
}
