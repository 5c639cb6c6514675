//! In-memory capability implementations.
//!
//! Each fake is a cheap handle over shared state: clone it, move one clone
//! into the controller, and inspect through the other.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;
use std::time::Duration;

use crate::controller::ThemeController;
use crate::ports::{
    DocumentSurface, LayoutProbe, PersistenceStore, PreferenceSource, ScheduledTask, Scheduler,
    SectionRect, StorageError, TimerHandle,
};

#[derive(Debug, Default)]
struct StoreInner {
    values: HashMap<String, String>,
    writes: usize,
    unavailable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read and write fails, like localStorage in a
    /// locked-down private window.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.inner.borrow_mut().unavailable = true;
        store
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl PersistenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.borrow();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(inner.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPreference(pub bool);

impl PreferenceSource for FixedPreference {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Default)]
struct SurfaceInner {
    root_attributes: HashMap<String, String>,
    root_writes: Vec<String>,
    elements: HashMap<String, BTreeSet<String>>,
}

/// Records root attributes and per-selector class lists.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    inner: Rc<RefCell<SurfaceInner>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface where the given selectors match an element.
    pub fn with_elements<'a>(selectors: impl IntoIterator<Item = &'a str>) -> Self {
        let surface = Self::default();
        {
            let mut inner = surface.inner.borrow_mut();
            for selector in selectors {
                inner.elements.insert(selector.to_string(), BTreeSet::new());
            }
        }
        surface
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().root_attributes.get(name).cloned()
    }

    /// Every value written to any root attribute, in order.
    pub fn root_writes(&self) -> Vec<String> {
        self.inner.borrow().root_writes.clone()
    }

    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.inner
            .borrow()
            .elements
            .get(selector)
            .is_some_and(|classes| classes.contains(class))
    }
}

impl DocumentSurface for RecordingSurface {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        let mut inner = self.inner.borrow_mut();
        inner
            .root_attributes
            .insert(name.to_string(), value.to_string());
        inner.root_writes.push(value.to_string());
    }

    fn add_class(&mut self, selector: &str, class: &str) -> bool {
        match self.inner.borrow_mut().elements.get_mut(selector) {
            Some(classes) => {
                classes.insert(class.to_string());
                true
            }
            None => false,
        }
    }

    fn remove_class(&mut self, selector: &str, class: &str) {
        if let Some(classes) = self.inner.borrow_mut().elements.get_mut(selector) {
            classes.remove(class);
        }
    }
}

#[derive(Debug, Default)]
struct ClockInner {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerHandle, (Duration, ScheduledTask)>,
}

/// Deterministic scheduler driven by explicit calls to [`ManualScheduler::advance`].
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ClockInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Moves the clock forward and returns the tasks that came due, ordered
    /// by due time and then by scheduling order.
    pub fn advance(&self, by: Duration) -> Vec<(TimerHandle, ScheduledTask)> {
        let mut inner = self.inner.borrow_mut();
        inner.now += by;
        let now = inner.now;

        let mut due: Vec<(Duration, TimerHandle, ScheduledTask)> = inner
            .pending
            .iter()
            .filter(|(_, (at, _))| *at <= now)
            .map(|(handle, (at, task))| (*at, *handle, *task))
            .collect();
        due.sort_by_key(|(at, handle, _)| (*at, *handle));

        for (_, handle, _) in &due {
            inner.pending.remove(handle);
        }
        due.into_iter()
            .map(|(_, handle, task)| (handle, task))
            .collect()
    }

    /// Advances the clock and delivers every due task to `controller`.
    pub fn advance_and_fire(&self, controller: &mut ThemeController, by: Duration) {
        for (handle, task) in self.advance(by) {
            controller.fire(handle, task);
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = TimerHandle(inner.next_id);
        inner.next_id += 1;
        let due = inner.now + delay;
        inner.pending.insert(handle, (due, task));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.inner.borrow_mut().pending.remove(&handle);
    }
}

/// Fixed page geometry for one scroll sample.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    rects: HashMap<String, SectionRect>,
    scroll_y: f64,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, id: &str, top: f64, bottom: f64) -> Self {
        self.rects.insert(id.to_string(), SectionRect::new(top, bottom));
        self
    }

    pub fn scrolled_to(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }
}

impl LayoutProbe for StaticLayout {
    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        self.rects.get(id).copied()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}
