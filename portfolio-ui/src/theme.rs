use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use portfolio_core::{
    ScheduledTask, Scheduler, ThemeConfig, ThemeController, ThemeEnvironment, ThemeState,
    TimerHandle,
};

use crate::interop::{DomSurface, LocalStorageStore, MediaQueryPreference};

type Dispatch = Rc<dyn Fn(TimerHandle, ScheduledTask)>;

/// Browser timers. Each scheduled task sleeps on a `TimeoutFuture`; a
/// cancelled task still wakes up but finds its flag set and does nothing.
pub struct WebScheduler {
    next_id: u64,
    pending: Rc<RefCell<HashMap<TimerHandle, Rc<Cell<bool>>>>>,
    dispatch: Dispatch,
}

impl WebScheduler {
    pub fn new(dispatch: impl Fn(TimerHandle, ScheduledTask) + 'static) -> Self {
        Self {
            next_id: 0,
            pending: Rc::new(RefCell::new(HashMap::new())),
            dispatch: Rc::new(dispatch),
        }
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let cancelled = Rc::new(Cell::new(false));
        self.pending.borrow_mut().insert(handle, cancelled.clone());

        let pending = self.pending.clone();
        let dispatch = self.dispatch.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(millis).await;
            pending.borrow_mut().remove(&handle);
            if !cancelled.get() {
                dispatch(handle, task);
            }
        });

        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(cancelled) = self.pending.borrow_mut().remove(&handle) {
            cancelled.set(true);
        }
    }
}

impl Drop for WebScheduler {
    fn drop(&mut self) {
        for (_, cancelled) in self.pending.borrow_mut().drain() {
            cancelled.set(true);
        }
    }
}

/// Context handle to the page's theme controller.
#[derive(Clone)]
pub struct ThemeHandle {
    controller: Rc<RefCell<ThemeController>>,
    state: Signal<ThemeState>,
}

impl PartialEq for ThemeHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl ThemeHandle {
    /// Reactive read; components calling this re-render on theme changes.
    pub fn state(&self) -> ThemeState {
        (self.state)()
    }

    pub fn toggle(&self) {
        self.controller.borrow_mut().toggle_theme();
    }

    fn initialize(&self) {
        self.controller.borrow_mut().initialize();
    }
}

fn build_controller(config: ThemeConfig, state: Signal<ThemeState>) -> Rc<RefCell<ThemeController>> {
    let controller = Rc::new_cyclic(|weak: &Weak<RefCell<ThemeController>>| {
        let weak = weak.clone();
        let scheduler = WebScheduler::new(move |handle, task| {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().fire(handle, task);
            }
        });

        let env = ThemeEnvironment {
            store: Box::new(LocalStorageStore),
            preference: Box::new(MediaQueryPreference),
            surface: Box::new(DomSurface),
            scheduler: Box::new(scheduler),
        };
        RefCell::new(ThemeController::new(config, env))
    });

    let mut state = state;
    controller
        .borrow_mut()
        .subscribe(Box::new(move |next| state.set(next)));
    controller
}

/// Creates the theme controller for this subtree, provides it as context and
/// resolves the startup theme once on mount.
pub fn use_theme_provider(config: ThemeConfig) -> ThemeHandle {
    let default_theme = config.default_theme;
    let state = use_signal(|| ThemeState {
        current: default_theme,
        transitioning: false,
    });
    let handle = use_context_provider(move || ThemeHandle {
        controller: build_controller(config, state),
        state,
    });

    let mut initialized = use_signal(|| false);
    {
        let handle = handle.clone();
        use_effect(move || {
            if *initialized.peek() {
                return;
            }
            initialized.set(true);
            handle.initialize();
            dioxus_logger::tracing::info!("theme initialized: {}", handle.controller.borrow().current());
        });
    }

    handle
}

pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}
