use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_core::{
    DocumentSurface, LayoutProbe, PersistenceStore, PreferenceSource, ScrollThrottle,
    SectionRect, StorageError,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Storage, Window};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl PersistenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryPreference;

impl PreferenceSource for MediaQueryPreference {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|list| list.matches())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DomSurface;

impl DocumentSurface for DomSurface {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        if let Some(root) = document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute(name, value);
        }
    }

    fn add_class(&mut self, selector: &str, class: &str) -> bool {
        let Some(element) = query(selector) else {
            return false;
        };
        element.class_list().add_1(class).is_ok()
    }

    fn remove_class(&mut self, selector: &str, class: &str) {
        if let Some(element) = query(selector) {
            let _ = element.class_list().remove_1(class);
        }
    }
}

/// Live page geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLayout;

impl LayoutProbe for DomLayout {
    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        let rect = document()?.get_element_by_id(id)?.get_bounding_client_rect();
        Some(SectionRect::new(rect.top(), rect.bottom()))
    }

    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
}

/// `(scroll_height, viewport_height)` of the document, in CSS pixels.
pub fn page_extent() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (scroll_height, viewport_height)
}

/// Smooth-scrolls the section anchor into view. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        dioxus_logger::tracing::debug!(id, "no anchor for section");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Window scroll listener, throttled to one callback per animation frame.
/// Dropping it removes the listener and cancels any queued frame.
pub struct ScrollSubscription {
    window: Window,
    pending_frame: Rc<Cell<Option<i32>>>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
    on_scroll: Closure<dyn FnMut(web_sys::Event)>,
}

impl ScrollSubscription {
    pub fn attach(on_frame: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let throttle = Rc::new(RefCell::new(ScrollThrottle::new()));
        let pending_frame = Rc::new(Cell::new(None::<i32>));

        let frame_closure = {
            let throttle = throttle.clone();
            let pending_frame = pending_frame.clone();
            let mut on_frame = on_frame;
            Rc::new(Closure::<dyn FnMut()>::new(move || {
                throttle.borrow_mut().frame();
                pending_frame.set(None);
                on_frame();
            }))
        };

        let on_scroll = {
            let window = window.clone();
            let frame_closure = frame_closure.clone();
            let pending_frame = pending_frame.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                if !throttle.borrow_mut().request() {
                    return;
                }
                let callback: &JsValue = (*frame_closure).as_ref();
                match window.request_animation_frame(callback.unchecked_ref()) {
                    Ok(id) => pending_frame.set(Some(id)),
                    Err(_) => throttle.borrow_mut().frame(),
                }
            })
        };

        if let Err(e) = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        {
            dioxus_logger::tracing::warn!("failed to attach scroll listener: {:?}", e);
            return None;
        }

        Some(Self {
            window,
            pending_frame,
            _on_frame: frame_closure,
            on_scroll,
        })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some(id) = self.pending_frame.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}
