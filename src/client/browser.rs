//! Browser host for the notification center and page switcher.
//!
//! Forwards pointer and click events to the center and keeps one `setTimeout`
//! armed for its next deadline.

use crate::clock::{Clock, PerformanceClock};
use crate::dom::{WebDom, warn_on_error};
use crate::pages::PageSwitcher;
use crate::toast::{NotificationCenter, ToastId, ToastKind};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, Event};

/// Notification center wired to the live document.
pub type BrowserCenter = NotificationCenter<WebDom, PerformanceClock>;

/// Owns the browser notification center and its event listeners.
///
/// Clones share the same center.
#[derive(Clone)]
pub struct BrowserNotifications {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    this: Weak<RefCell<Inner>>,
    center: BrowserCenter,
    listeners: HashMap<ToastId, Vec<Listener>>,
    /// Removed toasts whose listeners are released on the next timer
    released: Vec<ToastId>,
    timer: Option<i32>,
}

/// An event listener, detached on drop.
struct Listener {
    target: Element,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let detached = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        warn_on_error(detached, "remove event listener");
    }
}

impl BrowserNotifications {
    /// Returns `None` outside a page with a document.
    pub fn new() -> Option<Self> {
        let dom = WebDom::current()?;
        let center = NotificationCenter::new(dom, PerformanceClock);
        let inner = Rc::new_cyclic(|this| {
            RefCell::new(Inner {
                this: this.clone(),
                center,
                listeners: HashMap::new(),
                released: Vec::new(),
                timer: None,
            })
        });
        Some(Self { inner })
    }

    pub fn show(&self, kind: impl Into<ToastKind>, title: &str, body: &str) -> ToastId {
        let kind = kind.into();
        self.with_center(|center| center.show(kind, title, body).id)
    }

    /// Runs `f` against the center, then wires up any toasts it created.
    ///
    /// ```ignore
    /// notifications.with_center(|center| center.report_login(&result, &identifier));
    /// ```
    pub fn with_center<R>(&self, f: impl FnOnce(&mut BrowserCenter) -> R) -> R {
        let mut inner = self.inner.borrow_mut();
        let output = f(&mut inner.center);
        inner.wire_new_toasts();
        inner.after_event();
        output
    }
}

impl Inner {
    fn wire_new_toasts(&mut self) {
        for id in self.center.ids() {
            if self.listeners.contains_key(&id) {
                continue;
            }
            let (Some(card), Some(close)) = (
                self.center.element(id).cloned(),
                self.center.close_button(id).cloned(),
            ) else {
                continue;
            };

            let listeners = vec![
                self.listen(card.clone(), "mouseenter", id, |center, id| {
                    center.hover_enter(id)
                }),
                self.listen(card, "mouseleave", id, |center, id| center.hover_leave(id)),
                self.listen(close, "click", id, |center, id| {
                    center.dismiss(id);
                }),
            ];
            self.listeners.insert(id, listeners);
        }
    }

    fn listen(
        &self,
        target: Element,
        event: &'static str,
        id: ToastId,
        action: fn(&mut BrowserCenter, ToastId),
    ) -> Listener {
        let this = self.this.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let Some(inner) = this.upgrade() else {
                return;
            };
            let Ok(mut inner) = inner.try_borrow_mut() else {
                tracing::warn!("Toast event for {} arrived while busy", id);
                return;
            };
            action(&mut inner.center, id);
            inner.after_event();
        });

        if target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to listen for {} on {}", event, id);
        }
        Listener {
            target,
            event,
            callback,
        }
    }

    /// Collects removals and re-arms the timer.
    ///
    /// Listeners are never dropped here since this may run inside one of them.
    fn after_event(&mut self) {
        self.released.extend(self.center.drain_removed());
        self.reschedule();
    }

    fn on_timer(&mut self) {
        self.timer = None;
        let removed = self.center.tick();
        for id in self.released.drain(..).chain(removed) {
            self.listeners.remove(&id);
        }
        self.reschedule();
    }

    fn reschedule(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(handle) = self.timer.take() {
            window.clear_timeout_with_handle(handle);
        }

        let delay = if !self.released.is_empty() {
            0.0
        } else {
            match self.center.next_deadline() {
                Some(deadline) => {
                    let now = self.center.clock().now();
                    deadline.saturating_sub(now).as_secs_f64() * 1000.0
                }
                None => return,
            }
        };

        let this = self.this.clone();
        let callback = Closure::once_into_js(move || {
            if let Some(inner) = this.upgrade()
                && let Ok(mut inner) = inner.try_borrow_mut()
            {
                inner.on_timer();
            }
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay.ceil() as i32,
        ) {
            Ok(handle) => self.timer = Some(handle),
            Err(_) => tracing::warn!("Failed to arm toast timer"),
        }
    }
}

/// Shows the named page section.
#[wasm_bindgen(js_name = goToPage)]
pub fn go_to_page(page: &str) -> bool {
    match WebDom::current() {
        Some(dom) => PageSwitcher::new(dom).activate(page),
        None => false,
    }
}

/// Activates the landing page once the document has loaded.
pub fn boot() {
    let Some(dom) = WebDom::current() else {
        tracing::warn!("No document to boot");
        return;
    };

    if dom.document().ready_state() != "loading" {
        PageSwitcher::new(dom).activate_initial();
        return;
    }

    let document = dom.document().clone();
    let callback = Closure::once_into_js(move || {
        PageSwitcher::new(dom).activate_initial();
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.unchecked_ref(),
            &options,
        )
        .is_err()
    {
        tracing::warn!("Failed to wait for DOMContentLoaded");
    }
}
