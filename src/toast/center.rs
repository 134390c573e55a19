//! The notification center: owns the toast container and every live toast.
//!
//! The center never sleeps or registers callbacks itself. Hosts drive it:
//! forward pointer and close events to [`hover_enter`], [`hover_leave`] and
//! [`dismiss`], arm a single timer for [`next_deadline`] and call [`tick`] when
//! it fires.
//!
//! [`hover_enter`]: NotificationCenter::hover_enter
//! [`hover_leave`]: NotificationCenter::hover_leave
//! [`dismiss`]: NotificationCenter::dismiss
//! [`next_deadline`]: NotificationCenter::next_deadline
//! [`tick`]: NotificationCenter::tick

use super::kind::ToastKind;
use super::lifecycle::{Lifecycle, Phase, Step, ToastTimings};
use crate::clock::Clock;
use crate::dom::Dom;
use std::fmt;
use std::time::Duration;

/// Element id of the shared container.
pub const CONTAINER_ID: &str = "aha-toast-container";

const CONTAINER_CLASS: &str = "pointer-events-none fixed top-4 right-4 z-[9999] flex w-full max-w-[360px] flex-col gap-3";
const CARD_CLASS: &str = "pointer-events-auto flex w-full max-w-[360px] gap-3 rounded-xl border-l-4 bg-white px-4 py-3 shadow-lg ring-1 ring-black/5 transition-all duration-200 ease-out";
const ICON_CLASS: &str = "mt-0.5 text-lg";
const CONTENT_CLASS: &str = "flex-1 overflow-hidden text-[14px] leading-snug text-slate-700";
const TITLE_CLASS: &str = "font-semibold text-slate-900";
const BODY_CLASS: &str = "mt-1 text-slate-600";
const CLOSE_CLASS: &str = "ml-2 shrink-0 rounded-full px-2 py-1 text-sm font-semibold text-slate-400 transition hover:bg-slate-100 hover:text-slate-600";
const CLOSE_LABEL: &str = "ปิดการแจ้งเตือน";

const HIDDEN_OFFSET: &str = "translateY(-6px)";
const EXIT_TRANSITION: &str = "opacity 150ms ease, transform 150ms ease";

/// Identifies a toast for the lifetime of its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Returned by [`NotificationCenter::show`].
#[derive(Clone, Debug, PartialEq)]
pub struct ToastHandle<N> {
    pub id: ToastId,
    /// The card element
    pub element: N,
}

struct Toast<N> {
    id: ToastId,
    kind: ToastKind,
    element: N,
    close_button: N,
    /// Container the card was mounted in, which may no longer be the current one
    container: N,
    lifecycle: Lifecycle,
}

/// Stack of transient toast cards in a fixed screen corner.
pub struct NotificationCenter<D: Dom, C: Clock> {
    dom: D,
    clock: C,
    timings: ToastTimings,
    container: Option<D::Node>,
    toasts: Vec<Toast<D::Node>>,
    removed: Vec<ToastId>,
    next_id: u64,
}

impl<D: Dom, C: Clock> NotificationCenter<D, C> {
    /// Creates an empty center with the default timings. Nothing is added to
    /// the document until the first [`show`](Self::show).
    ///
    /// # Example
    ///
    /// ```
    /// use dxhealth::clock::VirtualClock;
    /// use dxhealth::dom::{Dom, MemoryDom};
    /// use dxhealth::toast::{NotificationCenter, Phase};
    ///
    /// let dom = MemoryDom::new();
    /// let clock = VirtualClock::new();
    /// let mut center = NotificationCenter::new(dom.clone(), clock.clone());
    /// assert!(center.container().is_none());
    ///
    /// let toast = center.show_success("Saved", "");
    /// assert!(dom.is_connected(&toast.element));
    ///
    /// clock.advance_ms(2500);
    /// center.tick();
    /// assert!(matches!(center.phase(toast.id), Some(Phase::Leaving { .. })));
    ///
    /// clock.advance_ms(160);
    /// assert_eq!(center.tick(), vec![toast.id]);
    /// ```
    pub fn new(dom: D, clock: C) -> Self {
        Self {
            dom,
            clock,
            timings: ToastTimings::default(),
            container: None,
            toasts: Vec::new(),
            removed: Vec::new(),
            next_id: 1,
        }
    }

    /// Replaces the timings used by toasts shown from now on.
    ///
    /// # Arguments
    ///
    /// * `timings` - Display, resume and exit durations, see [`ToastTimings`]
    pub fn with_timings(mut self, timings: ToastTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Document the center renders into.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Timings applied to newly shown toasts.
    pub fn timings(&self) -> ToastTimings {
        self.timings
    }

    /// The memoized container, if one has been created and not torn down.
    pub fn container(&self) -> Option<&D::Node> {
        self.container.as_ref()
    }

    /// Number of toasts not yet removed.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// True when no toast is visible or leaving.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Live toast ids in arrival order.
    pub fn ids(&self) -> Vec<ToastId> {
        self.toasts.iter().map(|t| t.id).collect()
    }

    /// Lifecycle phase of a live toast; `None` once it has been removed.
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        self.find(id).map(|t| t.lifecycle.phase())
    }

    /// Presentation kind the toast was shown with, after name fallback.
    pub fn kind(&self, id: ToastId) -> Option<ToastKind> {
        self.find(id).map(|t| t.kind)
    }

    /// The card element, for hosts wiring hover events.
    pub fn element(&self, id: ToastId) -> Option<&D::Node> {
        self.find(id).map(|t| &t.element)
    }

    /// The card's close affordance, for hosts wiring click events.
    pub fn close_button(&self, id: ToastId) -> Option<&D::Node> {
        self.find(id).map(|t| &t.close_button)
    }

    /// Shows a toast. `kind` may be a [`ToastKind`] or a kind name; unknown names
    /// render as info. Empty `title` or `body` leave that line out.
    pub fn show(
        &mut self,
        kind: impl Into<ToastKind>,
        title: &str,
        body: &str,
    ) -> ToastHandle<D::Node> {
        let kind = kind.into();
        let container = self.ensure_container();
        let (element, close_button) = self.build_card(kind, title, body);

        self.dom.append_child(&container, &element);
        self.animate_in(&element);

        let id = ToastId(self.next_id);
        self.next_id += 1;
        let now = self.clock.now();
        self.toasts.push(Toast {
            id,
            kind,
            element: element.clone(),
            close_button,
            container,
            lifecycle: Lifecycle::start(now, self.timings),
        });
        tracing::trace!("Showing {} {} ({:?})", kind, id, title);

        ToastHandle { id, element }
    }

    /// Shows a [`ToastKind::Success`] toast.
    ///
    /// # Arguments
    ///
    /// * `title` - Bold first line, left out when empty
    /// * `body` - Second line, left out when empty
    pub fn show_success(&mut self, title: &str, body: &str) -> ToastHandle<D::Node> {
        self.show(ToastKind::Success, title, body)
    }

    /// Shows a [`ToastKind::Error`] toast. See [`show_success`](Self::show_success).
    pub fn show_error(&mut self, title: &str, body: &str) -> ToastHandle<D::Node> {
        self.show(ToastKind::Error, title, body)
    }

    /// Shows a [`ToastKind::Info`] toast.
    pub fn show_info(&mut self, title: &str, body: &str) -> ToastHandle<D::Node> {
        self.show(ToastKind::Info, title, body)
    }

    /// Shows a [`ToastKind::Warning`] toast.
    pub fn show_warning(&mut self, title: &str, body: &str) -> ToastHandle<D::Node> {
        self.show(ToastKind::Warning, title, body)
    }

    /// Pointer entered the card: pause its countdown.
    pub fn hover_enter(&mut self, id: ToastId) {
        if let Some(toast) = self.find_mut(id)
            && toast.lifecycle.hover_enter()
        {
            tracing::trace!("Paused {}", id);
        }
    }

    /// Pointer left the card: resume with the shortened countdown.
    pub fn hover_leave(&mut self, id: ToastId) {
        let now = self.clock.now();
        if let Some(toast) = self.find_mut(id)
            && toast.lifecycle.hover_leave(now)
        {
            tracing::trace!("Resumed {}", id);
        }
    }

    /// Close affordance clicked: cancel the countdown and animate out.
    ///
    /// Returns false when the toast is unknown or already leaving.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let now = self.clock.now();
        let dom = &self.dom;
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if !toast.lifecycle.dismiss(now) {
            return false;
        }

        if dom.is_connected(&toast.element) {
            animate_out(dom, &toast.element);
            tracing::trace!("Dismissed {}", id);
        } else {
            toast.lifecycle.discard();
            self.sweep();
        }
        true
    }

    /// Runs the transition due for each toast at the clock's current time.
    ///
    /// A toast whose countdown expired starts its exit animation here and is
    /// detached by a later tick, once the exit interval has passed.
    ///
    /// Returns the ids removed since the last call to [`tick`](Self::tick) or
    /// [`drain_removed`](Self::drain_removed).
    pub fn tick(&mut self) -> Vec<ToastId> {
        let now = self.clock.now();
        let dom = &self.dom;

        for toast in &mut self.toasts {
            match toast.lifecycle.poll(now) {
                Step::Idle => {}
                Step::Exit if !dom.is_connected(&toast.element) => {
                    // Detached by someone else; nothing left to animate.
                    toast.lifecycle.discard();
                }
                Step::Exit => {
                    animate_out(dom, &toast.element);
                    tracing::trace!("Auto-dismissing {}", toast.id);
                }
                Step::Remove => {
                    if dom.is_connected(&toast.element) {
                        dom.remove(&toast.element);
                    }
                }
            }
        }

        self.sweep();
        self.drain_removed()
    }

    /// Earliest pending deadline across all toasts.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.toasts
            .iter()
            .filter_map(|t| t.lifecycle.deadline())
            .min()
    }

    /// Ids removed since the last drain.
    pub fn drain_removed(&mut self) -> Vec<ToastId> {
        std::mem::take(&mut self.removed)
    }

    /// Removes every toast and the container at once, without animation.
    pub fn clear(&mut self) {
        for toast in &mut self.toasts {
            toast.lifecycle.discard();
            self.dom.remove(&toast.element);
        }
        self.sweep();
        if let Some(container) = self.container.take() {
            self.dom.remove(&container);
            tracing::trace!("Toast container torn down");
        }
    }

    fn find(&self, id: ToastId) -> Option<&Toast<D::Node>> {
        self.toasts.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: ToastId) -> Option<&mut Toast<D::Node>> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }

    /// Returns the memoized container, creating a fresh one when there is none
    /// or the old one was detached from the document.
    fn ensure_container(&mut self) -> D::Node {
        if let Some(container) = &self.container {
            if self.dom.is_connected(container) {
                return container.clone();
            }
            tracing::trace!("Toast container was detached, creating a new one");
        }

        let container = self.dom.create_element("div");
        self.dom.set_id(&container, CONTAINER_ID);
        self.dom.set_class_name(&container, CONTAINER_CLASS);
        self.dom.append_to_body(&container);
        self.container = Some(container.clone());
        tracing::trace!("Toast container created");
        container
    }

    fn build_card(&self, kind: ToastKind, title: &str, body: &str) -> (D::Node, D::Node) {
        let dom = &self.dom;
        let style = kind.style();

        let card = dom.create_element("div");
        dom.set_class_name(&card, &format!("{} {}", CARD_CLASS, style.border));
        dom.set_attribute(&card, "role", "status");
        dom.set_attribute(&card, "aria-live", "polite");
        dom.set_attribute(&card, "aria-atomic", "true");

        let icon = dom.create_element("div");
        dom.set_class_name(&icon, ICON_CLASS);
        dom.set_text(&icon, style.icon);

        let content = dom.create_element("div");
        dom.set_class_name(&content, CONTENT_CLASS);

        if !title.is_empty() {
            let heading = dom.create_element("p");
            dom.set_class_name(&heading, TITLE_CLASS);
            dom.set_text(&heading, title);
            dom.append_child(&content, &heading);
        }

        if !body.is_empty() {
            let text = dom.create_element("p");
            dom.set_class_name(&text, BODY_CLASS);
            dom.set_text(&text, body);
            dom.append_child(&content, &text);
        }

        let close = dom.create_element("button");
        dom.set_attribute(&close, "type", "button");
        dom.set_class_name(&close, CLOSE_CLASS);
        dom.set_attribute(&close, "aria-label", CLOSE_LABEL);
        dom.set_text(&close, "×");

        dom.append_child(&card, &icon);
        dom.append_child(&card, &content);
        dom.append_child(&card, &close);

        (card, close)
    }

    fn animate_in(&self, element: &D::Node) {
        self.dom.set_style(element, "opacity", "0");
        self.dom.set_style(element, "transform", HIDDEN_OFFSET);
        self.dom.set_style_next_frame(element, "opacity", "1");
        self.dom.set_style_next_frame(element, "transform", "translateY(0)");
    }

    /// Drops removed toasts and tears down containers they left empty.
    fn sweep(&mut self) {
        let mut emptied = Vec::new();
        self.toasts.retain(|toast| {
            if toast.lifecycle.is_removed() {
                self.removed.push(toast.id);
                emptied.push(toast.container.clone());
                false
            } else {
                true
            }
        });

        for container in emptied {
            self.release_container(&container);
        }
    }

    fn release_container(&mut self, container: &D::Node) {
        if self.dom.child_count(container) > 0 || !self.dom.has_parent(container) {
            return;
        }
        self.dom.remove(container);
        if self.container.as_ref() == Some(container) {
            self.container = None;
        }
        tracing::trace!("Toast container removed");
    }
}

fn animate_out<D: Dom>(dom: &D, element: &D::Node) {
    dom.set_style(element, "opacity", "0");
    dom.set_style(element, "transform", HIDDEN_OFFSET);
    dom.set_style(element, "transition", EXIT_TRANSITION);
}
