//! DOM host for one slider container.
//!
//! `Slider` binds a container element to a [`SliderCore`]. It is the only
//! place that reads layout from the browser or writes to it: events are turned
//! into core calls, and the [`Action`]s the core returns are carried out here.
//!
//! Shared state lives in an `Rc<Inner>`. Event and timer closures hold a
//! `Weak<Inner>`, so once the `Slider` is dropped any late callback finds
//! nothing to act on.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, TouchEvent};

use crate::config::{Navigation, SliderConfig};
use crate::consts::{CONFIG_ATTRIBUTE, HIDDEN_CLASS};
use crate::engine::{Action, Control, ControlState, SliderCore};
use crate::error::SliderError;
use crate::geometry::{Metrics, parse_css_px};
use crate::input::{Direction, Key};
use crate::listener::Listener;
use crate::selectors;
use crate::timer::Debouncer;

/// The elements a slider governs.
#[derive(Debug)]
struct Elements {
    container: Element,
    track: HtmlElement,
    items: Vec<HtmlElement>,
    prev: Option<Element>,
    next: Option<Element>,
}

#[derive(Debug)]
struct Inner {
    elements: Elements,
    core: RefCell<SliderCore>,
    settle: RefCell<Debouncer>,
    resize: RefCell<Debouncer>,
    scroll: RefCell<Debouncer>,
}

/// A mounted slider. Dropping it detaches every listener and cancels its timers.
#[derive(Debug)]
pub struct Slider {
    inner: Rc<Inner>,
    listeners: Vec<Listener>,
}

impl Slider {
    /// Bind a slider to `container`.
    ///
    /// # Errors
    ///
    /// - [`SliderError::Config`] if the container's config attribute is unusable.
    /// - [`SliderError::MissingTrack`] if no track element is found.
    /// - [`SliderError::Dom`] if a listener cannot be registered.
    pub fn mount(container: Element) -> Result<Self, SliderError> {
        let config = SliderConfig::from_attribute(container.get_attribute(CONFIG_ATTRIBUTE).as_deref())?;
        let track = selectors::first_match(&container, selectors::TRACK)
            .and_then(|track| track.dyn_into::<HtmlElement>().into_iter().next())
            .ok_or(SliderError::MissingTrack)?;

        let mut items: Vec<HtmlElement> = selectors::all_matches(&track, selectors::ITEM);
        if items.is_empty() {
            items = selectors::all_matches(&track, ":scope > *");
        }
        let prev = selectors::first_match(&container, selectors::PREV);
        let next = selectors::first_match(&container, selectors::NEXT);
        if prev.is_none() || next.is_none() {
            log::debug!("slider has no navigation controls; click handlers not bound");
        }

        let inner = Rc::new(Inner {
            elements: Elements { container, track, items, prev, next },
            core: RefCell::new(SliderCore::new(config)),
            settle: RefCell::new(Debouncer::new()),
            resize: RefCell::new(Debouncer::new()),
            scroll: RefCell::new(Debouncer::new()),
        });
        inner.recompute_item_extent();
        inner.refresh_controls();
        if let Some(hovered) = inner.pointer_over() {
            inner.core.borrow_mut().set_hovered(hovered);
        }

        let listeners = bind(&inner)?;
        log::debug!(
            "slider mounted: {} items, {:?} navigation, {} listeners",
            inner.elements.items.len(),
            inner.core.borrow().config().navigation,
            listeners.len()
        );
        Ok(Self { inner, listeners })
    }

    /// Step one item toward the end.
    pub fn advance(&self) {
        self.inner.step(Direction::Next);
    }

    /// Step one item toward the start.
    pub fn retreat(&self) {
        self.inner.step(Direction::Previous);
    }

    /// Re-measure the first item and the track gap.
    pub fn recompute_item_extent(&self) -> f64 {
        self.inner.recompute_item_extent()
    }

    /// Re-measure the track and re-render the controls.
    pub fn recompute_control_state(&self) -> ControlState {
        self.inner.refresh_controls()
    }

    /// Detach listeners and cancel timers.
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for Slider {
    fn drop(&mut self) {
        self.inner.settle.borrow_mut().cancel();
        self.inner.resize.borrow_mut().cancel();
        self.inner.scroll.borrow_mut().cancel();
        log::debug!("slider torn down; removing {} listeners", self.listeners.len());
    }
}

impl Inner {
    // --- Measurement ---

    fn navigation(&self) -> Navigation {
        self.core.borrow().config().navigation
    }

    fn read_metrics(&self) -> Metrics {
        let track = &self.elements.track;
        let visible = match self.navigation() {
            Navigation::Scroll => track.client_width(),
            Navigation::Indexed => self.elements.container.client_width(),
        };
        Metrics::new(f64::from(track.scroll_width()), f64::from(visible))
    }

    /// `scrollLeft` is fractional on scaled displays, so read it as a double.
    fn read_scroll_left(&self) -> f64 {
        match js_sys::Reflect::get(&self.elements.track, &JsValue::from_str("scrollLeft")) {
            Ok(value) => value.as_f64().unwrap_or_default(),
            Err(err) => {
                log::debug!("scrollLeft unavailable: {err:?}");
                0.0
            }
        }
    }

    fn read_gap(&self) -> Option<f64> {
        let window = web_sys::window()?;
        let style = match window.get_computed_style(&self.elements.track) {
            Ok(Some(style)) => style,
            Ok(None) => return None,
            Err(err) => {
                log::debug!("computed style unavailable: {err:?}");
                return None;
            }
        };
        ["column-gap", "gap"]
            .iter()
            .find_map(|property| style.get_property_value(property).into_iter().find_map(|v| parse_css_px(&v)))
    }

    /// Pull the track's current geometry and scroll position into the core.
    fn sync(&self) {
        let metrics = self.read_metrics();
        let offset = self.read_scroll_left();
        let mut core = self.core.borrow_mut();
        core.set_metrics(metrics);
        core.observe_offset(offset);
    }

    fn recompute_item_extent(&self) -> f64 {
        let width = self.elements.items.first().map(|item| f64::from(item.offset_width()));
        let gap = self.read_gap();
        self.sync();
        self.core.borrow_mut().recompute_item_extent(width, gap)
    }

    fn refresh_controls(&self) -> ControlState {
        self.sync();
        let state = self.core.borrow_mut().recompute_control_state();
        self.render_controls(state);
        state
    }

    // --- Operations ---

    fn step(self: &Rc<Self>, direction: Direction) {
        if !self.core.borrow().is_animating() {
            self.sync();
        }
        let actions = self.core.borrow_mut().step(direction);
        self.apply(&actions, None);
    }

    fn settle(self: &Rc<Self>) {
        self.sync();
        let actions = self.core.borrow_mut().settle();
        self.apply(&actions, None);
    }

    fn key_down(self: &Rc<Self>, event: &Event) {
        let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = Key::from_dom(&keyboard.key());
        if key == Key::Other {
            return;
        }
        if !self.core.borrow().is_animating() {
            self.sync();
        }
        let pointer_over = self.pointer_over();
        let actions = self.core.borrow_mut().key_down(key, pointer_over);
        self.apply(&actions, Some(event));
    }

    /// Whether the container matches `:hover` right now.
    ///
    /// `mouseenter` never fires for a pointer that was already over the
    /// container at mount, so hover is re-read rather than only tracked.
    fn pointer_over(&self) -> Option<bool> {
        match self.elements.container.matches(":hover") {
            Ok(hovered) => Some(hovered),
            Err(err) => {
                log::debug!(":hover query failed: {err:?}");
                None
            }
        }
    }

    /// Pointer x relative to the track, from the first touch point.
    fn touch_x(&self, event: &Event) -> Option<f64> {
        let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
        Some(f64::from(touch.page_x() - self.elements.track.offset_left()))
    }

    fn drag_start(&self, event: &Event) {
        let Some(x) = self.touch_x(event) else {
            return;
        };
        self.sync();
        self.core.borrow_mut().drag_start(x);
    }

    fn drag_move(self: &Rc<Self>, event: &Event) {
        let Some(x) = self.touch_x(event) else {
            return;
        };
        let actions = self.core.borrow_mut().drag_move(x);
        self.apply(&actions, Some(event));
    }

    fn drag_end(self: &Rc<Self>) {
        let actions = self.core.borrow_mut().drag_end();
        self.apply(&actions, None);
    }

    fn scroll_timer(&self) -> &RefCell<Debouncer> {
        &self.scroll
    }

    fn resize_timer(&self) -> &RefCell<Debouncer> {
        &self.resize
    }

    fn resized(&self) {
        self.recompute_item_extent();
        self.refresh_controls();
    }

    // --- Effects ---

    fn apply(self: &Rc<Self>, actions: &[Action], event: Option<&Event>) {
        for action in actions {
            match *action {
                Action::MoveTo { offset, smooth } => self.move_to(offset, smooth),
                Action::ScheduleSettle { delay_ms } => {
                    let weak = Rc::downgrade(self);
                    self.settle.borrow_mut().schedule(delay_ms, move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.settle();
                        }
                    });
                }
                Action::UpdateControls(state) => self.render_controls(state),
                Action::PreventDefault => {
                    if let Some(event) = event {
                        event.prevent_default();
                    }
                }
            }
        }
    }

    fn move_to(&self, offset: f64, smooth: bool) {
        let track = &self.elements.track;
        match self.navigation() {
            Navigation::Scroll => {
                let options = ScrollToOptions::new();
                options.set_left(offset);
                options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Instant });
                track.scroll_to_with_scroll_to_options(&options);
            }
            Navigation::Indexed => {
                let style = track.style();
                let transition = if smooth { "transform 0.3s ease" } else { "none" };
                log_dom_err("set transition", style.set_property("transition", transition));
                log_dom_err("set transform", style.set_property("transform", &format!("translateX(-{offset}px)")));
            }
        }
    }

    fn render_controls(&self, state: ControlState) {
        for (element, control) in [(&self.elements.prev, state.prev), (&self.elements.next, state.next)] {
            if let Some(element) = element {
                render_control(element, control);
            }
        }
    }
}

fn render_control(element: &Element, control: Control) {
    let classes = element.class_list();
    let toggled = match control {
        Control::Hidden => classes.add_1(HIDDEN_CLASS),
        Control::Disabled | Control::Enabled => classes.remove_1(HIDDEN_CLASS),
    };
    log_dom_err("toggle hidden class", toggled);

    let disabled = control == Control::Disabled;
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        log_dom_err("set aria-disabled", element.set_attribute("aria-disabled", "true"));
    } else {
        log_dom_err("clear aria-disabled", element.remove_attribute("aria-disabled"));
    }
}

fn log_dom_err(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::debug!("{context} failed: {err:?}");
    }
}

/// Wrap a handler so it only runs while the slider is alive.
fn handler<F>(inner: &Rc<Inner>, f: F) -> impl FnMut(Event) + 'static
where
    F: Fn(&Rc<Inner>, &Event) + 'static,
{
    let weak: Weak<Inner> = Rc::downgrade(inner);
    move |event: Event| {
        if let Some(inner) = weak.upgrade() {
            f(&inner, &event);
        }
    }
}

/// Run `f` once events on this listener have been quiet for `delay_ms`.
fn debounced<F>(
    inner: &Rc<Inner>,
    timer: fn(&Inner) -> &RefCell<Debouncer>,
    delay_ms: u32,
    f: F,
) -> impl FnMut(Event) + 'static
where
    F: Fn(&Inner) + Clone + 'static,
{
    handler(inner, move |inner, _| {
        let weak = Rc::downgrade(inner);
        let f = f.clone();
        timer(inner.as_ref()).borrow_mut().schedule(delay_ms, move || {
            if let Some(inner) = weak.upgrade() {
                f(inner.as_ref());
            }
        });
    })
}

fn bind(inner: &Rc<Inner>) -> Result<Vec<Listener>, SliderError> {
    let elements = &inner.elements;
    let (resize_ms, scroll_ms) = {
        let core = inner.core.borrow();
        (core.config().resize_debounce_ms, core.config().scroll_debounce_ms)
    };
    let mut listeners = Vec::new();

    if let (Some(prev), Some(next)) = (&elements.prev, &elements.next) {
        listeners.push(Listener::new(prev, "click", handler(inner, |inner, _| inner.step(Direction::Previous)))?);
        listeners.push(Listener::new(next, "click", handler(inner, |inner, _| inner.step(Direction::Next)))?);
    }

    let track = &elements.track;
    listeners.push(Listener::new(
        track,
        "scroll",
        debounced(inner, Inner::scroll_timer, scroll_ms, |inner: &Inner| {
            inner.refresh_controls();
        }),
    )?);
    listeners.push(Listener::new(track, "touchstart", handler(inner, |inner, event| inner.drag_start(event)))?);
    listeners.push(Listener::active(track, "touchmove", handler(inner, |inner, event| inner.drag_move(event)))?);
    listeners.push(Listener::new(track, "touchend", handler(inner, |inner, _| inner.drag_end()))?);
    listeners.push(Listener::new(track, "touchcancel", handler(inner, |inner, _| inner.drag_end()))?);

    let container = &elements.container;
    listeners.push(Listener::new(
        container,
        "mouseenter",
        handler(inner, |inner, _| inner.core.borrow_mut().set_hovered(true)),
    )?);
    listeners.push(Listener::new(
        container,
        "mouseleave",
        handler(inner, |inner, _| inner.core.borrow_mut().set_hovered(false)),
    )?);

    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            listeners.push(Listener::active(&document, "keydown", handler(inner, |inner, event| inner.key_down(event)))?);
        }
        listeners.push(Listener::new(
            &window,
            "resize",
            debounced(inner, Inner::resize_timer, resize_ms, Inner::resized),
        )?);
    }

    Ok(listeners)
}
