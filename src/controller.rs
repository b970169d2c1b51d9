use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::bindings::{resolve, ClickContext, ClickOutcome, CLICK_BINDINGS, PACKAGE_DETAILS_SELECTOR};
use crate::config::PageConfig;
use crate::dates;
use crate::dom;
use crate::error::PageError;
use crate::state::forms::{prefill_message, BookingField, BookingForm, FormState, HeroField};
use crate::state::reveal::REVEAL_ATTR;
use crate::state::submit::{plan_booking_submit, plan_hero_submit, FollowUp, SubmitPlan};
use crate::state::toast::Severity;
use crate::state::{PageAction, PageState};
use crate::timers::{TimerSlot, Timers};

pub const STATS_SELECTOR: &str = ".hero-stats";

/// Every page operation that has side effects beyond the reducer: toasts
/// with their dismiss timers, delayed scrolls and the counter interval.
#[derive(Clone)]
pub struct PageHandle {
    dispatcher: UseReducerDispatcher<PageState>,
    timers: Rc<RefCell<Timers>>,
    toast_generation: Rc<Cell<u64>>,
    config: Rc<PageConfig>,
}

impl PageHandle {
    pub fn new(dispatcher: UseReducerDispatcher<PageState>, config: Rc<PageConfig>) -> Self {
        Self {
            dispatcher,
            timers: Rc::new(RefCell::new(Timers::default())),
            toast_generation: Rc::new(Cell::new(0)),
            config,
        }
    }

    fn dispatch(&self, action: PageAction) {
        self.dispatcher.dispatch(action);
    }

    /// Shows the toast and (re)starts its dismiss timer.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let generation = self.toast_generation.get() + 1;
        self.toast_generation.set(generation);
        self.dispatch(PageAction::ShowToast {
            message: message.into(),
            severity,
            generation,
        });

        let dispatcher = self.dispatcher.clone();
        self.timers.borrow_mut().schedule(
            TimerSlot::ToastDismiss,
            self.config.toast_duration_ms,
            move || dispatcher.dispatch(PageAction::DismissToast { generation }),
        );
    }

    pub fn scroll_to(&self, id: &str) {
        if let Err(e) = dom::scroll_to_section(id) {
            warn!("Could not scroll to #{}: {}", id, e);
        }
    }

    pub fn back_to_top(&self) {
        if let Err(e) = dom::scroll_to_top() {
            warn!("Could not scroll to top: {}", e);
        }
    }

    pub fn toggle_menu(&self) {
        self.dispatch(PageAction::ToggleMenu);
    }

    pub fn close_menu(&self) {
        self.dispatch(PageAction::CloseMenu);
    }

    pub fn hero_input(&self, field: HeroField, value: String) {
        self.dispatch(PageAction::HeroInput(field, value));
    }

    pub fn booking_input(&self, field: BookingField, value: String) {
        self.dispatch(PageAction::BookingInput(field, value));
    }

    pub fn submit_hero(&self, form: &FormState<HeroField>) {
        let plan = plan_hero_submit(form, dates::today(), &self.config);
        info!("Hero search {}", if plan.follow_up.is_some() { "accepted" } else { "rejected" });
        self.run(plan);
    }

    pub fn submit_booking(&self, booking: &BookingForm) {
        let plan = plan_booking_submit(booking, dates::today(), &self.config);
        match &plan.action {
            None => debug!("Booking already processing, ignoring submit"),
            Some(PageAction::BeginBooking) => info!("Booking accepted, simulating confirmation"),
            Some(_) => info!("Booking rejected"),
        }
        self.run(plan);
    }

    fn run(&self, plan: SubmitPlan) {
        if let Some(action) = plan.action {
            self.dispatch(action);
        }
        if let Some((message, severity)) = plan.toast {
            self.notify(message, severity);
        }
        match plan.follow_up {
            Some(FollowUp::ScrollTo { section, delay_ms }) => {
                let handle = self.clone();
                self.timers.borrow_mut().schedule(TimerSlot::HeroScroll, delay_ms, move || {
                    handle.scroll_to(&section)
                });
            }
            Some(FollowUp::ConfirmBooking { message, delay_ms }) => {
                let handle = self.clone();
                self.timers.borrow_mut().schedule(TimerSlot::BookingConfirm, delay_ms, move || {
                    handle.dispatch(PageAction::FinishBooking);
                    handle.notify(message, Severity::Success);
                });
            }
            None => {}
        }
    }

    /// Pre-fills the booking form's service, flashes the selector and
    /// brings the form into view.
    pub fn select_service_and_scroll(&self, service: &str, label: &str) {
        info!("Pre-filling booking service {}", service);
        self.dispatch(PageAction::SelectService(service.to_string()));

        let dispatcher = self.dispatcher.clone();
        self.timers.borrow_mut().schedule(
            TimerSlot::ServiceHighlight,
            self.config.highlight_ms,
            move || dispatcher.dispatch(PageAction::ClearHighlight),
        );

        self.scroll_to(&self.config.booking_section);
        self.notify(prefill_message(label), Severity::Success);
    }

    pub fn select_cab(&self, label: &str) {
        self.scroll_to(&self.config.booking_section);
        self.notify(
            format!("{} selected! Complete booking details below.", label),
            Severity::Success,
        );
    }

    pub fn call_support(&self) {
        self.notify(format!("Calling {}...", self.config.support_phone), Severity::Success);
    }

    pub fn handle_click(&self, outcome: ClickOutcome) {
        match outcome {
            ClickOutcome::Prefill { service, label } => self.select_service_and_scroll(&service, &label),
            ClickOutcome::SelectCab { label } => self.select_cab(&label),
            ClickOutcome::CallSupport => self.call_support(),
            ClickOutcome::Ignore => {}
        }
    }

    pub fn reveal(&self, slot: usize) {
        self.dispatch(PageAction::Reveal(slot));
    }

    pub fn start_counters(&self) {
        info!("Starting hero counters");
        self.dispatch(PageAction::StartCounters);
        let dispatcher = self.dispatcher.clone();
        self.timers.borrow_mut().every(
            TimerSlot::CounterTick,
            self.config.counter_tick_ms,
            move || dispatcher.dispatch(PageAction::CounterTick),
        );
    }

    pub fn stop_counters(&self) {
        self.timers.borrow_mut().cancel(TimerSlot::CounterTick);
    }

    pub fn sync_scroll(&self) -> Result<(), PageError> {
        let y = dom::scroll_y()?;
        let sections = dom::section_spans()?;
        self.dispatch(PageAction::Scrolled { y, sections });
        Ok(())
    }

    pub fn cancel_timers(&self) {
        self.timers.borrow_mut().cancel_all();
    }
}

struct BoundListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Window and document level bindings of the landing page. Created once the
/// page has rendered; `teardown` (or drop) removes every listener, observer
/// and pending timer.
pub struct PageController {
    handle: PageHandle,
    listeners: Vec<BoundListener>,
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
    torn_down: bool,
}

impl PageController {
    pub fn attach(handle: PageHandle) -> Result<Self, PageError> {
        let mut controller = Self {
            handle,
            listeners: Vec::new(),
            observers: Vec::new(),
            torn_down: false,
        };
        controller.bind_scroll()?;
        controller.bind_clicks()?;
        controller.observe_reveals()?;
        controller.observe_stats()?;
        info!(
            "Page controller attached ({} listeners, {} observers)",
            controller.listeners.len(),
            controller.observers.len()
        );
        Ok(controller)
    }

    fn listen(
        &mut self,
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), PageError> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(BoundListener { target, event, callback });
        Ok(())
    }

    fn bind_scroll(&mut self) -> Result<(), PageError> {
        let handle = self.handle.clone();
        let callback = Closure::wrap(Box::new(move |_: Event| {
            if let Err(e) = handle.sync_scroll() {
                warn!("Scroll sync failed: {}", e);
            }
        }) as Box<dyn FnMut(Event)>);
        self.listen(dom::window()?.into(), "scroll", callback)?;

        // Initial check for pages restored mid-scroll
        self.handle.sync_scroll()
    }

    fn bind_clicks(&mut self) -> Result<(), PageError> {
        let handle = self.handle.clone();
        let callback = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            for binding in CLICK_BINDINGS {
                let Ok(Some(matched)) = target.closest(binding.selector) else {
                    continue;
                };
                if binding.prevent_default {
                    event.prevent_default();
                }
                let ctx = ClickContext {
                    service: matched.get_attribute("data-service"),
                    label: matched.get_attribute("data-label"),
                    inside_details_link: matches!(target.closest(PACKAGE_DETAILS_SELECTOR), Ok(Some(_))),
                };
                debug!("Click on {} ({:?})", binding.selector, binding.trigger);
                handle.handle_click(resolve(binding.trigger, ctx));
                break;
            }
        }) as Box<dyn FnMut(Event)>);
        self.listen(dom::document()?.into(), "click", callback)
    }

    /// Observes every element matching `selector` and calls `on_visible` the
    /// first time each one intersects, then stops observing it.
    fn observe_once<F>(
        &mut self,
        selector: &str,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_visible: F,
    ) -> Result<usize, PageError>
    where
        F: FnMut(&Element) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let targets = dom::query_all(selector)?;
        for target in &targets {
            observer.observe(target);
        }
        self.observers.push((observer, callback));
        Ok(targets.len())
    }

    fn observe_reveals(&mut self) -> Result<(), PageError> {
        let handle = self.handle.clone();
        let config = self.handle.config.clone();
        let count = self.observe_once(
            &format!("[{}]", REVEAL_ATTR),
            config.reveal_threshold,
            Some(config.reveal_root_margin.as_str()),
            move |target| {
                match target.get_attribute(REVEAL_ATTR).and_then(|v| v.parse::<usize>().ok()) {
                    Some(slot) => handle.reveal(slot),
                    None => warn!("Animated card without a reveal slot"),
                }
            },
        )?;
        debug!("Observing {} animated cards", count);
        Ok(())
    }

    fn observe_stats(&mut self) -> Result<(), PageError> {
        let handle = self.handle.clone();
        let threshold = self.handle.config.stats_threshold;
        let count = self.observe_once(STATS_SELECTOR, threshold, None, move |_| handle.start_counters())?;
        if count == 0 {
            warn!("No {} on the page, counters stay at zero", STATS_SELECTOR);
        }
        Ok(())
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        for listener in self.listeners.drain(..) {
            if let Err(e) = listener
                .target
                .remove_event_listener_with_callback(listener.event, listener.callback.as_ref().unchecked_ref())
            {
                error!("Failed to remove {} listener: {}", listener.event, PageError::from(e));
            }
        }
        for (observer, _callback) in self.observers.drain(..) {
            observer.disconnect();
        }
        self.handle.cancel_timers();
        self.torn_down = true;
        info!("Page controller torn down");
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        self.teardown();
    }
}
