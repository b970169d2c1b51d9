use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::{reveal_slot_count, HERO_STATS};
use crate::config::PageConfig;

use super::counter::CounterBoard;
use super::forms::{BookingField, BookingForm, FormState, HeroField, Highlight, SubmitState};
use super::reveal::RevealTracker;
use super::scroll::{ScrollState, SectionSpan};
use super::toast::{Severity, ToastState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// All UI state of the landing page. Components render from this alone.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub config: Rc<PageConfig>,
    pub scroll: ScrollState,
    pub menu: MenuState,
    pub toast: ToastState,
    pub hero: FormState<HeroField>,
    pub booking: BookingForm,
    pub reveal: RevealTracker,
    pub counters: CounterBoard,
}

impl PageState {
    pub fn new(config: Rc<PageConfig>) -> Self {
        let counters = CounterBoard::from_stats(HERO_STATS, config.counter_steps);
        Self {
            config,
            scroll: ScrollState::default(),
            menu: MenuState::default(),
            toast: ToastState::default(),
            hero: FormState::default(),
            booking: BookingForm::default(),
            reveal: RevealTracker::new(reveal_slot_count()),
            counters,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    Scrolled { y: f64, sections: Vec<SectionSpan> },
    ToggleMenu,
    CloseMenu,
    ShowToast { message: String, severity: Severity, generation: u64 },
    DismissToast { generation: u64 },
    HeroInput(HeroField, String),
    MarkHero(Vec<HeroField>),
    BookingInput(BookingField, String),
    MarkBooking(Vec<BookingField>),
    BeginBooking,
    FinishBooking,
    SelectService(String),
    ClearHighlight,
    Reveal(usize),
    StartCounters,
    CounterTick,
}

impl PageState {
    fn update(self: Rc<Self>, f: impl FnOnce(&mut PageState)) -> Rc<Self> {
        let mut next = (*self).clone();
        f(&mut next);
        Rc::new(next)
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    // Actions that would leave the state unchanged hand back the same Rc so
    // the page does not re-render on every scroll tick.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PageAction::Scrolled { y, sections } => {
                let scroll = self.scroll.next(y, &sections, &self.config);
                if scroll == self.scroll {
                    self
                } else {
                    self.update(|s| s.scroll = scroll)
                }
            }
            PageAction::ToggleMenu => self.update(|s| s.menu = s.menu.toggled()),
            PageAction::CloseMenu if !self.menu.is_open() => self,
            PageAction::CloseMenu => self.update(|s| s.menu = MenuState::Closed),
            PageAction::ShowToast { message, severity, generation } => {
                self.update(|s| s.toast.show(message, severity, generation))
            }
            PageAction::DismissToast { generation }
                if generation != self.toast.generation || !self.toast.is_visible() =>
            {
                self
            }
            PageAction::DismissToast { generation } => self.update(|s| {
                s.toast.dismiss(generation);
            }),
            PageAction::HeroInput(field, value) => self.update(|s| s.hero.set(field, value)),
            PageAction::MarkHero(invalid) => self.update(|s| {
                if invalid.is_empty() {
                    s.hero.clear_marks();
                } else {
                    s.hero.apply_marks(&invalid);
                }
            }),
            PageAction::BookingInput(field, value) => {
                self.update(|s| s.booking.fields.set(field, value))
            }
            PageAction::MarkBooking(invalid) => {
                self.update(|s| s.booking.fields.apply_marks(&invalid))
            }
            PageAction::BeginBooking => self.update(|s| {
                s.booking.fields.apply_marks(&[]);
                s.booking.submit = SubmitState::Processing;
            }),
            PageAction::FinishBooking => self.update(|s| {
                s.booking.fields.reset();
                s.booking.submit = SubmitState::Idle;
            }),
            PageAction::SelectService(value) => self.update(|s| {
                s.booking.fields.set(BookingField::Service, value);
                s.booking.service_highlight = Highlight::On;
            }),
            PageAction::ClearHighlight if self.booking.service_highlight == Highlight::Off => self,
            PageAction::ClearHighlight => self.update(|s| s.booking.service_highlight = Highlight::Off),
            PageAction::Reveal(slot) if self.reveal.is_revealed(slot) => self,
            PageAction::Reveal(slot) => self.update(|s| {
                s.reveal.reveal(slot);
            }),
            PageAction::StartCounters if self.counters.is_started() => self,
            PageAction::StartCounters => self.update(|s| {
                s.counters.start();
            }),
            PageAction::CounterTick if !self.counters.is_started() || self.counters.is_finished() => {
                self
            }
            PageAction::CounterTick => self.update(|s| {
                s.counters.tick();
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Rc<PageState> {
        Rc::new(PageState::new(Rc::new(PageConfig::default())))
    }

    fn apply(state: Rc<PageState>, actions: Vec<PageAction>) -> Rc<PageState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    #[test]
    fn unchanged_scroll_keeps_same_state() {
        let first = state().reduce(PageAction::Scrolled { y: 10.0, sections: vec![] });
        let second = first.clone().reduce(PageAction::Scrolled { y: 20.0, sections: vec![] });
        assert!(Rc::ptr_eq(&first, &second));
        let third = second.reduce(PageAction::Scrolled { y: 80.0, sections: vec![] });
        assert!(third.scroll.navbar_scrolled);
        assert!(!third.scroll.back_to_top_visible);
    }

    #[test]
    fn changed_scroll_replaces_only_scroll_state() {
        let sections = vec![
            SectionSpan::new("home", 0.0, 600.0),
            SectionSpan::new("services", 600.0, 800.0),
        ];
        let before = state().reduce(PageAction::ShowToast {
            message: "hi".into(),
            severity: Severity::Success,
            generation: 1,
        });
        let after = before.clone().reduce(PageAction::Scrolled { y: 700.0, sections });
        assert!(!Rc::ptr_eq(&before, &after));
        assert!(after.scroll.is_active("services"));
        assert!(after.scroll.back_to_top_visible);
        assert_eq!(after.toast, before.toast);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let s = apply(state(), vec![PageAction::ToggleMenu]);
        assert!(s.menu.is_open());
        let s = apply(s, vec![PageAction::CloseMenu]);
        assert_eq!(s.menu, MenuState::Closed);
        let again = s.clone().reduce(PageAction::CloseMenu);
        assert!(Rc::ptr_eq(&s, &again));
    }

    #[test]
    fn second_toast_survives_first_dismissal() {
        let s = apply(
            state(),
            vec![
                PageAction::ShowToast { message: "one".into(), severity: Severity::Success, generation: 1 },
                PageAction::ShowToast { message: "two".into(), severity: Severity::Error, generation: 2 },
                PageAction::DismissToast { generation: 1 },
            ],
        );
        assert!(s.toast.is_visible());
        assert_eq!(s.toast.message, "two");
        let s = s.reduce(PageAction::DismissToast { generation: 2 });
        assert!(!s.toast.is_visible());
    }

    #[test]
    fn booking_cycle_resets_form() {
        let mut actions: Vec<PageAction> = FILLED_BOOKING
            .iter()
            .map(|(f, v)| PageAction::BookingInput(*f, v.to_string()))
            .collect();
        actions.push(PageAction::BeginBooking);
        let s = apply(state(), actions);
        assert_eq!(s.booking.submit, SubmitState::Processing);
        assert_eq!(s.booking.fields.value(BookingField::Name), "Ravi");

        let s = s.reduce(PageAction::FinishBooking);
        assert_eq!(s.booking.submit, SubmitState::Idle);
        assert_eq!(s.booking.fields.value(BookingField::Name), "");
    }

    #[test]
    fn select_service_sets_value_and_highlight() {
        let s = state().reduce(PageAction::SelectService("airport".into()));
        assert_eq!(s.booking.fields.value(BookingField::Service), "airport");
        assert_eq!(s.booking.service_highlight, Highlight::On);
        let s = s.reduce(PageAction::ClearHighlight);
        assert_eq!(s.booking.service_highlight, Highlight::Off);
        assert_eq!(s.booking.fields.value(BookingField::Service), "airport");
    }

    #[test]
    fn prefill_after_reset_drives_service_value() {
        let s = apply(
            state(),
            vec![
                PageAction::BookingInput(BookingField::Service, "airport".into()),
                PageAction::BeginBooking,
                PageAction::FinishBooking,
            ],
        );
        assert_eq!(s.booking.fields.value(BookingField::Service), "");
        let s = s.reduce(PageAction::SelectService("airport".into()));
        assert_eq!(s.booking.fields.value(BookingField::Service), "airport");
    }

    #[test]
    fn reveal_never_reverts() {
        let s = apply(state(), vec![PageAction::Reveal(3)]);
        let again = s.clone().reduce(PageAction::Reveal(3));
        assert!(Rc::ptr_eq(&s, &again));
        assert!(again.reveal.is_revealed(3));
        assert!(!again.reveal.is_revealed(2));
    }

    #[test]
    fn counters_ignore_ticks_until_started() {
        let s = state().reduce(PageAction::CounterTick);
        assert_eq!(s.counters.display(1), "0+");
        let s = s.reduce(PageAction::StartCounters);
        let s = (0..60).fold(s, |s, _| s.reduce(PageAction::CounterTick));
        assert!(s.counters.is_finished());
        assert_eq!(s.counters.display(1), "250+");
    }

    const FILLED_BOOKING: [(BookingField, &str); 6] = [
        (BookingField::Name, "Ravi"),
        (BookingField::Phone, "98290 00000"),
        (BookingField::Email, "ravi@example.com"),
        (BookingField::Service, "local"),
        (BookingField::Date, "2099-01-01"),
        (BookingField::Passengers, "2"),
    ];
}
