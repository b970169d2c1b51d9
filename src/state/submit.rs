use chrono::NaiveDate;

use crate::config::PageConfig;

use super::forms::{
    booking_confirmation_message, hero_search_message, BookingForm, FormState, HeroField,
    Submission, BOOKING_MISSING_MESSAGE, HERO_MISSING_MESSAGE,
};
use super::toast::Severity;
use super::PageAction;

/// Work left for after the submit handler returns.
#[derive(Clone, Debug, PartialEq)]
pub enum FollowUp {
    ScrollTo { section: String, delay_ms: u32 },
    /// Finish the simulated booking, then toast `message`.
    ConfirmBooking { message: String, delay_ms: u32 },
}

/// Everything a form submission does, in order: dispatch `action`, show
/// `toast`, schedule `follow_up`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitPlan {
    pub action: Option<PageAction>,
    pub toast: Option<(String, Severity)>,
    pub follow_up: Option<FollowUp>,
}

pub fn plan_hero_submit(form: &FormState<HeroField>, today: NaiveDate, config: &PageConfig) -> SubmitPlan {
    match form.validate(today) {
        Submission::Rejected(rejection) => SubmitPlan {
            toast: Some((rejection.message(HERO_MISSING_MESSAGE).to_string(), Severity::Error)),
            action: Some(PageAction::MarkHero(rejection.fields())),
            follow_up: None,
        },
        Submission::Accepted(values) => SubmitPlan {
            action: Some(PageAction::MarkHero(Vec::new())),
            toast: Some((hero_search_message(&values), Severity::Success)),
            follow_up: Some(FollowUp::ScrollTo {
                section: config.booking_section.clone(),
                delay_ms: config.hero_scroll_delay_ms,
            }),
        },
    }
}

pub fn plan_booking_submit(booking: &BookingForm, today: NaiveDate, config: &PageConfig) -> SubmitPlan {
    if booking.submit.is_disabled() {
        return SubmitPlan::default();
    }
    match booking.fields.validate(today) {
        Submission::Rejected(rejection) => SubmitPlan {
            toast: Some((rejection.message(BOOKING_MISSING_MESSAGE).to_string(), Severity::Error)),
            action: Some(PageAction::MarkBooking(rejection.fields())),
            follow_up: None,
        },
        Submission::Accepted(values) => SubmitPlan {
            action: Some(PageAction::BeginBooking),
            toast: None,
            follow_up: Some(FollowUp::ConfirmBooking {
                message: booking_confirmation_message(&values),
                delay_ms: config.booking_delay_ms,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::Reducible;

    use super::*;
    use crate::state::forms::{BookingField, SubmitState};
    use crate::state::PageState;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn hero_form() -> FormState<HeroField> {
        let mut form = FormState::default();
        form.set(HeroField::Pickup, "Hawa Mahal");
        form.set(HeroField::TripType, "one-way");
        form.set(HeroField::TripDate, "2026-10-20");
        form.set(HeroField::Passengers, "4");
        form
    }

    fn page_with_booking() -> Rc<PageState> {
        let page = Rc::new(PageState::new(Rc::new(PageConfig::default())));
        [
            (BookingField::Name, "Anil Mehta"),
            (BookingField::Phone, "98280 55555"),
            (BookingField::Email, "anil@example.com"),
            (BookingField::Service, "airport"),
            (BookingField::Date, "2026-10-25"),
            (BookingField::Passengers, "3"),
        ]
        .into_iter()
        .fold(page, |page, (field, value)| {
            page.reduce(PageAction::BookingInput(field, value.to_string()))
        })
    }

    #[test]
    fn incomplete_hero_search_never_scrolls() {
        let mut form = hero_form();
        form.set(HeroField::Passengers, "");
        let plan = plan_hero_submit(&form, today(), &PageConfig::default());
        assert_eq!(plan.follow_up, None);
        assert_eq!(
            plan.toast,
            Some((HERO_MISSING_MESSAGE.to_string(), Severity::Error))
        );
        assert_eq!(plan.action, Some(PageAction::MarkHero(vec![HeroField::Passengers])));
    }

    #[test]
    fn hero_search_toasts_then_scrolls_to_booking() {
        let plan = plan_hero_submit(&hero_form(), today(), &PageConfig::default());
        assert_eq!(
            plan.toast,
            Some(("Searching cabs for One Way on 20 Oct 2026...".to_string(), Severity::Success))
        );
        assert_eq!(
            plan.follow_up,
            Some(FollowUp::ScrollTo { section: "booking".into(), delay_ms: 1200 })
        );
    }

    #[test]
    fn booking_processes_then_resets_and_confirms() {
        let config = PageConfig::default();
        let page = page_with_booking();
        let plan = plan_booking_submit(&page.booking, today(), &config);
        assert_eq!(plan.toast, None);

        let page = page.reduce(plan.action.unwrap());
        assert_eq!(page.booking.submit, SubmitState::Processing);

        let Some(FollowUp::ConfirmBooking { message, delay_ms }) = plan.follow_up else {
            panic!("accepted booking without confirmation");
        };
        assert_eq!(delay_ms, 1800);
        assert!(message.contains("Anil Mehta"));
        assert!(message.contains("98280 55555"));

        let page = page.reduce(PageAction::FinishBooking);
        assert_eq!(page.booking.submit, SubmitState::Idle);
        assert_eq!(page.booking.fields.value(BookingField::Name), "");
    }

    #[test]
    fn booking_submit_while_processing_does_nothing() {
        let page = page_with_booking().reduce(PageAction::BeginBooking);
        let plan = plan_booking_submit(&page.booking, today(), &PageConfig::default());
        assert_eq!(plan, SubmitPlan::default());
    }

    #[test]
    fn rejected_booking_marks_fields() {
        let page = page_with_booking().reduce(PageAction::BookingInput(BookingField::Email, " ".into()));
        let plan = plan_booking_submit(&page.booking, today(), &PageConfig::default());
        assert_eq!(plan.action, Some(PageAction::MarkBooking(vec![BookingField::Email])));
        assert_eq!(plan.follow_up, None);
    }
}
