use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use chrono::NaiveDate;

use crate::catalog::trip_label;
use crate::dates::{format_date, is_before};

pub const HERO_MISSING_MESSAGE: &str = "Please fill in all fields before searching.";
pub const BOOKING_MISSING_MESSAGE: &str = "Please fill in all required fields.";
pub const PAST_DATE_MESSAGE: &str = "Please choose a travel date from today onwards.";

pub const INVALID_BORDER: &str = "#e74c3c";
pub const VALID_BORDER: &str = "#e8e8e8";

/// A required control of one of the booking forms.
pub trait FormField: Copy + Debug + Eq + Hash + 'static {
    const ALL: &'static [Self];

    /// DOM id of the control.
    fn id(self) -> &'static str;

    fn is_date(self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeroField {
    Pickup,
    TripType,
    TripDate,
    Passengers,
}

impl FormField for HeroField {
    const ALL: &'static [Self] = &[
        HeroField::Pickup,
        HeroField::TripType,
        HeroField::TripDate,
        HeroField::Passengers,
    ];

    fn id(self) -> &'static str {
        match self {
            HeroField::Pickup => "pickup",
            HeroField::TripType => "tripType",
            HeroField::TripDate => "tripDate",
            HeroField::Passengers => "passengers",
        }
    }

    fn is_date(self) -> bool {
        self == HeroField::TripDate
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Phone,
    Email,
    Service,
    Date,
    Passengers,
}

impl FormField for BookingField {
    const ALL: &'static [Self] = &[
        BookingField::Name,
        BookingField::Phone,
        BookingField::Email,
        BookingField::Service,
        BookingField::Date,
        BookingField::Passengers,
    ];

    fn id(self) -> &'static str {
        match self {
            BookingField::Name => "bookName",
            BookingField::Phone => "bookPhone",
            BookingField::Email => "bookEmail",
            BookingField::Service => "bookService",
            BookingField::Date => "bookDate",
            BookingField::Passengers => "bookPassengers",
        }
    }

    fn is_date(self) -> bool {
        self == BookingField::Date
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldMark {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldMark {
    pub fn border_color(self) -> Option<&'static str> {
        match self {
            FieldMark::Untouched => None,
            FieldMark::Valid => Some(VALID_BORDER),
            FieldMark::Invalid => Some(INVALID_BORDER),
        }
    }
}

/// Trimmed values of a form that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldValues<F: FormField>(HashMap<F, String>);

impl<F: FormField> FieldValues<F> {
    pub fn get(&self, field: F) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rejection<F: FormField> {
    pub missing: Vec<F>,
    pub past_dates: Vec<F>,
}

impl<F: FormField> Rejection<F> {
    pub fn fields(&self) -> Vec<F> {
        F::ALL
            .iter()
            .copied()
            .filter(|f| self.missing.contains(f) || self.past_dates.contains(f))
            .collect()
    }

    /// Missing fields take precedence over a past date in the message.
    pub fn message(&self, missing_message: &'static str) -> &'static str {
        if self.missing.is_empty() {
            PAST_DATE_MESSAGE
        } else {
            missing_message
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Submission<F: FormField> {
    Accepted(FieldValues<F>),
    Rejected(Rejection<F>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState<F: FormField> {
    values: HashMap<F, String>,
    marks: HashMap<F, FieldMark>,
}

impl<F: FormField> Default for FormState<F> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            marks: HashMap::new(),
        }
    }
}

impl<F: FormField> FormState<F> {
    pub fn value(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn mark(&self, field: F) -> FieldMark {
        self.marks.get(&field).copied().unwrap_or_default()
    }

    /// Marks `invalid` fields and every other field valid.
    pub fn apply_marks(&mut self, invalid: &[F]) {
        for field in F::ALL {
            let mark = if invalid.contains(field) {
                FieldMark::Invalid
            } else {
                FieldMark::Valid
            };
            self.marks.insert(*field, mark);
        }
    }

    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.marks.clear();
    }

    /// Every field must be non-empty after trimming, and date fields may
    /// not be earlier than `today`.
    pub fn validate(&self, today: NaiveDate) -> Submission<F> {
        let mut missing = Vec::new();
        let mut past_dates = Vec::new();
        let mut values = HashMap::new();

        for field in F::ALL {
            let value = self.value(*field).trim();
            if value.is_empty() {
                missing.push(*field);
            } else if field.is_date() && is_before(value, today) {
                past_dates.push(*field);
            } else {
                values.insert(*field, value.to_string());
            }
        }

        if missing.is_empty() && past_dates.is_empty() {
            Submission::Accepted(FieldValues(values))
        } else {
            Submission::Rejected(Rejection { missing, past_dates })
        }
    }
}

pub fn hero_search_message(values: &FieldValues<HeroField>) -> String {
    format!(
        "Searching cabs for {} on {}...",
        trip_label(values.get(HeroField::TripType)),
        format_date(values.get(HeroField::TripDate))
    )
}

pub fn booking_confirmation_message(values: &FieldValues<BookingField>) -> String {
    format!(
        "Booking confirmed! We'll contact {} on {} shortly.",
        values.get(BookingField::Name),
        values.get(BookingField::Phone)
    )
}

pub fn prefill_message(label: &str) -> String {
    format!("\"{}\" selected — fill in your details below.", label)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Processing,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            SubmitState::Idle => "Book Now",
            SubmitState::Processing => "Processing...",
        }
    }

    pub fn is_disabled(self) -> bool {
        self == SubmitState::Processing
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    Off,
    On,
}

impl Highlight {
    pub fn style(self) -> &'static str {
        match self {
            Highlight::Off => "",
            Highlight::On => "border-color: #f39c12; box-shadow: 0 0 0 3px rgba(243,156,18,0.2);",
        }
    }
}

/// The detailed booking form: field values plus the submit control and the
/// service selector's pre-fill highlight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub fields: FormState<BookingField>,
    pub submit: SubmitState,
    pub service_highlight: Highlight,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn filled_hero() -> FormState<HeroField> {
        let mut form = FormState::default();
        form.set(HeroField::Pickup, "  Jaipur Airport ");
        form.set(HeroField::TripType, "round-trip");
        form.set(HeroField::TripDate, "2026-10-21");
        form.set(HeroField::Passengers, "3");
        form
    }

    fn filled_booking() -> FormState<BookingField> {
        let mut form = FormState::default();
        form.set(BookingField::Name, "Priya Sharma");
        form.set(BookingField::Phone, "98290 12345");
        form.set(BookingField::Email, "priya@example.com");
        form.set(BookingField::Service, "airport");
        form.set(BookingField::Date, "2026-10-19");
        form.set(BookingField::Passengers, "2");
        form
    }

    #[test]
    fn any_empty_hero_field_rejects() {
        for field in HeroField::ALL {
            let mut form = filled_hero();
            form.set(*field, "   ");
            match form.validate(today()) {
                Submission::Rejected(rejection) => {
                    assert_eq!(rejection.fields(), vec![*field]);
                    assert_eq!(rejection.message(HERO_MISSING_MESSAGE), HERO_MISSING_MESSAGE);
                }
                Submission::Accepted(_) => panic!("{:?} left empty but accepted", field),
            }
        }
    }

    #[test]
    fn accepted_hero_values_are_trimmed() {
        let Submission::Accepted(values) = filled_hero().validate(today()) else {
            panic!("complete form rejected");
        };
        assert_eq!(values.get(HeroField::Pickup), "Jaipur Airport");
        assert_eq!(
            hero_search_message(&values),
            "Searching cabs for Round Trip on 21 Oct 2026..."
        );
    }

    #[test]
    fn past_date_is_rejected_with_its_own_message() {
        let mut form = filled_booking();
        form.set(BookingField::Date, "2026-10-18");
        let Submission::Rejected(rejection) = form.validate(today()) else {
            panic!("past date accepted");
        };
        assert_eq!(rejection.fields(), vec![BookingField::Date]);
        assert_eq!(rejection.message(BOOKING_MISSING_MESSAGE), PAST_DATE_MESSAGE);
    }

    #[test]
    fn confirmation_names_the_customer() {
        let Submission::Accepted(values) = filled_booking().validate(today()) else {
            panic!("complete form rejected");
        };
        let message = booking_confirmation_message(&values);
        assert!(message.contains("Priya Sharma"));
        assert!(message.contains("98290 12345"));
    }

    #[test]
    fn prefill_toast_names_the_selection() {
        assert_eq!(
            prefill_message("Airport Transfer"),
            "\"Airport Transfer\" selected — fill in your details below."
        );
    }

    #[test]
    fn marks_cover_every_field() {
        let mut form = FormState::<BookingField>::default();
        form.apply_marks(&[BookingField::Email]);
        assert_eq!(form.mark(BookingField::Email), FieldMark::Invalid);
        assert_eq!(form.mark(BookingField::Name), FieldMark::Valid);
        assert_eq!(FieldMark::Invalid.border_color(), Some(INVALID_BORDER));
        form.reset();
        assert_eq!(form.mark(BookingField::Email), FieldMark::Untouched);
        assert_eq!(form.value(BookingField::Email), "");
    }

    #[test]
    fn submit_control_states() {
        assert_eq!(SubmitState::Idle.label(), "Book Now");
        assert!(!SubmitState::Idle.is_disabled());
        assert_eq!(SubmitState::Processing.label(), "Processing...");
        assert!(SubmitState::Processing.is_disabled());
    }
}
