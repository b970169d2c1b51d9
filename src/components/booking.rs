use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::catalog::{PASSENGER_CHOICES, SERVICES};
use crate::components::fields::{mark_style, use_select_value};
use crate::state::forms::{BookingField, BookingForm, FormField};

#[derive(Properties, PartialEq)]
pub struct BookingSectionProps {
    pub booking: BookingForm,
    pub min_date: String,
    pub on_input: Callback<(BookingField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(BookingSection)]
pub fn booking_section(props: &BookingSectionProps) -> Html {
    let BookingSectionProps { booking, min_date, on_input, on_submit } = props;
    let fields = &booking.fields;
    let service_ref = use_select_value(fields.value(BookingField::Service).to_string());
    let passengers_ref = use_select_value(fields.value(BookingField::Passengers).to_string());

    let text_input = |field: BookingField, kind: &'static str, label: &'static str, placeholder: &'static str| {
        let on_input = on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        });
        let min = field.is_date().then(|| min_date.clone());
        html! {
            <div class="form-group">
                <label for={field.id()}>{label}</label>
                <input
                    type={kind}
                    id={field.id()}
                    placeholder={placeholder}
                    min={min}
                    value={fields.value(field).to_string()}
                    style={mark_style(fields.mark(field))}
                    oninput={oninput}
                />
            </div>
        }
    };

    let select_cb = |field: BookingField| {
        let on_input = on_input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_input.emit((field, select.value()));
        })
    };

    let onsubmit = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let service = fields.value(BookingField::Service);
    let passengers = fields.value(BookingField::Passengers);
    let service_style = format!(
        "{}{}",
        mark_style(fields.mark(BookingField::Service)),
        booking.service_highlight.style()
    );

    html! {
        <section id="booking" class="booking-section">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"Reserve"}</span>
                    <h2>{"Book your ride"}</h2>
                    <p>{"Fill in the details and we will confirm your cab by phone within minutes."}</p>
                </div>
                <form id="mainBookingForm" class="booking-form" onsubmit={onsubmit} novalidate={true}>
                    <div class="form-row">
                        { text_input(BookingField::Name, "text", "Full name", "Your name") }
                        { text_input(BookingField::Phone, "tel", "Phone", "+91") }
                    </div>
                    <div class="form-row">
                        { text_input(BookingField::Email, "email", "Email", "you@example.com") }
                        <div class="form-group">
                            <label for={BookingField::Service.id()}>{"Service"}</label>
                            <select
                                ref={service_ref}
                                id={BookingField::Service.id()}
                                style={service_style}
                                onchange={select_cb(BookingField::Service)}
                            >
                                <option value="" selected={service.is_empty()}>{"Choose a service"}</option>
                                { for SERVICES.iter().map(|s| html! {
                                    <option value={s.value} selected={service == s.value}>{s.label}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <div class="form-row">
                        { text_input(BookingField::Date, "date", "Travel date", "") }
                        <div class="form-group">
                            <label for={BookingField::Passengers.id()}>{"Passengers"}</label>
                            <select
                                ref={passengers_ref}
                                id={BookingField::Passengers.id()}
                                style={mark_style(fields.mark(BookingField::Passengers))}
                                onchange={select_cb(BookingField::Passengers)}
                            >
                                <option value="" selected={passengers.is_empty()}>{"Select"}</option>
                                { for PASSENGER_CHOICES.iter().map(|p| html! {
                                    <option value={*p} selected={passengers == *p}>{*p}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled={booking.submit.is_disabled()}>
                        {booking.submit.label()}
                    </button>
                </form>
            </div>
        </section>
    }
}
