use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::catalog::{HERO_STATS, PASSENGER_CHOICES, TRIP_TYPES};
use crate::components::fields::{mark_style, use_select_value};
use crate::state::counter::CounterBoard;
use crate::state::forms::{FormField, FormState, HeroField};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub form: FormState<HeroField>,
    pub counters: CounterBoard,
    pub min_date: String,
    pub on_input: Callback<(HeroField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { form, counters, min_date, on_input, on_submit } = props;
    let trip_type_ref = use_select_value(form.value(HeroField::TripType).to_string());
    let passengers_ref = use_select_value(form.value(HeroField::Passengers).to_string());

    let input_cb = |field: HeroField| {
        let on_input = on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };
    let select_cb = |field: HeroField| {
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

    html! {
        <section id="home" class="hero">
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <div class="hero-text">
                    <span class="hero-badge">{"Jaipur's most trusted taxi service"}</span>
                    <h1>{"Explore Rajasthan "}<span class="accent">{"in comfort"}</span></h1>
                    <p>{"Airport transfers, city rides and outstation tours with verified drivers and honest, fixed fares."}</p>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div class="stat">
                                <span class="stat-number">{counters.display(i)}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <form id="heroBookingForm" class="hero-booking" onsubmit={onsubmit} novalidate={true}>
                    <h3>{"Find your cab"}</h3>
                    <div class="form-group">
                        <label for={HeroField::Pickup.id()}>{"Pickup location"}</label>
                        <input
                            type="text"
                            id={HeroField::Pickup.id()}
                            placeholder="Hotel, airport or address"
                            value={form.value(HeroField::Pickup).to_string()}
                            style={mark_style(form.mark(HeroField::Pickup))}
                            oninput={input_cb(HeroField::Pickup)}
                        />
                    </div>
                    <div class="form-group">
                        <label for={HeroField::TripType.id()}>{"Trip type"}</label>
                        <select
                            ref={trip_type_ref}
                            id={HeroField::TripType.id()}
                            style={mark_style(form.mark(HeroField::TripType))}
                            onchange={select_cb(HeroField::TripType)}
                        >
                            <option value="" selected={form.value(HeroField::TripType).is_empty()}>{"Select trip type"}</option>
                            { for TRIP_TYPES.iter().map(|t| html! {
                                <option value={t.value} selected={form.value(HeroField::TripType) == t.value}>{t.label}</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for={HeroField::TripDate.id()}>{"Date"}</label>
                            <input
                                type="date"
                                id={HeroField::TripDate.id()}
                                min={min_date.clone()}
                                value={form.value(HeroField::TripDate).to_string()}
                                style={mark_style(form.mark(HeroField::TripDate))}
                                oninput={input_cb(HeroField::TripDate)}
                            />
                        </div>
                        <div class="form-group">
                            <label for={HeroField::Passengers.id()}>{"Passengers"}</label>
                            <select
                                ref={passengers_ref}
                                id={HeroField::Passengers.id()}
                                style={mark_style(form.mark(HeroField::Passengers))}
                                onchange={select_cb(HeroField::Passengers)}
                            >
                                <option value="" selected={form.value(HeroField::Passengers).is_empty()}>{"Select"}</option>
                                { for PASSENGER_CHOICES.iter().map(|p| html! {
                                    <option value={*p} selected={form.value(HeroField::Passengers) == *p}>{*p}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <button type="submit" class="btn btn-primary">{"Search Cabs"}</button>
                </form>
            </div>
        </section>
    }
}
