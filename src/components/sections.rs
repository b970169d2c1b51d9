use yew::prelude::*;

use crate::catalog::{
    RevealGroup, ATTRACTIONS, BRAND, CABS, PACKAGES, SERVICES, TESTIMONIALS, WHY_US,
};
use crate::state::reveal::{reveal_style, RevealTracker};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub reveal: RevealTracker,
}

/// Attributes shared by every animated card: its slot and current style.
fn reveal_attrs(reveal: &RevealTracker, group: RevealGroup, index: usize) -> (String, String) {
    let slot = group.base() + index;
    (slot.to_string(), reveal_style(slot, reveal.is_revealed(slot)))
}

fn section_header(tag: &'static str, title: &'static str, blurb: &'static str) -> Html {
    html! {
        <div class="section-header">
            <span class="section-tag">{tag}</span>
            <h2>{title}</h2>
            <p>{blurb}</p>
        </div>
    }
}

#[function_component(ServicesSection)]
pub fn services_section(props: &RevealProps) -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                { section_header("What we do", "Our services", "Tap a service to start your booking.") }
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| {
                        let (slot, style) = reveal_attrs(&props.reveal, RevealGroup::Services, i);
                        html! {
                            <div class="service-card" data-service={service.value} data-label={service.label}
                                data-reveal={slot} style={style}>
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.label}</h3>
                                <p>{service.blurb}</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(PackagesSection)]
pub fn packages_section(props: &RevealProps) -> Html {
    html! {
        <section id="packages" class="packages">
            <div class="container">
                { section_header("Tours", "Popular packages", "All-inclusive fares: fuel, tolls, parking and driver allowance.") }
                <div class="packages-grid">
                    { for PACKAGES.iter().enumerate().map(|(i, package)| {
                        let (slot, style) = reveal_attrs(&props.reveal, RevealGroup::Packages, i);
                        html! {
                            <div class="package-card" data-service={package.service} data-label={package.label}
                                data-reveal={slot} style={style}>
                                <span class="pkg-duration">{package.duration}</span>
                                <h3>{package.label}</h3>
                                <ul class="pkg-highlights">
                                    { for package.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
                                </ul>
                                <div class="pkg-footer">
                                    <span class="pkg-price">{package.price}</span>
                                    <a href={format!("/packages/{}.html", package.slug)} class="pkg-btn">
                                        {"View Details"}
                                    </a>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FleetSection)]
pub fn fleet_section(props: &RevealProps) -> Html {
    html! {
        <section id="fleet" class="fleet">
            <div class="container">
                { section_header("Fleet", "Choose your cab", "Every car is air-conditioned and GPS tracked.") }
                <div class="cabs-grid">
                    { for CABS.iter().enumerate().map(|(i, cab)| {
                        let (slot, style) = reveal_attrs(&props.reveal, RevealGroup::Cabs, i);
                        html! {
                            <div class="cab-card" data-label={cab.name} data-reveal={slot} style={style}>
                                <h4>{cab.name}</h4>
                                <p class="cab-models">{cab.models}</p>
                                <div class="cab-meta">
                                    <span>{format!("👤 {} seats", cab.seats)}</span>
                                    <span class="cab-rate">{cab.rate}</span>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AttractionsSection)]
pub fn attractions_section(props: &RevealProps) -> Html {
    html! {
        <section id="attractions" class="attractions">
            <div class="container">
                { section_header("Explore", "Places we drive you to", "Our drivers know the best time to visit each one.") }
                <div class="attractions-grid">
                    { for ATTRACTIONS.iter().enumerate().map(|(i, place)| {
                        let (slot, style) = reveal_attrs(&props.reveal, RevealGroup::Attractions, i);
                        html! {
                            <div class="attraction-card" data-reveal={slot} style={style}>
                                <h3>{place.name}</h3>
                                <p>{place.blurb}</p>
                                <a href="#booking" class="attraction-link"
                                    data-service={place.service} data-label={place.label}>
                                    {"Book a visit →"}
                                </a>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(WhyUsSection)]
pub fn why_us_section(props: &RevealProps) -> Html {
    html! {
        <section id="why-us" class="why-us">
            <div class="container">
                { section_header("Why us", "Ride with confidence", "Fifteen years of getting people where they need to be.") }
                <div class="why-grid">
                    { for WHY_US.iter().enumerate().map(|(i, card)| {
                        let (slot, style) = reveal_attrs(&props.reveal, RevealGroup::WhyUs, i);
                        html! {
                            <div class="why-card" data-reveal={slot} style={style}>
                                <h4>{card.title}</h4>
                                <p>{card.blurb}</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &RevealProps) -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                { section_header("Reviews", "What riders say", "") }
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                        let (slot, style) = reveal_attrs(&props.reveal, RevealGroup::Testimonials, i);
                        html! {
                            <div class="testimonial-card" data-reveal={slot} style={style}>
                                <p class="quote">{format!("“{}”", t.quote)}</p>
                                <span class="author">{format!("{}, {}", t.name, t.city)}</span>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub support_phone: String,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let tel = format!("tel:{}", props.support_phone.replace(' ', ""));
    html! {
        <>
            <section id="contact" class="contact">
                <div class="container contact-inner">
                    <div>
                        <h2>{"Need a cab right now?"}</h2>
                        <p>{"Our dispatch desk answers around the clock."}</p>
                    </div>
                    <a href={tel} class="btn btn-primary phone-cta">{format!("📞 Call {}", props.support_phone)}</a>
                </div>
            </section>
            <footer class="footer">
                <p>{format!("© {} · Jaipur, Rajasthan", BRAND)}</p>
            </footer>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_attrs_offset_by_group() {
        let tracker = RevealTracker::new(crate::catalog::reveal_slot_count());
        let (slot, style) = reveal_attrs(&tracker, RevealGroup::Packages, 1);
        assert_eq!(slot, (SERVICES.len() + 1).to_string());
        assert!(style.starts_with("opacity: 0;"));
    }
}
