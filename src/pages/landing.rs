use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::components::booking::BookingSection;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::sections::{
    AttractionsSection, ContactSection, FleetSection, PackagesSection, ServicesSection,
    TestimonialsSection, WhyUsSection,
};
use crate::components::toast::{BackToTop, Toast};
use crate::config::PageConfig;
use crate::controller::{PageController, PageHandle};
use crate::dates;
use crate::state::forms::{BookingField, HeroField};
use crate::state::PageState;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<PageConfig>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let state = {
        let config = props.config.clone();
        use_reducer(move || PageState::new(config))
    };
    let handle = {
        let dispatcher = state.dispatcher();
        let config = props.config.clone();
        use_memo(move |_| PageHandle::new(dispatcher, config), ())
    };

    // Bind window/document listeners once the sections exist
    {
        let handle = (*handle).clone();
        use_effect_with_deps(
            move |_| {
                let controller = match PageController::attach(handle) {
                    Ok(controller) => Some(controller),
                    Err(e) => {
                        error!("Failed to bind page controller: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(mut controller) = controller {
                        controller.teardown();
                    }
                }
            },
            (),
        );
    }

    // Counters drive themselves from an interval; stop it at the target
    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |finished| {
                if *finished {
                    handle.stop_counters();
                }
                || ()
            },
            state.counters.is_finished(),
        );
    }

    let on_toggle_menu = {
        let handle = handle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            handle.toggle_menu();
        })
    };
    let on_nav_link = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.close_menu())
    };
    let on_back_to_top = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.back_to_top())
    };
    let on_hero_input = {
        let handle = handle.clone();
        Callback::from(move |(field, value): (HeroField, String)| handle.hero_input(field, value))
    };
    let on_hero_submit = {
        let handle = handle.clone();
        let state = state.clone();
        Callback::from(move |_: ()| handle.submit_hero(&state.hero))
    };
    let on_booking_input = {
        let handle = handle.clone();
        Callback::from(move |(field, value): (BookingField, String)| handle.booking_input(field, value))
    };
    let on_booking_submit = {
        let handle = handle.clone();
        let state = state.clone();
        Callback::from(move |_: ()| handle.submit_booking(&state.booking))
    };

    let min_date = dates::min_input_date(dates::today());

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Navbar
                scroll={state.scroll.clone()}
                menu={state.menu}
                support_phone={props.config.support_phone.clone()}
                on_toggle={on_toggle_menu}
                on_link={on_nav_link}
            />
            <Hero
                form={state.hero.clone()}
                counters={state.counters.clone()}
                min_date={min_date.clone()}
                on_input={on_hero_input}
                on_submit={on_hero_submit}
            />
            <ServicesSection reveal={state.reveal.clone()} />
            <PackagesSection reveal={state.reveal.clone()} />
            <FleetSection reveal={state.reveal.clone()} />
            <AttractionsSection reveal={state.reveal.clone()} />
            <WhyUsSection reveal={state.reveal.clone()} />
            <TestimonialsSection reveal={state.reveal.clone()} />
            <BookingSection
                booking={state.booking.clone()}
                min_date={min_date}
                on_input={on_booking_input}
                on_submit={on_booking_submit}
            />
            <ContactSection support_phone={props.config.support_phone.clone()} />
            <Toast toast={state.toast.clone()} />
            <BackToTop visible={state.scroll.back_to_top_visible} onclick={on_back_to_top} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    * { box-sizing: border-box; margin: 0; padding: 0; }
    html { scroll-behavior: smooth; }
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; color: #2c3e50; background: #fff; }
    .container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }
    section { padding: 90px 0; }
    .section-header { text-align: center; margin-bottom: 48px; }
    .section-tag { color: #f39c12; font-weight: 600; text-transform: uppercase; letter-spacing: 2px; font-size: 0.8rem; }
    .section-header h2 { font-size: 2.2rem; margin: 8px 0; }
    .section-header p { color: #7f8c8d; }
    .accent { color: #f39c12; }

    .navbar { position: fixed; top: 0; left: 0; width: 100%; z-index: 100; padding: 20px 0; transition: all 0.3s ease; }
    .navbar.scrolled { background: #1a1a2e; padding: 12px 0; box-shadow: 0 2px 20px rgba(0,0,0,0.2); }
    .nav-container { max-width: 1200px; margin: 0 auto; padding: 0 20px; display: flex; align-items: center; justify-content: space-between; }
    .logo { color: #fff; font-size: 1.4rem; font-weight: 700; text-decoration: none; }
    .nav-links { display: flex; gap: 28px; list-style: none; }
    .nav-links a { color: #fff; text-decoration: none; font-weight: 500; transition: color 0.2s; }
    .nav-links a:hover { color: #f39c12; }
    .nav-phone { color: #f39c12; text-decoration: none; font-weight: 600; }
    .hamburger { display: none; background: none; border: none; cursor: pointer; }
    .hamburger span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; transition: 0.3s; }

    .hero { min-height: 100vh; position: relative; display: flex; align-items: center; color: #fff;
        background: linear-gradient(135deg, #1a1a2e 0%, #16213e 60%, #c0392b 140%); }
    .hero-overlay { position: absolute; inset: 0; background: rgba(0,0,0,0.25); }
    .hero-content { position: relative; max-width: 1200px; margin: 0 auto; padding: 120px 20px 60px;
        display: grid; grid-template-columns: 1.2fr 1fr; gap: 48px; align-items: center; }
    .hero-badge { display: inline-block; background: rgba(243,156,18,0.15); color: #f39c12; padding: 6px 14px; border-radius: 20px; font-size: 0.85rem; }
    .hero h1 { font-size: 3rem; margin: 18px 0; line-height: 1.15; }
    .hero-stats { display: flex; gap: 32px; margin-top: 36px; }
    .stat-number { display: block; font-size: 2rem; font-weight: 700; color: #f39c12; }
    .stat-label { font-size: 0.85rem; opacity: 0.8; }
    .hero-booking { background: #fff; color: #2c3e50; padding: 28px; border-radius: 16px; box-shadow: 0 20px 60px rgba(0,0,0,0.3); }
    .hero-booking h3 { margin-bottom: 16px; }

    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
    .form-group { display: flex; flex-direction: column; margin-bottom: 16px; }
    .form-group label { font-size: 0.85rem; font-weight: 600; margin-bottom: 6px; }
    .form-group input, .form-group select { padding: 12px 14px; border: 2px solid #e8e8e8; border-radius: 8px; font-size: 0.95rem; transition: border-color 0.2s, box-shadow 0.2s; }
    .btn { display: inline-block; padding: 14px 28px; border: none; border-radius: 8px; font-weight: 600; cursor: pointer; text-decoration: none; }
    .btn-primary { background: #f39c12; color: #fff; }
    .btn-primary:disabled { opacity: 0.7; cursor: wait; }
    .btn-block { width: 100%; }

    .services-grid, .packages-grid, .cabs-grid, .attractions-grid, .why-grid, .testimonials-grid {
        display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; }
    .service-card, .package-card, .cab-card, .attraction-card, .why-card, .testimonial-card {
        background: #fff; border-radius: 14px; padding: 26px; box-shadow: 0 6px 24px rgba(0,0,0,0.07); }
    .service-card, .package-card, .cab-card { cursor: pointer; }
    .service-icon { font-size: 2rem; margin-bottom: 12px; }
    .pkg-duration { font-size: 0.8rem; color: #f39c12; font-weight: 600; }
    .pkg-highlights { margin: 12px 0 18px 18px; color: #7f8c8d; }
    .pkg-footer { display: flex; justify-content: space-between; align-items: center; }
    .pkg-price { font-size: 1.3rem; font-weight: 700; }
    .pkg-btn { color: #f39c12; font-weight: 600; text-decoration: none; }
    .cab-meta { display: flex; justify-content: space-between; margin-top: 14px; }
    .cab-rate { font-weight: 700; color: #f39c12; }
    .attraction-link { display: inline-block; margin-top: 14px; color: #f39c12; font-weight: 600; text-decoration: none; }
    .quote { font-style: italic; margin-bottom: 12px; }
    .author { font-weight: 600; }

    .booking-section { background: #f8f9fa; }
    .booking-form { max-width: 760px; margin: 0 auto; background: #fff; padding: 36px; border-radius: 16px; box-shadow: 0 10px 40px rgba(0,0,0,0.08); }
    .contact { background: #1a1a2e; color: #fff; }
    .contact-inner { display: flex; justify-content: space-between; align-items: center; gap: 24px; }
    .footer { background: #111; color: #aaa; text-align: center; padding: 24px; font-size: 0.85rem; }

    .toast { position: fixed; bottom: 30px; left: 50%; transform: translateX(-50%) translateY(120px); min-width: 280px; max-width: 90vw;
        padding: 14px 22px; border-radius: 10px; color: #fff; z-index: 200; opacity: 0; transition: all 0.35s ease; }
    .toast.success { background: #27ae60; }
    .toast.error { background: #e74c3c; }
    .toast.show { transform: translateX(-50%) translateY(0); opacity: 1; }

    .back-to-top { position: fixed; right: 26px; bottom: 26px; width: 46px; height: 46px; border-radius: 50%; border: none;
        background: #f39c12; color: #fff; font-size: 1.2rem; cursor: pointer; opacity: 0; visibility: hidden; transition: all 0.3s ease; z-index: 150; }
    .back-to-top.visible { opacity: 1; visibility: visible; }

    @media (max-width: 900px) {
        .hero-content { grid-template-columns: 1fr; }
        .hero h1 { font-size: 2.2rem; }
        .hamburger { display: block; }
        .nav-phone { display: none; }
        .nav-links { position: fixed; top: 64px; left: 0; right: 0; flex-direction: column; gap: 0;
            background: #1a1a2e; max-height: 0; overflow: hidden; transition: max-height 0.3s ease; }
        .nav-links.open { max-height: 480px; }
        .nav-links li { padding: 14px 24px; border-top: 1px solid rgba(255,255,255,0.05); }
        .form-row { grid-template-columns: 1fr; }
        .contact-inner { flex-direction: column; text-align: center; }
    }
"#;
