use yew::prelude::*;

use crate::catalog::{BRAND, NAV_LINKS};
use crate::state::scroll::ScrollState;
use crate::state::MenuState;

const ACTIVE_LINK_COLOR: &str = "#f39c12";

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub scroll: ScrollState,
    pub menu: MenuState,
    pub support_phone: String,
    pub on_toggle: Callback<MouseEvent>,
    pub on_link: Callback<MouseEvent>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps { scroll, menu, support_phone, on_toggle, on_link } = props;

    html! {
        <nav id="navbar" class={classes!("navbar", scroll.navbar_scrolled.then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="logo">{"🚖 "}{BRAND}</a>
                <ul id="navLinks" class={classes!("nav-links", menu.is_open().then(|| "open"))}>
                    { for NAV_LINKS.iter().map(|link| {
                        let style = if scroll.is_active(link.id) {
                            format!("color: {};", ACTIVE_LINK_COLOR)
                        } else {
                            String::new()
                        };
                        html! {
                            <li>
                                <a href={format!("#{}", link.id)} style={style} onclick={on_link.clone()}>
                                    {link.label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <a href={format!("tel:{}", support_phone.replace(' ', ""))} class="nav-phone phone-cta">
                    {"📞 "}{support_phone.clone()}
                </a>
                <button
                    id="hamburger"
                    class={classes!("hamburger", menu.is_open().then(|| "active"))}
                    aria-label="Toggle menu"
                    onclick={on_toggle.clone()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
