// Click handling for the content cards. One delegated document listener
// walks this table in order and takes the first binding whose selector the
// click target sits inside.

use crate::catalog::service_label;

/// Link inside a package card that navigates instead of pre-filling.
pub const PACKAGE_DETAILS_SELECTOR: &str = ".pkg-btn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTrigger {
    AttractionLink,
    PackageCard,
    ServiceCard,
    CabCard,
    PhoneCta,
}

pub struct ClickBinding {
    pub selector: &'static str,
    pub trigger: ClickTrigger,
    /// Whether the browser's default navigation is suppressed.
    pub prevent_default: bool,
}

pub const CLICK_BINDINGS: &[ClickBinding] = &[
    ClickBinding {
        selector: ".attraction-link[data-service]",
        trigger: ClickTrigger::AttractionLink,
        prevent_default: true,
    },
    ClickBinding {
        selector: ".package-card",
        trigger: ClickTrigger::PackageCard,
        prevent_default: false,
    },
    ClickBinding {
        selector: ".service-card",
        trigger: ClickTrigger::ServiceCard,
        prevent_default: false,
    },
    ClickBinding {
        selector: ".cab-card",
        trigger: ClickTrigger::CabCard,
        prevent_default: false,
    },
    ClickBinding {
        selector: ".phone-cta",
        trigger: ClickTrigger::PhoneCta,
        prevent_default: false,
    },
];

/// What the listener read off the matched element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickContext {
    pub service: Option<String>,
    pub label: Option<String>,
    pub inside_details_link: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    Prefill { service: String, label: String },
    SelectCab { label: String },
    CallSupport,
    Ignore,
}

pub fn resolve(trigger: ClickTrigger, ctx: ClickContext) -> ClickOutcome {
    match trigger {
        ClickTrigger::PackageCard if ctx.inside_details_link => ClickOutcome::Ignore,
        ClickTrigger::PackageCard | ClickTrigger::ServiceCard | ClickTrigger::AttractionLink => {
            match ctx.service.filter(|s| !s.is_empty()) {
                Some(service) => {
                    let label = ctx
                        .label
                        .unwrap_or_else(|| service_label(&service).unwrap_or(&service).to_string());
                    ClickOutcome::Prefill { service, label }
                }
                None => ClickOutcome::Ignore,
            }
        }
        ClickTrigger::CabCard => match ctx.label {
            Some(label) => ClickOutcome::SelectCab { label },
            None => ClickOutcome::Ignore,
        },
        ClickTrigger::PhoneCta => ClickOutcome::CallSupport,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding_for(trigger: ClickTrigger) -> Option<&'static ClickBinding> {
        CLICK_BINDINGS.iter().find(|b| b.trigger == trigger)
    }

    fn card(service: &str, label: &str) -> ClickContext {
        ClickContext {
            service: Some(service.to_string()),
            label: Some(label.to_string()),
            inside_details_link: false,
        }
    }

    #[test]
    fn package_details_link_navigates() {
        let mut ctx = card("outstation", "Golden Triangle");
        ctx.inside_details_link = true;
        assert_eq!(resolve(ClickTrigger::PackageCard, ctx), ClickOutcome::Ignore);
    }

    #[test]
    fn package_body_prefills() {
        assert_eq!(
            resolve(ClickTrigger::PackageCard, card("outstation", "Golden Triangle")),
            ClickOutcome::Prefill {
                service: "outstation".into(),
                label: "Golden Triangle".into()
            }
        );
    }

    #[test]
    fn service_card_prefills_even_inside_a_link() {
        let mut ctx = card("airport", "Airport Transfer");
        ctx.inside_details_link = true;
        assert!(matches!(
            resolve(ClickTrigger::ServiceCard, ctx),
            ClickOutcome::Prefill { .. }
        ));
    }

    #[test]
    fn cards_without_service_do_nothing() {
        let ctx = ClickContext { service: Some(String::new()), ..Default::default() };
        assert_eq!(resolve(ClickTrigger::ServiceCard, ctx), ClickOutcome::Ignore);
    }

    #[test]
    fn attraction_links_suppress_navigation() {
        let binding = binding_for(ClickTrigger::AttractionLink).unwrap();
        assert!(binding.prevent_default);
        assert!(!binding_for(ClickTrigger::PackageCard).unwrap().prevent_default);
    }

    #[test]
    fn attraction_link_is_checked_before_cards() {
        let first = CLICK_BINDINGS.first().unwrap();
        assert_eq!(first.trigger, ClickTrigger::AttractionLink);
    }

    #[test]
    fn missing_label_falls_back_to_service_name() {
        let ctx = ClickContext { service: Some("airport".into()), ..Default::default() };
        assert_eq!(
            resolve(ClickTrigger::AttractionLink, ctx),
            ClickOutcome::Prefill { service: "airport".into(), label: "Airport Transfer".into() }
        );
    }

    #[test]
    fn cab_and_phone_outcomes() {
        let ctx = ClickContext { label: Some("SUV".into()), ..Default::default() };
        assert_eq!(
            resolve(ClickTrigger::CabCard, ctx),
            ClickOutcome::SelectCab { label: "SUV".into() }
        );
        assert_eq!(
            resolve(ClickTrigger::PhoneCta, ClickContext::default()),
            ClickOutcome::CallSupport
        );
    }
}
