// Static page content. Service values double as the option values of the
// booking form's service selector, so cards and links must only reference
// values listed in SERVICES.

pub const BRAND: &str = "Pink City Cabs";

pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "home", label: "Home" },
    NavLink { id: "services", label: "Services" },
    NavLink { id: "packages", label: "Packages" },
    NavLink { id: "fleet", label: "Our Fleet" },
    NavLink { id: "attractions", label: "Attractions" },
    NavLink { id: "booking", label: "Book Now" },
    NavLink { id: "contact", label: "Contact" },
];

pub struct Service {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        value: "airport",
        label: "Airport Transfer",
        icon: "✈️",
        blurb: "On-time pickups and drops at Jaipur International, flight tracking included.",
    },
    Service {
        value: "local",
        label: "Local City Ride",
        icon: "🚕",
        blurb: "Point-to-point rides anywhere inside the city at fixed per-km fares.",
    },
    Service {
        value: "outstation",
        label: "Outstation Trip",
        icon: "🛣️",
        blurb: "One-way or round trips to Delhi, Agra, Udaipur and beyond.",
    },
    Service {
        value: "sightseeing",
        label: "City Sightseeing",
        icon: "🏰",
        blurb: "Full-day forts and palaces circuit with a driver who knows the stories.",
    },
    Service {
        value: "rental",
        label: "Hourly Rental",
        icon: "⏱️",
        blurb: "Keep the cab for 4, 8 or 12 hours and go wherever the day takes you.",
    },
    Service {
        value: "wedding",
        label: "Wedding & Events",
        icon: "💐",
        blurb: "Decorated cars and guest shuttles for weddings and corporate events.",
    },
];

pub fn service_label(value: &str) -> Option<&'static str> {
    SERVICES.iter().find(|s| s.value == value).map(|s| s.label)
}

pub struct Package {
    pub slug: &'static str,
    pub service: &'static str,
    pub label: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
    pub highlights: &'static [&'static str],
}

pub const PACKAGES: &[Package] = &[
    Package {
        slug: "jaipur-heritage-day",
        service: "sightseeing",
        label: "Jaipur Heritage Day",
        duration: "1 Day",
        price: "₹2,499",
        highlights: &["Amber Fort", "City Palace", "Hawa Mahal"],
    },
    Package {
        slug: "golden-triangle",
        service: "outstation",
        label: "Golden Triangle",
        duration: "5 Days / 4 Nights",
        price: "₹18,999",
        highlights: &["Delhi", "Agra", "Jaipur"],
    },
    Package {
        slug: "udaipur-lakes",
        service: "outstation",
        label: "Udaipur Lakes Escape",
        duration: "3 Days / 2 Nights",
        price: "₹11,499",
        highlights: &["Lake Pichola", "Sajjangarh", "Chittorgarh"],
    },
    Package {
        slug: "airport-round-trip",
        service: "airport",
        label: "Airport Round Trip",
        duration: "Pickup + Drop",
        price: "₹1,199",
        highlights: &["Meet & greet", "60 min free wait", "Luggage help"],
    },
];

pub struct Attraction {
    pub name: &'static str,
    pub blurb: &'static str,
    pub service: &'static str,
    pub label: &'static str,
}

pub const ATTRACTIONS: &[Attraction] = &[
    Attraction {
        name: "Amber Fort",
        blurb: "Hilltop fort of sandstone and marble above Maota Lake.",
        service: "sightseeing",
        label: "Amber Fort visit",
    },
    Attraction {
        name: "Hawa Mahal",
        blurb: "The Palace of Winds and its 953 latticed windows.",
        service: "local",
        label: "Hawa Mahal visit",
    },
    Attraction {
        name: "Nahargarh Fort",
        blurb: "Sunset views over the whole Pink City.",
        service: "sightseeing",
        label: "Nahargarh sunset ride",
    },
    Attraction {
        name: "Ranthambore",
        blurb: "Tiger reserve a comfortable three hour drive away.",
        service: "outstation",
        label: "Ranthambore day trip",
    },
];

pub struct Cab {
    pub name: &'static str,
    pub seats: u8,
    pub rate: &'static str,
    pub models: &'static str,
}

pub const CABS: &[Cab] = &[
    Cab { name: "Hatchback", seats: 4, rate: "₹11/km", models: "Swift, WagonR or similar" },
    Cab { name: "Sedan", seats: 4, rate: "₹13/km", models: "Dzire, Etios or similar" },
    Cab { name: "SUV", seats: 6, rate: "₹17/km", models: "Ertiga, Innova or similar" },
    Cab { name: "Tempo Traveller", seats: 12, rate: "₹24/km", models: "Force Traveller 12-seater" },
];

pub struct TripType {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TRIP_TYPES: &[TripType] = &[
    TripType { value: "one-way", label: "One Way" },
    TripType { value: "round-trip", label: "Round Trip" },
    TripType { value: "airport", label: "Airport Transfer" },
    TripType { value: "local", label: "Local Rental" },
];

pub fn trip_label(value: &str) -> &str {
    TRIP_TYPES
        .iter()
        .find(|t| t.value == value)
        .map(|t| t.label)
        .unwrap_or(value)
}

pub struct Stat {
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { target: 12000, suffix: "+", label: "Happy riders" },
    Stat { target: 250, suffix: "+", label: "Cabs on the road" },
    Stat { target: 15, suffix: " yrs", label: "On Rajasthan roads" },
    Stat { target: 24, suffix: "/7", label: "Support" },
];

pub const PASSENGER_CHOICES: &[&str] = &["1", "2", "3", "4", "5", "6", "7+"];

pub struct WhyCard {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const WHY_US: &[WhyCard] = &[
    WhyCard { title: "Verified drivers", blurb: "Background-checked, trained and rated after every trip." },
    WhyCard { title: "No surge pricing", blurb: "The fare you are quoted is the fare you pay." },
    WhyCard { title: "Clean cars", blurb: "Sanitised before every ride and never older than five years." },
    WhyCard { title: "Local knowledge", blurb: "Drivers born and raised in Jaipur." },
];

pub struct Testimonial {
    pub name: &'static str,
    pub city: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ananya R.",
        city: "Bengaluru",
        quote: "Our driver waited an hour when the flight was late and never asked for extra.",
    },
    Testimonial {
        name: "Mark D.",
        city: "London",
        quote: "The heritage day tour was the highlight of our India trip.",
    },
    Testimonial {
        name: "Farhan S.",
        city: "Delhi",
        quote: "Booked the Golden Triangle for my parents. Spotless car, careful driving.",
    },
];

/// Reveal slots are numbered in document order across all animated card
/// groups, so each group starts where the previous one ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealGroup {
    Services,
    Packages,
    Cabs,
    Attractions,
    WhyUs,
    Testimonials,
}

impl RevealGroup {
    pub const ORDER: [RevealGroup; 6] = [
        RevealGroup::Services,
        RevealGroup::Packages,
        RevealGroup::Cabs,
        RevealGroup::Attractions,
        RevealGroup::WhyUs,
        RevealGroup::Testimonials,
    ];

    pub fn len(self) -> usize {
        match self {
            RevealGroup::Services => SERVICES.len(),
            RevealGroup::Packages => PACKAGES.len(),
            RevealGroup::Cabs => CABS.len(),
            RevealGroup::Attractions => ATTRACTIONS.len(),
            RevealGroup::WhyUs => WHY_US.len(),
            RevealGroup::Testimonials => TESTIMONIALS.len(),
        }
    }

    pub fn base(self) -> usize {
        Self::ORDER
            .iter()
            .take_while(|g| **g != self)
            .map(|g| g.len())
            .sum()
    }
}

pub fn reveal_slot_count() -> usize {
    RevealGroup::ORDER.iter().map(|g| g.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_services_exist_in_selector() {
        for p in PACKAGES {
            assert!(service_label(p.service).is_some(), "package {} has unknown service", p.label);
        }
        for a in ATTRACTIONS {
            assert!(service_label(a.service).is_some(), "attraction {} has unknown service", a.name);
        }
    }

    #[test]
    fn reveal_groups_are_contiguous() {
        assert_eq!(RevealGroup::Services.base(), 0);
        assert_eq!(RevealGroup::Packages.base(), SERVICES.len());
        let last = RevealGroup::Testimonials;
        assert_eq!(last.base() + last.len(), reveal_slot_count());
    }

    #[test]
    fn unknown_trip_type_falls_back_to_value() {
        assert_eq!(trip_label("round-trip"), "Round Trip");
        assert_eq!(trip_label("charter"), "charter");
    }
}
