/// Attribute carrying an animated card's slot number.
pub const REVEAL_ATTR: &str = "data-reveal";

/// One-shot fade-in flags for every animated card. A slot can only go from
/// hidden to revealed.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(slots: usize) -> Self {
        Self { revealed: vec![false; slots] }
    }

    /// Returns true only the first time a slot is revealed.
    pub fn reveal(&mut self, slot: usize) -> bool {
        match self.revealed.get_mut(slot) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, slot: usize) -> bool {
        self.revealed.get(slot).copied().unwrap_or(false)
    }
}

/// Cards fade in in runs of four: 0s, 0.1s, 0.2s, 0.3s.
pub fn stagger_delay_secs(slot: usize) -> f64 {
    (slot % 4) as f64 * 0.1
}

pub fn reveal_style(slot: usize, revealed: bool) -> String {
    let delay = stagger_delay_secs(slot);
    let (opacity, offset) = if revealed { (1, 0) } else { (0, 30) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); transition: opacity 0.5s ease {delay:.1}s, transform 0.5s ease {delay:.1}s;"
    )
}
