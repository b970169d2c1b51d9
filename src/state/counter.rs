use crate::catalog::Stat;

/// Linear count-up from zero to `target` in a fixed number of ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    pub fn new(target: u64, suffix: impl Into<String>, steps: u32) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            steps: steps.max(1),
            step: 0,
        }
    }

    /// Advances one tick. Returns false once the target has been reached.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.target as f64;
        }
        let increment = self.target as f64 / self.steps as f64;
        (increment * self.step as f64).min(self.target as f64)
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.value().floor() as u64, self.suffix)
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

/// The hero stats. They start together, at most once.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterBoard {
    started: bool,
    counters: Vec<CounterAnimation>,
}

impl CounterBoard {
    pub fn from_stats(stats: &[Stat], steps: u32) -> Self {
        Self {
            started: false,
            counters: stats
                .iter()
                .map(|s| CounterAnimation::new(s.target, s.suffix, steps))
                .collect(),
        }
    }

    /// Returns false if the board was already started.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub fn tick(&mut self) -> bool {
        if !self.started {
            return false;
        }
        self.counters.iter_mut().fold(false, |any, c| c.tick() || any)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.counters.iter().all(CounterAnimation::is_finished)
    }

    pub fn display(&self, index: usize) -> String {
        self.counters.get(index).map(CounterAnimation::display).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_to_target_without_overshoot() {
        let mut counter = CounterAnimation::new(250, "+", 60);
        assert_eq!(counter.display(), "0+");
        let mut ticks = 0;
        while counter.tick() {
            ticks += 1;
            assert!(counter.value() <= 250.0);
        }
        assert_eq!(ticks, 60);
        assert_eq!(counter.display(), "250+");
    }

    #[test]
    fn display_is_floored() {
        let mut counter = CounterAnimation::new(10, "", 60);
        for _ in 0..7 {
            counter.tick();
        }
        // 7 * 10/60 = 1.16..
        assert_eq!(counter.display(), "1");
    }

    #[test]
    fn board_starts_once_and_only_ticks_when_started() {
        let stats = [Stat { target: 24, suffix: "/7", label: "Support" }];
        let mut board = CounterBoard::from_stats(&stats, 4);
        assert!(!board.tick());
        assert!(board.start());
        assert!(!board.start());
        while board.tick() {}
        assert!(board.is_finished());
        assert_eq!(board.display(0), "24/7");
    }
}
