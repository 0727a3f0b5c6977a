/// One-shot visibility latch. `Revealed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealLatch {
    #[default]
    Unseen,
    Revealed,
}

impl RevealLatch {
    /// Feed one visibility observation. Returns `true` only for the
    /// observation that flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealLatch::Unseen, true) => {
                *self = RevealLatch::Revealed;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealLatch::Revealed)
    }
}

/// Opacity plus translation of an element at one end of a reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
}

impl Pose {
    pub const SHOWN: Pose = Pose { opacity: 1.0, x: 0.0, y: 0.0 };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px);",
            self.opacity, self.x, self.y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub hidden: Pose,
    pub visible: Pose,
}

impl RevealStyle {
    pub const FADE_UP: RevealStyle = RevealStyle {
        hidden: Pose { opacity: 0.0, x: 0.0, y: 40.0 },
        visible: Pose::SHOWN,
    };

    pub const FADE_UP_SHORT: RevealStyle = RevealStyle {
        hidden: Pose { opacity: 0.0, x: 0.0, y: 20.0 },
        visible: Pose::SHOWN,
    };

    pub const SLIDE_RIGHT: RevealStyle = RevealStyle {
        hidden: Pose { opacity: 0.0, x: -30.0, y: 0.0 },
        visible: Pose::SHOWN,
    };

    pub const FADE: RevealStyle = RevealStyle {
        hidden: Pose { opacity: 0.0, x: 0.0, y: 0.0 },
        visible: Pose::SHOWN,
    };

    pub fn pose(&self, revealed: bool) -> Pose {
        if revealed { self.visible } else { self.hidden }
    }
}

/// Timing for children of a staggered container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Seconds added per child index.
    pub step: f64,
    pub duration: f64,
    pub easing: &'static str,
}

impl Stagger {
    pub const FADE_UP: Stagger = Stagger {
        step: 0.12,
        duration: 0.7,
        easing: "cubic-bezier(0.22, 1, 0.36, 1)",
    };

    pub fn delay(&self, index: usize) -> f64 {
        index as f64 * self.step
    }

    pub fn transition(&self, delay: f64) -> String {
        format!(
            "transition: opacity {d}s {e} {delay:.2}s, transform {d}s {e} {delay:.2}s;",
            d = self.duration,
            e = self.easing,
        )
    }
}

/// Inline style for child `index` of a container that is (or isn't) revealed.
pub fn reveal_css(style: &RevealStyle, stagger: &Stagger, index: usize, revealed: bool) -> String {
    format!(
        "{} {}",
        style.pose(revealed).css(),
        stagger.transition(stagger.delay(index))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn latch_flips_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn stagger_delays_grow_by_step() {
        let s = Stagger::FADE_UP;
        assert_eq!(s.delay(0), 0.0);
        assert!((s.delay(3) - 0.36).abs() < 1e-9);
        assert!(s.transition(s.delay(2)).contains("0.24s"));
    }

    #[test]
    fn fade_up_poses() {
        assert_eq!(
            RevealStyle::FADE_UP.pose(false).css(),
            "opacity: 0; transform: translate(0px, 40px);"
        );
        assert_eq!(
            RevealStyle::FADE_UP.pose(true).css(),
            "opacity: 1; transform: translate(0px, 0px);"
        );
    }

    proptest! {
        #[test]
        fn revealed_stays_revealed(seq in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut latch = RevealLatch::default();
            let mut flips = 0;
            let mut seen = false;
            for intersecting in seq {
                if latch.observe(intersecting) {
                    flips += 1;
                }
                seen |= intersecting;
                prop_assert_eq!(latch.is_revealed(), seen);
            }
            prop_assert!(flips <= 1);
        }
    }
}
