use leptos::prelude::*;

/// Scroll distance after which the navbar compacts and back-to-top shows.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Height of the fixed navbar that anchored sections must clear.
pub const NAV_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_THRESHOLD
    }

    /// Fraction of the scrollable height already scrolled, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

/// Where to scroll so an element's top lands just under the navbar.
pub fn section_offset(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - NAV_HEIGHT).max(0.0)
}

/// Damped spring used to smooth the progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    rest_delta: f64,
    position: f64,
    velocity: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(100.0, 30.0, 0.001)
    }
}

impl Spring {
    const MAX_STEP: f64 = 1.0 / 240.0;
    const MAX_FRAME: f64 = 0.1;

    pub fn new(stiffness: f64, damping: f64, rest_delta: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta,
            position: 0.0,
            velocity: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_resting_at(&self, target: f64) -> bool {
        (target - self.position).abs() < self.rest_delta && self.velocity.abs() < self.rest_delta
    }

    /// Advances by `dt` seconds towards `target` and returns the new position.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        // A backgrounded tab can hand us a huge frame gap
        let mut remaining = dt.clamp(0.0, Self::MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(Self::MAX_STEP);
            let force = -self.stiffness * (self.position - target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_resting_at(target) {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }
}

/// Derived scroll state shared by the navbar, progress bar and back-to-top.
#[derive(Clone, Copy)]
pub struct ScrollObserver {
    scrolled: RwSignal<bool>,
    target: RwSignal<f64>,
    progress: RwSignal<f64>,
    spring: StoredValue<Spring>,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollObserver {
    pub fn new() -> Self {
        Self {
            scrolled: RwSignal::new(false),
            target: RwSignal::new(0.0),
            progress: RwSignal::new(0.0),
            spring: StoredValue::new(Spring::default()),
        }
    }

    pub fn scrolled(&self) -> ReadSignal<bool> {
        self.scrolled.read_only()
    }

    /// Smoothed progress ratio.
    pub fn progress(&self) -> ReadSignal<f64> {
        self.progress.read_only()
    }

    /// Records a scroll sample. Only writes signals whose value changed.
    pub fn observe(&self, metrics: ScrollMetrics) {
        let scrolled = metrics.is_scrolled();
        if self.scrolled.get_untracked() != scrolled {
            self.scrolled.set(scrolled);
        }
        let target = metrics.progress();
        if self.target.get_untracked() != target {
            self.target.set(target);
        }
    }

    /// One animation frame of smoothing.
    pub fn tick(&self, dt: f64) -> f64 {
        let target = self.target.get_untracked();
        let mut position = 0.0;
        self.spring.update_value(|spring| position = spring.step(target, dt));
        if self.progress.get_untracked() != position {
            self.progress.set(position);
        }
        position
    }
}
