/// Whether the page has scrolled past the header threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFlag {
    threshold: f64,
    scrolled: bool,
}

impl ScrollFlag {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, scrolled: false }
    }

    pub fn from_offset(offset_y: f64, threshold: f64) -> Self {
        Self { threshold, scrolled: offset_y > threshold }
    }

    /// Recompute from the current offset. Returns true if the flag flipped.
    pub fn update(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for ScrollFlag {
    fn default() -> Self {
        Self::new(50.0)
    }
}

/// Mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!ScrollFlag::from_offset(50.0, 50.0).is_scrolled());
        assert!(ScrollFlag::from_offset(50.5, 50.0).is_scrolled());
        assert!(!ScrollFlag::from_offset(0.0, 50.0).is_scrolled());
    }

    #[test]
    fn update_reports_flips_only() {
        let mut flag = ScrollFlag::new(50.0);
        assert!(!flag.update(10.0));
        assert!(flag.update(120.0));
        assert!(!flag.update(400.0));
        assert!(flag.update(49.0));
        assert!(!flag.is_scrolled());
    }

    #[test]
    fn no_hysteresis_around_threshold() {
        let mut flag = ScrollFlag::new(50.0);
        let mut flips = 0;
        for y in [51.0, 50.0, 51.0, 50.0] {
            if flag.update(y) {
                flips += 1;
            }
        }
        assert_eq!(flips, 4);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
