use anyhow::{bail, Result};

/// Index rotation over a fixed, non-empty list of image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    items: Vec<String>,
    current: usize,
    /// Item that was showing before the last change, still fading out.
    previous: Option<usize>,
}

impl CarouselState {
    pub fn new(items: Vec<String>) -> Result<Self> {
        if items.is_empty() {
            bail!("carousel needs at least one item");
        }
        Ok(Self { items, current: 0, previous: None })
    }

    /// Timer tick: step forward, wrapping to the first item.
    pub fn advance(&mut self) {
        self.move_to((self.current + 1) % self.items.len());
    }

    /// Jump straight to `index`. The running timer is left alone.
    ///
    /// # Panics
    /// If `index` is out of range. Dots are generated from the item list, so
    /// this is a caller bug rather than something to recover from.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "carousel index {index} out of range for {} items",
            self.items.len()
        );
        self.move_to(index);
    }

    fn move_to(&mut self, index: usize) {
        if index != self.current {
            self.previous = Some(self.current);
            self.current = index;
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn current_item(&self) -> &str {
        &self.items[self.current]
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Timeline;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("/img{i}.jpeg")).collect()
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Ev {
        Tick,
        Select(usize),
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(CarouselState::new(Vec::new()).is_err());
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut c = CarouselState::new(images(7)).unwrap();
        for _ in 0..7 {
            c.advance();
        }
        assert_eq!(c.current(), 0);
        assert_eq!(c.current_item(), "/img0.jpeg");
    }

    #[test]
    fn single_item_stays_put() {
        let mut c = CarouselState::new(images(1)).unwrap();
        c.advance();
        c.advance();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn index_stays_in_range_under_mixed_operations() {
        let mut c = CarouselState::new(images(3)).unwrap();
        for step in 0..100usize {
            if step % 7 == 0 {
                c.select(step % 3);
            } else {
                c.advance();
            }
            assert!(c.current() < c.len());
        }
    }

    #[test]
    fn previous_tracks_the_outgoing_item() {
        let mut c = CarouselState::new(images(3)).unwrap();
        assert_eq!(c.previous(), None);
        c.advance();
        assert_eq!(c.previous(), Some(0));
        c.select(1);
        assert_eq!(c.previous(), Some(0));
        c.select(2);
        assert_eq!(c.previous(), Some(1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn select_out_of_range_panics() {
        let mut c = CarouselState::new(images(3)).unwrap();
        c.select(3);
    }

    #[test]
    fn three_items_at_5s_after_12_5s_advanced_twice() {
        let mut c = CarouselState::new(images(3)).unwrap();
        let mut timeline = Timeline::new();
        timeline.every(5000, Ev::Tick);
        let mut ticks = 0;
        while let Some((_, ev)) = timeline.next_until(12_500) {
            assert_eq!(ev, Ev::Tick);
            c.advance();
            ticks += 1;
        }
        assert_eq!(ticks, 2);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn manual_select_reads_back_regardless_of_phase() {
        let mut c = CarouselState::new(images(7)).unwrap();
        let mut timeline = Timeline::new();
        timeline.every(5000, Ev::Tick);
        timeline.after(7300, Ev::Select(5));
        while let Some((_, ev)) = timeline.next_until(9_999) {
            match ev {
                Ev::Tick => c.advance(),
                Ev::Select(k) => {
                    c.select(k);
                    assert_eq!(c.current(), 5);
                }
            }
        }
        assert_eq!(c.current(), 5);
        // The timer keeps its phase: next tick is still due at 10s.
        let (at, ev) = timeline.next_until(10_000).unwrap();
        assert_eq!((at, ev), (10_000, Ev::Tick));
        c.advance();
        assert_eq!(c.current(), 6);
    }

    #[test]
    fn independent_instances_do_not_share_index() {
        let mut about = CarouselState::new(images(7)).unwrap();
        let mut culture = CarouselState::new(images(3)).unwrap();
        let mut timeline = Timeline::new();
        timeline.every(5000, "about");
        timeline.every(4000, "culture");
        while let Some((_, which)) = timeline.next_until(20_000) {
            match which {
                "about" => about.advance(),
                _ => culture.advance(),
            }
        }
        // about: 4 ticks, culture: 5 ticks
        assert_eq!(about.current(), 4);
        assert_eq!(culture.current(), 5 % 3);
    }
}
