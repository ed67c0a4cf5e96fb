use std::rc::Rc;

use yew::prelude::*;

/// Index over a fixed, ordered set of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`. Out-of-range indices are rejected and leave the
    /// carousel where it was.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::GoTo(index) => {
                if !next.go_to(index) {
                    log::warn!("Ignoring carousel jump to {} of {}", index, next.len);
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::schedule::tests::VirtualClock;
    use crate::ui::schedule::Scheduler;
    use std::cell::RefCell;

    #[test]
    fn next_and_prev_wrap() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn go_to_sets_every_valid_index() {
        let mut carousel = Carousel::new(5);
        for i in 0..5 {
            assert!(carousel.go_to(i));
            assert_eq!(carousel.current(), i);
        }
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut carousel = Carousel::new(2);
        carousel.next();
        assert!(!carousel.go_to(2));
        assert!(!carousel.go_to(usize::MAX));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(Carousel::new(2));
        let state = state.reduce(CarouselAction::Next);
        assert_eq!(state.current(), 1);
        let state = state.reduce(CarouselAction::Next);
        assert_eq!(state.current(), 0);
        let state = state.reduce(CarouselAction::Prev);
        assert_eq!(state.current(), 1);
        let state = state.reduce(CarouselAction::GoTo(0));
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn reducer_keeps_state_on_bad_jump() {
        let state = Rc::new(Carousel::new(2));
        let after = Rc::clone(&state).reduce(CarouselAction::GoTo(7));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn hero_returns_to_first_slide_after_full_cycle() {
        let clock = VirtualClock::default();
        let hero = Rc::new(RefCell::new(Carousel::new(3)));

        let _task = {
            let hero = Rc::clone(&hero);
            clock.every(5_000, Box::new(move || hero.borrow_mut().next()))
        };

        clock.advance(5_000);
        assert_eq!(hero.borrow().current(), 1);
        clock.advance(5_000);
        assert_eq!(hero.borrow().current(), 2);
        clock.advance(5_000);
        assert_eq!(hero.borrow().current(), 0);
    }

    #[test]
    fn cancelled_auto_advance_stops_moving() {
        let clock = VirtualClock::default();
        let hero = Rc::new(RefCell::new(Carousel::new(3)));

        let task = {
            let hero = Rc::clone(&hero);
            clock.every(5_000, Box::new(move || hero.borrow_mut().next()))
        };
        clock.advance(5_000);
        drop(task);
        clock.advance(60_000);

        assert_eq!(hero.borrow().current(), 1);
    }
}
