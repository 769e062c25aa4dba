use crate::constants::{NAVBAR_CONDENSE_AFTER_PX, NAVBAR_SLIDE_DURATION, NAVBAR_SLIDE_FROM_PX};
use crate::easing::Easing;
use crate::tween::Tween;
use std::time::Duration;

/// Navbar chrome for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarState {
    pub visible: bool,
    /// Compact, frosted style once the page has scrolled a little.
    pub condensed: bool,
    pub menu_open: bool,
    /// Vertical slide offset of the bar while it animates in.
    pub offset_y: f32,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self {
            visible: true,
            condensed: false,
            menu_open: false,
            offset_y: 0.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Navbar {
    menu_open: bool,
    elapsed: Duration,
    slide: Tween,
}

impl Navbar {
    pub fn new() -> Self {
        Self {
            menu_open: false,
            elapsed: Duration::ZERO,
            slide: Tween::new(NAVBAR_SLIDE_FROM_PX, 0.0, NAVBAR_SLIDE_DURATION)
                .with_easing(Easing::EaseOut),
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.slide.is_finished(self.elapsed) {
            self.elapsed += dt;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any navigation closes the mobile menu.
    pub fn on_route_change(&mut self) {
        self.menu_open = false;
    }

    #[inline]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn state(&self, visible: bool, scroll: f32) -> NavbarState {
        NavbarState {
            visible,
            condensed: scroll > NAVBAR_CONDENSE_AFTER_PX,
            menu_open: self.menu_open,
            offset_y: self.slide.sample(self.elapsed),
        }
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}
