// mobile navigation menu
//
// the menu is either open or closed.  opening and closing are mirrored across four
// regions (panel, burger, overlay, and the body scroll lock), which are all derived
// from this one value so they cannot drift apart

pub const SLIDE_IN: &str = "slideInRight 0.4s cubic-bezier(0.4, 0, 0.2, 1) forwards";
pub const SLIDE_OUT: &str = "slideOutRight 0.4s cubic-bezier(0.4, 0, 0.2, 1) forwards";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

// the events that can move the menu
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    BurgerClick,
    OverlayClick,
    // a click that landed outside both the panel and the burger
    OutsideClick,
    LinkClick { viewport_width: f64 },
    CallToActionClick { viewport_width: f64 },
    Resize { viewport_width: f64 },
}

// the panel animation is only touched by a plain toggle; a forced close leaves
// whatever animation was last applied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    pub state: MenuState,
    pub animation: Option<&'static str>,
}

impl Menu {
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self, force_close: bool) {
        if force_close {
            self.state = MenuState::Closed;
            return;
        }

        match self.state {
            MenuState::Closed => {
                self.state = MenuState::Open;
                self.animation = Some(SLIDE_IN);
            }
            MenuState::Open => {
                self.state = MenuState::Closed;
                self.animation = Some(SLIDE_OUT);
            }
        }
    }

    // route an event to the matching toggle
    //
    // returns true if anything was changed
    pub fn handle(&mut self, event: MenuEvent, desktop_breakpoint: f64) -> bool {
        let before = *self;

        match event {
            MenuEvent::BurgerClick => self.toggle(false),
            MenuEvent::OverlayClick => self.toggle(true),
            MenuEvent::OutsideClick => {
                if self.is_open() {
                    self.toggle(true)
                }
            }
            MenuEvent::LinkClick { viewport_width } => {
                if viewport_width < desktop_breakpoint {
                    self.toggle(true)
                }
            }
            MenuEvent::CallToActionClick { viewport_width } => {
                if viewport_width < desktop_breakpoint && self.is_open() {
                    self.toggle(true)
                }
            }
            MenuEvent::Resize { viewport_width } => {
                if viewport_width >= desktop_breakpoint && self.is_open() {
                    self.toggle(true)
                }
            }
        }

        *self != before
    }

    fn active(&self, base: &str) -> String {
        if self.is_open() {
            format!("{base} is-active")
        } else {
            base.to_owned()
        }
    }

    pub fn panel_class(&self) -> String {
        self.active("menu")
    }

    pub fn burger_class(&self) -> String {
        self.active("burger")
    }

    pub fn overlay_class(&self) -> String {
        self.active("overlay")
    }

    // whether the body should carry the no-scroll class
    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }

    pub fn panel_style(&self) -> String {
        match self.animation {
            Some(animation) => format!("animation: {animation};"),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BREAKPOINT: f64 = 992.0;

    fn open() -> Menu {
        let mut menu = Menu::default();
        menu.toggle(false);
        menu
    }

    #[test]
    fn starts_closed() {
        let menu = Menu::default();

        assert!(!menu.is_open());
        assert_eq!(menu.panel_class(), "menu");
        assert_eq!(menu.panel_style(), "");
        assert!(!menu.locks_scroll());
    }

    #[test]
    fn toggle_sets_all_regions_and_animation() {
        let mut menu = open();

        assert_eq!(menu.panel_class(), "menu is-active");
        assert_eq!(menu.burger_class(), "burger is-active");
        assert_eq!(menu.overlay_class(), "overlay is-active");
        assert!(menu.locks_scroll());
        assert_eq!(menu.animation, Some(SLIDE_IN));

        menu.toggle(false);

        assert_eq!(menu.panel_class(), "menu");
        assert_eq!(menu.burger_class(), "burger");
        assert_eq!(menu.overlay_class(), "overlay");
        assert!(!menu.locks_scroll());
        assert_eq!(menu.animation, Some(SLIDE_OUT));
    }

    #[test]
    fn force_close_keeps_last_animation() {
        let mut menu = open();
        menu.toggle(true);

        assert!(!menu.is_open());
        assert_eq!(menu.animation, Some(SLIDE_IN));
    }

    #[test]
    fn outside_click_only_closes_an_open_menu() {
        let mut closed = Menu::default();
        assert!(!closed.handle(MenuEvent::OutsideClick, BREAKPOINT));

        let mut menu = open();
        assert!(menu.handle(MenuEvent::OutsideClick, BREAKPOINT));
        assert!(!menu.is_open());
    }

    #[test]
    fn link_click_closes_on_mobile_only() {
        let mut menu = open();
        menu.handle(MenuEvent::LinkClick { viewport_width: 1200.0 }, BREAKPOINT);
        assert!(menu.is_open());

        menu.handle(MenuEvent::LinkClick { viewport_width: 600.0 }, BREAKPOINT);
        assert!(!menu.is_open());
    }

    #[test]
    fn call_to_action_closes_on_mobile() {
        let mut menu = open();
        menu.handle(MenuEvent::CallToActionClick { viewport_width: 1200.0 }, BREAKPOINT);
        assert!(menu.is_open());

        menu.handle(MenuEvent::CallToActionClick { viewport_width: 400.0 }, BREAKPOINT);
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_to_desktop_closes() {
        let mut menu = open();
        menu.handle(MenuEvent::Resize { viewport_width: 991.0 }, BREAKPOINT);
        assert!(menu.is_open());

        menu.handle(MenuEvent::Resize { viewport_width: 992.0 }, BREAKPOINT);
        assert!(!menu.is_open());
    }

    #[test]
    fn burger_and_overlay() {
        let mut menu = Menu::default();

        assert!(menu.handle(MenuEvent::BurgerClick, BREAKPOINT));
        assert!(menu.is_open());
        assert!(menu.handle(MenuEvent::OverlayClick, BREAKPOINT));
        assert!(!menu.is_open());
        assert!(!menu.handle(MenuEvent::OverlayClick, BREAKPOINT));
    }

    fn arb_menu() -> impl Strategy<Value = Menu> {
        prop::collection::vec(any::<bool>(), 0..8).prop_map(|toggles| {
            let mut menu = Menu::default();
            for force in toggles {
                menu.toggle(force);
            }
            menu
        })
    }

    proptest! {
        #[test]
        fn force_close_is_idempotent(menu in arb_menu()) {
            let mut once = menu;
            once.toggle(true);

            let mut twice = menu;
            twice.toggle(true);
            twice.toggle(true);

            prop_assert_eq!(once, twice);
            prop_assert!(!twice.is_open());
        }

        #[test]
        fn resize_past_breakpoint_always_closes(
            menu in arb_menu(),
            width in BREAKPOINT..4000.0,
        ) {
            let mut menu = menu;
            menu.toggle(false);
            if !menu.is_open() {
                menu.toggle(false);
            }
            prop_assert!(menu.is_open());

            menu.handle(MenuEvent::Resize { viewport_width: width }, BREAKPOINT);
            prop_assert!(!menu.is_open());
        }
    }
}
