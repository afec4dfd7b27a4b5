use tracing::debug;

use crate::{
    config::{LayoutConfig, ScrollConfig},
    debounce::ResizeDebounce,
    header::HeaderState,
    menu::{Menu, MenuEvent},
    sections::{SectionBounds, probe_point, resolve_active},
    theme::{Theme, ThemeStore, system_changed, toggle_theme},
};

// view state
//
// this is the whole of the page's interactive state, constructed once per page session.
// every handler mutates it through one of the methods below, and everything visible
// (classes, inline styles, document attributes) is derived from it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub menu: Menu,
    pub header: HeaderState,
    pub active_link: Option<usize>,
    pub back_to_top: bool,
    pub resize: ResizeDebounce,
    pub theme: Theme,
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        ViewState {
            theme,
            ..Default::default()
        }
    }

    pub fn sample_header(&mut self, offset: f64, config: &ScrollConfig) {
        self.header = self.header.next(offset, config.scrolled_threshold);
    }

    pub fn sample_back_to_top(&mut self, offset: f64, config: &ScrollConfig) {
        self.back_to_top = offset > config.back_to_top_threshold;
    }

    pub fn resolve_active(
        &mut self,
        offset: f64,
        header_height: f64,
        sections: &[Option<SectionBounds>],
        config: &ScrollConfig,
    ) {
        let probe = probe_point(offset, header_height, config.active_probe_offset);
        self.active_link = resolve_active(probe, sections);
    }

    // a clicked link is marked active straight away; the next scroll sample takes over
    pub fn select_link(&mut self, index: usize) {
        self.active_link = Some(index);
    }

    pub fn menu_event(&mut self, event: MenuEvent, layout: &LayoutConfig) -> bool {
        let changed = self.menu.handle(event, layout.desktop_breakpoint);
        if changed {
            debug!({ event = ?event, open = self.menu.is_open() }, "menu changed");
        }
        changed
    }

    // body transitions stop straight away; the returned generation settles them later
    pub fn resize_started(&mut self) -> u64 {
        self.resize.resized()
    }

    pub fn resize_settled(&mut self, generation: u64) -> bool {
        self.resize.settled(generation)
    }

    pub fn toggle_theme(&mut self, store: &mut impl ThemeStore) {
        self.theme = toggle_theme(self.theme, store);
    }

    pub fn system_scheme_changed(&mut self, store: &impl ThemeStore, prefers_dark: bool) -> bool {
        match system_changed(store, prefers_dark) {
            Some(theme) => {
                self.theme = theme;
                true
            }
            None => false,
        }
    }

    pub fn link_class(&self, index: usize) -> &'static str {
        if self.active_link == Some(index) {
            "menu-link active"
        } else {
            "menu-link"
        }
    }

    pub fn back_to_top_display(&self) -> &'static str {
        if self.back_to_top { "flex" } else { "none" }
    }

    // classes that belong on <body>, which lives outside the rendered tree
    pub fn body_classes(&self) -> [(&'static str, bool); 2] {
        [
            ("no-scroll", self.menu.locks_scroll()),
            ("resize-animation-stopper", self.resize.is_active()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SiteConfig,
        header::Direction,
        theme::{MemoryStore, initial_theme},
    };
    use proptest::prelude::*;

    #[test]
    fn scroll_drives_header_and_back_to_top_separately() {
        let config = SiteConfig::default();
        let mut view = ViewState::default();

        view.sample_header(350.0, &config.scroll);

        assert!(view.header.scrolled);
        assert_eq!(view.header.direction, Direction::ScrollingDown);
        assert!(!view.back_to_top);
        assert_eq!(view.back_to_top_display(), "none");

        view.sample_back_to_top(350.0, &config.scroll);

        assert!(view.back_to_top);
        assert_eq!(view.back_to_top_display(), "flex");
    }

    #[test]
    fn back_to_top_threshold_is_strict() {
        let config = SiteConfig::default();
        let mut view = ViewState::default();

        view.sample_back_to_top(300.0, &config.scroll);
        assert!(!view.back_to_top);
    }

    #[test]
    fn clicked_link_holds_until_next_sample() {
        let config = SiteConfig::default();
        let sections = [
            Some(SectionBounds { top: 0.0, height: 1000.0 }),
            Some(SectionBounds { top: 1000.0, height: 1000.0 }),
        ];
        let mut view = ViewState::default();

        view.resolve_active(0.0, 80.0, &sections, &config.scroll);
        assert_eq!(view.active_link, Some(0));

        view.select_link(1);
        assert_eq!(view.link_class(1), "menu-link active");
        assert_eq!(view.link_class(0), "menu-link");

        view.resolve_active(10.0, 80.0, &sections, &config.scroll);
        assert_eq!(view.active_link, Some(0));
    }

    #[test]
    fn open_menu_locks_body_scroll() {
        let config = SiteConfig::default();
        let mut view = ViewState::default();

        assert!(view.menu_event(MenuEvent::BurgerClick, &config.layout));
        assert_eq!(view.body_classes()[0], ("no-scroll", true));

        view.resize_started();
        assert_eq!(view.body_classes()[1], ("resize-animation-stopper", true));

        assert!(view.menu_event(
            MenuEvent::Resize { viewport_width: 1280.0 },
            &config.layout
        ));
        assert_eq!(view.body_classes()[0], ("no-scroll", false));
    }

    #[test]
    fn stale_resize_timer_keeps_transitions_stopped() {
        let mut view = ViewState::default();
        assert_eq!(view.body_classes()[1], ("resize-animation-stopper", false));

        let first = view.resize_started();
        let second = view.resize_started();

        assert!(!view.resize_settled(first));
        assert_eq!(view.body_classes()[1], ("resize-animation-stopper", true));

        assert!(view.resize_settled(second));
        assert_eq!(view.body_classes()[1], ("resize-animation-stopper", false));
    }

    #[test]
    fn theme_through_the_view() {
        let mut store = MemoryStore::new("theme");
        let mut view = ViewState::new(initial_theme(&store));

        assert!(view.system_scheme_changed(&store, true));
        assert_eq!(view.theme, Theme::Dark);

        view.toggle_theme(&mut store);
        assert_eq!(view.theme, Theme::Light);

        assert!(!view.system_scheme_changed(&store, true));
        assert_eq!(view.theme, Theme::Light);
    }

    proptest! {
        #[test]
        fn theme_toggle_twice_restores_marker_and_storage(start_dark in any::<bool>()) {
            let mut store = MemoryStore::new("theme");
            let start = Theme::from_prefers_dark(start_dark);
            store.save(start);

            let mut view = ViewState::new(initial_theme(&store));
            view.toggle_theme(&mut store);
            view.toggle_theme(&mut store);

            prop_assert_eq!(view.theme.marker(), start.marker());
            prop_assert_eq!(store.load(), Some(start));
        }
    }
}
