use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryListEvent, Node};

use viewstate::{
    ViewState,
    config::{SiteConfig, read_config},
    menu::MenuEvent,
    sections::SectionBounds,
    theme::initial_theme,
    throttle::{Gate, Throttle},
};

use crate::common::{dom, storage::LocalThemeStore};

const SITE_CONFIG: &str = include_str!("../site.toml");

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// page session
//
// one of these is created by App and shared with every component through the context.
// it owns the only mutable view state on the page, along with the (non-reactive)
// configuration and frame gates.  all fields are Copy handles, so the session can be
// moved into as many event handlers as needed
#[derive(Clone, Copy)]
pub struct Session {
    pub view: Signal<ViewState>,
    pub config: CopyValue<SiteConfig>,
    pub throttle: CopyValue<Throttle>,
    frames: CopyValue<Frames>,
}

// requested animation frames, one per gate
//
// dropping a handle before its frame fires cancels it.  a fired handle stays in its
// slot until the next request for that gate replaces it
#[derive(Default)]
struct Frames {
    header: Option<AnimationFrame>,
    back_to_top: Option<AnimationFrame>,
}

impl Frames {
    fn slot(&mut self, gate: Gate) -> &mut Option<AnimationFrame> {
        match gate {
            Gate::Header => &mut self.header,
            Gate::BackToTop => &mut self.back_to_top,
        }
    }
}

impl Session {
    // apply a transition, and only notify subscribers if it changed something
    pub fn update<R>(mut self, transition: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut next = self.view.peek().clone();
        let result = transition(&mut next);

        let changed = next != *self.view.peek();
        if changed {
            dom::sync_document(&next);
            self.view.set(next);
        }
        result
    }

    pub fn menu(self, event: MenuEvent) {
        let layout = self.config.read().layout.clone();
        self.update(|view| {
            view.menu_event(event, &layout);
        });
    }

    pub fn toggle_theme(self) {
        let mut store = self.theme_store();
        self.update(|view| view.toggle_theme(&mut store));
    }

    pub fn theme_store(self) -> LocalThemeStore {
        LocalThemeStore::new(&self.config.read().theme.storage_key)
    }

    pub fn viewport_is_mobile(self) -> bool {
        self.config.read().layout.is_mobile(dom::viewport_width())
    }

    // smooth-scroll to an in-page section, leaving room for the header
    pub fn scroll_to_section(self, id: &str) -> bool {
        let fallback = self.config.read().scroll.fallback_header_height;
        dom::scroll_to_section(id, fallback)
    }

    fn section_bounds(self) -> Vec<Option<SectionBounds>> {
        self.config
            .read()
            .nav
            .iter()
            .map(|link| link.anchor().and_then(dom::section_bounds))
            .collect()
    }

    pub fn resolve_active(self) {
        let scroll = self.config.read().scroll.clone();
        let offset = dom::scroll_offset();
        let header_height = dom::header_height(scroll.fallback_header_height);
        let sections = self.section_bounds();

        self.update(|view| view.resolve_active(offset, header_height, &sections, &scroll));
    }

    pub fn sample_header(self) {
        let scroll = self.config.read().scroll.clone();
        let offset = dom::scroll_offset();
        self.update(|view| view.sample_header(offset, &scroll));
    }

    pub fn sample_back_to_top(self) {
        let scroll = self.config.read().scroll.clone();
        let offset = dom::scroll_offset();
        self.update(|view| view.sample_back_to_top(offset, &scroll));
    }

    // run `sample` on the next frame, unless a frame for this gate is already pending
    fn throttled(mut self, gate: Gate, sample: fn(Session)) {
        if !self.throttle.write().gate(gate).try_acquire() {
            return;
        }

        let frame = request_animation_frame(move |_| {
            sample(self);
            self.throttle.write().gate(gate).release();
        });
        *self.frames.write().slot(gate) = Some(frame);
    }
}

fn load_config() -> SiteConfig {
    match read_config(SITE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            error!("{err:#}, falling back to defaults");
            SiteConfig::default()
        }
    }
}

// create the session, publish it as context, and subscribe to window events
//
// the listeners live in a hook, so they are removed when App unmounts
pub fn use_session() -> Session {
    let config = use_hook(|| CopyValue::new(load_config()));
    let throttle = use_hook(|| CopyValue::new(Throttle::default()));
    let frames = use_hook(|| CopyValue::new(Frames::default()));
    let view = use_signal(|| {
        let store = LocalThemeStore::new(&config.read().theme.storage_key);
        ViewState::new(initial_theme(&store))
    });

    let session = use_context_provider(|| Session {
        view,
        config,
        throttle,
        frames,
    });

    use_hook(move || Rc::new(subscribe(session)));

    // initial pass once the page is in the document
    use_effect(move || {
        dom::sync_document(&session.view.peek());
        session.sample_header();
        session.resolve_active();
        session.sample_back_to_top();
        debug!("initial view state applied");
    });

    session
}

fn subscribe(session: Session) -> Vec<EventListener> {
    let Some(window) = dom::window() else {
        warn!("no global window, page will not react to scrolling");
        return Vec::new();
    };

    let mut listeners = Vec::new();

    listeners.push(EventListener::new(&window, "scroll", move |_| {
        session.throttled(Gate::Header, Session::sample_header);
        session.throttled(Gate::BackToTop, Session::sample_back_to_top);
        session.resolve_active();
    }));

    // transitions are suppressed while the window is being resized.  each resize starts
    // a new quiet period, and only the timer of the latest one re-enables them
    let mut pending: Option<Timeout> = None;
    listeners.push(EventListener::new(&window, "resize", move |_| {
        let generation = session.update(|view| view.resize_started());

        let quiet_ms = session.config.read().layout.resize_quiet_ms;
        let settle = Timeout::new(quiet_ms, move || {
            session.update(|view| {
                if view.resize_settled(generation) {
                    debug!({ generation }, "resize settled");
                }
            });
        });
        drop(pending.replace(settle));

        session.menu(MenuEvent::Resize {
            viewport_width: dom::viewport_width(),
        });
    }));

    // anything outside the panel and the burger, including bare body area
    match dom::document() {
        Some(document) => listeners.push(EventListener::new(&document, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if dom::is_within("menu", &target) || dom::is_within("burger", &target) {
                return;
            }
            session.menu(MenuEvent::OutsideClick);
        })),
        None => warn!("no document, outside clicks will not close the menu"),
    }

    match window.match_media(DARK_SCHEME_QUERY) {
        Ok(Some(query)) => listeners.push(EventListener::new(&query, "change", move |event| {
            let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            let store = session.theme_store();
            let prefers_dark = event.matches();
            session.update(|view| {
                if view.system_scheme_changed(&store, prefers_dark) {
                    debug!({ prefers_dark }, "following os color scheme");
                }
            });
        })),
        Ok(None) => warn!("color scheme query unsupported"),
        Err(err) => error!("failed to query color scheme: {err:?}"),
    }

    listeners
}
