use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserverInit};

use viewstate::{
    config::RevealConfig,
    reveal::{CARD_SELECTOR, CardReveal},
};

use crate::{
    common::{
        dom,
        observer::{Observer, observer_supported, read_tag, tag},
    },
    session::Session,
};

const ID_ATTRIBUTE: &str = "data-reveal-id";

fn apply(card: &Element, state: CardReveal, config: &RevealConfig) {
    let Some(card) = card.dyn_ref::<HtmlElement>() else {
        return;
    };

    let style = card.style();
    let _ = style.set_property("opacity", state.opacity());
    let _ = style.set_property("transform", &state.transform(config));
}

// card entrance animation
pub fn use_card_reveal() {
    let session = use_context::<Session>();
    let observer: Rc<RefCell<Option<Observer>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect(move || {
        let config = session.config.read().reveal.clone();
        *observer.borrow_mut() = start(config);
    });
}

fn start(config: RevealConfig) -> Option<Observer> {
    // without an observer the cards would never come back, so leave them alone
    if !observer_supported() {
        debug!("no intersection observer, cards are shown as-is");
        return None;
    }

    let cards = dom::query_all(CARD_SELECTOR);
    let states = Rc::new(RefCell::new(vec![CardReveal::default(); cards.len()]));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let callback_states = states.clone();
    let callback_config = config.clone();
    let observer = Observer::new(&options, move |entry, observer| {
        let target = entry.target();
        let Some(id) = read_tag(&target, ID_ATTRIBUTE) else {
            return;
        };

        let mut states = callback_states.borrow_mut();
        let Some(state) = states.get_mut(id as usize) else {
            return;
        };

        if state.intersected(entry.is_intersecting()) {
            apply(&target, *state, &callback_config);
            observer.unobserve(&target);
        }
    });

    let observer = match observer {
        Ok(observer) => observer,
        Err(err) => {
            error!("{err}");
            return None;
        }
    };

    for (id, card) in (0u32..).zip(cards.iter()) {
        apply(card, CardReveal::Hidden, &config);
        if let Some(card) = card.dyn_ref::<HtmlElement>() {
            let _ = card.style().set_property("transition", &config.transition);
        }
        tag(card, ID_ATTRIBUTE, id);
        observer.observe(card);
    }

    debug!({ count = cards.len() }, "watching cards");
    Some(observer)
}
