use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::{debug, error, warn};
use web_sys::{Element, IntersectionObserverInit};

use viewstate::lazy::{LazyImages, LazyStrategy};

use crate::common::{
    dom,
    observer::{Observer, native_lazy_supported, observer_supported, read_tag, tag},
};

const LAZY_SELECTOR: &str = r#"img[loading="lazy"]"#;
const SOURCE_ATTRIBUTE: &str = "data-src";
const ID_ATTRIBUTE: &str = "data-lazy-id";

fn assign_source(image: &Element, src: &str) {
    if let Err(err) = image.set_attribute("src", src) {
        error!("failed to assign image source {src}: {err:?}");
    }
}

// deferred images
//
// images are rendered with their source in data-src.  once mounted, the sources are
// moved into place according to what the browser supports
pub fn use_lazy_images() {
    let observer: Rc<RefCell<Option<Observer>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect(move || {
        *observer.borrow_mut() = start();
    });
}

fn start() -> Option<Observer> {
    let images = dom::query_all(LAZY_SELECTOR);

    match LazyStrategy::detect(native_lazy_supported(), observer_supported()) {
        LazyStrategy::Native => {
            // TODO: this loads every image up front, defeating loading="lazy"; leave the
            // src untouched here once the page owners confirm that is the intent
            warn!({ count = images.len() }, "assigning all deferred image sources eagerly");

            for image in &images {
                if let Some(src) = image.get_attribute(SOURCE_ATTRIBUTE) {
                    assign_source(image, &src);
                }
            }
            None
        }
        LazyStrategy::Observer => watch(images),
        LazyStrategy::Unsupported => {
            debug!("no lazy loading support, images stay deferred");
            None
        }
    }
}

fn watch(images: Vec<Element>) -> Option<Observer> {
    let pending = Rc::new(RefCell::new(LazyImages::default()));

    let callback_pending = pending.clone();
    let observer = Observer::new(&IntersectionObserverInit::new(), move |entry, observer| {
        let target = entry.target();
        let Some(id) = read_tag(&target, ID_ATTRIBUTE) else {
            return;
        };

        let src = callback_pending
            .borrow_mut()
            .intersected(id, entry.is_intersecting());

        if let Some(src) = src {
            assign_source(&target, &src);
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

    for (id, image) in (0u32..).zip(images.iter()) {
        let Some(src) = image.get_attribute(SOURCE_ATTRIBUTE) else {
            continue;
        };
        tag(image, ID_ATTRIBUTE, id);
        pending.borrow_mut().observe(id, &src);
        observer.observe(image);
    }

    debug!({ count = pending.borrow().len() }, "watching deferred images");
    Some(observer)
}
