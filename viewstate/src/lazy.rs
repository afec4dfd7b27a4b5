use std::collections::HashMap;

// deferred image loading
//
// images are rendered with their real source in a data attribute.  the source is moved
// into place exactly once, either eagerly (when the runtime claims native lazy-loading
// support) or the first time the image intersects the viewport

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyStrategy {
    // the runtime understands loading="lazy"
    Native,
    // fall back to an intersection observer
    Observer,
    // neither is available, so images stay deferred
    Unsupported,
}

impl LazyStrategy {
    pub fn detect(native: bool, observer: bool) -> Self {
        match (native, observer) {
            (true, _) => Self::Native,
            (false, true) => Self::Observer,
            (false, false) => Self::Unsupported,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyImage {
    pub src: String,
    pub loaded: bool,
}

impl LazyImage {
    pub fn new(src: &str) -> Self {
        LazyImage {
            src: src.to_owned(),
            loaded: false,
        }
    }

    // returns the source to assign, but only on the first call
    pub fn load(&mut self) -> Option<&str> {
        if self.loaded {
            return None;
        }
        self.loaded = true;
        Some(&self.src)
    }
}

// bookkeeping for the observer strategy, keyed by an id the caller assigns per element
#[derive(Clone, Debug, Default)]
pub struct LazyImages {
    images: HashMap<u32, LazyImage>,
}

impl LazyImages {
    pub fn observe(&mut self, id: u32, src: &str) {
        self.images.insert(id, LazyImage::new(src));
    }

    pub fn is_observed(&self, id: u32) -> bool {
        self.images.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    // returns the source to assign; the caller stops observing the image after that.
    // a loaded image is dropped from the watch list, so any later entries for it (which
    // the observer may still have queued) are ignored
    pub fn intersected(&mut self, id: u32, is_intersecting: bool) -> Option<String> {
        if !is_intersecting {
            return None;
        }

        let mut image = self.images.remove(&id)?;
        image.load().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_prefers_native() {
        assert_eq!(LazyStrategy::detect(true, true), LazyStrategy::Native);
        assert_eq!(LazyStrategy::detect(true, false), LazyStrategy::Native);
        assert_eq!(LazyStrategy::detect(false, true), LazyStrategy::Observer);
        assert_eq!(LazyStrategy::detect(false, false), LazyStrategy::Unsupported);
    }

    #[test]
    fn image_loads_once() {
        let mut image = LazyImage::new("/img/team-1.jpg");

        assert_eq!(image.load(), Some("/img/team-1.jpg"));
        assert!(image.loaded);
        assert_eq!(image.load(), None);
    }

    #[test]
    fn observer_assigns_source_exactly_once() {
        let mut images = LazyImages::default();
        images.observe(1, "/img/project-a.jpg");
        images.observe(2, "/img/project-b.jpg");

        // not yet in view
        assert_eq!(images.intersected(1, false), None);
        assert!(images.is_observed(1));

        assert_eq!(images.intersected(1, true).as_deref(), Some("/img/project-a.jpg"));
        assert!(!images.is_observed(1));

        // a queued duplicate entry does nothing
        assert_eq!(images.intersected(1, true), None);

        assert_eq!(images.len(), 1);
        assert!(images.is_observed(2));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut images = LazyImages::default();

        assert!(images.is_empty());
        assert_eq!(images.intersected(7, true), None);
    }
}
