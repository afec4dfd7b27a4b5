// active-section resolution
//
// each in-page navigation link is bound to a section.  the link whose section contains
// the probe point (a fixed distance below the header) is the active one

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

pub fn probe_point(scroll_offset: f64, header_height: f64, probe_offset: f64) -> f64 {
    scroll_offset + header_height + probe_offset
}

// resolve the active link from per-link section bounds
//
// links without a section (external links, or an anchor whose element is missing) are
// None and never match.  section layouts should be disjoint; if they overlap, the first
// matching link wins
pub fn resolve_active(probe: f64, sections: &[Option<SectionBounds>]) -> Option<usize> {
    sections
        .iter()
        .position(|bounds| bounds.is_some_and(|b| b.contains(probe)))
}

// where the page must scroll to so that a section sits just under the header
//
// rect_top is the section's viewport-relative top, as reported by getBoundingClientRect
pub fn scroll_target(rect_top: f64, page_offset: f64, header_height: f64) -> f64 {
    rect_top + page_offset - header_height
}
