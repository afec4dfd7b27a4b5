use anyhow::Context;
use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument};

// site configuration
//
// every threshold, breakpoint and timing the view-state controller uses lives here,
// so that the transition functions take them as inputs rather than hardcoding them.
// all fields have defaults, so a partial (or empty) file is valid
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: ScrollConfig,
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
    pub reveal: RevealConfig,
    pub nav: Vec<NavLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    // header gets the on-scroll class strictly above this offset
    pub scrolled_threshold: f64,

    // back-to-top button is shown strictly above this offset
    pub back_to_top_threshold: f64,

    // distance below the header used to probe for the active section
    pub active_probe_offset: f64,

    // header height assumed when the header element cannot be measured
    pub fallback_header_height: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            scrolled_threshold: 20.0,
            back_to_top_threshold: 300.0,
            active_probe_offset: 100.0,
            fallback_header_height: 80.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    // viewports at least this wide use the desktop navigation
    pub desktop_breakpoint: f64,

    // quiet period before transitions are re-enabled after a resize
    pub resize_quiet_ms: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            desktop_breakpoint: 992.0,
            resize_quiet_ms: 400,
        }
    }
}

impl LayoutConfig {
    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width < self.desktop_breakpoint
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            storage_key: String::from("theme"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    // fraction of the card that must be visible before it is revealed
    pub threshold: f64,

    // intersection root margin, in css shorthand
    pub root_margin: String,

    // initial downward offset of hidden cards
    pub offset_px: u32,

    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: 0.1,
            root_margin: String::from("0px 0px -50px 0px"),
            offset_px: 30,
            transition: String::from("opacity 0.6s ease, transform 0.6s ease"),
        }
    }
}

// a single entry in the navigation menu
//
// hrefs beginning with '#' are in-page anchors and take part in active-section
// tracking and smooth scrolling; anything else is an ordinary link
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        NavLink {
            label: label.to_owned(),
            href: href.to_owned(),
        }
    }

    // the target element id, if this link points into the page
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    site: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!({ nav_links = data.site.nav.len() }, "successfully parsed site config");
    Ok(data.site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = read_config("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.scroll.scrolled_threshold, 20.0);
        assert_eq!(config.layout.desktop_breakpoint, 992.0);
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let doc = r##"
[site.scroll]
back_to_top_threshold = 500.0

[site.layout]
resize_quiet_ms = 250

[[site.nav]]
label = "Home"
href = "#home"

[[site.nav]]
label = "Blog"
href = "/blog"
"##;
        let config = read_config(doc).unwrap();

        assert_eq!(config.scroll.back_to_top_threshold, 500.0);
        assert_eq!(config.scroll.scrolled_threshold, 20.0);
        assert_eq!(config.layout.resize_quiet_ms, 250);
        assert_eq!(config.layout.desktop_breakpoint, 992.0);
        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.nav[0].anchor(), Some("home"));
        assert_eq!(config.nav[1].anchor(), None);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(read_config("[site.scroll\nscrolled_threshold = ").is_err());
        assert!(read_config("[site.scroll]\nscrolled_threshold = \"far\"").is_err());
    }

    #[test]
    fn bare_hash_is_not_an_anchor() {
        assert_eq!(NavLink::new("Top", "#").anchor(), None);
    }

    #[test]
    fn mobile_is_strictly_below_breakpoint() {
        let layout = LayoutConfig::default();

        assert!(layout.is_mobile(991.0));
        assert!(!layout.is_mobile(992.0));
    }
}
