use constcat::concat;

mod components;
mod home;
mod variables;

use components::BASE_COMPONENTS;
use home::HOME_STYLES;
use variables::CSS_VARIABLES;

// the whole site stylesheet, injected once by App
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

img {
  display: block;
  max-width: 100%;
}

.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HOME_STYLES,
);
