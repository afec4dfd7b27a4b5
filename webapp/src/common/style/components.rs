pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

/* Header */
.header {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: var(--header-height);
  z-index: 100;
  background-color: transparent;
  transition: background-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.header.on-scroll {
  background-color: var(--surface-raised);
  box-shadow: var(--shadow-md);
}

.header.scroll-down {
  transform: translateY(-100%);
}

.header.scroll-up {
  transform: translateY(0);
}

.navbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

/* Burger */
.burger {
  position: relative;
  display: none;
  width: 28px;
  height: 20px;
  cursor: pointer;
  z-index: 120;
}

.burger-line {
  position: absolute;
  left: 0;
  width: 100%;
  height: 2px;
  border-radius: var(--radius-full);
  background-color: var(--text-primary);
  transition: transform var(--transition-normal) var(--easing-standard),
              opacity var(--transition-fast) var(--easing-standard);
}

.burger-line:nth-child(1) { top: 0; }
.burger-line:nth-child(2) { top: 9px; }
.burger-line:nth-child(3) { top: 18px; }

.burger.is-active .burger-line:nth-child(1) { transform: translateY(9px) rotate(45deg); }
.burger.is-active .burger-line:nth-child(2) { opacity: 0; }
.burger.is-active .burger-line:nth-child(3) { transform: translateY(-9px) rotate(-45deg); }

/* Menu */
.menu {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.menu-inner {
  display: flex;
  gap: var(--space-6);
  list-style: none;
}

.menu-link {
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-fast) var(--easing-standard);
}

.menu-link:hover,
.menu-link.active {
  color: var(--primary);
  text-decoration: none;
}

.menu-block {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.overlay {
  position: fixed;
  inset: 0;
  background-color: var(--overlay);
  opacity: 0;
  visibility: hidden;
  z-index: 90;
  transition: opacity var(--transition-normal) var(--easing-standard),
              visibility var(--transition-normal) var(--easing-standard);
}

@media (max-width: 991px) {
  .burger {
    display: block;
  }

  .menu {
    position: fixed;
    top: 0;
    right: 0;
    width: var(--menu-width);
    max-width: 85vw;
    height: 100vh;
    flex-direction: column;
    align-items: flex-start;
    padding: calc(var(--header-height) + var(--space-6)) var(--space-6);
    background-color: var(--surface-raised);
    box-shadow: var(--shadow-md);
    transform: translateX(100%);
    z-index: 110;
  }

  .menu.is-active {
    transform: translateX(0);
  }

  .menu-inner {
    flex-direction: column;
  }

  .overlay.is-active {
    opacity: 1;
    visibility: visible;
  }
}

@keyframes slideInRight {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

@keyframes slideOutRight {
  from { transform: translateX(0); }
  to { transform: translateX(100%); }
}

body.no-scroll {
  overflow: hidden;
}

body.resize-animation-stopper * {
  animation: none !important;
  transition: none !important;
}

/* Theme toggle */
.theme-toggle {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background: transparent;
  color: var(--text-primary);
  cursor: pointer;
}

.d-none {
  display: none !important;
}

/* Back to top */
.back-to-top {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  width: 44px;
  height: 44px;
  align-items: center;
  justify-content: center;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: var(--text-inverse);
  box-shadow: var(--shadow-md);
  cursor: pointer;
  z-index: 80;
}

/* Forms */
.form-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: var(--space-4);
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
}

.form-group.wide {
  grid-column: 1 / -1;
}

.form-label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.form-control {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface-raised);
  color: var(--text-primary);
  font: inherit;
}

.form-control:focus {
  outline: none;
  border-color: var(--primary);
}
"#;
