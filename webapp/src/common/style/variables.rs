pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2563EB;          /* Primary brand blue */
  --primary-light: #60A5FA;    /* Lighter blue for hover states */
  --primary-dark: #1D4ED8;     /* Darker blue for active states */
  --accent: #F59E0B;           /* Warm accent for highlights */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --surface: var(--neutral-50);
  --surface-raised: #FFFFFF;
  --overlay: rgba(17, 24, 39, 0.55);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);

  /* Layout */
  --header-height: 72px;
  --container-width: 1200px;
  --menu-width: 320px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 10px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark theme, keyed off the document-level marker */
[data-theme="dark"] {
  --background: #0B1120;
  --surface: #111827;
  --surface-raised: #1F2937;
  --overlay: rgba(0, 0, 0, 0.7);

  --text-primary: #F3F4F6;
  --text-secondary: #9CA3AF;

  --border: #374151;
}"#;
