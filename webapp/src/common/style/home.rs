pub const HOME_STYLES: &str = r#"
/* Landing Page Styles */

section {
  padding: var(--space-16) 0;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-4);
}

.section-lead {
  max-width: 640px;
  margin: 0 auto var(--space-12);
  text-align: center;
  color: var(--text-secondary);
}

/* Hero Section */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: var(--header-height);
  background: linear-gradient(135deg, var(--primary-dark), var(--primary-light));
  color: var(--text-inverse);
}

.hero-content {
  max-width: 760px;
}

.hero-title {
  font-size: 3.25rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-4);
}

.hero-subtitle {
  font-size: 1.35rem;
  margin-bottom: var(--space-8);
  opacity: 0.9;
}

/* Cards */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-6);
}

.service-card,
.team-card,
.project-card {
  padding: var(--space-6);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface-raised);
  box-shadow: var(--shadow-sm);
}

.service-icon {
  font-size: 1.75rem;
  color: var(--primary);
  margin-bottom: var(--space-3);
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.card-text {
  color: var(--text-secondary);
}

.team-photo,
.project-image {
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
  border-radius: var(--radius-md);
  margin-bottom: var(--space-4);
  background-color: var(--surface);
}

.team-role {
  color: var(--primary);
  font-weight: 500;
}

/* Alternating section backgrounds */
.services,
.projects {
  background-color: var(--surface);
}

/* Contact */
.contact-form {
  max-width: 720px;
  margin: 0 auto;
}

.contact-actions {
  margin-top: var(--space-6);
  text-align: right;
}

/* Footer */
.footer {
  padding: var(--space-8) 0;
  border-top: 1px solid var(--border);
  text-align: center;
  color: var(--text-secondary);
}
"#;
