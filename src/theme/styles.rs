//! Global CSS styles for the showcase site.
//!
//! Palettes are CSS custom properties switched by the `.theme-light` /
//! `.theme-dark` class on the site wrapper. Filtered items animate through
//! the `.phase-*` classes.

pub const GLOBAL_STYLES: &str = r#"
/* === Palettes === */
.theme-light {
  --bg: #fffaf3;
  --bg-alt: #f4ebdd;
  --surface: #ffffff;
  --text: #2b2118;
  --text-muted: #6f6253;
  --accent: #c0392b;
  --accent-soft: rgba(192, 57, 43, 0.12);
  --border: #e6dccd;
  --shadow: 0 8px 24px rgba(43, 33, 24, 0.08);
}

.theme-dark {
  --bg: #16120f;
  --bg-alt: #1f1a16;
  --surface: #26201b;
  --text: #f3ece2;
  --text-muted: #b3a696;
  --accent: #e8735f;
  --accent-soft: rgba(232, 115, 95, 0.16);
  --border: #3a322b;
  --shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
}

:root {
  --font-display: 'Playfair Display', Georgia, serif;
  --font-body: 'Inter', 'Segoe UI', sans-serif;
  --nav-height: 72px;
  --transition: 300ms ease;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  line-height: 1.6;
  overflow: auto;
}

.site {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  transition: background var(--transition), color var(--transition);
}

.page {
  padding-top: var(--nav-height);
}

h1, h2, h3, h4 {
  font-family: var(--font-display);
  line-height: 1.2;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  height: var(--nav-height);
  background: transparent;
  transition: background var(--transition), box-shadow var(--transition), height var(--transition);
}

.navbar.scrolled {
  height: 60px;
  background: var(--surface);
  box-shadow: var(--shadow);
}

.nav-container {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  gap: 2rem;
}

.nav-logo {
  font-family: var(--font-display);
  font-size: 1.35rem;
  color: var(--accent);
  text-decoration: none;
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
  list-style: none;
  margin-left: auto;
}

.nav-link {
  color: var(--text);
  text-decoration: none;
  font-weight: 500;
}

.nav-link.active,
.nav-link:hover {
  color: var(--accent);
}

.theme-toggle {
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
  font-size: 1.1rem;
  cursor: pointer;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.75rem 1.75rem;
  border-radius: 999px;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  transition: transform var(--transition), background var(--transition);
}

.btn:hover {
  transform: translateY(-2px);
}

.btn-primary {
  background: var(--accent);
  color: #fff;
}

.btn-outline {
  border: 2px solid var(--accent);
  color: var(--accent);
}

.btn-ghost {
  color: var(--accent);
  padding-left: 0;
  padding-right: 0;
}

.icon-btn {
  border: none;
  background: rgba(0, 0, 0, 0.4);
  color: #fff;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  font-size: 1.75rem;
  cursor: pointer;
}

/* === Hero and sections === */
.hero {
  min-height: 70vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  background: linear-gradient(160deg, var(--bg-alt), var(--bg));
}

.hero-title {
  font-size: 3.25rem;
  margin-bottom: 1rem;
}

.hero-subtitle {
  color: var(--text-muted);
  font-size: 1.2rem;
  margin-bottom: 2rem;
}

.hero-buttons {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

.page-header {
  text-align: center;
  padding: 4rem 1.5rem 2rem;
}

.page-subtitle {
  color: var(--text-muted);
}

.section-title {
  text-align: center;
  font-size: 2.25rem;
  margin-bottom: 2rem;
}

.menu-board,
.gallery-section,
.projects,
.about,
.contact {
  max-width: 1200px;
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.contact {
  text-align: center;
}

.footer {
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}

/* === Category pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2.5rem;
}

.pill {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
  cursor: pointer;
  transition: background var(--transition), color var(--transition);
}

.pill.active {
  background: var(--accent);
  border-color: var(--accent);
  color: #fff;
}

/* === Filter phases === */
.phase-entering,
.phase-visible,
.phase-leaving {
  transition: opacity var(--transition), transform var(--transition);
}

.phase-entering {
  opacity: 0;
  transform: translateY(20px);
}

.phase-visible {
  opacity: 1;
  transform: translateY(0);
}

.phase-leaving {
  opacity: 0;
  transform: scale(0.95);
}

.phase-removed {
  display: none;
}

/* === Reveal on scroll === */
.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 600ms ease, transform 600ms ease;
}

.reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}

/* === Menu === */
.detailed-menu-section {
  margin-bottom: 3rem;
}

.menu-section-title {
  font-size: 1.6rem;
  color: var(--accent);
  border-bottom: 2px solid var(--accent-soft);
  padding-bottom: 0.5rem;
  margin-bottom: 1.25rem;
}

.menu-items {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.25rem;
}

.menu-item {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.25rem;
}

.menu-item-header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  gap: 1rem;
}

.price {
  color: var(--accent);
  font-weight: 700;
}

.menu-item-description {
  color: var(--text-muted);
  margin-top: 0.5rem;
}

/* === Stats === */
.stats {
  background: var(--bg-alt);
  padding: 3rem 1.5rem;
}

.stats-grid {
  max-width: 1000px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 2rem;
  text-align: center;
}

.stat-number {
  display: block;
  font-family: var(--font-display);
  font-size: 2.75rem;
  color: var(--accent);
}

.stat-label {
  color: var(--text-muted);
}

/* === Gallery === */
.gallery-count {
  text-align: center;
  color: var(--text-muted);
  margin-bottom: 1.5rem;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.gallery-item {
  background: var(--surface);
  border-radius: 12px;
  overflow: hidden;
  box-shadow: var(--shadow);
  cursor: zoom-in;
}

.gallery-image img {
  display: block;
  width: 100%;
  height: 220px;
  object-fit: cover;
}

.gallery-info {
  padding: 1rem 1.25rem;
}

.gallery-info p,
.gallery-empty {
  color: var(--text-muted);
}

.gallery-empty {
  text-align: center;
  padding: 3rem 0;
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.9);
  outline: none;
}

.lightbox-content {
  position: relative;
  max-width: 90vw;
  max-height: 90vh;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.lightbox-img {
  max-width: 80vw;
  max-height: 70vh;
  border-radius: 8px;
  transition: opacity 200ms ease;
}

.lightbox-prev,
.lightbox-next {
  position: absolute;
  top: 40%;
}

.lightbox-prev { left: -64px; }
.lightbox-next { right: -64px; }

.close-btn {
  position: absolute;
  top: -56px;
  right: 0;
}

.lightbox-info {
  color: #fff;
  text-align: center;
  margin-top: 1rem;
}

.lightbox-description {
  opacity: 0.8;
}

.lightbox-counter {
  display: inline-block;
  margin-top: 0.5rem;
  opacity: 0.7;
  font-size: 0.9rem;
}

/* === Portfolio === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.5rem;
}

.project-card p {
  color: var(--text-muted);
  margin: 0.5rem 0 1rem;
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
}

.tag {
  font-size: 0.8rem;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  background: var(--accent-soft);
  color: var(--accent);
}

.content-error {
  max-width: 600px;
  margin: 6rem auto;
  text-align: center;
}

.content-error-detail {
  color: var(--text-muted);
  font-family: monospace;
  margin-top: 1rem;
}

@media (max-width: 768px) {
  .nav-menu { gap: 0.75rem; }
  .hero-title { font-size: 2.25rem; }
  .lightbox-prev { left: 8px; }
  .lightbox-next { right: 8px; }
}
"#;
