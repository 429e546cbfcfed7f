//! Global CSS styles for the Sui Testnet Portal.
//!
//! Light glass panels over soft blue, purple and cyan gradients. Every class
//! emitted by `testnet-ui` and by the pages has its rule here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SUI BLUE (Primary actions, links) */
  --sui-50: #eef7ff;
  --sui-100: #d9edff;
  --sui-400: #4da2ff;
  --sui-500: #2b8cff;
  --sui-600: #1a6fe0;
  --sui-700: #1557b3;

  /* ACCENTS */
  --purple: #8b5cf6;
  --purple-soft: rgba(139, 92, 246, 0.12);
  --cyan: #06b6d4;
  --cyan-soft: rgba(6, 182, 212, 0.12);

  /* SURFACES */
  --page-bg: #f9fafb;
  --glass-low: rgba(255, 255, 255, 0.55);
  --glass-medium: rgba(255, 255, 255, 0.72);
  --glass-high: rgba(255, 255, 255, 0.9);
  --glass-border: rgba(255, 255, 255, 0.6);
  --line: #e5e7eb;

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;
  --text-faint: #9ca3af;

  /* SEMANTIC */
  --success: #16a34a;
  --success-soft: #dcfce7;
  --warning: #ca8a04;
  --danger: #dc2626;
  --danger-soft: #fee2e2;

  /* Typography */
  --font-sans: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 2.25rem;
  --text-4xl: 3rem;

  /* Shadows */
  --shadow-sm: 0 2px 8px rgba(15, 23, 42, 0.06);
  --shadow-md: 0 8px 32px rgba(15, 23, 42, 0.08);
  --shadow-lg: 0 16px 48px rgba(15, 23, 42, 0.12);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

code, pre, .mono {
  font-family: var(--font-mono);
}

ol, ul {
  list-style: none;
}

/* === Typography Helpers === */
.muted { color: var(--text-muted); }
.faint { color: var(--text-faint); }
.small { font-size: var(--text-sm); }
.strong { font-weight: 600; }
.center { text-align: center; }
.accent { color: var(--sui-500); }
.accent-purple { color: var(--purple); }
.text-accent { color: var(--sui-500); }
.ok { color: var(--success); }

.truncate {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.footnote {
  font-size: var(--text-xs);
  color: var(--text-muted);
  margin-top: 0.75rem;
}

/* === Icons === */
.icon {
  display: inline-block;
  flex-shrink: 0;
  vertical-align: middle;
}

.spin {
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Glass Containers === */
.glass {
  position: relative;
  overflow: hidden;
  transition: box-shadow var(--transition-normal), transform var(--transition-normal);
}

.blur-sm { backdrop-filter: blur(4px); -webkit-backdrop-filter: blur(4px); }
.blur-md { backdrop-filter: blur(12px); -webkit-backdrop-filter: blur(12px); }
.blur-lg { backdrop-filter: blur(24px); -webkit-backdrop-filter: blur(24px); }

.bg-transparent { background: transparent; }
.bg-glass-low { background: var(--glass-low); }
.bg-glass-medium { background: var(--glass-medium); }
.bg-glass-high { background: var(--glass-high); }

.border-light { border: 1px solid rgba(229, 231, 235, 0.6); }
.border-medium { border: 1px solid var(--glass-border); }
.border-strong { border: 1px solid var(--line); }

.shadow-glass-sm { box-shadow: var(--shadow-sm); }
.shadow-glass { box-shadow: var(--shadow-md); }
.shadow-glass-lg { box-shadow: var(--shadow-lg); }

.rounded-none { border-radius: 0; }
.rounded-sm { border-radius: 6px; }
.rounded-md { border-radius: 10px; }
.rounded-lg { border-radius: 16px; }
.rounded-full { border-radius: 9999px; }

.glass.clickable {
  cursor: pointer;
}

.glass.clickable:hover {
  box-shadow: var(--shadow-lg);
}

/* === Animated Gradients === */
.animated-gradient {
  position: absolute;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  background-size: 200% 200%;
  animation: gradient-shift 12s ease infinite;
}

.gradient-blue {
  background-image: linear-gradient(135deg, rgba(77, 162, 255, 0.35), rgba(6, 182, 212, 0.2), rgba(77, 162, 255, 0.1));
}

.gradient-purple {
  background-image: linear-gradient(135deg, rgba(139, 92, 246, 0.3), rgba(77, 162, 255, 0.2), rgba(236, 72, 153, 0.12));
}

.gradient-cyan {
  background-image: linear-gradient(135deg, rgba(6, 182, 212, 0.3), rgba(77, 162, 255, 0.2), rgba(16, 185, 129, 0.12));
}

.intensity-subtle { opacity: 0.35; }
.intensity-medium { opacity: 0.6; }
.intensity-strong { opacity: 0.9; }

@keyframes gradient-shift {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-family: inherit;
  font-weight: 500;
  border: 1px solid transparent;
  border-radius: 10px;
  cursor: pointer;
  white-space: nowrap;
  transition: background var(--transition-fast), color var(--transition-fast),
    border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-sm { height: 2rem; padding: 0 0.75rem; font-size: var(--text-sm); }
.btn-md { height: 2.5rem; padding: 0 1rem; font-size: var(--text-sm); }
.btn-lg { height: 3rem; padding: 0 1.75rem; font-size: var(--text-base); }
.btn-icon { width: 2.5rem; height: 2.5rem; padding: 0; }
.btn-block { width: 100%; }

.btn-primary {
  background: var(--sui-500);
  color: #fff;
  box-shadow: 0 4px 14px rgba(43, 140, 255, 0.3);
}

.btn-primary:hover:not(:disabled) {
  background: var(--sui-600);
}

.btn-outline {
  background: rgba(255, 255, 255, 0.6);
  border-color: var(--line);
  color: var(--text-primary);
}

.btn-outline:hover:not(:disabled) {
  background: #fff;
  border-color: var(--sui-400);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover:not(:disabled) {
  background: rgba(17, 24, 39, 0.05);
  color: var(--text-primary);
}

.btn-link {
  background: transparent;
  color: var(--sui-600);
  padding: 0;
  height: auto;
}

.btn-link:hover:not(:disabled) {
  text-decoration: underline;
}

.link-button {
  margin-top: 1.5rem;
}

/* === Progress === */
.progress {
  width: 100%;
  height: 0.5rem;
  background: var(--sui-100);
  border-radius: 9999px;
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: linear-gradient(90deg, var(--sui-400), var(--purple));
  border-radius: 9999px;
  transition: width var(--transition-normal);
}

.progress-block {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

/* === Inputs === */
.field-stack {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.field label {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-secondary);
}

.glass-input {
  width: 100%;
  font-family: inherit;
  font-size: var(--text-sm);
  padding: 0.65rem 0.85rem;
  border-radius: 10px;
  border: 1px solid var(--line);
  background: rgba(255, 255, 255, 0.75);
  color: var(--text-primary);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.glass-input:focus {
  outline: none;
  border-color: var(--sui-400);
  box-shadow: 0 0 0 3px rgba(77, 162, 255, 0.2);
}

.glass-input.tall {
  min-height: 6rem;
  resize: vertical;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  padding: 1rem 1.5rem;
  transition: padding var(--transition-normal);
}

.navbar.scrolled {
  padding: 0.5rem 1.5rem;
}

.navbar-shell {
  max-width: 1200px;
  margin: 0 auto;
  overflow: visible;
}

.navbar-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.6rem 1rem;
}

.navbar-left {
  display: flex;
  align-items: center;
  gap: 2rem;
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--sui-400), var(--purple));
  color: #fff;
  font-weight: 700;
}

.brand-mark-sm {
  width: 1.5rem;
  height: 1.5rem;
  font-size: var(--text-xs);
}

.brand-name {
  font-weight: 600;
  font-size: var(--text-lg);
}

.navbar-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  padding: 0.4rem 0.75rem;
  border-radius: 8px;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
  background: rgba(17, 24, 39, 0.04);
}

.nav-link.active {
  color: var(--sui-600);
  background: var(--sui-50);
  font-weight: 500;
}

.navbar-right {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.navbar-menu-toggle {
  display: none;
}

.navbar-mobile-links {
  display: none;
  flex-direction: column;
  gap: 0.25rem;
  padding: 0.5rem 1rem 1rem;
  border-top: 1px solid var(--line);
}

/* === Wallet Widget === */
.wallet-widget {
  position: relative;
}

.wallet-pill {
  gap: 0.5rem;
}

.wallet-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--success);
}

.wallet-address {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
}

.wallet-dropdown-backdrop {
  position: fixed;
  inset: 0;
  z-index: 45;
}

.wallet-dropdown {
  position: absolute;
  right: 0;
  top: calc(100% + 0.5rem);
  width: 16rem;
  z-index: 50;
  background: var(--glass-high);
  backdrop-filter: blur(16px);
  -webkit-backdrop-filter: blur(16px);
  border: 1px solid var(--line);
  border-radius: 14px;
  box-shadow: var(--shadow-lg);
  overflow: hidden;
  animation: dropdown-in 150ms ease;
}

@keyframes dropdown-in {
  from { opacity: 0; transform: translateY(-4px); }
  to { opacity: 1; transform: translateY(0); }
}

.wallet-dropdown-header {
  display: flex;
  flex-direction: column;
  padding: 0.85rem 1rem;
  border-bottom: 1px solid var(--line);
}

.wallet-dropdown-label {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.wallet-dropdown-address {
  font-family: var(--font-mono);
  font-weight: 500;
}

.wallet-dropdown-balance {
  padding: 0.85rem 1rem;
  border-bottom: 1px solid var(--line);
}

.wallet-dropdown-actions {
  display: flex;
  flex-direction: column;
  padding: 0.4rem;
}

.wallet-dropdown-actions .btn {
  justify-content: flex-start;
}

.wallet-disconnect {
  color: var(--danger);
}

.balance-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.balance-label {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.balance-value {
  font-weight: 600;
  margin-top: 0.25rem;
}

.balance-large {
  font-size: var(--text-3xl);
  font-weight: 700;
  line-height: 1.1;
}

.balance-symbol {
  font-size: var(--text-lg);
  color: var(--text-muted);
  margin-left: 0.35rem;
}

.network-badge {
  font-size: var(--text-xs);
  font-weight: 500;
  padding: 0.15rem 0.55rem;
  border-radius: 9999px;
  background: var(--sui-100);
  color: var(--sui-700);
}

/* === Toasts === */
.toast-viewport {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 60;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  width: 22rem;
  max-width: calc(100vw - 3rem);
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 0.9rem 1rem;
  background: var(--glass-high);
  border: 1px solid var(--line);
  border-radius: 12px;
  box-shadow: var(--shadow-lg);
  animation: toast-in 200ms ease;
}

.toast-destructive {
  background: var(--danger-soft);
  border-color: rgba(220, 38, 38, 0.3);
}

.toast-body {
  flex: 1;
  min-width: 0;
}

.toast-title {
  font-weight: 600;
  font-size: var(--text-sm);
}

.toast-description {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.toast-close {
  background: none;
  border: none;
  cursor: pointer;
  color: var(--text-muted);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Page Layouts === */
.page {
  position: relative;
  min-height: 100vh;
  overflow-x: hidden;
}

.page-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 7rem 1.5rem 4rem;
}

.page-container.narrow { max-width: 960px; }
.page-container.wide { max-width: 1200px; }

.page-heading {
  text-align: center;
  margin-bottom: 2.5rem;
}

.page-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  letter-spacing: -0.02em;
}

.page-subtitle {
  max-width: 42rem;
  margin: 0.75rem auto 0;
  color: var(--text-secondary);
}

.page-hero {
  margin-bottom: 3rem;
}

.two-column {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 2rem;
  align-items: start;
}

.column-stack {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
  margin-bottom: 3rem;
}

.card-grid.four {
  grid-template-columns: repeat(4, minmax(0, 1fr));
}

.order-1 { order: 1; }
.order-2 { order: 2; }

.row-between {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

/* === Panels === */
.panel {
  padding: 1.5rem;
}

.panel-gradient {
  padding: 2rem;
}

.panel-backdrop {
  border-radius: inherit;
}

.panel-header {
  position: relative;
  z-index: 1;
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.25rem;
}

.panel-heading-center {
  position: relative;
  z-index: 1;
  text-align: center;
  margin-bottom: 1.5rem;
}

.panel-title {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.panel-title.with-icon {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.panel > p.muted {
  margin-bottom: 1.5rem;
}

.panel-footer {
  position: relative;
  z-index: 1;
  margin-top: 1.25rem;
  text-align: center;
}

/* === Lists === */
.list-stack {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.list-stack.tight {
  gap: 0.75rem;
}

.list-item {
  display: block;
  padding: 1rem;
  border: 1px solid var(--line);
  border-radius: 12px;
}

.list-item.hoverable {
  cursor: pointer;
  transition: background var(--transition-fast);
}

.list-item.hoverable:hover {
  background: rgba(255, 255, 255, 0.7);
}

.item-title {
  font-size: var(--text-base);
  font-weight: 500;
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.list-item p {
  margin-top: 0.25rem;
}

.resource-link:hover .item-title {
  color: var(--sui-600);
}

.read-more {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--sui-600);
}

.complexity-badge {
  font-size: var(--text-xs);
  padding: 0.2rem 0.6rem;
  border-radius: 9999px;
  background: var(--purple-soft);
  color: #6d28d9;
}

.code-block {
  padding: 1rem;
  margin-bottom: 1.5rem;
  border-radius: 10px;
  background: #f3f4f6;
  font-size: var(--text-sm);
  overflow-x: auto;
  white-space: pre;
}

.quick-start {
  list-style: decimal inside;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  color: var(--text-secondary);
}

.quick-start code {
  padding: 0.1rem 0.35rem;
  border-radius: 4px;
  background: #f3f4f6;
  font-size: var(--text-sm);
}

/* === Empty & Loading States === */
.empty-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 2rem 1rem;
  text-align: center;
  color: var(--text-muted);
}

.empty-state.tall {
  min-height: 18rem;
}

.skeleton-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.skeleton-row {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  padding: 1rem;
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.5);
}

.skeleton-line {
  height: 0.75rem;
  border-radius: 6px;
  background: linear-gradient(90deg, #e5e7eb, #f3f4f6, #e5e7eb);
  background-size: 200% 100%;
  animation: shimmer 1.4s ease infinite;
}

.skeleton-line.wide { width: 70%; }
.skeleton-line.narrow { width: 40%; }

@keyframes shimmer {
  0% { background-position: 100% 0; }
  100% { background-position: -100% 0; }
}

/* === Hero === */
.hero {
  position: relative;
  overflow: hidden;
  border-radius: 24px;
}

.hero-backdrop {
  border-radius: inherit;
}

.hero-inner {
  position: relative;
  z-index: 1;
  padding: 3rem 1.5rem;
}

.hero-center { text-align: center; }
.hero-center .hero-subtitle { margin-left: auto; margin-right: auto; }
.hero-center .hero-actions,
.hero-center .hero-buttons { justify-content: center; }
.hero-left { text-align: left; }

.hero-title {
  font-weight: 800;
  letter-spacing: -0.03em;
  line-height: 1.1;
}

.hero-sm .hero-title { font-size: var(--text-2xl); }
.hero-md .hero-title { font-size: var(--text-3xl); }
.hero-lg .hero-title { font-size: var(--text-4xl); }

.hero-title .text-accent {
  background: linear-gradient(90deg, var(--sui-500), var(--purple));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  max-width: 40rem;
  margin-top: 1rem;
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.hero-actions,
.hero-buttons {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 2rem;
}

/* === Feature Cards === */
.feature-link {
  display: block;
}

.feature-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 1rem;
  padding: 1.5rem;
  height: 100%;
}

.card-layout-compact {
  padding: 1rem;
  gap: 0.6rem;
}

.card-layout-icon-left {
  flex-direction: row;
  align-items: flex-start;
  text-align: left;
}

.feature-icon {
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 12px;
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  background: #f3f4f6;
  color: var(--text-secondary);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.card-primary .feature-icon { background: var(--sui-50); color: var(--sui-500); }
.card-secondary .feature-icon { background: var(--purple-soft); color: var(--purple); }

.feature-card.clickable:hover { transform: translateY(-2px); }
.card-primary.clickable:hover .feature-icon { background: var(--sui-500); color: #fff; }
.card-secondary.clickable:hover .feature-icon { background: var(--purple); color: #fff; }

.feature-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.feature-description {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Landing === */
.landing-glow {
  position: absolute;
  width: 32rem;
  height: 32rem;
  border-radius: 9999px;
  filter: blur(120px);
  opacity: 0.35;
  pointer-events: none;
  z-index: 0;
}

.landing-glow-blue { top: -8rem; left: -8rem; background: var(--sui-400); }
.landing-glow-purple { top: 30%; right: -10rem; background: var(--purple); }
.landing-glow-cyan { bottom: -10rem; left: 30%; background: var(--cyan); }

.landing-main {
  position: relative;
  z-index: 1;
}

.landing-section {
  margin-top: 5rem;
}

.section-heading {
  text-align: center;
  margin-bottom: 2.5rem;
}

.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
}

.section-subtitle {
  max-width: 40rem;
  margin: 0.75rem auto 0;
  color: var(--text-secondary);
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 1.5rem;
}

.lift { transition: transform var(--transition-normal); }
.fade-in-1 { animation: fade-in 600ms ease both; }
.fade-in-2 { animation: fade-in 600ms ease 150ms both; }

@keyframes fade-in {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}

.cta-panel {
  padding: 3rem;
}

.cta-layout {
  display: flex;
  align-items: center;
  gap: 3rem;
}

.cta-copy { flex: 1; }

.cta-title {
  font-size: var(--text-3xl);
  font-weight: 700;
}

.cta-text {
  margin: 1rem 0 1.5rem;
  color: var(--text-secondary);
}

.cta-aside {
  flex: 1;
  display: flex;
  justify-content: center;
}

.stack-card {
  width: 18rem;
  padding: 1.5rem;
}

.stack-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 12px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--sui-50);
  color: var(--sui-500);
  margin-bottom: 1rem;
}

.stack-title {
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.stack-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.stack-list li {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.stack-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
}

.dot-green { background: #22c55e; }
.dot-blue { background: var(--sui-400); }
.dot-purple { background: var(--purple); }
.dot-yellow { background: #eab308; }

.float { animation: float 6s ease-in-out infinite; }

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

.landing-footer {
  position: relative;
  z-index: 1;
  padding-top: 2rem;
  padding-bottom: 2rem;
  border-top: 1px solid var(--line);
}

.footer-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.footer-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.footer-note {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Connect Prompt === */
.connect-prompt {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 6rem 1.5rem 2rem;
}

.connect-prompt-card {
  max-width: 28rem;
  padding: 2.5rem;
  text-align: center;
}

.connect-prompt-icon {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1.25rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--sui-50);
  color: var(--sui-500);
}

.connect-prompt-title {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.connect-prompt-message {
  margin: 0.75rem 0 1.75rem;
  color: var(--text-secondary);
}

/* === Dashboard === */
.dashboard-grid {
  display: grid;
  grid-template-columns: minmax(0, 1fr) minmax(0, 2fr);
  gap: 2rem;
}

.dashboard-side,
.dashboard-main {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.shortcut-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
}

.detail-list {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.detail {
  display: flex;
  flex-direction: column;
  gap: 0.2rem;
}

.detail-label {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.detail-value {
  font-family: var(--font-mono);
  word-break: break-all;
}

.activity-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.activity-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.9rem 1rem;
}

.activity-kind {
  font-weight: 500;
}

.activity-time {
  display: flex;
  align-items: center;
  gap: 0.3rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.activity-amount {
  text-align: right;
}

.amount { font-weight: 600; }
.amount.credit { color: var(--success); }
.amount.debit { color: var(--danger); }

.status-pill {
  display: inline-block;
  margin-top: 0.2rem;
  font-size: var(--text-xs);
  padding: 0.1rem 0.5rem;
  border-radius: 9999px;
  background: var(--success-soft);
  color: var(--success);
}

.stat-list {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.stat {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.stat-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.stat-label {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.stat-value {
  font-weight: 600;
}

.status-ok {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  color: var(--success);
  font-weight: 500;
}

.status-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--success);
  animation: pulse 2s ease infinite;
}

.status-degraded {
  color: var(--warning);
  font-weight: 500;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

/* === Faucet === */
.history-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.history-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1rem;
  border-radius: 10px;
  background: rgba(255, 255, 255, 0.6);
  font-size: var(--text-sm);
}

.status-completed,
.status-failed {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  font-size: var(--text-xs);
  font-weight: 500;
}

.status-completed { color: var(--success); }
.status-failed { color: var(--danger); }

.info-row {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.75rem 0;
  border-bottom: 1px solid rgba(229, 231, 235, 0.7);
}

.info-label {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.info-value {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  text-align: right;
  word-break: break-all;
}

/* === Image Picker === */
.image-frame {
  border: 2px dashed var(--line);
  border-radius: 12px;
  padding: 1rem;
  transition: border-color var(--transition-fast);
}

.image-frame:hover {
  border-color: var(--sui-400);
}

.image-frame.has-image {
  border-style: solid;
}

.image-picker {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.image-dropzone {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 1.5rem 0;
  color: var(--text-muted);
}

.image-dropzone-hint {
  font-size: var(--text-xs);
  color: var(--text-faint);
}

.image-preview {
  max-height: 12rem;
  max-width: 100%;
  border-radius: 8px;
  object-fit: contain;
}

.image-picker-error {
  font-size: var(--text-sm);
  color: var(--danger);
}

/* === NFT Collection === */
.nft-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
}

.nft-tile {
  display: flex;
  flex-direction: column;
}

.nft-image {
  aspect-ratio: 1 / 1;
  background: #f3f4f6;
  overflow: hidden;
}

.nft-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.nft-meta {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  padding: 0.75rem;
}

.nft-meta .small {
  display: flex;
  align-items: center;
  gap: 0.3rem;
}

/* === Accessibility === */
:focus-visible {
  outline: 2px solid var(--sui-400);
  outline-offset: 2px;
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}

/* === Responsive Layout for Narrow Windows === */
@media (max-width: 1024px) {
  .feature-grid,
  .card-grid.four {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .dashboard-grid {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 860px) {
  .navbar-links {
    display: none;
  }

  .navbar-menu-toggle {
    display: inline-flex;
  }

  .navbar-mobile-links {
    display: flex;
  }

  .two-column,
  .card-grid,
  .card-grid.four,
  .feature-grid {
    grid-template-columns: 1fr;
  }

  .cta-layout {
    flex-direction: column;
  }

  .footer-inner {
    flex-direction: column;
    gap: 0.75rem;
  }
}
"#;
