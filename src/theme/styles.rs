//! Global CSS styles for campusgate.
//!
//! Colors, scale and flow come from the `:root` block built at startup;
//! everything here reads them through custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --card-surface: rgba(10, 14, 15, 0.92);
  --card-border: #1a1a1a;

  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;

  --card-width: calc(520px * var(--screen-scale, 1));
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--background-color);
  color: var(--text-primary);
  line-height: 1.5;
  height: 100vh;
  overflow: hidden;
}

/* === Page Frame === */
.page {
  position: relative;
  display: flex;
  flex-direction: var(--page-flex-direction, row);
  align-items: center;
  justify-content: center;
  width: 100vw;
  height: 100vh;
  overflow: hidden;
}

.page-header {
  position: relative;
  z-index: 2;
  padding: 1.5rem 1rem 0.5rem;
  text-align: center;
}

.page-title {
  font-size: 1.75rem;
  font-weight: 600;
}

.page-content {
  position: relative;
  z-index: 1;
  display: flex;
  justify-content: center;
  width: 100%;
  height: 100%;
  overflow: hidden;
}

/* === Background Carousel === */
.background-moving-images {
  position: fixed;
  inset: 0;
  overflow: hidden;
  z-index: 0;
  pointer-events: none;
}

.background-image {
  position: absolute;
  object-fit: cover;
  opacity: 0.35;
  filter: grayscale(40%);
  will-change: transform;
}

@keyframes backgroundImageScrollLeft {
  from { transform: translateX(0); }
  to { transform: translateX(calc(-1 * var(--background-image-dimension))); }
}

/* === Cards === */
.cards-container {
  position: relative;
  display: flex;
  width: var(--card-width);
  max-width: 100vw;
  height: 100%;
  overflow: hidden;
  scroll-behavior: smooth;
}

.card-container {
  position: relative;
  flex: 0 0 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100%;
}

.card {
  width: 100%;
  max-width: var(--card-width);
  padding: 2rem;
  background: var(--card-surface);
  border: 1px solid var(--card-border);
  border-radius: 12px;
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.45);
}

.card-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.card-title {
  font-size: 1.375rem;
  font-weight: 600;
}

.card-fields {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.card-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  margin-top: 2rem;
}

.card-footer {
  margin-top: 1.25rem;
  text-align: center;
}

.card-footnote,
.card-hint {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.card-footnote a {
  color: var(--next-btn-background-color);
}

/* === Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
}

.input-label {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.input-wrapper {
  position: relative;
  display: flex;
  align-items: center;
}

.input-field {
  width: 100%;
  padding: 0.5rem 0.25rem;
  background: transparent;
  border: none;
  color: var(--text-primary);
  font: inherit;
  outline: none;
  box-shadow: 0 1px 0 0 #000;
  transition: box-shadow var(--transition-fast);
}

.select-field option {
  background: var(--background-color);
}

.checkbox-field {
  flex-direction: row;
  align-items: center;
  gap: 0.5rem;
}

.checkbox-input {
  width: 1.1rem;
  height: 1.1rem;
  border-radius: 3px;
}

/* === Buttons === */
button {
  font: inherit;
  cursor: pointer;
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-next,
.btn-submit {
  padding: 0.625rem 1.5rem;
  background: var(--next-btn-background-color);
  color: var(--background-color);
  border: none;
  border-radius: 6px;
  font-weight: 600;
}

.btn-back {
  padding: 0.625rem 1.5rem;
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--card-border);
  border-radius: 6px;
}

.btn-link {
  background: none;
  border: none;
  color: var(--next-btn-background-color);
  text-decoration: underline;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  background: none;
  border: none;
  color: var(--text-secondary);
}

.eye-icon-container {
  position: absolute;
  right: 0;
}

.eye-icon-container svg {
  width: 1.25rem;
  height: 1.25rem;
}

.go-back-btn {
  font-size: 1.25rem;
}

#mobile-go-back-btn {
  position: fixed;
  top: 1rem;
  left: 1rem;
  z-index: 3;
}

/* === Verification Code === */
.otp-container {
  display: flex;
  justify-content: space-between;
  gap: 0.5rem;
  margin: 1.5rem 0;
}

.otp-box {
  width: 3rem;
  height: 3.5rem;
  background: transparent;
  border: 1px solid var(--card-border);
  border-radius: 8px;
  color: var(--text-primary);
  font-size: 1.5rem;
  text-align: center;
  outline: none;
}

.otp-box:focus {
  border-color: var(--next-btn-background-color);
}
"#;
