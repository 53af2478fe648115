//! Global CSS styles for the gallery view.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #f5f6f8;
  --surface-card: #ffffff;
  --surface-border: #e4e6eb;
  --surface-overlay: rgba(16, 18, 22, 0.88);

  /* Accent */
  --accent: #ff8000;
  --accent-soft: rgba(255, 128, 0, 0.12);

  /* Text */
  --text-primary: #212529;
  --text-secondary: #666b73;
  --text-muted: #9aa0a6;

  /* Typography */
  --font-sans: -apple-system, 'Segoe UI', 'PingFang SC', 'Helvetica Neue', sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
}

.d-inline-block {
  display: inline-block;
}

/* === Buttons === */
.btn-primary,
.btn-ghost {
  padding: 0.5rem 1.25rem;
  border-radius: 4px;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: 1px solid var(--accent);
  color: #fff;
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--surface-border);
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-primary);
  border-color: var(--text-muted);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: inherit;
  font-size: var(--text-xl);
  cursor: pointer;
}

.icon-btn:hover {
  background: rgba(255, 255, 255, 0.12);
}

/* === Gallery Page === */
.gallery-page {
  padding: 1.5rem 2rem;
}

.gallery-header {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  margin-bottom: 1.25rem;
}

.gallery-heading {
  font-size: var(--text-xl);
  font-weight: 600;
}

.gallery-empty {
  color: var(--text-muted);
}

.table-tabs {
  display: flex;
  gap: 0.5rem;
}

.table-tab {
  padding: 0.375rem 0.875rem;
  border: 1px solid var(--surface-border);
  border-radius: 4px;
  background: var(--surface-card);
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.table-tab.selected {
  border-color: var(--accent);
  background: var(--accent-soft);
  color: var(--accent);
}

.gallery-grid {
  display: flex;
  flex-wrap: wrap;
}

/* === Gallery Card === */
.gallery-item {
  margin: 0 1rem 1rem 0;
  border: 1px solid var(--surface-border);
  border-radius: 6px;
  background: var(--surface-card);
  overflow: hidden;
  transition: box-shadow var(--transition-normal);
}

.gallery-item:hover {
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
}

.gallery-item__image {
  position: relative;
  height: 160px;
  background: #eef0f3;
}

.gallery-item__image-empty {
  height: 100%;
}

.gallery-item__image-count {
  position: absolute;
  right: 0.5rem;
  bottom: 0.5rem;
  padding: 0 0.5rem;
  border-radius: 10px;
  background: rgba(0, 0, 0, 0.55);
  color: #fff;
  font-size: var(--text-xs);
}

.gallery-image-container {
  width: 100%;
  height: 100%;
  cursor: zoom-in;
}

.gallery-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.gallery-image.is-loading,
.gallery-image.is-failed {
  visibility: hidden;
}

.gallery-image__loading,
.gallery-image__error {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
}

.loading-spinner {
  width: 1.25rem;
  height: 1.25rem;
  border: 2px solid var(--surface-border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.gallery-item__title {
  padding: 0.625rem 0.75rem 0.25rem;
  font-size: var(--text-base);
  font-weight: 600;
  cursor: pointer;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.gallery-item__title:hover {
  color: var(--accent);
}

.row-title-empty {
  color: var(--text-muted);
  font-weight: 400;
}

.gallery-item__body {
  padding: 0 0.75rem 0.75rem;
}

.gallery-item__field {
  margin-top: 0.5rem;
}

.gallery-item__field-name {
  color: var(--text-muted);
  font-size: var(--text-xs);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.gallery-item__field-value {
  min-height: 1.25rem;
  overflow: hidden;
  white-space: nowrap;
  text-overflow: ellipsis;
}

.row-cell-empty {
  width: 1rem;
  height: 1.25rem;
}

/* === Formatters === */
.select-option {
  display: inline-block;
  margin-right: 0.25rem;
  padding: 0 0.5rem;
  border-radius: 10px;
  font-size: var(--text-xs);
  line-height: 1.25rem;
}

.collaborator {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  margin-right: 0.375rem;
}

.collaborator-avatar {
  width: 1.25rem;
  height: 1.25rem;
  border-radius: 50%;
}

.image-formatter__thumb {
  width: 2rem;
  height: 2rem;
  object-fit: cover;
  border-radius: 2px;
}

.image-formatter__more,
.file-formatter__more {
  margin-left: 0.25rem;
  color: var(--text-muted);
}

.file-item,
.link-item {
  display: inline-block;
  margin-right: 0.25rem;
  padding: 0 0.375rem;
  border-radius: 2px;
  background: #eef0f3;
}

.checkbox-formatter.checked {
  color: var(--accent);
}

.long-text-formatter {
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--surface-overlay);
  color: #fff;
  outline: none;
}

.lightbox-toolbar {
  position: absolute;
  top: 1rem;
  right: 1rem;
  left: 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.lightbox-image {
  max-width: 80vw;
  max-height: 80vh;
  object-fit: contain;
}

.lightbox-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
}

.lightbox-nav--prev {
  left: 1.5rem;
}

.lightbox-nav--next {
  right: 1.5rem;
}

/* === Expanded Row === */
.row-expand-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: flex-start;
  justify-content: center;
  padding-top: 6vh;
  background: rgba(0, 0, 0, 0.35);
}

.row-expand {
  width: min(720px, 92vw);
  max-height: 86vh;
  overflow-y: auto;
  border-radius: 6px;
  background: var(--surface-card);
  outline: none;
}

.row-expand__header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--surface-border);
}

.row-expand__table {
  color: var(--text-muted);
}

.row-expand__title {
  flex: 1;
  font-size: var(--text-lg);
  font-weight: 600;
}

.row-expand__section {
  padding: 1rem 1.25rem 0;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.row-expand__fields {
  padding: 0 1.25rem;
}

.row-expand__field {
  padding: 0.625rem 0;
  border-bottom: 1px solid var(--surface-border);
}

.row-expand__field-name {
  margin-bottom: 0.25rem;
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.row-expand__footer {
  display: flex;
  justify-content: flex-end;
  padding: 1rem 1.25rem;
}
"#;
