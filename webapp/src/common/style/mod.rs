use constcat::concat;

mod sidebar;
mod variables;

pub use sidebar::SIDEBAR_COMPONENTS;
pub use variables::CSS_VARIABLES;

// Single bundle injected by the app root.
pub const DASHBOARD_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}
"#,
    CSS_VARIABLES,
    SIDEBAR_COMPONENTS,
    r#"
/* Application layout */
.dashboard-layout {
  display: flex;
  min-height: 100vh;
}

.dashboard-main {
  flex: 1;
  padding: var(--space-6);
}

.view-panel h1 {
  font-size: 1.4rem;
  margin-bottom: var(--space-3);
}

.view-panel p {
  color: var(--text-secondary);
}
"#,
);
