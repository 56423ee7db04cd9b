// Styles for the sidebar chrome. Class names here are the contract with
// the components; renaming one breaks external styling and test hooks.
pub const SIDEBAR_COMPONENTS: &str = r#"
/* Sidebar shell */
.monitoring-slidebar {
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  border-right: 1px solid var(--border);
  transition: width var(--transition-normal) var(--easing-standard);
}

.monitoring-slidebar.expanded {
  width: var(--sidebar-width);
}

.monitoring-slidebar.collapsed {
  width: var(--sidebar-collapsed-width);
}

.slidebar-content {
  display: flex;
  flex-direction: column;
  flex: 1;
  overflow-y: auto;
}

/* Header */
.sidebar-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-3) var(--space-4);
  border-bottom: 1px solid var(--border);
}

.header-content h2 {
  font-size: 1rem;
  color: var(--text-primary);
}

.status-indicator {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--text-secondary);
  font-size: 0.8rem;
}

.status-dot_active {
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--accent-live);
}

.toggle-btn {
  border: none;
  background: none;
  cursor: pointer;
  color: var(--text-secondary);
  padding: var(--space-1);
}

.toggle-btn:hover {
  color: var(--text-primary);
}

/* View switcher */
.view-switcher {
  display: flex;
  gap: var(--space-1);
  padding: var(--space-2);
  border-bottom: 1px solid var(--border);
}

.view-btn {
  flex: 1;
  padding: var(--space-2);
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background-color: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
}

.view-btn.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: var(--text-inverse);
}

/* Monitoring items */
.monitoring-widgets {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding: var(--space-2);
}

.monitoring-item {
  display: flex;
  gap: var(--space-3);
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  cursor: pointer;
}

.monitoring-item:hover {
  background-color: var(--neutral-100);
}

.monitoring-item.collapsed {
  justify-content: center;
}

.item-icon img {
  width: 20px;
  height: 20px;
}

.item-title {
  font-size: 0.9rem;
  color: var(--text-primary);
}

.item-value {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
}

.sub-item {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--text-secondary);
  font-size: 0.8rem;
}

.icon-item img {
  width: 14px;
  height: 14px;
}

.trend-indicator.up {
  color: var(--trend-up);
}

.trend-indicator.down {
  color: var(--trend-down);
}
"#;
