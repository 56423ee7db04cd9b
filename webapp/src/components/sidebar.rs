use std::fmt;

use dioxus::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("use_sidebar called outside of a SidebarProvider scope")]
    OutsideProvider,
}

// The two visibility states of the sidebar chrome. Collapsed shows icons
// only, expanded shows full labels and sub-content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SidebarState {
    Expanded,
    Collapsed,
}

impl SidebarState {
    // Stable strings keyed on by the external stylesheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarState::Expanded => "expanded",
            SidebarState::Collapsed => "collapsed",
        }
    }
}

impl fmt::Display for SidebarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// The owned visibility flag. The state is always derived from the flag,
// never stored separately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarVisibility {
    pub open: bool,
}

impl SidebarVisibility {
    pub fn new(open: bool) -> Self {
        SidebarVisibility { open }
    }

    pub fn state(&self) -> SidebarState {
        if self.open {
            SidebarState::Expanded
        } else {
            SidebarState::Collapsed
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

// Borrowed handle to the provider-owned visibility signal. Copy, so every
// descendant view can hold one without touching ownership.
#[derive(Clone, Copy, PartialEq)]
pub struct SidebarContext {
    visibility: Signal<SidebarVisibility>,
}

impl SidebarContext {
    fn new(visibility: Signal<SidebarVisibility>) -> Self {
        SidebarContext { visibility }
    }

    pub fn state(&self) -> SidebarState {
        self.visibility.read().state()
    }

    pub fn is_open(&self) -> bool {
        self.visibility.read().open
    }

    pub fn set_open(&mut self, open: bool) {
        self.visibility.write().set_open(open);
        debug!("sidebar set_open: {open}");
    }

    // Flips the latest value through the write borrow, so queued toggles
    // compose as sequential flips rather than reading a stale snapshot.
    pub fn toggle_sidebar(&mut self) {
        let mut visibility = self.visibility.write();
        visibility.toggle();
        debug!("sidebar toggled: {}", visibility.state());
    }
}

#[component]
pub fn SidebarProvider(
    #[props(default = true)] default_open: bool,
    children: Element,
) -> Element {
    let visibility = use_signal(|| SidebarVisibility::new(default_open));
    use_context_provider(|| SidebarContext::new(visibility));

    rsx! {
        {children}
    }
}

// Looks up the nearest enclosing provider. Misuse is a programming error,
// so there is no graceful fallback.
pub fn use_sidebar() -> SidebarContext {
    match try_consume_context::<SidebarContext>() {
        Some(context) => context,
        None => panic!("{}", ConfigurationError::OutsideProvider),
    }
}
