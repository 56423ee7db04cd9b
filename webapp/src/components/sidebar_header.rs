use dioxus::prelude::*;

use crate::components::sidebar::{SidebarState, use_sidebar};

// Title bar of the sidebar. The heading and the live indicator collapse
// away with the sidebar; the toggle button is always present.
#[component]
pub fn SidebarHeader() -> Element {
    let mut context = use_sidebar();
    let collapsed = context.state() == SidebarState::Collapsed;

    rsx! {
        div { class: "sidebar-header",
            if !collapsed {
                div { class: "header-content",
                    h2 { "Monitoring Dashboard" }
                    div { class: "status-indicator",
                        span { class: "status-dot_active" }
                        span { "Live" }
                    }
                }
            }
            button {
                class: "toggle-btn",
                "aria-label": if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                onclick: move |_| context.toggle_sidebar(),
                if collapsed {
                    span { "▶" }
                } else {
                    span { "◀" }
                }
            }
        }
    }
}
