use std::fmt;

use dioxus::prelude::*;

use crate::components::sidebar::{SidebarState, use_sidebar};

// Direction of a monitored quantity since the last sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// One sub-entry of a monitoring item, rendered as icon + label. Entries
// have no identity beyond their position, so rendering is index-keyed.
#[derive(Clone, PartialEq)]
pub struct SubItem {
    pub title: String,
    pub icon: Element,
}

#[derive(Clone, PartialEq, Props)]
pub struct MonitoringItemProps {
    pub icon: Element,
    pub title: String,
    pub value: Vec<SubItem>,
    pub trend: Option<Trend>,
    pub onclick: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn MonitoringItem(props: MonitoringItemProps) -> Element {
    let context = use_sidebar();
    let collapsed = context.state() == SidebarState::Collapsed;

    let MonitoringItemProps {
        icon,
        title,
        value,
        trend,
        onclick,
    } = props;

    rsx! {
        div {
            class: if collapsed { "monitoring-item collapsed" } else { "monitoring-item expanded" },
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },

            div { class: "item-icon", {icon} }

            // Collapsed items keep the icon only; the content subtree is
            // not produced at all.
            if !collapsed {
                div { class: "item-content",
                    div { class: "item-title", "{title}" }
                    div { class: "item-value",
                        for (index, item) in value.into_iter().enumerate() {
                            div { key: "{index}", class: "sub-item",
                                div { class: "icon-item", {item.icon} }
                                p { "{item.title}" }
                            }
                        }
                        match trend {
                            Some(trend) => rsx! {
                                span { class: "trend-indicator {trend}", "{trend.glyph()}" }
                            },
                            None => rsx! {},
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::{MonitoringItem, SubItem, Trend};
    use crate::components::sidebar::SidebarProvider;

    fn render(app: fn() -> Element) -> String {
        let mut vdom = VirtualDom::new(app);
        vdom.rebuild_in_place();
        dioxus_ssr::render(&vdom)
    }

    fn sample_value() -> Vec<SubItem> {
        vec![
            SubItem {
                title: String::from("Bearing wear"),
                icon: rsx! { span { "A" } },
            },
            SubItem {
                title: String::from("Rotor imbalance"),
                icon: rsx! { span { "B" } },
            },
        ]
    }

    #[component]
    fn ExpandedTrendUp() -> Element {
        rsx! {
            SidebarProvider {
                MonitoringItem {
                    icon: rsx! { span { "icon" } },
                    title: "Current diagnostics",
                    value: sample_value(),
                    trend: Trend::Up,
                }
            }
        }
    }

    #[component]
    fn ExpandedTrendDown() -> Element {
        rsx! {
            SidebarProvider {
                MonitoringItem {
                    icon: rsx! { span { "icon" } },
                    title: "Current diagnostics",
                    value: sample_value(),
                    trend: Trend::Down,
                }
            }
        }
    }

    #[component]
    fn ExpandedNoTrend() -> Element {
        rsx! {
            SidebarProvider {
                MonitoringItem {
                    icon: rsx! { span { "icon" } },
                    title: "Current diagnostics",
                    value: sample_value(),
                }
            }
        }
    }

    #[component]
    fn CollapsedTrendUp() -> Element {
        rsx! {
            SidebarProvider { default_open: false,
                MonitoringItem {
                    icon: rsx! { span { "icon" } },
                    title: "Current diagnostics",
                    value: sample_value(),
                    trend: Trend::Up,
                }
            }
        }
    }

    #[test]
    fn expanded_item_renders_subitems_in_input_order() {
        let html = render(ExpandedTrendUp);

        assert!(html.contains(r#"class="monitoring-item expanded""#));
        assert!(html.contains("Current diagnostics"));
        assert_eq!(html.matches(r#"class="sub-item""#).count(), 2);

        let first = html.find("Bearing wear").unwrap();
        let second = html.find("Rotor imbalance").unwrap();
        assert!(first < second);
    }

    #[test]
    fn trend_glyph_matches_direction() {
        let up = render(ExpandedTrendUp);
        assert!(up.contains(r#"class="trend-indicator up""#));
        assert!(up.contains("↑"));
        assert!(!up.contains("↑;"));

        let down = render(ExpandedTrendDown);
        assert!(down.contains(r#"class="trend-indicator down""#));
        assert!(down.contains("↓"));
        assert!(!down.contains("↓;"));
    }

    #[test]
    fn missing_trend_renders_no_glyph() {
        let html = render(ExpandedNoTrend);

        assert!(!html.contains("trend-indicator"));
        assert!(!html.contains("↑"));
        assert!(!html.contains("↓"));
    }

    #[test]
    fn collapsed_item_omits_content_entirely() {
        let html = render(CollapsedTrendUp);

        assert!(html.contains(r#"class="monitoring-item collapsed""#));
        assert!(html.contains("item-icon"));
        assert!(!html.contains("item-content"));
        assert!(!html.contains("sub-item"));
        assert!(!html.contains("Bearing wear"));
        assert!(!html.contains("trend-indicator"));
        assert!(!html.contains("↑"));
    }
}
