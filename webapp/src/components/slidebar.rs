use dioxus::prelude::*;

use crate::components::sidebar::use_sidebar;
use crate::components::sidebar_header::SidebarHeader;
use crate::nav::DashboardView;

#[derive(Clone, PartialEq, Props)]
struct ViewButtonProps {
    view: DashboardView,
    view_signal: Signal<DashboardView>,
}

fn ViewButton(props: ViewButtonProps) -> Element {
    let context = use_sidebar();
    let mut view_signal = props.view_signal;
    let view = props.view;

    let active = *view_signal.read() == view;
    let change_view = move |_| *view_signal.write() = view;

    rsx! {
        button {
            class: if active { "view-btn active" } else { "view-btn" },
            onclick: change_view,
            // Icon-only chrome when collapsed, so the label is dropped.
            if context.is_open() {
                "{view.label()}"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MonitoringSlidebarProps {
    pub view_signal: Signal<DashboardView>,
    pub children: Element,
}

// The sidebar shell: header, view switcher, then whatever widgets the
// caller mounts. Children pass through uninterpreted.
#[component]
pub fn MonitoringSlidebar(props: MonitoringSlidebarProps) -> Element {
    let context = use_sidebar();
    let state = context.state();
    let current_view = *props.view_signal.read();

    rsx! {
        aside {
            class: "monitoring-slidebar {state}",
            "data-current-view": "{current_view}",

            SidebarHeader {}

            div { class: "slidebar-content",
                div { class: "view-switcher",
                    for view in DashboardView::ALL {
                        ViewButton { view: view, view_signal: props.view_signal }
                    }
                }
                div { class: "monitoring-widgets", {props.children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::MonitoringSlidebar;
    use crate::components::sidebar::SidebarProvider;
    use crate::nav::DashboardView;

    fn render(app: fn() -> Element) -> String {
        let mut vdom = VirtualDom::new(app);
        vdom.rebuild_in_place();
        dioxus_ssr::render(&vdom)
    }

    #[component]
    fn ExpandedOverview() -> Element {
        let view_signal = use_signal(|| DashboardView::Overview);

        rsx! {
            SidebarProvider {
                MonitoringSlidebar { view_signal: view_signal,
                    div { "widget payload" }
                }
            }
        }
    }

    #[component]
    fn ExpandedAnalytics() -> Element {
        let view_signal = use_signal(|| DashboardView::Analytics);

        rsx! {
            SidebarProvider {
                MonitoringSlidebar { view_signal: view_signal,
                    div { "widget payload" }
                }
            }
        }
    }

    #[component]
    fn CollapsedOverview() -> Element {
        let view_signal = use_signal(|| DashboardView::Overview);

        rsx! {
            SidebarProvider { default_open: false,
                MonitoringSlidebar { view_signal: view_signal,
                    div { "widget payload" }
                }
            }
        }
    }

    #[test]
    fn expanded_shell_carries_state_class_and_view_attribute() {
        let html = render(ExpandedOverview);

        assert!(html.contains(r#"class="monitoring-slidebar expanded""#));
        assert!(html.contains(r#"data-current-view="overview""#));
    }

    #[test]
    fn expanded_switcher_labels_all_three_views() {
        let html = render(ExpandedOverview);

        assert!(html.contains("Overview"));
        assert!(html.contains("Analytics"));
        assert!(html.contains("Alerts"));
        assert_eq!(html.matches("view-btn").count(), 3);
    }

    #[test]
    fn active_button_tracks_the_current_view() {
        let html = render(ExpandedAnalytics);

        assert!(html.contains(r#"data-current-view="analytics""#));
        assert_eq!(html.matches(r#"class="view-btn active""#).count(), 1);
        assert!(html.contains(r#"class="view-btn active">Analytics"#));
    }

    #[test]
    fn collapsed_switcher_drops_labels_but_keeps_buttons() {
        let html = render(CollapsedOverview);

        assert!(html.contains(r#"class="monitoring-slidebar collapsed""#));
        assert_eq!(html.matches("view-btn").count(), 3);
        assert!(!html.contains("Overview"));
        assert!(!html.contains("Analytics"));
        assert!(!html.contains("Alerts"));
    }

    #[test]
    fn children_pass_through_into_the_widget_region() {
        let html = render(ExpandedOverview);

        assert!(html.contains("monitoring-widgets"));
        assert!(html.contains("widget payload"));
    }
}
