use std::fmt;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DashboardView {
    Overview,
    Analytics,
    Alerts,
}

impl DashboardView {
    pub const ALL: [DashboardView; 3] = [
        DashboardView::Overview,
        DashboardView::Analytics,
        DashboardView::Alerts,
    ];

    // Stable strings mirrored into the data-current-view attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardView::Overview => "overview",
            DashboardView::Analytics => "analytics",
            DashboardView::Alerts => "alerts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Overview",
            DashboardView::Analytics => "Analytics",
            DashboardView::Alerts => "Alerts",
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct DashboardPageProps {
    pub view_signal: Signal<DashboardView>,
}

#[component]
pub fn DashboardMainPage(props: DashboardPageProps) -> Element {
    let view = props.view_signal.read();

    match *view {
        DashboardView::Overview => rsx! {
            section { class: "view-panel",
                h1 { "System overview" }
                p { "Aggregate health of the monitored drives and process lines." }
            }
        },
        DashboardView::Analytics => rsx! {
            section { class: "view-panel",
                h1 { "Analytics" }
                p { "Trend analysis over the collected measurement series." }
            }
        },
        DashboardView::Alerts => rsx! {
            section { class: "view-panel",
                h1 { "Alerts" }
                p { "Active defect notifications ordered by severity." }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardView;

    #[test]
    fn view_strings_are_stable() {
        assert_eq!(DashboardView::Overview.as_str(), "overview");
        assert_eq!(DashboardView::Analytics.as_str(), "analytics");
        assert_eq!(DashboardView::Alerts.as_str(), "alerts");
    }

    #[test]
    fn switcher_order_is_fixed() {
        let labels: Vec<_> = DashboardView::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels, ["Overview", "Analytics", "Alerts"]);
    }
}
