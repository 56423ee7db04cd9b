use dioxus::prelude::*;

use crate::common::images::Image;
use crate::components::monitoring_item::{MonitoringItem, SubItem, Trend};
use crate::nav::DashboardView;

pub struct NavigationEntry {
    pub title: &'static str,
    pub icon: &'static str,
}

pub struct NavigationSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [NavigationEntry],
}

// The static sidebar menu. Defined once at startup, never mutated.
pub const NAVIGATION_SECTIONS: &[NavigationSection] = &[
    NavigationSection {
        title: "Main panel",
        icon: "layout-dashboard",
        items: &[
            NavigationEntry {
                title: "System overview",
                icon: "bar-chart-3",
            },
            NavigationEntry {
                title: "Real-time monitoring",
                icon: "activity",
            },
        ],
    },
    NavigationSection {
        title: "Diagnostics",
        icon: "stethoscope",
        items: &[
            NavigationEntry {
                title: "Current diagnostics",
                icon: "gauge",
            },
            NavigationEntry {
                title: "Defect classification",
                icon: "shield",
            },
            NavigationEntry {
                title: "Diagnostic reports",
                icon: "file-text",
            },
        ],
    },
    NavigationSection {
        title: "SCADA systems",
        icon: "monitor",
        items: &[
            NavigationEntry {
                title: "Industrial SCADA",
                icon: "factory",
            },
            NavigationEntry {
                title: "Process control",
                icon: "settings",
            },
        ],
    },
    NavigationSection {
        title: "Grafana analytics",
        icon: "chart-line",
        items: &[
            NavigationEntry {
                title: "Time series",
                icon: "chart-spline",
            },
            NavigationEntry {
                title: "Monitoring",
                icon: "trending-up",
            },
        ],
    },
    NavigationSection {
        title: "CMMS",
        icon: "wrench",
        items: &[
            NavigationEntry {
                title: "Maintenance planning",
                icon: "clock",
            },
            NavigationEntry {
                title: "Asset management",
                icon: "database",
            },
            NavigationEntry {
                title: "Notifications",
                icon: "alert-triangle",
            },
        ],
    },
];

fn nav_icon(name: &str, alt: &str) -> Element {
    rsx! {
        Image {
            name: name.to_owned(),
            ext: String::from("svg"),
            folder: String::from("icons"),
            alt: alt.to_owned(),
        }
    }
}

fn sub_items(entries: &[NavigationEntry]) -> Vec<SubItem> {
    entries
        .iter()
        .map(|entry| SubItem {
            title: entry.title.to_owned(),
            icon: nav_icon(entry.icon, entry.title),
        })
        .collect()
}

#[component]
pub fn MonitoringNav() -> Element {
    rsx! {
        for section in NAVIGATION_SECTIONS {
            MonitoringItem {
                icon: nav_icon(section.icon, section.title),
                title: section.title.to_owned(),
                value: sub_items(section.items),
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MonitoringWidgetsProps {
    pub view_signal: Signal<DashboardView>,
}

// The navigation menu plus the live KPI widgets mounted under it. The
// defects widget doubles as a shortcut to the alerts view.
#[component]
pub fn MonitoringWidgets(props: MonitoringWidgetsProps) -> Element {
    let mut view_signal = props.view_signal;

    rsx! {
        MonitoringNav {}

        MonitoringItem {
            icon: nav_icon("trending-up", "Motor load"),
            title: "Motor load",
            value: vec![
                SubItem {
                    title: String::from("Phase current"),
                    icon: nav_icon("zap", "Phase current"),
                },
                SubItem {
                    title: String::from("Spindle speed"),
                    icon: nav_icon("gauge", "Spindle speed"),
                },
            ],
            trend: Trend::Up,
        }

        MonitoringItem {
            icon: nav_icon("alert-triangle", "Active defects"),
            title: "Active defects",
            value: vec![
                SubItem {
                    title: String::from("Bearing wear"),
                    icon: nav_icon("shield", "Bearing wear"),
                },
                SubItem {
                    title: String::from("Rotor imbalance"),
                    icon: nav_icon("activity", "Rotor imbalance"),
                },
            ],
            trend: Trend::Down,
            onclick: move |_| *view_signal.write() = DashboardView::Alerts,
        }
    }
}
