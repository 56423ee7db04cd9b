#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::sidebar::SidebarProvider;
use components::slidebar::MonitoringSlidebar;

mod monitoring;
use monitoring::MonitoringWidgets;

mod nav;
use nav::{DashboardMainPage, DashboardView};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let view_signal = use_signal(|| DashboardView::Overview);

    rsx! {
        style { "{common::style::DASHBOARD_STYLES}" }
        SidebarProvider {
            div { class: "dashboard-layout",
                MonitoringSlidebar { view_signal: view_signal,
                    MonitoringWidgets { view_signal: view_signal }
                }
                main { class: "dashboard-main",
                    DashboardMainPage { view_signal: view_signal }
                }
            }
        }
    }
}
