use super::view_model::{DashboardViewModel, RoomCell};
use crate::shared::config::use_config;
use crate::shared::notifications::use_notifications;
use leptos::prelude::*;

#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_config();
    let vm = DashboardViewModel::new(&config, use_notifications());
    vm.load_room_status();

    view! {
        <div class="dashboard-container">
            <div class="dashboard-header">
                <h2>"Room Status"</h2>
                <button
                    class="btn btn-secondary"
                    data-action="refresh"
                    disabled={
                        let vm = vm.clone();
                        move || vm.loading.get()
                    }
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.refresh()
                    }
                >
                    "Refresh"
                </button>
            </div>

            <div class="dashboard-summary">
                <span class="summary-item occupied">
                    "Occupied: "
                    {
                        let vm = vm.clone();
                        move || vm.occupied_count()
                    }
                </span>
                <span class="summary-item available">
                    "Available: "
                    {
                        let vm = vm.clone();
                        move || vm.available_count()
                    }
                </span>
            </div>

            <div id="room-grid" class="room-grid">
                <For
                    each={
                        let vm = vm.clone();
                        move || vm.cells()
                    }
                    key=|cell| (cell.number, cell.status)
                    children={
                        let vm = vm.clone();
                        move |cell: RoomCell| {
                            let vm = vm.clone();
                            view! {
                                <div
                                    class=cell.css_class()
                                    title=cell.title()
                                    on:click=move |_| vm.show_room_details(cell.number)
                                >
                                    {cell.number}
                                </div>
                            }
                        }
                    }
                />
            </div>
        </div>
    }
}
