use super::view_model::CalendarViewModel;
use chrono::{Datelike, NaiveDate};
use leptos::ev;
use leptos::prelude::*;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[component]
pub fn CalendarView() -> impl IntoView {
    let vm = CalendarViewModel::from_location();

    let keydown = {
        let vm = vm.clone();
        window_event_listener(ev::keydown, move |e| {
            // Ctrl combinations belong to the global shortcuts
            if !e.ctrl_key() {
                vm.handle_key(&e.key());
            }
        })
    };
    on_cleanup(move || keydown.remove());

    let day_cell = {
        let vm = vm.clone();
        move |date: NaiveDate| {
            let booked = vm.bookings_for(date);
            let class = if booked.is_some() {
                "calendar-day has-bookings"
            } else {
                "calendar-day"
            };
            let tooltip = booked.as_ref().map(|b| b.tooltip());
            let count = booked.as_ref().map(|b| b.bookings.len()).unwrap_or(0);
            let vm_style = vm.clone();
            let vm_enter = vm.clone();
            let vm_leave = vm.clone();
            let vm_click = vm.clone();
            view! {
                <div
                    class=class
                    title=tooltip
                    style=move || vm_style.day_style(date)
                    on:mouseenter=move |_| vm_enter.hovered.set(Some(date))
                    on:mouseleave=move |_| vm_leave.hovered.set(None)
                    on:click=move |_| vm_click.select_day(date)
                >
                    <span class="day-number">{date.day()}</span>
                    {(count > 0).then(|| view! {
                        <span class="booking-count">{format!("{} booked", count)}</span>
                    })}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="calendar-container">
            <div class="calendar-header">
                <button
                    class="btn btn-secondary"
                    title="Previous month (Left arrow)"
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.navigate_month(-1)
                    }
                >
                    "‹"
                </button>
                <h2>{vm.month.title()}</h2>
                <button
                    class="btn btn-secondary"
                    title="Next month (Right arrow)"
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.navigate_month(1)
                    }
                >
                    "›"
                </button>
            </div>

            <div class="calendar-grid">
                {WEEKDAYS
                    .iter()
                    .map(|d| view! { <div class="calendar-weekday">{*d}</div> })
                    .collect_view()}
                {vm.cells()
                    .into_iter()
                    .map(|cell| match cell {
                        Some(date) => day_cell(date),
                        None => view! { <div class="calendar-day empty"></div> }.into_any(),
                    })
                    .collect_view()}
            </div>

            {
                let vm = vm.clone();
                move || {
                    let vm_close = vm.clone();
                    vm.selected_bookings().map(|day| view! {
                        <div id="bookingDetails" class="booking-details">
                            <div class="booking-details-header">
                                <h3>{format!("Bookings on {}", day.date.format("%d %b %Y"))}</h3>
                                <button
                                    class="button button--icon"
                                    title="Close (Esc)"
                                    on:click=move |_| vm_close.close_booking_details()
                                >
                                    "×"
                                </button>
                            </div>
                            <ul>
                                {day.bookings
                                    .into_iter()
                                    .map(|b| view! {
                                        <li>
                                            <strong>{b.guest_name}</strong>
                                            {format!(" - Room {}", b.room_number)}
                                            {b.check_out.map(|d| format!(", until {}", d.format("%d %b")))}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                }
            }
        </div>
    }
}
