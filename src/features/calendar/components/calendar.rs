use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;
use crate::core::models::CalendarEvent;
use crate::features::calendar::services::{
    event_chips, month_label, month_start, month_weeks, shift_month, WEEKDAYS,
};

#[component]
pub fn Calendar(events: Vec<CalendarEvent>, height: f64) -> impl IntoView {
    let today = Local::now().date_naive();
    let (shown, set_shown) = signal(month_start(today));

    let day_cell = move |day: NaiveDate, month: u32| {
        let chips = event_chips(&events, day);
        view! {
            <div
                class="calendar-day"
                class:outside={day.month() != month}
                class:today={day == today}
            >
                <span class="calendar-date">{format!("{:02}", day.day())}</span>
                {chips
                    .into_iter()
                    .map(|(title, range)| {
                        view! {
                            <div class="calendar-event" title=range>
                                {title}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
    };

    view! {
        <div class="calendar" style=format!("height: {}px", height)>
            <div class="calendar-toolbar">
                <div class="btn-group">
                    <button class="btn-secondary" on:click=move |_| set_shown.set(month_start(today))>"Today"</button>
                    <button class="btn-secondary" on:click=move |_| set_shown.update(|d| *d = shift_month(*d, -1))>"Back"</button>
                    <button class="btn-secondary" on:click=move |_| set_shown.update(|d| *d = shift_month(*d, 1))>"Next"</button>
                </div>
                <span class="calendar-label">{move || month_label(shown.get())}</span>
            </div>
            <div class="calendar-header">
                {WEEKDAYS.iter().map(|name| view! { <div class="calendar-weekday">{*name}</div> }).collect::<Vec<_>>()}
            </div>
            <div class="calendar-month">
                {move || {
                    let month = shown.get().month();
                    month_weeks(shown.get())
                        .into_iter()
                        .map(|week| {
                            view! {
                                <div class="calendar-week">
                                    {week.into_iter().map(|day| day_cell(day, month)).collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
