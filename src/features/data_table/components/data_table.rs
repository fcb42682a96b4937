use leptos::prelude::*;
use crate::core::models::Person;
use crate::features::data_table::services::{
    next_sort, page_count, page_rows, range_label, sorted_rows, Field, SortDirection, SortState,
};

#[component]
pub fn DataTable(rows: Vec<Person>, page_size: usize) -> impl IntoView {
    let (sort, set_sort) = signal::<Option<SortState>>(None);
    let (page, set_page) = signal(0usize);
    let total = rows.len();
    let pages = page_count(total, page_size);

    let visible = move || {
        let sorted = sorted_rows(&rows, sort.get());
        page_rows(&sorted, page.get(), page_size)
    };

    let header = move |field: Field| {
        let indicator = move || match sort.get() {
            Some(SortState { field: f, direction }) if f == field => match direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            },
            _ => "",
        };
        view! {
            <th
                class="sortable"
                class:numeric=field.is_numeric()
                style=format!("width: {}px", field.width())
                on:click=move |_| {
                    set_sort.update(|s| *s = next_sort(*s, field));
                    set_page.set(0);
                }
            >
                {field.header()}
                <span class="sort-indicator">{indicator}</span>
            </th>
        }
    };

    view! {
        <div class="data-grid">
            <table>
                <thead>
                    <tr>{Field::all().into_iter().map(header).collect::<Vec<_>>()}</tr>
                </thead>
                <tbody>
                    {move || {
                        visible()
                            .into_iter()
                            .map(|person| {
                                view! {
                                    <tr>
                                        {Field::all()
                                            .into_iter()
                                            .map(|field| {
                                                view! {
                                                    <td class:numeric=field.is_numeric()>{field.cell(&person)}</td>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <div class="data-grid-footer">
                <span>{move || range_label(page.get(), page_size, total)}</span>
                <button
                    class="btn-secondary"
                    disabled=move || page.get() == 0
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                >"‹"</button>
                <button
                    class="btn-secondary"
                    disabled=move || page.get() + 1 >= pages
                    on:click=move |_| set_page.update(|p| *p = (*p + 1).min(pages.saturating_sub(1)))
                >"›"</button>
            </div>
        </div>
    }
}
