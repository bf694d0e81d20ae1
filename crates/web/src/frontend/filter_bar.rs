use leptos::*;

use storefront_products::filter::ALL_CATEGORIES;
use storefront_products::{CategoryFilter, FilterQuery};

use crate::frontend::app::AppState;
use crate::view_model::category_label;

/// Search box, search button and category selector.
///
/// Typing only edits the draft; the filter is applied on the button, on
/// Enter, or when the category changes.
#[component]
pub fn FilterBar(state: AppState) -> impl IntoView {
    let search = create_rw_signal(String::new());
    let category = create_rw_signal(CategoryFilter::All);
    let categories = create_memo(move |_| state.session.with(|session| session.categories()));

    let apply = move || {
        state.apply_filter(FilterQuery::new(
            &search.get_untracked(),
            category.get_untracked(),
        ));
    };

    view! {
        <div class="row g-2 mb-4">
            <div class="col-md-8">
                <div class="input-group">
                    <input
                        type="text"
                        id="searchInput"
                        class="form-control"
                        placeholder="Search products..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                        on:keyup=move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                apply();
                            }
                        }
                    />
                    <button id="searchButton" class="btn btn-success" type="button" on:click=move |_| apply()>
                        "Search"
                    </button>
                </div>
            </div>
            <div class="col-md-4">
                <select
                    id="categoryFilter"
                    class="form-select"
                    on:change=move |ev| {
                        category.set(CategoryFilter::from_token(&event_target_value(&ev)));
                        apply();
                    }
                >
                    <option value=ALL_CATEGORIES>"All Categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|token| {
                                let label = category_label(&token);
                                view! { <option value=token>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        </div>
    }
}
