use leptos::*;

use crate::config::CatalogConfig;
use crate::frontend::app::AppState;
use crate::view_model::ProductCard;

/// Product grid. Rebuilt from scratch whenever the visible cards change.
#[component]
pub fn ProductGrid(state: AppState, config: StoredValue<CatalogConfig>) -> impl IntoView {
    let cards = create_memo(move |_| {
        state
            .session
            .with(|session| config.with_value(|config| session.cards(config)))
    });
    let nothing_matches = move || {
        state.session.with(|session| session.view_state().is_loaded()) && cards.with(Vec::is_empty)
    };

    view! {
        <div class="row" id="productGrid">
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|card| view! { <ProductCardView card=card state=state/> })
                    .collect_view()
            }}
        </div>
        <Show when=nothing_matches>
            <p class="text-muted text-center my-5">"No products match your search."</p>
        </Show>
    }
}

/// One card; its button opens the detail modal for this card's product.
#[component]
fn ProductCardView(card: ProductCard, state: AppState) -> impl IntoView {
    let id = card.id;
    let alt = card.name.clone();

    view! {
        <div class="col-md-4 col-lg-3 mb-4">
            <div class="card h-100 product-card">
                <img src=card.image class="card-img-top" alt=alt/>
                <div class="card-body">
                    <h5 class="card-title">{card.name}</h5>
                    <p class="card-text text-muted">{card.summary}</p>
                    <div class="d-flex justify-content-between align-items-center">
                        <span class="price">{card.price_label}</span>
                        <span class="badge bg-secondary">{card.size}</span>
                    </div>
                </div>
                <div class="card-footer bg-transparent">
                    <button
                        class="btn btn-sm btn-outline-primary view-details"
                        on:click=move |_| state.show_details(id)
                    >
                        "View Details"
                    </button>
                </div>
            </div>
        </div>
    }
}
