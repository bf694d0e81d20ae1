use leptos::*;

use crate::config::CatalogConfig;
use crate::frontend::api;
use crate::frontend::app::AppState;
use crate::view_model::ProductDetail;

/// Detail modal. Open while the session has a selected product.
#[component]
pub fn ProductModal(state: AppState, config: StoredValue<CatalogConfig>) -> impl IntoView {
    let detail = create_memo(move |_| {
        state
            .session
            .with(|session| config.with_value(|config| session.detail(config)))
    });
    let is_open = move || detail.with(Option::is_some);
    let title = move || {
        detail.with(|detail| detail.as_ref().map(|d| d.title.clone()).unwrap_or_default())
    };
    let close = move |_: ev::MouseEvent| state.close_details();

    view! {
        <div
            class="modal fade"
            class:show=is_open
            class:d-block=is_open
            id="productDetailsModal"
            tabindex="-1"
            on:click=move |ev: ev::MouseEvent| {
                // Clicks on the dimmed area outside the dialog close it.
                if ev.target() == ev.current_target() {
                    state.close_details();
                }
            }
        >
            <div class="modal-dialog modal-lg">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title" id="productModalTitle">{title}</h5>
                        <button type="button" class="btn-close" aria-label="Close" on:click=close></button>
                    </div>
                    <div class="modal-body" id="productModalBody">
                        {move || detail.get().map(|detail| view! { <DetailBody detail=detail/> })}
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" on:click=close>
                            "Close"
                        </button>
                        <button
                            type="button"
                            class="btn btn-success"
                            id="enquireNowBtn"
                            on:click=move |_| api::enquire(&title())
                        >
                            "Enquire Now"
                        </button>
                    </div>
                </div>
            </div>
        </div>
        <Show when=is_open>
            <div class="modal-backdrop fade show"></div>
        </Show>
    }
}

#[component]
fn DetailBody(detail: ProductDetail) -> impl IntoView {
    let ProductDetail {
        title,
        gallery,
        rating_badge,
        price_label,
        full_description,
        specs,
        benefits,
        usage_rate,
        usage_method,
    } = detail;

    // Scoped to this render: reopening a product starts from its primary image.
    let images = gallery.images().to_vec();
    let gallery = create_rw_signal(gallery);
    let main_image = move || gallery.with(|g| g.main_image().to_string());

    let thumbnails = images
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            view! {
                <div class="col-3">
                    <img
                        src=src
                        class="img-thumbnail thumbnail"
                        class:active=move || gallery.with(|g| g.is_active(index))
                        alt=format!("Thumbnail {}", index + 1)
                        on:click=move |_| {
                            gallery.update(|g| {
                                g.select(index);
                            });
                        }
                    />
                </div>
            }
        })
        .collect_view();

    let spec_rows = specs
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td width="30%"><strong>{row.label}</strong></td>
                    <td>{row.value}</td>
                </tr>
            }
        })
        .collect_view();

    let benefit_items = benefits
        .into_iter()
        .map(|benefit| view! { <li>{benefit}</li> })
        .collect_view();

    view! {
        <div class="row">
            <div class="col-md-6">
                <img src=main_image id="mainProductImage" class="img-fluid mb-3" alt=title/>
                <div class="row g-2 mb-3">{thumbnails}</div>
            </div>
            <div class="col-md-6">
                <div class="d-flex justify-content-between align-items-start mb-3">
                    <div>
                        <span class="badge bg-success">{rating_badge}</span>
                    </div>
                    <h4 class="text-success">{price_label}</h4>
                </div>

                <h5>"Description"</h5>
                <p>{full_description}</p>

                <h5 class="mt-4">"Specifications"</h5>
                <table class="table table-sm">
                    <tbody>{spec_rows}</tbody>
                </table>

                <h5 class="mt-4">"Key Benefits"</h5>
                <ul>{benefit_items}</ul>

                <h5 class="mt-4">"Usage Instructions"</h5>
                <p><strong>"Application Rate: "</strong>{usage_rate}</p>
                <p><strong>"Method: "</strong>{usage_method}</p>
            </div>
        </div>
    }
}
