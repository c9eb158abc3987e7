use super::*;
use crate::model::StoreState;
use system_ui::{Button, EmptyState, FullscreenOverlay, ItemCard};

#[component]
pub(super) fn StoreOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let store = create_memo(move |_| runtime.state.get().store);

    view! {
        <FullscreenOverlay aria_label="Store" layout_class="store-overlay">
            <header class="store-header">
                <Heading>"Store"</Heading>
                <Button
                    aria_label="Close store"
                    ui_slot="store-close"
                    on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::CloseStore))
                >
                    "Close"
                </Button>
            </header>
            {move || match store.get() {
                StoreState::Loading => view! {
                    <EmptyState ui_slot="store-loading">
                        <Text>"Loading store..."</Text>
                    </EmptyState>
                }
                .into_view(),
                StoreState::Failed(message) => view! {
                    <EmptyState ui_slot="store-error">
                        <Text tone=TextTone::Danger>{format!("Could not load the store: {message}")}</Text>
                    </EmptyState>
                }
                .into_view(),
                StoreState::Loaded(items) if items.is_empty() => view! {
                    <EmptyState ui_slot="store-empty">
                        <Text tone=TextTone::Secondary>"No items available."</Text>
                    </EmptyState>
                }
                .into_view(),
                StoreState::Loaded(items) => view! {
                    <div class="store-grid">
                        {items
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <ItemCard
                                        title=item.name
                                        image_src=item.icon
                                        byline=item.author
                                        description=item.description
                                        badge=item.price
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_view(),
            }}
        </FullscreenOverlay>
    }
}
