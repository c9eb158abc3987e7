use super::*;

#[component]
/// Fixed-duration startup splash.
pub fn BootSplash(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-boot-splash", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="boot-splash"
        >
            {children()}
        </div>
    }
}

#[component]
/// Dismissable, non-blocking notice strip.
pub fn Banner(
    #[prop(into)] message: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = TextTone::Danger)] tone: TextTone,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-banner", layout_class)
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="banner"
            data-ui-tone=tone.token()
        >
            <span class="ui-banner-message">{message}</span>
            {on_dismiss.map(|on_dismiss| {
                view! {
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        ui_slot="banner-dismiss"
                        aria_label="Dismiss"
                        on_click=on_dismiss
                    >
                        "x"
                    </Button>
                }
            })}
        </div>
    }
}

#[component]
/// Floating panel anchored above the taskbar.
pub fn FloatingPanel(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            class=merge_layout_class("ui-floating-panel", layout_class)
            role="complementary"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="floating-panel"
            data-ui-slot=ui_slot
        >
            {children()}
        </aside>
    }
}

#[component]
/// Full-viewport overlay that replaces the desktop while shown.
pub fn FullscreenOverlay(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-fullscreen-overlay", layout_class)
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="fullscreen-overlay"
        >
            {children()}
        </div>
    }
}
