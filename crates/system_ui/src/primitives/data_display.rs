use super::*;

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
        >
            {children()}
        </h2>
    }
}

#[component]
/// Shared inline text with a semantic tone.
pub fn Text(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Centered placeholder for loading, empty, and failure states.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Catalogue tile with artwork, title, byline, description, and a trailing badge.
pub fn ItemCard(
    #[prop(into)] title: String,
    #[prop(into)] image_src: String,
    #[prop(into)] byline: String,
    #[prop(into)] description: String,
    #[prop(into)] badge: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-item-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="item-card"
        >
            <img class="ui-item-card-image" src=image_src alt=title.clone() />
            <h3 class="ui-item-card-title">{title}</h3>
            <p class="ui-item-card-byline">{byline}</p>
            <p class="ui-item-card-description">{description}</p>
            <span class="ui-item-card-badge">{badge}</span>
        </article>
    }
}

#[component]
/// Scrolling chat transcript container.
pub fn ChatTranscript(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-chat-transcript", layout_class)
            role="log"
            aria-live="polite"
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="chat-transcript"
        >
            {children()}
        </div>
    }
}

#[component]
/// One chat turn.
pub fn ChatBubble(
    side: ChatSide,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-chat-bubble", layout_class)
            data-ui-primitive="true"
            data-ui-kind="chat-bubble"
            data-ui-slot=side.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal surface.
pub fn TerminalSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-surface"
            node_ref=node_ref
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal transcript container.
pub fn TerminalTranscript(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-transcript", layout_class)
            role="log"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="terminal-transcript"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal line surface.
pub fn TerminalLine(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-line", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-line"
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal prompt row.
pub fn TerminalPrompt(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-prompt", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-prompt"
        >
            {children()}
        </div>
    }
}
