use super::*;
use crate::clock::{format_clock_time, ClockSnapshot, CLOCK_TICK};
use system_ui::{ClockButton, Taskbar, TaskbarButton, TaskbarSection};

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock_now = create_rw_signal(ClockSnapshot::now());
    let assistant_open = create_memo(move |_| runtime.state.get().assistant_open);

    match set_interval_with_handle(move || clock_now.set(ClockSnapshot::now()), CLOCK_TICK) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("taskbar clock interval unavailable: {err:?}"),
    }

    let clock_text = move || format_clock_time(clock_now.get());

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    ui_slot="start-button"
                    aria_label="Start"
                    on_click=Callback::new(move |_| logging::log!("start menu activated"))
                >
                    "Start"
                </TaskbarButton>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray">
                <TaskbarButton
                    ui_slot="assistant-toggle"
                    aria_label="Assistant"
                    title="Assistant"
                    pressed=Signal::derive(move || assistant_open.get())
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleAssistant)
                    })
                >
                    "Chat"
                </TaskbarButton>
                <ClockButton aria_label=Signal::derive(move || format!("Time {}", clock_text()))>
                    <span class="taskbar-clock-time">{clock_text}</span>
                </ClockButton>
            </TaskbarSection>
        </Taskbar>
    }
}
