use crate::model::Viewport;

pub(super) fn desktop_viewport(taskbar_height_px: i32) -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return Viewport {
                w: width.max(320),
                h: (height - taskbar_height_px).max(220),
            };
        }
    }

    Viewport {
        w: 1024,
        h: 768 - taskbar_height_px,
    }
}
