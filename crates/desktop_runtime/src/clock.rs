//! Wall-clock snapshot for the taskbar clock.

/// Taskbar refresh period.
pub const CLOCK_TICK: std::time::Duration = std::time::Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }
}

/// Formats `snapshot` as 24-hour `HH:MM`.
pub fn format_clock_time(snapshot: ClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            hour,
            minute,
            second: 42,
        }
    }

    #[test]
    fn clock_is_zero_padded_24_hour() {
        assert_eq!(format_clock_time(at(0, 0)), "00:00");
        assert_eq!(format_clock_time(at(9, 5)), "09:05");
        assert_eq!(format_clock_time(at(13, 7)), "13:07");
        assert_eq!(format_clock_time(at(23, 59)), "23:59");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_browser_builds_use_the_epoch() {
        assert_eq!(format_clock_time(ClockSnapshot::now()), "00:00");
    }
}
