//! Browser clock for toast timestamps.

use presence::Clock;

/// `Date.now()` in the browser, the system clock elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            presence::SystemClock.now_ms()
        }
    }
}
