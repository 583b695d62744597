//! Load-time prototype disclaimer.
//!
//! Two fixed lines: a red banner telling readers not to ship this code, and a
//! plain follow-up. In the browser the banner is styled through `%c`; other
//! hosts get both lines at `warn` level.

#[cfg(test)]
#[path = "disclaimer_test.rs"]
mod disclaimer_test;

pub const PRODUCTION_WARNING: &str = "Please do not use the provided JavaScript in production!";

pub const COMPATIBILITY_WARNING: &str =
    "Code in app.js is not built for accessibility, performance, or cross-browser compatibility.";

/// CSS applied to [`PRODUCTION_WARNING`] in the browser console.
pub const BANNER_STYLES: &str = concat!(
    "color: #fff; ",
    "background-color: #c23934; ",
    "display: block; ",
    "text-align: center; ",
    "padding: 8px 32px; ",
    "font: 100 16px/28px sans-serif; ",
    "background-image: linear-gradient(45deg,rgba(0,0,0,.025) 25%,transparent 25%,transparent 50%,",
    "rgba(0,0,0,.025) 50%,rgba(0,0,0,.025) 75%,transparent 75%,transparent); ",
    "background-size: 64px 64px;",
);

/// Both lines in emission order.
pub fn lines() -> [&'static str; 2] {
    [PRODUCTION_WARNING, COMPATIBILITY_WARNING]
}

/// Emit the disclaimer once.
pub fn announce() {
    #[cfg(feature = "hydrate")]
    {
        web_sys::console::log_3(&"%c%s".into(), &BANNER_STYLES.into(), &PRODUCTION_WARNING.into());
        web_sys::console::log_1(&COMPATIBILITY_WARNING.into());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        for line in lines() {
            log::warn!("{line}");
        }
    }
}
