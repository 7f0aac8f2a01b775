// Utility helpers shared across components.

use wasm_bindgen::JsValue;

/// Derived quantities are shown with one decimal place; internal values keep
/// full precision and only presentation rounds.
pub fn format_one_decimal(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_decimal_rounds_for_display_only() {
        assert_eq!(format_one_decimal(37.5), "37.5");
        assert_eq!(format_one_decimal(6.938), "6.9");
        assert_eq!(format_one_decimal(60.0), "60.0");
    }
}
