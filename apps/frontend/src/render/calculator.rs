use crate::render::html::Element;

/// What the calculator's single result line currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultLine {
    #[default]
    Empty,
    Value(f64),
    Error(String),
}

/// `Result: 8`, `Result: -2`, `Result: 5.6`. Integral values print without a decimal point.
pub fn result_text(value: f64) -> String {
    format!("Result: {}", format_number(value))
}

/// Shortest round-trip form. Negative zero prints as `0`; magnitudes from
/// 1e21 up or below 1e-6 switch to exponent form (`1e+21`, `1.5e-7`).
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) && magnitude.is_finite() {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    value.to_string()
}

/// Renders the line in place; an error replaces the value in the same element.
pub fn render_result_line(line: &ResultLine) -> String {
    let el = Element::new("div").id("result");
    match line {
        ResultLine::Empty => el.class("result"),
        ResultLine::Value(v) => el.class("result success").text(result_text(*v)),
        ResultLine::Error(msg) => el.class("result error").text(msg.as_str()),
    }
    .render()
}
