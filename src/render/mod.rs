//! Text summaries produced from a validated order form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::OrderError;
use crate::form::{OrderFormData, CURRENCY_GLYPH};

/// Flat fee added to the first payment in the confirmation summary.
pub const DELIVERY_FEE: f64 = 1500.0;

/// Which summary template to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// English echo of the entered values, for checking with the customer.
    Check,
    /// Vietnamese order confirmation with the computed total.
    Confirm,
}

impl SummaryMode {
    pub const ALL: [SummaryMode; 2] = [SummaryMode::Check, SummaryMode::Confirm];
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryMode::Check => f.write_str("CHECK"),
            SummaryMode::Confirm => f.write_str("CONFIRM"),
        }
    }
}

impl FromStr for SummaryMode {
    type Err = OrderError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "check" | "eng" => Ok(SummaryMode::Check),
            "confirm" | "vn" => Ok(SummaryMode::Confirm),
            _ => Err(OrderError::UnknownMode(input.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRenderer {
    pub delivery_fee: f64,
    /// Capitalize the customer name in the check summary.
    pub capitalize_name: bool,
}

impl Default for SummaryRenderer {
    fn default() -> Self {
        Self {
            delivery_fee: DELIVERY_FEE,
            capitalize_name: true,
        }
    }
}

impl SummaryRenderer {
    pub fn new(delivery_fee: f64, capitalize_name: bool) -> Self {
        Self {
            delivery_fee,
            capitalize_name,
        }
    }

    /// First payment plus the delivery fee. `NaN` when the payment does not
    /// parse, which validation rules out before rendering.
    pub fn total(&self, data: &OrderFormData) -> f64 {
        numeric_value(&data.first_payment).unwrap_or(f64::NAN) + self.delivery_fee
    }

    pub fn render(&self, data: &OrderFormData, mode: SummaryMode) -> String {
        let body = match mode {
            SummaryMode::Check => self.render_check(data),
            SummaryMode::Confirm => self.render_confirm(data),
        };
        body.trim().to_string()
    }

    fn render_check(&self, data: &OrderFormData) -> String {
        let name = if self.capitalize_name {
            capitalize(&data.name)
        } else {
            data.name.clone()
        };
        let lines = [
            format!("**Devices: {}", data.device),
            format!("-Name: {name}"),
            format!("-Address: {}", data.address),
            format!("-Gmail: {}", data.gmail),
            format!("-Phone number: {}", data.phone_number),
            format!("-Monthly fee: {}", data.monthly_fee),
            format!(
                "-Total of first payment: {} + {CURRENCY_GLYPH}{} (delivery fee)",
                data.first_payment,
                format_amount(self.delivery_fee)
            ),
            format!("-Time to receive: {}", data.receive_time),
        ];
        lines.join("\n")
    }

    fn render_confirm(&self, data: &OrderFormData) -> String {
        let lines = [
            format!("**Thiết bị: {}", data.device),
            format!("-Tên: {}", data.name),
            format!("-Địa chỉ: {}", data.address),
            format!("-Gmail: {}", data.gmail),
            format!("-Sđt: {}", data.phone_number),
            format!("-Smp: {}", data.monthly_fee),
            format!(
                "-Ship daibiki freeship: {CURRENCY_GLYPH}{}",
                format_amount(self.total(data))
            ),
            format!("-Thời gian nhận: {}", data.receive_time),
            data.platform.clone(),
            data.info_link.clone(),
        ];
        lines.join("\n")
    }
}

/// Parses a glyph-prefixed amount such as `¥5000.5`.
pub fn numeric_value(amount: &str) -> Option<f64> {
    amount
        .replacen(CURRENCY_GLYPH, "", 1)
        .trim()
        .parse::<f64>()
        .ok()
}

/// Prints an amount the way a JavaScript number converts to text: shortest
/// round-trip digits, plain between `1e-6` and `1e21`, exponent form
/// (`1e+21`, `1e-7`) outside.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exponent = format!("{value:e}");
        return match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exponent,
        };
    }
    // `+ 0.0` folds negative zero into zero.
    (value + 0.0).to_string()
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldName;

    fn sample() -> OrderFormData {
        OrderFormData::default()
            .with_field(FieldName::Device, "Sim data 10GB 1 year plan")
            .with_field(FieldName::Name, "minh")
            .with_field(FieldName::Gmail, "minh@gmail.com")
            .with_field(FieldName::MonthlyFee, "¥3000")
            .with_field(FieldName::FirstPayment, "¥5000")
    }

    #[test]
    fn check_summary_capitalizes_name_and_quotes_fee() {
        let text = SummaryRenderer::default().render(&sample(), SummaryMode::Check);
        assert!(text.starts_with("**Devices: Sim data 10GB 1 year plan\n"));
        assert!(text.contains("\n-Name: Minh\n"));
        assert!(text.contains("\n-Total of first payment: ¥5000 + ¥1500 (delivery fee)\n"));
        assert!(text.ends_with("-Time to receive:"));
    }

    #[test]
    fn check_summary_can_keep_raw_name() {
        let renderer = SummaryRenderer::new(DELIVERY_FEE, false);
        let text = renderer.render(&sample(), SummaryMode::Check);
        assert!(text.contains("-Name: minh"));
    }

    #[test]
    fn confirm_summary_adds_delivery_fee() {
        let text = SummaryRenderer::default().render(&sample(), SummaryMode::Confirm);
        assert!(text.contains("-Tên: minh"));
        assert!(text.contains("-Ship daibiki freeship: ¥6500"));
        assert!(text.ends_with("-Thời gian nhận:"));
    }

    #[test]
    fn confirm_summary_appends_platform_and_link() {
        let data = sample()
            .with_field(FieldName::Platform, "Facebook")
            .with_field(FieldName::InfoLink, "https://example.com/p/1");
        let text = SummaryRenderer::default().render(&data, SummaryMode::Confirm);
        assert!(text.ends_with("-Thời gian nhận: \nFacebook\nhttps://example.com/p/1"));
    }

    #[test]
    fn fractional_totals_keep_decimals() {
        let data = sample().with_field(FieldName::FirstPayment, "¥5000.5");
        assert_eq!(SummaryRenderer::default().total(&data), 6500.5);
        let text = SummaryRenderer::default().render(&data, SummaryMode::Confirm);
        assert!(text.contains("¥6500.5\n"));
    }

    #[test]
    fn numeric_value_strips_glyph() {
        assert_eq!(numeric_value("¥5000"), Some(5000.0));
        assert_eq!(numeric_value("12.25"), Some(12.25));
        assert_eq!(numeric_value("¥"), None);
    }

    #[test]
    fn amounts_format_like_plain_numbers() {
        assert_eq!(format_amount(6500.0), "6500");
        assert_eq!(format_amount(1500.25), "1500.25");
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
    }

    #[test]
    fn huge_and_tiny_amounts_use_exponent_form() {
        assert_eq!(format_amount(999_999_999_999_999_900_000.0), "999999999999999900000");
        assert_eq!(format_amount(1e21), "1e+21");
        assert_eq!(format_amount(1.5e22), "1.5e+22");
        assert_eq!(format_amount(0.000001), "0.000001");
        assert_eq!(format_amount(1e-7), "1e-7");
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize("mINH"), "Minh");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("đức"), "Đức");
    }

    #[test]
    fn mode_aliases_parse() {
        assert_eq!("CHECK".parse::<SummaryMode>().unwrap(), SummaryMode::Check);
        assert_eq!("eng".parse::<SummaryMode>().unwrap(), SummaryMode::Check);
        assert_eq!("Vn".parse::<SummaryMode>().unwrap(), SummaryMode::Confirm);
        assert!("print".parse::<SummaryMode>().is_err());
    }
}
