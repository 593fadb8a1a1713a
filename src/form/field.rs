use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::OrderError;

/// Every input of the order form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Device,
    Name,
    Address,
    Gmail,
    PhoneNumber,
    MonthlyFee,
    FirstPayment,
    ReceiveTime,
    Platform,
    InfoLink,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::Device,
        FieldName::Name,
        FieldName::Address,
        FieldName::Gmail,
        FieldName::PhoneNumber,
        FieldName::MonthlyFee,
        FieldName::FirstPayment,
        FieldName::ReceiveTime,
        FieldName::Platform,
        FieldName::InfoLink,
    ];

    /// Key used for error maps and the `set` command.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Device => "device",
            FieldName::Name => "name",
            FieldName::Address => "address",
            FieldName::Gmail => "gmail",
            FieldName::PhoneNumber => "phoneNumber",
            FieldName::MonthlyFee => "monthlyFee",
            FieldName::FirstPayment => "firstPayment",
            FieldName::ReceiveTime => "receiveTime",
            FieldName::Platform => "platform",
            FieldName::InfoLink => "infoLink",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Device => "Device",
            FieldName::Name => "Customer Name",
            FieldName::Address => "Address",
            FieldName::Gmail => "Gmail",
            FieldName::PhoneNumber => "Phone Number (optional)",
            FieldName::MonthlyFee => "Monthly Fee",
            FieldName::FirstPayment => "First Payment",
            FieldName::ReceiveTime => "Time to Receive",
            FieldName::Platform => "Platform",
            FieldName::InfoLink => "Information Link",
        }
    }

    /// Monetary fields carry a currency glyph and are reformatted on input.
    pub fn is_monetary(self) -> bool {
        matches!(self, FieldName::MonthlyFee | FieldName::FirstPayment)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = OrderError;

    /// Accepts the camelCase key, a snake/kebab spelling of it, or the label.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        FieldName::ALL
            .into_iter()
            .find(|field| {
                field.key().to_ascii_lowercase() == normalized
                    || field
                        .label()
                        .chars()
                        .filter(|ch| !ch.is_whitespace())
                        .collect::<String>()
                        .to_ascii_lowercase()
                        == normalized
            })
            .ok_or_else(|| OrderError::UnknownField(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_variants() {
        assert_eq!("phoneNumber".parse::<FieldName>().unwrap(), FieldName::PhoneNumber);
        assert_eq!("monthly_fee".parse::<FieldName>().unwrap(), FieldName::MonthlyFee);
        assert_eq!("first-payment".parse::<FieldName>().unwrap(), FieldName::FirstPayment);
        assert_eq!("Customer Name".parse::<FieldName>().unwrap(), FieldName::Name);
        assert_eq!("INFOLINK".parse::<FieldName>().unwrap(), FieldName::InfoLink);
    }

    #[test]
    fn rejects_unknown_field() {
        let err = "fax".parse::<FieldName>().unwrap_err();
        assert!(matches!(err, OrderError::UnknownField(ref name) if name == "fax"));
    }

    #[test]
    fn only_fees_are_monetary() {
        let monetary: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(|field| field.is_monetary())
            .collect();
        assert_eq!(monetary, vec![FieldName::MonthlyFee, FieldName::FirstPayment]);
    }
}
