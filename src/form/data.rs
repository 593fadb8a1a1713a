use serde::{Deserialize, Serialize};

use super::field::FieldName;

/// Snapshot of every form input.
///
/// Values are replaced wholesale through [`OrderFormData::with_field`]; the
/// record itself is never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFormData {
    pub device: String,
    pub name: String,
    pub address: String,
    pub gmail: String,
    pub phone_number: String,
    pub monthly_fee: String,
    pub first_payment: String,
    pub receive_time: String,
    pub platform: String,
    pub info_link: String,
}

impl OrderFormData {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Device => &self.device,
            FieldName::Name => &self.name,
            FieldName::Address => &self.address,
            FieldName::Gmail => &self.gmail,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::MonthlyFee => &self.monthly_fee,
            FieldName::FirstPayment => &self.first_payment,
            FieldName::ReceiveTime => &self.receive_time,
            FieldName::Platform => &self.platform,
            FieldName::InfoLink => &self.info_link,
        }
    }

    /// Returns a copy with `field` set to `value`.
    pub fn with_field(&self, field: FieldName, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            FieldName::Device => &mut next.device,
            FieldName::Name => &mut next.name,
            FieldName::Address => &mut next.address,
            FieldName::Gmail => &mut next.gmail,
            FieldName::PhoneNumber => &mut next.phone_number,
            FieldName::MonthlyFee => &mut next.monthly_fee,
            FieldName::FirstPayment => &mut next.first_payment,
            FieldName::ReceiveTime => &mut next.receive_time,
            FieldName::Platform => &mut next.platform,
            FieldName::InfoLink => &mut next.info_link,
        };
        *slot = value.into();
        next
    }

    /// Field/value pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
