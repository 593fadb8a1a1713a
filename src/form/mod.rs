//! Order form model: fields, formatting, validation, and the owning state.

pub mod data;
pub mod field;
pub mod formatter;
pub mod state;
pub mod validation;

pub use data::OrderFormData;
pub use field::FieldName;
pub use formatter::{format, CURRENCY_GLYPH};
pub use state::FormState;
pub use validation::{
    EmailPolicy, FieldValidationError, ValidationErrors, ValidationPolicy, Validator,
};
