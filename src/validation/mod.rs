mod enums;
mod helper_constants;
mod regex_util;
mod validation_result;
mod validator;

use std::sync::LazyLock;

pub use enums::LineType;
pub(crate) use helper_constants::PLUS_SIGN;
pub use validation_result::PhoneValidationResult;
pub use validator::PhoneValidator;

pub static PHONE_VALIDATOR: LazyLock<PhoneValidator> = LazyLock::new(|| {
    PhoneValidator::new()
});

/// Validates `raw` with the shared [`PHONE_VALIDATOR`].
pub fn validate(raw: &str) -> PhoneValidationResult {
    PHONE_VALIDATOR.validate(raw)
}
