pub mod aggregate;
pub mod rules;

pub use aggregate::CheckinDto;
pub use rules::{mask_digits, numeric_mask_len, CHECKIN_RULES};
