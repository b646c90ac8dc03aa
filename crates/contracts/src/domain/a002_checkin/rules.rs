use crate::shared::validation::{FieldRule, Pattern};

/// Field rules for the guest check-in form, in display order
pub const CHECKIN_RULES: &[FieldRule] = &[
    FieldRule::new("full_name", "Full Name").required(),
    FieldRule::new("address", "Address").required(),
    FieldRule::new("area", "Area").required(),
    FieldRule::new("pincode", "Pincode")
        .required()
        .pattern(Pattern::SixDigits, "Pincode must be exactly 6 digits"),
    FieldRule::new("aadhar_number", "Aadhar Number")
        .required()
        .pattern(
            Pattern::TwelveDigits,
            "Aadhar number must be exactly 12 digits",
        )
        .length(12),
    FieldRule::new("mobile_number", "Mobile Number")
        .required()
        .pattern(Pattern::TenDigits, "Mobile number must be exactly 10 digits")
        .length(10),
    FieldRule::new("alternate_mobile", "Alternate Mobile").pattern(
        Pattern::TenDigits,
        "Alternate mobile number must be exactly 10 digits",
    ),
    FieldRule::new("email", "Email Address")
        .required()
        .pattern(Pattern::Email, "Please enter a valid email address"),
    FieldRule::new("age", "Age").min(1.0).max(120.0),
    FieldRule::new("children_count", "Children Count")
        .min(0.0)
        .max(20.0),
    FieldRule::new("male_count", "Male Count").min(0.0).max(50.0),
    FieldRule::new("female_count", "Female Count")
        .min(0.0)
        .max(50.0),
    FieldRule::new("amount_paid_today", "Amount Paid Today")
        .required()
        .min(0.0),
    FieldRule::new("remaining_amount", "Remaining Amount")
        .required()
        .min(0.0),
    FieldRule::new("room_number", "Room Number").required(),
];

/// Max digits for inputs that only accept numbers
pub fn numeric_mask_len(field: &str) -> Option<usize> {
    match field {
        "aadhar_number" => Some(12),
        "mobile_number" | "alternate_mobile" => Some(10),
        "pincode" => Some(6),
        _ => None,
    }
}

/// Drop every non-digit and cut to `max_len` digits
pub fn mask_digits(value: &str, max_len: usize) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{find_rule, validate_value};

    fn check(field: &str, value: &str) -> Result<(), String> {
        let rule = find_rule(CHECKIN_RULES, field).expect("rule exists");
        validate_value(rule, value).map_err(|e| e.to_string())
    }

    #[test]
    fn test_aadhar() {
        assert_eq!(
            check("aadhar_number", "12345678901"),
            Err("Aadhar number must be exactly 12 digits".to_string())
        );
        assert_eq!(
            check("aadhar_number", ""),
            Err("Aadhar Number is required".to_string())
        );
        assert_eq!(check("aadhar_number", "123456789012"), Ok(()));
    }

    #[test]
    fn test_mobile_and_alternate() {
        assert_eq!(
            check("mobile_number", "98765"),
            Err("Mobile number must be exactly 10 digits".to_string())
        );
        assert_eq!(check("mobile_number", "9876543210"), Ok(()));
        assert_eq!(check("alternate_mobile", ""), Ok(()));
        assert_eq!(
            check("alternate_mobile", "12"),
            Err("Alternate mobile number must be exactly 10 digits".to_string())
        );
    }

    #[test]
    fn test_email() {
        assert_eq!(
            check("email", "nope"),
            Err("Please enter a valid email address".to_string())
        );
        assert_eq!(check("email", "guest@hotel.in"), Ok(()));
    }

    #[test]
    fn test_amounts_and_counts() {
        assert_eq!(
            check("amount_paid_today", "-5"),
            Err("Amount Paid Today must be at least 0".to_string())
        );
        assert_eq!(check("remaining_amount", "0"), Ok(()));
        assert_eq!(
            check("children_count", "21"),
            Err("Children Count must not exceed 20".to_string())
        );
        assert_eq!(
            check("age", "0"),
            Err("Age must be at least 1".to_string())
        );
        assert_eq!(check("male_count", ""), Ok(()));
    }

    #[test]
    fn test_rule_names_are_unique() {
        for (i, rule) in CHECKIN_RULES.iter().enumerate() {
            assert!(
                CHECKIN_RULES[i + 1..].iter().all(|r| r.name != rule.name),
                "duplicate rule for {}",
                rule.name
            );
        }
    }

    #[test]
    fn test_mask_digits() {
        assert_eq!(mask_digits("98a76-54 3210", 10), "9876543210");
        assert_eq!(mask_digits("1234567890123456", 12), "123456789012");
        assert_eq!(mask_digits("abc", 6), "");
    }

    #[test]
    fn test_numeric_mask_len() {
        assert_eq!(numeric_mask_len("aadhar_number"), Some(12));
        assert_eq!(numeric_mask_len("mobile_number"), Some(10));
        assert_eq!(numeric_mask_len("pincode"), Some(6));
        assert_eq!(numeric_mask_len("alternate_mobile"), Some(10));
        assert_eq!(numeric_mask_len("full_name"), None);
    }

    #[test]
    fn test_masked_value_of_full_length_passes_its_rule() {
        for name in ["pincode", "aadhar_number", "mobile_number", "alternate_mobile"] {
            let len = numeric_mask_len(name).expect("masked field");
            let masked = mask_digits(&"9".repeat(len + 3), len);
            assert_eq!(check(name, &masked), Ok(()), "{}", name);
        }
    }
}
