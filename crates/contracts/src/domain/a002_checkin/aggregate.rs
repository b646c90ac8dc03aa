use serde::{Deserialize, Serialize};

/// Raw values of the check-in form as posted to `/checkin`.
///
/// Values stay as entered; numbers are parsed by the validator and the
/// server, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinDto {
    pub full_name: String,
    pub address: String,
    pub area: String,
    pub pincode: String,
    pub aadhar_number: String,
    pub mobile_number: String,
    #[serde(default)]
    pub alternate_mobile: String,
    pub email: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub children_count: String,
    #[serde(default)]
    pub male_count: String,
    #[serde(default)]
    pub female_count: String,
    pub amount_paid_today: String,
    pub remaining_amount: String,
    pub room_number: String,
}

impl CheckinDto {
    /// Current value of a form field by its `name` attribute
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "full_name" => &self.full_name,
            "address" => &self.address,
            "area" => &self.area,
            "pincode" => &self.pincode,
            "aadhar_number" => &self.aadhar_number,
            "mobile_number" => &self.mobile_number,
            "alternate_mobile" => &self.alternate_mobile,
            "email" => &self.email,
            "age" => &self.age,
            "children_count" => &self.children_count,
            "male_count" => &self.male_count,
            "female_count" => &self.female_count,
            "amount_paid_today" => &self.amount_paid_today,
            "remaining_amount" => &self.remaining_amount,
            "room_number" => &self.room_number,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Set a field by name. Returns `false` for unknown names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "full_name" => &mut self.full_name,
            "address" => &mut self.address,
            "area" => &mut self.area,
            "pincode" => &mut self.pincode,
            "aadhar_number" => &mut self.aadhar_number,
            "mobile_number" => &mut self.mobile_number,
            "alternate_mobile" => &mut self.alternate_mobile,
            "email" => &mut self.email,
            "age" => &mut self.age,
            "children_count" => &mut self.children_count,
            "male_count" => &mut self.male_count,
            "female_count" => &mut self.female_count,
            "amount_paid_today" => &mut self.amount_paid_today,
            "remaining_amount" => &mut self.remaining_amount,
            "room_number" => &mut self.room_number,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_checkin::CHECKIN_RULES;

    #[test]
    fn test_every_rule_has_a_field() {
        let dto = CheckinDto::default();
        for rule in CHECKIN_RULES {
            assert!(dto.field(rule.name).is_some(), "no field for {}", rule.name);
        }
    }

    #[test]
    fn test_set_field() {
        let mut dto = CheckinDto::default();
        assert!(dto.set_field("pincode", "249401".to_string()));
        assert_eq!(dto.field("pincode"), Some("249401"));
        assert!(!dto.set_field("nickname", "x".to_string()));
        assert_eq!(dto.field("nickname"), None);
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let json = r#"{
            "full_name": "Asha Rao", "address": "1 Ghat Rd", "area": "Haridwar",
            "pincode": "249401", "aadhar_number": "123456789012",
            "mobile_number": "9876543210", "email": "asha@example.com",
            "amount_paid_today": "500", "remaining_amount": "0", "room_number": "12"
        }"#;
        let dto: CheckinDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.age, "");
        assert_eq!(dto.room_number, "12");
    }
}
