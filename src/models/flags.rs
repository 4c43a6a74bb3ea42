use serde::{Deserialize, Serialize};

/// Per-leg verification requirements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegValidations {
    pub is_otp_required: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validations {
    pub pickup: LegValidations,
    pub drop: LegValidations,
}

impl Validations {
    pub fn new(pickup_otp_required: bool, drop_otp_required: bool) -> Self {
        Self {
            pickup: LegValidations {
                is_otp_required: pickup_otp_required,
            },
            drop: LegValidations {
                is_otp_required: drop_otp_required,
            },
        }
    }
}

/// Whether the remote service sends SMS notifications to each leg's contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communications {
    pub send_sms_to_pickup_person: bool,
    pub send_sms_to_drop_person: bool,
}

impl Default for Communications {
    fn default() -> Self {
        Self {
            send_sms_to_pickup_person: true,
            send_sms_to_drop_person: true,
        }
    }
}
