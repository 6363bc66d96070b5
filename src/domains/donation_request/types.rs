use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::auth::AuthContext;
use crate::domains::region::RegionIndex;
use crate::errors::{DomainError, DomainResult, ServiceError, ServiceResult, ValidationError};
use crate::types::Permission;
use crate::validation::{common, Validate, ValidationBuilder};

/// ABO/Rh blood group as shown on forms and stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|group| group.as_str() == s.trim())
    }

    pub fn all() -> [BloodGroup; 8] {
        [
            BloodGroup::APositive, BloodGroup::ANegative,
            BloodGroup::BPositive, BloodGroup::BNegative,
            BloodGroup::AbPositive, BloodGroup::AbNegative,
            BloodGroup::OPositive, BloodGroup::ONegative,
        ]
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Donation request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    InProgress,
    Done,
    Canceled,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::InProgress => "inprogress",
            DonationStatus::Done => "done",
            DonationStatus::Canceled => "canceled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(DonationStatus::Pending),
            "inprogress" => Some(DonationStatus::InProgress),
            "done" => Some(DonationStatus::Done),
            "canceled" => Some(DonationStatus::Canceled),
            _ => None,
        }
    }

    pub fn can_transition_to(&self, next: DonationStatus) -> bool {
        matches!(
            (self, next),
            (DonationStatus::Pending, DonationStatus::InProgress)
                | (DonationStatus::Pending, DonationStatus::Canceled)
                | (DonationStatus::InProgress, DonationStatus::Done)
                | (DonationStatus::InProgress, DonationStatus::Canceled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DonationStatus::Done | DonationStatus::Canceled)
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// NewDonationRequest DTO - body of the create request call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonationRequest {
    pub requester_name: String,
    pub requester_email: String,
    pub recipient_name: String,
    pub recipient_district: String,
    pub recipient_upazila: String,
    pub hospital_name: String,
    pub full_address: String,
    pub blood_group: BloodGroup,
    pub donation_date: String, // YYYY-MM-DD
    pub donation_time: String, // HH:MM
    #[serde(default)]
    pub request_message: Option<String>,
}

impl Validate for NewDonationRequest {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("requester_name", Some(self.requester_name.clone()))
            .required()
            .not_blank()
            .max_length(100)
            .validate()?;

        ValidationBuilder::new("requester_email", Some(self.requester_email.clone()))
            .required()
            .email()
            .validate()?;

        ValidationBuilder::new("recipient_name", Some(self.recipient_name.clone()))
            .required()
            .not_blank()
            .min_length(2)
            .max_length(100)
            .validate()?;

        ValidationBuilder::new("recipient_district", Some(self.recipient_district.clone()))
            .required()
            .validate()?;

        ValidationBuilder::new("recipient_upazila", Some(self.recipient_upazila.clone()))
            .required()
            .validate()?;

        ValidationBuilder::new("hospital_name", Some(self.hospital_name.clone()))
            .required()
            .not_blank()
            .max_length(150)
            .validate()?;

        ValidationBuilder::new("full_address", Some(self.full_address.clone()))
            .required()
            .not_blank()
            .max_length(250)
            .validate()?;

        common::validate_date_format(&self.donation_date, "donation_date")?;
        common::validate_time_format(&self.donation_time, "donation_time")?;

        if let Some(message) = &self.request_message {
            ValidationBuilder::new("request_message", Some(message.clone()))
                .max_length(500)
                .validate()?;
        }

        Ok(())
    }
}

impl NewDonationRequest {
    /// District must exist and the upazila must belong to it
    pub fn validate_location(&self, index: &RegionIndex) -> DomainResult<()> {
        if index.find_region_by_name(&self.recipient_district).is_none() {
            return Err(DomainError::Validation(ValidationError::relationship(&format!(
                "unknown district '{}'",
                self.recipient_district
            ))));
        }
        if index
            .find_sub_region(&self.recipient_district, &self.recipient_upazila)
            .is_none()
        {
            return Err(DomainError::Validation(ValidationError::relationship(&format!(
                "upazila '{}' is not in district '{}'",
                self.recipient_upazila, self.recipient_district
            ))));
        }
        Ok(())
    }

    /// Full pre-submit check: field rules, location, no past dates
    pub fn validate_for_submission(&self, index: &RegionIndex, today: NaiveDate) -> DomainResult<()> {
        self.validate()?;
        self.validate_location(index)?;

        let donation_date = common::parse_date(&self.donation_date, "donation_date")?;
        ValidationBuilder::new("donation_date", Some(donation_date))
            .not_in_past(today)
            .validate()
    }

    /// Checks the actor may file this request, then validates it
    pub fn authorize_submission(
        &self,
        actor: &AuthContext,
        index: &RegionIndex,
        today: NaiveDate,
    ) -> ServiceResult<()> {
        actor.authorize(Permission::CreateDonationRequest)?;
        if actor.email.as_str() != self.requester_email {
            return Err(ServiceError::PermissionDenied(
                "requests can only be filed under the signed-in account".to_string(),
            ));
        }
        self.validate_for_submission(index, today)?;
        Ok(())
    }
}

/// DonationRequest - a request as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    #[serde(alias = "_id")]
    pub id: String,
    pub requester_name: String,
    pub requester_email: String,
    pub recipient_name: String,
    pub recipient_district: String,
    pub recipient_upazila: String,
    pub hospital_name: String,
    pub full_address: String,
    pub blood_group: BloodGroup,
    pub donation_date: String,
    pub donation_time: String,
    #[serde(default)]
    pub request_message: Option<String>,
    #[serde(default)]
    pub donation_status: DonationStatus,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub donor_email: Option<String>,
}

impl DonationRequest {
    pub fn from_new(id: &str, new_request: NewDonationRequest) -> Self {
        Self {
            id: id.to_string(),
            requester_name: new_request.requester_name,
            requester_email: new_request.requester_email,
            recipient_name: new_request.recipient_name,
            recipient_district: new_request.recipient_district,
            recipient_upazila: new_request.recipient_upazila,
            hospital_name: new_request.hospital_name,
            full_address: new_request.full_address,
            blood_group: new_request.blood_group,
            donation_date: new_request.donation_date,
            donation_time: new_request.donation_time,
            request_message: new_request.request_message,
            donation_status: DonationStatus::Pending,
            donor_name: None,
            donor_email: None,
        }
    }

    pub fn is_owned_by(&self, actor: &AuthContext) -> bool {
        self.requester_email == actor.email.as_str()
    }

    /// Owners edit their own pending requests; admins edit any
    pub fn authorize_edit(&self, actor: &AuthContext) -> ServiceResult<()> {
        actor.authorize_owner_or_admin(&self.requester_email)?;
        if self.is_owned_by(actor) {
            actor.authorize(Permission::EditOwnDonationRequest)?;
        }
        if self.donation_status != DonationStatus::Pending {
            return Err(ServiceError::PermissionDenied(format!(
                "request {} is {} and can no longer be edited",
                self.id, self.donation_status
            )));
        }
        Ok(())
    }

    pub fn authorize_delete(&self, actor: &AuthContext) -> ServiceResult<()> {
        if self.is_owned_by(actor) {
            actor.authorize(Permission::EditOwnDonationRequest)
        } else {
            actor.authorize(Permission::DeleteDonationRequest)
        }
    }

    /// Move the request to `next`, checking both the lifecycle and who is
    /// asking. Taking a pending request records the actor as the donor.
    pub fn transition(&mut self, next: DonationStatus, actor: &AuthContext) -> ServiceResult<()> {
        if !self.donation_status.can_transition_to(next) {
            return Err(ServiceError::Domain(DomainError::InvalidTransition {
                from: self.donation_status.to_string(),
                to: next.to_string(),
            }));
        }

        match next {
            DonationStatus::InProgress => {
                actor.authorize(Permission::RespondToDonationRequest)?;
                if self.is_owned_by(actor) {
                    return Err(ServiceError::PermissionDenied(
                        "requesters cannot donate to their own request".to_string(),
                    ));
                }
                self.donor_name = Some(actor.display_name.clone());
                self.donor_email = Some(actor.email.as_str().to_string());
            }
            DonationStatus::Done | DonationStatus::Canceled => {
                if !self.is_owned_by(actor) {
                    actor.authorize(Permission::UpdateDonationStatus)?;
                } else {
                    actor.authorize(Permission::EditOwnDonationRequest)?;
                }
            }
            DonationStatus::Pending => {}
        }

        log::info!(
            "Donation request {} moved from {} to {} by {}",
            self.id,
            self.donation_status,
            next,
            actor.user_id
        );
        self.donation_status = next;
        Ok(())
    }
}
