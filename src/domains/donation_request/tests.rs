use chrono::NaiveDate;
use crate::auth::AuthContext;
use crate::domains::region::{Region, RegionIndex, SubRegion};
use crate::errors::{DomainError, ServiceError, ValidationError};
use crate::types::{UserRole, UserStatus};
use crate::validation::Validate;
use super::*;

fn index() -> RegionIndex {
    RegionIndex::build(
        vec![Region::new(1, "Dhaka"), Region::new(2, "Chittagong")],
        vec![SubRegion::new(10, "Mirpur", 1), SubRegion::new(11, "Panchlaish", 2)],
    )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 17).unwrap()
}

fn actor(email: &str, role: UserRole) -> AuthContext {
    AuthContext::new("u-1", email, "Test User", role, UserStatus::Active).unwrap()
}

fn new_request() -> NewDonationRequest {
    NewDonationRequest {
        requester_name: "Rahim Uddin".to_string(),
        requester_email: "rahim@example.com".to_string(),
        recipient_name: "Ayesha".to_string(),
        recipient_district: "Dhaka".to_string(),
        recipient_upazila: "Mirpur".to_string(),
        hospital_name: "Dhaka Medical College Hospital".to_string(),
        full_address: "Zahir Raihan Rd, Dhaka 1000".to_string(),
        blood_group: BloodGroup::OPositive,
        donation_date: "2025-07-20".to_string(),
        donation_time: "10:30".to_string(),
        request_message: Some("Surgery scheduled".to_string()),
    }
}

#[test]
fn test_blood_group_strings() {
    for group in BloodGroup::all() {
        assert_eq!(BloodGroup::from_str(group.as_str()), Some(group));
    }
    assert_eq!(BloodGroup::from_str("C+"), None);
    let parsed: BloodGroup = serde_json::from_str("\"AB-\"").unwrap();
    assert_eq!(parsed, BloodGroup::AbNegative);
}

#[test]
fn test_status_transitions() {
    use DonationStatus::*;
    assert!(Pending.can_transition_to(InProgress));
    assert!(Pending.can_transition_to(Canceled));
    assert!(InProgress.can_transition_to(Done));
    assert!(InProgress.can_transition_to(Canceled));
    assert!(!Pending.can_transition_to(Done));
    assert!(!Done.can_transition_to(Pending));
    assert!(!Canceled.can_transition_to(InProgress));
    assert!(Done.is_terminal() && Canceled.is_terminal());

    assert_eq!(DonationStatus::from_str("inprogress"), Some(InProgress));
    assert_eq!(serde_json::to_string(&InProgress).unwrap(), "\"inprogress\"");
}

#[test]
fn test_valid_request_passes() {
    let request = new_request();
    assert!(request.validate().is_ok());
    assert!(request.validate_for_submission(&index(), today()).is_ok());
}

#[test]
fn test_field_rules() {
    let mut request = new_request();
    request.requester_email = "rahim@".to_string();
    assert!(request.validate().is_err());

    let mut request = new_request();
    request.hospital_name = "   ".to_string();
    assert!(request.validate().is_err());

    let mut request = new_request();
    request.donation_time = "25:00".to_string();
    assert!(request.validate().is_err());

    let mut request = new_request();
    request.donation_date = "20/07/2025".to_string();
    assert!(request.validate().is_err());
}

#[test]
fn test_location_must_be_consistent() {
    let mut request = new_request();
    request.recipient_upazila = "Panchlaish".to_string();
    assert!(matches!(
        request.validate_location(&index()),
        Err(DomainError::Validation(ValidationError::Relationship(_)))
    ));

    let mut request = new_request();
    request.recipient_district = "Atlantis".to_string();
    assert!(request.validate_location(&index()).is_err());
}

#[test]
fn test_past_date_rejected() {
    let mut request = new_request();
    request.donation_date = "2025-07-16".to_string();
    assert!(request.validate_for_submission(&index(), today()).is_err());
}

#[test]
fn test_submission_requires_matching_donor() {
    let request = new_request();
    let owner = actor("rahim@example.com", UserRole::Donor);
    assert!(request.authorize_submission(&owner, &index(), today()).is_ok());

    let someone_else = actor("karim@example.com", UserRole::Donor);
    assert!(matches!(
        request.authorize_submission(&someone_else, &index(), today()),
        Err(ServiceError::PermissionDenied(_))
    ));

    let volunteer = actor("rahim@example.com", UserRole::Volunteer);
    assert!(request.authorize_submission(&volunteer, &index(), today()).is_err());

    let blocked = AuthContext::new("u-2", "rahim@example.com", "Rahim", UserRole::Donor, UserStatus::Blocked).unwrap();
    assert!(matches!(
        request.authorize_submission(&blocked, &index(), today()),
        Err(ServiceError::AccountBlocked(_))
    ));
}

#[test]
fn test_donor_takes_request_then_requester_completes() {
    let mut request = DonationRequest::from_new("r-1", new_request());
    let donor = actor("karim@example.com", UserRole::Donor);
    let owner = actor("rahim@example.com", UserRole::Donor);

    request.transition(DonationStatus::InProgress, &donor).unwrap();
    assert_eq!(request.donation_status, DonationStatus::InProgress);
    assert_eq!(request.donor_email.as_deref(), Some("karim@example.com"));
    assert_eq!(request.donor_name.as_deref(), Some("Test User"));

    // A third donor cannot close someone else's request
    let stranger = actor("salma@example.com", UserRole::Donor);
    assert!(request.transition(DonationStatus::Done, &stranger).is_err());

    request.transition(DonationStatus::Done, &owner).unwrap();
    assert_eq!(request.donation_status, DonationStatus::Done);

    assert!(matches!(
        request.transition(DonationStatus::Canceled, &owner),
        Err(ServiceError::Domain(DomainError::InvalidTransition { .. }))
    ));
}

#[test]
fn test_requester_cannot_donate_to_own_request() {
    let mut request = DonationRequest::from_new("r-2", new_request());
    let owner = actor("rahim@example.com", UserRole::Donor);
    assert!(request.transition(DonationStatus::InProgress, &owner).is_err());
    assert_eq!(request.donation_status, DonationStatus::Pending);
}

#[test]
fn test_volunteer_can_cancel_in_progress() {
    let mut request = DonationRequest::from_new("r-3", new_request());
    request.transition(DonationStatus::InProgress, &actor("karim@example.com", UserRole::Donor)).unwrap();
    let volunteer = actor("vol@example.com", UserRole::Volunteer);
    request.transition(DonationStatus::Canceled, &volunteer).unwrap();
    assert_eq!(request.donation_status, DonationStatus::Canceled);
}

#[test]
fn test_edit_and_delete_rules() {
    let mut request = DonationRequest::from_new("r-4", new_request());
    let owner = actor("rahim@example.com", UserRole::Donor);
    let admin = actor("admin@example.com", UserRole::Admin);
    let volunteer = actor("vol@example.com", UserRole::Volunteer);

    assert!(request.authorize_edit(&owner).is_ok());
    assert!(request.authorize_edit(&admin).is_ok());
    assert!(request.authorize_edit(&volunteer).is_err());

    assert!(request.authorize_delete(&owner).is_ok());
    assert!(request.authorize_delete(&admin).is_ok());
    assert!(request.authorize_delete(&volunteer).is_err());

    request.transition(DonationStatus::InProgress, &actor("karim@example.com", UserRole::Donor)).unwrap();
    assert!(request.authorize_edit(&owner).is_err());
}

#[test]
fn test_backend_json_shape() {
    let json = r#"{
        "_id": "66a0f1",
        "requesterName": "Rahim Uddin",
        "requesterEmail": "rahim@example.com",
        "recipientName": "Ayesha",
        "recipientDistrict": "Dhaka",
        "recipientUpazila": "Mirpur",
        "hospitalName": "DMCH",
        "fullAddress": "Dhaka",
        "bloodGroup": "O+",
        "donationDate": "2025-07-20",
        "donationTime": "10:30",
        "donationStatus": "inprogress",
        "donorName": "Karim",
        "donorEmail": "karim@example.com"
    }"#;
    let request: DonationRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.id, "66a0f1");
    assert_eq!(request.blood_group, BloodGroup::OPositive);
    assert_eq!(request.donation_status, DonationStatus::InProgress);
    assert_eq!(request.request_message, None);

    let missing_status = json.replace(r#""donationStatus": "inprogress","#, "");
    let request: DonationRequest = serde_json::from_str(&missing_status).unwrap();
    assert_eq!(request.donation_status, DonationStatus::Pending);
}
