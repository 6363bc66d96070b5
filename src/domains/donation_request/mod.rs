mod types;

pub use types::{BloodGroup, DonationRequest, DonationStatus, NewDonationRequest};

#[cfg(test)]
mod tests;
