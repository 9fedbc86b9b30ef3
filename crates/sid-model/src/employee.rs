//! Employee onboarding drafts.

use serde::{Deserialize, Serialize};

/// New-hire details captured by the onboarding screen.
///
/// Dates stay as the host-formatted strings the date pickers produced;
/// parsing and locale handling belong to the host application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
    #[serde(default)]
    pub employee_no: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_no: String,
    #[serde(default)]
    pub mobile_no: String,
    pub department_id: Option<u32>,
    pub designation_id: Option<u32>,
    #[serde(default)]
    pub date_of_joining: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub pan: String,
    #[serde(default)]
    pub aadhar: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub state: String,
}
