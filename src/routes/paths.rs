//! Route path constants shared by pages, guards, and navigation.

use crate::features::auth::types::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";
pub const DASHBOARD_PATIENT: &str = "/dashboard/patient";
pub const DASHBOARD_DOCTOR: &str = "/dashboard/doctor";
pub const DASHBOARD_INSTITUTION: &str = "/dashboard/institution";
pub const NOTES: &str = "/notes";
pub const REMINDERS: &str = "/reminders";
pub const CONSENT: &str = "/consent";
pub const MESSAGES: &str = "/messages";
pub const SYMPTOMS: &str = "/symptoms";
pub const DOCTOR_NOTES: &str = "/doctor-notes";
pub const PATIENT_RECORDS: &str = "/patient-records";

/// Dashboard page for a given role.
pub fn dashboard_for(role: Role) -> &'static str {
    match role {
        Role::Patient => DASHBOARD_PATIENT,
        Role::Doctor => DASHBOARD_DOCTOR,
        Role::Institution => DASHBOARD_INSTITUTION,
    }
}

#[cfg(test)]
mod tests {
    use super::dashboard_for;
    use crate::features::auth::types::Role;

    #[test]
    fn every_role_has_a_dashboard() {
        for role in Role::ALL {
            let path = dashboard_for(role);
            assert!(path.starts_with("/dashboard/"));
            assert!(path.ends_with(role.wire_name()));
        }
    }
}
