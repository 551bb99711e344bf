//! View admission policy. Kept as a pure predicate, separate from the
//! redirect side effect in `guards`, so the allow/deny matrix is testable
//! without a browser.

use crate::features::auth::{session::Session, types::Role};

pub const PATIENT_ONLY: &[Role] = &[Role::Patient];
pub const DOCTOR_ONLY: &[Role] = &[Role::Doctor];
pub const INSTITUTION_ONLY: &[Role] = &[Role::Institution];
pub const PATIENT_OR_DOCTOR: &[Role] = &[Role::Patient, Role::Doctor];

/// Whether a session may view a page restricted to `allowed` roles.
///
/// No session never qualifies. An empty `allowed` slice admits any
/// authenticated role; otherwise the session's role must be listed.
pub fn can_view(session: Option<&Session>, allowed: &[Role]) -> bool {
    match session {
        None => false,
        Some(session) => allowed.is_empty() || allowed.contains(&session.role),
    }
}

#[cfg(test)]
mod tests {
    use super::can_view;
    use crate::features::auth::{session::Session, types::Role};

    fn session(role: Role) -> Session {
        Session {
            token: "tok-123".to_string(),
            role,
        }
    }

    #[test]
    fn absent_session_is_never_admitted() {
        assert!(!can_view(None, &[]));
        assert!(!can_view(None, &[Role::Patient]));
        assert!(!can_view(None, &Role::ALL));
    }

    #[test]
    fn empty_allow_list_admits_any_authenticated_role() {
        for role in Role::ALL {
            assert!(can_view(Some(&session(role)), &[]));
        }
    }

    #[test]
    fn listed_role_is_admitted() {
        let doctor = session(Role::Doctor);
        assert!(can_view(Some(&doctor), &[Role::Doctor]));
        assert!(can_view(Some(&doctor), &[Role::Patient, Role::Doctor]));
    }

    #[test]
    fn unlisted_role_is_denied() {
        let patient = session(Role::Patient);
        assert!(!can_view(Some(&patient), &[Role::Doctor]));
        assert!(!can_view(Some(&patient), &[Role::Doctor, Role::Institution]));
    }

    #[test]
    fn shared_allow_lists_admit_exactly_their_roles() {
        let patient = session(Role::Patient);
        let doctor = session(Role::Doctor);
        let institution = session(Role::Institution);

        assert!(can_view(Some(&patient), super::PATIENT_ONLY));
        assert!(!can_view(Some(&doctor), super::PATIENT_ONLY));

        assert!(can_view(Some(&doctor), super::PATIENT_OR_DOCTOR));
        assert!(can_view(Some(&patient), super::PATIENT_OR_DOCTOR));
        assert!(!can_view(Some(&institution), super::PATIENT_OR_DOCTOR));
    }
}
