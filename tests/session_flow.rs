//! End-to-end session lifecycle against the in-memory storage backend:
//! role selection on the landing page, login, guard checks, and logout.

use medicheck_web::features::auth::{
    policy,
    session::{MemoryStorage, Session, SessionStorage, SessionStore, TOKEN_KEY},
    types::Role,
};

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new())
}

#[test]
fn fresh_store_is_signed_out() {
    let store = store();

    assert!(store.session().is_none());
    assert!(store.token().is_none());
    assert!(store.role().is_none());
    assert!(store.selected_role().is_none());
}

#[test]
fn doctor_walkthrough_from_landing_to_logout() {
    let store = store();

    // Landing page: the visitor picks a role before signing in.
    store.set_selected_role(Role::Doctor);
    assert_eq!(store.selected_role(), Some(Role::Doctor));
    assert!(
        store.session().is_none(),
        "picking a role must not create a session"
    );

    // Login succeeds and the pair is persisted.
    store.set_session("tok-doc-1", Role::Doctor);
    let session = store.session().expect("login should persist a session");
    assert_eq!(session.token, "tok-doc-1");
    assert_eq!(session.role, Role::Doctor);

    // Guard checks for the pages a doctor can and cannot open.
    let current = Some(&session);
    assert!(policy::can_view(current, &[]), "any signed-in role may pass");
    assert!(policy::can_view(current, policy::DOCTOR_ONLY));
    assert!(policy::can_view(current, policy::PATIENT_OR_DOCTOR));
    assert!(!policy::can_view(current, policy::PATIENT_ONLY));
    assert!(!policy::can_view(current, policy::INSTITUTION_ONLY));

    // Logout clears everything, including the pre-login selection.
    store.clear_session();
    assert!(store.session().is_none());
    assert!(store.selected_role().is_none());

    // Signed-out visitors fail every guard, even the unrestricted one.
    assert!(!policy::can_view(None, &[]));
    assert!(!policy::can_view(None, policy::DOCTOR_ONLY));
}

#[test]
fn torn_storage_reads_as_signed_out() {
    // An orphaned token, as left behind by older clients or manual storage
    // edits, must not produce a session.
    let storage = MemoryStorage::new();
    storage.write(TOKEN_KEY, "tok-orphan");
    let store = SessionStore::new(storage);

    assert_eq!(store.token().as_deref(), Some("tok-orphan"));
    assert!(store.role().is_none());
    assert!(
        store.session().is_none(),
        "a token without a role is not a session"
    );
    assert!(!policy::can_view(store.session().as_ref(), &[]));
}

#[test]
fn relogin_with_another_role_replaces_the_session() {
    let store = store();

    store.set_session("tok-patient", Role::Patient);
    store.set_session("tok-institution", Role::Institution);

    let session = store.session().expect("second login should win");
    assert_eq!(session.token, "tok-institution");
    assert_eq!(session.role, Role::Institution);

    // The guard now answers for the new role only.
    assert!(policy::can_view(Some(&session), policy::INSTITUTION_ONLY));
    assert!(!policy::can_view(Some(&session), policy::PATIENT_OR_DOCTOR));
}

#[test]
fn guard_matrix_covers_every_role() {
    for role in Role::ALL {
        let session = Session {
            token: format!("tok-{}", role.wire_name()),
            role,
        };
        let current = Some(&session);

        assert!(
            policy::can_view(current, &[]),
            "unrestricted pages admit {role:?}"
        );
        assert_eq!(
            policy::can_view(current, policy::PATIENT_ONLY),
            role == Role::Patient
        );
        assert_eq!(
            policy::can_view(current, policy::DOCTOR_ONLY),
            role == Role::Doctor
        );
        assert_eq!(
            policy::can_view(current, policy::INSTITUTION_ONLY),
            role == Role::Institution
        );
        assert_eq!(
            policy::can_view(current, policy::PATIENT_OR_DOCTOR),
            role != Role::Institution
        );
    }
}
