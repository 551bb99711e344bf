//! Route components and the route table. Every page wraps its content in
//! [`crate::components::layout::AppShell`] and, where required, a
//! [`crate::features::auth::RequireRole`] guard.

mod consent;
mod dashboard;
mod doctor_notes;
mod home;
mod login;
mod messages;
mod not_found;
mod notes;
pub mod paths;
mod patient_records;
mod reminders;
mod symptoms;

pub(crate) use consent::ConsentPage;
pub(crate) use dashboard::{
    DashboardPage, DoctorDashboardPage, InstitutionDashboardPage, PatientDashboardPage,
};
pub(crate) use doctor_notes::DoctorNotesPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use messages::MessagesPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use notes::NotesPage;
pub(crate) use patient_records::PatientRecordsPage;
pub(crate) use reminders::RemindersPage;
pub(crate) use symptoms::SymptomsPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/dashboard/patient") view=PatientDashboardPage />
            <Route path=path!("/dashboard/doctor") view=DoctorDashboardPage />
            <Route path=path!("/dashboard/institution") view=InstitutionDashboardPage />
            <Route path=path!("/notes") view=NotesPage />
            <Route path=path!("/reminders") view=RemindersPage />
            <Route path=path!("/consent") view=ConsentPage />
            <Route path=path!("/messages") view=MessagesPage />
            <Route path=path!("/symptoms") view=SymptomsPage />
            <Route path=path!("/doctor-notes") view=DoctorNotesPage />
            <Route path=path!("/patient-records") view=PatientRecordsPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
