mod alert;
mod badge;
mod button;
mod spinner;

pub use alert::{Alert, AlertKind};
pub use badge::RoleBadge;
pub use button::Button;
pub use spinner::Spinner;
