//! Page components for the portal frontend

mod dashboard;
mod landing;
mod login;
mod not_found;
mod register;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use register::RegistrationForm;
