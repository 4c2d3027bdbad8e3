//! Reusable UI components for the portal frontend

mod alert;
mod button;
mod feature_card;
mod footer;
mod input;
mod nav;

pub use alert::{ErrorAlert, Toast, ToastStack, Toasts};
pub use button::Button;
pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use input::{EmailInput, FieldInput, PasswordInput, TextInput};
pub use nav::Nav;
