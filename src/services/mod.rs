//! Submission flows and the collaborators they drive.

mod gate;
mod login;
mod navigation;
mod notifications;
mod outcome;
mod register;
mod scope;
mod session;

pub use gate::{SubmitGate, SubmitPhase, SubmitTicket};
pub use login::{LoginFlow, LOGIN_FALLBACK};
pub use navigation::{Navigator, Route};
pub use notifications::{Notification, NotificationLevel, Notifier, DEFAULT_DISPLAY};
pub use outcome::SubmitOutcome;
pub use register::{
    success_text, RegisterFlow, APPROVAL_NOTICE, REGISTRATION_DEFAULT_SUCCESS,
    REGISTRATION_FALLBACK,
};
pub use scope::{MountScope, Unmounted};
pub use session::{BrowserTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
