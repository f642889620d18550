//! Session domain module.
//!
//! This module defines the upload/classify/history state machine types.

pub mod notification;
pub mod state;
pub mod state_machine;

pub use notification::{Notification, NotificationVariant};
pub use state::{SessionPhase, SessionState};
pub use state_machine::{SessionAction, SessionEvent, SessionStateMachine};
