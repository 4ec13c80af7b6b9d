//! Notification events emitted after cart mutations.
//!
//! The cart never renders anything; it hands each event to an optional
//! caller-installed sink and moves on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A mutation completed that the user asked for by name.
    Success,
    /// A routine state change.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A user-facing event describing the outcome of a cart mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Event severity.
    pub severity: Severity,
    /// Human-readable message for the display collaborator.
    pub message: String,
}

impl Notification {
    /// Build a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// Build an informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

/// Callback receiving each notification as it is emitted.
pub type NotificationSink = Box<dyn FnMut(Notification)>;
