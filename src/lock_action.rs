use std::str::FromStr;
use thiserror::Error;

/// Normalized action token accepted by
/// [`ScrollLock::call`](crate::ScrollLock::call).
///
/// String forms parse via [`FromStr`]: `"toggle"`, `"lock"`/`"on"`/`"1"`,
/// and `"unlock"`/`"off"`/`"0"`. Boolean forms convert via `From<bool>`,
/// where the boolean is the desired scroll-enabled state (`true` means
/// scrolling should be enabled, so it maps to unlock).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    /// Lock when unlocked, unlock when locked
    Toggle,
    /// Take one hold on the lock
    Lock,
    /// Release one hold on the lock
    Unlock,
}

/// Error returned when a string token is not one of the recognized action
/// forms. Unrecognized input is rejected rather than treated as a toggle so
/// caller typos don't silently flip the lock.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized scroll lock action: {0:?}")]
pub struct UnknownActionError(String);

impl FromStr for LockAction {
    type Err = UnknownActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => Ok(LockAction::Toggle),
            "lock" | "on" | "1" => Ok(LockAction::Lock),
            "unlock" | "off" | "0" => Ok(LockAction::Unlock),
            other => Err(UnknownActionError(other.to_string())),
        }
    }
}

impl From<bool> for LockAction {
    fn from(scroll_enabled: bool) -> Self {
        if scroll_enabled {
            LockAction::Unlock
        } else {
            LockAction::Lock
        }
    }
}
