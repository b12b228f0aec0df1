//! Status returned by behavior nodes.

use crate::error::StatusError;

/// The result of ticking a behavior node.
///
/// A node reports exactly one of these after every tick. `Ready` is also the
/// state every node returns to on [`reset`](crate::Behavior::reset), and the
/// status a node reports before its first tick.
///
/// Failure is a value, not an error: callers are expected to look at it.
#[must_use = "a behavior status reports the outcome of a tick and should be inspected"]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: the condition was met.
    /// For actions: the action finished its work.
    Success = 0,

    /// The behavior failed.
    ///
    /// For conditions: the condition was not met.
    /// For actions: the action could not be carried out.
    Failure = 1,

    /// The node has not been ticked since construction or the last reset.
    #[default]
    Ready = 2,

    /// The node needs more ticks to reach a terminal outcome.
    Running = 3,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Ready`.
    #[inline]
    pub fn is_ready(self) -> bool {
        matches!(self, Status::Ready)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Swaps `Success` and `Failure`; `Running` and `Ready` pass through.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }

    /// Numeric code of this status, as accepted by [`Status::try_from`].
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Converts a raw status code, normalizing unknown codes to `Failure`.
    #[inline]
    pub fn from_code(code: u8) -> Self {
        Self::try_from(code).unwrap_or(Status::Failure)
    }
}

impl TryFrom<u8> for Status {
    type Error = StatusError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Status::Success),
            1 => Ok(Status::Failure),
            2 => Ok(Status::Ready),
            3 => Ok(Status::Running),
            other => Err(StatusError::UnknownCode(other)),
        }
    }
}
