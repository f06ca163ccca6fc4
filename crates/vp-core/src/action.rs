//! The per-drone controller action set.
//!
//! All variants are always compiled in.  `Reserved2` and `Reserved3` are part
//! of the declared action space but currently have no transition; the engine
//! treats them as no-ops so the action handling stays a total function.
//! They are kept for future extension (abort / diversion).

/// One discrete action, issued by the controller for one drone each tick.
///
/// The numeric codes are part of the external interface (controllers trained
/// against the action space address actions by index) and must not change.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Action {
    /// Zero velocity; hold position this tick (default state).
    #[default]
    Hover = 0,
    /// Fly at cruise speed toward the current target waypoint.
    Continue = 1,
    /// Declared but unmapped — no effect.
    Reserved2 = 2,
    /// Declared but unmapped — no effect.
    Reserved3 = 3,
    /// Grant landing clearance to a drone holding at `AwaitingClearance`.
    GrantClearance = 4,
}

impl Action {
    /// Size of the discrete action space.
    pub const COUNT: usize = 5;

    /// Decode an action index; `None` for anything outside the declared set.
    pub fn from_index(index: usize) -> Option<Action> {
        match index {
            0 => Some(Action::Hover),
            1 => Some(Action::Continue),
            2 => Some(Action::Reserved2),
            3 => Some(Action::Reserved3),
            4 => Some(Action::GrantClearance),
            _ => None,
        }
    }

    /// The action's numeric code.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the declared-but-unmapped variants.
    #[inline]
    pub fn is_reserved(self) -> bool {
        matches!(self, Action::Reserved2 | Action::Reserved3)
    }

    /// Human-readable label, useful for CSV column values and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Hover          => "hover",
            Action::Continue       => "continue",
            Action::Reserved2      => "reserved2",
            Action::Reserved3      => "reserved3",
            Action::GrantClearance => "grant_clearance",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
