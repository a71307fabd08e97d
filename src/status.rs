use bitflags::bitflags;

use crate::color::Color;

/// A user's presence status.
///
/// `Offline` doubles as the fallback for anything that cannot be parsed, so
/// every conversion in this module is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    Online,
    Idle,
    Dnd,
    #[default]
    Offline,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Online, Status::Idle, Status::Dnd, Status::Offline];

    /// Map a numeric index (demo keyboard keys `1`..`4` map to `0`..`3`) to a
    /// status. Out-of-range indices degrade to `Offline`.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Status::Online,
            1 => Status::Idle,
            2 => Status::Dnd,
            _ => Status::Offline,
        }
    }

    /// Parse a status name. Unknown strings degrade to `Offline`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "online" => Status::Online,
            "idle" => Status::Idle,
            "dnd" => Status::Dnd,
            _ => Status::Offline,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Online => "online",
            Status::Idle => "idle",
            Status::Dnd => "dnd",
            Status::Offline => "offline",
        }
    }

    /// Badge fill for this status. Total: every status has a color.
    pub fn color(self) -> Color {
        match self {
            Status::Online => Color::STATUS_GREEN,
            Status::Idle => Color::STATUS_YELLOW,
            Status::Dnd => Color::STATUS_RED,
            Status::Offline => Color::STATUS_GREY,
        }
    }
}

/// Badge fill for an optional status; `None` renders like `Offline`.
pub fn status_color(status: Option<Status>) -> Color {
    status.unwrap_or_default().color()
}

bitflags! {
    /// Display-mode modifiers, orthogonal to [`Status`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatusFlags: u8 {
        /// The user is on a mobile client.
        const MOBILE = 1 << 0;
        /// The user is typing; takes priority over everything else.
        const TYPING = 1 << 1;
    }
}

impl StatusFlags {
    pub fn from_parts(mobile: bool, typing: bool) -> Self {
        let mut flags = StatusFlags::empty();
        flags.set(StatusFlags::MOBILE, mobile);
        flags.set(StatusFlags::TYPING, typing);
        flags
    }
}
