//! Stateful presentation components: they own the animation driver state and
//! expose a set-inputs / advance / read-frame cycle to the host.

mod avatar;
mod dots;
mod status;

pub use avatar::{Avatar, Baseline};
pub use dots::{Dot, DotsFrame, DotsPhase, TypingDots, DOT_CYCLE_MS};
pub use status::StatusBadge;
