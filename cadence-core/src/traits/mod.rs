//! Side-effect collaborator traits
//!
//! These traits define the interface between the session logic and the
//! host's audio and view implementations. Failures reported through them
//! are never fatal to the session.

pub mod cue;
pub mod view;

pub use cue::{CueError, CuePlayer, SilentCue};
pub use view::{FixedView, ViewError, ViewMode};
