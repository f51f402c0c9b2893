//! Desktop assistant
//!
//! A helper character with a speech bubble that shows a welcome message and
//! then cycles through tips on a timer.

mod bubble;
mod messages;

pub use bubble::{Assistant, BubblePhase};
pub use messages::{Message, TIPS, WELCOME};
