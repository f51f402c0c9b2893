//! Assistant message text

/// Shown once, shortly after start
pub const WELCOME: &str = "Hi! Welcome to the portfolio. To get started, double-click the About \
program or any of the portfolio pages.";

/// Tips cycled through afterwards
pub const TIPS: &[&str] = &[
    "Hi there! I'm here to help you explore this desktop. Click on me for tips!",
    "Double-click any desktop icon to open a program. Try the portfolio folders!",
    "The portfolio pages are organized by category: Photography, 3D Design and 2D Design.",
    "In the portfolio apps, click images to zoom and scroll around.",
    "Drag an icon onto the Recycle Bin to delete it. You can restore it from the bin later.",
    "Each portfolio piece lists its original size, medium and design intentions.",
    "Use the Start menu to reach every program and folder.",
    "Click the X if you want me to stop helping.",
];

/// Which message the bubble holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    Welcome,
    Tip(usize),
}

impl Message {
    /// The message after this one; the welcome leads into the first tip
    pub fn next(self, tip_count: usize) -> Message {
        match self {
            Message::Welcome => Message::Tip(0),
            Message::Tip(i) => Message::Tip((i + 1) % tip_count.max(1)),
        }
    }

    /// Message text
    pub fn text(self) -> &'static str {
        match self {
            Message::Welcome => WELCOME,
            Message::Tip(i) => TIPS.get(i).copied().unwrap_or(""),
        }
    }

    /// Footer label, e.g. `"3 of 8"`
    pub fn label(self) -> String {
        match self {
            Message::Welcome => "Welcome".to_string(),
            Message::Tip(i) => format!("{} of {}", i + 1, TIPS.len()),
        }
    }
}
