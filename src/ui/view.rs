//! What the display shows for each menu position.
//!
//! Pure description only; `display.rs` turns a [`View`] into pixels.

use core::fmt::Write;

use heapless::String;

/// Text shown for the current lock state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockLabel {
    Lock,
    Unlock,
}

impl LockLabel {
    /// The reverse flag flips the label, never the sensed state.
    pub fn from_state(locked: bool, reverse: bool) -> Self {
        if locked ^ reverse {
            LockLabel::Lock
        } else {
            LockLabel::Unlock
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LockLabel::Lock => "LOCK",
            LockLabel::Unlock => "UNLOCK",
        }
    }
}

/// Which node id digit is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitStep {
    Tens,
    Ones,
}

/// Everything the presenter needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Normal operation, or the reverse-flag step when `reverse_setting` is set.
    Lock {
        label: LockLabel,
        reverse_setting: bool,
    },
    /// Node id edit; `node_id` is the working copy and may read 0.
    NodeDigit { step: DigitStep, node_id: u8 },
    /// Final confirm step.
    Confirm { save: bool },
}

impl View {
    /// Small header line, if the frame has one.
    pub fn caption(&self) -> Option<&'static str> {
        match self {
            View::Lock {
                reverse_setting: true,
                ..
            } => Some("REVERSE SETTING"),
            View::Lock { .. } => None,
            View::NodeDigit {
                step: DigitStep::Tens,
                ..
            } => Some("NODE NO 10"),
            View::NodeDigit {
                step: DigitStep::Ones,
                ..
            } => Some("NODE NO 1"),
            View::Confirm { .. } => Some("SAVE?"),
        }
    }

    /// Large centred text.
    pub fn body(&self) -> String<8> {
        let mut text = String::new();
        match self {
            View::Lock { label, .. } => {
                let _ = text.push_str(label.as_str());
            }
            View::NodeDigit { node_id, .. } => {
                text = two_digits(*node_id);
            }
            View::Confirm { save } => {
                let _ = text.push_str(if *save { "YES" } else { "NO" });
            }
        }
        text
    }
}

/// Zero-padded two-digit rendering of a node id (`7` → `"07"`).
pub fn two_digits(value: u8) -> String<8> {
    let mut text = String::new();
    let _ = write!(text, "{:02}", value % 100);
    text
}
