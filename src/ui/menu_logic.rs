//! Configuration menu state machine.
//!
//! A long press walks the menu forward
//! (`Run → ReverseSetting → TensDigit → OnesDigit → ConfirmSave → Run`),
//! a short press edits the value of the current step. Edits go to a
//! working copy that only replaces the live settings when the operator
//! answers YES on the confirm step.
//!
//! The external switch drives the lock state in every menu position.

use crate::ble::beacon_payload::BeaconSnapshot;
use crate::settings::{NodeId, Settings};
use crate::ui::input_logic::InputEvent;
use crate::ui::view::{DigitStep, LockLabel, View};

/// Menu position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Menu {
    /// Normal operation.
    Run,
    ReverseSetting,
    TensDigit,
    OnesDigit,
    ConfirmSave,
}

impl Menu {
    /// Position reached by a long press.
    pub fn next(self) -> Menu {
        match self {
            Menu::Run => Menu::ReverseSetting,
            Menu::ReverseSetting => Menu::TensDigit,
            Menu::TensDigit => Menu::OnesDigit,
            Menu::OnesDigit => Menu::ConfirmSave,
            Menu::ConfirmSave => Menu::Run,
        }
    }
}

/// Settings being edited. The node id is raw here: a tens-digit wrap can
/// leave it at 0 until the ones step is left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pending {
    pub node_id: u8,
    pub reverse: bool,
}

impl From<Settings> for Pending {
    fn from(settings: Settings) -> Self {
        Self {
            node_id: settings.node_id.get(),
            reverse: settings.reverse,
        }
    }
}

impl Pending {
    fn to_settings(self) -> Settings {
        Settings {
            node_id: NodeId::normalize(self.node_id),
            reverse: self.reverse,
        }
    }
}

/// Tens-digit step: add 10, wrapping at 100. The ones digit is untouched.
pub fn bump_tens(node_id: u8) -> u8 {
    (node_id % 100 + 10) % 100
}

/// Ones-digit step: increment the ones digit mod 10 keeping the tens
/// digit. A result of 0 is forced to 1.
pub fn bump_ones(node_id: u8) -> u8 {
    let node_id = node_id % 100;
    match (node_id / 10) * 10 + (node_id % 10 + 1) % 10 {
        0 => 1,
        n => n,
    }
}

/// Result of handling one input event. Every variant means the screen
/// must be redrawn exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Change {
    /// Long press moved the menu to this position.
    Advanced(Menu),
    ReverseToggled(bool),
    NodeIdEdited(u8),
    ConfirmToggled(bool),
    /// Confirm step answered YES; these settings are now live and must be saved.
    Committed(Settings),
    /// Confirm step answered NO; live settings untouched.
    Discarded,
    LockChanged(bool),
}

impl Change {
    /// Settings to write to flash, if this change requires it.
    pub fn persist(&self) -> Option<Settings> {
        match self {
            Change::Committed(settings) => Some(*settings),
            _ => None,
        }
    }
}

/// Owns the live settings, the lock state and the menu.
pub struct MenuMachine {
    settings: Settings,
    locked: bool,
    menu: Menu,
    pending: Pending,
    confirm: bool,
}

impl MenuMachine {
    /// Start in `Run` with settings loaded at boot.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            locked: false,
            menu: Menu::Run,
            pending: settings.into(),
            confirm: false,
        }
    }

    pub fn menu(&self) -> Menu {
        self.menu
    }

    /// Live (committed) settings.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn pending(&self) -> Pending {
        self.pending
    }

    /// Raw sensed lock state (not affected by the reverse flag).
    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn confirm(&self) -> bool {
        self.confirm
    }

    /// What goes on air: live node id and raw lock state.
    pub fn beacon_snapshot(&self) -> BeaconSnapshot {
        BeaconSnapshot {
            node_id: self.settings.node_id,
            locked: self.locked,
        }
    }

    /// Apply one input event. `None` means nothing changed.
    pub fn handle(&mut self, event: InputEvent) -> Option<Change> {
        match event {
            InputEvent::LongPressFired => Some(self.advance()),
            InputEvent::ShortPressReleased => self.edit(),
            InputEvent::ExternalLevelChanged(level) => {
                self.locked = level;
                Some(Change::LockChanged(level))
            }
        }
    }

    fn advance(&mut self) -> Change {
        let from = self.menu;
        self.menu = from.next();

        match from {
            Menu::Run => {
                self.pending = self.settings.into();
                self.confirm = false;
            }
            Menu::OnesDigit => {
                self.pending.node_id = NodeId::normalize(self.pending.node_id).get();
            }
            Menu::ConfirmSave => {
                let committed = core::mem::replace(&mut self.confirm, false);
                return if committed {
                    self.settings = self.pending.to_settings();
                    Change::Committed(self.settings)
                } else {
                    self.pending = self.settings.into();
                    Change::Discarded
                };
            }
            Menu::ReverseSetting | Menu::TensDigit => {}
        }

        Change::Advanced(self.menu)
    }

    fn edit(&mut self) -> Option<Change> {
        match self.menu {
            Menu::Run => None,
            Menu::ReverseSetting => {
                self.pending.reverse = !self.pending.reverse;
                Some(Change::ReverseToggled(self.pending.reverse))
            }
            Menu::TensDigit => {
                self.pending.node_id = bump_tens(self.pending.node_id);
                Some(Change::NodeIdEdited(self.pending.node_id))
            }
            Menu::OnesDigit => {
                self.pending.node_id = bump_ones(self.pending.node_id);
                Some(Change::NodeIdEdited(self.pending.node_id))
            }
            Menu::ConfirmSave => {
                self.confirm = !self.confirm;
                Some(Change::ConfirmToggled(self.confirm))
            }
        }
    }

    /// Frame for the current menu position.
    pub fn view(&self) -> View {
        match self.menu {
            Menu::Run => View::Lock {
                label: LockLabel::from_state(self.locked, self.settings.reverse),
                reverse_setting: false,
            },
            Menu::ReverseSetting => View::Lock {
                label: LockLabel::from_state(self.locked, self.pending.reverse),
                reverse_setting: true,
            },
            Menu::TensDigit => View::NodeDigit {
                step: DigitStep::Tens,
                node_id: self.pending.node_id,
            },
            Menu::OnesDigit => View::NodeDigit {
                step: DigitStep::Ones,
                node_id: self.pending.node_id,
            },
            Menu::ConfirmSave => View::Confirm { save: self.confirm },
        }
    }
}
