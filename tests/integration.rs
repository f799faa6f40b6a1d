//! Integration tests for lock-beacon host-testable logic.
//!
//! Each scenario drives raw input samples at the poll rate through the
//! sampler and the menu, persisting committed settings into an in-memory
//! record the way the firmware writes flash.

use lock_beacon::ble::beacon_payload::build_adv_data;
use lock_beacon::config::{LONG_PRESS_MS, POLL_INTERVAL_MS};
use lock_beacon::error::Error;
use lock_beacon::settings::{NodeId, Settings, RECORD_LEN};
use lock_beacon::ui::input_logic::{InputEvent, InputSampler};
use lock_beacon::ui::menu_logic::{Change, MenuMachine};
use lock_beacon::ui::Menu;

/// In-memory stand-in for the flash record.
#[derive(Default)]
struct MemoryStore {
    record: Option<[u8; RECORD_LEN]>,
    saves: usize,
    fail_writes: bool,
}

impl MemoryStore {
    fn load(&self) -> Result<Option<Settings>, Error> {
        self.record.map(|r| Settings::from_record(&r)).transpose()
    }

    fn save(&mut self, settings: &Settings) -> Result<(), Error> {
        self.saves += 1;
        if self.fail_writes {
            return Err(Error::StorageWriteFailure);
        }
        self.record = Some(settings.to_record());
        Ok(())
    }
}

/// Poll loop without hardware.
struct Rig {
    now: u64,
    sampler: InputSampler,
    machine: MenuMachine,
    store: MemoryStore,
    external: bool,
    events: Vec<InputEvent>,
    renders: usize,
}

impl Rig {
    fn boot(store: MemoryStore) -> Self {
        let settings = Settings::or_default(store.load());
        let mut rig = Self {
            now: 0,
            sampler: InputSampler::new(),
            machine: MenuMachine::new(settings),
            store,
            external: false,
            events: Vec::new(),
            renders: 0,
        };
        rig.tick(false);
        rig
    }

    fn tick(&mut self, pressed: bool) {
        let events = self.sampler.sample(self.now, pressed, self.external);
        for event in events {
            self.events.push(event);
            if let Some(change) = self.machine.handle(event) {
                if let Some(settings) = change.persist() {
                    let _ = self.store.save(&settings);
                }
                self.renders += 1;
            }
        }
        self.now += POLL_INTERVAL_MS;
    }

    fn hold(&mut self, ms: u64) {
        for _ in 0..ms / POLL_INTERVAL_MS {
            self.tick(true);
        }
        self.tick(false);
    }

    fn short_press(&mut self) {
        self.hold(POLL_INTERVAL_MS);
    }

    fn long_press(&mut self) {
        self.hold(LONG_PRESS_MS + 500);
    }

    fn count(&self, wanted: InputEvent) -> usize {
        self.events.iter().filter(|e| **e == wanted).count()
    }
}

fn stored(node_id: u8, reverse: bool) -> MemoryStore {
    MemoryStore {
        record: Some([node_id, reverse as u8]),
        ..Default::default()
    }
}

#[test]
fn blank_flash_boots_with_defaults() {
    let rig = Rig::boot(MemoryStore::default());
    assert_eq!(rig.machine.settings(), Settings::DEFAULT);
    assert_eq!(rig.machine.menu(), Menu::Run);
}

#[test]
fn zeroed_record_boots_as_node_one() {
    let rig = Rig::boot(stored(0, false));
    assert_eq!(rig.machine.settings().node_id, NodeId::MIN);
}

#[test]
fn corrupt_record_boots_with_defaults() {
    let rig = Rig::boot(MemoryStore {
        record: Some([0xFF, 0xFF]),
        ..Default::default()
    });
    assert_eq!(rig.machine.settings(), Settings::DEFAULT);
}

#[test]
fn initial_external_level_reported_once() {
    let mut rig = Rig::boot(stored(3, false));
    for _ in 0..10 {
        rig.tick(false);
    }
    assert_eq!(rig.count(InputEvent::ExternalLevelChanged(false)), 1);
    assert_eq!(rig.renders, 1);
}

#[test]
fn long_press_held_3500ms_yields_no_short_press() {
    let mut rig = Rig::boot(stored(3, false));
    rig.hold(3500);
    assert_eq!(rig.count(InputEvent::LongPressFired), 1);
    assert_eq!(rig.count(InputEvent::ShortPressReleased), 0);
    assert_eq!(rig.machine.menu(), Menu::ReverseSetting);
}

#[test]
fn discard_path_keeps_settings_and_skips_save() {
    let mut rig = Rig::boot(stored(5, false));
    rig.long_press(); // ReverseSetting
    rig.short_press();
    rig.long_press(); // TensDigit
    rig.short_press();
    rig.long_press(); // OnesDigit
    rig.short_press();
    rig.long_press(); // ConfirmSave
    rig.long_press(); // Run, confirm = NO

    assert_eq!(rig.machine.menu(), Menu::Run);
    assert_eq!(rig.machine.settings().node_id.get(), 5);
    assert!(!rig.machine.settings().reverse);
    assert_eq!(rig.store.saves, 0);
    assert_eq!(rig.store.record, Some([5, 0]));
}

#[test]
fn commit_path_saves_edited_value_once() {
    let mut rig = Rig::boot(stored(5, false));
    rig.long_press(); // ReverseSetting
    rig.short_press(); // reverse on
    rig.long_press(); // TensDigit
    rig.short_press(); // 15
    rig.short_press(); // 25
    rig.long_press(); // OnesDigit
    rig.short_press(); // 26
    rig.long_press(); // ConfirmSave
    rig.short_press(); // YES
    rig.long_press(); // Run

    let expected = Settings {
        node_id: NodeId::new(26).unwrap(),
        reverse: true,
    };
    assert_eq!(rig.machine.settings(), expected);
    assert_eq!(rig.store.saves, 1);
    assert_eq!(rig.store.record, Some([26, 1]));

    // Next boot reads it back.
    let rebooted = Rig::boot(rig.store);
    assert_eq!(rebooted.machine.settings(), expected);
}

#[test]
fn failed_save_still_applies_in_memory() {
    let mut rig = Rig::boot(MemoryStore {
        record: Some([5, 0]),
        fail_writes: true,
        ..Default::default()
    });
    rig.long_press();
    rig.long_press(); // TensDigit
    rig.short_press(); // 15
    rig.long_press();
    rig.long_press(); // ConfirmSave
    rig.short_press(); // YES
    rig.long_press();

    assert_eq!(rig.machine.menu(), Menu::Run);
    assert_eq!(rig.machine.settings().node_id.get(), 15);
    assert_eq!(rig.store.saves, 1);
    assert_eq!(rig.store.record, Some([5, 0]));
}

#[test]
fn ones_wrap_from_nine_forces_one() {
    let mut rig = Rig::boot(stored(9, false));
    rig.long_press();
    rig.long_press();
    rig.long_press(); // OnesDigit
    rig.short_press();
    assert_eq!(rig.machine.pending().node_id, 1);
}

#[test]
fn switch_change_during_menu_updates_beacon_immediately() {
    let mut rig = Rig::boot(stored(8, true));
    rig.long_press(); // ReverseSetting
    rig.external = true;
    rig.tick(false);

    assert_eq!(rig.machine.menu(), Menu::ReverseSetting);
    let adv = build_adv_data(&rig.machine.beacon_snapshot());
    assert_eq!(&adv[adv.len() - 2..], &[8, 1]);
}

#[test]
fn every_change_renders_once() {
    let mut rig = Rig::boot(stored(5, false));
    let before = rig.renders;
    rig.short_press(); // Run: no-op, no render
    assert_eq!(rig.renders, before);

    rig.long_press();
    rig.short_press();
    assert_eq!(rig.renders, before + 2);

    let mut machine = MenuMachine::new(Settings::DEFAULT);
    assert!(matches!(
        machine.handle(InputEvent::ExternalLevelChanged(true)),
        Some(Change::LockChanged(true))
    ));
}
