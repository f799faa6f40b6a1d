//! Persistent storage for the settings record.
//!
//! Uses the nRF52840's internal flash via `sequential-storage` crate.
//! The record is a single 2-byte map item (see `settings.rs` for the
//! layout); `sequential-storage` appends a new item on every save, so a
//! power loss mid-write leaves the previous record readable.
//!
//! Storage errors never propagate into the menu: `load` reports them and
//! the caller falls back to defaults, `save` reports them and the live
//! settings stay as they are.

use crate::config::{STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use crate::error::Error;
use crate::settings::{Settings, RECORD_LEN};
use defmt::{error, info, warn};
use embedded_storage_async::nor_flash::NorFlash;

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Key for the settings record in the map storage.
const KEY_SETTINGS: u8 = 0x01;

/// Scratch buffer for `sequential-storage` (item header + record, word aligned).
const SCRATCH_LEN: usize = 32;

/// Read the settings record.
///
/// `Ok(None)` means flash holds no record yet (first boot).
pub async fn load(flash: &mut impl NorFlash) -> Result<Option<Settings>, Error> {
    let mut buf = [0u8; SCRATCH_LEN];

    match sequential_storage::map::fetch_item::<u8, &[u8], _>(
        flash,
        STORAGE_START..STORAGE_END,
        &mut sequential_storage::cache::NoCache::new(),
        &mut buf,
        &KEY_SETTINGS,
    )
    .await
    {
        Ok(Some(data)) => match Settings::from_record(data) {
            Ok(settings) => {
                info!("Loaded settings: {}", settings);
                Ok(Some(settings))
            }
            Err(e) => {
                warn!("Settings record corrupt ({=[u8]}): {}", data, e);
                Err(e)
            }
        },
        Ok(None) => {
            warn!("No settings in flash");
            Ok(None)
        }
        Err(e) => {
            error!("Flash read error: {:?}", defmt::Debug2Format(&e));
            Err(Error::StorageUnavailable)
        }
    }
}

/// Boot-time load with the soft-fail policy applied.
pub async fn load_or_default(flash: &mut impl NorFlash) -> Settings {
    let settings = Settings::or_default(load(flash).await);
    info!("Booting with node {} reverse={}", settings.node_id.get(), settings.reverse);
    settings
}

/// Write the settings record.
pub async fn save(flash: &mut impl NorFlash, settings: &Settings) -> Result<(), Error> {
    let mut buf = [0u8; SCRATCH_LEN];
    let record: [u8; RECORD_LEN] = settings.to_record();
    let item: &[u8] = &record;

    match sequential_storage::map::store_item::<u8, &[u8], _>(
        flash,
        STORAGE_START..STORAGE_END,
        &mut sequential_storage::cache::NoCache::new(),
        &mut buf,
        &KEY_SETTINGS,
        &item,
    )
    .await
    {
        Ok(_) => {
            info!("Saved settings: {}", settings);
            Ok(())
        }
        Err(e) => {
            error!("Flash write error: {:?}", defmt::Debug2Format(&e));
            Err(Error::StorageWriteFailure)
        }
    }
}
