//! Stores for weighment slips and issuer settings
//!
//! `SlipStore` is the single writer for the slip collection. Every `create`
//! and `complete` runs under one mutex, which is what makes the numbering
//! scheme safe: the next number is derived from the collection the write is
//! applied to, with no window for another writer in between. The updated
//! collection is persisted through the adapter before it becomes visible in
//! memory, so a failed save leaves the store exactly as it was.

use std::sync::Mutex;

use kanta_domain::model::{CompleteSlip, PendingSlip, Settings, Slip};
use kanta_domain::repository::{SettingsRepository, SlipRepository};
use kanta_domain::service::slip_number::next_slip_number;
use kanta_types::{Error, Result};

/// Owner of the slip collection; consumers only hold snapshots
pub struct SlipStore {
    repo: Box<dyn SlipRepository>,
    slips: Mutex<Vec<Slip>>,
}

impl SlipStore {
    /// Open the store, loading existing slips through the adapter
    pub fn open(repo: Box<dyn SlipRepository>) -> Result<Self> {
        let slips = repo.load()?;
        Ok(Self {
            repo,
            slips: Mutex::new(slips),
        })
    }

    /// Record the gross weighing: allocate a number, stamp the time, append.
    ///
    /// The new slip starts `Pending`. Fails with `Validation` on bad input
    /// and `Persistence` when the adapter write fails; in both cases no
    /// record is added.
    pub fn create(
        &self,
        vehicle_number: &str,
        material: &str,
        gross_weight: f64,
    ) -> Result<PendingSlip> {
        let mut slips = self.slips.lock().unwrap();

        let number = next_slip_number(&slips);
        let slip = PendingSlip::new(number, vehicle_number, material, gross_weight)?;

        let mut next = slips.clone();
        next.push(Slip::Pending(slip.clone()));
        self.repo.save(&next)?;
        *slips = next;

        Ok(slip)
    }

    /// Record the tare weighing for a pending slip.
    ///
    /// Derives the net weight and moves the slip to `Complete`, its terminal
    /// state. Completion is not idempotent: a second call fails with
    /// `InvalidState` and the first result is preserved.
    pub fn complete(&self, id: &str, tare_weight: f64) -> Result<CompleteSlip> {
        let mut slips = self.slips.lock().unwrap();

        let idx = slips
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let pending = match &slips[idx] {
            Slip::Pending(p) => p.clone(),
            Slip::Complete(c) => {
                return Err(Error::InvalidState(format!(
                    "slip {} is already complete",
                    c.slip_number
                )))
            }
        };

        let completed = pending.complete(tare_weight)?;

        let mut next = slips.clone();
        next[idx] = Slip::Complete(completed.clone());
        self.repo.save(&next)?;
        *slips = next;

        Ok(completed)
    }

    /// Snapshot of all slips in creation order
    pub fn list(&self) -> Vec<Slip> {
        self.slips.lock().unwrap().clone()
    }

    /// Snapshot of slips still waiting for the tare weighing
    pub fn list_pending(&self) -> Vec<Slip> {
        self.slips
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_pending())
            .cloned()
            .collect()
    }

    /// Snapshot of finished slips
    pub fn list_complete(&self) -> Vec<Slip> {
        self.slips
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_complete())
            .cloned()
            .collect()
    }

    /// Find a slip by its printed number
    pub fn find_by_number(&self, slip_number: &str) -> Option<Slip> {
        self.slips
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.slip_number() == slip_number)
            .cloned()
    }

    /// The number the next created slip will receive
    pub fn next_number(&self) -> String {
        next_slip_number(&self.slips.lock().unwrap())
    }

    /// Total slip count
    pub fn count(&self) -> usize {
        self.slips.lock().unwrap().len()
    }
}

/// Owner of the single issuer-settings record
pub struct SettingsStore {
    repo: Box<dyn SettingsRepository>,
    settings: Mutex<Settings>,
}

impl SettingsStore {
    /// Open the store; falls back to the placeholder identity when nothing
    /// has ever been saved
    pub fn open(repo: Box<dyn SettingsRepository>) -> Result<Self> {
        let settings = repo.load()?.unwrap_or_default();
        Ok(Self {
            repo,
            settings: Mutex::new(settings),
        })
    }

    /// Current settings
    pub fn get(&self) -> Settings {
        self.settings.lock().unwrap().clone()
    }

    /// Replace the record. Persisted before it becomes visible; on failure
    /// the previous record stays in effect.
    pub fn save(&self, settings: Settings) -> Result<Settings> {
        let mut current = self.settings.lock().unwrap();
        self.repo.save(&settings)?;
        *current = settings.clone();
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adapter that keeps everything in memory
    #[derive(Default)]
    struct MemorySlipRepo {
        saved: Mutex<Vec<Slip>>,
    }

    impl SlipRepository for MemorySlipRepo {
        fn load(&self) -> Result<Vec<Slip>> {
            Ok(self.saved.lock().unwrap().clone())
        }

        fn save(&self, slips: &[Slip]) -> Result<()> {
            *self.saved.lock().unwrap() = slips.to_vec();
            Ok(())
        }
    }

    /// Adapter whose writes always fail
    struct FailingSlipRepo;

    impl SlipRepository for FailingSlipRepo {
        fn load(&self) -> Result<Vec<Slip>> {
            Ok(Vec::new())
        }

        fn save(&self, _slips: &[Slip]) -> Result<()> {
            Err(Error::Persistence("disk full".to_string()))
        }
    }

    fn store() -> SlipStore {
        SlipStore::open(Box::new(MemorySlipRepo::default())).unwrap()
    }

    #[test]
    fn test_create_returns_pending_slip() {
        let store = store();
        let slip = store.create("mh12ab1234", "Sand", 12.5).unwrap();

        assert_eq!(slip.slip_number, "00001");
        assert_eq!(slip.vehicle_number, "MH12AB1234");
        assert_eq!(slip.gross_weight, 12.5);
        assert_eq!(store.list_pending().len(), 1);
        assert!(store.list_complete().is_empty());
    }

    #[test]
    fn test_numbers_are_sequential() {
        let store = store();
        let a = store.create("MH12AB1234", "Sand", 12.5).unwrap();
        let b = store.create("KA05CD6789", "Gravel", 9.0).unwrap();

        assert_eq!(a.slip_number, "00001");
        assert_eq!(b.slip_number, "00002");
    }

    #[test]
    fn test_create_validation_leaves_store_unchanged() {
        let store = store();
        assert!(matches!(
            store.create("", "Sand", 12.5),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            store.create("MH12", "", 12.5),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            store.create("MH12", "Sand", -1.0),
            Err(Error::Validation(_))
        ));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_create_persistence_failure_leaves_store_unchanged() {
        let store = SlipStore::open(Box::new(FailingSlipRepo)).unwrap();
        assert!(matches!(
            store.create("MH12AB1234", "Sand", 12.5),
            Err(Error::Persistence(_))
        ));
        assert_eq!(store.count(), 0);
        // The failed write must not have consumed a number
        assert_eq!(store.next_number(), "00001");
    }

    #[test]
    fn test_complete_lifecycle() {
        let store = store();
        let slip = store.create("mh12ab1234", "Sand", 12.5).unwrap();

        let done = store.complete(&slip.id, 4.2).unwrap();
        assert!((done.net_weight - 8.3).abs() < 1e-9);
        assert_eq!(done.slip_number, "00001");
        assert_eq!(store.list_pending().len(), 0);
        assert_eq!(store.list_complete().len(), 1);
    }

    #[test]
    fn test_complete_unknown_id() {
        let store = store();
        assert!(matches!(
            store.complete("no-such-id", 4.2),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_complete_twice_fails_and_preserves_first_result() {
        let store = store();
        let slip = store.create("MH12AB1234", "Sand", 12.5).unwrap();

        let first = store.complete(&slip.id, 4.2).unwrap();
        assert!(matches!(
            store.complete(&slip.id, 9.9),
            Err(Error::InvalidState(_))
        ));

        let kept = store.find_by_number("00001").unwrap();
        assert_eq!(kept.as_complete().unwrap(), &first);
    }

    #[test]
    fn test_complete_validation_leaves_slip_pending() {
        let store = store();
        let slip = store.create("MH12AB1234", "Sand", 12.5).unwrap();

        assert!(matches!(
            store.complete(&slip.id, 0.0),
            Err(Error::Validation(_))
        ));
        assert_eq!(store.list_pending().len(), 1);
    }

    #[test]
    fn test_settings_store_defaults() {
        #[derive(Default)]
        struct MemorySettingsRepo {
            saved: Mutex<Option<Settings>>,
        }

        impl SettingsRepository for MemorySettingsRepo {
            fn load(&self) -> Result<Option<Settings>> {
                Ok(self.saved.lock().unwrap().clone())
            }

            fn save(&self, settings: &Settings) -> Result<()> {
                *self.saved.lock().unwrap() = Some(settings.clone());
                Ok(())
            }
        }

        let store = SettingsStore::open(Box::new(MemorySettingsRepo::default())).unwrap();
        assert_eq!(store.get(), Settings::default());

        let saved = store
            .save(Settings {
                company_name: "Shree Weighbridge".to_string(),
                address: "NH-48, Surat".to_string(),
            })
            .unwrap();
        assert_eq!(store.get(), saved);
    }
}
