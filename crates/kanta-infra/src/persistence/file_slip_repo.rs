//! File-based implementation of SlipRepository

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use kanta_domain::model::Slip;
use kanta_domain::repository::SlipRepository;
use kanta_types::Result;

/// Stores the slip collection in a JSON file on disk.
///
/// The file holds an ordered array; creation order is the file order.
pub struct FileSlipRepository {
    store_path: PathBuf,
}

impl FileSlipRepository {
    /// Create the data directory if needed and point at its slips file
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join("slips.json"),
        })
    }

    /// Path of the backing file
    pub fn store_path(&self) -> &PathBuf {
        &self.store_path
    }
}

impl SlipRepository for FileSlipRepository {
    fn load(&self) -> Result<Vec<Slip>> {
        if !self.store_path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.store_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    fn save(&self, slips: &[Slip]) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, slips)?;
        writer.flush()?;
        Ok(())
    }
}
