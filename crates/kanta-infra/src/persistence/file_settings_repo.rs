//! File-based implementation of SettingsRepository

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use kanta_domain::model::Settings;
use kanta_domain::repository::SettingsRepository;
use kanta_types::Result;

/// Stores the single settings record in a JSON file on disk
pub struct FileSettingsRepository {
    store_path: PathBuf,
}

impl FileSettingsRepository {
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join("settings.json"),
        })
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.store_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.store_path)?;
        let reader = BufReader::new(file);
        Ok(Some(serde_json::from_reader(reader)?))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, settings)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_before_first_save_is_none() {
        let dir = tempdir().unwrap();
        let repo = FileSettingsRepository::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_save_overwrites_whole_record() {
        let dir = tempdir().unwrap();
        let repo = FileSettingsRepository::open(dir.path().to_path_buf()).unwrap();

        repo.save(&Settings {
            company_name: "Shree Weighbridge".to_string(),
            address: "NH-48, Surat".to_string(),
        })
        .unwrap();

        let replaced = Settings {
            company_name: "Jai Bhavani Dharam Kanta".to_string(),
            address: "Ring Road, Nagpur".to_string(),
        };
        repo.save(&replaced).unwrap();
        assert_eq!(repo.load().unwrap(), Some(replaced));
    }
}
