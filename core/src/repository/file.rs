use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::data_dir;
use crate::error::StoreError;
use crate::model::workout::WorkoutRecord;
use crate::repository::traits::WorkoutRepository;

pub const DEFAULT_FILE_NAME: &str = "treenit.json";

/// Workout log kept as one JSON array on disk.
///
/// Appends read the whole file and write it back. There is no locking and the
/// rewrite is not atomic: two processes appending at once can lose a record,
/// and a crash mid-write can truncate the file.
#[derive(Clone, Debug)]
pub struct FileWorkoutRepository {
    file_path: PathBuf,
}

impl FileWorkoutRepository {
    /// Opens the log in `base_dir`, or in the default data directory
    /// (`~/.treeni`) when none is given. The file itself is created lazily on
    /// the first append.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self, StoreError> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => data_dir().map_err(|e| StoreError::DataDir(e.to_string()))?,
        };
        Ok(Self::with_path(dir.join(DEFAULT_FILE_NAME)))
    }

    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn write_records(&self, records: &[WorkoutRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records).map_err(StoreError::Serialize)?;
        writer.flush()?;
        Ok(())
    }
}

impl WorkoutRepository for FileWorkoutRepository {
    fn append_record(&self, record: WorkoutRecord) -> Result<(), StoreError> {
        let mut records = self.read_all()?;
        records.push(record);
        self.write_records(&records)?;
        debug!(path = %self.file_path.display(), count = records.len(), "appended workout");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<WorkoutRecord>, StoreError> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "no workout log yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let reader = BufReader::new(file);
        let records: Vec<WorkoutRecord> = serde_json::from_reader(reader).map_err(StoreError::Parse)?;
        debug!(path = %self.file_path.display(), count = records.len(), "read workout log");
        Ok(records)
    }
}
