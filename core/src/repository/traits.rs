use crate::error::StoreError;
use crate::model::workout::WorkoutRecord;

pub trait WorkoutRepository {
    fn append_record(&self, record: WorkoutRecord) -> Result<(), StoreError>;
    fn read_all(&self) -> Result<Vec<WorkoutRecord>, StoreError>;
}
