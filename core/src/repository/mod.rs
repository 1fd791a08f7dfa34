pub mod file;
pub mod traits;

// Re-export
pub use file::FileWorkoutRepository;
pub use traits::WorkoutRepository;
