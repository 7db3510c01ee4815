//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attendance_repo;
pub mod student_repo;

pub use attendance_repo::AttendanceRepo;
pub use student_repo::StudentRepo;
