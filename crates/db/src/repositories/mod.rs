//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and call exactly one stored
//! procedure.

pub mod album_repo;
pub mod report_repo;
pub mod user_repo;
pub mod video_repo;

pub use album_repo::AlbumRepo;
pub use report_repo::ReportRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
