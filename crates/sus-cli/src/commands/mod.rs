pub mod describe;
pub mod dispatch;
pub mod init;
pub mod models;
pub mod play;
pub mod schema;
pub mod stats;
