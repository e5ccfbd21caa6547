pub mod init;
mod logger;
pub mod storage;
