pub mod ask;
pub mod build_info;
pub mod message_log;
pub mod session;
pub mod suggestions;
pub mod turn;
