pub mod ftp_server;
pub mod memory_transport;
