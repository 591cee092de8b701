/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest SSID accepted by 802.11
pub const MAX_SSID_LEN: usize = 32;
/// Shortest WPA2 passphrase
pub const MIN_PSK_LEN: usize = 8;
/// Longest WPA2 passphrase (64 hex digits form a raw PSK)
pub const MAX_PSK_LEN: usize = 64;

/// Longest MQTT topic name, its length is encoded on two bytes
pub const MAX_TOPIC_LEN: usize = u16::MAX as usize;

/// Bytes of console output kept on host builds, which have no UART
pub const CONSOLE_CAPTURE_SIZE: usize = 1024;

/// Interval in seconds between heartbeat lines on the debug console
pub const HEARTBEAT_INTERVAL_SECS: u64 = 60;
