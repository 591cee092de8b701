use core::fmt;
use core::iter;
use core::net::Ipv4Addr;

use crate::constants::{MAX_PSK_LEN, MAX_SSID_LEN, MIN_PSK_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials {
    // Network name
    pub ssid: &'static str,

    // WPA2 passphrase, empty for an open network
    pub psk: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MqttBroker {
    // Broker IP address
    pub address: Ipv4Addr,

    // Broker port (usually 1883)
    pub port: u16,

    // Username for authentication
    pub username: &'static str,

    // Password for authentication
    pub password: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    // Default route of the LAN
    pub gateway: Ipv4Addr,

    // Subnet mask of the LAN
    pub subnet: Ipv4Addr,
}

pub struct Config {
    // Wi-Fi network joined first
    pub wifi_primary: WifiCredentials,

    // Wi-Fi network tried when the primary one is unavailable (optional)
    pub wifi_fallback: Option<WifiCredentials>,

    // Password protecting over-the-air updates
    pub ota_password: &'static str,

    pub mqtt: MqttBroker,

    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    EmptySsid,
    SsidTooLong,
    PskTooShort,
    PskTooLong,
    EmptyOtaPassword,
    MqttPortZero,
}

impl Error {
    pub const fn message(self) -> &'static str {
        match self {
            Error::EmptySsid => "Wi-Fi SSID is empty",
            Error::SsidTooLong => "Wi-Fi SSID is longer than 32 bytes",
            Error::PskTooShort => "Wi-Fi passphrase is shorter than 8 bytes",
            Error::PskTooLong => "Wi-Fi passphrase is longer than 64 bytes",
            Error::EmptyOtaPassword => "OTA password is empty",
            Error::MqttPortZero => "MQTT port is 0",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl WifiCredentials {
    pub const fn validate(&self) -> Result<(), Error> {
        if self.ssid.is_empty() {
            return Err(Error::EmptySsid);
        }
        if self.ssid.len() > MAX_SSID_LEN {
            return Err(Error::SsidTooLong);
        }
        if self.psk.is_empty() {
            return Ok(());
        }
        if self.psk.len() < MIN_PSK_LEN {
            return Err(Error::PskTooShort);
        }
        if self.psk.len() > MAX_PSK_LEN {
            return Err(Error::PskTooLong);
        }
        Ok(())
    }
}

impl Config {
    pub const fn validate(&self) -> Result<(), Error> {
        if let Err(e) = self.wifi_primary.validate() {
            return Err(e);
        }
        if let Some(fallback) = &self.wifi_fallback {
            if let Err(e) = fallback.validate() {
                return Err(e);
            }
        }
        if self.ota_password.is_empty() {
            return Err(Error::EmptyOtaPassword);
        }
        if self.mqtt.port == 0 {
            return Err(Error::MqttPortZero);
        }
        Ok(())
    }

    /// Networks in the order they should be tried
    pub fn wifi_networks(&self) -> impl Iterator<Item = &WifiCredentials> {
        iter::once(&self.wifi_primary).chain(self.wifi_fallback.as_ref())
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

const _: () = {
    if let Err(e) = CONFIG.validate() {
        panic!("{}", e.message());
    }
};
