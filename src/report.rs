//! Boot-time summary of who this device is and where it talks to.
//!
//! Secrets (Wi-Fi passphrases, OTA and MQTT passwords) are never rendered.

use core::fmt;

use crate::config::{Config, CONFIG};
use crate::constants::VERSION;
use crate::device::{DeviceProfile, DEVICE};
use crate::network::{StaticIpConfig, STATIC_IP};

pub struct Summary<'a> {
    pub device: &'a DeviceProfile,
    pub config: &'a Config,
    pub network: &'a StaticIpConfig,
}

impl Summary<'static> {
    /// Summary of the compiled-in configuration
    pub fn current() -> Self {
        Self {
            device: &DEVICE,
            config: &CONFIG,
            network: &STATIC_IP,
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "firmware: {}", VERSION)?;
        writeln!(f, "device: {}", self.device.name)?;
        writeln!(f, "topic: {}", self.device.mqtt_topic)?;

        match self.network.prefix_len() {
            Some(prefix) => writeln!(f, "address: {}/{}", self.network.address, prefix)?,
            None => writeln!(f, "address: {} mask {}", self.network.address, self.network.subnet)?,
        }
        writeln!(f, "gateway: {}", self.network.gateway)?;

        let mqtt = &self.config.mqtt;
        writeln!(f, "broker: {}:{} as {:?}", mqtt.address, mqtt.port, mqtt.username)?;

        for (i, wifi) in self.config.wifi_networks().enumerate() {
            let role = if i == 0 { "primary" } else { "fallback" };
            writeln!(f, "wifi {}: {:?}", role, wifi.ssid)?;
        }

        Ok(())
    }
}
