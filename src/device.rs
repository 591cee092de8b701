//! Identity of the door this firmware is built for.
//!
//! The door is picked with a cargo feature: `main-door` or `terrace-door`.
//! Exactly one of them has to be enabled, otherwise the build stops; no
//! door is enabled by default.

use core::net::Ipv4Addr;

use crate::topic;

#[cfg(not(any(feature = "main-door", feature = "terrace-door")))]
compile_error!(
    "Door type not selected: enable exactly one of the `main-door` or `terrace-door` features"
);

#[cfg(all(feature = "main-door", feature = "terrace-door"))]
compile_error!(
    "Features `main-door` and `terrace-door` are mutually exclusive, enable only one"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Door {
    Main,
    Terrace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    // Device name, also the MQTT client id and DHCP hostname
    pub name: &'static str,

    // Topic the door state is published to
    pub mqtt_topic: &'static str,

    // Static address assigned to the device
    pub ip_address: Ipv4Addr,
}

impl Door {
    pub const ALL: [Door; 2] = [Door::Main, Door::Terrace];

    pub const fn profile(self) -> DeviceProfile {
        match self {
            Door::Main => DeviceProfile {
                name: "main_door",
                mqtt_topic: "home/main_door",
                ip_address: Ipv4Addr::new(192, 168, 1, 50),
            },
            Door::Terrace => DeviceProfile {
                name: "terrace_door",
                mqtt_topic: "home/terrace_door",
                ip_address: Ipv4Addr::new(192, 168, 1, 51),
            },
        }
    }

    /// Cargo feature selecting this door
    pub const fn feature(self) -> &'static str {
        match self {
            Door::Main => "main-door",
            Door::Terrace => "terrace-door",
        }
    }
}

#[cfg(feature = "main-door")]
pub const SELECTED: Door = Door::Main;

#[cfg(all(feature = "terrace-door", not(feature = "main-door")))]
pub const SELECTED: Door = Door::Terrace;

pub const DEVICE: DeviceProfile = SELECTED.profile();

pub const DEVICE_NAME: &str = DEVICE.name;
pub const MQTT_TOPIC: &str = DEVICE.mqtt_topic;
pub const IP_ADDRESS: Ipv4Addr = DEVICE.ip_address;

// Every profile must carry a publishable topic, not only the selected one
const _: () = {
    let mut i = 0;
    while i < Door::ALL.len() {
        if let Err(e) = topic::validate(Door::ALL[i].profile().mqtt_topic) {
            panic!("{}", e.message());
        }
        i += 1;
    }
};
