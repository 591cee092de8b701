//! Build-time configuration of the ESP door sensor firmware.
//!
//! * [`device`]: door identity, picked with the `main-door` / `terrace-door` feature
//! * [`config`]: Wi-Fi, OTA and MQTT secrets generated from `cfg.toml`
//! * [`network`]: static addressing of the device, checked at compile time
//! * [`dprint!`], [`dprintln!`], [`dbegin!`]: console output behind the `debug` feature

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod console;
pub mod constants;
pub mod debug;
pub mod device;
pub mod network;
pub mod report;
pub mod topic;
