use std::{env, error::Error, fs, net::Ipv4Addr, path::Path};

use serde::Deserialize;

const CONFIG_FILE: &str = "cfg.toml";
const TEMPLATE_FILE: &str = "cfg.toml.example";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    ota_password: String,
    wifi: RawWifiSet,
    mqtt: RawMqtt,
    network: RawNetwork,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWifiSet {
    primary: RawWifi,
    fallback: Option<RawWifi>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWifi {
    ssid: String,
    psk: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMqtt {
    address: Ipv4Addr,
    #[serde(default = "default_mqtt_port")]
    port: u16,
    username: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNetwork {
    gateway: Ipv4Addr,
    subnet: Ipv4Addr,
}

fn default_mqtt_port() -> u16 {
    1883
}

fn ipv4(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("Ipv4Addr::new({a}, {b}, {c}, {d})")
}

fn wifi(raw: &RawWifi) -> String {
    format!(
        "WifiCredentials {{ ssid: {:?}, psk: {:?} }}",
        raw.ssid, raw.psk
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if either file changes
    println!("cargo:rerun-if-changed={CONFIG_FILE}");
    println!("cargo:rerun-if-changed={TEMPLATE_FILE}");

    // cfg.toml holds the deployment secrets and is never committed
    let path = if Path::new(CONFIG_FILE).exists() {
        CONFIG_FILE
    } else {
        println!(
            "cargo:warning={CONFIG_FILE} not found, building with placeholder secrets from {TEMPLATE_FILE}"
        );
        TEMPLATE_FILE
    };

    let toml_str = fs::read_to_string(path)?;
    let raw: RawConfig = toml::from_str(&toml_str).map_err(|e| format!("{path}: {e}"))?;

    let fallback = match &raw.wifi.fallback {
        Some(w) => format!("Some({})", wifi(w)),
        None => "None".into(),
    };

    // Generate Rust code
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi_primary: {primary},
            wifi_fallback: {fallback},
            ota_password: {ota:?},
            mqtt: MqttBroker {{
                address: {ma},
                port: {mp},
                username: {mu:?},
                password: {mpw:?},
            }},
            network: NetworkConfig {{
                gateway: {gw},
                subnet: {sn},
            }},
        }};
    "#,
        primary = wifi(&raw.wifi.primary),
        fallback = fallback,
        ota = raw.ota_password,
        ma = ipv4(raw.mqtt.address),
        mp = raw.mqtt.port,
        mu = raw.mqtt.username,
        mpw = raw.mqtt.password,
        gw = ipv4(raw.network.gateway),
        sn = ipv4(raw.network.subnet),
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
