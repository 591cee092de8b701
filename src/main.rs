#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};

use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;

use esp_door_sensor::{
    constants::HEARTBEAT_INTERVAL_SECS, dbegin, debug, device::DEVICE_NAME, dprintln,
    report::Summary,
};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    dbegin!(log::LevelFilter::Info);

    let peripherals = esp_hal::init(esp_hal::Config::default());

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    dprintln!("{}", Summary::current());
    log::info!(
        "{} ready, debug output {}",
        DEVICE_NAME,
        if debug::ENABLED { "on" } else { "off" }
    );

    spawner.spawn(heartbeat()).ok();
}

#[embassy_executor::task]
async fn heartbeat() {
    loop {
        Timer::after(Duration::from_secs(HEARTBEAT_INTERVAL_SECS)).await;
        dprintln!(
            "{} alive, uptime {}s",
            DEVICE_NAME,
            Instant::now().as_secs()
        );
    }
}
