//! End-to-end demo: brings a virtual temperature sensor up, drives it for a
//! few seconds, prints its stats, and tears it down.

use std::time::Duration;

use simtemp_runtime::{NoBindingProperties, SimtempDevice};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("simtemp demo");
    println!("------------");

    let device = SimtempDevice::probe(&NoBindingProperties).await?;
    device.write_attr("mode", "ramp").await?;
    device.write_attr("sampling_ms", "100").await?;
    device.write_attr("threshold_mC", "30200").await?;

    println!("probed device, mode={}", device.read_attr("mode").await?.trim());

    let reader = device.open_reader()?;
    for _ in 0..5 {
        let record = reader.read().await?;
        println!(
            "record: timestamp_ns={} temp_mC={} flags={:?}",
            record.timestamp_ns, record.temp_mc, record.flags
        );
    }

    println!("{}", device.stats());

    tokio::time::sleep(Duration::from_millis(50)).await;
    device.remove().await;

    println!("device removed");
    Ok(())
}
