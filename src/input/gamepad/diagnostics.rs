//! Gamepad diagnostics for troubleshooting detection issues

use super::domain::{axis_name, button_name, DeviceId, InputDomain};
use super::provider::GilrsProvider;
use super::source::InputSource;
use super::tracker::AXIS_DEADZONE;
use anyhow::Result;
use colored::*;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

/// How long to keep polling so Bluetooth controllers can wake up
const SCAN_DURATION: Duration = Duration::from_secs(5);
const SCAN_INTERVAL: Duration = Duration::from_millis(100);

/// Poll for a while so slow controllers have time to show up
fn scan(provider: &mut GilrsProvider, duration: Duration) {
    let start = Instant::now();
    while start.elapsed() < duration {
        provider.poll();
        thread::sleep(SCAN_INTERVAL);
    }
}

/// Log detailed information about every detected gamepad
pub fn print_gamepad_diagnostics() -> Result<()> {
    let domain = InputDomain::default();

    info!("=== Gamepad Diagnostics ===");
    info!("Platform: {}", std::env::consts::OS);

    let mut provider = GilrsProvider::new(domain)?;

    info!("Waiting for gamepads to connect ({} seconds)...", SCAN_DURATION.as_secs());
    info!("   (Bluetooth controllers may take a moment to wake up)");
    scan(&mut provider, SCAN_DURATION);

    let devices = provider.connected_devices();
    if devices.is_empty() {
        info!("No gamepads detected");
        info!("   Please check:");
        info!("   - Gamepad is connected (USB or Bluetooth paired)");
        info!("   - Drivers are installed and the device is visible to the OS");
        return Ok(());
    }

    info!("Found {} gamepad(s):", devices.len());

    for device in devices {
        info!("Gamepad ID: {}", device);
        info!("   Name: \"{}\"", provider.device_name(device));
        info!("   Mapped axes: {}", provider.axis_count(device));

        let held: Vec<_> = domain
            .buttons
            .iter()
            .filter(|b| provider.is_button_down(device, **b))
            .map(|b| button_name(*b))
            .collect();
        if held.is_empty() {
            info!("   (no buttons currently pressed)");
        } else {
            info!("   Held buttons: {}", held.join(", "));
        }

        let mut any_axis = false;
        for &axis in domain.axes {
            let value = provider.axis_movement(device, axis);
            if value.abs() > AXIS_DEADZONE {
                info!("   {}: {:.3}", axis_name(axis), value);
                any_axis = true;
            }
        }
        if !any_axis {
            info!("   (all axes centered, move sticks to see values)");
        }
    }

    info!("=== End Diagnostics ===");
    Ok(())
}

/// Print connected controllers to stdout
pub fn list_devices() -> Result<()> {
    let mut provider = GilrsProvider::new(InputDomain::default())?;
    scan(&mut provider, Duration::from_secs(1));

    println!("\n{}", "=== Connected Controllers ===".bold().cyan());

    let devices = provider.connected_devices();
    if devices.is_empty() {
        println!("  {}", "No controllers found".dimmed());
    }
    for device in devices {
        print_device_line(&provider, device);
    }

    println!();
    Ok(())
}

fn print_device_line<S: InputSource + ?Sized>(source: &S, device: DeviceId) {
    println!(
        "  {} {} {}",
        format!("[{}]", device).yellow(),
        source.device_name(device).bright_white(),
        format!("({} axes)", source.axis_count(device)).dimmed()
    );
}
