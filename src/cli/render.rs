//! Read-only rendering of diary state for the terminal.

use colored::Colorize;

use crate::config::Config;
use crate::driver::DriverProfile;
use crate::rides::{QuerySelection, RideRecord};

pub fn print_ride(ride: &RideRecord, config: &Config) {
    println!(
        "{} {}",
        format!("#{}", ride.id).bold(),
        ride.passenger_name.bold()
    );
    println!("  {} {} → {}", "Route:".dimmed(), ride.pickup_location, ride.dropoff_location);
    println!(
        "  {} {}  {} {} {}",
        "Payment:".dimmed(),
        ride.payment_method,
        "Fare:".dimmed(),
        config.currency_symbol,
        ride.fare_amount
    );
}

pub fn print_ride_list(rides: &[&RideRecord], selection: &QuerySelection, config: &Config) {
    println!("{}", "Ride records".bold().underline());
    if let Some(filter) = selection.payment_filter {
        println!("{} {}", "Filtered by:".dimmed(), filter);
    }
    if rides.is_empty() {
        println!("{}", "No rides to show.".dimmed());
        return;
    }
    for ride in rides {
        print_ride(ride, config);
    }
}

pub fn print_profile(profile: &DriverProfile) {
    println!("{}", "Driver information".bold().underline());
    println!("  {} {}", "Name:".dimmed(), profile.full_name);
    println!("  {} {}", "Taxpayer id:".dimmed(), profile.taxpayer_id);
    println!("  {} {}", "Birth date:".dimmed(), profile.birth_date);
    println!("  {} {}", "PIX key:".dimmed(), profile.pix_key);
    if let Some(qr) = &profile.qr_code {
        println!("  {} {}", "QR code:".dimmed(), qr.as_str());
    }
}

pub fn print_qr_viewer(profile: &DriverProfile) {
    match &profile.qr_code {
        Some(qr) => println!("{} {}", "PIX QR code:".bold(), qr.as_str()),
        None => println!("{}", "No QR code available".dimmed()),
    }
}
