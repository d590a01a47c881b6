//! Daily reading example: enter a shift's readings and reconcile the cash

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use fuel_station_core::utils::{format_amount, MemoryStorage};
use fuel_station_core::{FuelType, LineItem, MeterHead, ReadingForm, Station};

fn dec(value: &str) -> Result<BigDecimal, Box<dyn std::error::Error>> {
    Ok(value.parse()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("⛽ Fuel Station Core - Daily Reading Example\n");

    let storage = MemoryStorage::new();
    let mut station = Station::new(storage);

    station
        .add_staff("EMP01".to_string(), "Anu Thomas".to_string())
        .await?;
    station
        .update_prices(dec("102.86")?, dec("94.68")?, dec("180")?)
        .await?;

    // 1. Build the reading for the shift
    let date = NaiveDate::from_ymd_opt(2024, 6, 14).ok_or("invalid date")?;
    let mut reading = station.new_reading(date, "EMP01".to_string()).await?;

    reading.set_head(FuelType::Oil, 0, MeterHead::new(dec("830.5")?, dec("812")?));
    reading.set_head(FuelType::Petrol, 0, MeterHead::new(dec("15230.4")?, dec("15610.9")?));
    reading.set_head(FuelType::Petrol, 1, MeterHead::new(dec("9021")?, dec("9288.25")?));
    reading.set_head(FuelType::Diesel, 0, MeterHead::new(dec("40112")?, dec("40590.6")?));

    reading.test_quantities.petrol = dec("5")?;
    reading.test_quantities.diesel = dec("5")?;
    reading.battery_water.count_60 = dec("2")?;
    reading.packed_oil_entries = vec![LineItem::new("2T 1L", dec("350")?)];
    reading.credit_entries[0].amount = dec("12450")?;
    reading.credit_entries[1].amount = dec("8200")?;
    reading.debit_entries[5].amount = dec("500")?;

    reading.denomination.note_500 = dec("143")?;
    reading.denomination.note_200 = dec("40")?;
    reading.denomination.note_100 = dec("61")?;
    reading.denomination.note_50 = dec("12")?;
    reading.denomination.coins = dec("37")?;

    // 2. Preview before saving
    let preview = station.preview(&reading);
    println!("📋 Preview");
    for fuel in FuelType::ALL {
        let figures = preview.fuel(fuel);
        println!(
            "  {:<7} litres {:>10}  money {:>12}",
            fuel.label(),
            format_amount(&figures.total_difference),
            format_amount(&figures.required_money)
        );
    }
    println!();

    // 3. Save and reconcile from the store
    let saved = station.submit_reading(reading).await?;
    let report = station.reconciliation_report(&saved.id).await?;

    println!("💰 Reconciliation for {} ({})", saved.date, saved.staff_id);
    println!("  Total credit:       {}", report.total_credit);
    println!("  Total debit:        {}", report.total_debit);
    println!("  Battery water:      {}", report.total_battery_water);
    println!("  Packed oil:         {}", report.total_packed_oil);
    println!("  Final result:       {}", report.final_result);
    println!("  Cash counted:       {}", report.total_denomination);
    println!("  {:<19} {}", format!("{}:", report.status), report.excess_shot);
    println!();

    // 4. The same reading as the edit screen sees it
    let form = ReadingForm::from_record(&saved);
    println!("📝 Edit form");
    println!("{}", serde_json::to_string_pretty(&form)?);

    Ok(())
}
