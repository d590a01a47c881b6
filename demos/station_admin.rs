//! Station administration example: staff, prices and credit/debit summaries

use chrono::NaiveDate;
use fuel_station_core::utils::MemoryStorage;
use fuel_station_core::{PriceForm, ReadingForm, ReadingQuery, Station, StationConfig};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("🛠️  Fuel Station Core - Station Admin Example\n");

    let config = StationConfig::from_json(
        r#"{ "currencySymbol": "Rs. ", "defaultDebitNames": ["VIKASH", "KAVALAKKAD"] }"#,
    )?;
    let mut station = Station::with_config(MemoryStorage::new(), config);
    println!(
        "⚙️  Currency {:?}, default debit lines: {}\n",
        station.config().currency_symbol,
        station.config().default_debit_names.join(", ")
    );

    // 1. Staff directory
    println!("👥 Staff");
    for (id, name) in [("EMP01", "Anu Thomas"), ("EMP02", "Biju Paul")] {
        let staff = station.add_staff(id.to_string(), name.to_string()).await?;
        println!("  ✓ {} - {}", staff.staff_id, staff.name);
    }
    if let Err(e) = station
        .add_staff("EMP01".to_string(), "Someone Else".to_string())
        .await
    {
        println!("  ✗ {}", e);
    }
    println!();

    // 2. Prices from the price form
    println!("🏷️  Prices");
    let form: PriceForm = serde_json::from_value(json!({
        "petrolPrice": "102.86",
        "dieselPrice": "94.68",
        "oilPrice": "180"
    }))?;
    let prices = station.update_prices_from_form(&form).await?;
    println!(
        "  Petrol {}  Diesel {}  Oil {}",
        station.format_money(&prices.petrol),
        station.format_money(&prices.diesel),
        station.format_money(&prices.oil)
    );
    let prefill = PriceForm::from_prices(&station.current_prices().await?);
    println!("  Price form prefill: {}", serde_json::to_string(&prefill)?);
    println!();

    // 3. Readings submitted from the entry screen
    let forms = [
        json!({
            "currentDate": "2024-06-13",
            "selectedId": "EMP01",
            "petrol": "102.86", "diesel": "94.68", "oil": "180",
            "firstReading1": "15000", "secondReading1": "15230.4",
            "creditEntries": [{ "name": "GPAY", "amount": "6400" }],
            "debitEntries": [{ "name": "VIKASH", "amount": "250" }],
            "note500": "30"
        }),
        json!({
            "currentDate": "2024-06-14",
            "selectedId": "EMP02",
            "petrol": "102.86", "diesel": "94.68", "oil": "180",
            "dieselFirstReading1": "40112", "dieselSecondReading1": "40290",
            "creditEntries": [{ "name": "CARD", "amount": "2,000" }],
            "note500": "20"
        }),
    ];
    for value in forms {
        let form: ReadingForm = serde_json::from_value(value)?;
        for issue in form.issues() {
            println!("  ⚠️  {} is not a number: {:?}", issue.field, issue.value);
        }
        let saved = station.submit_form(&form).await?;
        let result = station.reconcile_reading(&saved.id).await?;
        println!(
            "  📄 {} {} final {} {} {}",
            saved.date,
            saved.staff_id,
            station.format_money(&result.final_result),
            result.status.label(),
            station.format_money(&result.excess_shot)
        );
    }
    println!();

    // 4. Search and summaries
    let from = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("invalid date")?;
    let to = NaiveDate::from_ymd_opt(2024, 6, 30).ok_or("invalid date")?;

    let june = station
        .search_readings(&ReadingQuery::between(from, to))
        .await?;
    println!("🔎 {} readings in June", june.len());

    let summary = station.credit_debit_summary(from, to, None).await?;
    println!("📊 Credit/debit summary");
    for day in &summary.days {
        for item in &day.credits {
            println!("  {} credit {:<10} {}", day.date, item.name, station.format_money(&item.amount));
        }
        for item in &day.debits {
            println!("  {} debit  {:<10} {}", day.date, item.name, station.format_money(&item.amount));
        }
    }
    println!("  Net: {}", station.format_money(&summary.net_amount));

    Ok(())
}
