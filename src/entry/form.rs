//! Flat reading and price forms as submitted by the station screens

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::amount::RawAmount;
use crate::types::*;

/// One row of a credit, debit or packed oil list as entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLineItem {
    pub name: Option<String>,
    pub amount: RawAmount,
}

impl RawLineItem {
    fn to_line_item(&self) -> LineItem {
        LineItem::new(self.name.clone().unwrap_or_default(), self.amount.resolve())
    }
}

impl From<&LineItem> for RawLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            name: Some(item.name.clone()),
            amount: RawAmount::from(&item.amount),
        }
    }
}

/// A non-numeric entry found in a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormIssue {
    pub field: String,
    pub value: String,
}

/// Reading exactly as the entry and edit screens send it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadingForm {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub current_date: Option<String>,
    pub selected_id: Option<String>,

    pub petrol: RawAmount,
    pub diesel: RawAmount,
    pub oil: RawAmount,

    pub oil_first_reading: RawAmount,
    pub oil_first_reading2: RawAmount,
    pub oil_first_reading3: RawAmount,
    pub oil_second_reading: RawAmount,
    pub oil_second_reading2: RawAmount,
    pub oil_second_reading3: RawAmount,

    #[serde(rename = "firstReading1")]
    pub petrol_first_reading1: RawAmount,
    #[serde(rename = "firstReading2")]
    pub petrol_first_reading2: RawAmount,
    #[serde(rename = "firstReading3")]
    pub petrol_first_reading3: RawAmount,
    #[serde(rename = "secondReading1")]
    pub petrol_second_reading1: RawAmount,
    #[serde(rename = "secondReading2")]
    pub petrol_second_reading2: RawAmount,
    #[serde(rename = "secondReading3")]
    pub petrol_second_reading3: RawAmount,

    pub diesel_first_reading1: RawAmount,
    pub diesel_first_reading2: RawAmount,
    pub diesel_first_reading3: RawAmount,
    pub diesel_second_reading1: RawAmount,
    pub diesel_second_reading2: RawAmount,
    pub diesel_second_reading3: RawAmount,

    pub petrol_test_quantity: RawAmount,
    pub diesel_test_quantity: RawAmount,

    #[serde(rename = "batteryWater30")]
    pub battery_water_30: RawAmount,
    #[serde(rename = "batteryWater60")]
    pub battery_water_60: RawAmount,
    #[serde(rename = "batteryWater150")]
    pub battery_water_150: RawAmount,
    pub acid_water: RawAmount,

    pub note500: RawAmount,
    pub note200: RawAmount,
    pub note100: RawAmount,
    pub note50: RawAmount,
    pub note20: RawAmount,
    pub note10: RawAmount,
    pub note5: RawAmount,
    pub coins: RawAmount,

    pub packed_oil_entries: Vec<RawLineItem>,
    pub credit_entries: Vec<RawLineItem>,
    pub debit_entries: Vec<RawLineItem>,
}

impl ReadingForm {
    /// Every scalar numeric field with its wire name
    fn numeric_fields(&self) -> [(&'static str, &RawAmount); 35] {
        [
            ("petrol", &self.petrol),
            ("diesel", &self.diesel),
            ("oil", &self.oil),
            ("oilFirstReading", &self.oil_first_reading),
            ("oilFirstReading2", &self.oil_first_reading2),
            ("oilFirstReading3", &self.oil_first_reading3),
            ("oilSecondReading", &self.oil_second_reading),
            ("oilSecondReading2", &self.oil_second_reading2),
            ("oilSecondReading3", &self.oil_second_reading3),
            ("firstReading1", &self.petrol_first_reading1),
            ("firstReading2", &self.petrol_first_reading2),
            ("firstReading3", &self.petrol_first_reading3),
            ("secondReading1", &self.petrol_second_reading1),
            ("secondReading2", &self.petrol_second_reading2),
            ("secondReading3", &self.petrol_second_reading3),
            ("dieselFirstReading1", &self.diesel_first_reading1),
            ("dieselFirstReading2", &self.diesel_first_reading2),
            ("dieselFirstReading3", &self.diesel_first_reading3),
            ("dieselSecondReading1", &self.diesel_second_reading1),
            ("dieselSecondReading2", &self.diesel_second_reading2),
            ("dieselSecondReading3", &self.diesel_second_reading3),
            ("petrolTestQuantity", &self.petrol_test_quantity),
            ("dieselTestQuantity", &self.diesel_test_quantity),
            ("batteryWater30", &self.battery_water_30),
            ("batteryWater60", &self.battery_water_60),
            ("batteryWater150", &self.battery_water_150),
            ("acidWater", &self.acid_water),
            ("note500", &self.note500),
            ("note200", &self.note200),
            ("note100", &self.note100),
            ("note50", &self.note50),
            ("note20", &self.note20),
            ("note10", &self.note10),
            ("note5", &self.note5),
            ("coins", &self.coins),
        ]
    }

    /// Entries that were filled in but are not numbers
    ///
    /// These still resolve to zero in [`ReadingForm::to_record`]; the list is for
    /// telling the person entering the reading what to fix.
    pub fn issues(&self) -> Vec<FormIssue> {
        let mut issues: Vec<FormIssue> = self
            .numeric_fields()
            .iter()
            .filter(|(_, raw)| raw.is_invalid())
            .map(|(field, raw)| FormIssue {
                field: field.to_string(),
                value: raw.display_value(),
            })
            .collect();

        let lists = [
            ("packedOilEntries", &self.packed_oil_entries),
            ("creditEntries", &self.credit_entries),
            ("debitEntries", &self.debit_entries),
        ];
        for (list_name, entries) in lists {
            for (index, entry) in entries.iter().enumerate() {
                if entry.amount.is_invalid() {
                    issues.push(FormIssue {
                        field: format!("{}[{}].amount", list_name, index),
                        value: entry.amount.display_value(),
                    });
                }
            }
        }

        issues
    }

    /// Normalize the form into a reading
    ///
    /// The date and staff member are required; every numeric field that is missing
    /// or not a number becomes zero.
    pub fn to_record(&self) -> StationResult<ReadingRecord> {
        let date_text = self.current_date.as_deref().unwrap_or_default().trim();
        if date_text.is_empty() {
            return Err(StationError::Validation("Date is required".to_string()));
        }
        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|_| {
            StationError::InvalidField {
                field: "currentDate".to_string(),
                value: date_text.to_string(),
            }
        })?;

        let staff_id = self.selected_id.as_deref().unwrap_or_default().trim();
        if staff_id.is_empty() {
            return Err(StationError::Validation(
                "Staff must be selected".to_string(),
            ));
        }

        let unit_prices = UnitPrices::new(
            self.petrol.resolve(),
            self.diesel.resolve(),
            self.oil.resolve(),
        );

        let mut record = ReadingRecord::new(date, staff_id.to_string(), unit_prices);
        record.id = self.id.clone().unwrap_or_default();

        record.meter_readings = MeterReadings {
            oil: heads(
                [
                    &self.oil_first_reading,
                    &self.oil_first_reading2,
                    &self.oil_first_reading3,
                ],
                [
                    &self.oil_second_reading,
                    &self.oil_second_reading2,
                    &self.oil_second_reading3,
                ],
            ),
            petrol: heads(
                [
                    &self.petrol_first_reading1,
                    &self.petrol_first_reading2,
                    &self.petrol_first_reading3,
                ],
                [
                    &self.petrol_second_reading1,
                    &self.petrol_second_reading2,
                    &self.petrol_second_reading3,
                ],
            ),
            diesel: heads(
                [
                    &self.diesel_first_reading1,
                    &self.diesel_first_reading2,
                    &self.diesel_first_reading3,
                ],
                [
                    &self.diesel_second_reading1,
                    &self.diesel_second_reading2,
                    &self.diesel_second_reading3,
                ],
            ),
        };

        record.test_quantities = TestQuantities {
            petrol: self.petrol_test_quantity.resolve(),
            diesel: self.diesel_test_quantity.resolve(),
        };
        record.battery_water = BatteryWater {
            count_30: self.battery_water_30.resolve(),
            count_60: self.battery_water_60.resolve(),
            count_150: self.battery_water_150.resolve(),
        };
        record.acid_water = self.acid_water.resolve();

        record.packed_oil_entries = line_items(&self.packed_oil_entries);
        record.credit_entries = line_items(&self.credit_entries);
        record.debit_entries = line_items(&self.debit_entries);

        record.denomination = Denomination {
            note_500: self.note500.resolve(),
            note_200: self.note200.resolve(),
            note_100: self.note100.resolve(),
            note_50: self.note50.resolve(),
            note_20: self.note20.resolve(),
            note_10: self.note10.resolve(),
            note_5: self.note5.resolve(),
            coins: self.coins.resolve(),
        };

        Ok(record)
    }

    /// Flatten a stored reading back into form shape, for the edit screen
    pub fn from_record(record: &ReadingRecord) -> Self {
        let oil = &record.meter_readings.oil.heads;
        let petrol = &record.meter_readings.petrol.heads;
        let diesel = &record.meter_readings.diesel.heads;
        let cash = &record.denomination;

        Self {
            id: (!record.id.is_empty()).then(|| record.id.clone()),
            current_date: Some(record.date.format("%Y-%m-%d").to_string()),
            selected_id: Some(record.staff_id.clone()),

            petrol: (&record.unit_prices.petrol).into(),
            diesel: (&record.unit_prices.diesel).into(),
            oil: (&record.unit_prices.oil).into(),

            oil_first_reading: (&oil[0].first).into(),
            oil_first_reading2: (&oil[1].first).into(),
            oil_first_reading3: (&oil[2].first).into(),
            oil_second_reading: (&oil[0].second).into(),
            oil_second_reading2: (&oil[1].second).into(),
            oil_second_reading3: (&oil[2].second).into(),

            petrol_first_reading1: (&petrol[0].first).into(),
            petrol_first_reading2: (&petrol[1].first).into(),
            petrol_first_reading3: (&petrol[2].first).into(),
            petrol_second_reading1: (&petrol[0].second).into(),
            petrol_second_reading2: (&petrol[1].second).into(),
            petrol_second_reading3: (&petrol[2].second).into(),

            diesel_first_reading1: (&diesel[0].first).into(),
            diesel_first_reading2: (&diesel[1].first).into(),
            diesel_first_reading3: (&diesel[2].first).into(),
            diesel_second_reading1: (&diesel[0].second).into(),
            diesel_second_reading2: (&diesel[1].second).into(),
            diesel_second_reading3: (&diesel[2].second).into(),

            petrol_test_quantity: (&record.test_quantities.petrol).into(),
            diesel_test_quantity: (&record.test_quantities.diesel).into(),

            battery_water_30: (&record.battery_water.count_30).into(),
            battery_water_60: (&record.battery_water.count_60).into(),
            battery_water_150: (&record.battery_water.count_150).into(),
            acid_water: (&record.acid_water).into(),

            note500: (&cash.note_500).into(),
            note200: (&cash.note_200).into(),
            note100: (&cash.note_100).into(),
            note50: (&cash.note_50).into(),
            note20: (&cash.note_20).into(),
            note10: (&cash.note_10).into(),
            note5: (&cash.note_5).into(),
            coins: (&cash.coins).into(),

            packed_oil_entries: record.packed_oil_entries.iter().map(Into::into).collect(),
            credit_entries: record.credit_entries.iter().map(Into::into).collect(),
            debit_entries: record.debit_entries.iter().map(Into::into).collect(),
        }
    }
}

fn heads(first: [&RawAmount; 3], second: [&RawAmount; 3]) -> FuelHeads {
    FuelHeads::new([
        MeterHead::new(first[0].resolve(), second[0].resolve()),
        MeterHead::new(first[1].resolve(), second[1].resolve()),
        MeterHead::new(first[2].resolve(), second[2].resolve()),
    ])
}

fn line_items(entries: &[RawLineItem]) -> Vec<LineItem> {
    entries.iter().map(RawLineItem::to_line_item).collect()
}

/// Price change form; unlike readings, every price must be filled in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceForm {
    pub petrol_price: RawAmount,
    pub diesel_price: RawAmount,
    pub oil_price: RawAmount,
}

impl PriceForm {
    /// Parse the form into a price set
    pub fn to_prices(&self) -> StationResult<FuelPrices> {
        Ok(FuelPrices::new(
            self.petrol_price.strict("petrolPrice")?,
            self.diesel_price.strict("dieselPrice")?,
            self.oil_price.strict("oilPrice")?,
        ))
    }

    /// Prefill the form from the current prices
    pub fn from_prices(prices: &FuelPrices) -> Self {
        Self {
            petrol_price: (&prices.petrol).into(),
            diesel_price: (&prices.diesel).into(),
            oil_price: (&prices.oil).into(),
        }
    }
}
