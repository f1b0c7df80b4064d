//! Request validation for dashboard records. Blank strings count as missing.

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::calendar::{CalendarEntry, NewCalendarEntry, TimeOffType};
use crate::models::engineer::{Engineer, NewEngineer};
use crate::models::pricing::{NewPriceItem, PriceItem, DEFAULT_UNIT};

pub const ENGINEER_REQUIRED: &str = "Name and role are required";
pub const CALENDAR_REQUIRED: &str = "Engineer ID, date, and type are required";
pub const PRICE_REQUIRED: &str = "Service name and price are required";

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Builds an engineer with an empty id; the store assigns the real one.
pub fn validate_new_engineer(req: NewEngineer) -> Result<Engineer, AppError> {
    let (Some(name), Some(role)) = (present(req.name), present(req.role)) else {
        return Err(AppError::Validation(ENGINEER_REQUIRED.to_string()));
    };
    if matches!(req.hourly_rate, Some(rate) if !rate.is_finite() || rate < 0.0) {
        return Err(AppError::Validation(
            "hourlyRate must be a non-negative number".to_string(),
        ));
    }
    Ok(Engineer {
        id: String::new(),
        name,
        role,
        hourly_rate: req.hourly_rate,
        availability: present(req.availability),
    })
}

pub fn validate_new_calendar_entry(req: NewCalendarEntry) -> Result<CalendarEntry, AppError> {
    let (Some(engineer_id), Some(date), Some(entry_type)) = (
        present(req.engineer_id),
        present(req.date),
        present(req.entry_type),
    ) else {
        return Err(AppError::Validation(CALENDAR_REQUIRED.to_string()));
    };

    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date '{date}', expected YYYY-MM-DD")))?;
    let entry_type = parse_time_off_type(&entry_type)?;

    Ok(CalendarEntry {
        id: String::new(),
        engineer_id,
        date,
        entry_type,
        description: present(req.description),
    })
}

fn parse_time_off_type(raw: &str) -> Result<TimeOffType, AppError> {
    match raw.to_lowercase().as_str() {
        "vacation" => Ok(TimeOffType::Vacation),
        "sick" => Ok(TimeOffType::Sick),
        "holiday" => Ok(TimeOffType::Holiday),
        "training" => Ok(TimeOffType::Training),
        _ => Err(AppError::Validation(format!(
            "Invalid type '{raw}', expected one of vacation, sick, holiday, training"
        ))),
    }
}

pub fn validate_new_price_item(req: NewPriceItem) -> Result<PriceItem, AppError> {
    let (Some(service), Some(price)) = (present(req.service), req.price) else {
        return Err(AppError::Validation(PRICE_REQUIRED.to_string()));
    };
    let price = price
        .to_f64()
        .ok_or_else(|| AppError::Validation("price must be a number".to_string()))?;

    Ok(PriceItem {
        id: String::new(),
        service,
        price,
        unit: present(req.unit).unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        description: present(req.description),
    })
}
