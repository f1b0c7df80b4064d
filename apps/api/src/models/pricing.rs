use serde::{Deserialize, Serialize};

pub const DEFAULT_UNIT: &str = "each";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceItem {
    pub id: String,
    pub service: String,
    pub price: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Dashboard forms post prices either as JSON numbers or as the raw input string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            PriceInput::Number(n) => Some(*n),
            PriceInput::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|n| n.is_finite())
    }
}

/// Body of `POST /api/pricing`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPriceItem {
    pub service: Option<String>,
    pub price: Option<PriceInput>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

/// Body of `PUT /api/pricing/:id`. The price, when present, must already be valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceItemUpdate {
    pub service: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

impl PriceItem {
    pub fn apply(&mut self, update: PriceItemUpdate) {
        if let Some(service) = update.service {
            self.service = service;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_input_accepts_number_and_string() {
        let n: PriceInput = serde_json::from_str("2500").unwrap();
        let s: PriceInput = serde_json::from_str(r#"" 1999.5 ""#).unwrap();
        assert_eq!(n.to_f64(), Some(2500.0));
        assert_eq!(s.to_f64(), Some(1999.5));
    }

    #[test]
    fn test_price_input_rejects_non_numeric_text() {
        let s: PriceInput = serde_json::from_str(r#""call us""#).unwrap();
        assert_eq!(s.to_f64(), None);
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut item = PriceItem {
            id: "1".to_string(),
            service: "Docker Containerization".to_string(),
            price: 2500.0,
            unit: "project".to_string(),
            description: None,
        };
        item.apply(PriceItemUpdate {
            price: Some(3000.0),
            ..Default::default()
        });
        assert_eq!(item.price, 3000.0);
        assert_eq!(item.service, "Docker Containerization");
        assert_eq!(item.unit, "project");
    }
}
