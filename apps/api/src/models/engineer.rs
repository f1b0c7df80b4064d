use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engineer {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

/// Body of `POST /api/engineers`. Required fields are checked by the handler.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEngineer {
    pub name: Option<String>,
    pub role: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<String>,
}

/// Body of `PUT /api/engineers/:id`. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<String>,
}

impl Engineer {
    pub fn apply(&mut self, update: EngineerUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if update.hourly_rate.is_some() {
            self.hourly_rate = update.hourly_rate;
        }
        if update.availability.is_some() {
            self.availability = update.availability;
        }
    }
}
