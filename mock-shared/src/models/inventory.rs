use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u32,
    pub make: String,
    pub model: String,
    pub class: VehicleClass,
    pub description: String,
    pub price: u32, // whole dollars
    pub available: bool,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleClass {
    Compact,
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Truck,
    Convertible,
    Electric,
}
