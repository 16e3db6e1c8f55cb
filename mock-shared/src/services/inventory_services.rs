use crate::models::inventory::{Vehicle, VehicleClass};

const IMAGE_BASE_URL: &str = "https://mock-inventory-images.s3.amazonaws.com/vehicles";

// id, make, model, class, description, price, available
const LISTINGS: &[(u32, &str, &str, VehicleClass, &str, u32, bool)] = &[
    (1, "Toyota", "Corolla", VehicleClass::Compact, "Reliable commuter with great fuel economy.", 21_550, true),
    (2, "Honda", "Accord", VehicleClass::Sedan, "Roomy midsize sedan with adaptive cruise control.", 27_895, true),
    (3, "Ford", "Explorer", VehicleClass::Suv, "Three-row family SUV with towing package.", 36_760, false),
    (4, "Chevrolet", "Silverado 1500", VehicleClass::Truck, "Full-size pickup, crew cab, 4x4.", 38_645, true),
    (5, "Mazda", "MX-5 Miata", VehicleClass::Convertible, "Lightweight two-seat roadster.", 28_985, true),
    (6, "Tesla", "Model 3", VehicleClass::Electric, "Long range battery, autopilot included.", 40_240, false),
    (7, "Subaru", "Outback", VehicleClass::Suv, "All-wheel drive wagon with raised clearance.", 29_010, true),
    (8, "Hyundai", "Ioniq 5", VehicleClass::Electric, "Fast-charging crossover EV.", 41_800, true),
];

/// The fixed inventory the mock service returns.
pub fn list_inventory() -> Vec<Vehicle> {
    LISTINGS
        .iter()
        .map(|&(id, make, model, class, description, price, available)| Vehicle {
            id,
            make: make.to_string(),
            model: model.to_string(),
            class,
            description: description.to_string(),
            price,
            available,
            image_url: format!("{}/{}.jpg", IMAGE_BASE_URL, id),
        })
        .collect()
}
