// Static catalog record models
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityOccupancy {
    pub city: String,
    pub occupancy: i64,
}

impl CityOccupancy {
    pub fn new(city: &str, occupancy: i64) -> Self {
        Self {
            city: city.to_string(),
            occupancy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueYear {
    pub year: i32,
    pub revenue_cr: i64,
}

impl RevenueYear {
    pub fn new(year: i32, revenue_cr: i64) -> Self {
        Self { year, revenue_cr }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClientStatus {
    Active,
    Pilot,
    Churned,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Pilot => "Pilot",
            ClientStatus::Churned => "Churned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnterpriseClient {
    pub name: String,
    pub seats: u32,
    pub city: String,
    pub status: ClientStatus,
}

impl EnterpriseClient {
    pub fn new(name: &str, seats: u32, city: &str, status: ClientStatus) -> Self {
        Self {
            name: name.to_string(),
            seats,
            city: city.to_string(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipPlan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}

impl MembershipPlan {
    pub fn new(name: &str, price: &str, features: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationSample {
    pub month: String,
    pub utilization: i64,
}

impl UtilizationSample {
    pub fn new(month: &str, utilization: i64) -> Self {
        Self {
            month: month.to_string(),
            utilization,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyRevenueSample {
    pub occupancy: i64,
    pub revenue_cr: i64,
}

impl OccupancyRevenueSample {
    pub fn new(occupancy: i64, revenue_cr: i64) -> Self {
        Self {
            occupancy,
            revenue_cr,
        }
    }
}
