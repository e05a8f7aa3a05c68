// Static in-memory dataset - the fixed tables behind every page
use crate::application::dataset::DatasetProvider;
use crate::domain::catalog::{
    CityOccupancy, ClientStatus, EnterpriseClient, MembershipPlan, OccupancyRevenueSample,
    RevenueYear, UtilizationSample,
};

/// Built once at process start and shared read-only across all sessions.
pub struct StaticDataset {
    cities: Vec<CityOccupancy>,
    revenue: Vec<RevenueYear>,
    clients: Vec<EnterpriseClient>,
    plans: Vec<MembershipPlan>,
    utilization: Vec<UtilizationSample>,
    occupancy_revenue: Vec<OccupancyRevenueSample>,
    partners: Vec<String>,
}

impl StaticDataset {
    pub fn new() -> Self {
        Self {
            cities: vec![
                CityOccupancy::new("Mumbai", 72),
                CityOccupancy::new("Delhi", 66),
                CityOccupancy::new("Bengaluru", 78),
                CityOccupancy::new("Pune", 85),
                CityOccupancy::new("Kolkata", 63),
                CityOccupancy::new("Ahmedabad", 60),
            ],
            revenue: vec![
                RevenueYear::new(2024, 540),
                RevenueYear::new(2025, 620),
                RevenueYear::new(2026, 780),
                RevenueYear::new(2027, 1020),
            ],
            clients: vec![
                EnterpriseClient::new("TechNova", 120, "Pune", ClientStatus::Active),
                EnterpriseClient::new("FinSol", 80, "Bengaluru", ClientStatus::Active),
                EnterpriseClient::new("RetailWave", 60, "Mumbai", ClientStatus::Pilot),
            ],
            plans: vec![
                MembershipPlan::new(
                    "Basic",
                    "₹499 / mo",
                    &["Community Access", "Monthly Events", "Job Board"],
                ),
                MembershipPlan::new(
                    "Pro",
                    "₹1299 / mo",
                    &[
                        "All Basic + Meeting Hours",
                        "On-Demand Rooms",
                        "Priority Support",
                    ],
                ),
                MembershipPlan::new(
                    "Enterprise",
                    "Custom",
                    &["Corporate Billing", "Analytics Dashboard", "Custom SLAs"],
                ),
            ],
            utilization: vec![
                UtilizationSample::new("Apr", 60),
                UtilizationSample::new("May", 65),
                UtilizationSample::new("Jun", 72),
                UtilizationSample::new("Jul", 78),
            ],
            occupancy_revenue: vec![
                OccupancyRevenueSample::new(60, 480),
                OccupancyRevenueSample::new(65, 540),
                OccupancyRevenueSample::new(70, 620),
                OccupancyRevenueSample::new(75, 700),
                OccupancyRevenueSample::new(80, 820),
                OccupancyRevenueSample::new(85, 1000),
            ],
            partners: [
                "HR Tech",
                "Facility Mgmt",
                "Wellness",
                "Local Retail",
                "Legal Advisory",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
        }
    }
}

impl Default for StaticDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetProvider for StaticDataset {
    fn city_occupancy(&self) -> &[CityOccupancy] {
        &self.cities
    }

    fn revenue_forecast(&self) -> &[RevenueYear] {
        &self.revenue
    }

    fn enterprise_clients(&self) -> &[EnterpriseClient] {
        &self.clients
    }

    fn membership_plans(&self) -> &[MembershipPlan] {
        &self.plans
    }

    fn utilization_trend(&self) -> &[UtilizationSample] {
        &self.utilization
    }

    fn occupancy_vs_revenue(&self) -> &[OccupancyRevenueSample] {
        &self.occupancy_revenue
    }

    fn partner_categories(&self) -> &[String] {
        &self.partners
    }
}
