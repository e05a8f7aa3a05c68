// Provider trait for the static dashboard dataset
use crate::domain::catalog::{
    CityOccupancy, EnterpriseClient, MembershipPlan, OccupancyRevenueSample, RevenueYear,
    UtilizationSample,
};

/// Read-only access to the fixed in-memory tables. Implementations are
/// constructed once at startup and never mutated, so sharing across sessions
/// needs no locking.
pub trait DatasetProvider: Send + Sync {
    /// City occupancy rows in stored order (bar series on the Dashboard page)
    fn city_occupancy(&self) -> &[CityOccupancy];

    /// Revenue forecast rows ordered by year ascending
    fn revenue_forecast(&self) -> &[RevenueYear];

    /// Enterprise clients in table order; the first row is the selection
    /// fallback
    fn enterprise_clients(&self) -> &[EnterpriseClient];

    /// Membership plans in declared tier order
    fn membership_plans(&self) -> &[MembershipPlan];

    /// The fixed Apr-Jul utilization trend shown on the Enterprise page
    fn utilization_trend(&self) -> &[UtilizationSample];

    /// Occupancy-vs-revenue samples for the Analytics line series
    fn occupancy_vs_revenue(&self) -> &[OccupancyRevenueSample];

    /// Partner category names in display order
    fn partner_categories(&self) -> &[String];
}
