// View model types - the fully derived, page-specific bundle handed to the
// render boundary
use super::catalog::{
    CityOccupancy, EnterpriseClient, MembershipPlan, OccupancyRevenueSample, RevenueYear,
    UtilizationSample,
};
use super::page::Page;
use serde::Serialize;

/// A single headline figure: label, display value, optional context note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub note: Option<String>,
}

impl Metric {
    pub fn new(label: &str, value: String, note: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value,
            note: note.map(|n| n.to_string()),
        }
    }
}

/// A stateless action affordance. Tapping it is a no-op hook; there is no
/// backend effect behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionButton {
    pub label: String,
}

impl ActionButton {
    pub fn new(label: String) -> Self {
        Self { label }
    }
}

/// Descriptor for the simulator slider control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderSpec {
    pub label: String,
    pub min: i64,
    pub max: i64,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub page: Page,
    pub title: String,
    pub caption: Option<String>,
    pub body: PageView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    Dashboard(DashboardView),
    Memberships(MembershipsView),
    Enterprise(EnterpriseView),
    Analytics(AnalyticsView),
    Partners(PartnersView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub metrics: Vec<Metric>,
    pub occupancy_by_city: Vec<CityOccupancy>,
    pub revenue_forecast: Vec<RevenueYear>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanCard {
    pub plan: MembershipPlan,
    pub action: ActionButton,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipsView {
    pub plans: Vec<PlanCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnterpriseView {
    pub clients: Vec<EnterpriseClient>,
    pub selected_client: Option<String>,
    pub selected_metrics: Vec<Metric>,
    pub utilization_trend: Vec<UtilizationSample>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsView {
    pub occupancy_vs_revenue: Vec<OccupancyRevenueSample>,
    pub slider: SliderSpec,
    pub simulated_revenue: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnersView {
    pub actions: Vec<ActionButton>,
}
