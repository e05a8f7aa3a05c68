// View composer - Use case for deriving the active page's view model
use crate::application::dataset::DatasetProvider;
use crate::application::session::{
    simulated_revenue_cr, Session, OCCUPANCY_MAX, OCCUPANCY_MIN,
};
use crate::domain::page::Page;
use crate::domain::view::{
    ActionButton, AnalyticsView, DashboardView, EnterpriseView, MembershipsView, Metric, PageView,
    PartnersView, PlanCard, SliderSpec, ViewModel,
};
use std::sync::Arc;

/// The single place that decides, per active page, which static data and
/// derived state reach the render boundary. Recomputed in full from current
/// state on every interaction event; nothing is patched incrementally.
#[derive(Clone)]
pub struct ViewComposer {
    dataset: Arc<dyn DatasetProvider>,
}

impl ViewComposer {
    pub fn new(dataset: Arc<dyn DatasetProvider>) -> Self {
        Self { dataset }
    }

    /// Takes the session mutably because resolving the selection may
    /// self-heal a stale key; the composed view always reflects the healed
    /// selection.
    pub fn compose(&self, session: &mut Session) -> ViewModel {
        let page = session.navigation.page();
        let body = match page {
            Page::Dashboard => PageView::Dashboard(self.dashboard_view()),
            Page::Memberships => PageView::Memberships(self.memberships_view()),
            Page::Enterprise => PageView::Enterprise(self.enterprise_view(session)),
            Page::Analytics => PageView::Analytics(self.analytics_view(session)),
            Page::Partners => PageView::Partners(self.partners_view()),
        };

        ViewModel {
            page,
            title: page.title().to_string(),
            caption: page.caption().map(|c| c.to_string()),
            body,
        }
    }

    fn dashboard_view(&self) -> DashboardView {
        // Prototype snapshot values, deliberately independent of the
        // city/revenue tables and of all session state
        let metrics = vec![
            Metric::new("Occupancy Rate", "68%".to_string(), Some("Goal 80%")),
            Metric::new("Enterprise Clients", "3".to_string(), Some("Target 10")),
            Metric::new("Cost Reduction", "₹40 Cr".to_string(), Some("Saved FY24")),
            Metric::new("Revenue", "₹540 Cr".to_string(), Some("Target ₹1000 Cr")),
        ];

        DashboardView {
            metrics,
            occupancy_by_city: self.dataset.city_occupancy().to_vec(),
            revenue_forecast: self.dataset.revenue_forecast().to_vec(),
        }
    }

    fn memberships_view(&self) -> MembershipsView {
        let plans = self
            .dataset
            .membership_plans()
            .iter()
            .map(|plan| PlanCard {
                plan: plan.clone(),
                action: ActionButton::new(format!("Request Demo for {}", plan.name)),
            })
            .collect();

        MembershipsView { plans }
    }

    fn enterprise_view(&self, session: &mut Session) -> EnterpriseView {
        let clients = self.dataset.enterprise_clients();
        let selected = session.selection.current(clients);

        let selected_metrics = selected
            .map(|client| {
                vec![
                    Metric::new("Seats", client.seats.to_string(), None),
                    Metric::new("City", client.city.clone(), None),
                    Metric::new("Status", client.status.as_str().to_string(), None),
                ]
            })
            .unwrap_or_default();

        EnterpriseView {
            clients: clients.to_vec(),
            selected_client: selected.map(|c| c.name.clone()),
            selected_metrics,
            // The trend is not client-specific; it is shown as-is for every
            // selection
            utilization_trend: self.dataset.utilization_trend().to_vec(),
        }
    }

    fn analytics_view(&self, session: &Session) -> AnalyticsView {
        let occupancy = session.simulator.occupancy();
        let revenue = simulated_revenue_cr(occupancy);

        AnalyticsView {
            occupancy_vs_revenue: self.dataset.occupancy_vs_revenue().to_vec(),
            slider: SliderSpec {
                label: "Occupancy %".to_string(),
                min: OCCUPANCY_MIN,
                max: OCCUPANCY_MAX,
                value: occupancy,
            },
            simulated_revenue: Metric::new(
                "Simulated Revenue",
                format!("₹{} Cr", revenue),
                None,
            ),
        }
    }

    fn partners_view(&self) -> PartnersView {
        let actions = self
            .dataset
            .partner_categories()
            .iter()
            .map(|category| ActionButton::new(format!("Connect {}", category)))
            .collect();

        PartnersView { actions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::static_dataset::StaticDataset;

    fn composer() -> ViewComposer {
        ViewComposer::new(Arc::new(StaticDataset::new()))
    }

    fn session(composer: &ViewComposer) -> Session {
        Session::new(composer.dataset.enterprise_clients())
    }

    #[test]
    fn test_compose_is_idempotent_for_unchanged_state() {
        let composer = composer();
        let mut session = session(&composer);
        for page in Page::ALL {
            session.navigation.set_page(page);
            let first = composer.compose(&mut session);
            let second = composer.compose(&mut session);
            assert_eq!(first, second, "page {:?}", page);
        }
    }

    #[test]
    fn test_dashboard_metrics_ignore_other_session_state() {
        let composer = composer();
        let mut session = session(&composer);
        let baseline = composer.compose(&mut session);

        let clients = composer.dataset.enterprise_clients().to_vec();
        session.selection.select("RetailWave", &clients).unwrap();
        session.simulator.set_occupancy(95);
        let mutated = composer.compose(&mut session);

        assert_eq!(baseline, mutated);
        let PageView::Dashboard(view) = mutated.body else {
            panic!("expected dashboard view");
        };
        assert_eq!(view.metrics.len(), 4);
        assert_eq!(view.metrics[0].value, "68%");
        assert_eq!(view.metrics[3].value, "₹540 Cr");
        assert_eq!(view.occupancy_by_city.len(), 6);
        assert_eq!(view.revenue_forecast.len(), 4);
    }

    #[test]
    fn test_enterprise_trend_is_identical_for_every_selection() {
        let composer = composer();
        let mut session = session(&composer);
        session.navigation.set_page(Page::Enterprise);
        let clients = composer.dataset.enterprise_clients().to_vec();

        let mut trends = Vec::new();
        for client in &clients {
            session.selection.select(&client.name, &clients).unwrap();
            let view = composer.compose(&mut session);
            let PageView::Enterprise(enterprise) = view.body else {
                panic!("expected enterprise view");
            };
            trends.push(enterprise.utilization_trend);
        }

        let expected = [("Apr", 60), ("May", 65), ("Jun", 72), ("Jul", 78)];
        for trend in &trends {
            assert_eq!(trend.len(), expected.len());
            for (sample, (month, utilization)) in trend.iter().zip(expected) {
                assert_eq!(sample.month, month);
                assert_eq!(sample.utilization, utilization);
            }
        }
    }

    #[test]
    fn test_enterprise_view_exposes_selected_client_metrics() {
        let composer = composer();
        let mut session = session(&composer);
        session.navigation.set_page(Page::Enterprise);
        let clients = composer.dataset.enterprise_clients().to_vec();
        session.selection.select("FinSol", &clients).unwrap();

        let view = composer.compose(&mut session);
        let PageView::Enterprise(enterprise) = view.body else {
            panic!("expected enterprise view");
        };
        assert_eq!(enterprise.selected_client.as_deref(), Some("FinSol"));
        let values: Vec<&str> = enterprise
            .selected_metrics
            .iter()
            .map(|m| m.value.as_str())
            .collect();
        assert_eq!(values, ["80", "Bengaluru", "Active"]);
    }

    #[test]
    fn test_analytics_view_binds_live_simulator_state() {
        let composer = composer();
        let mut session = session(&composer);
        session.navigation.set_page(Page::Analytics);

        session.simulator.set_occupancy(85);
        let view = composer.compose(&mut session);
        let PageView::Analytics(analytics) = view.body else {
            panic!("expected analytics view");
        };
        assert_eq!(analytics.slider.min, 50);
        assert_eq!(analytics.slider.max, 95);
        assert_eq!(analytics.slider.value, 85);
        assert_eq!(analytics.simulated_revenue.value, "₹676 Cr");
        assert_eq!(analytics.occupancy_vs_revenue.len(), 6);
    }

    #[test]
    fn test_memberships_and_partners_affordances() {
        let composer = composer();
        let mut session = session(&composer);

        session.navigation.set_page(Page::Memberships);
        let view = composer.compose(&mut session);
        let PageView::Memberships(memberships) = view.body else {
            panic!("expected memberships view");
        };
        let labels: Vec<&str> = memberships
            .plans
            .iter()
            .map(|p| p.action.label.as_str())
            .collect();
        assert_eq!(
            labels,
            [
                "Request Demo for Basic",
                "Request Demo for Pro",
                "Request Demo for Enterprise",
            ]
        );

        session.navigation.set_page(Page::Partners);
        let view = composer.compose(&mut session);
        let PageView::Partners(partners) = view.body else {
            panic!("expected partners view");
        };
        assert_eq!(partners.actions.len(), 5);
        assert_eq!(partners.actions[0].label, "Connect HR Tech");
    }
}
