// Session state - navigation, client selection, and the what-if simulator
use crate::domain::catalog::EnterpriseClient;
use crate::domain::error::DashboardError;
use crate::domain::page::Page;

pub const OCCUPANCY_MIN: i64 = 50;
pub const OCCUPANCY_MAX: i64 = 95;
pub const BASELINE_OCCUPANCY: i64 = 68;
pub const BASE_REVENUE_CR: i64 = 540;
pub const REVENUE_PER_OCCUPANCY_POINT: i64 = 8;

/// Linear what-if model: revenue in ₹Cr for a given occupancy percent. The
/// constants are part of the contract and are recomputed on every read, never
/// cached.
pub fn simulated_revenue_cr(occupancy: i64) -> i64 {
    BASE_REVENUE_CR + (occupancy - BASELINE_OCCUPANCY) * REVENUE_PER_OCCUPANCY_POINT
}

/// Which page is active. Any page is reachable from any other; there are no
/// guarded transitions.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    page: Page,
}

impl Navigation {
    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn page(&self) -> Page {
        self.page
    }
}

/// The currently selected enterprise client, held as a weak reference by name.
#[derive(Debug, Clone)]
pub struct Selection {
    key: String,
}

impl Selection {
    pub fn new(clients: &[EnterpriseClient]) -> Self {
        Self {
            key: clients.first().map(|c| c.name.clone()).unwrap_or_default(),
        }
    }

    pub fn select(
        &mut self,
        key: &str,
        clients: &[EnterpriseClient],
    ) -> Result<(), DashboardError> {
        if clients.iter().any(|c| c.name == key) {
            self.key = key.to_string();
            Ok(())
        } else {
            Err(DashboardError::ClientNotFound(key.to_string()))
        }
    }

    /// Resolves the stored key against the table. A stale key self-heals to
    /// the first client in table order and the stored key is re-pointed; this
    /// is recovery, not an error. Returns `None` only for an empty table.
    pub fn current<'a>(
        &mut self,
        clients: &'a [EnterpriseClient],
    ) -> Option<&'a EnterpriseClient> {
        if let Some(client) = clients.iter().find(|c| c.name == self.key) {
            return Some(client);
        }
        let first = clients.first()?;
        tracing::debug!(stale = %self.key, healed = %first.name, "selection self-healed");
        self.key = first.name.clone();
        Some(first)
    }
}

/// The occupancy input for the Analytics what-if simulator.
#[derive(Debug, Clone)]
pub struct Simulator {
    occupancy: i64,
}

impl Simulator {
    pub fn new() -> Self {
        Self {
            occupancy: BASELINE_OCCUPANCY,
        }
    }

    /// Out-of-range inputs are silently clamped, not rejected. Callers must
    /// not assume echo of the raw input.
    pub fn set_occupancy(&mut self, value: i64) {
        self.occupancy = value.clamp(OCCUPANCY_MIN, OCCUPANCY_MAX);
    }

    pub fn occupancy(&self) -> i64 {
        self.occupancy
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// One user's session: created with defaults at session start, mutated in
/// place on interaction events, discarded at session end.
#[derive(Debug, Clone)]
pub struct Session {
    pub navigation: Navigation,
    pub selection: Selection,
    pub simulator: Simulator,
}

impl Session {
    pub fn new(clients: &[EnterpriseClient]) -> Self {
        Self {
            navigation: Navigation::default(),
            selection: Selection::new(clients),
            simulator: Simulator::new(),
        }
    }
}
