// Page domain model - the closed set of navigable dashboard pages
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Dashboard,
    Memberships,
    Enterprise,
    Analytics,
    Partners,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Memberships,
        Page::Enterprise,
        Page::Analytics,
        Page::Partners,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "WorkWave One Dashboard",
            Page::Memberships => "WorkWave Connect Memberships",
            Page::Enterprise => "Enterprise Solutions",
            Page::Analytics => "Analytics & Simulator",
            Page::Partners => "Partner Integrations",
        }
    }

    pub fn caption(&self) -> Option<&'static str> {
        match self {
            Page::Dashboard => Some("Quick snapshot of performance metrics and occupancy trends"),
            Page::Memberships => Some("Tiered virtual & hybrid plans"),
            Page::Enterprise => Some("Mock enterprise workspace overview"),
            Page::Analytics => None,
            Page::Partners => Some("UI only - tap to explore categories"),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pages_are_distinct() {
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in &Page::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_page_serde_round_trip() {
        for page in Page::ALL {
            let json = serde_json::to_string(&page).unwrap();
            let back: Page = serde_json::from_str(&json).unwrap();
            assert_eq!(page, back);
        }
    }

    #[test]
    fn test_default_page_is_dashboard() {
        assert_eq!(Page::default(), Page::Dashboard);
    }
}
