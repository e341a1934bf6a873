use serde::{Deserialize, Serialize};

/// One of the nine fixed business dimensions being assessed.
///
/// The discriminant order is the catalogue order: result lists, tie-breaks and
/// status maps are all indexed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Area {
    FinancialControl,
    GrowthStrategy,
    LifestyleExit,
    MarketingLeads,
    SellingSales,
    ServiceReputation,
    DriveChange,
    PeopleManagement,
    SystemsAutomation,
}

impl Area {
    pub const COUNT: usize = 9;

    pub const ALL: [Area; Area::COUNT] = [
        Area::FinancialControl,
        Area::GrowthStrategy,
        Area::LifestyleExit,
        Area::MarketingLeads,
        Area::SellingSales,
        Area::ServiceReputation,
        Area::DriveChange,
        Area::PeopleManagement,
        Area::SystemsAutomation,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier used in persisted payloads and question records.
    pub fn id(self) -> &'static str {
        match self {
            Area::FinancialControl => "financial-control",
            Area::GrowthStrategy => "growth-strategy",
            Area::LifestyleExit => "lifestyle-exit",
            Area::MarketingLeads => "marketing-leads",
            Area::SellingSales => "selling-sales",
            Area::ServiceReputation => "service-reputation",
            Area::DriveChange => "drive-change",
            Area::PeopleManagement => "people-management",
            Area::SystemsAutomation => "systems-automation",
        }
    }

    /// Display name. Diagram input maps are keyed by this exact string.
    pub fn display_name(self) -> &'static str {
        match self {
            Area::FinancialControl => "Financial Control",
            Area::GrowthStrategy => "Growth Strategy",
            Area::LifestyleExit => "Lifestyle & Exit Plan",
            Area::MarketingLeads => "Marketing & Leads",
            Area::SellingSales => "Selling & Salespeople",
            Area::ServiceReputation => "Service & Reputation",
            Area::DriveChange => "Drive Change",
            Area::PeopleManagement => "People Management",
            Area::SystemsAutomation => "Systems & Automation",
        }
    }

    pub fn from_id(id: &str) -> Option<Area> {
        Area::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn from_display_name(name: &str) -> Option<Area> {
        Area::ALL.into_iter().find(|a| a.display_name() == name)
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_catalogue_position() {
        for (i, area) in Area::ALL.into_iter().enumerate() {
            assert_eq!(area.index(), i);
        }
    }

    #[test]
    fn ids_and_names_resolve_back() {
        for area in Area::ALL {
            assert_eq!(Area::from_id(area.id()), Some(area));
            assert_eq!(Area::from_display_name(area.display_name()), Some(area));
        }
        assert_eq!(Area::from_display_name("financial control"), None);
        assert_eq!(Area::from_id("Financial Control"), None);
    }

    #[test]
    fn serde_uses_the_stable_id() {
        let json = serde_json::to_string(&Area::LifestyleExit).unwrap();
        assert_eq!(json, r#""lifestyle-exit""#);
        let back: Area = serde_json::from_str(r#""systems-automation""#).unwrap();
        assert_eq!(back, Area::SystemsAutomation);
    }
}
