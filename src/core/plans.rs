//! Plan catalog
//!
//! Static, read-only table of subscription tiers. Plans are built once on first
//! access and never mutated afterwards. Plan ids are stable: the checkout page
//! and the `plan` query parameter refer to them.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Plan used whenever a lookup misses
pub const FALLBACK_PLAN_ID: &str = "pro";

/// Billing cycle for a subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Annual => "annual",
        }
    }

    /// Parse a wire id. Only the exact lowercase ids are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(BillingCycle::Monthly),
            "annual" => Some(BillingCycle::Annual),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Annual => "Annual",
        }
    }
}

/// Price of a plan for one billing cycle, in whole USD per seat per month
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BillingOption {
    pub cycle: BillingCycle,
    pub label: &'static str,
    pub price: u32,
    pub note: Option<&'static str>,
}

/// A subscription tier
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
    pub billing: Vec<BillingOption>,
    pub features: Vec<&'static str>,
}

impl Plan {
    /// Billing option for `cycle`, if configured
    pub fn price_for(&self, cycle: BillingCycle) -> Option<&BillingOption> {
        self.billing.iter().find(|option| option.cycle == cycle)
    }

    /// Whole-percent saving of annual over monthly billing
    pub fn annual_savings_percent(&self) -> u32 {
        let monthly = self.price_for(BillingCycle::Monthly).map(|o| o.price);
        let annual = self.price_for(BillingCycle::Annual).map(|o| o.price);
        match (monthly, annual) {
            (Some(m), Some(a)) if m > 0 && a < m => (m - a) * 100 / m,
            _ => 0,
        }
    }

    /// True when every cycle has exactly one billing option
    fn has_complete_billing(&self) -> bool {
        BillingCycle::ALL.iter().all(|cycle| {
            self.billing
                .iter()
                .filter(|option| option.cycle == *cycle)
                .count()
                == 1
        })
    }
}

static CATALOG: LazyLock<Vec<Plan>> = LazyLock::new(|| {
    let plans = vec![
        Plan {
            id: "starter",
            name: "Starter",
            description: "Dashboards and core reports for small teams getting started with analytics.",
            badge: None,
            billing: vec![
                BillingOption {
                    cycle: BillingCycle::Monthly,
                    label: "Monthly",
                    price: 29,
                    note: None,
                },
                BillingOption {
                    cycle: BillingCycle::Annual,
                    label: "Annual",
                    price: 24,
                    note: Some("Billed yearly"),
                },
            ],
            features: vec![
                "Up to 10 dashboards",
                "7-day data retention",
                "Email reports",
                "Community support",
            ],
        },
        Plan {
            id: "pro",
            name: "Pro",
            description: "Advanced analysis, alerts and integrations for growing teams.",
            badge: Some("Most popular"),
            billing: vec![
                BillingOption {
                    cycle: BillingCycle::Monthly,
                    label: "Monthly",
                    price: 79,
                    note: None,
                },
                BillingOption {
                    cycle: BillingCycle::Annual,
                    label: "Annual",
                    price: 64,
                    note: Some("Billed yearly"),
                },
            ],
            features: vec![
                "Unlimited dashboards",
                "13-month data retention",
                "Anomaly alerts",
                "Warehouse integrations",
                "Priority support",
            ],
        },
        Plan {
            id: "enterprise",
            name: "Enterprise",
            description: "Governance, SSO and dedicated support for large organisations.",
            badge: None,
            billing: vec![
                BillingOption {
                    cycle: BillingCycle::Monthly,
                    label: "Monthly",
                    price: 199,
                    note: None,
                },
                BillingOption {
                    cycle: BillingCycle::Annual,
                    label: "Annual",
                    price: 159,
                    note: Some("Billed yearly"),
                },
            ],
            features: vec![
                "Everything in Pro",
                "SAML single sign-on",
                "Audit logs",
                "Custom data retention",
                "Dedicated success manager",
            ],
        },
    ];

    for plan in &plans {
        debug_assert!(
            plan.has_complete_billing(),
            "plan '{}' must define exactly one billing option per cycle",
            plan.id
        );
    }
    debug_assert!(
        plans.iter().any(|p| p.id == FALLBACK_PLAN_ID),
        "fallback plan must exist in the catalog"
    );

    plans
});

/// All plans in display order
pub fn list_plans() -> &'static [Plan] {
    &CATALOG
}

/// Exact lookup by id
pub fn find_plan(id: &str) -> Option<&'static Plan> {
    CATALOG.iter().find(|plan| plan.id == id)
}

/// Case-insensitive lookup, used for ids coming from URLs
pub fn find_plan_ignore_case(id: &str) -> Option<&'static Plan> {
    CATALOG.iter().find(|plan| plan.id.eq_ignore_ascii_case(id))
}

/// Lookup by id, falling back to the default plan
pub fn get_plan(id: &str) -> &'static Plan {
    find_plan(id).unwrap_or_else(fallback_plan)
}

fn fallback_plan() -> &'static Plan {
    CATALOG
        .iter()
        .find(|plan| plan.id == FALLBACK_PLAN_ID)
        .unwrap_or(&CATALOG[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_plan_prices_every_cycle() {
        for plan in list_plans() {
            assert!(plan.has_complete_billing(), "plan {} is incomplete", plan.id);
            for cycle in BillingCycle::ALL {
                assert!(plan.price_for(cycle).is_some());
            }
        }
    }

    #[test]
    fn test_plan_ids_are_unique() {
        let ids: HashSet<_> = list_plans().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), list_plans().len());
    }

    #[test]
    fn test_get_plan_falls_back_to_pro() {
        assert_eq!(get_plan("enterprise").id, "enterprise");
        assert_eq!(get_plan("doesnotexist").id, "pro");
        assert_eq!(get_plan("").id, "pro");
    }

    #[test]
    fn test_find_plan_is_exact() {
        assert!(find_plan("starter").is_some());
        assert!(find_plan("STARTER").is_none());
        assert_eq!(find_plan_ignore_case("STARTER").map(|p| p.id), Some("starter"));
    }

    #[test]
    fn test_pro_annual_price() {
        let pro = get_plan("pro");
        assert_eq!(pro.price_for(BillingCycle::Annual).map(|o| o.price), Some(64));
        assert_eq!(pro.price_for(BillingCycle::Monthly).map(|o| o.price), Some(79));
    }

    #[test]
    fn test_annual_savings_percent() {
        // (79 - 64) * 100 / 79 = 18
        assert_eq!(get_plan("pro").annual_savings_percent(), 18);
        // (29 - 24) * 100 / 29 = 17
        assert_eq!(get_plan("starter").annual_savings_percent(), 17);
    }

    #[test]
    fn test_billing_cycle_parse() {
        assert_eq!(BillingCycle::parse("monthly"), Some(BillingCycle::Monthly));
        assert_eq!(BillingCycle::parse("annual"), Some(BillingCycle::Annual));
        assert_eq!(BillingCycle::parse("Annual"), None);
        assert_eq!(BillingCycle::parse("weekly"), None);
    }

    #[test]
    fn test_billing_cycle_serde_ids() {
        let json = serde_json::to_string(&BillingCycle::Annual).unwrap();
        assert_eq!(json, "\"annual\"");
        let back: BillingCycle = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(back, BillingCycle::Monthly);
    }
}
