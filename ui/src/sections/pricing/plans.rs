//! Plan catalogue and billing periods.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Monthly, BillingPeriod::Yearly];

    pub fn slug(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Yearly => "yearly",
        }
    }

    pub fn toggle_label_key(self) -> String {
        format!("pricing.billing-toggle.{}", self.slug())
    }

    pub fn per_period_key(self) -> String {
        format!("pricing.per.{}", self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanId {
    Basic,
    #[default]
    Pro,
    Enterprise,
}

impl PlanId {
    pub fn slug(self) -> &'static str {
        match self {
            PlanId::Basic => "basic",
            PlanId::Pro => "pro",
            PlanId::Enterprise => "enterprise",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: PlanId,
    /// Feature slugs under `pricing.plans.<id>.features`.
    pub features: &'static [&'static str],
    /// Limitation slugs under `pricing.plans.<id>.limitations`.
    pub limitations: &'static [&'static str],
    pub recommended: bool,
    /// Shown next to the yearly price.
    pub save_percent: Option<u8>,
    pub free: bool,
}

impl Plan {
    pub fn key(&self, field: &str) -> String {
        format!("pricing.plans.{}.{field}", self.id.slug())
    }

    pub fn price_key(&self, period: BillingPeriod) -> String {
        self.key(&format!("price.{}", period.slug()))
    }

    pub fn feature_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.features
            .iter()
            .map(|slug| self.key(&format!("features.{slug}")))
    }

    pub fn limitation_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.limitations
            .iter()
            .map(|slug| self.key(&format!("limitations.{slug}")))
    }

    /// Savings badge, only for paid plans billed yearly.
    pub fn savings(&self, period: BillingPeriod) -> Option<u8> {
        match period {
            BillingPeriod::Yearly => self.save_percent,
            BillingPeriod::Monthly => None,
        }
    }
}

pub fn plans() -> [Plan; 3] {
    [
        Plan {
            id: PlanId::Basic,
            features: &["websites", "templates", "support"],
            limitations: &["domain", "ads", "seo"],
            recommended: false,
            save_percent: None,
            free: true,
        },
        Plan {
            id: PlanId::Pro,
            features: &["websites", "templates", "support", "domain", "no-ads", "seo"],
            limitations: &[],
            recommended: true,
            save_percent: Some(20),
            free: false,
        },
        Plan {
            id: PlanId::Enterprise,
            features: &[
                "websites",
                "templates",
                "support",
                "domain",
                "no-ads",
                "seo",
                "analytics",
                "api",
            ],
            limitations: &[],
            recommended: false,
            save_percent: Some(20),
            free: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_plan_is_recommended_and_it_is_the_default() {
        let recommended: Vec<_> = plans().into_iter().filter(|p| p.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].id, PlanId::default());
    }

    #[test]
    fn keys_follow_the_plan_layout() {
        let [basic, pro, _] = plans();
        assert_eq!(pro.price_key(BillingPeriod::Yearly), "pricing.plans.pro.price.yearly");
        assert_eq!(
            basic.limitation_keys().next().as_deref(),
            Some("pricing.plans.basic.limitations.domain")
        );
        assert_eq!(pro.feature_keys().count(), 6);
    }

    #[test]
    fn savings_only_on_yearly() {
        let [basic, pro, _] = plans();
        assert_eq!(pro.savings(BillingPeriod::Monthly), None);
        assert_eq!(pro.savings(BillingPeriod::Yearly), Some(20));
        assert_eq!(basic.savings(BillingPeriod::Yearly), None);
    }
}
