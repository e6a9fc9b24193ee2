use crate::checkout::quote::Frequency;

/// Checkout state carried between `/planes` and `/pago` as plain-text query
/// parameters. Nothing is signed; the payment page re-resolves the plan from
/// the catalog and treats `costo` as advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutQuery {
    pub plan_id: u32,
    pub frequency: Frequency,
    pub cost: f64,
}

impl CheckoutQuery {
    pub fn to_query_string(&self) -> String {
        format!(
            "planId={}&frecuencia={}&costo={}",
            self.plan_id,
            urlencoding::encode(self.frequency.as_param()),
            urlencoding::encode(&format!("{:.2}", self.cost)),
        )
    }

    /// Rebuilds the checkout state from the decoded parameter values.
    /// Any missing or malformed parameter invalidates the whole set.
    pub fn from_params(
        plan_id: Option<&str>,
        frecuencia: Option<&str>,
        costo: Option<&str>,
    ) -> Option<Self> {
        let plan_id = plan_id?.trim().parse().ok()?;
        let frequency = Frequency::from_param(frecuencia?.trim())?;
        let cost: f64 = costo?.trim().parse().ok()?;
        if !cost.is_finite() || cost < 0.0 {
            return None;
        }
        Some(Self {
            plan_id,
            frequency,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_carries_all_three_parameters() {
        let query = CheckoutQuery {
            plan_id: 2,
            frequency: Frequency::Annual,
            cost: 90.0,
        };
        assert_eq!(query.to_query_string(), "planId=2&frecuencia=anual&costo=90.00");
    }

    #[test]
    fn parameters_round_trip() {
        let query = CheckoutQuery {
            plan_id: 3,
            frequency: Frequency::Monthly,
            cost: 25.5,
        };
        let rebuilt = CheckoutQuery::from_params(Some("3"), Some("mensual"), Some("25.50"));
        assert_eq!(rebuilt, Some(query));
    }

    #[test]
    fn missing_or_malformed_parameters_invalidate_the_set() {
        assert_eq!(CheckoutQuery::from_params(None, Some("anual"), Some("90.00")), None);
        assert_eq!(CheckoutQuery::from_params(Some("2"), None, Some("90.00")), None);
        assert_eq!(CheckoutQuery::from_params(Some("2"), Some("anual"), None), None);
        assert_eq!(
            CheckoutQuery::from_params(Some("dos"), Some("anual"), Some("90.00")),
            None
        );
        assert_eq!(
            CheckoutQuery::from_params(Some("2"), Some("semanal"), Some("90.00")),
            None
        );
        assert_eq!(
            CheckoutQuery::from_params(Some("2"), Some("anual"), Some("-5")),
            None
        );
    }
}
