use crate::content::Plan;

/// Annual billing carries a 10% discount over the listed annual price.
pub const ANNUAL_DISCOUNT: f64 = 0.90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Monthly,
    Annual,
}

impl Frequency {
    /// Wire form used in the `frecuencia` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            Frequency::Monthly => "mensual",
            Frequency::Annual => "anual",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "mensual" => Some(Frequency::Monthly),
            "anual" => Some(Frequency::Annual),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Monthly => "Mensual",
            Frequency::Annual => "Anual",
        }
    }
}

/// Cost of a plan at the chosen billing frequency, rounded to cents.
pub fn quote_cost(plan: &Plan, frequency: Frequency) -> f64 {
    let cost = match frequency {
        Frequency::Monthly => plan.precio_mensual,
        Frequency::Annual => plan.precio_anual * ANNUAL_DISCOUNT,
    };
    round_cents(cost)
}

pub fn format_cost(cost: f64) -> String {
    format!("${:.2}", cost)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(monthly: f64, annual: f64) -> Plan {
        Plan {
            id: 1,
            nombre: "Plan Básico".to_string(),
            precio_mensual: monthly,
            precio_anual: annual,
            beneficios: vec!["Asistencia en carretera 24/7".to_string()],
            destacado: false,
        }
    }

    #[test]
    fn monthly_quote_is_the_listed_price() {
        let p = plan(10.0, 100.0);
        assert_eq!(quote_cost(&p, Frequency::Monthly), 10.0);
        assert_eq!(format_cost(quote_cost(&p, Frequency::Monthly)), "$10.00");
    }

    #[test]
    fn annual_quote_applies_ten_percent_discount() {
        let p = plan(10.0, 100.0);
        assert_eq!(quote_cost(&p, Frequency::Annual), 90.0);
        assert_eq!(format_cost(quote_cost(&p, Frequency::Annual)), "$90.00");
    }

    #[test]
    fn annual_quote_rounds_to_cents() {
        // 185.99 * 0.90 = 167.391 -> 167.39
        let p = plan(19.0, 185.99);
        assert_eq!(quote_cost(&p, Frequency::Annual), 167.39);
        assert_eq!(format_cost(quote_cost(&p, Frequency::Annual)), "$167.39");
    }

    #[test]
    fn frequency_param_round_trip() {
        assert_eq!(Frequency::from_param("mensual"), Some(Frequency::Monthly));
        assert_eq!(Frequency::from_param("anual"), Some(Frequency::Annual));
        assert_eq!(Frequency::from_param("semanal"), None);
        assert_eq!(Frequency::Annual.as_param(), "anual");
    }
}
