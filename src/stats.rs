//! Summary statistics over plain numbers and user-shaped data.

use serde::{Deserialize, Serialize};

/// Mean, extremes, and count of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Largest value.
    pub max: f64,
    /// Smallest value.
    pub min: f64,
    /// Number of values.
    pub count: usize,
}

/// Compute [`Statistics`] for `data`; an empty slice gives all zeros.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_statistics(data: &[f64]) -> Statistics {
    let Some((&first, _)) = data.split_first() else {
        return Statistics::default();
    };
    let (sum, min, max) = data
        .iter()
        .fold((0.0, first, first), |(sum, min, max), &v| {
            (sum + v, min.min(v), max.max(v))
        });
    Statistics {
        mean: sum / data.len() as f64,
        max,
        min,
        count: data.len(),
    }
}

/// Head counts per age bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroups {
    /// Ages 0 through 25.
    pub young: usize,
    /// Ages 26 through 50.
    pub adult: usize,
    /// Ages 51 and up.
    pub senior: usize,
}

/// Bucket ages into [`AgeGroups`]. `None` counts as 0; negative ages are skipped.
#[must_use]
pub fn count_age_groups<I>(ages: I) -> AgeGroups
where
    I: IntoIterator<Item = Option<i64>>,
{
    let mut groups = AgeGroups::default();
    for age in ages {
        match age.unwrap_or(0) {
            a if a < 0 => {}
            0..=25 => groups.young += 1,
            26..=50 => groups.adult += 1,
            _ => groups.senior += 1,
        }
    }
    groups
}

/// One priced line of an order. Missing fields deserialize as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Number of units.
    #[serde(default)]
    pub quantity: f64,
}

/// Sum of `price * quantity` over `items`.
#[must_use]
pub fn calculate_total(items: &[LineItem]) -> f64 {
    items.iter().map(|i| i.price * i.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_of_empty_is_zero() {
        assert_eq!(calculate_statistics(&[]), Statistics::default());
    }

    #[test]
    fn statistics_of_sample() {
        let s = calculate_statistics(&[3.0, 1.0, 2.0, 6.0]);
        assert_eq!(s.count, 4);
        assert!((s.mean - 3.0).abs() < f64::EPSILON);
        assert!((s.min - 1.0).abs() < f64::EPSILON);
        assert!((s.max - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn age_groups_bucket_boundaries() {
        let ages = [25, 30, 55, 20, 26, 50, 51];
        let groups = count_age_groups(ages.into_iter().map(Some));
        assert_eq!(
            groups,
            AgeGroups {
                young: 2,
                adult: 3,
                senior: 2
            }
        );
    }

    #[test]
    fn age_groups_skip_negative_and_default_missing() {
        let groups = count_age_groups([Some(-1), None]);
        assert_eq!(groups.young, 1);
        assert_eq!(groups.adult + groups.senior, 0);
    }

    #[test]
    fn total_defaults_missing_fields() -> anyhow::Result<()> {
        let items: Vec<LineItem> = serde_json::from_str(
            r#"[{"price": 10.5, "quantity": 2}, {"price": 5.0, "quantity": 3}, {"price": 99.0}]"#,
        )?;
        assert!((calculate_total(&items) - 36.0).abs() < f64::EPSILON);
        Ok(())
    }
}
