use serde::Serialize;

/// Declares what [`summarize`] should compute. Every part is optional and
/// the pass over the view runs once regardless of how many are set.
pub struct AggregationSpec<R> {
    /// Numeric field feeding `sum` and `average`.
    pub sum: Option<fn(&R) -> f64>,
    /// Categorical breakdown, weighted per record.
    pub breakdown: Option<BreakdownSpec<R>>,
    /// Numeric field feeding `min` and `max`.
    pub range: Option<fn(&R) -> f64>,
}

impl<R> Default for AggregationSpec<R> {
    fn default() -> Self {
        Self {
            sum: None,
            breakdown: None,
            range: None,
        }
    }
}

pub struct BreakdownSpec<R> {
    pub category: fn(&R) -> String,
    pub weight: BreakdownWeight<R>,
}

pub enum BreakdownWeight<R> {
    /// Each record contributes 1.
    Count,
    /// Each record contributes the field value.
    Sum(fn(&R) -> f64),
}

/// One breakdown bucket. Buckets keep first-encountered order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryWeight {
    pub category: String,
    pub weight: f64,
}

/// Aggregates over a derived view. Empty views produce zeroes, never NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub count: usize,
    pub sum: f64,
    pub average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub breakdown: Vec<CategoryWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_category: Option<String>,
}

/// Single pass over `view` computing whatever `spec` asks for.
pub fn summarize<R>(view: &[R], spec: &AggregationSpec<R>) -> AggregateSummary {
    let mut summary = AggregateSummary {
        count: view.len(),
        ..AggregateSummary::default()
    };

    for record in view {
        if let Some(read) = spec.sum {
            summary.sum += read(record);
        }

        if let Some(read) = spec.range {
            let value = read(record);
            summary.min = Some(summary.min.map_or(value, |current| current.min(value)));
            summary.max = Some(summary.max.map_or(value, |current| current.max(value)));
        }

        if let Some(breakdown) = &spec.breakdown {
            let category = (breakdown.category)(record);
            let weight = match breakdown.weight {
                BreakdownWeight::Count => 1.0,
                BreakdownWeight::Sum(read) => read(record),
            };
            match summary
                .breakdown
                .iter_mut()
                .find(|bucket| bucket.category == category)
            {
                Some(bucket) => bucket.weight += weight,
                None => summary.breakdown.push(CategoryWeight { category, weight }),
            }
        }
    }

    if summary.count > 0 && spec.sum.is_some() {
        summary.average = summary.sum / summary.count as f64;
    }
    summary.top_category = top_category(&summary.breakdown);

    summary
}

/// Largest weight wins; ties keep the bucket encountered first.
fn top_category(breakdown: &[CategoryWeight]) -> Option<String> {
    let mut top: Option<&CategoryWeight> = None;
    for bucket in breakdown {
        if top.map_or(true, |current| bucket.weight > current.weight) {
            top = Some(bucket);
        }
    }
    top.map(|bucket| bucket.category.clone())
}

/// Share of records matching `predicate`, as a whole percentage rounded to
/// the nearest point. An empty view reports 0 rather than dividing by zero.
pub fn percent_of<R>(view: &[R], predicate: impl Fn(&R) -> bool) -> u8 {
    if view.is_empty() {
        return 0;
    }
    let matching = view.iter().filter(|record| predicate(record)).count();
    ((matching as f64 / view.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Purchase {
        category: &'static str,
        amount: f64,
    }

    fn purchases() -> Vec<Purchase> {
        vec![
            Purchase {
                category: "dining",
                amount: 10.0,
            },
            Purchase {
                category: "gas",
                amount: 20.0,
            },
            Purchase {
                category: "dining",
                amount: 5.0,
            },
        ]
    }

    fn amount_of(purchase: &Purchase) -> f64 {
        purchase.amount
    }

    fn category_of(purchase: &Purchase) -> String {
        purchase.category.to_string()
    }

    #[test]
    fn empty_view_summarizes_to_zeroes() {
        let spec = AggregationSpec {
            sum: Some(amount_of),
            range: Some(amount_of),
            ..AggregationSpec::default()
        };

        let summary = summarize::<Purchase>(&[], &spec);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.sum, 0.0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
        assert_eq!(summary.top_category, None);
    }

    #[test]
    fn sum_average_and_range_in_one_pass() {
        let spec = AggregationSpec {
            sum: Some(amount_of),
            range: Some(amount_of),
            ..AggregationSpec::default()
        };

        let summary = summarize(&purchases(), &spec);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.sum, 35.0);
        assert!((summary.average - 35.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(summary.min, Some(5.0));
        assert_eq!(summary.max, Some(20.0));
    }

    #[test]
    fn breakdown_sums_by_category_and_picks_the_top() {
        let spec = AggregationSpec {
            breakdown: Some(BreakdownSpec {
                category: category_of,
                weight: BreakdownWeight::Sum(amount_of),
            }),
            ..AggregationSpec::default()
        };

        let summary = summarize(&purchases(), &spec);
        assert_eq!(
            summary.breakdown,
            vec![
                CategoryWeight {
                    category: "dining".to_string(),
                    weight: 15.0,
                },
                CategoryWeight {
                    category: "gas".to_string(),
                    weight: 20.0,
                },
            ]
        );
        assert_eq!(summary.top_category.as_deref(), Some("gas"));
    }

    #[test]
    fn top_category_tie_keeps_first_encountered() {
        let view = vec![
            Purchase {
                category: "travel",
                amount: 20.0,
            },
            Purchase {
                category: "gas",
                amount: 20.0,
            },
        ];
        let spec = AggregationSpec {
            breakdown: Some(BreakdownSpec {
                category: category_of,
                weight: BreakdownWeight::Sum(amount_of),
            }),
            ..AggregationSpec::default()
        };

        let summary = summarize(&view, &spec);
        assert_eq!(summary.top_category.as_deref(), Some("travel"));
    }

    #[test]
    fn count_breakdown_weighs_each_record_once() {
        let spec = AggregationSpec {
            breakdown: Some(BreakdownSpec {
                category: category_of,
                weight: BreakdownWeight::Count,
            }),
            ..AggregationSpec::default()
        };

        let summary = summarize(&purchases(), &spec);
        assert_eq!(
            summary.breakdown,
            vec![
                CategoryWeight {
                    category: "dining".to_string(),
                    weight: 2.0,
                },
                CategoryWeight {
                    category: "gas".to_string(),
                    weight: 1.0,
                },
            ]
        );
    }

    #[test]
    fn percent_of_rounds_and_survives_emptiness() {
        let view = purchases();
        assert_eq!(percent_of(&view, |p| p.category == "dining"), 67);
        assert_eq!(percent_of::<Purchase>(&[], |_| true), 0);
    }
}
