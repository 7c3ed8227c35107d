use crate::errors::{AppError, AppResult};
use crate::models::{CallRecord, DurationField, Seconds};
use crate::query::predicates::in_window;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    /// `None` is unbounded.
    pub lower: Option<Seconds>,
    pub upper: Option<Seconds>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub field: DurationField,
    pub buckets: Vec<Bucket>,
    /// Records without the field; kept out of every bucket.
    pub excluded: usize,
}

impl Histogram {
    pub fn bucketed(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Bucketed plus excluded: the size of the input subset.
    pub fn total(&self) -> usize {
        self.bucketed() + self.excluded
    }

    pub fn count_for(&self, label: &str) -> Option<usize> {
        self.buckets.iter().find(|b| b.label == label).map(|b| b.count)
    }
}

/// Bucket `field` over `boundaries` (strictly increasing):
/// `<b0`, `b0-b1`, …, `>=b_last`. No boundaries gives one `all` bucket.
pub fn histogram<'a, I>(
    records: I,
    field: DurationField,
    boundaries: &[Seconds],
) -> AppResult<Histogram>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    validate_boundaries(boundaries)?;

    let mut buckets = empty_buckets(boundaries);
    let mut excluded = 0;

    for record in records {
        let Some(value) = record.duration(field) else {
            excluded += 1;
            continue;
        };

        let slot = buckets.iter_mut().find(|b| {
            in_window(
                value,
                b.lower.unwrap_or(f64::NEG_INFINITY),
                b.upper.unwrap_or(f64::INFINITY),
            )
        });

        match slot {
            Some(b) => b.count += 1,
            None => excluded += 1,
        }
    }

    Ok(Histogram {
        field,
        buckets,
        excluded,
    })
}

fn validate_boundaries(boundaries: &[Seconds]) -> AppResult<()> {
    if let Some(bad) = boundaries.iter().find(|b| !b.is_finite()) {
        return Err(AppError::InvalidBoundaries(format!("{bad} is not finite")));
    }

    if let Some(w) = boundaries.windows(2).find(|w| w[0] >= w[1]) {
        return Err(AppError::InvalidBoundaries(format!(
            "{} must be smaller than {}",
            w[0], w[1]
        )));
    }

    Ok(())
}

fn empty_buckets(boundaries: &[Seconds]) -> Vec<Bucket> {
    let Some((first, last)) = boundaries.first().zip(boundaries.last()) else {
        return vec![Bucket {
            label: "all".to_string(),
            lower: None,
            upper: None,
            count: 0,
        }];
    };

    let mut buckets = Vec::with_capacity(boundaries.len() + 1);

    buckets.push(Bucket {
        label: format!("<{first}"),
        lower: None,
        upper: Some(*first),
        count: 0,
    });

    for w in boundaries.windows(2) {
        buckets.push(Bucket {
            label: format!("{}-{}", w[0], w[1]),
            lower: Some(w[0]),
            upper: Some(w[1]),
            count: 0,
        });
    }

    buckets.push(Bucket {
        label: format!(">={last}"),
        lower: Some(*last),
        upper: None,
        count: 0,
    });

    buckets
}

/// Parse `5,10,20` into boundaries.
pub fn parse_boundaries(s: &str) -> AppResult<Vec<Seconds>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<f64>()
                .map_err(|_| AppError::InvalidBoundaries(format!("'{p}' is not a number")))
        })
        .collect()
}
