//! Feature table built from a fetched history window.
//! Column order is fixed: (pm2_5, pm10, no2, o3, co).

use crate::history::HourlyRecord;

pub const FEATURE_COUNT: usize = 5;

pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = ["pm2_5", "pm10", "no2", "o3", "co"];

/// Tabular view of a history window: one feature row and one NAQI target
/// per hourly record.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    pub rows: Vec<[f64; FEATURE_COUNT]>,
    pub targets: Vec<f64>,
}

impl FeatureTable {
    pub fn from_records(records: &[HourlyRecord]) -> Self {
        let mut rows = Vec::with_capacity(records.len());
        let mut targets = Vec::with_capacity(records.len());

        for r in records {
            rows.push([r.pm2_5, r.pm10, r.no2, r.o3, r.co]);
            targets.push(r.naqi);
        }

        Self { rows, targets }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-column mean of the feature matrix. Zeros for an empty table.
    pub fn column_means(&self) -> [f64; FEATURE_COUNT] {
        let mut means = [0.0; FEATURE_COUNT];
        if self.rows.is_empty() {
            return means;
        }

        for row in &self.rows {
            for (m, v) in means.iter_mut().zip(row.iter()) {
                *m += v;
            }
        }

        let n = self.rows.len() as f64;
        for m in &mut means {
            *m /= n;
        }
        means
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pm2_5: f64, pm10: f64, no2: f64, o3: f64, co: f64, naqi: f64) -> HourlyRecord {
        HourlyRecord {
            timestamp: None,
            pm2_5,
            pm10,
            no2,
            o3,
            co,
            naqi,
        }
    }

    #[test]
    fn test_from_records_preserves_order_and_targets() {
        let table = FeatureTable::from_records(&[
            record(10.0, 20.0, 30.0, 40.0, 50.0, 80.0),
            record(1.0, 2.0, 3.0, 4.0, 5.0, 40.0),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0], [10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(table.targets, vec![80.0, 40.0]);
    }

    #[test]
    fn test_column_means() {
        let table = FeatureTable::from_records(&[
            record(10.0, 20.0, 30.0, 40.0, 50.0, 80.0),
            record(20.0, 40.0, 10.0, 20.0, 30.0, 60.0),
        ]);
        assert_eq!(table.column_means(), [15.0, 30.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_empty_table_means_are_zero() {
        let table = FeatureTable::from_records(&[]);
        assert!(table.is_empty());
        assert_eq!(table.column_means(), [0.0; FEATURE_COUNT]);
    }
}
