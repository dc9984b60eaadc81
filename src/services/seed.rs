//! Development data loading for the users and orders tables.
//!
//! Input is either the built-in sample set or a CSV with the header
//! `user_id,country,amount,order_date`. Loading happens in one transaction.

use std::path::Path;

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::order::OrderRecord;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error on line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Negative amount {amount} on line {line}")]
    NegativeAmount { line: usize, amount: f64 },

    #[error("User {user_id} has conflicting countries: {first} and {second}")]
    ConflictingCountry {
        user_id: i64,
        first: String,
        second: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Counts reported after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub orders: usize,
}

/// Small fixed dataset covering two months and two countries.
pub fn sample_orders() -> Vec<OrderRecord> {
    [
        (1, "UK", 100.0, (2024, 1, 15)),
        (1, "UK", 50.0, (2024, 2, 10)),
        (2, "US", 200.0, (2024, 2, 20)),
    ]
    .into_iter()
    .filter_map(|(user_id, country, amount, (y, m, d))| {
        NaiveDate::from_ymd_opt(y, m, d)
            .map(|date| OrderRecord::new(user_id, country, amount, date))
    })
    .collect()
}

/// Parse seed CSV data. Line numbers in errors count the header as line 1.
pub fn parse_csv(data: &[u8]) -> Result<Vec<OrderRecord>, SeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<OrderRecord>().enumerate() {
        let line = i + 2;
        let record = result.map_err(|source| SeedError::Csv { line, source })?;
        if record.amount < 0.0 {
            return Err(SeedError::NegativeAmount {
                line,
                amount: record.amount,
            });
        }
        records.push(record);
    }
    Ok(records)
}

/// Read and parse a seed CSV file.
pub fn read_csv(path: &Path) -> Result<Vec<OrderRecord>, SeedError> {
    let data = std::fs::read(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_csv(&data)
}

/// Distinct `(user_id, country)` pairs, rejecting users listed under two countries.
fn distinct_users(records: &[OrderRecord]) -> Result<Vec<(i64, &str)>, SeedError> {
    let mut users: std::collections::BTreeMap<i64, &str> = std::collections::BTreeMap::new();
    for record in records {
        match users.get(&record.user_id) {
            Some(existing) if *existing != record.country => {
                return Err(SeedError::ConflictingCountry {
                    user_id: record.user_id,
                    first: existing.to_string(),
                    second: record.country.clone(),
                });
            }
            Some(_) => {}
            None => {
                users.insert(record.user_id, record.country.as_str());
            }
        }
    }
    Ok(users.into_iter().collect())
}

/// Upsert the referenced users, then insert every order.
pub async fn load(pool: &PgPool, records: &[OrderRecord]) -> Result<SeedSummary, SeedError> {
    let users = distinct_users(records)?;

    let mut tx = pool.begin().await?;

    for &(user_id, country) in &users {
        sqlx::query(
            "INSERT INTO users (id, country) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET country = EXCLUDED.country",
        )
        .bind(user_id)
        .bind(country)
        .execute(&mut *tx)
        .await?;
    }

    for record in records {
        sqlx::query(
            "INSERT INTO orders (user_id, amount, order_date)
             VALUES ($1, $2::numeric, $3)",
        )
        .bind(record.user_id)
        .bind(record.amount)
        .bind(record.order_date)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(users = users.len(), orders = records.len(), "Seed data loaded");

    Ok(SeedSummary {
        users: users.len(),
        orders: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_csv_reads_typed_rows() {
        let data = b"user_id,country,amount,order_date\n7, UK ,19.99,2024-03-05\n8,France,0,2024-03-31\n";
        let rows = parse_csv(data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            OrderRecord::new(7, "UK", 19.99, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
        );
        assert_eq!(rows[1].amount, 0.0);
    }

    #[test]
    fn parse_csv_rejects_negative_amount() {
        let data = b"user_id,country,amount,order_date\n1,UK,10,2024-01-01\n2,US,-5,2024-01-02\n";
        let err = parse_csv(data).unwrap_err();
        assert!(matches!(err, SeedError::NegativeAmount { line: 3, .. }));
    }

    #[test]
    fn parse_csv_reports_bad_date_line() {
        let data = b"user_id,country,amount,order_date\n1,UK,10,not-a-date\n";
        let err = parse_csv(data).unwrap_err();
        assert!(matches!(err, SeedError::Csv { line: 2, .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn read_csv_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "user_id,country,amount,order_date").unwrap();
        writeln!(file, "3,Germany,12.50,2023-12-31").unwrap();

        let rows = read_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "Germany");
    }

    #[test]
    fn read_csv_missing_file() {
        let err = read_csv(Path::new("/nonexistent/orders.csv")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[test]
    fn distinct_users_collapses_repeat_customers() {
        let records = sample_orders();
        let users = distinct_users(&records).unwrap();
        assert_eq!(users, vec![(1, "UK"), (2, "US")]);
    }

    #[test]
    fn distinct_users_rejects_country_conflict() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = vec![
            OrderRecord::new(1, "UK", 1.0, date),
            OrderRecord::new(1, "US", 1.0, date),
        ];
        let err = distinct_users(&records).unwrap_err();
        assert!(matches!(err, SeedError::ConflictingCountry { user_id: 1, .. }));
    }

    #[test]
    fn sample_orders_total() {
        let total: f64 = sample_orders().iter().map(|r| r.amount).sum();
        assert_eq!(total, 350.0);
    }
}
