use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::Row;

use crate::database::models::{FdField, FieldValue, FixedDeposit};
use crate::error::StoreError;

use super::connection::FdStore;

/*
CRUD (Create, Read, Update, Delete) logic for the fixed_deposits table.
Decimal columns are stored as TEXT and converted with to_string/from_str so
amounts never pass through binary floating point.
 */

const SELECT_COLUMNS: &str = r#"
    SELECT
        id,
        holder_name,
        bank_name,
        deposited_date,
        maturity_date,
        principal_amount,
        maturity_amount,
        interest_rate,
        period
    FROM fixed_deposits
"#;

impl FdStore {
    // Create a fixed deposit. Any id on the draft is ignored; the store
    // assigns a fresh one and returns the persisted record carrying it.
    pub async fn create(&self, draft: &FixedDeposit) -> Result<FixedDeposit, StoreError> {
        let mut tx = self.pool().begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO fixed_deposits (
                holder_name, bank_name, deposited_date, maturity_date,
                principal_amount, maturity_amount, interest_rate, period
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&draft.holder_name)
        .bind(&draft.bank_name)
        .bind(draft.deposited_date)
        .bind(draft.maturity_date)
        .bind(decimal_text(draft.principal_amount))
        .bind(decimal_text(draft.maturity_amount))
        .bind(decimal_text(draft.interest_rate))
        .bind(draft.period)
        .fetch_one(&mut *tx)
        .await?;

        let id: i64 = row.try_get("id")?;
        tx.commit().await?;

        tracing::debug!(id, "fixed deposit created");

        let mut saved = draft.clone();
        saved.id = Some(id);
        Ok(saved)
    }

    // Retrieve fixed deposits.
    //
    // An empty filter with no limit returns every row in store order. A
    // non-empty filter is an equality conjunction over the named fields.
    // Stating a filter and a limit at the same time is a caller bug and is
    // rejected before the database is touched, as is any field name outside
    // the known column set.
    pub async fn select(
        &self,
        filter: &[(&str, FieldValue)],
        limit: Option<i64>,
    ) -> Result<Vec<FixedDeposit>, StoreError> {
        if !filter.is_empty() && limit.is_some() {
            return Err(StoreError::FilterWithLimit);
        }

        let mut fields = Vec::with_capacity(filter.len());
        for (name, value) in filter {
            fields.push((FdField::parse(name)?, value));
        }

        let mut sql = String::from(SELECT_COLUMNS);
        if !fields.is_empty() {
            let clauses: Vec<String> = fields
                .iter()
                .map(|(field, _)| format!("{} = ?", field.column()))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        if limit.is_some() {
            sql.push_str(" LIMIT ?");
        }

        let mut query = sqlx::query(&sql);
        for (_, value) in &fields {
            query = bind_value(query, value);
        }
        if let Some(count) = limit {
            query = query.bind(count);
        }

        let rows = query.fetch_all(self.pool()).await?;
        rows.iter()
            .map(fd_from_row)
            .collect::<Result<Vec<FixedDeposit>, sqlx::Error>>()
            .map_err(StoreError::from)
    }

    // Partial update: fetch by id, patch the named fields, write the full
    // record back. Ok(false) means the id does not exist and nothing was
    // written. Field names are validated against the column set before any
    // write happens; the id itself is never patchable.
    pub async fn update(
        &self,
        id: i64,
        changes: &[(&str, FieldValue)],
    ) -> Result<bool, StoreError> {
        let mut parsed = Vec::with_capacity(changes.len());
        for (name, value) in changes {
            parsed.push((FdField::parse(name)?, value));
        }

        let mut tx = self.pool().begin().await?;

        let sql = format!("{SELECT_COLUMNS} WHERE id = ?");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&mut *tx).await?;
        let Some(row) = row else {
            // dropping the transaction rolls it back
            return Ok(false);
        };

        let mut fd = fd_from_row(&row)?;
        for (field, value) in parsed {
            field.apply(&mut fd, value)?;
        }

        sqlx::query(
            r#"
            UPDATE fixed_deposits
            SET holder_name = ?, bank_name = ?, deposited_date = ?,
                maturity_date = ?, principal_amount = ?, maturity_amount = ?,
                interest_rate = ?, period = ?
            WHERE id = ?
            "#,
        )
        .bind(&fd.holder_name)
        .bind(&fd.bank_name)
        .bind(fd.deposited_date)
        .bind(fd.maturity_date)
        .bind(decimal_text(fd.principal_amount))
        .bind(decimal_text(fd.maturity_amount))
        .bind(decimal_text(fd.interest_rate))
        .bind(fd.period)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id, "fixed deposit updated");
        Ok(true)
    }

    // Delete by id. Ok(false) when the id was already gone, so deleting
    // twice is safe.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut tx = self.pool().begin().await?;

        let result = sqlx::query("DELETE FROM fixed_deposits WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let removed = result.rows_affected() > 0;
        if removed {
            tracing::debug!(id, "fixed deposit deleted");
        }
        Ok(removed)
    }

    // Convenience read with no filter and no limit. Unlike select, this one
    // degrades failures to an empty collection instead of surfacing them;
    // the warning log is the only diagnostic channel.
    pub async fn all(&self) -> Vec<FixedDeposit> {
        match self.select(&[], None).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("listing fixed deposits failed, returning none: {err}");
                Vec::new()
            }
        }
    }
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &FieldValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        FieldValue::Int(v) => query.bind(*v),
        FieldValue::Text(v) => query.bind(v.clone()),
        FieldValue::Date(v) => query.bind(*v),
        FieldValue::MaybeInt(v) => query.bind(*v),
        // decimals are compared against their stored TEXT form
        FieldValue::Decimal(v) => query.bind(decimal_text(*v)),
    }
}

// Canonical TEXT form for a decimal column. Trailing zeros are stripped so
// that 7.5 and 7.50 serialize identically; otherwise a filter on one scale
// would silently miss a row stored at another.
fn decimal_text(value: Decimal) -> String {
    value.normalize().to_string()
}

fn fd_from_row(row: &SqliteRow) -> Result<FixedDeposit, sqlx::Error> {
    Ok(FixedDeposit {
        id: Some(row.try_get("id")?),
        holder_name: row.try_get("holder_name")?,
        bank_name: row.try_get("bank_name")?,
        deposited_date: row.try_get("deposited_date")?,
        maturity_date: row.try_get("maturity_date")?,
        principal_amount: decimal_column(row, "principal_amount")?,
        maturity_amount: decimal_column(row, "maturity_amount")?,
        interest_rate: decimal_column(row, "interest_rate")?,
        period: row.try_get("period")?,
    })
}

// convert the stored TEXT to Decimal
fn decimal_column(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let text: String = row.try_get(column)?;
    Decimal::from_str(&text)
        .map_err(|e| sqlx::Error::Decode(format!("Invalid Decimal format for {column}: {e}").into()))
}
