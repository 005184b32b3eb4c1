use chrono::{Local, NaiveDate, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fixed-deposit record.
///
/// `id` stays `None` until the store assigns it on insert; a record without
/// an id is a draft that has never been persisted. Both dates default to
/// today so a caller can fill in only the fields it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDeposit {
    pub id: Option<i64>,
    pub holder_name: String,
    pub bank_name: String,
    pub deposited_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub principal_amount: Decimal,
    pub maturity_amount: Decimal,
    pub interest_rate: Decimal,
    /// Deposit term in days. Stored as given; not applied to `maturity_date`.
    pub period: Option<i64>,
}

impl Default for FixedDeposit {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            id: None,
            holder_name: String::new(),
            bank_name: String::new(),
            deposited_date: today,
            maturity_date: today,
            principal_amount: Decimal::ZERO,
            maturity_amount: Decimal::ZERO,
            interest_rate: Decimal::ZERO,
            period: None,
        }
    }
}

impl FixedDeposit {
    /// The actual term of the deposit: maturity date minus deposited date.
    /// Computed on demand, never stored.
    pub fn time_period(&self) -> TimeDelta {
        self.maturity_date - self.deposited_date
    }
}
