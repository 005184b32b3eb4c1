use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::StoreError;

use super::FixedDeposit;

/// The closed set of column identifiers callers may name in a filter or a
/// partial update. Anything outside this set is a contract violation, not a
/// silently ignored key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FdField {
    Id,
    HolderName,
    BankName,
    DepositedDate,
    MaturityDate,
    PrincipalAmount,
    MaturityAmount,
    InterestRate,
    Period,
}

/// A typed value for one field, as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    /// For the nullable `period` column; `None` clears it.
    MaybeInt(Option<i64>),
    Text(String),
    Date(NaiveDate),
    Decimal(Decimal),
}

impl FdField {
    /// Resolves a caller-supplied field name against the known column set.
    pub fn parse(name: &str) -> Result<Self, StoreError> {
        match name {
            "id" => Ok(Self::Id),
            "holder_name" => Ok(Self::HolderName),
            "bank_name" => Ok(Self::BankName),
            "deposited_date" => Ok(Self::DepositedDate),
            "maturity_date" => Ok(Self::MaturityDate),
            "principal_amount" => Ok(Self::PrincipalAmount),
            "maturity_amount" => Ok(Self::MaturityAmount),
            "interest_rate" => Ok(Self::InterestRate),
            "period" => Ok(Self::Period),
            other => Err(StoreError::UnknownField(other.to_string())),
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::HolderName => "holder_name",
            Self::BankName => "bank_name",
            Self::DepositedDate => "deposited_date",
            Self::MaturityDate => "maturity_date",
            Self::PrincipalAmount => "principal_amount",
            Self::MaturityAmount => "maturity_amount",
            Self::InterestRate => "interest_rate",
            Self::Period => "period",
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Self::Id | Self::Period => "integer",
            Self::HolderName | Self::BankName => "text",
            Self::DepositedDate | Self::MaturityDate => "date",
            Self::PrincipalAmount | Self::MaturityAmount | Self::InterestRate => "decimal",
        }
    }

    /// Assigns `value` to the matching field on `fd`. The id is assigned by
    /// the store exactly once and never patched.
    pub fn apply(self, fd: &mut FixedDeposit, value: &FieldValue) -> Result<(), StoreError> {
        match (self, value) {
            (Self::Id, _) => Err(StoreError::ImmutableField),
            (Self::HolderName, FieldValue::Text(v)) => {
                fd.holder_name = v.clone();
                Ok(())
            }
            (Self::BankName, FieldValue::Text(v)) => {
                fd.bank_name = v.clone();
                Ok(())
            }
            (Self::DepositedDate, FieldValue::Date(v)) => {
                fd.deposited_date = *v;
                Ok(())
            }
            (Self::MaturityDate, FieldValue::Date(v)) => {
                fd.maturity_date = *v;
                Ok(())
            }
            (Self::PrincipalAmount, FieldValue::Decimal(v)) => {
                fd.principal_amount = *v;
                Ok(())
            }
            (Self::MaturityAmount, FieldValue::Decimal(v)) => {
                fd.maturity_amount = *v;
                Ok(())
            }
            (Self::InterestRate, FieldValue::Decimal(v)) => {
                fd.interest_rate = *v;
                Ok(())
            }
            (Self::Period, FieldValue::Int(v)) => {
                fd.period = Some(*v);
                Ok(())
            }
            (Self::Period, FieldValue::MaybeInt(v)) => {
                fd.period = *v;
                Ok(())
            }
            (field, _) => Err(StoreError::InvalidValue {
                field: field.column(),
                expected: field.expected(),
            }),
        }
    }
}
