use chrono::{DateTime, Timelike, Utc};
use derive_more::{Display, Error};
use serde::Serialize;

use super::Customer;

/// 予約
///
/// 同じ日時・人数・お客様の予約は同一の予約として扱う。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Reservation {
    requested_at: DateTime<Utc>,
    party_size: u32,
    customer: Customer,
}

impl Reservation {
    pub fn create(
        requested_at: DateTime<Utc>,
        party_size: u32,
        customer: Customer,
    ) -> Result<Self, ReservationError> {
        Self::validate_party_size(party_size)?;
        Ok(Reservation {
            requested_at,
            party_size,
            customer,
        })
    }

    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    pub fn party_size(&self) -> u32 {
        self.party_size
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// 分・秒・秒未満がすべて0であるか
    pub fn is_on_the_hour(&self) -> bool {
        self.requested_at.minute() == 0
            && self.requested_at.second() == 0
            && self.requested_at.nanosecond() == 0
    }

    fn validate_party_size(party_size: u32) -> Result<(), ReservationError> {
        if party_size < 1 {
            return Err(ReservationError::InvalidPartySize);
        }
        Ok(())
    }
}

/// 予約エラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum ReservationError {
    /// 人数が不正です
    #[display(fmt = "Number of people must be at least one")]
    InvalidPartySize,
}
