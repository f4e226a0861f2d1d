use std::num::NonZeroU32;

use chrono::{DateTime, Datelike, Utc, Weekday};
use derive_more::{Display, Error};
use tracing::{debug, info};

use crate::RegistryConfig;

use super::{Clock, MailSender, Reservation, SmsSender};

/// 予約台帳
///
/// 受け付けた予約を保持し、新しい予約を受け付けるかどうかを判定する。
/// 受付判定は次の順に行い、最初に失敗した時点で打ち切る。
///
/// 1. 予約日時が正時であること
/// 2. 受付時点の現在時刻が受付停止曜日でないこと
/// 3. 同じ時間帯の人数の合計が1時間あたりの定員を超えないこと
///
/// 受付判定と追加の間に他の受付が割り込むことは想定していない。
/// 複数のスレッドから共有する場合は `Mutex` などで排他すること。
pub struct ReservationRegistry {
    capacity_per_hour: NonZeroU32,
    restricted_weekday: Weekday,
    reservations: Vec<Reservation>,
    clock: Box<dyn Clock>,
    sms_sender: Box<dyn SmsSender>,
    mail_sender: Option<Box<dyn MailSender>>,
}

impl ReservationRegistry {
    pub fn new(
        capacity_per_hour: NonZeroU32,
        clock: impl Clock + 'static,
        sms_sender: impl SmsSender + 'static,
    ) -> Self {
        Self {
            capacity_per_hour,
            restricted_weekday: Weekday::Sun,
            reservations: Vec::new(),
            clock: Box::new(clock),
            sms_sender: Box::new(sms_sender),
            mail_sender: None,
        }
    }

    pub fn from_config(
        config: &RegistryConfig,
        clock: impl Clock + 'static,
        sms_sender: impl SmsSender + 'static,
    ) -> Self {
        Self::new(config.capacity_per_hour, clock, sms_sender)
            .with_restricted_weekday(config.restricted_weekday)
    }

    pub fn with_mail_sender(mut self, mail_sender: impl MailSender + 'static) -> Self {
        self.set_mail_sender(mail_sender);
        self
    }

    pub fn with_restricted_weekday(mut self, weekday: Weekday) -> Self {
        self.restricted_weekday = weekday;
        self
    }

    pub fn set_sms_sender(&mut self, sms_sender: impl SmsSender + 'static) {
        self.sms_sender = Box::new(sms_sender);
    }

    pub fn set_mail_sender(&mut self, mail_sender: impl MailSender + 'static) {
        self.mail_sender = Some(Box::new(mail_sender));
    }

    /// 予約を受け付ける
    ///
    /// 受け付けた場合は台帳に追加したあとでSMSを送り、メールアドレスがあればメールも送る。
    /// 拒否した場合は台帳も通知も変化しない。
    pub fn admit(&mut self, reservation: Reservation) -> Result<(), AdmissionError> {
        if let Err(error) = self.validate_admission(&reservation) {
            debug!(
                requested_at = %reservation.requested_at(),
                party_size = reservation.party_size(),
                "予約を拒否しました: {}",
                error
            );
            return Err(error);
        }
        self.reservations.push(reservation.clone());
        info!(
            requested_at = %reservation.requested_at(),
            party_size = reservation.party_size(),
            booked = self.booked_people(reservation.requested_at()),
            "予約を受け付けました"
        );
        self.notify(&reservation);
        Ok(())
    }

    pub fn has_reservation(&self, reservation: &Reservation) -> bool {
        self.reservations.contains(reservation)
    }

    /// 受け付けた予約を受付順に返す
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// 指定した時間帯に受け付けた人数の合計
    pub fn booked_people(&self, at: DateTime<Utc>) -> u32 {
        self.reservations
            .iter()
            .filter(|r| r.requested_at() == at)
            .map(Reservation::party_size)
            .sum()
    }

    /// 指定した時間帯にあと何人受け付けられるか
    pub fn remaining_capacity(&self, at: DateTime<Utc>) -> u32 {
        self.capacity_per_hour
            .get()
            .saturating_sub(self.booked_people(at))
    }

    pub fn capacity_per_hour(&self) -> NonZeroU32 {
        self.capacity_per_hour
    }

    pub fn restricted_weekday(&self) -> Weekday {
        self.restricted_weekday
    }

    fn validate_admission(&self, reservation: &Reservation) -> Result<(), AdmissionError> {
        Self::validate_on_the_hour(reservation)?;
        self.validate_weekday()?;
        self.validate_capacity(reservation)
    }

    fn validate_on_the_hour(reservation: &Reservation) -> Result<(), AdmissionError> {
        if !reservation.is_on_the_hour() {
            return Err(AdmissionError::InvalidTimeAlignment {
                requested_at: reservation.requested_at(),
            });
        }
        Ok(())
    }

    // 予約日時ではなく受付時点の曜日で判定する
    fn validate_weekday(&self) -> Result<(), AdmissionError> {
        let today = self.clock.now().weekday();
        if today == self.restricted_weekday {
            return Err(AdmissionError::RestrictedDay { today });
        }
        Ok(())
    }

    fn validate_capacity(&self, reservation: &Reservation) -> Result<(), AdmissionError> {
        let booked = self.booked_people(reservation.requested_at());
        let capacity = self.capacity_per_hour.get();
        if booked.saturating_add(reservation.party_size()) > capacity {
            return Err(AdmissionError::CapacityExceeded {
                requested: reservation.party_size(),
                booked,
                capacity,
            });
        }
        Ok(())
    }

    fn notify(&self, reservation: &Reservation) {
        self.sms_sender.send(reservation);
        if let Some(mail_sender) = &self.mail_sender {
            if reservation.customer().has_email() {
                mail_sender.send_mail(reservation);
            }
        }
    }
}

/// 受付エラー
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    /// 正時ではありません
    #[display(fmt = "Reservation time is not on the hour: {}", requested_at)]
    InvalidTimeAlignment { requested_at: DateTime<Utc> },
    /// 受付停止曜日です
    #[display(fmt = "Reservations are unavailable on {}", today)]
    RestrictedDay { today: Weekday },
    /// 1時間あたりの定員を超えています
    #[display(fmt = "Number of people is over restaurant capacity per hour")]
    CapacityExceeded {
        requested: u32,
        booked: u32,
        capacity: u32,
    },
}

impl AdmissionError {
    pub fn kind(&self) -> AdmissionErrorKind {
        match self {
            AdmissionError::InvalidTimeAlignment { .. } => AdmissionErrorKind::InvalidTimeAlignment,
            AdmissionError::RestrictedDay { .. } => AdmissionErrorKind::RestrictedDay,
            AdmissionError::CapacityExceeded { .. } => AdmissionErrorKind::CapacityExceeded,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdmissionErrorKind {
    InvalidTimeAlignment,
    RestrictedDay,
    CapacityExceeded,
}
