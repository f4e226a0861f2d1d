use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::Reservation;

/// 現在時刻を返す時計
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// SMS送信
pub trait SmsSender: Send + Sync {
    fn send(&self, reservation: &Reservation);
}

/// メール送信
///
/// メールアドレスが登録されているお客様の予約に対してのみ呼ばれる。
pub trait MailSender: Send + Sync {
    fn send_mail(&self, reservation: &Reservation);
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<T: SmsSender + ?Sized> SmsSender for Arc<T> {
    fn send(&self, reservation: &Reservation) {
        (**self).send(reservation)
    }
}

impl<T: SmsSender + ?Sized> SmsSender for Box<T> {
    fn send(&self, reservation: &Reservation) {
        (**self).send(reservation)
    }
}

impl<T: MailSender + ?Sized> MailSender for Arc<T> {
    fn send_mail(&self, reservation: &Reservation) {
        (**self).send_mail(reservation)
    }
}

impl<T: MailSender + ?Sized> MailSender for Box<T> {
    fn send_mail(&self, reservation: &Reservation) {
        (**self).send_mail(reservation)
    }
}
