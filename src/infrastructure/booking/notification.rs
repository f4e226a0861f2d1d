use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::domain::booking::{MailSender, Reservation, SmsSender};

/// 送信内容をログに出力するSMS送信
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSmsSender;

impl SmsSender for LogSmsSender {
    fn send(&self, reservation: &Reservation) {
        info!(
            phone = reservation.customer().phone(),
            requested_at = %reservation.requested_at(),
            party_size = reservation.party_size(),
            "SMSを送信しました"
        );
    }
}

/// 送信内容をログに出力するメール送信
#[derive(Clone, Copy, Debug, Default)]
pub struct LogMailSender;

impl MailSender for LogMailSender {
    fn send_mail(&self, reservation: &Reservation) {
        info!(
            email = reservation.customer().email().unwrap_or_default(),
            requested_at = %reservation.requested_at(),
            party_size = reservation.party_size(),
            "メールを送信しました"
        );
    }
}

/// 受け取った予約を記録するSMS送信
#[derive(Debug, Default)]
pub struct RecordingSmsSender {
    calls: Mutex<Vec<Reservation>>,
}

impl RecordingSmsSender {
    pub fn calls(&self) -> Vec<Reservation> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn last(&self) -> Option<Reservation> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl SmsSender for RecordingSmsSender {
    fn send(&self, reservation: &Reservation) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(reservation.clone());
    }
}

/// 受け取った予約を記録するメール送信
#[derive(Debug, Default)]
pub struct RecordingMailSender {
    calls: Mutex<Vec<Reservation>>,
}

impl RecordingMailSender {
    pub fn calls(&self) -> Vec<Reservation> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn last(&self) -> Option<Reservation> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl MailSender for RecordingMailSender {
    fn send_mail(&self, reservation: &Reservation) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(reservation.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use crate::domain::booking::Customer;

    use super::*;

    fn reservation(party_size: u32) -> Reservation {
        let customer = Customer::create(
            "fake name".to_owned(),
            "010-1234-5678".to_owned(),
            Some("test@test.com".to_owned()),
        )
        .unwrap();
        let at = Utc.with_ymd_and_hms(2022, 9, 17, 19, 0, 0).unwrap();
        Reservation::create(at, party_size, customer).unwrap()
    }

    #[test]
    fn test_recording_sms_sender() {
        let sender = RecordingSmsSender::default();
        assert_eq!(sender.call_count(), 0);
        assert_eq!(sender.last(), None);

        sender.send(&reservation(1));
        sender.send(&reservation(2));

        assert_eq!(sender.call_count(), 2);
        assert_eq!(sender.calls(), vec![reservation(1), reservation(2)]);
        assert_eq!(sender.last(), Some(reservation(2)));
    }

    #[test]
    fn test_recording_mail_sender() {
        let sender = RecordingMailSender::default();

        sender.send_mail(&reservation(3));

        assert_eq!(sender.call_count(), 1);
        assert_eq!(sender.last(), Some(reservation(3)));
    }

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured(f: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let output = buffer.0.lock().unwrap().clone();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_log_sms_sender() {
        let output = captured(|| LogSmsSender.send(&reservation(2)));

        assert!(output.contains("SMSを送信しました"));
        assert!(output.contains("phone=\"010-1234-5678\""));
        assert!(output.contains("party_size=2"));
    }

    #[test]
    fn test_log_mail_sender() {
        let output = captured(|| LogMailSender.send_mail(&reservation(1)));

        assert!(output.contains("メールを送信しました"));
        assert!(output.contains("email=\"test@test.com\""));
    }
}
