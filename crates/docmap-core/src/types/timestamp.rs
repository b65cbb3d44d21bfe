use chrono::Utc;
use derive_more::{Display, FromStr};

///
/// Timestamp
/// (in milliseconds since the unix epoch)
///
/// Text form is the bare millisecond count, which is also how it appears
/// as a mapping key.
///

#[derive(
    Clone, Copy, Debug, Default, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Current wall-clock time; clamps to zero before the epoch.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis().max(0) as u64)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Timestamp {
    fn from(ms: u64) -> Self {
        Self(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form_is_millis() {
        let ts: Timestamp = "1714566645123".parse().expect("parse");

        assert_eq!(ts, Timestamp::from_millis(1_714_566_645_123));
        assert_eq!(ts.to_string(), "1714566645123");
        assert!("-5".parse::<Timestamp>().is_err());
    }

    #[test]
    fn now_is_after_epoch() {
        assert!(Timestamp::now() > Timestamp::default());
    }
}
