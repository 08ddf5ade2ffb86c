use hashbrown::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// In-memory phone verification codes. The original deployment had no
/// external store for these, so they live for the lifetime of the process
/// and are swept periodically by a background task.
#[derive(Clone)]
pub struct VerificationCodes {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, StoredCode>>>,
}

struct StoredCode {
    code: String,
    expires_at: Instant,
}

#[derive(Debug, PartialEq)]
pub enum CodeCheck {
    Valid,
    NotFound,
    Expired,
    Mismatch,
}

pub fn generate_code() -> String {
    rand::random_range(100_000..1_000_000u32).to_string()
}

impl VerificationCodes {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn issue(&self, phone: &str, code: String) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            phone.to_owned(),
            StoredCode {
                code,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Checks the code for a phone number. A valid match consumes the entry,
    /// as does an expired one; a mismatch leaves it in place so the user can
    /// retype without requesting a fresh code.
    pub fn verify(&self, phone: &str, code: &str) -> CodeCheck {
        let mut entries = self.entries.lock().unwrap();
        let Some(stored) = entries.get(phone) else {
            return CodeCheck::NotFound;
        };
        if stored.expires_at <= Instant::now() {
            entries.remove(phone);
            return CodeCheck::Expired;
        }
        if stored.code != code {
            return CodeCheck::Mismatch;
        }
        entries.remove(phone);
        CodeCheck::Valid
    }

    /// Drops expired entries, returning how many were removed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|_, stored| stored.expires_at > now);
        before - entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_code_is_single_use() {
        let codes = VerificationCodes::new(Duration::from_secs(300));
        codes.issue("13800000000", "123456".to_owned());
        assert_eq!(codes.verify("13800000000", "123456"), CodeCheck::Valid);
        assert_eq!(codes.verify("13800000000", "123456"), CodeCheck::NotFound);
    }

    #[test]
    fn mismatch_does_not_consume() {
        let codes = VerificationCodes::new(Duration::from_secs(300));
        codes.issue("13800000000", "123456".to_owned());
        assert_eq!(codes.verify("13800000000", "654321"), CodeCheck::Mismatch);
        assert_eq!(codes.verify("13800000000", "123456"), CodeCheck::Valid);
    }

    #[test]
    fn expired_codes_are_rejected_and_swept() {
        let codes = VerificationCodes::new(Duration::ZERO);
        codes.issue("13900000000", "111111".to_owned());
        assert_eq!(codes.verify("13900000000", "111111"), CodeCheck::Expired);

        codes.issue("13900000001", "222222".to_owned());
        assert_eq!(codes.sweep(), 1);
        assert_eq!(codes.verify("13900000001", "222222"), CodeCheck::NotFound);
    }

    #[test]
    fn generated_codes_are_six_digits() {
        for _ in 0..32 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
