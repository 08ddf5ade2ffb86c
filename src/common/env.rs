use std::env;
use std::error::Error;
use std::str::FromStr;

/// Reads one settings value out of the process environment. Implemented as a
/// blanket over `FromStr` so `AppSettings` fields pick it up for free; the
/// missing-variable and parse errors both surface through `anyhow` with the
/// variable name attached by the caller.
pub trait FromEnv: Sized {
    fn from_env(env_var: &str) -> anyhow::Result<Self>;
}

impl<T: FromStr> FromEnv for T
where
    <T as FromStr>::Err: 'static + Error + Send + Sync,
{
    fn from_env(env_var: &str) -> anyhow::Result<Self> {
        let value = env::var(env_var)?;
        Ok(T::from_str(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typed_values_and_reports_missing_ones() {
        unsafe { env::set_var("CAMPUS_TEST_PORT", "8080") };
        let port: u16 = u16::from_env("CAMPUS_TEST_PORT").unwrap();
        assert_eq!(port, 8080);
        assert!(u16::from_env("CAMPUS_TEST_PORT_MISSING").is_err());
    }
}
