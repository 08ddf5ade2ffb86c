use crate::common::env::FromEnv;
use std::env;
use std::net::IpAddr;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::Level;

pub struct AppSettings {
    pub level: Level,
    pub app_host: IpAddr,
    pub app_port: u16,

    pub database_url: String,
    pub db_max_connections: usize,
    pub db_wait_timeout: Duration,

    pub uploads_dir: PathBuf,
    pub max_upload_size: usize,

    pub verification_code_ttl: Duration,
}

const DEFAULT_MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;
const DEFAULT_CODE_TTL_SECS: u64 = 5 * 60;

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let level = Level::from_env("LOG_LEVEL")?;
        let app_host = IpAddr::from_env("APP_HOST")?;
        let app_port = u16::from_env("APP_PORT")?;

        let database_url = env::var("DATABASE_URL")?;
        let db_max_connections = usize::from_env("DB_MAX_CONNECTIONS")?;
        let db_wait_timeout_secs = u64::from_env("DB_WAIT_TIMEOUT_SECS")?;
        let db_wait_timeout = Duration::from_secs(db_wait_timeout_secs);

        let uploads_dir = PathBuf::from(env::var("UPLOADS_DIR")?);
        let max_upload_size = env::var("MAX_UPLOAD_SIZE")
            .ok()
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE);

        let verification_code_ttl_secs = env::var("VERIFICATION_CODE_TTL_SECS")
            .ok()
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or(DEFAULT_CODE_TTL_SECS);
        let verification_code_ttl = Duration::from_secs(verification_code_ttl_secs);

        Ok(AppSettings {
            level,
            app_host,
            app_port,

            database_url,
            db_max_connections,
            db_wait_timeout,

            uploads_dir,
            max_upload_size,

            verification_code_ttl,
        })
    }

    pub fn get() -> &'static AppSettings {
        settings()
    }
}

pub fn settings() -> &'static AppSettings {
    static SETTINGS: LazyLock<AppSettings> =
        LazyLock::new(|| AppSettings::load_from_env().expect("Failed to load settings"));
    SETTINGS.deref()
}
