use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_file: PathBuf,
    pub log_level: String,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub sender: String,
    pub password: String,
    pub recipient: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("FORMRELAY_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_HOST: {e}"))?;

        let port: u16 = env_or("FORMRELAY_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_PORT: {e}"))?;

        let data_file = PathBuf::from(env_or("FORMRELAY_DATA_FILE", "contact_submissions.json"));

        let log_level = env_or("FORMRELAY_LOG_LEVEL", "info");

        let smtp_port: u16 = env_or("SMTP_PORT", "587")
            .parse()
            .map_err(|e| format!("Invalid SMTP_PORT: {e}"))?;

        let smtp = SmtpConfig {
            server: env_or("SMTP_SERVER", "smtp.gmail.com"),
            port: smtp_port,
            sender: env_or("SENDER_EMAIL", "your-email@example.com"),
            password: env_or("SENDER_PASSWORD", "your-app-password"),
            recipient: env_or("RECIPIENT_EMAIL", "recipient@example.com"),
        };

        Ok(Config {
            host,
            port,
            data_file,
            log_level,
            smtp,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
