use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("PAYMENT_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PAYMENT_SERVICE_PORT")
                .unwrap_or_else(|_| "5002".to_string())
                .parse()
                .expect("PAYMENT_SERVICE_PORT must be a valid port number"),
        }
    }
}
