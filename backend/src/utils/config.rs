#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn init() -> Self {
        Config {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL not set"),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        }
    }
}
