use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    /// Directory for the best-effort cart mirror; unset disables mirroring.
    pub cart_mirror_dir: Option<PathBuf>,
    pub shop_name: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/products.json"));
        let cart_mirror_dir = env::var("CART_MIRROR_DIR").ok().map(PathBuf::from);
        let shop_name = env::var("SHOP_NAME").unwrap_or_else(|_| "Leah's Shop".to_string());
        Ok(Self {
            host,
            port,
            catalog_path,
            cart_mirror_dir,
            shop_name,
        })
    }
}
