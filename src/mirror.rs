use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CartLine;

/// Fixed mirror key; doubles as the file stem.
pub const CART_MIRROR_KEY: &str = "cart";

#[derive(Debug, Serialize, Deserialize)]
pub struct MirrorDocument {
    pub key: String,
    pub saved_at: DateTime<Utc>,
    pub items: Vec<CartLine>,
}

/// Best-effort local mirror of the cart: writes are spawned fire-and-forget,
/// a failed write is only a warning, and the store never reads it back.
#[derive(Debug)]
pub struct CartMirror {
    dir: PathBuf,
}

impl CartMirror {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{CART_MIRROR_KEY}.json"))
    }

    pub async fn persist(&self, items: &[CartLine]) -> anyhow::Result<()> {
        let document = MirrorDocument {
            key: CART_MIRROR_KEY.to_string(),
            saved_at: Utc::now(),
            items: items.to_vec(),
        };
        let body = serde_json::to_vec_pretty(&document)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path(), body).await?;
        Ok(())
    }

    /// `None` when nothing was mirrored yet.
    pub async fn load(&self) -> anyhow::Result<Option<MirrorDocument>> {
        match tokio::fs::read(self.path()).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

pub fn spawn_mirror_write(mirror: &Arc<CartMirror>, items: Vec<CartLine>) {
    let mirror = Arc::clone(mirror);
    tokio::spawn(async move {
        if let Err(err) = mirror.persist(&items).await {
            tracing::warn!(error = %err, "cart mirror write failed");
        }
    });
}
