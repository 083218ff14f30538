//! The suspect pool: portrait registration and roster draws.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use sus_core::entities::Suspect;
use sus_db::Store;

use crate::error::GameError;

const PORTRAIT_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Draw `count` distinct suspects uniformly, in random order.
///
/// # Errors
///
/// Returns [`GameError::InsufficientSuspects`] when the pool is smaller than
/// `count`.
pub fn draw_distinct<R: Rng + ?Sized>(
    pool: &[Suspect],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Suspect>, GameError> {
    if pool.len() < count {
        return Err(GameError::InsufficientSuspects {
            found: pool.len(),
            required: count,
        });
    }
    let mut drawn: Vec<Suspect> = pool.choose_multiple(rng, count).cloned().collect();
    drawn.shuffle(rng);
    Ok(drawn)
}

/// Whether `file_name` looks like a portrait we can register.
#[must_use]
pub fn is_portrait(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            PORTRAIT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[derive(Clone)]
pub struct SuspectPool {
    store: Arc<dyn Store>,
}

impl SuspectPool {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// `count` distinct suspects drawn uniformly from the whole roster.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientSuspects`] or a store error.
    pub async fn draw(&self, count: usize) -> Result<Vec<Suspect>, GameError> {
        let pool = self.store.list_suspects().await?;
        let drawn = draw_distinct(&pool, count, &mut rand::rng())?;
        Ok(drawn)
    }

    /// Register every portrait in `dir`. The suspect id is the file stem.
    /// Images already registered are skipped. Returns how many were added.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Portraits`] if the directory cannot be listed, or
    /// a store error.
    pub async fn seed_from_dir(&self, dir: &Path) -> Result<usize, GameError> {
        let portraits_err = |source| GameError::Portraits {
            path: dir.to_path_buf(),
            source,
        };
        let mut entries = tokio::fs::read_dir(dir).await.map_err(portraits_err)?;
        let mut images = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(portraits_err)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_portrait(&name) && entry.file_type().await.is_ok_and(|t| t.is_file()) {
                images.push(name);
            }
        }
        images.sort();

        let mut added = 0;
        for image in images {
            let Some(stem) = Path::new(&image).file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let suspect = Suspect {
                id: stem.to_string(),
                image: image.clone(),
                created_at: Utc::now(),
                free: false,
                fled: false,
            };
            if self.store.save_suspect(&suspect).await? {
                added += 1;
            }
        }
        tracing::info!(added, dir = %dir.display(), "suspect portraits registered");
        Ok(added)
    }
}
