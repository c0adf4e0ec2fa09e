use std::path::Path;

use anyhow::Context;
use pippin_config::PippinConfig;
use pippin_core::tenant::TenantId;
use pippin_db::service::BoardService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: BoardService,
    pub config: PippinConfig,
    pub tenant: TenantId,
}

impl AppContext {
    /// Resolve tenant and database path (flags beat config), then open the board.
    pub async fn init(config: PippinConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let tenant = match flags.tenant.as_deref() {
            Some(id) => TenantId::new(id).context("invalid --tenant")?,
            None => config.tenant()?,
        };
        let settings = config.settings()?;

        let db_path = flags
            .db
            .clone()
            .unwrap_or_else(|| config.database.path.clone());
        if db_path != ":memory:" {
            ensure_parent_dir(Path::new(&db_path))?;
        }

        let service = BoardService::new_local(&db_path, settings)
            .await
            .with_context(|| format!("failed to open board database at {db_path}"))?;

        tracing::debug!(%tenant, db_path, "board database opened");

        Ok(Self {
            service,
            config,
            tenant,
        })
    }
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
