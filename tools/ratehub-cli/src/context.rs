//! CLI execution context.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context as _, Result};
use ratehub_auth::SessionStore;
use ratehub_core::{Identity, Store};
use ratehub_kv::{FileStore, KeyValueStore};
use ratehub_router::{Destination, RouteDecision, RouteTable};

use crate::output::Output;
use crate::seed;

/// Repository key holding the rated store catalog.
const STORES_KEY: &str = "stores_data";

/// Execution context for CLI commands.
pub struct Context {
    /// The session store over the file-backed repository.
    pub sessions: SessionStore<FileStore>,
    /// The navigation policy table.
    pub table: RouteTable,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context, opening (or creating) the state file.
    pub fn load(state_dir: Option<&str>, latency_ms: Option<u64>, output: Output) -> Result<Self> {
        let state_path = Self::state_path(state_dir)?;
        output.debug(&format!("state file: {}", state_path.display()));

        let repo = FileStore::open(&state_path)
            .with_context(|| format!("failed to open state file {}", state_path.display()))?;

        let mut sessions = SessionStore::new(repo, seed::directory());
        if let Some(ms) = latency_ms {
            sessions = sessions.with_latency(Duration::from_millis(ms));
        }

        Ok(Self {
            sessions,
            table: RouteTable::default(),
            output,
        })
    }

    fn state_path(state_dir: Option<&str>) -> Result<PathBuf> {
        let dir = match state_dir {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()
                .context("failed to get current directory")?
                .join(".ratehub"),
        };
        Ok(dir.join("state.json"))
    }

    /// Run the route guard for a destination, re-evaluated once per
    /// command like any navigation. Returns the signed-in identity when
    /// the destination may render; fails with the redirect otherwise.
    pub fn authorize(&self, destination: Destination) -> Result<Identity> {
        let identity = self.sessions.current_identity();
        match self.table.evaluate(identity.as_ref(), destination) {
            RouteDecision::Allow => {
                identity.ok_or_else(|| anyhow!("{destination} does not require an identity"))
            }
            RouteDecision::Redirect(target) if target == self.table.sign_in() => {
                bail!("not signed in; run `ratehub login` first")
            }
            RouteDecision::Redirect(target) => {
                bail!("{destination} is not available to your role (redirecting to {target})")
            }
        }
    }

    /// The store catalog: persisted ratings if present, the seed
    /// otherwise.
    pub fn stores(&self) -> Result<Vec<Store>> {
        match self.sessions.repository().get_json::<Vec<Store>>(STORES_KEY) {
            Ok(Some(stores)) => Ok(stores),
            Ok(None) => Ok(seed::stores()),
            Err(e) => {
                tracing::warn!(%e, "unreadable store catalog, reseeding");
                Ok(seed::stores())
            }
        }
    }

    /// Persist the store catalog.
    pub fn save_stores(&self, stores: &[Store]) -> Result<()> {
        self.sessions
            .repository()
            .set_json(STORES_KEY, &stores)
            .context("failed to persist store catalog")
    }
}
