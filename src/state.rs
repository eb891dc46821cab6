use crate::{
    client::ApiClient,
    config::RuntimeConfiguration,
    data::roster::{MountRegistry, Roster},
    error::{MissingMountSnafu, RollcallResult},
};
use maud::{DOCTYPE, Markup, html};
use snafu::OptionExt;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct RollcallState {
    config: RuntimeConfiguration,
    client: ApiClient,
    mounts: Arc<RwLock<MountRegistry>>,
}

impl RollcallState {
    pub fn new(config: RuntimeConfiguration) -> RollcallResult<Self> {
        let client = ApiClient::new(config.api_config())?;
        let mounts = Arc::new(RwLock::new(MountRegistry::new(config.max_mounts())));

        Ok(Self {
            config,
            client,
            mounts,
        })
    }

    #[allow(clippy::needless_pass_by_value)] //to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        let lang = self.config.date_locale_config().locale.to_string();

        html! {
            (DOCTYPE)
            html lang=(lang) {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Rollcall" }
                }
                body class="bg-gray-900 min-h-screen text-white" {
                    (markup)
                }
            }
        }
    }

    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    /// Loads a fresh roster, hands it to `render`, then registers it as a new mount.
    /// `render` sees the roster directly, never through the registry.
    pub async fn mount<T>(&self, render: impl FnOnce(Uuid, &Roster) -> T) -> T {
        let roster = Roster::load(&self.client).await;
        let id = Uuid::new_v4();
        let rendered = render(id, &roster);

        let mut mounts = self.mounts.write().await;
        mounts.insert(id, roster);
        info!(?id, mounts = mounts.mount_count(), "Mounted roster");
        rendered
    }

    pub async fn with_roster<T>(&self, id: Uuid, f: impl FnOnce(&Roster) -> T) -> RollcallResult<T> {
        let mounts = self.mounts.read().await;
        let roster = mounts.get(&id).context(MissingMountSnafu { id })?;
        Ok(f(roster))
    }

    pub async fn with_roster_mut<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Roster) -> T,
    ) -> RollcallResult<T> {
        let mut mounts = self.mounts.write().await;
        let roster = mounts.get_mut(&id).context(MissingMountSnafu { id })?;
        Ok(f(roster))
    }
}
