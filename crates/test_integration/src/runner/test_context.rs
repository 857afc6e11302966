use app_state::{AppSettings, load_app_settings};
use color_eyre::eyre::{Result, eyre};
use reqwest::Client;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::path::Path;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

const TEST_DB_NAME: &str = "moviehouse_test";

/// The main context for the integration tests: a dedicated database, the API
/// running as a background task, and an HTTP client pointed at it.
#[allow(dead_code)]
pub struct TestContext {
    pub pool: PgPool,
    pub settings: AppSettings,
    pub http_client: Client,
    management_pool: PgPool,
    api_handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        info!("Setting up test environment...");

        // Settings and constants load relative to the workspace root.
        let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        std::env::set_current_dir(&workspace_root)?;
        let base_settings = load_app_settings()?;

        // 1. Recreate the dedicated test database.
        let (settings, management_pool) = create_test_database(&base_settings).await?;

        // 2. Connect the main pool; this also runs the migrations.
        let pool = common_services::database::get_db_pool(&settings).await?;

        // 3. Spawn the API as a background task.
        let api_pool = pool.clone();
        let api_settings = settings.clone();
        let api_handle = tokio::spawn(async move {
            if let Err(e) = api::serve(api_pool, api_settings).await {
                error!("API server failed: {}", e);
            }
        });

        // 4. Wait until the API accepts traffic.
        let http_client = Client::new();
        wait_for_healthy_api(&settings, &http_client).await?;

        info!("Test environment is ready.");
        Ok(Self {
            pool,
            settings,
            http_client,
            management_pool,
            api_handle,
        })
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.api.public_url, path)
    }
}

/// Drops and recreates the test database, returning settings pointing at it
/// plus the management pool used for the admin connection.
async fn create_test_database(base_settings: &AppSettings) -> Result<(AppSettings, PgPool)> {
    let base_url = &base_settings.secrets.database_url;
    let (server_url, _) = base_url
        .rsplit_once('/')
        .ok_or_else(|| eyre!("Invalid database url"))?;

    let management_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&format!("{server_url}/postgres"))
        .await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS {TEST_DB_NAME} WITH (FORCE)"))
        .execute(&management_pool)
        .await?;
    sqlx::query(&format!("CREATE DATABASE {TEST_DB_NAME}"))
        .execute(&management_pool)
        .await?;

    let mut settings = base_settings.clone();
    settings.secrets.database_url = format!("{server_url}/{TEST_DB_NAME}");
    Ok((settings, management_pool))
}

/// Polls the health endpoint until it answers or the attempts run out.
async fn wait_for_healthy_api(settings: &AppSettings, http_client: &Client) -> Result<()> {
    let url = format!("{}/api/health", settings.api.public_url);
    for attempt in 1..=20 {
        info!("Health check attempt {}...", attempt);
        if let Ok(response) = http_client.get(&url).send().await
            && response.status().is_success()
        {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    Err(eyre!("API did not become healthy in time"))
}
