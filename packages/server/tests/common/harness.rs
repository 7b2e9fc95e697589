//! Test harness with testcontainers for Postgres integration testing.
//!
//! Uses one shared container across all tests. The container and migrations
//! are initialized on the first test, then reused.

use anyhow::{Context, Result};
use job_board_core::kernel::{ConnectionMonitor, PostgresJobStore, MIGRATOR};
use sqlx::PgPool;
use std::time::Duration;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --ignored --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness giving each test its own freshly migrated database, so
/// tests running in parallel never see each other's postings.
///
/// ```ignore
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// #[ignore] // Requires Docker
/// async fn my_test(ctx: &mut TestHarness) {
///     ctx.store.insert(...).await.unwrap();
/// }
/// ```
pub struct TestHarness {
    pub db_pool: PgPool,
    pub monitor: ConnectionMonitor,
    pub store: PostgresJobStore,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let admin = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test server")?;
        let db_name = format!("jobs_{}", uuid::Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE DATABASE \"{}\"", db_name))
            .execute(&admin)
            .await
            .context("Failed to create test database")?;
        admin.close().await;

        let db_url = format!("{}/{}", infra.db_url.trim_end_matches("/postgres"), db_name);
        let db_pool = PostgresJobStore::connect(&db_url, 5, Duration::from_secs(5))
            .await
            .context("Failed to connect to test database")?;

        MIGRATOR
            .run(&db_pool)
            .await
            .context("Failed to run migrations")?;

        let monitor = ConnectionMonitor::connected();
        let store = PostgresJobStore::new(db_pool.clone(), Duration::from_secs(5), monitor.clone());

        Ok(Self {
            db_pool,
            monitor,
            store,
        })
    }
}
