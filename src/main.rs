use clap::Parser;
use sightstack::app::router;
use sightstack::config::Args;
use sightstack::search::engine::QuestionService;
use sightstack::storage::RecordStore;
use sightstack::storage::fixtures;
use sightstack::storage::memory::MemoryStore;
use sightstack::storage::record::trends_table;
use sightstack::trends::engine::TrendService;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    args.validate()?;

    // 1. Storage:
    let store = MemoryStore::new();
    store.create_table(&args.table);
    store.create_table(&trends_table(&args.table));

    if let Some(path) = &args.fixtures {
        let stats = fixtures::load(path)?.apply(&store, &args.table)?;
        tracing::info!(
            "Loaded {} questions and {} trend rows from {}",
            stats.questions,
            stats.trends,
            path.display()
        );
    }
    for table in store.table_names() {
        tracing::info!(
            "Table {}: {} rows",
            table,
            store.row_count(&table).unwrap_or(0)
        );
    }

    // 2. Services:
    let shared: Arc<dyn RecordStore> = store.clone();
    let questions = QuestionService::new(shared.clone(), args.search_settings());
    let trends = TrendService::new(shared, &args.table);

    // 3. HTTP Router:
    let app = router(questions, trends);

    // 4. Spawn trend refresher:
    let refresh_interval = args.trend_refresh_interval();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);

        loop {
            interval.tick().await;
            // Counters are written by the upstream stream processor; this job
            // only marks the refresh window.
            tracing::info!("Starting scheduled trend update");
            tracing::info!("Completed scheduled trend update");
        }
    });

    // 5. Start HTTP server:
    tracing::info!("HTTP server listening on {}", args.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
