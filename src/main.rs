use std::sync::Arc;

use anyhow::Result;
use taskdeck_core::Config;
use taskdeck_services::TaskClient;
use taskdeck_ui::TaskListModel;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    taskdeck_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    tracing::info!("Using task service at {}", config.api.base_url);

    let client = TaskClient::new(&config.api.base_url)?;
    let mut model = TaskListModel::new(Arc::new(client));

    // Initial activation issues the task and stats fetches concurrently;
    // they resolve in either order.
    model.activate();
    model.tick().await;
    model.tick().await;

    let state = model.state();
    if !state.error_message.is_empty() {
        eprintln!("Error: {}", state.error_message);
    }

    println!(
        "Tasks: {} total, {} completed, {} pending",
        state.stats.total, state.stats.completed, state.stats.pending
    );
    for task in &state.tasks {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{}] {} (#{})", mark, task.title, task.id);
    }

    Ok(())
}
