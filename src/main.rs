use priceguesser::{AppConfig, AppState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "priceguesser=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    info!(
        data_dir = %config.data_dir.display(),
        currency = %config.currency_code,
        min_players = config.min_players,
        "Starting price guesser"
    );

    if let Err(e) = run(config).await {
        error!(error = %e, suggestion = e.recovery_suggestion().unwrap_or_default(), "Startup failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), priceguesser::AppError> {
    let state = AppState::from_config(config).await?;

    let players = state.roster.players().await?;
    let restaurants = state.roster.restaurants().await?;
    let history = state.game_service.history().await?;
    info!(
        players = players.len(),
        restaurants = restaurants.len(),
        games = history.len(),
        "Loaded records"
    );

    for ranking in state.stats.leaderboard().await? {
        info!(
            rank = ranking.rank,
            name = %ranking.name,
            points = ranking.total_points,
            games = ranking.games_played,
            average = ranking.average_points,
            "Leaderboard"
        );
    }

    Ok(())
}
