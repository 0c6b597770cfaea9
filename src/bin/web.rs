//! Single binary JSON API over the league store.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), HISTORY_LIMIT (e.g. 20).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use padel_league_web::{
    best_ratio, create_match, delete_match, edit_match, finalize_match, least_played,
    list_active_matches, list_history, list_players, purge_history, purge_history_for,
    register_player, remove_player, summary, top, GameMatch, League, LeagueError, LeagueStore,
    Level, MatchId, Metric, Pair, PairingMode, Player, PlayerStats, PLAYERS_PER_MATCH,
};
use serde::{Deserialize, Serialize};

type AppState = Data<LeagueStore>;

/// Default page size for `GET /api/history`.
struct HistoryLimit(usize);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
    #[serde(default)]
    level: Level,
}

#[derive(Deserialize)]
struct MatchPlayersBody {
    players: [String; 4],
    #[serde(default)]
    pairing: PairingMode,
}

#[derive(Deserialize)]
struct FinalizeBody {
    score_a: u32,
    score_b: u32,
}

#[derive(Deserialize)]
struct PlayersQuery {
    sort: Option<Metric>,
}

#[derive(Deserialize)]
struct StandingsQuery {
    #[serde(default)]
    metric: Metric,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct LeastPlayedQuery {
    count: Option<usize>,
}

#[derive(Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// Path segment: player name (e.g. /api/players/{name})
#[derive(Deserialize)]
struct PlayerPath {
    name: String,
}

/// Match as shown to clients: ids resolved to names.
#[derive(Serialize)]
struct MatchView {
    #[serde(flatten)]
    game: GameMatch,
    pair_a_names: [String; 2],
    pair_b_names: [String; 2],
}

impl MatchView {
    fn new(league: &League, game: GameMatch) -> Self {
        let names = |pair: Pair| [league.player_name(pair[0]), league.player_name(pair[1])];
        Self {
            pair_a_names: names(game.pair_a),
            pair_b_names: names(game.pair_b),
            game,
        }
    }
}

fn error_response(e: LeagueError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        LeagueError::PlayerNotFound(_) | LeagueError::MatchNotFound(_) => {
            HttpResponse::NotFound().json(body)
        }
        LeagueError::DuplicateName(_) | LeagueError::MatchAlreadyFinalized(_) => {
            HttpResponse::Conflict().json(body)
        }
        LeagueError::StorageUnavailable => {
            log::error!("League store unavailable");
            HttpResponse::ServiceUnavailable().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn respond<T: Serialize>(result: Result<T, LeagueError>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => error_response(e),
    }
}

fn stats_of<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<PlayerStats> {
    players.into_iter().map(|p| p.stats()).collect()
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-league-web",
    })
}

/// List players (registration order, or ranked with ?sort=metric).
#[get("/api/players")]
async fn api_list_players(state: AppState, query: Query<PlayersQuery>) -> HttpResponse {
    respond(state.read(|league| stats_of(list_players(league, query.sort))))
}

/// Register a player.
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    respond(
        state
            .transact(|league| register_player(league, &body.name, body.level))
            .map(|p| p.stats()),
    )
}

/// Remove a player; their matches and history entries go with them.
#[delete("/api/players/{name}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    respond(
        state
            .transact(|league| remove_player(league, &path.name))
            .map(|p| p.stats()),
    )
}

/// Active matches, oldest first.
#[get("/api/matches/active")]
async fn api_active_matches(state: AppState) -> HttpResponse {
    respond(state.read(|league| {
        list_active_matches(league)
            .into_iter()
            .map(|m| MatchView::new(league, m.clone()))
            .collect::<Vec<_>>()
    }))
}

/// Create a match from four names (pairing "manual" or "random").
#[post("/api/matches")]
async fn api_create_match(state: AppState, body: Json<MatchPlayersBody>) -> HttpResponse {
    respond(state.transact(|league| {
        let m = create_match(
            league,
            &body.players,
            body.pairing,
            &mut rand::thread_rng(),
        )?;
        Ok(MatchView::new(league, m))
    }))
}

/// Change the players or pairing of an active match.
#[put("/api/matches/{id}")]
async fn api_edit_match(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<MatchPlayersBody>,
) -> HttpResponse {
    respond(state.transact(|league| {
        let m = edit_match(
            league,
            path.id,
            &body.players,
            body.pairing,
            &mut rand::thread_rng(),
        )?;
        Ok(MatchView::new(league, m))
    }))
}

/// Record the final score; updates the four players and the history.
#[post("/api/matches/{id}/finalize")]
async fn api_finalize_match(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<FinalizeBody>,
) -> HttpResponse {
    respond(state.transact(|league| {
        let m = finalize_match(league, path.id, body.score_a, body.score_b)?;
        Ok(MatchView::new(league, m))
    }))
}

/// Delete a match in any state (stats are not reversed).
#[delete("/api/matches/{id}")]
async fn api_delete_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    respond(state.transact(|league| delete_match(league, path.id)))
}

/// Ranked standings (?metric=points_for|wins|diff|matches_played&limit=k).
#[get("/api/standings")]
async fn api_standings(state: AppState, query: Query<StandingsQuery>) -> HttpResponse {
    respond(state.read(|league| {
        let k = query.limit.unwrap_or(usize::MAX);
        stats_of(top(league.players(), k, query.metric))
    }))
}

/// Best points-per-match ratio; null when nobody is registered.
#[get("/api/standings/best-ratio")]
async fn api_best_ratio(state: AppState) -> HttpResponse {
    respond(state.read(|league| best_ratio(league.players()).map(|p| p.stats())))
}

/// Players who have played least (defaults to one match worth).
#[get("/api/standings/least-played")]
async fn api_least_played(state: AppState, query: Query<LeastPlayedQuery>) -> HttpResponse {
    respond(state.read(|league| {
        let count = query.count.unwrap_or(PLAYERS_PER_MATCH);
        stats_of(least_played(league.players(), count))
    }))
}

#[get("/api/standings/summary")]
async fn api_summary(state: AppState) -> HttpResponse {
    respond(state.read(|league| summary(league.players())))
}

/// Finalized match history, most recent first.
#[get("/api/history")]
async fn api_history(
    state: AppState,
    default_limit: Data<HistoryLimit>,
    query: Query<HistoryQuery>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(default_limit.0);
    respond(state.read(|league| {
        list_history(league, limit)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    }))
}

/// Purge all history entries.
#[delete("/api/history")]
async fn api_purge_history(state: AppState) -> HttpResponse {
    respond(
        state
            .transact(|league| Ok(purge_history(league)))
            .map(|removed| serde_json::json!({ "removed": removed })),
    )
}

/// Purge the history entries of one match.
#[delete("/api/history/{id}")]
async fn api_purge_history_for(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    respond(
        state
            .transact(|league| Ok(purge_history_for(league, path.id)))
            .map(|removed| serde_json::json!({ "removed": removed })),
    )
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_history_limit() -> usize {
    20
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let history_limit: usize = std::env::var("HISTORY_LIMIT")
        .ok()
        .and_then(|l| l.parse().ok())
        .unwrap_or_else(default_history_limit);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(LeagueStore::new(League::new()));
    let history_limit = Data::new(HistoryLimit(history_limit));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(history_limit.clone())
            .service(api_health)
            .service(api_list_players)
            .service(api_register_player)
            .service(api_remove_player)
            .service(api_active_matches)
            .service(api_create_match)
            .service(api_edit_match)
            .service(api_finalize_match)
            .service(api_delete_match)
            .service(api_standings)
            .service(api_best_ratio)
            .service(api_least_played)
            .service(api_summary)
            .service(api_history)
            .service(api_purge_history)
            .service(api_purge_history_for)
    })
    .bind(bind)?
    .run()
    .await
}
