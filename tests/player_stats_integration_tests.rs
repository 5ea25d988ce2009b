use liiga_stats::config::Config;
use liiga_stats::constants::DEFAULT_HTTP_TIMEOUT_SECONDS;
use liiga_stats::data_fetcher::api::{
    create_http_client_with_timeout, fetch_player_active_seasons, fetch_player_game_log,
    fetch_player_profile, fetch_player_season_stats, fetch_player_stats, fetch_player_stats_multi,
    fetch_player_teams,
};
use liiga_stats::data_fetcher::query::{
    GameLogQuery, GameLogType, GameType, PlayerStatsQuery, PlayerStatsType,
};
use liiga_stats::error::AppError;
use reqwest::Client;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> Config {
    Config {
        api_domain: server.uri(),
        log_file_path: None,
        http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
    }
}

fn test_client() -> Client {
    create_http_client_with_timeout(5).expect("failed to build HTTP client")
}

/// A player who appeared for two teams in the same tournament: the
/// aggregate row has no team object, the split entries each carry one.
fn two_team_goal_stats_payload() -> Value {
    json!([{
        "playerId": 37275388,
        "firstName": "Oiva",
        "lastName": "Keskinen",
        "tournament": "runkosarja",
        "games": 60,
        "goals": 24,
        "shots": 150,
        "previousTeamsForTournament": [
            {
                "playerId": 37275388,
                "firstName": "Oiva",
                "lastName": "Keskinen",
                "team": { "id": "tappara", "name": "Tappara" },
                "tournament": "runkosarja",
                "games": 34,
                "goals": 15,
                "shots": 90
            },
            {
                "playerId": 37275388,
                "firstName": "Oiva",
                "lastName": "Keskinen",
                "team": { "id": "hifk", "name": "HIFK" },
                "tournament": "runkosarja",
                "games": 26,
                "goals": 9,
                "shots": 60
            }
        ]
    }])
}

/// Test that season bounds, team filter and data type land verbatim in the
/// request, with the summed path segment pinned to false and splitTeams on.
#[tokio::test]
async fn test_player_stats_request_carries_query_verbatim() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/stats/summed/2023/2024/runkosarja/false"))
        .and(query_param("team", "168761288"))
        .and(query_param("dataType", "basicStats"))
        .and(query_param("splitTeams", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut query = PlayerStatsQuery::basic(2023, 2024, GameType::RegularSeason);
    query.team_id = Some("168761288".to_string());

    let table = fetch_player_stats(&client, &config, &query).await.unwrap();
    assert!(table.is_empty());
    assert_eq!(table.columns()[0], "playerId");
}

/// Test that an invalid game type fails validation without any request.
#[tokio::test]
async fn test_invalid_game_type_makes_no_request() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let query = PlayerStatsQuery::new(2023, 2024, GameType::Chl, PlayerStatsType::GoalStats);
    let error = fetch_player_stats(&client, &config, &query)
        .await
        .unwrap_err();

    assert!(error.is_validation_error());
    assert!(error.to_string().contains("chl"));
}

/// Test that a reversed season range fails validation without any request.
#[tokio::test]
async fn test_reversed_season_range_makes_no_request() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let query = PlayerStatsQuery::new(
        2025,
        2024,
        GameType::RegularSeason,
        PlayerStatsType::BasicStats,
    );
    let error = fetch_player_stats(&client, &config, &query)
        .await
        .unwrap_err();

    assert!(error.is_validation_error());
    assert!(error.to_string().contains("2025"));
}

/// Test that summed mode keeps the aggregate row, whose team columns are
/// null because the aggregate spans teams.
#[tokio::test]
async fn test_summed_stats_keep_aggregate_row_with_null_team() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/stats/summed/2023/2024/runkosarja/false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_team_goal_stats_payload()))
        .mount(&mock_server)
        .await;

    let query = PlayerStatsQuery::goals(2023, 2024, GameType::RegularSeason);
    let table = fetch_player_stats(&client, &config, &query).await.unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.cell(0, "playerId"), Some(&json!(37275388)));
    assert_eq!(table.cell(0, "teamId"), Some(&Value::Null));
    assert_eq!(table.cell(0, "teamName"), Some(&Value::Null));
    assert_eq!(table.cell(0, "goals"), Some(&json!(24)));
}

/// Test that split mode expands a two-team player into one row per team,
/// sharing the player id but not the team id.
#[tokio::test]
async fn test_split_teams_yield_one_row_per_team() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/stats/summed/2023/2024/runkosarja/false"))
        .and(query_param("dataType", "goalStats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_team_goal_stats_payload()))
        .mount(&mock_server)
        .await;

    let mut query = PlayerStatsQuery::goals(2023, 2024, GameType::RegularSeason);
    query.summed = false;
    let table = fetch_player_stats(&client, &config, &query).await.unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(0, "playerId"), table.cell(1, "playerId"));
    assert_eq!(table.cell(0, "teamId"), Some(&json!("tappara")));
    assert_eq!(table.cell(1, "teamId"), Some(&json!("hifk")));
    assert_eq!(table.cell(0, "goals"), Some(&json!(15)));
    assert_eq!(table.cell(1, "goals"), Some(&json!(9)));
}

/// Test that the concurrent helper returns one table per requested data
/// type, in input order.
#[tokio::test]
async fn test_multi_data_type_fetch_pairs_each_table() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(query_param("dataType", "basicStats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "playerId": 1 }])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("dataType", "goalStats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = PlayerStatsQuery::new(
        2023,
        2024,
        GameType::RegularSeason,
        PlayerStatsType::BasicStats,
    );
    let tables = fetch_player_stats_multi(
        &client,
        &config,
        &query,
        &[PlayerStatsType::BasicStats, PlayerStatsType::GoalStats],
    )
    .await
    .unwrap();

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].0, PlayerStatsType::BasicStats);
    assert_eq!(tables[0].1.len(), 1);
    assert_eq!(tables[1].0, PlayerStatsType::GoalStats);
    assert!(tables[1].1.is_empty());
}

/// Test that the game log concatenates every game type and labels each row
/// with the response key it came from.
#[tokio::test]
async fn test_game_log_all_concatenates_and_labels_rows() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/info/123/games/2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "playoffs": [{ "gameId": 9001, "goals": 1, "homeTeam": { "name": "Ilves" } }],
            "regular": [
                { "gameId": 8001, "goals": 0, "homeTeam": { "name": "KalPa" } },
                { "gameId": 8002, "goals": 2, "homeTeam": { "name": "Lukko" } }
            ]
        })))
        .mount(&mock_server)
        .await;

    let query = GameLogQuery::new(123, 2024, GameLogType::All);
    let table = fetch_player_game_log(&client, &config, &query)
        .await
        .unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.cell(0, "gameType"), Some(&json!("playoffs")));
    assert_eq!(table.cell(1, "gameType"), Some(&json!("regular")));
    assert_eq!(table.cell(2, "gameType"), Some(&json!("regular")));
    assert_eq!(table.cell(0, "homeTeamName"), Some(&json!("Ilves")));
    assert_eq!(table.columns().last().map(String::as_str), Some("gameType"));
}

/// Test that selecting a game type absent from the game log response is a
/// decode error naming the keys that were present.
#[tokio::test]
async fn test_game_log_missing_game_type_is_decode_error() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/info/123/games/2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "regular": [{ "gameId": 8001 }]
        })))
        .mount(&mock_server)
        .await;

    let query = GameLogQuery::new(123, 2024, GameLogType::Playoffs);
    let error = fetch_player_game_log(&client, &config, &query)
        .await
        .unwrap_err();

    assert!(error.is_decode_error());
    let message = error.to_string();
    assert!(message.contains("playoffs"));
    assert!(message.contains("regular"));
}

/// Test that a truncated response body surfaces as a decode error carrying
/// the offending fragment.
#[tokio::test]
async fn test_truncated_body_is_decode_error_with_fragment() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/info/123/games/2024"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"regular\": [{\"gameId\": 1}"))
        .mount(&mock_server)
        .await;

    let query = GameLogQuery::new(123, 2024, GameLogType::All);
    let error = fetch_player_game_log(&client, &config, &query)
        .await
        .unwrap_err();

    assert!(error.is_decode_error());
    assert!(error.to_string().contains("{\"regular\": [{\"gameId\": 1}"));
}

/// Test that a non-JSON body is classified as malformed rather than as a
/// structural mismatch.
#[tokio::test]
async fn test_html_body_is_malformed_json_error() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/info/123/games/2024"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let query = GameLogQuery::new(123, 2024, GameLogType::All);
    let error = fetch_player_game_log(&client, &config, &query)
        .await
        .unwrap_err();

    assert!(error.is_decode_error());
    assert!(error.to_string().contains("not valid JSON"));
}

/// Test that an HTTP error status maps to a network error, not a decode
/// error.
#[tokio::test]
async fn test_server_error_status_is_network_error() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let query = PlayerStatsQuery::new(
        2023,
        2024,
        GameType::RegularSeason,
        PlayerStatsType::BasicStats,
    );
    let error = fetch_player_stats(&client, &config, &query)
        .await
        .unwrap_err();

    assert!(error.is_network_error());
    assert!(!error.is_decode_error());
}

/// Test that 404, 429 and 503 statuses map to their dedicated variants,
/// each carrying the offending URL.
#[tokio::test]
async fn test_http_statuses_map_to_dedicated_variants() {
    let client = test_client();
    let query = GameLogQuery::new(1, 2024, GameLogType::All);

    let not_found_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&not_found_server)
        .await;
    let error = fetch_player_game_log(&client, &test_config(&not_found_server), &query)
        .await
        .unwrap_err();
    assert!(matches!(error, AppError::ApiNotFound { .. }));
    assert!(error.to_string().contains(&not_found_server.uri()));

    let rate_limited_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&rate_limited_server)
        .await;
    let error = fetch_player_game_log(&client, &test_config(&rate_limited_server), &query)
        .await
        .unwrap_err();
    assert!(matches!(error, AppError::ApiRateLimit { .. }));

    let unavailable_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&unavailable_server)
        .await;
    let error = fetch_player_game_log(&client, &test_config(&unavailable_server), &query)
        .await
        .unwrap_err();
    assert!(matches!(error, AppError::ApiServiceUnavailable { .. }));
    assert!(error.is_network_error());
}

/// Test the profile projection including the nested birth locality.
#[tokio::test]
async fn test_player_profile_single_row_projection() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/info/555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "firstName": "Saku",
            "lastName": "Koivu",
            "dateOfBirth": "1974-11-23",
            "birthLocality": {
                "name": "Turku",
                "country": { "name": "Finland", "code": "FI" }
            },
            "handedness": "LEFT",
            "height": 178,
            "weight": 82
        })))
        .mount(&mock_server)
        .await;

    let table = fetch_player_profile(&client, &config, 555).await.unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.cell(0, "birthLocality"), Some(&json!("Turku")));
    assert_eq!(table.cell(0, "birthCountryCode"), Some(&json!("FI")));
    assert_eq!(table.cell(0, "fihaId"), Some(&Value::Null));
}

/// Test the active seasons listing and its decode error when the list is
/// missing.
#[tokio::test]
async fn test_player_active_seasons() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/info/555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activeSeasons": [2021, 2022, 2023]
        })))
        .mount(&mock_server)
        .await;

    let seasons = fetch_player_active_seasons(&client, &config, 555)
        .await
        .unwrap();
    assert_eq!(seasons, vec![2021, 2022, 2023]);
}

#[tokio::test]
async fn test_player_active_seasons_missing_list_is_decode_error() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/info/555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "firstName": "Saku" })))
        .mount(&mock_server)
        .await;

    let error = fetch_player_active_seasons(&client, &config, 555)
        .await
        .unwrap_err();
    assert!(error.is_decode_error());
}

/// Test that the player's team history projects one row per season entry.
#[tokio::test]
async fn test_player_teams_one_row_per_entry() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/info/555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": {
                "2023:tps": { "season": 2023, "teamId": "tps", "teamName": "TPS", "jersey": 11 },
                "2024:tps": { "season": 2024, "teamId": "tps", "teamName": "TPS", "jersey": 11 }
            }
        })))
        .mount(&mock_server)
        .await;

    let table = fetch_player_teams(&client, &config, 555).await.unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(0, "season"), Some(&json!(2023)));
    assert_eq!(table.cell(1, "season"), Some(&json!(2024)));
    assert_eq!(table.cell(0, "jersey"), Some(&json!(11)));
}

/// Test that combined per-season stats sort newest first and an absent
/// game type yields an empty table.
#[tokio::test]
async fn test_player_season_stats_combined_and_filtered() {
    let mock_server = MockServer::start().await;
    let client = test_client();
    let config = test_config(&mock_server);

    Mock::given(method("GET"))
        .and(path("/players/info/555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "historical": {
                "regular": [
                    { "season": 2023, "goals": 10 },
                    { "season": 2024, "goals": 14 }
                ],
                "playoffs": [{ "season": 2024, "goals": 3 }]
            }
        })))
        .mount(&mock_server)
        .await;

    let table = fetch_player_season_stats(&client, &config, 555, GameLogType::All)
        .await
        .unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.cell(0, "season"), Some(&json!(2024)));
    assert_eq!(table.cell(0, "gameType"), Some(&json!("regular")));
    assert_eq!(table.cell(1, "season"), Some(&json!(2024)));
    assert_eq!(table.cell(1, "gameType"), Some(&json!("playoffs")));
    assert_eq!(table.cell(2, "season"), Some(&json!(2023)));

    let playout = fetch_player_season_stats(&client, &config, 555, GameLogType::Playout)
        .await
        .unwrap();
    assert!(playout.is_empty());
}
