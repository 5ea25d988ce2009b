//! Response envelope models for the statistics endpoints.
//!
//! Statistics payloads are open-ended, so record contents stay raw JSON
//! and only the envelope structure that drives processing is typed. A
//! missing envelope field fails deserialization and surfaces as a decode
//! error carrying the offending body fragment.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// A player's game log keyed by game type (`regular`, `playoffs`,
/// `practice`, ...). BTreeMap iteration gives the concatenated `all`
/// listing a stable key order.
pub type GameLogResponse = BTreeMap<String, Vec<Value>>;

/// Envelope of the team statistics listing.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamStatsResponse {
    #[serde(rename = "teamStats")]
    pub team_stats: Vec<Value>,
}

/// Envelope of the season standings.
#[derive(Debug, Clone, Deserialize)]
pub struct StandingsResponse {
    pub season: Vec<Value>,
}

/// Envelope of the teams info listing, keyed by team id.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamsInfoResponse {
    pub teams: Map<String, Value>,
}

/// Envelope of a single game's detail endpoint. The same response serves
/// game info, events, rosters, referees and awards; sections a game does
/// not carry default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct GameResponse {
    pub game: Value,
    #[serde(default)]
    pub awards: Vec<Value>,
    #[serde(rename = "homeTeamPlayers", default)]
    pub home_team_players: Vec<Value>,
    #[serde(rename = "awayTeamPlayers", default)]
    pub away_team_players: Vec<Value>,
}

/// Envelope of a single game's period statistics. Each side holds one
/// entry per period; `puckStats` is index-aligned with them.
#[derive(Debug, Clone, Deserialize)]
pub struct GameStatsResponse {
    #[serde(rename = "homeTeam", default)]
    pub home_team: Vec<Value>,
    #[serde(rename = "awayTeam", default)]
    pub away_team: Vec<Value>,
    #[serde(rename = "puckStats", default)]
    pub puck_stats: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_stats_response_requires_team_stats() {
        let ok: TeamStatsResponse =
            serde_json::from_value(json!({ "teamStats": [{ "teamName": "Ilves" }] })).unwrap();
        assert_eq!(ok.team_stats.len(), 1);

        let missing = serde_json::from_value::<TeamStatsResponse>(json!({ "stats": [] }));
        assert!(missing.is_err());
    }

    #[test]
    fn test_standings_response() {
        let standings: StandingsResponse =
            serde_json::from_value(json!({ "season": [{ "teamName": "KalPa", "points": 99 }] }))
                .unwrap();
        assert_eq!(standings.season[0]["points"], json!(99));
    }

    #[test]
    fn test_teams_info_response_keyed_by_team() {
        let info: TeamsInfoResponse = serde_json::from_value(json!({
            "teams": {
                "tappara": { "id": "tappara", "name": "Tappara" },
                "hifk": { "id": "hifk", "name": "HIFK" }
            }
        }))
        .unwrap();
        assert_eq!(info.teams.len(), 2);
        assert!(info.teams.contains_key("tappara"));
    }

    #[test]
    fn test_game_response_sections_default_to_empty() {
        let game: GameResponse =
            serde_json::from_value(json!({ "game": { "id": 1 } })).unwrap();
        assert!(game.awards.is_empty());
        assert!(game.home_team_players.is_empty());
        assert!(game.away_team_players.is_empty());

        let missing_game = serde_json::from_value::<GameResponse>(json!({ "awards": [] }));
        assert!(missing_game.is_err());
    }

    #[test]
    fn test_game_stats_response_defaults() {
        let stats: GameStatsResponse = serde_json::from_value(json!({
            "homeTeam": [{ "teamId": "hifk:2024" }],
            "awayTeam": []
        }))
        .unwrap();
        assert_eq!(stats.home_team.len(), 1);
        assert!(stats.puck_stats.is_empty());
    }

    #[test]
    fn test_game_log_response_orders_keys() {
        let log: GameLogResponse = serde_json::from_value(json!({
            "regular": [{ "gameId": 2 }],
            "chl": [{ "gameId": 1 }]
        }))
        .unwrap();
        let keys: Vec<&String> = log.keys().collect();
        assert_eq!(keys, ["chl", "regular"]);
    }
}
