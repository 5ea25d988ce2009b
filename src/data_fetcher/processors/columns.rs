//! Fixed column projections for each endpoint family.
//!
//! Each table maps a dotted source path in the API payload to the column
//! name the value lands under. The statistics service documents these
//! per data type, so they are kept as plain configuration: payload drift
//! is fixed here, not in parsing logic.

use serde_json::{Map, Value};

use super::flatten::extract_path;

/// One output column: the dotted source path in the payload and the name
/// the extracted value lands under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub source: &'static str,
    pub name: &'static str,
}

const fn col(source: &'static str, name: &'static str) -> ColumnSpec {
    ColumnSpec { source, name }
}

/// Column whose payload key and output name are identical.
const fn same(name: &'static str) -> ColumnSpec {
    ColumnSpec { source: name, name }
}

/// Projects a record through a column table.
///
/// Missing source paths become `Value::Null` so every projected record
/// carries the full column set of its table.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::processors::{ColumnSpec, parse_record};
/// use serde_json::{Value, json};
///
/// const COLUMNS: &[ColumnSpec] = &[
///     ColumnSpec { source: "playerId", name: "playerId" },
///     ColumnSpec { source: "team.id", name: "teamId" },
/// ];
///
/// let record = json!({ "playerId": 555, "team": { "id": "tps" } });
/// let row = parse_record(&record, COLUMNS);
/// assert_eq!(row["playerId"], json!(555));
/// assert_eq!(row["teamId"], json!("tps"));
/// ```
pub fn parse_record(record: &Value, columns: &[ColumnSpec]) -> Map<String, Value> {
    let mut out = Map::with_capacity(columns.len());
    for column in columns {
        out.insert(column.name.to_string(), extract_path(record, column.source));
    }
    out
}

// ---------------------------------------------------------------------------
// Player summed statistics, one table per data type.
//
// Every table opens with the same identity prefix. With splitTeams=true the
// top-level aggregate rows carry no team object, so teamId/teamName project
// to null there and to the per-team values in the split rows.
// ---------------------------------------------------------------------------

pub const PLAYER_BASIC_STATS_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("firstName"),
    same("lastName"),
    col("team.id", "teamId"),
    col("team.name", "teamName"),
    same("tournament"),
    same("games"),
    same("goals"),
    same("assists"),
    same("points"),
    same("plusMinus"),
    same("penaltyMinutes"),
    same("powerplayGoals"),
    same("shorthandedGoals"),
    same("winningGoals"),
    same("shots"),
    same("shotPercentage"),
    same("timeOnIce"),
];

pub const PLAYER_GOAL_STATS_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("firstName"),
    same("lastName"),
    col("team.id", "teamId"),
    col("team.name", "teamName"),
    same("tournament"),
    same("games"),
    same("goals"),
    same("powerplayGoals"),
    same("shorthandedGoals"),
    same("overtimeGoals"),
    same("winningGoals"),
    same("emptyNetGoals"),
    same("firstGoals"),
    same("goalsPerGame"),
    same("shots"),
    same("shotPercentage"),
];

pub const PLAYER_SHOT_STATS_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("firstName"),
    same("lastName"),
    col("team.id", "teamId"),
    col("team.name", "teamName"),
    same("tournament"),
    same("games"),
    same("goals"),
    same("shots"),
    same("shotsOnGoal"),
    same("missedShots"),
    same("blockedShots"),
    same("shotPercentage"),
    same("shotsPerGame"),
    same("expectedGoals"),
];

pub const PLAYER_PASSES_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("firstName"),
    same("lastName"),
    col("team.id", "teamId"),
    col("team.name", "teamName"),
    same("tournament"),
    same("games"),
    same("assists"),
    same("primaryAssists"),
    same("secondaryAssists"),
    same("totalPasses"),
    same("successfulPasses"),
    same("passPercentage"),
    same("passesUnderPressure"),
    same("successfulPassesUnderPressure"),
    same("keyPasses"),
];

pub const PLAYER_PENALTY_STATS_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("firstName"),
    same("lastName"),
    col("team.id", "teamId"),
    col("team.name", "teamName"),
    same("tournament"),
    same("games"),
    same("penaltyMinutes"),
    same("penaltyMinutesPerGame"),
    same("twoMinutePenalties"),
    same("fiveMinutePenalties"),
    same("tenMinutePenalties"),
    same("twentyMinutePenalties"),
    same("matchPenalties"),
];

pub const PLAYER_GAME_TIMES_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("firstName"),
    same("lastName"),
    col("team.id", "teamId"),
    col("team.name", "teamName"),
    same("tournament"),
    same("games"),
    same("timeOnIce"),
    same("timeOnIcePerGame"),
    same("evenStrengthTimeOnIce"),
    same("powerplayTimeOnIce"),
    same("shorthandedTimeOnIce"),
    same("shifts"),
    same("shiftsPerGame"),
];

pub const PLAYER_SKATING_STATS_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("firstName"),
    same("lastName"),
    col("team.id", "teamId"),
    col("team.name", "teamName"),
    same("tournament"),
    same("games"),
    same("distanceSkated"),
    same("distancePerGame"),
    same("topSpeed"),
    same("averageSpeed"),
    same("sprints"),
];

pub const PLAYER_ADVANCED_STATS_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("firstName"),
    same("lastName"),
    col("team.id", "teamId"),
    col("team.name", "teamName"),
    same("tournament"),
    same("games"),
    same("corsiFor"),
    same("corsiAgainst"),
    same("corsiPercentage"),
    same("pdo"),
    same("expectedGoals"),
    same("zoneStartsOffensive"),
    same("zoneStartsDefensive"),
];

/// The all-players historical listing (`dataType=all`).
pub const ALL_PLAYERS_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("firstName"),
    same("lastName"),
    col("team.id", "teamId"),
    col("team.name", "teamName"),
    same("tournament"),
    same("games"),
    same("goals"),
    same("assists"),
    same("points"),
    same("penaltyMinutes"),
    same("plusMinus"),
    same("shots"),
    same("powerplayGoals"),
    same("shorthandedGoals"),
    same("winningGoals"),
];

/// Per-game rows of a player's game log. The `gameType` value is injected
/// into each record from the response key it came from before projection.
pub const PLAYER_GAME_LOG_COLUMNS: &[ColumnSpec] = &[
    same("gameId"),
    same("start"),
    col("homeTeam.name", "homeTeamName"),
    col("awayTeam.name", "awayTeamName"),
    same("goals"),
    same("assists"),
    same("points"),
    same("plusMinus"),
    same("penaltyMinutes"),
    same("shots"),
    same("timeOnIce"),
    same("gameType"),
];

// ---------------------------------------------------------------------------
// Player info family.
// ---------------------------------------------------------------------------

pub const PLAYER_PROFILE_COLUMNS: &[ColumnSpec] = &[
    same("firstName"),
    same("lastName"),
    same("dateOfBirth"),
    col("birthLocality.name", "birthLocality"),
    col("birthLocality.country.name", "birthCountry"),
    col("birthLocality.country.code", "birthCountryCode"),
    col("nationality.name", "nationality"),
    col("nationality.code", "nationalityCode"),
    same("handedness"),
    same("height"),
    same("weight"),
    same("fihaId"),
    same("isSuspended"),
    same("isRemoved"),
];

pub const PLAYER_TEAMS_COLUMNS: &[ColumnSpec] = &[
    same("season"),
    same("teamId"),
    same("teamName"),
    same("slug"),
    same("jersey"),
    same("position"),
    same("imageUrl"),
];

// ---------------------------------------------------------------------------
// Team family. The teams/info endpoint is the one snake_case corner of the
// API, hence the renames.
// ---------------------------------------------------------------------------

pub const TEAMS_INFO_COLUMNS: &[ColumnSpec] = &[
    col("id", "teamId"),
    col("name", "teamName"),
    col("short_name", "shortName"),
    same("slug"),
    same("locality"),
    col("country.name", "countryName"),
    col("country.code", "countryCode"),
    col("contact_info", "contactInfo"),
    col("general_info", "generalInfo"),
    col("current_venue_capacity", "currentVenueCapacity"),
    same("url"),
    same("logo"),
];

// ---------------------------------------------------------------------------
// Games family.
// ---------------------------------------------------------------------------

pub const GAMES_RESULTS_COLUMNS: &[ColumnSpec] = &[
    col("id", "gameId"),
    same("season"),
    same("start"),
    same("end"),
    same("finishedType"),
    same("started"),
    same("ended"),
    same("gameTime"),
    same("spectators"),
    same("currentPeriod"),
    same("serie"),
    same("gameWeek"),
    col("homeTeam.teamId", "homeTeamId"),
    col("homeTeam.teamName", "homeTeamName"),
    col("homeTeam.goals", "homeGoals"),
    col("homeTeam.timeOut", "homeTimeOut"),
    col("homeTeam.powerplayInstances", "homePowerplayInstances"),
    col("homeTeam.powerplayGoals", "homePowerplayGoals"),
    col("homeTeam.shortHandedInstances", "homeShortHandedInstances"),
    col("homeTeam.shortHandedGoals", "homeShortHandedGoals"),
    col("homeTeam.expectedGoals", "homeExpectedGoals"),
    col("homeTeam.ranking", "homeRanking"),
    col("homeTeam.gameStartDateTime", "homeGameStartDateTime"),
    col("awayTeam.teamId", "awayTeamId"),
    col("awayTeam.teamName", "awayTeamName"),
    col("awayTeam.goals", "awayGoals"),
    col("awayTeam.timeOut", "awayTimeOut"),
    col("awayTeam.powerplayInstances", "awayPowerplayInstances"),
    col("awayTeam.powerplayGoals", "awayPowerplayGoals"),
    col("awayTeam.shortHandedInstances", "awayShortHandedInstances"),
    col("awayTeam.shortHandedGoals", "awayShortHandedGoals"),
    col("awayTeam.expectedGoals", "awayExpectedGoals"),
    col("awayTeam.ranking", "awayRanking"),
    col("awayTeam.gameStartDateTime", "awayGameStartDateTime"),
    col("iceRink.id", "iceRinkId"),
    col("iceRink.name", "iceRinkName"),
    col("iceRink.latitude", "iceRinkLatitude"),
    col("iceRink.longitude", "iceRinkLongitude"),
    col("iceRink.streetAddress", "iceRinkStreetAddress"),
    col("iceRink.zip", "iceRinkZip"),
    col("iceRink.city", "iceRinkCity"),
];

/// Single-game detail, same fields as [`GAMES_RESULTS_COLUMNS`] but nested
/// under the response's `game` object.
pub const GAME_INFO_COLUMNS: &[ColumnSpec] = &[
    col("game.id", "gameId"),
    col("game.season", "season"),
    col("game.start", "start"),
    col("game.end", "end"),
    col("game.finishedType", "finishedType"),
    col("game.started", "started"),
    col("game.ended", "ended"),
    col("game.gameTime", "gameTime"),
    col("game.spectators", "spectators"),
    col("game.currentPeriod", "currentPeriod"),
    col("game.serie", "serie"),
    col("game.gameWeek", "gameWeek"),
    col("game.homeTeam.teamId", "homeTeamId"),
    col("game.homeTeam.teamName", "homeTeamName"),
    col("game.homeTeam.goals", "homeGoals"),
    col("game.homeTeam.timeOut", "homeTimeOut"),
    col("game.homeTeam.powerplayInstances", "homePowerplayInstances"),
    col("game.homeTeam.powerplayGoals", "homePowerplayGoals"),
    col("game.homeTeam.shortHandedInstances", "homeShortHandedInstances"),
    col("game.homeTeam.shortHandedGoals", "homeShortHandedGoals"),
    col("game.homeTeam.expectedGoals", "homeExpectedGoals"),
    col("game.homeTeam.ranking", "homeRanking"),
    col("game.homeTeam.gameStartDateTime", "homeGameStartDateTime"),
    col("game.awayTeam.teamId", "awayTeamId"),
    col("game.awayTeam.teamName", "awayTeamName"),
    col("game.awayTeam.goals", "awayGoals"),
    col("game.awayTeam.timeOut", "awayTimeOut"),
    col("game.awayTeam.powerplayInstances", "awayPowerplayInstances"),
    col("game.awayTeam.powerplayGoals", "awayPowerplayGoals"),
    col("game.awayTeam.shortHandedInstances", "awayShortHandedInstances"),
    col("game.awayTeam.shortHandedGoals", "awayShortHandedGoals"),
    col("game.awayTeam.expectedGoals", "awayExpectedGoals"),
    col("game.awayTeam.ranking", "awayRanking"),
    col("game.awayTeam.gameStartDateTime", "awayGameStartDateTime"),
    col("game.iceRink.id", "iceRinkId"),
    col("game.iceRink.name", "iceRinkName"),
    col("game.iceRink.latitude", "iceRinkLatitude"),
    col("game.iceRink.longitude", "iceRinkLongitude"),
    col("game.iceRink.streetAddress", "iceRinkStreetAddress"),
    col("game.iceRink.zip", "iceRinkZip"),
    col("game.iceRink.city", "iceRinkCity"),
];

/// Game context merged into every expanded goal and penalty event row.
pub const EVENT_GAME_COLUMNS: &[ColumnSpec] = &[
    col("id", "gameId"),
    same("season"),
    col("start", "gameStart"),
    col("homeTeam.teamName", "homeTeam"),
    col("awayTeam.teamName", "awayTeam"),
];

/// One expanded goal event. The first two `assistantPlayers` entries are
/// split into assistant1/assistant2 columns by the event expansion, which
/// also adds `homeTeamId`, `awayTeamId` and `goalTeamSide`.
pub const GOAL_EVENT_COLUMNS: &[ColumnSpec] = &[
    same("scorerPlayerId"),
    col("scorerPlayer.playerId", "scorerPlayerPlayerId"),
    col("scorerPlayer.firstName", "scorerPlayerFirstName"),
    col("scorerPlayer.lastName", "scorerPlayerLastName"),
    same("scorerGoalsInSeason"),
    same("assistsSoFarInSeason"),
    same("goalTypes"),
    same("logTime"),
    same("winningGoal"),
    same("gameTime"),
    same("period"),
    same("eventId"),
    same("plusPlayerIds"),
    same("minusPlayerIds"),
    same("homeTeamScore"),
    same("awayTeamScore"),
    same("goalsSoFarInSeason"),
    same("videoClipUrl"),
    same("videoThumbnailUrl"),
];

pub const PENALTY_EVENT_COLUMNS: &[ColumnSpec] = &[
    same("playerId"),
    same("suffererPlayerId"),
    same("eventId"),
    same("logTime"),
    same("gameTime"),
    same("period"),
    same("penaltyBegintime"),
    same("penaltyEndtime"),
    same("penaltyFaultName"),
    same("penaltyFaultType"),
    same("penaltyInfo"),
    same("penaltyMinutes"),
];

// ---------------------------------------------------------------------------
// Per-period game statistics. Key sets mirror the stats payload, including
// its lowercase spellings (plusminus, timeofice).
// ---------------------------------------------------------------------------

pub const SKATER_PERIOD_COLUMNS: &[ColumnSpec] = &[
    same("jerseyId"),
    same("playerId"),
    col("period.period", "period"),
    col("period.points", "points"),
    col("period.goals", "goals"),
    col("period.validGoals", "validGoals"),
    col("period.assists", "assists"),
    col("period.plusminus", "plusminus"),
    col("period.plus", "plus"),
    col("period.minus", "minus"),
    col("period.shots", "shots"),
    col("period.penaltyminutes", "penaltyminutes"),
    col("period.powerplayGoals", "powerplayGoals"),
    col("period.shortHandedGoals", "shortHandedGoals"),
    col("period.winningGoal", "winningGoal"),
    col("period.blockedShots", "blockedShots"),
    col("period.faceoffsTotal", "faceoffsTotal"),
    col("period.faceoffsWon", "faceoffsWon"),
    col("period.faceoffsCenterTotal", "faceoffsCenterTotal"),
    col("period.faceoffsCenterWon", "faceoffsCenterWon"),
    col("period.faceoffsDefenceTotal", "faceoffsDefenceTotal"),
    col("period.faceoffsDefenceWon", "faceoffsDefenceWon"),
    col("period.faceoffsOffenceTotal", "faceoffsOffenceTotal"),
    col("period.faceoffsOffenceWon", "faceoffsOffenceWon"),
    col("period.corsiFor", "corsiFor"),
    col("period.corsiAgainst", "corsiAgainst"),
    col("period.fsZoneStartsDz", "fsZoneStartsDz"),
    col("period.fsZoneStartsOz", "fsZoneStartsOz"),
    col("period.powerplay2Goals", "powerplay2Goals"),
    col("period.penaltykill2Goals", "penaltykill2Goals"),
    col("period.powerplayAssists", "powerplayAssists"),
    col("period.penaltykillAssists", "penaltykillAssists"),
    col("period.goalsToEmptyGoal", "goalsToEmptyGoal"),
    col("period.fsTeamShots", "fsTeamShots"),
    col("period.fsTeamGoals", "fsTeamGoals"),
    col("period.fsTeamShotsAgainst", "fsTeamShotsAgainst"),
    col("period.fsTeamGoalsAgainst", "fsTeamGoalsAgainst"),
    col("period.timeofice", "timeofice"),
    same("distance"),
    same("totalPasses"),
    same("successfulPasses"),
    same("playerPassesUnderPressure"),
    same("playerSuccessfulPassesUnderPressure"),
    same("playerPassesUnderHighPressure"),
    same("playerSuccessfulPassesUnderHighPressure"),
    same("expectedGoalsPlayer"),
    same("expectedGoalsTeam"),
    same("expectedGoalsAgainst"),
    same("expectedGoalsAgainstShotOnGoal"),
];

pub const GOALIE_PERIOD_COLUMNS: &[ColumnSpec] = &[
    same("jerseyId"),
    same("playerId"),
    col("period.period", "period"),
    col("period.shotsOnGoal", "shotsOnGoal"),
    col("period.saves", "saves"),
    col("period.goalsAllowed", "goalsAllowed"),
    col("period.savesPercentage", "savesPercentage"),
    col("period.goals", "goals"),
    col("period.validGoals", "validGoals"),
    col("period.assists", "assists"),
    col("period.points", "points"),
    col("period.plus", "plus"),
    col("period.minus", "minus"),
    col("period.shots", "shots"),
    col("period.penaltyminutes", "penaltyminutes"),
    col("period.powerplayGoals", "powerplayGoals"),
    col("period.shortHandedGoals", "shortHandedGoals"),
    col("period.winningGoal", "winningGoal"),
    col("period.blockedShots", "blockedShots"),
    col("period.faceoffsTotal", "faceoffsTotal"),
    col("period.faceoffsWon", "faceoffsWon"),
    col("period.faceoffsCenterTotal", "faceoffsCenterTotal"),
    col("period.faceoffsCenterWon", "faceoffsCenterWon"),
    col("period.faceoffsDefenceTotal", "faceoffsDefenceTotal"),
    col("period.faceoffsDefenceWon", "faceoffsDefenceWon"),
    col("period.faceoffsOffenceTotal", "faceoffsOffenceTotal"),
    col("period.faceoffsOffenceWon", "faceoffsOffenceWon"),
    col("period.corsiFor", "corsiFor"),
    col("period.corsiAgainst", "corsiAgainst"),
    col("period.fsZoneStartsDz", "fsZoneStartsDz"),
    col("period.fsZoneStartsOz", "fsZoneStartsOz"),
    col("period.powerplay2Goals", "powerplay2Goals"),
    col("period.penaltykill2Goals", "penaltykill2Goals"),
    col("period.powerplayAssists", "powerplayAssists"),
    col("period.penaltykillAssists", "penaltykillAssists"),
    col("period.goalsToEmptyGoal", "goalsToEmptyGoal"),
    col("period.fsTeamShots", "fsTeamShots"),
    col("period.fsTeamGoals", "fsTeamGoals"),
    col("period.fsTeamShotsAgainst", "fsTeamShotsAgainst"),
    col("period.fsTeamGoalsAgainst", "fsTeamGoalsAgainst"),
    col("period.timeofice", "timeofice"),
    same("distance"),
    same("totalPasses"),
    same("successfulPasses"),
    same("playerPassesUnderPressure"),
    same("playerSuccessfulPassesUnderPressure"),
    same("playerPassesUnderHighPressure"),
    same("playerSuccessfulPassesUnderHighPressure"),
    same("expectedGoalsPlayer"),
    same("expectedGoalsTeam"),
    same("expectedGoalsAgainst"),
    same("expectedGoalsAgainstShotOnGoal"),
];

/// Team totals merged into every player row of the same period and side.
pub const PERIOD_TEAM_CONTEXT_COLUMNS: &[ColumnSpec] = &[
    same("teamId"),
    col("goals", "teamGoals"),
    col("shots", "teamShots"),
    col("powerPlayGoals", "teamPowerPlayGoals"),
    col("shortHandedGoalsAgainst", "teamShortHandedGoalsAgainst"),
    col("penaltyMinutes", "teamPenaltyMinutes"),
    col("faceOffWins", "teamFaceOffWins"),
    col("twoMinutePenalties", "teamTwoMinutePenalties"),
    col("fiveMinutePenalties", "teamFiveMinutePenalties"),
    col("tenMinutePenalties", "teamTenMinutePenalties"),
    col("twentyMinutePenalties", "teamTwentyMinutePenalties"),
    col("totalDistanceTravelled", "teamTotalDistanceTravelled"),
];

/// Puck tracking totals for one period. The wire key `distance` is renamed
/// so it cannot collide with the player's own skating distance.
pub const PERIOD_PUCK_COLUMNS: &[ColumnSpec] = &[
    same("homeTeamControlDuration"),
    same("awayTeamControlDuration"),
    same("contestedControlDuration"),
    col("distance", "puckDistance"),
];
