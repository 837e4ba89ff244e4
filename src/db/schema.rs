use sqlx::sqlite::SqlitePool;

use super::{bulk_insert, execute, SqlValue};

// Referenced tables come first; foreign keys are declared inline since SQLite
// cannot attach constraints with ALTER TABLE.
const CREATE_TEAM: &str = r#"
    CREATE TABLE IF NOT EXISTS Team (
        TeamID INTEGER PRIMARY KEY AUTOINCREMENT,
        Name VARCHAR(70) NOT NULL,
        City VARCHAR(70) NOT NULL,
        Division VARCHAR(30) NOT NULL,
        Conference VARCHAR(30) NOT NULL
    )"#;

const CREATE_COACH: &str = r#"
    CREATE TABLE IF NOT EXISTS Coach (
        CoachID INTEGER PRIMARY KEY AUTOINCREMENT,
        Name VARCHAR(80) NOT NULL,
        Salary INTEGER NOT NULL,
        TeamID INTEGER,
        CONSTRAINT fk_coach_team FOREIGN KEY (TeamID) REFERENCES Team(TeamID)
    )"#;

const CREATE_PLAYER: &str = r#"
    CREATE TABLE IF NOT EXISTS Player (
        PlayerID INTEGER PRIMARY KEY AUTOINCREMENT,
        Name VARCHAR(70) NOT NULL,
        Height INTEGER NOT NULL,
        Weight INTEGER NOT NULL,
        Age INTEGER NOT NULL,
        Position VARCHAR(2) NOT NULL,
        TeamID INTEGER,
        CONSTRAINT fk_player_team FOREIGN KEY (TeamID) REFERENCES Team(TeamID)
    )"#;

const CREATE_GAME: &str = r#"
    CREATE TABLE IF NOT EXISTS Game (
        GameID INTEGER PRIMARY KEY AUTOINCREMENT,
        Date DATE NOT NULL,
        Location VARCHAR(80) NOT NULL,
        HomeTeamID INTEGER NOT NULL,
        AwayTeamID INTEGER NOT NULL,
        HomeScore INTEGER NOT NULL DEFAULT 0,
        AwayScore INTEGER NOT NULL DEFAULT 0,
        CONSTRAINT fk_home_game_team FOREIGN KEY (HomeTeamID) REFERENCES Team(TeamID),
        CONSTRAINT fk_away_game_team FOREIGN KEY (AwayTeamID) REFERENCES Team(TeamID)
    )"#;

const CREATE_PLAYER_GAME_STATISTICS: &str = r#"
    CREATE TABLE IF NOT EXISTS PlayerGameStatistics (
        GameID INTEGER NOT NULL,
        PlayerID INTEGER NOT NULL,
        Points INTEGER NOT NULL DEFAULT 0,
        Rebounds INTEGER NOT NULL DEFAULT 0,
        Assists INTEGER NOT NULL DEFAULT 0,
        Blocks INTEGER NOT NULL DEFAULT 0,
        Steals INTEGER NOT NULL DEFAULT 0,
        Turnovers INTEGER NOT NULL DEFAULT 0,
        MinutesPlayed INTEGER NOT NULL DEFAULT 0,
        Fouls INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (GameID, PlayerID),
        FOREIGN KEY (GameID) REFERENCES Game(GameID),
        FOREIGN KEY (PlayerID) REFERENCES Player(PlayerID)
    )"#;

/// One of the five league tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Team,
    Coach,
    Player,
    Game,
    PlayerGameStatistics,
}

impl Table {
    /// Creation order: every table appears after the tables it references.
    pub const ALL: [Table; 5] = [
        Table::Team,
        Table::Coach,
        Table::Player,
        Table::Game,
        Table::PlayerGameStatistics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Team => "Team",
            Table::Coach => "Coach",
            Table::Player => "Player",
            Table::Game => "Game",
            Table::PlayerGameStatistics => "PlayerGameStatistics",
        }
    }

    fn create_sql(self) -> &'static str {
        match self {
            Table::Team => CREATE_TEAM,
            Table::Coach => CREATE_COACH,
            Table::Player => CREATE_PLAYER,
            Table::Game => CREATE_GAME,
            Table::PlayerGameStatistics => CREATE_PLAYER_GAME_STATISTICS,
        }
    }

    fn drop_sql(self) -> &'static str {
        match self {
            Table::Team => "DROP TABLE IF EXISTS Team",
            Table::Coach => "DROP TABLE IF EXISTS Coach",
            Table::Player => "DROP TABLE IF EXISTS Player",
            Table::Game => "DROP TABLE IF EXISTS Game",
            Table::PlayerGameStatistics => "DROP TABLE IF EXISTS PlayerGameStatistics",
        }
    }

    /// Insert statement covering every non-generated column, in declaration order.
    pub fn insert_sql(self) -> &'static str {
        match self {
            Table::Team => "INSERT INTO Team (Name, City, Division, Conference) VALUES (?, ?, ?, ?)",
            Table::Coach => "INSERT INTO Coach (Name, Salary, TeamID) VALUES (?, ?, ?)",
            Table::Player => {
                "INSERT INTO Player (Name, Height, Weight, Age, Position, TeamID) VALUES (?, ?, ?, ?, ?, ?)"
            }
            Table::Game => {
                "INSERT INTO Game (Date, Location, HomeTeamID, AwayTeamID, HomeScore, AwayScore) VALUES (?, ?, ?, ?, ?, ?)"
            }
            Table::PlayerGameStatistics => {
                r#"INSERT INTO PlayerGameStatistics
                   (GameID, PlayerID, Points, Rebounds, Assists, Blocks, Steals, Turnovers, MinutesPlayed, Fouls)
                   VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#
            }
        }
    }
}

pub async fn create_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in Table::ALL {
        execute(pool, table.create_sql(), &[]).await?;
        tracing::debug!("{} table ready", table.name());
    }
    Ok(())
}

pub async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in Table::ALL.iter().rev() {
        execute(pool, table.drop_sql(), &[]).await?;
    }
    tracing::info!("All tables dropped");
    Ok(())
}

/// Drop every table and create the schema again from scratch.
pub async fn reset(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    drop_all_tables(pool).await?;
    create_all_tables(pool).await?;
    tracing::info!("Schema reset");
    Ok(())
}

/// Load rows into `table` in one transaction. Each row must match the
/// column order of [`Table::insert_sql`].
pub async fn populate_table(
    pool: &SqlitePool,
    table: Table,
    rows: &[Vec<SqlValue>],
) -> Result<u64, sqlx::Error> {
    let written = bulk_insert(pool, table.insert_sql(), rows).await?;
    tracing::info!("Populated {} with {} rows", table.name(), written);
    Ok(written)
}
