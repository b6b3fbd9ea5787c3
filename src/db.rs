// ==========================================
// 泳池救生值岗排班系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 提供幂等的建表脚本（首次启动自动建库）
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 初始化数据库 schema（幂等）
///
/// 建表并写入默认排班设置（id=1，仅首次）。
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS guard (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            present INTEGER NOT NULL DEFAULT 1,
            team TEXT,
            skill_level TEXT NOT NULL DEFAULT 'MEDIUM',
            role TEXT NOT NULL DEFAULT 'STANDARD',
            lunch_at TEXT,
            swap_at TEXT,
            backup_name TEXT,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS duty_post (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            difficulty TEXT NOT NULL DEFAULT 'MEDIUM',
            is_water INTEGER NOT NULL DEFAULT 0,
            active_today INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS roster_setting (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            start TEXT NOT NULL DEFAULT '09:00',
            end TEXT NOT NULL DEFAULT '22:00',
            shift_hours REAL NOT NULL DEFAULT 2.0,
            special_hours REAL NOT NULL DEFAULT 1.5,
            lunch_min INTEGER NOT NULL DEFAULT 20,
            dinner_min INTEGER NOT NULL DEFAULT 10,
            shower_min INTEGER NOT NULL DEFAULT 10,
            max_concurrent_lunch INTEGER NOT NULL DEFAULT 2,
            check_windows_min TEXT NOT NULL DEFAULT '30,60,90,120',
            check_window_len_min INTEGER NOT NULL DEFAULT 10
        );

        CREATE TABLE IF NOT EXISTS shift_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            duty_date TEXT NOT NULL,
            guard_name TEXT NOT NULL,
            post_name TEXT NOT NULL,
            start TEXT NOT NULL,
            end TEXT NOT NULL,
            kind TEXT NOT NULL DEFAULT 'GENERAL',
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_shift_history_date
            ON shift_history(duty_date);
        CREATE INDEX IF NOT EXISTS idx_shift_history_guard_post
            ON shift_history(duty_date, guard_name, post_name);

        INSERT OR IGNORE INTO roster_setting (id) VALUES (1);
        "#,
    )?;
    Ok(())
}
