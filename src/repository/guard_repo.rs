// ==========================================
// 泳池救生值岗排班系统 - 救生员仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::guard::Guard;
use crate::domain::types::{GuardRole, SkillLevel};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDateTime, NaiveTime};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

const GUARD_COLUMNS: &str =
    "id, name, present, team, skill_level, role, lunch_at, swap_at, backup_name, updated_at";

/// 救生员仓储
/// 职责: 管理 guard 表的数据访问
pub struct GuardRepository {
    conn: Arc<Mutex<Connection>>,
}

impl GuardRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 新增救生员
    ///
    /// # 返回
    /// 新记录的自增 id
    pub fn create(&self, guard: &Guard) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO guard (
                name, present, team, skill_level, role,
                lunch_at, swap_at, backup_name, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, datetime('now'))
            "#,
            params![
                guard.name,
                guard.present,
                guard.team,
                guard.skill.to_db_str(),
                guard.role.to_db_str(),
                guard.lunch_at.map(|t| t.format("%H:%M").to_string()),
                guard.swap_at.map(|t| t.format("%H:%M").to_string()),
                guard.backup_name,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按姓名查询
    pub fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Guard>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM guard WHERE name = ?1",
            GUARD_COLUMNS
        ))?;

        let result = stmt.query_row(params![name], row_to_guard);
        match result {
            Ok(guard) => Ok(Some(guard)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 查询今日在岗的救生员（按姓名排序）
    pub fn list_present(&self) -> RepositoryResult<Vec<Guard>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM guard WHERE present = 1 ORDER BY name",
            GUARD_COLUMNS
        ))?;

        let rows = stmt.query_map([], row_to_guard)?;
        let mut guards = Vec::new();
        for row in rows {
            guards.push(row?);
        }
        Ok(guards)
    }

    /// 查询全部救生员（按姓名排序）
    pub fn list_all(&self) -> RepositoryResult<Vec<Guard>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM guard ORDER BY name",
            GUARD_COLUMNS
        ))?;

        let rows = stmt.query_map([], row_to_guard)?;
        let mut guards = Vec::new();
        for row in rows {
            guards.push(row?);
        }
        Ok(guards)
    }

    /// 更新在岗标记
    pub fn set_presence(&self, name: &str, present: bool) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let updated = conn.execute(
            "UPDATE guard SET present = ?2, updated_at = datetime('now') WHERE name = ?1",
            params![name, present],
        )?;
        if updated == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Guard".to_string(),
                id: name.to_string(),
            });
        }
        Ok(())
    }
}

/// 行映射: guard 表 -> Guard
fn row_to_guard(row: &Row<'_>) -> rusqlite::Result<Guard> {
    Ok(Guard {
        id: row.get(0)?,
        name: row.get(1)?,
        present: row.get(2)?,
        team: row.get(3)?,
        skill: SkillLevel::from_db_str(&row.get::<_, String>(4)?).unwrap_or(SkillLevel::Medium),
        role: GuardRole::from_db_str(&row.get::<_, String>(5)?).unwrap_or(GuardRole::Standard),
        lunch_at: row
            .get::<_, Option<String>>(6)?
            .and_then(|s| NaiveTime::parse_from_str(&s, "%H:%M").ok()),
        swap_at: row
            .get::<_, Option<String>>(7)?
            .and_then(|s| NaiveTime::parse_from_str(&s, "%H:%M").ok()),
        backup_name: row.get(8)?,
        updated_at: NaiveDateTime::parse_from_str(&row.get::<_, String>(9)?, "%Y-%m-%d %H:%M:%S")
            .unwrap_or_default(),
    })
}
