// ==========================================
// 泳池救生值岗排班系统 - 值岗岗位仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::post::DutyPost;
use crate::domain::types::Difficulty;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

/// 值岗岗位仓储
/// 职责: 管理 duty_post 表的数据访问
pub struct DutyPostRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DutyPostRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 新增岗位
    pub fn create(&self, post: &DutyPost) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO duty_post (name, difficulty, is_water, active_today)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                post.name,
                post.difficulty.to_db_str(),
                post.is_water,
                post.active_today,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 查询今日启用的岗位
    ///
    /// 排序: 难度降序（HARD 最先），同难度按名称升序。
    /// 该顺序是排班语义的一部分，引擎按此顺序依次填充。
    pub fn list_active(&self) -> RepositoryResult<Vec<DutyPost>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, difficulty, is_water, active_today
            FROM duty_post
            WHERE active_today = 1
            ORDER BY
                CASE difficulty
                    WHEN 'HARD' THEN 0
                    WHEN 'MEDIUM' THEN 1
                    ELSE 2
                END,
                name
            "#,
        )?;

        let rows = stmt.query_map([], row_to_post)?;
        let mut posts = Vec::new();
        for row in rows {
            posts.push(row?);
        }
        Ok(posts)
    }

    /// 查询全部岗位（按名称排序）
    pub fn list_all(&self) -> RepositoryResult<Vec<DutyPost>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, difficulty, is_water, active_today FROM duty_post ORDER BY name",
        )?;

        let rows = stmt.query_map([], row_to_post)?;
        let mut posts = Vec::new();
        for row in rows {
            posts.push(row?);
        }
        Ok(posts)
    }
}

/// 行映射: duty_post 表 -> DutyPost
fn row_to_post(row: &Row<'_>) -> rusqlite::Result<DutyPost> {
    Ok(DutyPost {
        id: row.get(0)?,
        name: row.get(1)?,
        difficulty: Difficulty::from_db_str(&row.get::<_, String>(2)?)
            .unwrap_or(Difficulty::Medium),
        is_water: row.get(3)?,
        active_today: row.get(4)?,
    })
}
