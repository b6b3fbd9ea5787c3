// ==========================================
// 泳池救生值岗排班系统 - 排班历史仓储
// ==========================================
// 不变量: 同日期整组替换（删除+插入在同一事务内，失败则回滚）
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::history::ShiftRecord;
use crate::domain::types::EntryKind;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{params, Connection, Row};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

const DATE_FMT: &str = "%Y-%m-%d";

/// 排班历史仓储
pub struct ShiftHistoryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ShiftHistoryRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 整组替换某日期的历史记录
    ///
    /// 删除与插入在同一事务内完成：任一步失败即回滚，既有历史保持不变。
    pub fn replace_for_date(
        &self,
        duty_date: NaiveDate,
        records: &[ShiftRecord],
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute(
            "DELETE FROM shift_history WHERE duty_date = ?1",
            params![duty_date.format(DATE_FMT).to_string()],
        )?;

        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO shift_history (
                    duty_date, guard_name, post_name, start, end, kind
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )?;
            for record in records {
                stmt.execute(params![
                    record.duty_date.format(DATE_FMT).to_string(),
                    record.guard_name,
                    record.post_name,
                    record.start.format("%H:%M").to_string(),
                    record.end.format("%H:%M").to_string(),
                    record.kind.to_db_str(),
                ])?;
            }
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }

    /// 查询某日期的全部历史记录（按 id 升序，即写入顺序）
    pub fn find_by_date(&self, duty_date: NaiveDate) -> RepositoryResult<Vec<ShiftRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, duty_date, guard_name, post_name, start, end, kind, created_at
            FROM shift_history
            WHERE duty_date = ?1
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map(
            params![duty_date.format(DATE_FMT).to_string()],
            row_to_record,
        )?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// 查询某日期已出现过的 (救生员, 岗位) 组合
    ///
    /// 供评分器施加同岗重复惩罚。
    pub fn repeat_pairs(&self, duty_date: NaiveDate) -> RepositoryResult<HashSet<(String, String)>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT DISTINCT guard_name, post_name
            FROM shift_history
            WHERE duty_date = ?1
            "#,
        )?;

        let rows = stmt.query_map(params![duty_date.format(DATE_FMT).to_string()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        let mut pairs = HashSet::new();
        for row in rows {
            pairs.insert(row?);
        }
        Ok(pairs)
    }

    /// 统计某日期的历史记录条数
    pub fn count_for_date(&self, duty_date: NaiveDate) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM shift_history WHERE duty_date = ?1",
            params![duty_date.format(DATE_FMT).to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

/// 行映射: shift_history 表 -> ShiftRecord
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<ShiftRecord> {
    Ok(ShiftRecord {
        id: row.get(0)?,
        duty_date: NaiveDate::parse_from_str(&row.get::<_, String>(1)?, DATE_FMT)
            .unwrap_or_default(),
        guard_name: row.get(2)?,
        post_name: row.get(3)?,
        start: NaiveTime::parse_from_str(&row.get::<_, String>(4)?, "%H:%M").unwrap_or_default(),
        end: NaiveTime::parse_from_str(&row.get::<_, String>(5)?, "%H:%M").unwrap_or_default(),
        kind: EntryKind::from_db_str(&row.get::<_, String>(6)?).unwrap_or(EntryKind::General),
        created_at: row
            .get::<_, Option<String>>(7)?
            .and_then(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").ok()),
    })
}
