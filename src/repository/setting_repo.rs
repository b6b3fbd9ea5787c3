// ==========================================
// 泳池救生值岗排班系统 - 排班设置仓储
// ==========================================
// 存储: roster_setting 表单行记录 (id=1)
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::setting::RosterSetting;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveTime;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

/// 排班设置仓储
pub struct SettingRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SettingRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 读取全局排班设置
    ///
    /// # 返回
    /// - Ok(Some(RosterSetting)): 设置存在
    /// - Ok(None): 设置行缺失（引擎层据此判定配置错误）
    pub fn get(&self) -> RepositoryResult<Option<RosterSetting>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT start, end, shift_hours, special_hours,
                   lunch_min, dinner_min, shower_min, max_concurrent_lunch,
                   check_windows_min, check_window_len_min
            FROM roster_setting WHERE id = 1
            "#,
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, i64>(5)?,
                    row.get::<_, i64>(6)?,
                    row.get::<_, i64>(7)?,
                    row.get::<_, String>(8)?,
                    row.get::<_, i64>(9)?,
                ))
            },
        );

        let raw = match result {
            Ok(raw) => raw,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let start = parse_time(&raw.0)?;
        let end = parse_time(&raw.1)?;

        Ok(Some(RosterSetting {
            start,
            end,
            shift_hours: raw.2,
            special_hours: raw.3,
            lunch_min: raw.4,
            dinner_min: raw.5,
            shower_min: raw.6,
            max_concurrent_lunch: raw.7,
            check_windows_min: RosterSetting::parse_check_windows(&raw.8),
            check_window_len_min: raw.9,
        }))
    }

    /// 写入全局排班设置（整行覆盖）
    pub fn save(&self, setting: &RosterSetting) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT OR REPLACE INTO roster_setting (
                id, start, end, shift_hours, special_hours,
                lunch_min, dinner_min, shower_min, max_concurrent_lunch,
                check_windows_min, check_window_len_min
            ) VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                setting.start.format("%H:%M").to_string(),
                setting.end.format("%H:%M").to_string(),
                setting.shift_hours,
                setting.special_hours,
                setting.lunch_min,
                setting.dinner_min,
                setting.shower_min,
                setting.max_concurrent_lunch,
                setting.check_windows_to_db(),
                setting.check_window_len_min,
            ],
        )?;
        Ok(())
    }

    /// 删除设置行（测试与重置场景）
    pub fn clear(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM roster_setting WHERE id = 1", [])?;
        Ok(())
    }
}

/// 解析 "HH:MM" 时刻字段
fn parse_time(raw: &str) -> RepositoryResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|e| {
        RepositoryError::ValidationError(format!("时刻字段格式非法 \"{}\": {}", raw, e))
    })
}
