// ==========================================
// 泳池救生值岗排班系统 - 应用状态
// ==========================================
// 职责: 装配共享连接、仓储与 API 实例
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::AllocationApi;
use crate::engine::AllocationEngine;
use crate::repository::{
    DutyPostRepository, GuardRepository, SettingRepository, ShiftHistoryRepository,
};

/// 应用状态
///
/// 包含所有 API 实例和共享资源
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 排班 API
    pub allocation_api: Arc<AllocationApi>,

    /// 救生员仓储
    pub guard_repo: Arc<GuardRepository>,

    /// 岗位仓储
    pub post_repo: Arc<DutyPostRepository>,

    /// 设置仓储
    pub setting_repo: Arc<SettingRepository>,

    /// 历史仓储
    pub history_repo: Arc<ShiftHistoryRepository>,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// 该方法会:
    /// 1. 打开共享数据库连接并应用统一 PRAGMA
    /// 2. 幂等初始化 schema
    /// 3. 初始化所有 Repository 与 API 实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let conn = crate::db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;
        crate::db::init_schema(&conn).map_err(|e| format!("schema 初始化失败: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        let guard_repo = Arc::new(GuardRepository::from_connection(conn.clone()));
        let post_repo = Arc::new(DutyPostRepository::from_connection(conn.clone()));
        let setting_repo = Arc::new(SettingRepository::from_connection(conn.clone()));
        let history_repo = Arc::new(ShiftHistoryRepository::from_connection(conn.clone()));

        let engine = AllocationEngine::new(
            guard_repo.clone(),
            post_repo.clone(),
            setting_repo.clone(),
            history_repo.clone(),
        );
        let allocation_api = Arc::new(AllocationApi::new(engine));

        Ok(Self {
            db_path,
            allocation_api,
            guard_repo,
            post_repo,
            setting_repo,
            history_repo,
        })
    }
}

/// 获取默认数据库路径
///
/// # 返回
/// - 环境变量 POOL_DUTY_ROSTER_DB_PATH 优先
/// - 其次用户数据目录/pool-duty-roster/pool_duty_roster.db
/// - 回退 ./pool_duty_roster.db
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("POOL_DUTY_ROSTER_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./pool_duty_roster.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("pool-duty-roster");
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("pool_duty_roster.db");
        }
    }

    path.to_string_lossy().to_string()
}
