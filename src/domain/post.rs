// ==========================================
// 泳池救生值岗排班系统 - 值岗岗位实体
// ==========================================

use crate::domain::types::Difficulty;
use serde::{Deserialize, Serialize};

/// 值岗岗位（物理位置）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyPost {
    pub id: Option<i64>,

    /// 岗位名称（全局唯一）
    pub name: String,

    /// 岗位难度
    pub difficulty: Difficulty,

    /// 是否水域岗（水域岗需要周期性安全巡检）
    pub is_water: bool,

    /// 今日是否启用
    pub active_today: bool,
}
