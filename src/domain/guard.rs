// ==========================================
// 泳池救生值岗排班系统 - 救生员实体
// ==========================================

use crate::domain::types::{GuardRole, SkillLevel};
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// 救生员主数据
///
/// 排班运行期间的可用区间状态不在此处，见 `engine::availability::GuardState`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guard {
    pub id: Option<i64>,

    /// 姓名（全局唯一，作为业务主键）
    pub name: String,

    /// 今日是否在岗
    pub present: bool,

    /// 班组标签
    pub team: Option<String>,

    /// 资质等级
    pub skill: SkillLevel,

    /// 角色
    pub role: GuardRole,

    /// 固定午餐开始时刻
    pub lunch_at: Option<NaiveTime>,

    /// 中途交接时刻（与 backup_name 同时设置才生效）
    pub swap_at: Option<NaiveTime>,

    /// 交接后接替的救生员姓名
    pub backup_name: Option<String>,

    pub updated_at: NaiveDateTime,
}

impl Guard {
    /// 交接配置是否完整（时刻与接替人都已设置）
    pub fn swap_configured(&self) -> bool {
        self.swap_at.is_some() && self.backup_name.is_some()
    }
}
