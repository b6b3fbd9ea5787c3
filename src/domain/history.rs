// ==========================================
// 泳池救生值岗排班系统 - 排班历史记录
// ==========================================
// 不变量: 同一日期的历史记录集合 == 该日期最近一次排班的全部输出
// ==========================================

use crate::domain::types::EntryKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// 单条排班记录（原子子分配，含安全巡检）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: Option<i64>,

    /// 值岗日期
    pub duty_date: NaiveDate,

    /// 救生员姓名
    pub guard_name: String,

    /// 岗位名称
    pub post_name: String,

    /// 开始时刻
    pub start: NaiveTime,

    /// 结束时刻
    pub end: NaiveTime,

    /// 记录类别
    pub kind: EntryKind,

    pub created_at: Option<NaiveDateTime>,
}

impl ShiftRecord {
    /// 构造一条新的排班记录（未落库，id/created_at 为空）
    pub fn new(
        duty_date: NaiveDate,
        guard_name: impl Into<String>,
        post_name: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        kind: EntryKind,
    ) -> Self {
        Self {
            id: None,
            duty_date,
            guard_name: guard_name.into(),
            post_name: post_name.into(),
            start,
            end,
            kind,
            created_at: None,
        }
    }
}
