// ==========================================
// 泳池救生值岗排班系统 - 排班结果与报表模型
// ==========================================
// 三种视图来自同一份已提交状态:
// - 矩阵视图: 每岗位一行，列为班次/巡检标签
// - 平铺视图: 每条原子子分配一行
// - 花名册快照 + 标题行
// ==========================================

use crate::domain::history::ShiftRecord;
use crate::domain::setting::RosterSetting;
use crate::domain::types::{EntryKind, GuardRole, SkillLevel};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// 空缺标记
pub const UNFILLED_MARK: &str = "--";

/// "HH:MM" 格式化
pub fn fmt_hm(dt: NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// 班次列标签
pub fn slot_label(index: usize, start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("班次 {} ({}-{})", index, fmt_hm(start), fmt_hm(end))
}

/// 巡检列标签
pub fn check_label(index: usize) -> String {
    format!("安全巡检 {}", index)
}

/// 标题行: 日期与营业窗口
pub fn build_caption(duty_date: NaiveDate, setting: &RosterSetting) -> String {
    format!(
        "日期: {} | 营业时间 {} - {} — 排班已生成",
        duty_date.format("%Y-%m-%d"),
        setting.start.format("%H:%M"),
        setting.end.format("%H:%M"),
    )
}

// ==========================================
// 视图行类型
// ==========================================

/// 矩阵视图行（列按生成顺序保存）
#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    /// 岗位名称
    pub post: String,
    /// (列标签, 单元格) 序列
    pub cells: Vec<(String, String)>,
}

impl GridRow {
    pub fn new(post: impl Into<String>) -> Self {
        Self {
            post: post.into(),
            cells: Vec::new(),
        }
    }

    pub fn push_cell(&mut self, label: String, value: String) {
        self.cells.push((label, value));
    }

    /// 按列标签取单元格
    pub fn cell(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// 平铺视图行（一条原子子分配/巡检）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatRow {
    pub post: String,
    pub start: String,
    pub end: String,
    pub assignee: String,
    pub kind: EntryKind,
}

impl From<&ShiftRecord> for FlatRow {
    fn from(record: &ShiftRecord) -> Self {
        Self {
            post: record.post_name.clone(),
            start: record.start.format("%H:%M").to_string(),
            end: record.end.format("%H:%M").to_string(),
            assignee: record.guard_name.clone(),
            kind: record.kind,
        }
    }
}

/// 花名册快照行
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub skill: SkillLevel,
    pub role: GuardRole,
    pub team: Option<String>,
}

// ==========================================
// AllocationResult - 单次排班结果
// ==========================================

/// 单次排班的完整结果（显式结果句柄，导出由此提供数据）
#[derive(Debug, Clone, Serialize)]
pub struct AllocationResult {
    pub duty_date: NaiveDate,
    pub grid: Vec<GridRow>,
    pub flat: Vec<FlatRow>,
    pub roster: Vec<RosterEntry>,
    pub caption: String,
}
