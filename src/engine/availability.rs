// ==========================================
// 泳池救生值岗排班系统 - 可用性状态与花名册加载
// ==========================================
// 职责: 维护每名救生员本次排班的已占用/已阻塞区间
// 区间语义: 半开区间 [start, end)，逐对线性判重
// ==========================================

use crate::domain::guard::Guard;
use crate::domain::setting::RosterSetting;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;
use tracing::debug;

/// 全员统一的晚餐开始时刻
pub const DINNER_START: (u32, u32) = (17, 0);

/// 半开区间重叠判定
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

// ==========================================
// GuardState - 单人运行期状态
// ==========================================

/// 救生员的运行期可用性状态
///
/// assignments 为本次排班已提交的值岗/巡检区间，
/// breaks 为预先阻塞的休息区间（午餐+淋浴、晚餐、交接标记）。
#[derive(Debug, Clone)]
pub struct GuardState {
    pub guard: Guard,
    assignments: Vec<(NaiveDateTime, NaiveDateTime)>,
    breaks: Vec<(NaiveDateTime, NaiveDateTime)>,
}

impl GuardState {
    pub fn new(guard: Guard) -> Self {
        Self {
            guard,
            assignments: Vec::new(),
            breaks: Vec::new(),
        }
    }

    /// 区间 [start, end) 是否与任何已占用/已阻塞区间无重叠
    pub fn is_available(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        for &(b_start, b_end) in &self.breaks {
            if overlaps(start, end, b_start, b_end) {
                return false;
            }
        }
        for &(a_start, a_end) in &self.assignments {
            if overlaps(start, end, a_start, a_end) {
                return false;
            }
        }
        true
    }

    /// 提交一个值岗区间
    pub fn assign(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        self.assignments.push((start, end));
    }

    /// 阻塞一个休息区间
    pub fn block(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        self.breaks.push((start, end));
    }

    /// 本次排班已提交的区间数（评分器的负载项）
    pub fn workload(&self) -> usize {
        self.assignments.len()
    }

    pub fn assignments(&self) -> &[(NaiveDateTime, NaiveDateTime)] {
        &self.assignments
    }

    pub fn breaks(&self) -> &[(NaiveDateTime, NaiveDateTime)] {
        &self.breaks
    }
}

// ==========================================
// RosterLoader - 花名册加载器
// ==========================================

/// 花名册加载器
///
/// 为每名在岗救生员构建运行期状态，并预先阻塞:
/// (a) 个人午餐 + 淋浴缓冲
/// (b) 交接时刻的零宽标记（半开区间下不排斥任何班次，保留为显式记录）
/// (c) 全员统一的晚餐窗口
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(
        guards: Vec<Guard>,
        setting: &RosterSetting,
        duty_date: NaiveDate,
    ) -> BTreeMap<String, GuardState> {
        let dinner_start = duty_date.and_time(
            NaiveTime::from_hms_opt(DINNER_START.0, DINNER_START.1, 0).unwrap_or_default(),
        );
        let dinner_end = dinner_start + setting.dinner_len();

        let mut roster = BTreeMap::new();
        for guard in guards {
            let mut state = GuardState::new(guard);

            if let Some(lunch_at) = state.guard.lunch_at {
                let lunch_start = duty_date.and_time(lunch_at);
                state.block(lunch_start, lunch_start + setting.lunch_block_len());
            }

            if state.guard.swap_configured() {
                if let Some(swap_at) = state.guard.swap_at {
                    let swap_dt = duty_date.and_time(swap_at);
                    state.block(swap_dt, swap_dt);
                }
            }

            state.block(dinner_start, dinner_end);

            debug!(
                guard = %state.guard.name,
                breaks = state.breaks.len(),
                "已加载救生员可用性状态"
            );
            roster.insert(state.guard.name.clone(), state);
        }
        roster
    }
}
