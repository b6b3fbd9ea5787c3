// ==========================================
// 泳池救生值岗排班系统 - 班次择优选择器
// ==========================================
// 每班次的选择流程:
//   1) 过滤: 区间可用 + 午餐并发约束 + 硬排除
//      (巡检员不上水域岗；组长不上非困难水域岗)
//   2) 合格候选中取评分键最小者
//   3) 无合格者时仅放宽资质（沿用第 1 步过滤结果），按 (负载, 姓名) 取最小
//   4) 仍无人则本班次空缺（"--"），属正常结果
// ==========================================

use crate::domain::post::DutyPost;
use crate::domain::setting::RosterSetting;
use crate::domain::types::{Difficulty, GuardRole};
use crate::engine::availability::{overlaps, GuardState};
use crate::engine::scoring::{CandidateScorer, ScoreKey};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::debug;

/// 班次择优选择器
pub struct AssignmentSelector<'a> {
    setting: &'a RosterSetting,
    duty_date: NaiveDate,
}

impl<'a> AssignmentSelector<'a> {
    pub fn new(setting: &'a RosterSetting, duty_date: NaiveDate) -> Self {
        Self { setting, duty_date }
    }

    /// 为班次选出最优救生员
    ///
    /// # 返回
    /// - Some(姓名): 胜出者（尚未提交区间，由调用方结合交接拆分提交）
    /// - None: 无人可排
    pub fn select(
        &self,
        post: &DutyPost,
        slot: (NaiveDateTime, NaiveDateTime),
        roster: &BTreeMap<String, GuardState>,
        scorer: &CandidateScorer,
    ) -> Option<String> {
        let (slot_start, slot_end) = slot;

        // 第 1 步: 过滤出存活池
        let survivors: Vec<&GuardState> = roster
            .values()
            .filter(|state| {
                state.is_available(slot_start, slot_end)
                    && self.lunch_concurrency_ok(state, slot, roster)
                    && !hard_excluded(&state.guard.role, post)
            })
            .collect();

        // 第 2 步: 合格候选中取最小评分键
        let mut best: Option<(ScoreKey, &GuardState)> = None;
        for state in &survivors {
            if let Some(key) = scorer.score(state, post) {
                match &best {
                    Some((best_key, _)) if *best_key <= key => {}
                    _ => best = Some((key, state)),
                }
            }
        }
        if let Some((_, state)) = best {
            return Some(state.guard.name.clone());
        }

        // 第 3 步: 仅放宽资质，沿用同一存活池，按 (负载, 姓名) 取最小
        let relaxed = survivors
            .iter()
            .min_by_key(|state| (state.workload(), state.guard.name.clone()));
        if let Some(state) = relaxed {
            debug!(
                post = %post.name,
                guard = %state.guard.name,
                "无合格候选，放宽资质后选中"
            );
            return Some(state.guard.name.clone());
        }

        // 第 4 步: 空缺
        None
    }

    /// 午餐并发约束 (4.4a)
    ///
    /// 午餐区间与班次重叠的救生员，仅当"午餐区间与其重叠的其他人数"
    /// 严格小于 max_concurrent_lunch 时才可入选。
    fn lunch_concurrency_ok(
        &self,
        state: &GuardState,
        slot: (NaiveDateTime, NaiveDateTime),
        roster: &BTreeMap<String, GuardState>,
    ) -> bool {
        let Some(lunch_at) = state.guard.lunch_at else {
            return true;
        };
        let lunch_start = self.duty_date.and_time(lunch_at);
        let lunch_end = lunch_start + self.setting.lunch_block_len();

        if !overlaps(slot.0, slot.1, lunch_start, lunch_end) {
            return true;
        }

        let mut overlapping = 0i64;
        for other in roster.values() {
            if other.guard.name == state.guard.name {
                continue;
            }
            let Some(other_lunch) = other.guard.lunch_at else {
                continue;
            };
            let other_start = self.duty_date.and_time(other_lunch);
            let other_end = other_start + self.setting.lunch_block_len();
            if overlaps(lunch_start, lunch_end, other_start, other_end) {
                overlapping += 1;
            }
        }
        overlapping < self.setting.max_concurrent_lunch
    }
}

/// 硬排除规则
///
/// 巡检员不上水域岗；组长不上非困难的水域岗。
fn hard_excluded(role: &GuardRole, post: &DutyPost) -> bool {
    if post.is_water && *role == GuardRole::Inspector {
        return true;
    }
    if *role == GuardRole::Lead && post.is_water && post.difficulty != Difficulty::Hard {
        return true;
    }
    false
}
