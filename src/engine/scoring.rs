// ==========================================
// 泳池救生值岗排班系统 - 候选人评分器
// ==========================================
// 职责: 为 (救生员, 岗位) 计算可比较的排序键
// 评分键按字典序比较，越小越优先:
//   1) priority = 角色基础优先级 ± 调整项 + 同岗重复惩罚
//   2) workload = 本次排班已提交的区间数
//   3) name     = 姓名（确定性并列裁决）
// 资质无法覆盖岗位难度时直接淘汰（返回 None），惩罚项永不淘汰
// ==========================================

use crate::domain::post::DutyPost;
use crate::domain::types::{Difficulty, GuardRole};
use crate::engine::availability::GuardState;
use std::collections::HashSet;

/// 同岗重复惩罚（当日历史中已出现过同一 (救生员, 岗位) 组合）
pub const REPEAT_PENALTY: i32 = 5;

/// 巡检员在水域岗的优先级惩罚
pub const INSPECTOR_WATER_PENALTY: i32 = 1;

/// 组长在困难岗的优先级奖励
pub const LEAD_HARD_BONUS: i32 = 1;

// ==========================================
// ScoreKey - 显式排序键
// ==========================================

/// 候选人排序键，字段顺序即比较顺序
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoreKey {
    pub priority: i32,
    pub workload: usize,
    pub name: String,
}

// ==========================================
// CandidateScorer - 候选人评分器
// ==========================================

/// 候选人评分器
///
/// repeat_pairs 为当日历史中已出现的 (救生员, 岗位) 组合，
/// 在运行开始时一次性加载。
pub struct CandidateScorer {
    repeat_pairs: HashSet<(String, String)>,
}

impl CandidateScorer {
    pub fn new(repeat_pairs: HashSet<(String, String)>) -> Self {
        Self { repeat_pairs }
    }

    /// 计算评分键
    ///
    /// # 返回
    /// - Some(ScoreKey): 候选人合格
    /// - None: 资质无法覆盖岗位难度，淘汰
    pub fn score(&self, state: &GuardState, post: &DutyPost) -> Option<ScoreKey> {
        let guard = &state.guard;
        if !guard.skill.covers(post.difficulty) {
            return None;
        }

        let mut priority = guard.role.base_priority();
        if guard.role == GuardRole::Inspector && post.is_water {
            priority += INSPECTOR_WATER_PENALTY;
        }
        if guard.role == GuardRole::Lead && post.difficulty == Difficulty::Hard {
            priority -= LEAD_HARD_BONUS;
        }
        if self
            .repeat_pairs
            .contains(&(guard.name.clone(), post.name.clone()))
        {
            priority += REPEAT_PENALTY;
        }

        Some(ScoreKey {
            priority,
            workload: state.workload(),
            name: guard.name.clone(),
        })
    }
}
