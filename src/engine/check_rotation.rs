// ==========================================
// 泳池救生值岗排班系统 - 安全巡检轮转器
// ==========================================
// 模型: 固定顺序名单 + 环形游标，每次抽取前游标先进一位
// 作用域: 单次排班运行内全局共享（跨岗位、跨巡检窗口不重置）
// ==========================================

use crate::domain::types::GuardRole;
use crate::engine::availability::GuardState;
use std::collections::BTreeMap;

/// 安全巡检轮转队列
#[derive(Debug, Clone)]
pub struct CheckRotation {
    names: Vec<String>,
    cursor: usize,
}

impl CheckRotation {
    /// 按花名册播种轮转名单（姓名序）
    ///
    /// 优先巡检员；没有巡检员则退化为组长；再退化为全员。
    pub fn seed(roster: &BTreeMap<String, GuardState>) -> Self {
        let by_role = |role: GuardRole| -> Vec<String> {
            roster
                .values()
                .filter(|s| s.guard.role == role)
                .map(|s| s.guard.name.clone())
                .collect()
        };

        let mut names = by_role(GuardRole::Inspector);
        if names.is_empty() {
            names = by_role(GuardRole::Lead);
        }
        if names.is_empty() {
            names = roster.keys().cloned().collect();
        }

        Self { names, cursor: 0 }
    }

    /// 抽取下一名巡检人选
    ///
    /// 游标在抽取前先进一位；名单为空时返回 None。
    /// 注意: 即使抽中者不可用，游标也已前进（由调用方记空缺）。
    pub fn draw(&mut self) -> Option<&str> {
        if self.names.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.names.len();
        Some(&self.names[self.cursor])
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
