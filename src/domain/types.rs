// ==========================================
// 泳池救生值岗排班系统 - 领域类型定义
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与数据库一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 资质等级 (Skill Level)
// ==========================================
// 有序: LOW < MEDIUM < EXPERT
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillLevel {
    Low,    // 初级
    Medium, // 中级
    Expert, // 资深
}

impl SkillLevel {
    /// 资质覆盖判定
    ///
    /// EXPERT -> {easy, medium, hard}
    /// MEDIUM -> {easy, medium}
    /// LOW    -> {easy}
    pub fn covers(&self, difficulty: Difficulty) -> bool {
        match self {
            SkillLevel::Expert => true,
            SkillLevel::Medium => difficulty <= Difficulty::Medium,
            SkillLevel::Low => difficulty == Difficulty::Easy,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            SkillLevel::Low => "LOW",
            SkillLevel::Medium => "MEDIUM",
            SkillLevel::Expert => "EXPERT",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "LOW" => Some(SkillLevel::Low),
            "MEDIUM" => Some(SkillLevel::Medium),
            "EXPERT" => Some(SkillLevel::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 岗位难度 (Post Difficulty)
// ==========================================
// 有序: EASY < MEDIUM < HARD，排班时按难度降序处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,   // 简单
    Medium, // 一般
    Hard,   // 困难
}

impl Difficulty {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "EASY" => Some(Difficulty::Easy),
            "MEDIUM" => Some(Difficulty::Medium),
            "HARD" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 救生员角色 (Guard Role)
// ==========================================
// 基础优先级: LEAD(0) < STANDARD(1) < INSPECTOR(2)，数值越小越优先
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuardRole {
    Lead,      // 组长
    Standard,  // 普通救生员
    Inspector, // 巡检员
}

impl GuardRole {
    /// 值岗评分的基础优先级
    pub fn base_priority(&self) -> i32 {
        match self {
            GuardRole::Lead => 0,
            GuardRole::Standard => 1,
            GuardRole::Inspector => 2,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            GuardRole::Lead => "LEAD",
            GuardRole::Standard => "STANDARD",
            GuardRole::Inspector => "INSPECTOR",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "LEAD" => Some(GuardRole::Lead),
            "STANDARD" => Some(GuardRole::Standard),
            "INSPECTOR" => Some(GuardRole::Inspector),
            _ => None,
        }
    }
}

impl fmt::Display for GuardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 排班记录类别 (Entry Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    General, // 普通岗
    Water,   // 水域岗
    Check,   // 安全巡检
}

impl EntryKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryKind::General => "GENERAL",
            EntryKind::Water => "WATER",
            EntryKind::Check => "CHECK",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "GENERAL" => Some(EntryKind::General),
            "WATER" => Some(EntryKind::Water),
            "CHECK" => Some(EntryKind::Check),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}
