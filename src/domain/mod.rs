// ==========================================
// 泳池救生值岗排班系统 - 领域层
// ==========================================
// 职责: 定义实体与封闭类型，不含业务规则
// ==========================================

pub mod guard;
pub mod history;
pub mod post;
pub mod setting;
pub mod types;

// 重导出领域实体
pub use guard::Guard;
pub use history::ShiftRecord;
pub use post::DutyPost;
pub use setting::RosterSetting;
pub use types::{Difficulty, EntryKind, GuardRole, SkillLevel};
