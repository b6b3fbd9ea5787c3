// ==========================================
// 泳池救生值岗排班系统 - 引擎层
// ==========================================
// 职责: 实现单日值岗分配规则，不拼 SQL
// 流程: 花名册加载 -> 班次切分 -> 逐班次择优 ->
//       交接拆分 -> 巡检轮转 -> 历史落库 -> 报表组装
// ==========================================

pub mod allocator;
pub mod availability;
pub mod check_rotation;
pub mod error;
pub mod export;
pub mod report;
pub mod scoring;
pub mod selector;
pub mod slots;
pub mod swap;

// 重导出核心引擎
pub use allocator::AllocationEngine;
pub use availability::{GuardState, RosterLoader};
pub use check_rotation::CheckRotation;
pub use error::{EngineError, EngineResult};
pub use report::{AllocationResult, FlatRow, GridRow, RosterEntry, UNFILLED_MARK};
pub use scoring::{CandidateScorer, ScoreKey};
pub use selector::AssignmentSelector;
pub use swap::{SwapOutcome, SwapResolver};
