// ==========================================
// 泳池救生值岗排班系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 单日值岗分配引擎 (贪心启发式)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 分配规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Difficulty, EntryKind, GuardRole, SkillLevel};

// 领域实体
pub use domain::{DutyPost, Guard, RosterSetting, ShiftRecord};

// 引擎
pub use engine::{
    AllocationEngine, AllocationResult, CandidateScorer, CheckRotation, EngineError,
    EngineResult, GuardState, RosterLoader, ScoreKey,
};

// API
pub use api::AllocationApi;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "泳池救生值岗排班系统";

// 数据库版本
pub const DB_VERSION: &str = "v0.1";
