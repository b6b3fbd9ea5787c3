// ==========================================
// 泳池救生值岗排班系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑，只负责数据访问
// ==========================================

pub mod error;
pub mod guard_repo;
pub mod history_repo;
pub mod post_repo;
pub mod setting_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use guard_repo::GuardRepository;
pub use history_repo::ShiftHistoryRepository;
pub use post_repo::DutyPostRepository;
pub use setting_repo::SettingRepository;
