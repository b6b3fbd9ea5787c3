// ==========================================
// 泳池救生值岗排班系统 - 引擎层错误类型
// ==========================================
// 错误口径:
// - 配置缺失是致命错误，排班在任何落库动作之前中止
// - 导出未就绪是可恢复错误，调用方据此拒绝请求
// - 班次/巡检无人可排是正常结果（"--"），不是错误
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("排班设置缺失: {0}")]
    ConfigurationMissing(String),

    #[error("导出数据未就绪: {0}")]
    ExportNotReady(String),

    #[error("内部错误: {0}")]
    Internal(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
