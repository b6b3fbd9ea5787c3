// ==========================================
// 泳池救生值岗排班系统 - 排班 API
// ==========================================
// 职责: 排班入口 + 最近一次结果的显式句柄
// 说明: 导出读取的是本实例缓存的最近结果，不依赖进程级全局状态
// ==========================================

use crate::engine::error::{EngineError, EngineResult};
use crate::engine::export;
use crate::engine::report::AllocationResult;
use crate::engine::AllocationEngine;
use chrono::NaiveDate;
use std::sync::Mutex;
use tracing::info;

/// 排班 API
pub struct AllocationApi {
    engine: AllocationEngine,
    last_result: Mutex<Option<AllocationResult>>,
}

impl AllocationApi {
    pub fn new(engine: AllocationEngine) -> Self {
        Self {
            engine,
            last_result: Mutex::new(None),
        }
    }

    /// 执行单日排班并缓存结果句柄
    pub fn run_allocation(&self, duty_date: NaiveDate) -> EngineResult<AllocationResult> {
        let result = self.engine.run(duty_date)?;

        let mut cache = self
            .last_result
            .lock()
            .map_err(|e| EngineError::Internal(format!("结果缓存锁获取失败: {}", e)))?;
        *cache = Some(result.clone());

        info!(duty_date = %duty_date, flat_rows = result.flat.len(), "排班结果已缓存");
        Ok(result)
    }

    /// 读取最近一次排班结果
    pub fn last_result(&self) -> EngineResult<Option<AllocationResult>> {
        let cache = self
            .last_result
            .lock()
            .map_err(|e| EngineError::Internal(format!("结果缓存锁获取失败: {}", e)))?;
        Ok(cache.clone())
    }

    /// 导出最近一次排班的矩阵视图 CSV
    pub fn export_grid_csv(&self) -> EngineResult<Vec<u8>> {
        let cache = self
            .last_result
            .lock()
            .map_err(|e| EngineError::Internal(format!("结果缓存锁获取失败: {}", e)))?;
        let result = cache
            .as_ref()
            .ok_or_else(|| EngineError::ExportNotReady("尚未执行排班".to_string()))?;
        export::export_grid_csv(result)
    }

    /// 导出最近一次排班的平铺视图 CSV
    pub fn export_flat_csv(&self) -> EngineResult<Vec<u8>> {
        let cache = self
            .last_result
            .lock()
            .map_err(|e| EngineError::Internal(format!("结果缓存锁获取失败: {}", e)))?;
        let result = cache
            .as_ref()
            .ok_or_else(|| EngineError::ExportNotReady("尚未执行排班".to_string()))?;
        export::export_flat_csv(result)
    }
}
