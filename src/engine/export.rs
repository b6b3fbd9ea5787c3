// ==========================================
// 泳池救生值岗排班系统 - CSV 导出
// ==========================================
// 职责: 将已提交的排班结果渲染为 UTF-8 CSV 字节流
// 表头取第一行的列键；结果为空视为导出未就绪
// ==========================================

use crate::engine::error::{EngineError, EngineResult};
use crate::engine::report::AllocationResult;

/// 矩阵视图导出
///
/// 首列为岗位名，其余列取第一行的列标签；其他行缺失的列留空。
pub fn export_grid_csv(result: &AllocationResult) -> EngineResult<Vec<u8>> {
    let first = result
        .grid
        .first()
        .ok_or_else(|| EngineError::ExportNotReady("排班矩阵为空".to_string()))?;

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["岗位".to_string()];
    header.extend(first.cells.iter().map(|(label, _)| label.clone()));
    writer
        .write_record(&header)
        .map_err(|e| EngineError::Internal(e.to_string()))?;

    for row in &result.grid {
        let mut record = vec![row.post.clone()];
        for (label, _) in &first.cells {
            record.push(row.cell(label).unwrap_or("").to_string());
        }
        writer
            .write_record(&record)
            .map_err(|e| EngineError::Internal(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| EngineError::Internal(e.to_string()))
}

/// 平铺视图导出
///
/// 表头来自行结构的字段名 (Post/Start/End/Assignee/Kind)。
pub fn export_flat_csv(result: &AllocationResult) -> EngineResult<Vec<u8>> {
    if result.flat.is_empty() {
        return Err(EngineError::ExportNotReady("平铺清单为空".to_string()));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &result.flat {
        writer
            .serialize(row)
            .map_err(|e| EngineError::Internal(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| EngineError::Internal(e.to_string()))
}
