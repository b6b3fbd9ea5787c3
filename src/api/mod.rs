// ==========================================
// 泳池救生值岗排班系统 - API 层
// ==========================================
// 职责: 面向调用方的业务接口，持有显式结果句柄
// ==========================================

pub mod allocation_api;

pub use allocation_api::AllocationApi;
