// ==========================================
// 泳池救生值岗排班系统 - 排班设置
// ==========================================
// 存储: roster_setting 表单行记录 (id=1)
// ==========================================

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// 排班设置（全局单例行）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSetting {
    /// 营业开始时刻
    pub start: NaiveTime,

    /// 营业结束时刻
    pub end: NaiveTime,

    /// 标准班次时长（小时）
    pub shift_hours: f64,

    /// 加长班次时长（小时），按岗位命名规则启用
    pub special_hours: f64,

    /// 午餐时长（分钟）
    pub lunch_min: i64,

    /// 晚餐时长（分钟）
    pub dinner_min: i64,

    /// 淋浴缓冲时长（分钟），紧接午餐之后
    pub shower_min: i64,

    /// 同一时段允许同时午餐的人数上限
    pub max_concurrent_lunch: i64,

    /// 安全巡检窗口：相对营业开始的偏移分钟列表（有序）
    pub check_windows_min: Vec<i64>,

    /// 单次安全巡检时长（分钟）
    pub check_window_len_min: i64,
}

impl RosterSetting {
    /// 标准班次时长
    pub fn standard_slot_len(&self) -> Duration {
        Duration::minutes((self.shift_hours * 60.0).round() as i64)
    }

    /// 加长班次时长
    pub fn special_slot_len(&self) -> Duration {
        Duration::minutes((self.special_hours * 60.0).round() as i64)
    }

    /// 午餐阻塞时长 = 午餐 + 淋浴缓冲
    pub fn lunch_block_len(&self) -> Duration {
        Duration::minutes(self.lunch_min + self.shower_min)
    }

    /// 晚餐阻塞时长
    pub fn dinner_len(&self) -> Duration {
        Duration::minutes(self.dinner_min)
    }

    /// 单次巡检时长
    pub fn check_len(&self) -> Duration {
        Duration::minutes(self.check_window_len_min)
    }

    /// 解析逗号分隔的巡检偏移列表（忽略空段与非法段）
    pub fn parse_check_windows(raw: &str) -> Vec<i64> {
        raw.split(',')
            .filter_map(|v| v.trim().parse::<i64>().ok())
            .collect()
    }

    /// 巡检偏移列表的存储格式
    pub fn check_windows_to_db(&self) -> String {
        self.check_windows_min
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for RosterSetting {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            shift_hours: 2.0,
            special_hours: 1.5,
            lunch_min: 20,
            dinner_min: 10,
            shower_min: 10,
            max_concurrent_lunch: 2,
            check_windows_min: vec![30, 60, 90, 120],
            check_window_len_min: 10,
        }
    }
}
