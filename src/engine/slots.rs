// ==========================================
// 泳池救生值岗排班系统 - 班次切分
// ==========================================
// 职责: 将岗位的营业窗口切分为有序、连续、不重叠的班次
// 纯函数，不依赖任何运行期状态
// ==========================================

use crate::domain::post::DutyPost;
use crate::domain::setting::RosterSetting;
use chrono::{Duration, NaiveDateTime};

/// 加长班次的岗位命名标记（深水类岗位）
pub const EXTENDED_SLOT_MARKER: &str = "深水";

/// 岗位的班次时长
///
/// 命名规则: 名称含括号或含深水标记的岗位使用加长班次，其余使用标准班次。
pub fn slot_len_for(post: &DutyPost, setting: &RosterSetting) -> Duration {
    if post.name.contains('(') || post.name.contains(EXTENDED_SLOT_MARKER) {
        setting.special_slot_len()
    } else {
        setting.standard_slot_len()
    }
}

/// 切分营业窗口 [start, end) 为班次序列
///
/// 每个班次为 slot_len，末班截断到恰好在 end 结束；
/// 班次数 = ceil((end - start) / slot_len)。
pub fn build_slots(
    start: NaiveDateTime,
    end: NaiveDateTime,
    slot_len: Duration,
) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let mut slots = Vec::new();
    if slot_len <= Duration::zero() {
        return slots;
    }

    let mut cursor = start;
    while cursor < end {
        let slot_end = std::cmp::min(cursor + slot_len, end);
        slots.push((cursor, slot_end));
        cursor = slot_end;
    }
    slots
}
