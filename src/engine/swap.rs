// ==========================================
// 泳池救生值岗排班系统 - 交接拆分解析器
// ==========================================
// 职责: 胜出者的交接时刻严格落在班次内部、且接替人在
// [交接, 班次结束) 可用时，将班次拆为两段子分配；
// 否则由胜出者覆盖整个班次。
// ==========================================

use crate::domain::history::ShiftRecord;
use crate::domain::post::DutyPost;
use crate::domain::types::EntryKind;
use crate::engine::availability::GuardState;
use crate::engine::report;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::debug;

/// 单班次的提交结果
#[derive(Debug, Clone)]
pub struct SwapOutcome {
    /// 矩阵单元格文本（姓名或拆分标签）
    pub cell: String,
    /// 产生的排班记录（拆分时为两条）
    pub records: Vec<ShiftRecord>,
}

/// 交接拆分解析器
pub struct SwapResolver;

impl SwapResolver {
    /// 提交胜出者的班次，必要时按交接配置拆分
    ///
    /// 副作用: 向胜出者（及接替人）的可用性状态写入对应区间。
    pub fn resolve(
        winner: &str,
        post: &DutyPost,
        slot: (NaiveDateTime, NaiveDateTime),
        duty_date: NaiveDate,
        roster: &mut BTreeMap<String, GuardState>,
    ) -> SwapOutcome {
        let (slot_start, slot_end) = slot;
        let kind = if post.is_water {
            EntryKind::Water
        } else {
            EntryKind::General
        };

        let Some(winner_state) = roster.get(winner) else {
            return SwapOutcome {
                cell: report::UNFILLED_MARK.to_string(),
                records: Vec::new(),
            };
        };
        let swap_at = winner_state.guard.swap_at;
        let backup_name = winner_state.guard.backup_name.clone();

        if let (Some(swap_at), Some(backup_name)) = (swap_at, backup_name) {
            let swap_dt = duty_date.and_time(swap_at);
            if slot_start < swap_dt && swap_dt < slot_end {
                let backup_free = roster
                    .get(&backup_name)
                    .map(|b| b.is_available(swap_dt, slot_end))
                    .unwrap_or(false);

                if backup_free {
                    if let Some(state) = roster.get_mut(winner) {
                        state.assign(slot_start, swap_dt);
                    }
                    if let Some(state) = roster.get_mut(&backup_name) {
                        state.assign(swap_dt, slot_end);
                    }
                    debug!(
                        post = %post.name,
                        primary = %winner,
                        backup = %backup_name,
                        swap_at = %swap_dt.time(),
                        "班次按交接配置拆分"
                    );

                    let cell = format!(
                        "{} ({}-{}) | {} ({}-{})",
                        winner,
                        report::fmt_hm(slot_start),
                        report::fmt_hm(swap_dt),
                        backup_name,
                        report::fmt_hm(swap_dt),
                        report::fmt_hm(slot_end),
                    );
                    return SwapOutcome {
                        cell,
                        records: vec![
                            ShiftRecord::new(
                                duty_date,
                                winner,
                                &post.name,
                                slot_start.time(),
                                swap_dt.time(),
                                kind,
                            ),
                            ShiftRecord::new(
                                duty_date,
                                &backup_name,
                                &post.name,
                                swap_dt.time(),
                                slot_end.time(),
                                kind,
                            ),
                        ],
                    };
                }
            }
        }

        // 不拆分: 胜出者覆盖整个班次
        if let Some(state) = roster.get_mut(winner) {
            state.assign(slot_start, slot_end);
        }
        SwapOutcome {
            cell: winner.to_string(),
            records: vec![ShiftRecord::new(
                duty_date,
                winner,
                &post.name,
                slot_start.time(),
                slot_end.time(),
                kind,
            )],
        }
    }
}
