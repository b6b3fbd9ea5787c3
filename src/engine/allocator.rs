// ==========================================
// 泳池救生值岗排班系统 - 排班编排器
// ==========================================
// 用途: 协调花名册加载、班次切分、择优、交接拆分、
// 巡检轮转、历史落库与报表组装
// 顺序约束: 岗位按难度降序，班次按时间顺序，巡检按配置顺序；
// 该顺序影响负载并列裁决与轮转抽取，必须严格串行
// ==========================================

use crate::domain::history::ShiftRecord;
use crate::domain::types::EntryKind;
use crate::engine::availability::RosterLoader;
use crate::engine::check_rotation::CheckRotation;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::report::{
    build_caption, check_label, slot_label, AllocationResult, FlatRow, GridRow, RosterEntry,
    UNFILLED_MARK,
};
use crate::engine::scoring::CandidateScorer;
use crate::engine::selector::AssignmentSelector;
use crate::engine::slots::{build_slots, slot_len_for};
use crate::engine::swap::SwapResolver;
use crate::repository::{
    DutyPostRepository, GuardRepository, SettingRepository, ShiftHistoryRepository,
};
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tracing::{debug, info, warn};

// ==========================================
// AllocationEngine - 排班编排器
// ==========================================

pub struct AllocationEngine {
    guard_repo: Arc<GuardRepository>,
    post_repo: Arc<DutyPostRepository>,
    setting_repo: Arc<SettingRepository>,
    history_repo: Arc<ShiftHistoryRepository>,
}

impl AllocationEngine {
    pub fn new(
        guard_repo: Arc<GuardRepository>,
        post_repo: Arc<DutyPostRepository>,
        setting_repo: Arc<SettingRepository>,
        history_repo: Arc<ShiftHistoryRepository>,
    ) -> Self {
        Self {
            guard_repo,
            post_repo,
            setting_repo,
            history_repo,
        }
    }

    /// 执行单日排班
    ///
    /// 全部计算完成后才整组替换当日历史；任何失败都发生在落库之前
    /// 或随事务回滚，不留半截结果。
    pub fn run(&self, duty_date: NaiveDate) -> EngineResult<AllocationResult> {
        // ==========================================
        // 步骤1: 加载输入
        // ==========================================
        let setting = self.setting_repo.get()?.ok_or_else(|| {
            EngineError::ConfigurationMissing("roster_setting 表缺少 id=1 的设置行".to_string())
        })?;
        let guards = self.guard_repo.list_present()?;
        let posts = self.post_repo.list_active()?;
        let repeat_pairs = self.history_repo.repeat_pairs(duty_date)?;

        info!(
            duty_date = %duty_date,
            guards = guards.len(),
            posts = posts.len(),
            "开始执行排班"
        );

        let window_start = duty_date.and_time(setting.start);
        let window_end = duty_date.and_time(setting.end);

        // ==========================================
        // 步骤2: 构建运行期状态
        // ==========================================
        let mut roster = RosterLoader::load(guards, &setting, duty_date);
        let scorer = CandidateScorer::new(repeat_pairs);
        let selector = AssignmentSelector::new(&setting, duty_date);
        let mut rotation = CheckRotation::seed(&roster);

        let mut grid: Vec<GridRow> = Vec::new();
        let mut records: Vec<ShiftRecord> = Vec::new();

        // ==========================================
        // 步骤3: 逐岗位、逐班次填充
        // ==========================================
        for post in &posts {
            let slots = build_slots(window_start, window_end, slot_len_for(post, &setting));
            let mut row = GridRow::new(&post.name);

            for (idx, &(slot_start, slot_end)) in slots.iter().enumerate() {
                let label = slot_label(idx + 1, slot_start, slot_end);
                let cell = match selector.select(post, (slot_start, slot_end), &roster, &scorer) {
                    Some(winner) => {
                        let outcome = SwapResolver::resolve(
                            &winner,
                            post,
                            (slot_start, slot_end),
                            duty_date,
                            &mut roster,
                        );
                        records.extend(outcome.records);
                        outcome.cell
                    }
                    None => {
                        warn!(post = %post.name, slot = %label, "班次无人可排");
                        UNFILLED_MARK.to_string()
                    }
                };
                row.push_cell(label, cell);
            }

            // ==========================================
            // 步骤4: 水域岗的安全巡检轮转
            // ==========================================
            if post.is_water {
                for (idx, &offset) in setting.check_windows_min.iter().enumerate() {
                    let check_start = window_start + Duration::minutes(offset);
                    let check_end = std::cmp::min(check_start + setting.check_len(), window_end);
                    let label = check_label(idx + 1);

                    // 游标抽取前已前进，空缺也不回退
                    let drawn = rotation.draw().map(|name| name.to_string());
                    let cell = match drawn {
                        Some(name)
                            if check_start < check_end
                                && roster
                                    .get(&name)
                                    .map(|s| s.is_available(check_start, check_end))
                                    .unwrap_or(false) =>
                        {
                            if let Some(state) = roster.get_mut(&name) {
                                state.assign(check_start, check_end);
                            }
                            records.push(ShiftRecord::new(
                                duty_date,
                                &name,
                                &post.name,
                                check_start.time(),
                                check_end.time(),
                                EntryKind::Check,
                            ));
                            name
                        }
                        _ => {
                            debug!(post = %post.name, check = %label, "巡检窗口空缺");
                            UNFILLED_MARK.to_string()
                        }
                    };
                    row.push_cell(label, cell);
                }
            }

            grid.push(row);
        }

        // ==========================================
        // 步骤5: 组装结果并落库
        // ==========================================
        let flat: Vec<FlatRow> = records.iter().map(FlatRow::from).collect();
        let roster_snapshot: Vec<RosterEntry> = roster
            .values()
            .map(|state| RosterEntry {
                name: state.guard.name.clone(),
                skill: state.guard.skill,
                role: state.guard.role,
                team: state.guard.team.clone(),
            })
            .collect();
        let caption = build_caption(duty_date, &setting);

        self.history_repo.replace_for_date(duty_date, &records)?;

        info!(
            duty_date = %duty_date,
            committed = records.len(),
            "排班完成并已落库"
        );

        Ok(AllocationResult {
            duty_date,
            grid,
            flat,
            roster: roster_snapshot,
            caption,
        })
    }
}
