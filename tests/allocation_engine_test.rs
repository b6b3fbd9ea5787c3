// ==========================================
// 排班引擎集成测试
// ==========================================
// 测试范围:
// 1. 单班次/单人基础场景
// 2. 午餐与晚餐阻塞
// 3. 巡检轮转与组长回退
// 4. 同日重跑的整组替换与重复惩罚分流
// 5. 交接拆分
// 6. 区间互斥性质
// 7. 配置缺失与空缺处理
// ==========================================


use chrono::{NaiveDate, NaiveTime};
use pool_duty_roster::app::AppState;
use pool_duty_roster::domain::types::{Difficulty, EntryKind, GuardRole, SkillLevel};
use pool_duty_roster::domain::RosterSetting;
use pool_duty_roster::engine::{EngineError, UNFILLED_MARK};
use tempfile::NamedTempFile;
use test_helpers::{create_test_db, hm, make_guard, make_post};

// ==========================================
// 辅助函数
// ==========================================

fn setup() -> (NamedTempFile, AppState) {
    let (temp_file, db_path) = create_test_db().expect("创建测试数据库失败");
    let app = AppState::new(db_path).expect("初始化AppState失败");
    (temp_file, app)
}

fn duty_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 27).expect("日期非法")
}

/// 两小时一班、窗口 09:00-11:00 的最小设置
fn short_window_setting() -> RosterSetting {
    RosterSetting {
        start: hm("09:00"),
        end: hm("11:00"),
        ..RosterSetting::default()
    }
}

// ==========================================
// 场景测试
// ==========================================

#[test]
fn scenario_a_single_slot_single_guard() {
    let (_tmp, app) = setup();
    app.setting_repo
        .save(&short_window_setting())
        .expect("写入设置失败");
    app.guard_repo
        .create(&make_guard("张三", SkillLevel::Expert, GuardRole::Standard))
        .expect("创建救生员失败");
    app.post_repo
        .create(&make_post("浅水区", Difficulty::Easy, false))
        .expect("创建岗位失败");

    let result = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("排班应成功");

    // 恰好一个班次 09:00-11:00，由张三值守
    assert_eq!(result.flat.len(), 1);
    let row = &result.flat[0];
    assert_eq!(row.post, "浅水区");
    assert_eq!(row.start, "09:00");
    assert_eq!(row.end, "11:00");
    assert_eq!(row.assignee, "张三");
    assert_eq!(row.kind, EntryKind::General);

    assert_eq!(result.grid.len(), 1);
    assert_eq!(
        result.grid[0].cell("班次 1 (09:00-11:00)"),
        Some("张三")
    );

    // 历史与平铺行数一致
    let count = app
        .history_repo
        .count_for_date(duty_date())
        .expect("查询历史失败");
    assert_eq!(count, 1);
}

#[test]
fn scenario_b_lunch_and_dinner_block_slots() {
    let (_tmp, app) = setup();
    app.setting_repo
        .save(&RosterSetting::default())
        .expect("写入设置失败");

    let mut guard = make_guard("张三", SkillLevel::Expert, GuardRole::Standard);
    guard.lunch_at = Some(hm("12:00"));
    app.guard_repo.create(&guard).expect("创建救生员失败");
    app.post_repo
        .create(&make_post("浅水区", Difficulty::Easy, false))
        .expect("创建岗位失败");

    let result = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("排班应成功");

    let row = &result.grid[0];
    assert_eq!(row.cell("班次 1 (09:00-11:00)"), Some("张三"));
    // 午餐 [12:00, 12:30) 阻塞跨越它的班次
    assert_eq!(row.cell("班次 2 (11:00-13:00)"), Some(UNFILLED_MARK));
    // 全员晚餐 [17:00, 17:10) 阻塞跨越它的班次
    assert_eq!(row.cell("班次 5 (17:00-19:00)"), Some(UNFILLED_MARK));
    assert_eq!(row.cell("班次 3 (13:00-15:00)"), Some("张三"));

    // 任何已提交区间都不与 [12:00, 12:30) 相交
    for flat in &result.flat {
        let start = NaiveTime::parse_from_str(&flat.start, "%H:%M").expect("时刻非法");
        let end = NaiveTime::parse_from_str(&flat.end, "%H:%M").expect("时刻非法");
        assert!(
            end <= hm("12:00") || start >= hm("12:30"),
            "区间 {}-{} 不应与午餐窗口相交",
            flat.start,
            flat.end
        );
    }
}

#[test]
fn scenario_c_check_rotation_falls_back_to_leads() {
    let (_tmp, app) = setup();
    let setting = RosterSetting {
        check_windows_min: vec![30],
        ..short_window_setting()
    };
    app.setting_repo.save(&setting).expect("写入设置失败");

    // 没有巡检员，只有两名组长
    app.guard_repo
        .create(&make_guard("张三", SkillLevel::Expert, GuardRole::Lead))
        .expect("创建救生员失败");
    app.guard_repo
        .create(&make_guard("李四", SkillLevel::Expert, GuardRole::Lead))
        .expect("创建救生员失败");
    app.post_repo
        .create(&make_post("跳水池", Difficulty::Hard, true))
        .expect("创建岗位失败");

    let result = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("排班应成功");

    // 班次由姓名序靠前的组长值守
    let row = &result.grid[0];
    assert_eq!(row.cell("班次 1 (09:00-11:00)"), Some("张三"));

    // 轮转名单 [张三, 李四]，抽取前游标先进一位 -> 首抽是李四
    assert_eq!(row.cell("安全巡检 1"), Some("李四"));

    let check_rows: Vec<_> = result
        .flat
        .iter()
        .filter(|r| r.kind == EntryKind::Check)
        .collect();
    assert_eq!(check_rows.len(), 1);
    assert_eq!(check_rows[0].assignee, "李四");
    assert_eq!(check_rows[0].start, "09:30");
    assert_eq!(check_rows[0].end, "09:40");
}

#[test]
fn scenario_d_rerun_replaces_history_and_diverges_by_repeat_penalty() {
    let (_tmp, app) = setup();
    app.setting_repo
        .save(&short_window_setting())
        .expect("写入设置失败");
    app.guard_repo
        .create(&make_guard("张三", SkillLevel::Expert, GuardRole::Standard))
        .expect("创建救生员失败");
    app.guard_repo
        .create(&make_guard("李四", SkillLevel::Expert, GuardRole::Standard))
        .expect("创建救生员失败");
    app.post_repo
        .create(&make_post("休息区", Difficulty::Easy, false))
        .expect("创建岗位失败");

    let first = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("首次排班应成功");
    assert_eq!(first.flat[0].assignee, "张三");

    let second = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("重跑应成功");

    // 同日重跑: 首跑结果进入历史，重复惩罚把班次让给李四。
    // 这是既定行为（输入未变但输出可因自身历史分流），不是缺陷。
    assert_eq!(second.flat[0].assignee, "李四");

    // 整组替换: 行数等于第二次输出的行数，而不是两次之和
    let count = app
        .history_repo
        .count_for_date(duty_date())
        .expect("查询历史失败");
    assert_eq!(count, second.flat.len() as i64);
    assert_eq!(count, 1);
}

#[test]
fn swap_splits_slot_between_primary_and_backup() {
    let (_tmp, app) = setup();
    app.setting_repo
        .save(&short_window_setting())
        .expect("写入设置失败");

    let mut primary = make_guard("张三", SkillLevel::Expert, GuardRole::Standard);
    primary.swap_at = Some(hm("10:00"));
    primary.backup_name = Some("李四".to_string());
    app.guard_repo.create(&primary).expect("创建救生员失败");
    app.guard_repo
        .create(&make_guard("李四", SkillLevel::Expert, GuardRole::Standard))
        .expect("创建救生员失败");
    app.post_repo
        .create(&make_post("浅水区", Difficulty::Easy, false))
        .expect("创建岗位失败");

    let result = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("排班应成功");

    assert_eq!(result.flat.len(), 2);
    assert_eq!(result.flat[0].assignee, "张三");
    assert_eq!(result.flat[0].end, "10:00");
    assert_eq!(result.flat[1].assignee, "李四");
    assert_eq!(result.flat[1].start, "10:00");
    assert_eq!(result.flat[1].end, "11:00");

    let cell = result.grid[0]
        .cell("班次 1 (09:00-11:00)")
        .expect("单元格应存在");
    assert!(cell.contains(" | "), "拆分单元格应为组合标签: {}", cell);

    let count = app
        .history_repo
        .count_for_date(duty_date())
        .expect("查询历史失败");
    assert_eq!(count, 2);
}

#[test]
fn committed_intervals_per_guard_are_pairwise_disjoint() {
    let (_tmp, app) = setup();
    let setting = RosterSetting {
        start: hm("09:00"),
        end: hm("15:00"),
        check_windows_min: vec![30, 60],
        ..RosterSetting::default()
    };
    app.setting_repo.save(&setting).expect("写入设置失败");

    for (name, skill, role) in [
        ("张三", SkillLevel::Expert, GuardRole::Lead),
        ("李四", SkillLevel::Expert, GuardRole::Standard),
        ("王五", SkillLevel::Medium, GuardRole::Standard),
        ("赵六", SkillLevel::Medium, GuardRole::Inspector),
        ("钱七", SkillLevel::Low, GuardRole::Standard),
    ] {
        app.guard_repo
            .create(&make_guard(name, skill, role))
            .expect("创建救生员失败");
    }
    app.post_repo
        .create(&make_post("跳水池", Difficulty::Hard, true))
        .expect("创建岗位失败");
    app.post_repo
        .create(&make_post("主泳道", Difficulty::Medium, true))
        .expect("创建岗位失败");
    app.post_repo
        .create(&make_post("更衣区", Difficulty::Easy, false))
        .expect("创建岗位失败");

    let result = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("排班应成功");

    // 按人归组，校验任意两条已提交区间互不重叠
    let mut by_guard: std::collections::HashMap<&str, Vec<(NaiveTime, NaiveTime)>> =
        std::collections::HashMap::new();
    for row in &result.flat {
        let start = NaiveTime::parse_from_str(&row.start, "%H:%M").expect("时刻非法");
        let end = NaiveTime::parse_from_str(&row.end, "%H:%M").expect("时刻非法");
        by_guard.entry(&row.assignee).or_default().push((start, end));
    }
    for (guard, intervals) in by_guard {
        for i in 0..intervals.len() {
            for j in (i + 1)..intervals.len() {
                let (a_start, a_end) = intervals[i];
                let (b_start, b_end) = intervals[j];
                assert!(
                    a_end <= b_start || b_end <= a_start,
                    "{} 的区间 {:?} 与 {:?} 重叠",
                    guard,
                    intervals[i],
                    intervals[j]
                );
            }
        }
    }
}

// ==========================================
// 异常与空缺
// ==========================================

#[test]
fn missing_settings_aborts_before_any_persistence() {
    let (_tmp, app) = setup();
    app.setting_repo.clear().expect("清除设置失败");
    app.guard_repo
        .create(&make_guard("张三", SkillLevel::Expert, GuardRole::Standard))
        .expect("创建救生员失败");
    app.post_repo
        .create(&make_post("浅水区", Difficulty::Easy, false))
        .expect("创建岗位失败");

    let err = app
        .allocation_api
        .run_allocation(duty_date())
        .expect_err("设置缺失应报错");
    assert!(matches!(err, EngineError::ConfigurationMissing(_)));

    let count = app
        .history_repo
        .count_for_date(duty_date())
        .expect("查询历史失败");
    assert_eq!(count, 0);
}

#[test]
fn no_guards_yields_unfilled_cells_not_errors() {
    let (_tmp, app) = setup();
    app.setting_repo
        .save(&short_window_setting())
        .expect("写入设置失败");
    app.post_repo
        .create(&make_post("浅水区", Difficulty::Easy, false))
        .expect("创建岗位失败");

    let result = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("无人可排也应正常返回");

    assert!(result.flat.is_empty());
    assert_eq!(
        result.grid[0].cell("班次 1 (09:00-11:00)"),
        Some(UNFILLED_MARK)
    );
    let count = app
        .history_repo
        .count_for_date(duty_date())
        .expect("查询历史失败");
    assert_eq!(count, 0);
}

#[test]
fn inactive_posts_and_absent_guards_are_ignored() {
    let (_tmp, app) = setup();
    app.setting_repo
        .save(&short_window_setting())
        .expect("写入设置失败");

    app.guard_repo
        .create(&make_guard("张三", SkillLevel::Expert, GuardRole::Standard))
        .expect("创建救生员失败");
    app.guard_repo
        .create(&make_guard("李四", SkillLevel::Expert, GuardRole::Lead))
        .expect("创建救生员失败");
    app.guard_repo
        .set_presence("李四", false)
        .expect("更新在岗标记失败");

    app.post_repo
        .create(&make_post("浅水区", Difficulty::Easy, false))
        .expect("创建岗位失败");
    let mut closed = make_post("维修中泳道", Difficulty::Medium, false);
    closed.active_today = false;
    app.post_repo.create(&closed).expect("创建岗位失败");

    let result = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("排班应成功");

    // 停用岗位不出现在矩阵中；缺勤组长不参与（否则组长优先会胜出）
    assert_eq!(result.grid.len(), 1);
    assert_eq!(result.grid[0].post, "浅水区");
    assert_eq!(result.flat[0].assignee, "张三");
    assert_eq!(result.roster.len(), 1);
}
