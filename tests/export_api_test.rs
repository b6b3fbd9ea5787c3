// ==========================================
// 导出与 API 集成测试
// ==========================================
// 测试范围:
// 1. 未排班时的导出未就绪错误
// 2. 矩阵视图 CSV 的表头与单元格
// 3. 平铺视图 CSV 的表头与数据行
// 4. 空平铺清单导出失败而矩阵导出仍可用
// ==========================================


use chrono::NaiveDate;
use pool_duty_roster::app::AppState;
use pool_duty_roster::domain::types::{Difficulty, GuardRole, SkillLevel};
use pool_duty_roster::domain::RosterSetting;
use pool_duty_roster::engine::{EngineError, UNFILLED_MARK};
use tempfile::NamedTempFile;
use test_helpers::{create_test_db, hm, make_guard, make_post};

fn setup() -> (NamedTempFile, AppState) {
    let (temp_file, db_path) = create_test_db().expect("创建测试数据库失败");
    let app = AppState::new(db_path).expect("初始化AppState失败");
    (temp_file, app)
}

fn duty_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 27).expect("日期非法")
}

fn short_window_setting() -> RosterSetting {
    RosterSetting {
        start: hm("09:00"),
        end: hm("11:00"),
        ..RosterSetting::default()
    }
}

fn read_csv(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(bytes);
    let header = reader
        .headers()
        .expect("CSV 表头应可读")
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = reader
        .records()
        .map(|r| {
            r.expect("CSV 数据行应可读")
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
        .collect();
    (header, rows)
}

#[test]
fn export_before_any_run_is_not_ready() {
    let (_tmp, app) = setup();

    let err = app
        .allocation_api
        .export_grid_csv()
        .expect_err("未排班时矩阵导出应失败");
    assert!(matches!(err, EngineError::ExportNotReady(_)));

    let err = app
        .allocation_api
        .export_flat_csv()
        .expect_err("未排班时平铺导出应失败");
    assert!(matches!(err, EngineError::ExportNotReady(_)));

    assert!(app
        .allocation_api
        .last_result()
        .expect("读取缓存失败")
        .is_none());
}

#[test]
fn grid_csv_has_post_column_and_slot_labels() {
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

    app.allocation_api
        .run_allocation(duty_date())
        .expect("排班应成功");

    let bytes = app
        .allocation_api
        .export_grid_csv()
        .expect("矩阵导出应成功");
    let (header, rows) = read_csv(&bytes);

    assert_eq!(header, vec!["岗位", "班次 1 (09:00-11:00)"]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec!["浅水区", "张三"]);
}

#[test]
fn flat_csv_header_and_rows() {
    let (_tmp, app) = setup();
    let setting = RosterSetting {
        check_windows_min: vec![30],
        ..short_window_setting()
    };
    app.setting_repo.save(&setting).expect("写入设置失败");
    app.guard_repo
        .create(&make_guard("张三", SkillLevel::Expert, GuardRole::Standard))
        .expect("创建救生员失败");
    app.guard_repo
        .create(&make_guard("赵六", SkillLevel::Medium, GuardRole::Inspector))
        .expect("创建救生员失败");
    app.post_repo
        .create(&make_post("主泳道", Difficulty::Medium, true))
        .expect("创建岗位失败");

    app.allocation_api
        .run_allocation(duty_date())
        .expect("排班应成功");

    let bytes = app
        .allocation_api
        .export_flat_csv()
        .expect("平铺导出应成功");
    let (header, rows) = read_csv(&bytes);

    assert_eq!(header, vec!["Post", "Start", "End", "Assignee", "Kind"]);
    // 水域岗班次 + 一次安全巡检
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["主泳道", "09:00", "11:00", "张三", "WATER"]);
    assert_eq!(rows[1], vec!["主泳道", "09:30", "09:40", "赵六", "CHECK"]);
}

#[test]
fn empty_flat_list_fails_while_grid_still_exports() {
    let (_tmp, app) = setup();
    app.setting_repo
        .save(&short_window_setting())
        .expect("写入设置失败");
    // 只有岗位没有救生员: 矩阵全部空缺，平铺清单为空
    app.post_repo
        .create(&make_post("浅水区", Difficulty::Easy, false))
        .expect("创建岗位失败");

    app.allocation_api
        .run_allocation(duty_date())
        .expect("无人可排也应正常返回");

    let bytes = app
        .allocation_api
        .export_grid_csv()
        .expect("矩阵导出应成功");
    let (_, rows) = read_csv(&bytes);
    assert_eq!(rows[0], vec!["浅水区", UNFILLED_MARK]);

    let err = app
        .allocation_api
        .export_flat_csv()
        .expect_err("空平铺清单导出应失败");
    assert!(matches!(err, EngineError::ExportNotReady(_)));
}

#[test]
fn rerun_refreshes_cached_result() {
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
        .create(&make_post("浅水区", Difficulty::Easy, false))
        .expect("创建岗位失败");

    app.allocation_api
        .run_allocation(duty_date())
        .expect("首次排班应成功");
    let second = app
        .allocation_api
        .run_allocation(duty_date())
        .expect("重跑应成功");

    // 导出读取的是最近一次结果
    let bytes = app
        .allocation_api
        .export_flat_csv()
        .expect("平铺导出应成功");
    let (_, rows) = read_csv(&bytes);
    assert_eq!(rows.len(), second.flat.len());
    assert_eq!(rows[0][3], second.flat[0].assignee);
}
