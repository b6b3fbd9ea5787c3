// ==========================================
// 泳池救生值岗排班系统 - 命令行入口
// ==========================================
// 用法:
//   pool-duty-roster [db_path]
// 流程: 初始化日志 -> 装配 AppState -> 执行今日排班 -> 打印结果
// ==========================================

use pool_duty_roster::app::{get_default_db_path, AppState};

fn main() {
    // 初始化日志系统
    pool_duty_roster::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", pool_duty_roster::APP_NAME);
    tracing::info!("系统版本: {}", pool_duty_roster::VERSION);
    tracing::info!("==================================================");

    // 数据库路径: 命令行参数优先
    let db_path = std::env::args().nth(1).unwrap_or_else(get_default_db_path);
    tracing::info!("使用数据库: {}", db_path);

    let app_state = AppState::new(db_path).expect("无法初始化AppState");

    let today = chrono::Local::now().date_naive();
    match app_state.allocation_api.run_allocation(today) {
        Ok(result) => {
            println!("{}", result.caption);
            println!();
            for row in &result.flat {
                println!(
                    "{:<16} {} - {}  {:<10} {}",
                    row.post, row.start, row.end, row.assignee, row.kind
                );
            }
            if result.flat.is_empty() {
                println!("(今日无可排班次: 请检查在岗救生员与启用岗位)");
            }
        }
        Err(e) => {
            tracing::error!("排班失败: {}", e);
            std::process::exit(1);
        }
    }
}
