use std::error::Error;
use std::fmt;

use rand::Rng;
use serde::Serialize;
use tally_core::app::StatusCounts;
use tally_core::{ActionOutput, EventSink, ReportConfig, ReporterBuilder, Task};
use tokio::time::{Duration, sleep};
use tracing_subscriber::EnvFilter;

/// What the simulated host decides for one task.
#[derive(Debug, Clone, Copy)]
enum Plan {
    UpToDate,
    Ignore,
    Run { fail: bool },
}

#[derive(Debug)]
struct ExitCode(i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command exited with code {}", self.0)
    }
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    report: String,
    counts: StatusCounts,
    errors: &'a [String],
}

fn plan(rng: &mut impl Rng) -> Plan {
    match rng.gen_range(0..10) {
        0 | 1 => Plan::UpToDate,
        2 => Plan::Ignore,
        3 => Plan::Run { fail: true },
        _ => Plan::Run { fail: false },
    }
}

/// 疑似ホスト：./run.sh N 相当のアクションを持つタスクを N 個流す
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // (A) 設定：引数があれば JSON 設定ファイルとして読む
    let config = match std::env::args().nth(1) {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    let report = config.output_path.display().to_string();
    let mut reporter = ReporterBuilder::new(config).build()?;

    // (B) タスク定義（ホストの task discovery 相当）
    let mut tasks: Vec<Task> = (1..100).map(|i| Task::new(format!("task{i}"))).collect();
    reporter.initialize(&tasks)?;
    tracing::info!(report = %report, tasks = tasks.len(), "starting simulated run");

    // (C) 直列に実行しながら、各イベントを reporter に渡す
    let mut rng = rand::thread_rng();
    for (i, task) in tasks.iter_mut().enumerate() {
        let n = i + 1;
        reporter.get_status(task)?;
        match plan(&mut rng) {
            Plan::UpToDate => reporter.skip_uptodate(task)?,
            Plan::Ignore => reporter.skip_ignore(task)?,
            Plan::Run { fail } => {
                reporter.execute_task(task)?;
                sleep(Duration::from_millis(rng.gen_range(20..120))).await;

                if fail {
                    task.actions
                        .push(ActionOutput::new("", format!("./run.sh {n}: out/{n} not produced")));
                    reporter.add_failure(task, &ExitCode(1))?;
                } else {
                    task.actions
                        .push(ActionOutput::new(format!("in/{n} -> out/{n}"), ""));
                    reporter.add_success(task)?;
                }
            }
        }
    }

    if rng.gen_bool(0.2) {
        reporter.cleanup_error(&"failed to remove temporary directory")?;
    }

    // (D) 最終描画とサマリ出力
    reporter.complete_run()?;
    let summary = Summary {
        report,
        counts: reporter.run_status().counts(),
        errors: reporter.errors(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
