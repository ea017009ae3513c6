// ==========================================
// 门店库存调拨决策支持系统 - 命令行入口
// ==========================================
// 用法:
//   store-transfer-dss <库存快照文件> --date <YYYY-MM-DD> [选项]
//
// 从 CSV/Excel 快照出发, 生成达标明细表与调拨建议表
// ==========================================

use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use store_transfer_dss::api::{ProcessDataRequest, TransferApi};
use store_transfer_dss::config::{PipelineConfig, TransferThresholds};
use store_transfer_dss::domain::types::{GroupScope, MatchOrdering};
use store_transfer_dss::i18n::{set_locale, t_with_args};
use store_transfer_dss::logging;
use store_transfer_dss::source::{FileSource, FilterSelection};

/// 解析后的命令行参数
struct CliArgs {
    input_file: PathBuf,
    threshold_date: NaiveDate,
    as_of: NaiveDate,
    scope: GroupScope,
    ordering: MatchOrdering,
    sell_through_threshold: i64,
    days_threshold: i64,
    filters: FilterSelection,
    out_dir: Option<PathBuf>,
}

const USAGE: &str = r#"用法:
  store-transfer-dss <库存快照文件> --date <YYYY-MM-DD> [选项]

选项:
  --date <YYYY-MM-DD>        季节上市日期 (日期归一阈值, 必填)
  --as-of <YYYY-MM-DD>       库龄基准日 (默认: 今天)
  --scope <network|city>     分组口径 (默认: network)
  --ordering <input-order|sku-then-magnitude>
                             配对遍历顺序 (默认: input-order)
  --sell-through <0-100>     款式卖通率阈值 (默认: 60)
  --days <天数>              款式最小库龄阈值 (默认: 30)
  --volume <值>              波段过滤 (可重复)
  --product-type <值>        品类过滤 (可重复)
  --season <值>              季节过滤 (可重复)
  --year <年份>              年份过滤 (可重复)
  --region <城市>            城市过滤 (可重复)
  --out-dir <目录>           导出 eligible.csv / transfers.csv 到该目录
  --locale <zh-CN|en>        输出语言 (默认: zh-CN)
"#;

fn parse_args(args: Vec<String>) -> anyhow::Result<CliArgs> {
    let mut input_file: Option<PathBuf> = None;
    let mut threshold_date: Option<NaiveDate> = None;
    let mut as_of: Option<NaiveDate> = None;
    let mut scope = GroupScope::Network;
    let mut ordering = MatchOrdering::InputOrder;
    let mut sell_through_threshold: i64 = 60;
    let mut days_threshold: i64 = 30;
    let mut filters = FilterSelection::none();
    let mut out_dir: Option<PathBuf> = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--date" => threshold_date = Some(parse_date(&next_value(&mut iter, "--date")?)?),
            "--as-of" => as_of = Some(parse_date(&next_value(&mut iter, "--as-of")?)?),
            "--scope" => {
                let value = next_value(&mut iter, "--scope")?;
                scope = GroupScope::from_str_opt(&value)
                    .ok_or_else(|| anyhow::anyhow!("无效的分组口径: {}", value))?;
            }
            "--ordering" => {
                let value = next_value(&mut iter, "--ordering")?;
                ordering = MatchOrdering::from_str_opt(&value)
                    .ok_or_else(|| anyhow::anyhow!("无效的配对顺序: {}", value))?;
            }
            "--sell-through" => {
                sell_through_threshold = next_value(&mut iter, "--sell-through")?.parse()?;
            }
            "--days" => days_threshold = next_value(&mut iter, "--days")?.parse()?,
            "--volume" => push_filter(&mut filters.volumes, next_value(&mut iter, "--volume")?),
            "--product-type" => {
                push_filter(&mut filters.product_types, next_value(&mut iter, "--product-type")?)
            }
            "--season" => push_filter(&mut filters.seasons, next_value(&mut iter, "--season")?),
            "--year" => {
                let year: i32 = next_value(&mut iter, "--year")?.parse()?;
                filters.years.get_or_insert_with(Vec::new).push(year);
            }
            "--region" => push_filter(&mut filters.regions, next_value(&mut iter, "--region")?),
            "--out-dir" => out_dir = Some(PathBuf::from(next_value(&mut iter, "--out-dir")?)),
            "--locale" => set_locale(&next_value(&mut iter, "--locale")?),
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                anyhow::bail!("未知选项: {}\n{}", other, USAGE);
            }
            other => {
                if input_file.is_some() {
                    anyhow::bail!("重复的输入文件参数: {}\n{}", other, USAGE);
                }
                input_file = Some(PathBuf::from(other));
            }
        }
    }

    let input_file = input_file.ok_or_else(|| anyhow::anyhow!("缺少输入文件\n{}", USAGE))?;
    let threshold_date =
        threshold_date.ok_or_else(|| anyhow::anyhow!("缺少 --date 参数\n{}", USAGE))?;
    let as_of = as_of.unwrap_or_else(|| chrono::Local::now().date_naive());

    Ok(CliArgs {
        input_file,
        threshold_date,
        as_of,
        scope,
        ordering,
        sell_through_threshold,
        days_threshold,
        filters,
        out_dir,
    })
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    iter.next()
        .ok_or_else(|| anyhow::anyhow!("选项 {} 缺少取值", flag))
}

fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("无效的日期 (期望 YYYY-MM-DD): {}", value))
}

fn push_filter(slot: &mut Option<Vec<String>>, value: String) {
    slot.get_or_insert_with(Vec::new).push(value);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    println!("==================================================");
    println!("{}", store_transfer_dss::APP_NAME);
    println!("系统版本: {}", store_transfer_dss::VERSION);
    println!("==================================================");

    let cli = parse_args(std::env::args().skip(1).collect())?;

    if !cli.input_file.exists() {
        anyhow::bail!(t_with_args(
            "import.file_not_found",
            &[("path", &cli.input_file.display().to_string())]
        ));
    }

    let mut config = PipelineConfig::new(cli.threshold_date, cli.as_of);
    config.thresholds = TransferThresholds {
        threshold_date: cli.threshold_date,
        sell_through_threshold: cli.sell_through_threshold,
        days_threshold: cli.days_threshold,
    };
    config.scope = cli.scope;
    config.ordering = cli.ordering;

    let provider = Arc::new(FileSource::new(cli.input_file.clone()));
    let api = TransferApi::new(provider);

    let request = ProcessDataRequest {
        filters: cli.filters,
        config,
        include_exports: cli.out_dir.is_some(),
    };

    let response = api.process_data(request).await?;

    if let Some(notice) = &response.notice {
        println!("{}", notice);
        return Ok(());
    }

    println!("run_id={}", response.run_id);
    println!("输入行数: {}", response.stats.input_rows);
    println!("聚合行数: {}", response.stats.aggregated_rows);
    println!("达标行数: {}", response.stats.eligible_rows);
    println!(
        "调出/调入门店行: {}/{}",
        response.stats.sender_rows, response.stats.receiver_rows
    );
    println!("调拨总量: {}", response.stats.units_moved);
    println!(
        "未平衡量 (缺口/盈余): {}/{}",
        response.stats.open_deficit, response.stats.open_surplus
    );
    println!(
        "{}",
        t_with_args(
            "pipeline.completed",
            &[("recommendations", &response.stats.recommendation_count.to_string())]
        )
    );

    if let Some(out_dir) = &cli.out_dir {
        std::fs::create_dir_all(out_dir)?;

        if let Some(bytes) = &response.eligible_csv {
            let path = out_dir.join("eligible.csv");
            std::fs::write(&path, bytes)?;
            println!("{}", t_with_args("export.written", &[("path", &path.display().to_string())]));
        }
        if let Some(bytes) = &response.transfer_csv {
            let path = out_dir.join("transfers.csv");
            std::fs::write(&path, bytes)?;
            println!("{}", t_with_args("export.written", &[("path", &path.display().to_string())]));
        }
    }

    Ok(())
}
