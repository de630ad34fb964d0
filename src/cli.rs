use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use variant_browser_common::{FilterCriteria, FrequencyRange, CHROMOSOMES};

#[derive(Parser)]
#[command(name = "variant-browser")]
#[command(about = "Browse called variants from the variant search API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 検索結果を1ページ表示
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// ページ番号
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 検索結果を対話的にページ送りしながら閲覧
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// dbSNP IDのアノテーションをEnsemblから取得
    Annotate {
        /// dbSNP ID（例: rs429358）
        #[arg(required = true)]
        dbsnp_id: String,
    },

    /// 設定の確認・変更
    Config {
        /// 検索APIのURL
        #[arg(long)]
        base_url: Option<String>,

        /// リクエストのタイムアウト（秒）
        #[arg(long)]
        timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 検索条件（ブラウザ版のフォームと同じ項目、頻度は%で指定）
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// 最小リード深度
    #[arg(long)]
    pub min_dp: Option<u32>,

    /// 染色体
    #[arg(long, value_parser = PossibleValuesParser::new(CHROMOSOMES.iter().copied()))]
    pub chromosome: Option<String>,

    #[arg(long)]
    pub min_pos: Option<u64>,

    #[arg(long)]
    pub max_pos: Option<u64>,

    /// 全体のアレル頻度（%）
    #[arg(long)]
    pub min_global: Option<f64>,

    #[arg(long)]
    pub max_global: Option<f64>,

    /// ラテンアメリカ集団のアレル頻度（%）
    #[arg(long)]
    pub min_latin_american: Option<f64>,

    #[arg(long)]
    pub max_latin_american: Option<f64>,

    /// 東アジア集団のアレル頻度（%）
    #[arg(long)]
    pub min_east_asian: Option<f64>,

    #[arg(long)]
    pub max_east_asian: Option<f64>,

    /// 遺伝子名
    #[arg(short, long, default_value = "")]
    pub gene: String,

    /// GATKフィルタがPASSのもののみ
    #[arg(long)]
    pub gatk_pass: bool,

    /// dbSNP IDがあるもののみ
    #[arg(long)]
    pub dbsnp: bool,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_dp: self.min_dp,
            chromosome: self.chromosome.clone(),
            min_pos: self.min_pos,
            max_pos: self.max_pos,
            total_alfa: FrequencyRange::from_percent(self.min_global, self.max_global),
            latin_american_2_alfa: FrequencyRange::from_percent(
                self.min_latin_american,
                self.max_latin_american,
            ),
            east_asian_alfa: FrequencyRange::from_percent(self.min_east_asian, self.max_east_asian),
            gene: self.gene.trim().to_string(),
            gatk_pass: self.gatk_pass,
            is_dbsnp: self.dbsnp,
        }
    }
}
