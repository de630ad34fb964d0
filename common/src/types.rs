//! 検索結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - VariantRow: `/api/data` が返す1行分のバリアント
//! - PageResult: 1ページ分の検索結果とページ情報
//! - ErrorPayload: 失敗時の `{ "error": ... }` レスポンス

use serde::{Deserialize, Deserializer, Serialize};

/// 行の識別子（詳細行・アノテーション状態のキー）
pub type RowId = u64;

/// 値が無い場合のプレースホルダ
pub const NOT_AVAILABLE: &str = "N/D";

const DBSNP_URL: &str = "https://www.ncbi.nlm.nih.gov/snp/";
const GENECARDS_URL: &str = "https://www.genecards.org/cgi-bin/carddisp.pl?gene=";

/// 検索結果の1行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantRow {
    pub id: RowId,
    pub locus_repr: String,
    pub allele_repr: String,

    /// JSONの `null`、空文字、文字列 `"null"` はいずれも None
    #[serde(default, deserialize_with = "deserialize_dbsnp")]
    pub dbsnp: Option<String>,

    #[serde(default, deserialize_with = "deserialize_genes")]
    pub genes: Vec<String>,

    pub dp: u32,
    #[serde(default)]
    pub ad: String,
    #[serde(default)]
    pub gt: String,
    #[serde(default)]
    pub filter: String,

    #[serde(default)]
    pub total_freq_repr: Option<String>,
    #[serde(default)]
    pub latin_american_2_freq_repr: Option<String>,
    #[serde(default)]
    pub east_asian_freq_repr: Option<String>,
    #[serde(default)]
    pub south_asian_freq_repr: Option<String>,
    #[serde(default)]
    pub african_freq_repr: Option<String>,
    #[serde(default)]
    pub european_freq_repr: Option<String>,
}

/// 集団別アレル頻度の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    Total,
    LatinAmerican,
    EastAsian,
    SouthAsian,
    African,
    European,
}

impl Population {
    /// 詳細パネルでの表示順
    pub const ALL: [Population; 6] = [
        Population::Total,
        Population::LatinAmerican,
        Population::EastAsian,
        Population::SouthAsian,
        Population::African,
        Population::European,
    ];

    /// 一覧行に表示する列
    pub const SUMMARY: [Population; 3] = [
        Population::Total,
        Population::LatinAmerican,
        Population::EastAsian,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Population::Total => "Global frequency:",
            Population::LatinAmerican => "Latin America frequency:",
            Population::EastAsian => "East Asia frequency:",
            Population::SouthAsian => "South Asia frequency:",
            Population::African => "Africa frequency:",
            Population::European => "Europe frequency:",
        }
    }
}

impl VariantRow {
    /// GATKフィルタの表示ラベル（"PASS" のみ "Pass" に置き換え）
    pub fn filter_label(&self) -> &str {
        display_filter(&self.filter)
    }

    /// 前後の空白を除いた遺伝子シンボル（空要素は除外）
    pub fn gene_symbols(&self) -> Vec<&str> {
        self.genes
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .collect()
    }

    pub fn dbsnp_url(&self) -> Option<String> {
        self.dbsnp.as_deref().map(dbsnp_url)
    }

    /// 指定集団の頻度表示文字列（空なら None）
    pub fn frequency(&self, population: Population) -> Option<&str> {
        let value = match population {
            Population::Total => &self.total_freq_repr,
            Population::LatinAmerican => &self.latin_american_2_freq_repr,
            Population::EastAsian => &self.east_asian_freq_repr,
            Population::SouthAsian => &self.south_asian_freq_repr,
            Population::African => &self.african_freq_repr,
            Population::European => &self.european_freq_repr,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

/// 1ページ分の検索結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<VariantRow>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// 検索API失敗時のレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

/// GATKフィルタ値の表示ラベル
pub fn display_filter(filter: &str) -> &str {
    if filter == "PASS" {
        "Pass"
    } else {
        filter
    }
}

pub fn dbsnp_url(dbsnp_id: &str) -> String {
    format!("{}{}", DBSNP_URL, dbsnp_id)
}

pub fn genecards_url(gene: &str) -> String {
    format!("{}{}", GENECARDS_URL, gene.trim())
}

fn deserialize_dbsnp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|id| {
        let id = id.trim();
        !id.is_empty() && id != "null"
    }))
}

fn deserialize_genes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
