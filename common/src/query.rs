//! 検索条件とクエリ文字列の生成
//!
//! フォーム入力（文字列のまま）を `FilterForm` に保持し、
//! 送信時に `FilterCriteria` へ変換して `/api/data` のクエリを組み立てる。

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// 検索APIのパス
pub const SEARCH_PATH: &str = "/api/data";

/// フォームで選択できる染色体（空文字は「すべて」）
pub const CHROMOSOMES: &[&str] = &[
    "chr1", "chr2", "chr3", "chr4", "chr5", "chr6", "chr7", "chr8", "chr9", "chr10", "chr11",
    "chr12", "chr13", "chr14", "chr15", "chr16", "chr17", "chr18", "chr19", "chr20", "chr21",
    "chr22", "chrX",
];

/// フォーム入力値（入力されたままの文字列）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterForm {
    pub min_depth: String,
    pub chromosome: String,
    pub min_pos: String,
    pub max_pos: String,
    pub min_global_freq: String,
    pub max_global_freq: String,
    pub min_latin_american_freq: String,
    pub max_latin_american_freq: String,
    pub min_east_asian_freq: String,
    pub max_east_asian_freq: String,
    pub gene: String,
    pub gatk_pass: bool,
    pub is_dbsnp: bool,
}

/// アレル頻度の範囲（0〜1の割合）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrequencyRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FrequencyRange {
    /// パーセント値から割合の範囲を作る
    pub fn from_percent(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.map(|v| v / 100.0),
            max: max.map(|v| v / 100.0),
        }
    }
}

/// 検索条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_dp: Option<u32>,
    pub chromosome: Option<String>,
    pub min_pos: Option<u64>,
    pub max_pos: Option<u64>,
    pub total_alfa: FrequencyRange,
    pub latin_american_2_alfa: FrequencyRange,
    pub east_asian_alfa: FrequencyRange,
    pub gene: String,
    pub gatk_pass: bool,
    pub is_dbsnp: bool,
}

impl FilterForm {
    /// 入力値から検索条件を作る
    ///
    /// 頻度欄は空なら0%、数値でなければ未指定として扱う
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_dp: parse_trimmed(&self.min_depth),
            chromosome: Some(self.chromosome.trim().to_string()).filter(|c| !c.is_empty()),
            min_pos: parse_trimmed(&self.min_pos),
            max_pos: parse_trimmed(&self.max_pos),
            total_alfa: FrequencyRange::from_percent(
                parse_percent(&self.min_global_freq),
                parse_percent(&self.max_global_freq),
            ),
            latin_american_2_alfa: FrequencyRange::from_percent(
                parse_percent(&self.min_latin_american_freq),
                parse_percent(&self.max_latin_american_freq),
            ),
            east_asian_alfa: FrequencyRange::from_percent(
                parse_percent(&self.min_east_asian_freq),
                parse_percent(&self.max_east_asian_freq),
            ),
            gene: self.gene.trim().to_string(),
            gatk_pass: self.gatk_pass,
            is_dbsnp: self.is_dbsnp,
        }
    }
}

impl FilterCriteria {
    /// クエリパラメータ（送信順）
    pub fn query_pairs(&self, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("min_dp", opt_to_string(self.min_dp)),
            ("chromosome", self.chromosome.clone().unwrap_or_default()),
            ("min_pos", opt_to_string(self.min_pos)),
            ("max_pos", opt_to_string(self.max_pos)),
            ("min_total_alfa", opt_to_string(self.total_alfa.min)),
            ("max_total_alfa", opt_to_string(self.total_alfa.max)),
            ("min_latin_american_2_alfa", opt_to_string(self.latin_american_2_alfa.min)),
            ("max_latin_american_2_alfa", opt_to_string(self.latin_american_2_alfa.max)),
            ("min_east_asian_alfa", opt_to_string(self.east_asian_alfa.min)),
            ("max_east_asian_alfa", opt_to_string(self.east_asian_alfa.max)),
            ("gatk_pass", flag(self.gatk_pass)),
            ("is_dbsnp", flag(self.is_dbsnp)),
            ("gene", self.gene.clone()),
            ("page", page.to_string()),
        ]
    }

    pub fn query_string(&self, page: u32) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs(page))
            .finish()
    }

    /// 検索URL（`base` が空ならページと同一オリジンの相対URL）
    pub fn search_url(&self, base: &str, page: u32) -> String {
        format!(
            "{}{}?{}",
            base.trim_end_matches('/'),
            SEARCH_PATH,
            self.query_string(page)
        )
    }
}

fn parse_trimmed<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

fn parse_percent(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0.0);
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn flag(value: bool) -> String {
    let value = if value { "1" } else { "0" };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FilterForm {
        FilterForm {
            min_depth: "10".to_string(),
            chromosome: "chr17".to_string(),
            min_pos: "43044295".to_string(),
            max_pos: "43125483".to_string(),
            min_global_freq: "5".to_string(),
            max_global_freq: "50".to_string(),
            gene: "BRCA1".to_string(),
            gatk_pass: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_percent_inputs_become_fractions() {
        let criteria = sample_form().criteria();
        assert_eq!(criteria.total_alfa.min, Some(0.05));
        assert_eq!(criteria.total_alfa.max, Some(0.5));
        // 空欄は0%
        assert_eq!(criteria.east_asian_alfa.min, Some(0.0));
    }

    #[test]
    fn test_invalid_percent_is_unset() {
        let form = FilterForm {
            min_global_freq: "abc".to_string(),
            ..Default::default()
        };
        assert_eq!(form.criteria().total_alfa.min, None);
    }

    #[test]
    fn test_query_pairs_order_and_flags() {
        let pairs = sample_form().criteria().query_pairs(3);
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "min_dp",
                "chromosome",
                "min_pos",
                "max_pos",
                "min_total_alfa",
                "max_total_alfa",
                "min_latin_american_2_alfa",
                "max_latin_american_2_alfa",
                "min_east_asian_alfa",
                "max_east_asian_alfa",
                "gatk_pass",
                "is_dbsnp",
                "gene",
                "page",
            ]
        );
        assert!(pairs.contains(&("gatk_pass", "1".to_string())));
        assert!(pairs.contains(&("is_dbsnp", "0".to_string())));
        assert!(pairs.contains(&("page", "3".to_string())));
    }

    #[test]
    fn test_query_string() {
        let query = sample_form().criteria().query_string(1);
        assert!(query.starts_with("min_dp=10&chromosome=chr17&min_pos=43044295"));
        assert!(query.contains("min_total_alfa=0.05&max_total_alfa=0.5"));
        assert!(query.ends_with("gatk_pass=1&is_dbsnp=0&gene=BRCA1&page=1"));
    }

    #[test]
    fn test_empty_form_query() {
        let query = FilterForm::default().criteria().query_string(1);
        assert!(query.starts_with("min_dp=&chromosome=&min_pos=&max_pos=&min_total_alfa=0"));
    }

    #[test]
    fn test_gene_is_encoded() {
        let form = FilterForm {
            gene: "HLA A&B".to_string(),
            ..Default::default()
        };
        assert!(form.criteria().query_string(1).contains("gene=HLA+A%26B"));
    }

    #[test]
    fn test_search_url() {
        let criteria = FilterCriteria::default();
        assert!(criteria.search_url("", 2).starts_with("/api/data?min_dp="));
        assert!(criteria
            .search_url("http://127.0.0.1:5000/", 2)
            .starts_with("http://127.0.0.1:5000/api/data?"));
    }
}
