//! Ensembl REST APIによるバリアントアノテーション
//!
//! `/variation/human/{id}` のレスポンスから
//! 最も重い影響（most severe consequence）と臨床的意義を表示用文字列に整形する。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Ensembl REST APIのベースURL
pub const ENSEMBL_REST_URL: &str = "https://rest.ensembl.org";

/// Ensemblレスポンス（使用するフィールドのみ）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnsemblVariation {
    #[serde(default)]
    pub most_severe_consequence: Option<String>,
    #[serde(default)]
    pub clinical_significance: Option<Vec<String>>,
}

/// 表示用アノテーション
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationInfo {
    pub consequence: String,
    pub significance: String,
}

impl AnnotationInfo {
    pub fn from_variation(variation: &EnsemblVariation) -> Self {
        Self {
            consequence: variation
                .most_severe_consequence
                .as_deref()
                .map(format_consequence)
                .unwrap_or_default(),
            significance: variation
                .clinical_significance
                .as_deref()
                .map(format_significance)
                .unwrap_or_default(),
        }
    }

    pub fn consequence_label(&self) -> &str {
        if self.consequence.is_empty() {
            "No consequence data"
        } else {
            &self.consequence
        }
    }

    pub fn significance_label(&self) -> &str {
        if self.significance.is_empty() {
            "No significance data"
        } else {
            &self.significance
        }
    }
}

/// dbSNP IDに対応するEnsemblのURL
pub fn variation_url(base: &str, dbsnp_id: &str) -> String {
    format!(
        "{}/variation/human/{}?content-type=application/json",
        base.trim_end_matches('/'),
        dbsnp_id
    )
}

/// レスポンス本文をパースして整形
pub fn parse_annotation(body: &str) -> Result<AnnotationInfo> {
    let variation: EnsemblVariation = serde_json::from_str(body)?;
    Ok(AnnotationInfo::from_variation(&variation))
}

/// "missense_variant" -> "Missense variant"
pub fn format_consequence(consequence: &str) -> String {
    consequence
        .split('_')
        .enumerate()
        .map(|(i, word)| if i == 0 { capitalize(word) } else { word.to_string() })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 各要素を先頭大文字にしてソートし "/" で連結
///
/// ソートは大文字化後の文字列の辞書順
pub fn format_significance(significance: &[String]) -> String {
    let mut labels: Vec<String> = significance.iter().map(|s| capitalize(s)).collect();
    labels.sort();
    labels.join("/")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_consequence() {
        assert_eq!(format_consequence("missense_variant"), "Missense variant");
        assert_eq!(
            format_consequence("splice_region_variant"),
            "Splice region variant"
        );
        assert_eq!(format_consequence("intergenic"), "Intergenic");
        assert_eq!(format_consequence(""), "");
    }

    #[test]
    fn test_format_significance_sorted_after_capitalize() {
        let input = vec!["benign".to_string(), "likely_pathogenic".to_string()];
        assert_eq!(format_significance(&input), "Benign/Likely_pathogenic");

        let input = vec!["uncertain_significance".to_string(), "Benign".to_string(), "association".to_string()];
        assert_eq!(
            format_significance(&input),
            "Association/Benign/Uncertain_significance"
        );
    }

    #[test]
    fn test_parse_annotation() {
        let body = r#"{
            "name": "rs429358",
            "most_severe_consequence": "missense_variant",
            "clinical_significance": ["risk_factor", "pathogenic", "other"],
            "mappings": []
        }"#;
        let info = parse_annotation(body).expect("パース失敗");
        assert_eq!(info.consequence, "Missense variant");
        assert_eq!(info.significance, "Other/Pathogenic/Risk_factor");
    }

    #[test]
    fn test_parse_annotation_missing_fields() {
        let info = parse_annotation(r#"{"name": "rs1"}"#).expect("パース失敗");
        assert_eq!(info, AnnotationInfo::default());
        assert_eq!(info.consequence_label(), "No consequence data");
        assert_eq!(info.significance_label(), "No significance data");
    }

    #[test]
    fn test_parse_annotation_invalid_json() {
        assert!(parse_annotation("<html>").is_err());
    }

    #[test]
    fn test_variation_url() {
        assert_eq!(
            variation_url(ENSEMBL_REST_URL, "rs7412"),
            "https://rest.ensembl.org/variation/human/rs7412?content-type=application/json"
        );
        assert_eq!(
            variation_url("http://localhost:8080/", "rs1"),
            "http://localhost:8080/variation/human/rs1?content-type=application/json"
        );
    }
}
