//! 検索結果のテキスト表示

use variant_browser_common::{
    page_window, range_label, AnnotationInfo, PageButton, PageResult, Population, VariantRow,
    NOT_AVAILABLE, PAGE_WINDOW_WIDTH,
};

const HEADERS: [&str; 10] = [
    "#", "Locus", "Allele", "dbSNP", "Genes", "Depth", "Filter", "Global", "Latin America",
    "East Asia",
];

/// 右寄せする列（数値・頻度）
const RIGHT_ALIGNED: [bool; 10] = [true, false, false, false, false, true, false, true, true, true];

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// 一覧表示用のセル（ブラウザ版の一覧行と同じ項目）
pub fn summary_cells(index: usize, row: &VariantRow) -> Vec<String> {
    let genes = row.gene_symbols();
    let mut cells = vec![
        (index + 1).to_string(),
        row.locus_repr.clone(),
        row.allele_repr.clone(),
        or_not_available(row.dbsnp.as_deref()),
        if genes.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            genes.join(", ")
        },
        row.dp.to_string(),
        row.filter_label().to_string(),
    ];
    cells.extend(
        Population::SUMMARY
            .iter()
            .map(|p| or_not_available(row.frequency(*p))),
    );
    cells
}

/// 結果テーブル・件数・ページ番号をまとめて描画
pub fn render_page(result: &PageResult) -> String {
    let mut out = String::new();

    if result.items.is_empty() {
        out.push_str("No variants match the current filters.\n");
    } else {
        let rows: Vec<Vec<String>> = result
            .items
            .iter()
            .enumerate()
            .map(|(i, row)| summary_cells(i, row))
            .collect();
        out.push_str(&render_table(&rows));
    }

    out.push('\n');
    out.push_str(&range_label(result.total, result.page, result.per_page).to_string());
    out.push('\n');
    out.push_str(&render_page_window(result.page, result.total_pages));
    out.push('\n');
    out
}

fn render_table(rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i], RIGHT_ALIGNED[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = format_line(&header);
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in rows {
        out.push_str(&format_line(row));
        out.push('\n');
    }
    out
}

fn pad(cell: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.chars().count()));
    if right {
        format!("{}{}", fill, cell)
    } else {
        format!("{}{}", cell, fill)
    }
}

/// ページ番号欄（現在ページは [n]）
pub fn render_page_window(current: u32, total: u32) -> String {
    let buttons = page_window(current, total, PAGE_WINDOW_WIDTH);
    if buttons.is_empty() {
        return "Pages: -".to_string();
    }

    let labels: Vec<String> = buttons
        .into_iter()
        .map(|button| match button {
            PageButton::Page { number, current: true } => format!("[{}]", number),
            PageButton::Page { number, .. } => number.to_string(),
            PageButton::Ellipsis => "...".to_string(),
        })
        .collect();
    format!("Pages: {}", labels.join(" "))
}

/// 詳細パネル相当の表示
pub fn render_detail(row: &VariantRow) -> String {
    let genes = row.gene_symbols();
    let mut lines = vec![
        row.locus_repr.clone(),
        format!("  Allele:        {}", row.allele_repr),
        format!("  Read depth:    {}", row.dp),
        format!(
            "  dbSNP ID:      {}",
            row.dbsnp_url()
                .map(|url| format!("{} ({})", row.dbsnp.as_deref().unwrap_or_default(), url))
                .unwrap_or_else(|| "No entry for this variant.".to_string())
        ),
        format!(
            "  Genes:         {}",
            if genes.is_empty() {
                "No genes in this locus.".to_string()
            } else {
                genes.join(" ")
            }
        ),
        format!("  Allele depth:  {}", row.ad),
        format!("  Genotype:      {}", row.gt),
        format!("  GATK filter:   {}", row.filter_label()),
        "  Allele frequency".to_string(),
    ];
    lines.extend(Population::ALL.iter().map(|p| {
        format!("    {:<26}{}", p.label(), or_not_available(row.frequency(*p)))
    }));
    lines.join("\n")
}

pub fn render_annotation(info: &AnnotationInfo) -> String {
    format!(
        "  Most severe consequence: {}\n  Clinical significance:   {}",
        info.consequence_label(),
        info.significance_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4, false), "ab  ");
        assert_eq!(pad("ab", 4, true), "  ab");
        assert_eq!(pad("A→G", 4, false), "A→G ");
    }

    #[test]
    fn test_render_page_window() {
        assert_eq!(render_page_window(5, 10), "Pages: 1 ... 4 [5] 6 ... 10");
        assert_eq!(render_page_window(1, 3), "Pages: [1] 2 3");
        assert_eq!(render_page_window(5, 5), "Pages: 1 ... 3 4 [5]");
        assert_eq!(render_page_window(1, 0), "Pages: -");
    }
}
