//! Rendering rankings and population statistics.
//!
//! A [`RankingReport`] is built once per run and handed to an
//! [`OutputWriter`] chosen by [`create_writer`]: JSON for machines,
//! markdown for sharing, or a styled terminal listing.

use crate::formatting::{FormattingConfig, Styler};
use crate::pipeline::{FilterState, RankingView, SortState};
use crate::presentation::{
    build_cards, format_value, nearest_rating, AccessPolicy, CompanyCard, WELFARE_FEATURE_TOTAL,
};
use crate::scoring::{AxisRatings, AxisStats, PopulationStats};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = crate::core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "terminal" => Ok(OutputFormat::Terminal),
            other => Err(crate::core::Error::Configuration(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

/// Everything needed to render one ranking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport<'a> {
    pub total_count: usize,
    pub filtered_count: usize,
    pub matched_count: usize,
    pub filter: &'a FilterState,
    pub sort: SortState,
    pub full_access: bool,
    pub restricted_count: usize,
    /// Invite the viewer to log in and add the account as a friend
    pub prompt_registration: bool,
    pub companies: Vec<CompanyCard<'a>>,
}

impl<'a> RankingReport<'a> {
    pub fn new(
        view: &'a RankingView,
        filter: &'a FilterState,
        sort: SortState,
        policy: &AccessPolicy,
    ) -> Self {
        Self {
            total_count: view.total_count,
            filtered_count: view.filtered_count,
            matched_count: view.matched_count,
            filter,
            sort,
            full_access: policy.has_full_access(),
            restricted_count: policy.restricted_count(view.items.len()),
            prompt_registration: policy.should_prompt_registration(view.items.len()),
            companies: build_cards(view, policy),
        }
    }
}

/// Population statistics of a loaded company set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub source: String,
    pub company_count: usize,
    pub stats: PopulationStats,
}

pub trait OutputWriter {
    fn write_ranking(&mut self, report: &RankingReport<'_>) -> anyhow::Result<()>;
    fn write_stats(&mut self, report: &StatsReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_ranking(&mut self, report: &RankingReport<'_>) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_stats(&mut self, report: &StatsReport) -> anyhow::Result<()> {
        self.write_value(report)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_counts(&mut self, report: &RankingReport<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "# 企業ランキング")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "並び順: {} ({}) / 表示 {} 社 / 検索対象 {} 社 / 全 {} 社",
            report.sort.key.label(),
            direction_label(&report.sort),
            report.matched_count,
            report.filtered_count,
            report.total_count
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table(&mut self, report: &RankingReport<'_>) -> anyhow::Result<()> {
        if report.companies.is_empty() {
            writeln!(self.writer, "_該当する企業はありません_")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| 順位 | 企業名 | 業種 | 所在地 | 魅力度 | 給与 | 規模 | 休日 | 初任給 | 福利厚生 |"
        )?;
        writeln!(
            self.writer,
            "|------|--------|------|--------|--------|------|------|------|--------|----------|"
        )?;

        for card in &report.companies {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {}/{} |",
                card.display_rank,
                escape_cell(&card.record.company_name),
                escape_cell(&card.record.industry),
                card.prefecture,
                card.attraction_score
                    .map(|score| format!("{:.1}", score))
                    .unwrap_or_else(|| "非表示".to_string()),
                card.chart.salary.value(),
                card.chart.headcount.value(),
                card.chart.holidays.value(),
                escape_cell(&format_value(&card.record.starting_salary_graduates)),
                card.welfare_count,
                WELFARE_FEATURE_TOTAL
            )?;
        }
        writeln!(self.writer)?;

        let notes: Vec<String> = report
            .companies
            .iter()
            .filter(|card| !card.notes.is_empty())
            .map(|card| format!("- {}: {}", card.display_rank, card.notes.join(" / ")))
            .collect();
        if !notes.is_empty() {
            writeln!(self.writer, "## 注記")?;
            writeln!(self.writer)?;
            for note in notes {
                writeln!(self.writer, "{}", note)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_ranking(&mut self, report: &RankingReport<'_>) -> anyhow::Result<()> {
        self.write_counts(report)?;
        self.write_table(report)?;
        if report.prompt_registration {
            writeln!(
                self.writer,
                "> すべての企業情報を見るには、ログインして友だち追加してください（{} 社が制限表示）",
                report.restricted_count
            )?;
        }
        Ok(())
    }

    fn write_stats(&mut self, report: &StatsReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# 母集団統計")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} 社 ({})",
            report.company_count, report.source
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| 軸 | 平均 | 標準偏差 | 公開件数 |")?;
        writeln!(self.writer, "|----|------|----------|----------|")?;
        for (label, axis) in axes(&report.stats) {
            writeln!(
                self.writer,
                "| {} | {:.2} | {:.2} | {} |",
                label, axis.mean, axis.std_dev, axis.sample_size
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    styler: Styler,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            styler: Styler::new(formatting),
        }
    }

    fn write_card(&mut self, card: &CompanyCard<'_>) -> anyhow::Result<()> {
        let s = self.styler;
        writeln!(
            self.writer,
            "{:>3}. {}  {}  {}",
            card.display_rank,
            s.bold(&card.record.company_name),
            s.dim(&format!("[{}]", card.record.industry)),
            card.prefecture
        )?;

        match card.attraction_score {
            Some(score) => {
                writeln!(
                    self.writer,
                    "     魅力度 {}",
                    s.rating(nearest_rating(score), &format!("{:.1}", score))
                )?;
            }
            None => writeln!(self.writer, "     魅力度 {}", s.dim("(ログインで表示)"))?,
        }

        let chart = chart_line(&s, &card.chart);
        writeln!(self.writer, "     {}", chart)?;
        writeln!(
            self.writer,
            "     初任給 {}  年間休日 {}  従業員数 {}  {}",
            format_value(&card.record.starting_salary_graduates),
            format_value(&card.record.annual_holidays),
            format_value(&card.record.number_of_employees),
            card.gender_ratio
        )?;
        writeln!(
            self.writer,
            "     福利厚生 {}/{} の制度あり",
            card.welfare_count, WELFARE_FEATURE_TOTAL
        )?;
        for note in &card.notes {
            writeln!(self.writer, "     {}", s.warning(&format!("※ {}", note)))?;
        }
        Ok(())
    }
}

fn chart_line(s: &Styler, chart: &AxisRatings) -> String {
    format!(
        "給与 {}  規模 {}  休日 {}",
        s.stars(chart.salary),
        s.stars(chart.headcount),
        s.stars(chart.holidays)
    )
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_ranking(&mut self, report: &RankingReport<'_>) -> anyhow::Result<()> {
        let s = self.styler;
        writeln!(self.writer, "{}", s.header("企業ランキング"))?;
        writeln!(
            self.writer,
            "{}",
            s.dim(&format!(
                "並び順: {} ({})  表示 {} / 検索対象 {} / 全 {} 社",
                report.sort.key.label(),
                direction_label(&report.sort),
                report.matched_count,
                report.filtered_count,
                report.total_count
            ))
        )?;
        writeln!(self.writer)?;

        if report.companies.is_empty() {
            writeln!(self.writer, "該当する企業はありません")?;
            return Ok(());
        }

        for card in &report.companies {
            self.write_card(card)?;
            writeln!(self.writer)?;
        }

        if report.prompt_registration {
            writeln!(
                self.writer,
                "{}",
                s.warning(&format!(
                    "すべての企業情報を見るには、ログインして友だち追加してください（{} 社が制限表示）",
                    report.restricted_count
                ))
            )?;
        }
        Ok(())
    }

    fn write_stats(&mut self, report: &StatsReport) -> anyhow::Result<()> {
        let s = self.styler;
        writeln!(self.writer, "{}", s.header("母集団統計"))?;
        writeln!(
            self.writer,
            "{}",
            s.dim(&format!("{} 社 ({})", report.company_count, report.source))
        )?;
        writeln!(self.writer)?;
        for (label, axis) in axes(&report.stats) {
            writeln!(
                self.writer,
                "  {:<12} 平均 {:>12.2}  標準偏差 {:>10.2}  公開件数 {}",
                label, axis.mean, axis.std_dev, axis.sample_size
            )?;
        }
        Ok(())
    }
}

fn axes(stats: &PopulationStats) -> [(&'static str, &AxisStats); 3] {
    [
        ("給与", &stats.salary),
        ("規模 (log10)", &stats.log_headcount),
        ("休日", &stats.holidays),
    ]
}

fn direction_label(sort: &SortState) -> &'static str {
    match sort.direction {
        crate::pipeline::SortDirection::Ascending => "昇順",
        crate::pipeline::SortDirection::Descending => "降順",
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub fn create_writer<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessConfig, ScoringConfig};
    use crate::core::{CompanyRecord, RawValue};
    use crate::pipeline::apply;
    use crate::presentation::ViewerAccess;
    use crate::scoring::score_population;

    fn companies() -> Vec<CompanyRecord> {
        (1..=5)
            .map(|i| CompanyRecord {
                industry: "製造業".into(),
                base_salary: RawValue::Number(200_000.0 + i as f64 * 10_000.0),
                number_of_employees: RawValue::Number(i as f64 * 50.0),
                annual_holidays: RawValue::Number(110.0 + i as f64 * 2.0),
                headquarters_address: RawValue::text("広島県呉市"),
                ..CompanyRecord::new(format!("c{}", i), format!("呉工業{}", i))
            })
            .collect()
    }

    fn render(format: OutputFormat, viewer: ViewerAccess) -> String {
        let (_, scored) = score_population(&companies(), &ScoringConfig::default());
        let filter = FilterState::default();
        let sort = SortState::default();
        let view = apply(&scored, &filter, &sort);
        let policy = AccessPolicy::new(viewer, &AccessConfig::default());
        let report = RankingReport::new(&view, &filter, sort, &policy);

        let mut buffer = Vec::new();
        {
            let mut writer = create_writer(format, Box::new(&mut buffer), FormattingConfig::plain());
            writer.write_ranking(&report).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_terminal_output_marks_restricted_cards() {
        let output = render(OutputFormat::Terminal, ViewerAccess::anonymous());

        assert!(output.contains("企業ランキング"));
        assert!(output.contains("  1. 呉工業5"));
        assert_eq!(output.matches("(ログインで表示)").count(), 2);
        assert!(output.contains("2 社が制限表示"));
        assert!(output.contains("[####-]") || output.contains("[#####]"));
    }

    #[test]
    fn test_terminal_output_for_members_has_no_prompt() {
        let output = render(OutputFormat::Terminal, ViewerAccess::member("U1", true));
        assert!(!output.contains("ログインで表示"));
        assert!(!output.contains("制限表示"));
    }

    #[test]
    fn test_json_output_shape() {
        let output = render(OutputFormat::Json, ViewerAccess::anonymous());
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["totalCount"], 5);
        assert_eq!(json["restrictedCount"], 2);
        assert_eq!(json["promptRegistration"], true);
        assert_eq!(json["companies"][0]["displayRank"], 1);
        assert!(json["companies"][0]["attractionScore"].is_number());
        assert!(json["companies"][4].get("attractionScore").is_none());
    }

    #[test]
    fn test_markdown_prompt_follows_policy() {
        let anonymous = render(OutputFormat::Markdown, ViewerAccess::anonymous());
        assert!(anonymous.contains("> すべての企業情報を見るには"));

        let member = render(OutputFormat::Markdown, ViewerAccess::member("U1", true));
        assert!(!member.contains("すべての企業情報を見るには"));
    }

    #[test]
    fn test_markdown_table() {
        let output = render(OutputFormat::Markdown, ViewerAccess::member("U1", true));
        assert!(output.starts_with("# 企業ランキング"));
        assert!(output.contains("| 順位 | 企業名 |"));
        assert_eq!(output.matches("| 呉工業").count(), 5);
    }

    #[test]
    fn test_stats_output() {
        let config = ScoringConfig::default();
        let report = StatsReport {
            source: "test".into(),
            company_count: 5,
            stats: PopulationStats::from_companies(&companies(), &config),
        };
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_stats(&report).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("| 給与 | 230000.00 |"));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
