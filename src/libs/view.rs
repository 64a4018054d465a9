use crate::api::claude::{TaskSummary, TrendAnalysis};
use crate::api::todoist::Task;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "CONTENT", "DESCRIPTION", "PRIORITY", "COMPLETED AT"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.content,
                task.description,
                task.priority,
                task.completed_at.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &TaskSummary) -> Result<()> {
        msg_print!(Message::SummaryHeader(summary.week_of.format("%B %-d, %Y").to_string()), true);
        msg_print!(Message::WeekOf(summary.week_of.format("%Y-%m-%d").to_string()));
        msg_print!(Message::CompletedTaskCount(summary.completed_tasks));
        if !summary.key_categories.is_empty() {
            msg_print!(Message::KeyCategories(summary.key_categories.join(", ")));
        }
        msg_print!(summary.summary);
        if !summary.productivity_trends.is_empty() {
            msg_print!(Message::ProductivityTrends(summary.productivity_trends.clone()));
        }

        Ok(())
    }

    pub fn trends(analysis: &TrendAnalysis) -> Result<()> {
        msg_print!(Message::TrendsHeader, true);
        msg_print!(analysis.overall_summary);
        msg_print!(Message::ProductivityTrends(analysis.productivity_trend.clone()));

        if !analysis.category_trends.is_empty() {
            let mut table = Table::new();
            table.add_row(row!["CATEGORY", "TREND", "DESCRIPTION"]);
            for trend in &analysis.category_trends {
                table.add_row(row![trend.category, trend.trend, trend.description]);
            }
            table.printstd();
        }

        for recommendation in &analysis.recommendations {
            msg_print!(format!("• {}", recommendation));
        }
        msg_print!(analysis.weekly_comparison);

        Ok(())
    }
}
