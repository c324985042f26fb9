//! Display 显示格式化模块
//!
//! 使用 `prettytable-rs` 将 [`TearSheet`] 渲染为两列（指标 / 数值）的表格。

use crate::statistic::summary::TearSheet;
use prettytable::{Table, format, row};
use std::fmt::{Display, Formatter};

impl TearSheet {
    /// 构造 [`TearSheet`] 的表格表示。
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row![self.name.as_str(), "Value"]);

        table.add_row(row!["Periods", self.periods]);
        table.add_row(row!["Periods Per Year", format_value(self.config.periods_per_year)]);
        table.add_row(row!["Best", format_value(self.best)]);
        table.add_row(row!["Worst", format_value(self.worst)]);
        table.add_row(row!["Average Return", format_value(self.average_return)]);
        table.add_row(row!["Cumulative Return", format_value(self.final_cumulative_return)]);
        table.add_row(row!["Annualized Return", format_value(self.annualized_return)]);
        table.add_row(row!["Annualized Vol", format_value(self.annualized_vol)]);
        table.add_row(row!["Down Side Risk", format_value(self.down_side_risk)]);
        table.add_row(row!["Up Side Risk", format_value(self.up_side_risk)]);
        table.add_row(row!["Skewness", format_value(self.skewness)]);
        table.add_row(row!["Kurtosis", format_value(self.kurtosis)]);
        table.add_row(row!["Winning Ratio", format_value(self.winning_ratio)]);
        table.add_row(row!["Max Drawdown", format_value(self.max_drawdown)]);
        table.add_row(row![
            format!("Drawdown Duration (#{})", self.config.draw_down_rank),
            self.draw_down_duration
                .map_or_else(|| "-".to_string(), |duration| duration.to_string())
        ]);
        table.add_row(row!["Longest Winning Streak", self.continuations.winning]);
        table.add_row(row!["Longest Losing Streak", self.continuations.losing]);
        table.add_row(row![
            format!("VaR ({})", self.config.alpha.value()),
            format_value(self.value_at_risk)
        ]);
        table.add_row(row!["CVaR", format_value(self.conditional_value_at_risk)]);
        table.add_row(row!["Tail Risk", format_value(self.tail_risk)]);
        table.add_row(row!["Sharpe", format_value(self.sharpe)]);
        table.add_row(row!["Sortino", format_value(self.sortino)]);
        table.add_row(row!["Calmar", format_value(self.calmar)]);

        if let Some(active) = &self.active {
            table.add_row(row!["Benchmark", active.benchmark.as_str()]);
            table.add_row(row![
                "Annualized Active Return",
                format_value(active.annualized_active_return)
            ]);
            table.add_row(row!["Annualized Active Vol", format_value(active.annualized_active_vol)]);
            table.add_row(row!["Information Ratio", format_value(active.information_ratio)]);
        }

        table
    }

    /// 将表格打印到标准输出。
    pub fn print(&self) {
        self.table().printstd();
    }
}

impl Display for TearSheet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table())
    }
}

fn format_value(value: f64) -> String {
    match value.is_nan() {
        true => "-".to_string(),
        false => format!("{value:.6}"),
    }
}
