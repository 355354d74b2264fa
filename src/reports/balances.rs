//! Balance overview report
//!
//! The friends/groups overview: what others owe, what the user owes, the
//! net, and one row per counterparty.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::BalanceScope;
use crate::display::{double_separator, separator};
use crate::error::SocialFinResult;
use crate::models::{BalanceStanding, CounterpartyBalance, CounterpartyKind, Money};
use crate::services::{aggregate, BalanceTotals};
use crate::storage::Dataset;

use super::{csv_export_error, RenderOptions, Report};

/// One counterparty in the overview
#[derive(Debug, Clone, Serialize)]
pub struct BalanceRow {
    pub name: String,
    pub kind: CounterpartyKind,
    /// Signed balance as stored
    pub amount: Money,
    pub standing: BalanceStanding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
}

impl From<&CounterpartyBalance> for BalanceRow {
    fn from(balance: &CounterpartyBalance) -> Self {
        Self {
            name: balance.name.clone(),
            kind: balance.kind,
            amount: balance.amount,
            standing: balance.standing(),
            last_activity: balance.last_activity.clone(),
        }
    }
}

/// Balance overview for one scope
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub generated_at: DateTime<Utc>,
    pub scope: BalanceScope,
    pub totals: BalanceTotals,
    pub settled_count: usize,
    pub rows: Vec<BalanceRow>,
}

impl BalanceReport {
    pub fn generate(dataset: &Dataset, scope: BalanceScope) -> Self {
        let balances = match scope {
            BalanceScope::Friends => dataset.friends.clone(),
            BalanceScope::Groups => dataset.groups.clone(),
            BalanceScope::All => dataset.all_counterparties(),
        };

        let totals = aggregate(&balances);
        let settled_count = balances.iter().filter(|b| b.is_settled()).count();
        tracing::debug!(?scope, entries = balances.len(), settled_count, "generated balance report");

        Self {
            generated_at: Utc::now(),
            scope,
            totals,
            settled_count,
            rows: balances.iter().map(BalanceRow::from).collect(),
        }
    }

    fn title(&self) -> &'static str {
        match self.scope {
            BalanceScope::Friends => "Friends",
            BalanceScope::Groups => "Groups",
            BalanceScope::All => "Friends & Groups",
        }
    }
}

impl Report for BalanceReport {
    fn format_terminal(&self, options: &RenderOptions) -> String {
        let money = &options.money;
        let mut output = String::new();

        output.push_str(&format!("Balances - {}\n", self.title()));
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {}\n",
            "They owe you:",
            money.signal(self.totals.owed_to_user, true)
        ));
        output.push_str(&format!(
            "{:<16} {}\n",
            "You owe:",
            money.signal(self.totals.owed_by_user, false)
        ));
        // Net is shown as a magnitude; the sign is carried by the color
        output.push_str(&format!(
            "{:<16} {}\n\n",
            "Net balance:",
            money.signal(self.totals.net.abs(), !self.totals.net.is_negative())
        ));

        if self.rows.is_empty() {
            output.push_str("No balances yet.\n");
            return output;
        }

        output.push_str(&format!("{:<28} {:>12}  {}\n", "Name", "Amount", "Status"));
        output.push_str(&separator(60));
        output.push('\n');

        for row in &self.rows {
            let amount = match row.standing {
                BalanceStanding::Settled => "-".to_string(),
                standing => money.signal(row.amount.abs(), standing == BalanceStanding::OwesUser),
            };
            output.push_str(&format!(
                "{:<28} {:>12}  {}\n",
                crate::display::truncate(&row.name, 28),
                amount,
                row.standing.label()
            ));
        }

        output.push_str(&format!(
            "\n{} of {} settled\n",
            self.settled_count,
            self.rows.len()
        ));

        output
    }

    fn export_csv<W: Write>(&self, writer: W) -> SocialFinResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Name", "Kind", "Amount", "Standing"])
            .map_err(csv_export_error)?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.name.clone(),
                    row.kind.to_string(),
                    format!("{:.2}", row.amount.as_f64()),
                    row.standing.label().to_string(),
                ])
                .map_err(csv_export_error)?;
        }

        for (label, amount) in [
            ("TOTAL OWED TO YOU", self.totals.owed_to_user),
            ("TOTAL YOU OWE", self.totals.owed_by_user),
            ("NET", self.totals.net),
        ] {
            csv_writer
                .write_record([label, "", format!("{:.2}", amount.as_f64()).as_str(), ""])
                .map_err(csv_export_error)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
