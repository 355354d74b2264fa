//! Built-in sample dataset
//!
//! The same figures the mobile client renders on its friends, budget and
//! insights screens. Used whenever no dataset file is configured.

use crate::models::{BudgetCategory, CounterpartyBalance, Money, PeriodPoint};

use super::Dataset;

pub fn sample_dataset() -> Dataset {
    Dataset {
        friends: vec![
            CounterpartyBalance::friend("Sarah Chen", Money::from_cents(-4550))
                .with_activity("Owes you for dinner"),
            CounterpartyBalance::friend("Mike Johnson", Money::from_units(120))
                .with_activity("You owe for concert tickets"),
            CounterpartyBalance::friend("Emma Wilson", Money::zero()).with_activity("Settled up"),
            CounterpartyBalance::friend("James Park", Money::from_units(-850))
                .with_activity("Owes you for rent"),
        ],
        groups: vec![
            CounterpartyBalance::group("House Expenses", Money::from_units(-250))
                .with_activity("4 members"),
            CounterpartyBalance::group("Europe Trip", Money::from_units(450))
                .with_activity("6 members"),
            CounterpartyBalance::group("Birthday Party", Money::zero()).with_activity("8 members"),
        ],
        categories: vec![
            BudgetCategory::new("Food & Dining", Money::from_units(450), Money::from_units(600))
                .with_color("#ff6b6b"),
            BudgetCategory::new("Shopping", Money::from_units(800), Money::from_units(850))
                .with_color("#feca57"),
            BudgetCategory::new("Transportation", Money::from_units(120), Money::from_units(200))
                .with_color("#00ccff"),
            BudgetCategory::new("Entertainment", Money::from_units(180), Money::from_units(150))
                .with_color("#a55eea"),
        ],
        trend: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
            .iter()
            .zip([2400, 2100, 2800, 2300, 2500, 2200])
            .map(|(label, units)| PeriodPoint::new(*label, Money::from_units(units)))
            .collect(),
    }
}
