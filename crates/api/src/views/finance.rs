use agri_core::finance::FinanceSummary;

use super::{layout, BACK_LINK};

/// Shown for figures no stored record tracks.
pub const UNTRACKED_VALUE: &str = "non renseigné";

/// Rows kept on the page although nothing records them yet.
const UNTRACKED_ROWS: [&str; 4] = [
    "Coût de production",
    "Prix de vente",
    "Marge brute",
    "Marge nette",
];

/// Summary table for `/finance`.
pub fn finance_page(summary: &FinanceSummary) -> String {
    let untracked: String = UNTRACKED_ROWS
        .iter()
        .map(|label| {
            format!(
                "<tr><td class=\"label\">{label}</td>\
                 <td class=\"value\">{UNTRACKED_VALUE}</td></tr>\n"
            )
        })
        .collect();
    let body = format!(
        "<h2>Données financières</h2>\n<table>\n\
         <tr><td class=\"label\">Revenus</td><td class=\"value\">{:.2} €</td></tr>\n\
         <tr><td class=\"label\">Dépenses</td><td class=\"value\">{:.2} €</td></tr>\n\
         <tr><td class=\"label\">Bénéfice</td><td class=\"value\">{:.2} €</td></tr>\n\
         {untracked}\
         <tr><td class=\"label\">Opérations</td><td class=\"value\">{}</td></tr>\n\
         <tr><td class=\"label\">Date</td><td class=\"value\">{}</td></tr>\n\
         </table>\n{BACK_LINK}",
        summary.revenue,
        summary.expenses,
        summary.profit,
        summary.record_count,
        summary.generated_at.format("%d/%m/%Y %H:%M:%S"),
    );
    layout("Données financières", &body)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn summary() -> FinanceSummary {
        FinanceSummary {
            revenue: 1500.0,
            expenses: 420.5,
            profit: 1079.5,
            record_count: 3,
            generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn shows_totals_with_two_decimals() {
        let page = finance_page(&summary());
        assert!(page.contains("<td class=\"value\">1500.00 €</td>"));
        assert!(page.contains("<td class=\"value\">420.50 €</td>"));
        assert!(page.contains("<td class=\"value\">1079.50 €</td>"));
        assert!(page.contains("<td class=\"value\">3</td>"));
        assert!(page.contains("01/05/2024 12:30:00"));
    }

    #[test]
    fn untracked_figures_are_labelled_not_invented() {
        let page = finance_page(&summary());
        for label in ["Coût de production", "Prix de vente", "Marge brute", "Marge nette"] {
            assert!(
                page.contains(&format!(
                    "<td class=\"label\">{label}</td><td class=\"value\">{UNTRACKED_VALUE}</td>"
                )),
                "missing row {label}"
            );
        }
    }

    #[test]
    fn untracked_rows_sit_between_profit_and_count() {
        let page = finance_page(&summary());
        let profit = page.find("Bénéfice").unwrap();
        let margin = page.find("Marge nette").unwrap();
        let count = page.find("Opérations").unwrap();
        assert!(profit < margin && margin < count);
    }
}
