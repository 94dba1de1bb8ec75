//! Prompt context built from the ledger.

use milkbook_core::ledger::LedgerMonth;
use milkbook_core::summary::MonthlySummary;

/// Canned questions offered next to the free-text box.
pub const SAMPLE_QUESTIONS: [&str; 4] = [
    "How much do I need to pay this month?",
    "How many days did I take milk this month?",
    "What is the average daily cost?",
    "Can you explain how the calculation works?",
];

/// Renders the month (and its summary, when known) as plain-text context.
pub fn build_context(month: &LedgerMonth, summary: Option<&MonthlySummary>) -> String {
    let mut context = format!("Current Month: {}", month.label());
    if let Some(summary) = summary {
        context.push_str(&format!(
            "\nTotal Days: {}\nMilk Taken Days: {}\nTotal Amount: {:.2}",
            summary.total_days,
            summary.taken_days,
            summary.total_amount.round_dp(2)
        ));
    }
    context
}

/// Wraps the context in the assistant's system prompt.
pub fn build_system_prompt(context: &str) -> String {
    format!(
        "You are a helpful assistant for a milk calculation application.\n\
Context: {context}\n\
Help users with their questions about milk calculations, records, and monthly summaries.\n\
Provide clear, concise answers based on the context provided."
    )
}
