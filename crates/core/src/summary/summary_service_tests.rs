#[cfg(test)]
mod tests {
    use crate::accounts::{Account, AccountService, AccountServiceTrait, NewAccount};
    use crate::ledger::{DailyRecordUpdate, LedgerService, LedgerServiceTrait};
    use crate::summary::{SummaryService, SummaryServiceTrait};
    use crate::test_support::InMemoryStore;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    struct Fixture {
        store: InMemoryStore,
        ledger: LedgerService,
        summaries: SummaryService,
        account: Account,
    }

    async fn fixture() -> Fixture {
        let store = InMemoryStore::new();
        let accounts = AccountService::new(Arc::new(store.clone()));
        let account = accounts
            .register(NewAccount {
                username: "asha".to_string(),
                password: "pw".to_string(),
                default_daily_cost: Some(dec!(104.00)),
            })
            .await
            .unwrap();
        Fixture {
            ledger: LedgerService::new(Arc::new(store.clone()), Arc::new(store.clone())),
            summaries: SummaryService::new(Arc::new(store.clone()), Arc::new(store.clone())),
            store,
            account,
        }
    }

    #[tokio::test]
    async fn test_summarize_full_april() {
        let f = fixture().await;
        f.ledger.seed_month(&f.account.id, 4, 2024).await.unwrap();

        let summary = f.summaries.summarize(&f.account.id, 4, 2024).await.unwrap();
        assert_eq!(summary.total_days, 30);
        assert_eq!(summary.taken_days, 30);
        assert_eq!(summary.total_amount, dec!(3120.00));
        assert_eq!((summary.year, summary.month), (2024, 4));
    }

    #[tokio::test]
    async fn test_summarize_after_edits() {
        let f = fixture().await;
        f.ledger.seed_month(&f.account.id, 4, 2024).await.unwrap();
        let records = f.ledger.get_records(&f.account.id, 4, 2024).unwrap();

        // Day 1 skipped with an extra cost that must not count.
        f.ledger
            .update_record(
                &records[0].id,
                DailyRecordUpdate {
                    is_taken: false,
                    base_cost: dec!(104),
                    additional_cost: dec!(40),
                    notes: None,
                },
            )
            .await
            .unwrap();
        f.ledger
            .update_record(
                &records[1].id,
                DailyRecordUpdate {
                    is_taken: true,
                    base_cost: dec!(104),
                    additional_cost: dec!(20.50),
                    notes: None,
                },
            )
            .await
            .unwrap();

        let summary = f.summaries.summarize(&f.account.id, 4, 2024).await.unwrap();
        assert_eq!(summary.total_days, 30);
        assert_eq!(summary.taken_days, 29);
        assert_eq!(summary.total_amount, dec!(3036.50));
    }

    #[tokio::test]
    async fn test_summarize_empty_month_persists_zero() {
        let f = fixture().await;
        let summary = f.summaries.summarize(&f.account.id, 7, 2024).await.unwrap();
        assert_eq!(summary.total_days, 0);
        assert_eq!(summary.taken_days, 0);
        assert_eq!(summary.total_amount, Decimal::ZERO);
        assert_eq!(f.store.summary_count(), 1);
    }

    #[tokio::test]
    async fn test_resummarize_replaces_cached_row() {
        let f = fixture().await;
        f.ledger.seed_month(&f.account.id, 4, 2024).await.unwrap();
        f.summaries.summarize(&f.account.id, 4, 2024).await.unwrap();

        let record = f.ledger.get_records(&f.account.id, 4, 2024).unwrap()[4].clone();
        f.ledger
            .update_record(
                &record.id,
                DailyRecordUpdate {
                    is_taken: false,
                    base_cost: dec!(104),
                    additional_cost: Decimal::ZERO,
                    notes: None,
                },
            )
            .await
            .unwrap();

        // The cache is only refreshed by summarize.
        let stale = f
            .summaries
            .get_cached_summary(&f.account.id, 4, 2024)
            .unwrap()
            .unwrap();
        assert_eq!(stale.taken_days, 30);

        let fresh = f.summaries.summarize(&f.account.id, 4, 2024).await.unwrap();
        assert_eq!(fresh.taken_days, 29);
        assert_eq!(fresh.total_amount, dec!(3016.00));
        assert_eq!(f.store.summary_count(), 1);
        assert_eq!(
            f.summaries
                .get_cached_summary(&f.account.id, 4, 2024)
                .unwrap(),
            Some(fresh)
        );
    }

    #[tokio::test]
    async fn test_get_cached_summary_absent_and_invalid() {
        let f = fixture().await;
        assert!(f
            .summaries
            .get_cached_summary(&f.account.id, 4, 2024)
            .unwrap()
            .is_none());
        assert!(f.summaries.get_cached_summary(&f.account.id, 13, 2024).is_err());
        assert!(f.summaries.summarize(&f.account.id, 0, 2024).await.is_err());
        assert_eq!(f.store.summary_count(), 0);
    }
}
