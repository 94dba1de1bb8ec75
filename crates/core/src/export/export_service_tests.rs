#[cfg(test)]
mod tests {
    use crate::accounts::{AccountService, AccountServiceTrait, NewAccount};
    use crate::export::{ExportService, ExportTable};
    use crate::ledger::{LedgerService, LedgerServiceTrait};
    use crate::summary::{SummaryService, SummaryServiceTrait};
    use crate::test_support::InMemoryStore;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn export_service(store: &InMemoryStore) -> ExportService {
        ExportService::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        )
    }

    #[test]
    fn test_export_table_parsing() {
        assert_eq!(
            "daily-records".parse::<ExportTable>().unwrap(),
            ExportTable::DailyRecords
        );
        assert_eq!(
            "monthly-summaries".parse::<ExportTable>().unwrap(),
            ExportTable::MonthlySummaries
        );
        assert!("passwords".parse::<ExportTable>().is_err());
        assert_eq!(ExportTable::DailyRecords.file_name(), "daily_records.csv");
    }

    #[tokio::test]
    async fn test_export_is_scoped_to_account_and_omits_password() {
        let store = InMemoryStore::new();
        let accounts = AccountService::new(Arc::new(store.clone()));
        let ledger = LedgerService::new(Arc::new(store.clone()), Arc::new(store.clone()));
        let summaries = SummaryService::new(Arc::new(store.clone()), Arc::new(store.clone()));

        let asha = accounts
            .register(NewAccount {
                username: "asha".to_string(),
                password: "hunter2".to_string(),
                default_daily_cost: Some(dec!(104.00)),
            })
            .await
            .unwrap();
        let ravi = accounts
            .register(NewAccount {
                username: "ravi".to_string(),
                password: "pw".to_string(),
                default_daily_cost: None,
            })
            .await
            .unwrap();
        ledger.seed_month(&asha.id, 2, 2024).await.unwrap();
        ledger.seed_month(&ravi.id, 2, 2024).await.unwrap();
        summaries.summarize(&asha.id, 2, 2024).await.unwrap();

        let service = export_service(&store);

        let csv = service.export_csv(&asha.id, ExportTable::Accounts).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("id,username,default_daily_cost,created_at,updated_at")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with(&format!("{},asha,104.00,", asha.id)));
        assert!(lines.next().is_none());
        assert!(!csv.contains("argon2"));
        assert!(!csv.contains("ravi"));

        let csv = service
            .export_csv(&asha.id, ExportTable::DailyRecords)
            .unwrap();
        assert_eq!(csv.lines().count(), 1 + 29);
        assert!(csv.lines().next().unwrap().contains("total_cost"));
        assert!(!csv.contains(&ravi.id));

        let csv = service
            .export_csv(&asha.id, ExportTable::MonthlySummaries)
            .unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].starts_with(&format!("{},2024,2,29,29,3016.00,", asha.id)));
    }

    #[tokio::test]
    async fn test_export_empty_table_writes_header() {
        let store = InMemoryStore::new();
        let accounts = AccountService::new(Arc::new(store.clone()));
        let account = accounts
            .register(NewAccount {
                username: "asha".to_string(),
                password: "pw".to_string(),
                default_daily_cost: None,
            })
            .await
            .unwrap();

        let csv = export_service(&store)
            .export_csv(&account.id, ExportTable::MonthlySummaries)
            .unwrap();
        assert_eq!(
            csv.trim_end(),
            "account_id,year,month,total_days,taken_days,total_amount,calculated_at"
        );
    }
}
