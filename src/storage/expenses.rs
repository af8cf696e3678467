//! Expense repository for CSV storage
//!
//! Every call goes back to the file: there is no in-memory cache, so two
//! operations never see stale data from each other.

use tracing::debug;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId, Money};

use super::file_io::{append_rows, read_rows, write_rows_atomic};
use super::init::initialize_storage;

/// Number of columns in a data row
const FIELD_COUNT: usize = 5;

/// Repository for expense persistence
pub struct ExpenseRepository {
    paths: ExpensePaths,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(paths: ExpensePaths) -> Self {
        Self { paths }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Create the data file with its header if it is missing
    pub fn ensure_exists(&self) -> Result<(), ExpenseError> {
        initialize_storage(&self.paths)
    }

    /// Load every expense in file order
    ///
    /// Rows with fewer than five fields are skipped. Unparsable ids and
    /// amounts read as zero.
    pub fn load_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        self.ensure_exists()?;

        let rows = read_rows(self.paths.data_file())?;
        let total_rows = rows.len();
        let expenses: Vec<Expense> = rows.iter().filter_map(|row| parse_row(row)).collect();

        if expenses.len() != total_rows {
            debug!(
                dropped = total_rows - expenses.len(),
                "skipped rows with missing fields"
            );
        }
        debug!(count = expenses.len(), "loaded expenses");

        Ok(expenses)
    }

    /// Rewrite the data file with exactly `expenses`
    pub fn save_all(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_rows_atomic(self.paths.data_file(), self.paths.temp_file(), expenses)?;
        debug!(count = expenses.len(), "saved expenses");
        Ok(())
    }

    /// Append one expense to the end of the data file
    pub fn append(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.ensure_exists()?;
        append_rows(self.paths.data_file(), std::slice::from_ref(expense))
    }

    /// Next free id: one past the largest stored id, or 1 for an empty store
    ///
    /// Fails once the largest stored id is `i64::MAX`, since ids are never
    /// reused.
    pub fn next_id(&self) -> Result<ExpenseId, ExpenseError> {
        let max = self
            .load_all()?
            .iter()
            .map(|e| e.id)
            .max()
            .filter(|id| id.get() > 0)
            .unwrap_or(ExpenseId::new(0));
        max.next().ok_or_else(|| {
            ExpenseError::Storage(format!("Id space exhausted: largest id is {}", max))
        })
    }
}

/// Build an expense from one data row, or `None` if fields are missing
fn parse_row(fields: &[String]) -> Option<Expense> {
    if fields.len() < FIELD_COUNT {
        return None;
    }

    Some(Expense::new(
        ExpenseId::parse_lenient(&fields[0]),
        fields[1].as_str(),
        fields[2].as_str(),
        fields[3].as_str(),
        Money::parse_lenient(&fields[4]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repository() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_data_file(temp_dir.path().join("expenses.csv"));
        (temp_dir, ExpenseRepository::new(paths))
    }

    fn write_file(repo: &ExpenseRepository, content: &str) {
        fs::write(repo.paths().data_file(), content).unwrap();
    }

    fn read_file(repo: &ExpenseRepository) -> String {
        fs::read_to_string(repo.paths().data_file()).unwrap()
    }

    fn expense(id: i64, date: &str, category: &str, note: &str, cents: i64) -> Expense {
        Expense::new(ExpenseId::new(id), date, category, note, Money::from_cents(cents))
    }

    #[test]
    fn test_ensure_exists_creates_header_only() {
        let (_temp_dir, repo) = create_test_repository();
        repo.ensure_exists().unwrap();
        assert_eq!(read_file(&repo), "id,date,category,note,amount\n");
    }

    #[test]
    fn test_load_from_missing_file_is_empty() {
        let (_temp_dir, repo) = create_test_repository();
        let expenses = repo.load_all().unwrap();
        assert!(expenses.is_empty());
        assert!(repo.paths().data_file().exists());
    }

    #[test]
    fn test_load_parses_rows_in_order() {
        let (_temp_dir, repo) = create_test_repository();
        write_file(
            &repo,
            "id,date,category,note,amount\n\
             1,2024-01-05,Food,Lunch,12.50\n\
             2,2024-02-01,Travel,Taxi,30.00\n",
        );

        let expenses = repo.load_all().unwrap();
        assert_eq!(
            expenses,
            vec![
                expense(1, "2024-01-05", "Food", "Lunch", 1250),
                expense(2, "2024-02-01", "Travel", "Taxi", 3000),
            ]
        );
    }

    #[test]
    fn test_load_skips_short_and_blank_lines() {
        let (_temp_dir, repo) = create_test_repository();
        write_file(
            &repo,
            "id,date,category,note,amount\n\
             1,2024-01-05,Food,Lunch,12.50\n\
             \n\
             garbage line\n\
             3,2024-01-07,Food\n\
             4,2024-01-08,Fun,Movie,9.00\n",
        );

        let expenses = repo.load_all().unwrap();
        let ids: Vec<i64> = expenses.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_load_is_lenient_with_numbers() {
        // Intentional leniency: bad numeric fields read as zero
        let (_temp_dir, repo) = create_test_repository();
        write_file(
            &repo,
            "id,date,category,note,amount\n\
             abc,2024-01-05,Food,Lunch,twelve\n\
             7x,2024-01-06,Food,Dinner,8.5usd\n",
        );

        let expenses = repo.load_all().unwrap();
        assert_eq!(expenses[0].id, ExpenseId::new(0));
        assert_eq!(expenses[0].amount, Money::zero());
        assert_eq!(expenses[1].id, ExpenseId::new(7));
        assert_eq!(expenses[1].amount, Money::from_cents(850));
    }

    #[test]
    fn test_load_ignores_extra_fields() {
        // A comma inside the note shifts the columns; the amount comes from
        // the fifth field and the rest is ignored.
        let (_temp_dir, repo) = create_test_repository();
        write_file(
            &repo,
            "id,date,category,note,amount\n5,2024-03-01,Food,Lunch, with Bob,14.00\n",
        );

        let expenses = repo.load_all().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].note, "Lunch");
        assert_eq!(expenses[0].amount, Money::zero());
    }

    #[test]
    fn test_load_handles_crlf_line_endings() {
        let (_temp_dir, repo) = create_test_repository();
        write_file(
            &repo,
            "id,date,category,note,amount\r\n1,2024-01-05,Food,Lunch,12.50\r\n",
        );

        let expenses = repo.load_all().unwrap();
        assert_eq!(expenses, vec![expense(1, "2024-01-05", "Food", "Lunch", 1250)]);
    }

    #[test]
    fn test_save_all_format() {
        let (_temp_dir, repo) = create_test_repository();
        let expenses = vec![
            expense(1, "2024-01-05", "Food", "Lunch", 1250),
            expense(2, "2024-02-01", "Travel", "Taxi", 3000),
            expense(3, "2024-02-03", "Refund", "", -500),
        ];

        repo.save_all(&expenses).unwrap();

        assert_eq!(
            read_file(&repo),
            "id,date,category,note,amount\n\
             1,2024-01-05,Food,Lunch,12.50\n\
             2,2024-02-01,Travel,Taxi,30.00\n\
             3,2024-02-03,Refund,,-5.00\n"
        );
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_temp_dir, repo) = create_test_repository();
        let expenses = vec![
            expense(3, "2024-01-05", "Food", "Lunch with team", 1250),
            expense(1, "1999-12-31", "Party", "", 0),
            expense(8, "2024-02-29", "Bills", "Power", -4599),
        ];

        repo.save_all(&expenses).unwrap();
        assert_eq!(repo.load_all().unwrap(), expenses);
    }

    #[test]
    fn test_save_empty_list_keeps_header() {
        let (_temp_dir, repo) = create_test_repository();
        repo.save_all(&[expense(1, "2024-01-05", "Food", "Lunch", 1250)])
            .unwrap();
        repo.save_all(&[]).unwrap();
        assert_eq!(read_file(&repo), "id,date,category,note,amount\n");
    }

    #[test]
    fn test_append_adds_line() {
        let (_temp_dir, repo) = create_test_repository();

        repo.append(&expense(1, "2024-01-05", "Food", "Lunch", 1250))
            .unwrap();
        repo.append(&expense(2, "2024-02-01", "Travel", "Taxi", 3000))
            .unwrap();

        assert_eq!(
            read_file(&repo),
            "id,date,category,note,amount\n\
             1,2024-01-05,Food,Lunch,12.50\n\
             2,2024-02-01,Travel,Taxi,30.00\n"
        );
    }

    #[test]
    fn test_next_id_on_empty_store() {
        let (_temp_dir, repo) = create_test_repository();
        assert_eq!(repo.next_id().unwrap(), ExpenseId::new(1));
    }

    #[test]
    fn test_next_id_uses_max_id() {
        let (_temp_dir, repo) = create_test_repository();
        repo.save_all(&[
            expense(1, "2024-01-01", "A", "", 100),
            expense(5, "2024-01-02", "B", "", 100),
            expense(3, "2024-01-03", "C", "", 100),
        ])
        .unwrap();

        assert_eq!(repo.next_id().unwrap(), ExpenseId::new(6));
    }

    #[test]
    fn test_next_id_ignores_non_positive_ids() {
        let (_temp_dir, repo) = create_test_repository();
        write_file(
            &repo,
            "id,date,category,note,amount\n-4,2024-01-05,Food,Lunch,1.00\n",
        );
        assert_eq!(repo.next_id().unwrap(), ExpenseId::new(1));
    }

    #[test]
    fn test_next_id_fails_when_ids_run_out() {
        let (_temp_dir, repo) = create_test_repository();
        write_file(
            &repo,
            "id,date,category,note,amount\n\
             99999999999999999999,2024-01-05,Food,Lunch,1.00\n",
        );

        let err = repo.next_id().unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }
}
