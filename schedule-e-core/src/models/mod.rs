mod entry;
mod property;
mod schedule_e;

pub use entry::{ExpenseCategory, ExpenseEntry, Frequency, IncomeEntry};
pub use property::{PropertyAddress, PropertyFinancials, PropertyType};
pub use schedule_e::{
    DepreciationDetail, ScheduleEData, ScheduleEExpenses, ScheduleEIncome, ScheduleESummary,
};
