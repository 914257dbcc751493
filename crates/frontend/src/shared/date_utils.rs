/// Utilities for date and time formatting
///
/// Один и тот же формат используется в таблицах, карточках и экспорте.
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Что показывать вместо отсутствующей даты
pub const EMPTY_CELL: &str = "-";

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Дата в формате dd/MM/yyyy
/// Example: 2023-05-10 -> "10/05/2023", None -> "-"
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => EMPTY_CELL.to_string(),
    }
}

/// Дата и время в формате dd/MM/yyyy HH:mm
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// "mai 2023"
pub fn month_label(date: NaiveDate) -> String {
    let month = MONTHS_FR[date.month0() as usize];
    format!("{} {}", month, date.year())
}

/// Значение для `<input type="date">`: yyyy-MM-dd или пустая строка
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Обратное к `to_input_value`; пустое или некорректное значение даёт None
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(date(2023, 5, 10))), "10/05/2023");
        assert_eq!(format_date(Some(date(2024, 12, 31))), "31/12/2024");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_format_datetime() {
        let dt = date(2024, 3, 15).and_hms_opt(14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "15/03/2024 14:02");
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(date(2023, 5, 1)), "mai 2023");
        assert_eq!(month_label(date(2023, 8, 31)), "août 2023");
    }

    #[test]
    fn test_input_value() {
        assert_eq!(to_input_value(Some(date(2023, 5, 10))), "2023-05-10");
        assert_eq!(to_input_value(None), "");
        assert_eq!(from_input_value("2023-05-10"), Some(date(2023, 5, 10)));
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("10/05/2023"), None);
    }
}
