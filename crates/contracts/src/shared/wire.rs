//! Разбор и сериализация "сетевых" значений: даты в ISO, флаги Oui/Non.
//!
//! Бэкенд отдаёт даты то как `2023-05-10`, то как полный ISO datetime,
//! а флаги то строками "Oui"/"Non", то булевыми значениями.

use super::error::ContractError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Формат даты в query-параметрах и JSON
pub const ISO_DATE: &str = "%Y-%m-%d";

pub const YES: &str = "Oui";
pub const NO: &str = "Non";

/// Разбирает дату: `YYYY-MM-DD`, ISO datetime (берётся дата) или `DD/MM/YYYY`
pub fn parse_date(raw: &str) -> Result<NaiveDate, ContractError> {
    let value = raw.trim();
    let date_part = value.split('T').next().unwrap_or(value);

    NaiveDate::parse_from_str(date_part, ISO_DATE)
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d/%m/%Y"))
        .map_err(|_| ContractError::InvalidDate(raw.to_string()))
}

/// Разбирает дату-время изменения (журнал изменений)
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, ContractError> {
    let value = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .or_else(|_| parse_date(value).map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default()))
        .map_err(|_| ContractError::InvalidDate(raw.to_string()))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// "Oui"/"Non" (регистр не важен), также true/false и 1/0
pub fn parse_flag(raw: &str) -> Result<bool, ContractError> {
    match raw.trim().to_lowercase().as_str() {
        "oui" | "true" | "1" => Ok(true),
        "non" | "false" | "0" => Ok(false),
        _ => Err(ContractError::InvalidFlag(raw.to_string())),
    }
}

pub fn flag_label(value: bool) -> &'static str {
    if value {
        YES
    } else {
        NO
    }
}

/// serde-модуль для `Option<NaiveDate>`: пустая строка и null дают `None`
pub mod opt_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&super::format_iso_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) if !s.trim().is_empty() => super::parse_date(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

/// serde-модуль для `NaiveDateTime` в журнале изменений
pub mod date_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// serde-модуль для флагов: пишет "Oui"/"Non", читает строку или bool
pub mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagRepr {
        Bool(bool),
        Text(String),
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(super::flag_label(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<FlagRepr>::deserialize(deserializer)? {
            Some(FlagRepr::Bool(b)) => Ok(b),
            Some(FlagRepr::Text(s)) if s.trim().is_empty() => Ok(false),
            Some(FlagRepr::Text(s)) => super::parse_flag(&s).map_err(serde::de::Error::custom),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
        assert_eq!(parse_date("2023-05-10").unwrap(), expected);
        assert_eq!(parse_date("2023-05-10T00:00:00.000Z").unwrap(), expected);
        assert_eq!(parse_date("10/05/2023").unwrap(), expected);
        assert!(parse_date("10.05.2023").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_date_time_variants() {
        let dt = parse_date_time("2023-05-15T14:30:00Z").unwrap();
        assert_eq!(dt.format("%d/%m/%Y %H:%M").to_string(), "15/05/2023 14:30");

        let dt = parse_date_time("2023-05-15 08:05:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "08:05");

        assert!(parse_date_time("hier").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("Oui"), Ok(true));
        assert_eq!(parse_flag("non"), Ok(false));
        assert_eq!(parse_flag(" true "), Ok(true));
        assert!(parse_flag("peut-être").is_err());
    }
}
