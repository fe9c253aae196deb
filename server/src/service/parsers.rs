//! Parsing functions from raw query parameters to typed search requests

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::{SearchRequest, ServiceError};
use crate::persistence::{ColumnKind, Field, Filter, FilterValue, Record};

pub const PAGE_PARAM: &str = "page";
pub const PAGE_SIZE_PARAM: &str = "pageSize";
pub const SORT_BY_PARAM: &str = "sortBy";
pub const SORT_DIR_PARAM: &str = "sortDir";

/// Last non-empty value of a case-insensitively named parameter.
fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .rev()
        .find(|(k, v)| k.eq_ignore_ascii_case(name) && !v.is_empty())
        .map(|(_, v)| v.as_str())
}

fn parse_i64(name: &str, raw: &str) -> Result<i64, ServiceError> {
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::InvalidArgument(format!("Invalid value '{raw}' for {name}.")))
}

/// Accepts RFC 3339, a bare date (midnight UTC) or a local date-time read as
/// UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(t.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
}

pub fn parse_filter_value(field: &Field, raw: &str) -> Result<FilterValue, ServiceError> {
    match field.kind {
        ColumnKind::Integer => parse_i64(field.name, raw).map(FilterValue::Integer),
        ColumnKind::Timestamp => parse_timestamp(raw).map(FilterValue::Timestamp).ok_or_else(|| {
            ServiceError::InvalidArgument(format!("Invalid value '{raw}' for {}.", field.name))
        }),
    }
}

/// Build a [`SearchRequest`] for `E` from query parameters.
///
/// Parameter names match case-insensitively and empty values count as
/// absent. Filters come out in the entity's declared order, whatever order
/// the parameters arrived in. Unknown parameters are ignored.
pub fn parse_search<E: Record>(params: &[(String, String)]) -> Result<SearchRequest, ServiceError> {
    let mut filters = Vec::new();
    for field in E::FILTERS {
        if let Some(raw) = param(params, field.name) {
            filters.push(Filter {
                field,
                value: parse_filter_value(field, raw)?,
            });
        }
    }

    Ok(SearchRequest {
        filters,
        page: param(params, PAGE_PARAM)
            .map(|raw| parse_i64(PAGE_PARAM, raw))
            .transpose()?,
        page_size: param(params, PAGE_SIZE_PARAM)
            .map(|raw| parse_i64(PAGE_SIZE_PARAM, raw))
            .transpose()?,
        sort_by: param(params, SORT_BY_PARAM).map(str::to_string),
        sort_dir: param(params, SORT_DIR_PARAM).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{DailyLog, Score};
    use chrono::TimeZone;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_search_reads_every_parameter() {
        let req = parse_search::<DailyLog>(&params(&[
            ("idUser", "12"),
            ("page", "2"),
            ("pageSize", "5"),
            ("sortBy", "workHours"),
            ("sortDir", "desc"),
        ]))
        .unwrap();
        assert_eq!(req.filters.len(), 1);
        assert_eq!(req.filters[0].field.column, "id_user");
        assert_eq!(req.filters[0].value, FilterValue::Integer(12));
        assert_eq!(req.page, Some(2));
        assert_eq!(req.page_size, Some(5));
        assert_eq!(req.sort_by.as_deref(), Some("workHours"));
        assert_eq!(req.sort_dir.as_deref(), Some("desc"));
    }

    #[test]
    fn test_parse_search_names_are_case_insensitive() {
        let req = parse_search::<DailyLog>(&params(&[("IDUSER", "3"), ("PageSize", "7")])).unwrap();
        assert_eq!(req.filters[0].value, FilterValue::Integer(3));
        assert_eq!(req.page_size, Some(7));
    }

    #[test]
    fn test_parse_search_filters_follow_declared_order() {
        let req = parse_search::<DailyLog>(&params(&[
            ("idUser", "12"),
            ("workHours", "8"),
            ("idLog", "1"),
        ]))
        .unwrap();
        let names: Vec<_> = req.filters.iter().map(|f| f.field.name).collect();
        assert_eq!(names, vec!["idLog", "workHours", "idUser"]);
    }

    #[test]
    fn test_parse_search_empty_and_unknown_are_ignored() {
        let req = parse_search::<DailyLog>(&params(&[
            ("idUser", ""),
            ("page", ""),
            ("meetings", "3"),
            ("password", "x"),
        ]))
        .unwrap();
        assert!(req.filters.is_empty());
        assert_eq!(req.page, None);
    }

    #[test]
    fn test_parse_search_rejects_malformed_numbers() {
        let err = parse_search::<DailyLog>(&params(&[("idUser", "twelve")])).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert!(err.to_string().contains("idUser"));

        assert!(parse_search::<DailyLog>(&params(&[("page", "1.5")])).is_err());
        assert!(parse_search::<DailyLog>(&params(&[("pageSize", "ten")])).is_err());
    }

    #[test]
    fn test_parse_search_timestamp_filter() {
        let req = parse_search::<Score>(&params(&[("dateScore", "2025-11-28T10:00:00Z")])).unwrap();
        assert_eq!(
            req.filters[0].value,
            FilterValue::Timestamp(Utc.with_ymd_and_hms(2025, 11, 28, 10, 0, 0).unwrap())
        );
        assert!(parse_search::<Score>(&params(&[("createdAt", "yesterday")])).is_err());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2025, 11, 28, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2025-11-28"), Some(expected));
        assert_eq!(parse_timestamp("2025-11-28T00:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-11-28T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("28/11/2025"), None);
    }
}
