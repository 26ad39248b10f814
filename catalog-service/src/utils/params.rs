use crate::error::RangeError;
use crate::services::query::ListQuery;

/// Raw `GET /books` query string. Kept as text so that a bad number becomes a
/// catalog error instead of an extractor rejection.
#[derive(Debug, Default)]
pub struct ListParams {
    pub status: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

/// Built from decoded key/value pairs. A repeated key keeps its first value;
/// unknown keys are ignored.
impl FromIterator<(String, String)> for ListParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "status" => &mut params.status,
                "offset" => &mut params.offset,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_count(param: &'static str, value: Option<String>) -> Result<Option<usize>, RangeError> {
    match non_empty(value) {
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| RangeError::NotAnInteger { param, value: raw }),
        None => Ok(None),
    }
}

impl TryFrom<ListParams> for ListQuery {
    type Error = RangeError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        Ok(ListQuery {
            status: non_empty(params.status),
            offset: parse_count("offset", params.offset)?,
            limit: parse_count("limit", params.limit)?,
        })
    }
}
