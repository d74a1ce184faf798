use std::cmp::Ordering;

use crate::domain::query::{OrderBy, OrderField, SearchQuery};
use crate::domain::record::Record;
use crate::dto::api::User;
use crate::forms::search::SearchForm;
use crate::pagination::window;
use crate::repository::RecordReader;
use crate::services::{ServiceError, ServiceResult};

/// Rejects a call whose `AccessToken` is missing or differs from the configured one.
///
/// Must run before the query string is parsed.
pub fn authorize(access_token: Option<&str>, expected_token: &str) -> ServiceResult<()> {
    if access_token != Some(expected_token) {
        return Err(ServiceError::Unauthorized);
    }
    Ok(())
}

/// Validates an authorized request and evaluates it against the record store.
///
/// No records are read unless the form passes validation.
pub fn search_records<R>(repo: &R, form: SearchForm) -> ServiceResult<Vec<User>>
where
    R: RecordReader + ?Sized,
{
    let query = SearchQuery::try_from(form).map_err(|err| {
        log::warn!("Rejected search request: {err:?}");
        err
    })?;

    let records = repo.list_records().map_err(|err| {
        log::error!("Failed to read records: {err}");
        err
    })?;

    Ok(run_query(&records, &query))
}

/// Filters, sorts and windows `records`, projecting the survivors to [`User`].
pub fn run_query(records: &[Record], query: &SearchQuery) -> Vec<User> {
    let filtered = filter_records(records, &query.query);
    let sorted = sort_records(filtered, query.order_field, query.order_by);

    window(&sorted, query.offset, query.limit)
        .iter()
        .map(|record| User::from(*record))
        .collect()
}

/// Keeps records whose display name or biography contains `query`.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|record| record.matches(query)).collect()
}

fn compare(a: &Record, b: &Record, field: OrderField) -> Ordering {
    match field {
        OrderField::Id => a.id.cmp(&b.id),
        OrderField::Age => a.age.cmp(&b.age),
        OrderField::Name => a.display_name().cmp(&b.display_name()),
    }
}

/// Orders the sequence by `field`. Descending is the exact reverse of the
/// stable ascending order; [`OrderBy::AsIs`] leaves it untouched.
pub fn sort_records(
    mut records: Vec<&Record>,
    field: OrderField,
    order_by: OrderBy,
) -> Vec<&Record> {
    if order_by == OrderBy::AsIs {
        return records;
    }

    records.sort_by(|a, b| compare(a, b, field));
    if order_by == OrderBy::Desc {
        records.reverse();
    }
    records
}
