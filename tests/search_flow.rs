//! Client and server talking over a real socket.

mod common;

use common::{TOKEN, sample_records, spawn_server};
use record_search::client::{SearchClient, SearchError, SearchRequest, SearchResponse};
use record_search::repository::InMemoryRecordStore;

fn client_for(repo: InMemoryRecordStore, token: &str) -> SearchClient {
    let addr = spawn_server(repo);
    SearchClient::new(token, format!("http://{addr}"))
}

fn ids(resp: &SearchResponse) -> Vec<i32> {
    resp.users.iter().map(|u| u.id).collect()
}

#[actix_web::test]
async fn single_row_window_sorted_by_id() {
    let client = client_for(InMemoryRecordStore::new(sample_records()), TOKEN);

    let resp = client
        .find_users(SearchRequest {
            limit: 1,
            offset: 1,
            order_field: "Id".to_string(),
            order_by: 1,
            ..SearchRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(ids(&resp), vec![1]);
    assert!(resp.next_page);
}

#[actix_web::test]
async fn last_page_has_no_next_page() {
    let client = client_for(InMemoryRecordStore::new(sample_records()), TOKEN);

    let resp = client
        .find_users(SearchRequest {
            limit: 10,
            offset: 33,
            ..SearchRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(ids(&resp), vec![33, 34]);
    assert!(!resp.next_page);
    assert_eq!(resp.users[1].name, "Wolf Glenn");
}

#[actix_web::test]
async fn oversized_limit_is_capped_at_page_size() {
    let client = client_for(InMemoryRecordStore::new(sample_records()), TOKEN);

    let resp = client
        .find_users(SearchRequest {
            limit: 27,
            ..SearchRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(resp.users.len(), 25);
    assert!(resp.next_page);
}

#[actix_web::test]
async fn filtered_page() {
    let client = client_for(InMemoryRecordStore::new(sample_records()), TOKEN);

    let resp = client
        .find_users(SearchRequest {
            limit: 5,
            query: "cillum".to_string(),
            order_field: "id".to_string(),
            order_by: -1,
            ..SearchRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(ids(&resp), vec![30, 25, 20, 15, 10]);
    assert!(resp.next_page);
}

#[actix_web::test]
async fn descending_is_reverse_of_ascending() {
    let client = client_for(InMemoryRecordStore::new(sample_records()), TOKEN);

    for field in ["Id", "Age", "Name"] {
        let page = |order_by| SearchRequest {
            limit: 25,
            offset: 0,
            query: "cillum".to_string(),
            order_field: field.to_string(),
            order_by,
        };
        let asc = client.find_users(page(1)).await.unwrap();
        let mut desc = client.find_users(page(-1)).await.unwrap();
        desc.users.reverse();

        assert!(!asc.next_page, "field {field}");
        assert_eq!(asc.users.len(), 7, "field {field}");
        assert_eq!(asc.users, desc.users, "field {field}");
    }
}

#[actix_web::test]
async fn wrong_token_is_unauthorized() {
    let client = client_for(InMemoryRecordStore::new(sample_records()), "wrong");

    let err = client
        .find_users(SearchRequest {
            limit: 1,
            ..SearchRequest::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err, SearchError::Unauthorized);
}

#[actix_web::test]
async fn bad_order_field_is_reported_with_its_name() {
    let client = client_for(InMemoryRecordStore::new(sample_records()), TOKEN);

    let err = client
        .find_users(SearchRequest {
            limit: 1,
            order_field: "Gender".to_string(),
            ..SearchRequest::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "OrderFeld Gender invalid");
}

#[actix_web::test]
async fn unavailable_store_is_unknown_error() {
    let client = client_for(InMemoryRecordStore::unavailable("missing.csv"), TOKEN);

    let err = client
        .find_users(SearchRequest {
            limit: 1,
            ..SearchRequest::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::TransportUnknown(ref msg) if msg.contains("503")));
}
