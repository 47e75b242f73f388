//! The paging engine entry point
//!
//! Drives filter compilation, sort resolution, counting and windowing
//! over a lazy record sequence, producing the paged response envelope.

use crate::core::error::{PagingError, PagingResult};
use crate::core::record::Record;
use crate::query::filter::{compile_filter, parse_filter};
use crate::query::request::{PageQuery, PagedResult};
use crate::query::sort::resolve_sort;
use crate::store::QuerySet;

/// Apply filtering, sorting and pagination to a lazy record sequence.
///
/// The domain-agnostic filter is applied first; `totalCount` is then
/// read from that filtered view, and the window is materialized from the
/// same view after sorting. Sorting always precedes slicing so page
/// boundaries are deterministic. The count and the window are two
/// sequential reads with no shared snapshot: if the backing data changes
/// between them the two can disagree by a small margin, which is the
/// accepted best-effort consistency model for this read-only path.
pub async fn run_paged<T: Record>(
    set: QuerySet<T>,
    page: &PageQuery,
) -> PagingResult<PagedResult<T>> {
    let filter = parse_filter(page.filter.as_deref())?;
    let predicate = compile_filter::<T>(&filter)?;
    let sort = resolve_sort::<T>(page.sort_field.as_deref(), page.sort_direction)?;

    let filtered = set.filtered(predicate);
    let total_count = filtered.count().await.map_err(PagingError::from)?;

    let sorted = filtered.ordered(sort);
    let items = sorted
        .window(page.skip(), page.take())
        .await
        .map_err(PagingError::from)?;

    Ok(PagedResult { items, total_count })
}

/// Check that a record type is wired correctly for the paginated path.
///
/// Fails with a configuration error when the type's declared default
/// sort field is not in its registry. Call at server build time so the
/// defect surfaces at startup instead of on the first request.
pub fn verify<T: Record>() -> PagingResult<()> {
    let default = T::default_sort();
    if T::fields().resolve(default.field).is_none() {
        return Err(PagingError::Configuration {
            resource: T::resource_name(),
            message: format!("default sort field '{}' is not registered", default.field),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::SortDirection;
    use crate::query::request::{PageLimits, PageQuery};
    use crate::records::user::UserSummary;
    use crate::store::memory::InMemoryStore;

    fn seeded_store(count: usize) -> InMemoryStore<UserSummary> {
        let store = InMemoryStore::new();
        store
            .insert_many((1..=count).map(|i| UserSummary {
                id: i as i64,
                username: format!("user{i:03}"),
                last_on: None,
                is_admin: i % 3 == 0,
            }))
            .expect("seed should succeed");
        store
    }

    fn query(page: u64, page_size: u64) -> PageQuery {
        PageQuery {
            page,
            page_size,
            sort_field: None,
            sort_direction: SortDirection::Asc,
            filter: None,
        }
    }

    #[tokio::test]
    async fn test_first_page_with_defaults() {
        let store = seeded_store(25);
        let limits = PageLimits::default();
        let page = PageQuery::from_args(&Default::default(), &limits).expect("should parse");

        let result = run_paged(store.query(), &page).await.expect("should page");
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.total_count, 25);
        assert_eq!(result.items[0].username, "user001");
    }

    #[tokio::test]
    async fn test_last_page_returns_remainder() {
        let store = seeded_store(25);
        let result = run_paged(store.query(), &query(2, 10))
            .await
            .expect("should page");
        assert_eq!(result.items.len(), 5);
        assert_eq!(result.total_count, 25);
    }

    #[tokio::test]
    async fn test_beyond_last_page_is_empty() {
        let store = seeded_store(25);
        let result = run_paged(store.query(), &query(10, 10))
            .await
            .expect("should page");
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 25);
    }

    #[tokio::test]
    async fn test_enormous_page_is_empty_not_wrapped() {
        let store = seeded_store(25);
        let result = run_paged(store.query(), &query(9_223_372_036_854_775_807, 10))
            .await
            .expect("should page");
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 25);
    }

    #[tokio::test]
    async fn test_window_length_property() {
        let store = seeded_store(25);
        for (page, page_size) in [(0u64, 10u64), (1, 10), (2, 10), (0, 7), (3, 7), (4, 7)] {
            let result = run_paged(store.query(), &query(page, page_size))
                .await
                .expect("should page");
            let expected = (25i64 - (page * page_size) as i64).clamp(0, page_size as i64) as usize;
            assert_eq!(result.items.len(), expected, "page={page} size={page_size}");
            assert_eq!(result.total_count, 25);
        }
    }

    #[tokio::test]
    async fn test_total_count_is_filtered_not_paged() {
        let store = seeded_store(25);
        let mut page = query(0, 5);
        page.filter = Some(r#"{"isAdmin": true}"#.to_string());

        let result = run_paged(store.query(), &page).await.expect("should page");
        // 25 users, every third is an admin
        assert_eq!(result.total_count, 8);
        assert_eq!(result.items.len(), 5);
        assert!(result.items.iter().all(|u| u.is_admin));
    }

    #[tokio::test]
    async fn test_total_count_invariant_across_pages() {
        let store = seeded_store(25);
        for page_number in 0..4 {
            let result = run_paged(store.query(), &query(page_number, 10))
                .await
                .expect("should page");
            assert_eq!(result.total_count, 25);
        }
    }

    #[tokio::test]
    async fn test_idempotent_for_identical_requests() {
        let store = seeded_store(25);
        let mut page = query(1, 10);
        page.sort_field = Some("username".to_string());
        page.sort_direction = SortDirection::Desc;

        let first = run_paged(store.query(), &page).await.expect("should page");
        let second = run_paged(store.query(), &page).await.expect("should page");
        let first_names: Vec<&str> = first.items.iter().map(|u| u.username.as_str()).collect();
        let second_names: Vec<&str> = second.items.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(first_names, second_names);
        assert_eq!(first.total_count, second.total_count);
    }

    #[tokio::test]
    async fn test_desc_reverses_asc_without_duplicate_keys() {
        let store = seeded_store(9);
        let mut asc = query(0, 9);
        asc.sort_field = Some("username".to_string());
        let mut desc = asc.clone();
        desc.sort_direction = SortDirection::Desc;

        let ascending = run_paged(store.query(), &asc).await.expect("should page");
        let descending = run_paged(store.query(), &desc).await.expect("should page");

        let mut reversed: Vec<&str> = descending
            .items
            .iter()
            .map(|u| u.username.as_str())
            .collect();
        reversed.reverse();
        let forward: Vec<&str> = ascending.items.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(forward, reversed);
    }

    #[tokio::test]
    async fn test_sort_by_is_admin_desc_puts_admin_first() {
        let store = InMemoryStore::new();
        store
            .insert_many([
                UserSummary {
                    id: 1,
                    username: "alice".to_string(),
                    last_on: None,
                    is_admin: false,
                },
                UserSummary {
                    id: 2,
                    username: "bob".to_string(),
                    last_on: None,
                    is_admin: true,
                },
                UserSummary {
                    id: 3,
                    username: "charlie".to_string(),
                    last_on: None,
                    is_admin: false,
                },
            ])
            .expect("seed should succeed");

        let mut page = query(0, 10);
        page.sort_field = Some("isAdmin".to_string());
        page.sort_direction = SortDirection::Desc;

        let result = run_paged(store.query(), &page).await.expect("should page");
        assert_eq!(result.items[0].username, "bob");
    }

    #[tokio::test]
    async fn test_unknown_sort_field_falls_back_not_fails() {
        let store = seeded_store(5);
        let mut page = query(0, 10);
        page.sort_field = Some("usernme".to_string());

        let result = run_paged(store.query(), &page).await.expect("should page");
        // Fallback is the default sort (username asc)
        assert_eq!(result.items[0].username, "user001");
    }

    #[test]
    fn test_verify_accepts_wired_record() {
        assert!(verify::<UserSummary>().is_ok());
    }

    #[derive(Clone, Debug)]
    struct Miswired {
        id: i64,
    }

    crate::impl_record!(Miswired, resource: "miswired", default_sort: ("ghost", Asc), fields: {
        "id" => Integer(|m: &Miswired| m.id.into()),
    });

    #[test]
    fn test_verify_rejects_unregistered_default_sort() {
        let err = verify::<Miswired>().expect_err("should be a wiring defect");
        assert!(matches!(err, PagingError::Configuration { .. }));
        assert!(err.to_string().contains("ghost"));
    }

    #[tokio::test]
    async fn test_miswired_default_sort_fails_request_as_config_error() {
        let store: InMemoryStore<Miswired> = InMemoryStore::new();
        store.insert(Miswired { id: 1 }).expect("insert succeeds");

        let err = run_paged(store.query(), &query(0, 10))
            .await
            .expect_err("should surface the wiring defect");
        assert!(matches!(err, PagingError::Configuration { .. }));
    }
}
