#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use reqwest::StatusCode;
    use shop_dashboard::components::snapshot_card::url_rows;
    use shop_dashboard::hooks::{
        use_best_price::{BestPriceAction, BestPriceState},
        use_create_product::{CreateFormAction, CreateFormState, settle_create, try_begin},
        use_query::{QueryState, settle},
        use_route::Route,
        use_snapshots::{SnapshotsAction, SnapshotsState, ViewMode},
    };
    use shop_dashboard::models::{
        chart::{ChartSeries, Y_FALLBACK_PADDING, padded_domain},
        error::AppError,
        product::{Product, ProductCreate},
        snapshot::{DateRange, Snapshot, UrlEntry, UrlPrice},
    };
    use shop_dashboard::services::{
        api::{ApiConfig, creation_error},
        cache,
    };
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::functional::Reducible;

    // Helper function to create a snapshot with plain URLs
    fn snapshot(id: u64, price: Option<f64>, hour: u32, urls: &[&str]) -> Snapshot {
        Snapshot {
            id,
            product_id: 1,
            title: format!("Snapshot {id}"),
            price,
            urls: urls.iter().copied().map(UrlEntry::from).collect(),
            captured_at: Utc.with_ymd_and_hms(2025, 5, 1, hour, 0, 0).unwrap(),
        }
    }

    fn config() -> ApiConfig {
        ApiConfig::builder()
            .base_url("http://localhost:8000")
            .build()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_best_price_display() {
        let error = AppError::BestPriceError("Not Found".to_string());
        assert_eq!(error.to_string(), "Error fetching best price: Not Found");
    }

    #[test]
    fn test_creation_error_shows_body_verbatim() {
        let error = creation_error(StatusCode::BAD_REQUEST, "name required");
        assert_eq!(error, AppError::CreationError("name required".to_string()));
        assert_eq!(error.to_string(), "name required");
    }

    // ===== Model Tests =====

    #[test]
    fn test_product_deserialization() {
        let json = r#"{
            "id": 3,
            "name": "Espresso machine",
            "prompt": "best espresso machine under $500",
            "created_at": "2025-05-01T09:30:00.123456+00:00",
            "snapshots": [{
                "id": 10,
                "product_id": 3,
                "title": "Breville Bambino",
                "price": "299.99",
                "urls": ["https://shop.example.com/bambino"],
                "captured_at": "2025-05-01T09:31:00"
            }]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(
            product.prompt.as_deref(),
            Some("best espresso machine under $500")
        );
        assert_eq!(product.snapshots.len(), 1);

        let snapshot = &product.snapshots[0];
        assert_eq!(snapshot.price, Some(299.99));
        assert_eq!(
            snapshot.urls,
            vec![UrlEntry::Plain(
                "https://shop.example.com/bambino".to_string()
            )]
        );
    }

    #[test]
    fn test_product_without_prompt_or_snapshots() {
        let json = r#"{"id": 1, "name": "Kettle", "created_at": "2025-05-01T00:00:00Z"}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.prompt, None);
        assert!(product.snapshots.is_empty());
    }

    #[test]
    fn test_snapshot_with_mixed_url_entries() {
        let json = r#"{
            "id": 1,
            "product_id": 1,
            "title": "Kettle",
            "price": null,
            "urls": ["https://a.example.com", {"url": "https://b.example.com", "price": 12.5}],
            "captured_at": "2025-05-01T00:00:00Z"
        }"#;

        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.price, None);
        assert_eq!(snapshot.urls[0].own_price(), None);
        assert_eq!(snapshot.urls[1].own_price(), Some(12.5));
        assert_eq!(snapshot.urls[1].url(), "https://b.example.com");
    }

    #[test]
    fn test_product_create_serialization() {
        let body = serde_json::to_value(ProductCreate::new("Kettle", "cheap kettle")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "name": "Kettle", "prompt": "cheap kettle" })
        );
    }

    // ===== Best Price Tests =====

    #[test]
    fn test_best_price_wrapping_copies_snapshot_price() {
        let wrapped = snapshot(1, Some(19.99), 0, &["https://a.test", "https://b.test"])
            .with_wrapped_prices();

        assert_eq!(
            wrapped.urls,
            vec![
                UrlEntry::Priced(UrlPrice {
                    url: "https://a.test".to_string(),
                    price: Some(19.99),
                }),
                UrlEntry::Priced(UrlPrice {
                    url: "https://b.test".to_string(),
                    price: Some(19.99),
                }),
            ]
        );
    }

    #[test]
    fn test_best_price_wrapping_null_price_becomes_zero() {
        let wrapped = snapshot(1, None, 0, &["https://a.test"]).with_wrapped_prices();

        assert_eq!(wrapped.urls.len(), 1);
        assert_eq!(wrapped.urls[0].own_price(), Some(0.0));
        assert_eq!(wrapped.price, None);
    }

    #[test]
    fn test_blank_best_price_form_sends_no_query() {
        let range = DateRange::from_inputs("", "  ");
        assert_eq!(range, DateRange::default());

        let url = config().best_price_url(4, range.start, range.end);
        assert_eq!(url, "http://localhost:8000/products/4/best");
        assert!(!url.contains('?'));
    }

    #[test]
    fn test_best_price_url_with_both_bounds() {
        let range = DateRange::from_inputs("2025-01-01", "2025-01-31");
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 1, 1));

        assert_eq!(
            config().best_price_url(4, range.start, range.end),
            "http://localhost:8000/products/4/best?start=2025-01-01&end=2025-01-31"
        );
    }

    #[test]
    fn test_best_price_state_keeps_result_while_refetching() {
        let found = snapshot(1, Some(5.0), 0, &[]);
        let state = Rc::new(BestPriceState::default());
        let state = state.reduce(BestPriceAction::Found(found));
        let state = state.reduce(BestPriceAction::Started);

        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.result.as_ref().map(|s| s.id), Some(1));

        let message = "Error fetching best price: Not Found";
        let state = state.reduce(BestPriceAction::Failed(message.into()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(message));
        assert_eq!(state.result.as_ref().map(|s| s.id), Some(1));
    }

    // ===== Snapshot Card Tests =====

    #[test]
    fn test_url_rows_fall_back_to_raw_string() {
        let snap = snapshot(1, Some(3.5), 0, &["not a url", "https://www.shop.test/p/1"]);
        let rows = url_rows(&snap);

        assert_eq!(rows[0].label, "not a url");
        assert_eq!(rows[0].href, "not a url");
        assert_eq!(rows[1].label, "www.shop.test");
        assert_eq!(rows[1].price, "$3.50");
    }

    #[test]
    fn test_url_rows_prefer_entry_price() {
        let mut snap = snapshot(1, Some(10.0), 0, &[]);
        snap.urls = vec![
            UrlEntry::Priced(UrlPrice {
                url: "https://a.test".to_string(),
                price: Some(8.0),
            }),
            UrlEntry::Priced(UrlPrice {
                url: "https://b.test".to_string(),
                price: None,
            }),
        ];

        let prices: Vec<String> = url_rows(&snap).into_iter().map(|r| r.price).collect();
        assert_eq!(prices, vec!["$8.00", "$10.00"]);
    }

    #[test]
    fn test_url_rows_without_price_show_na() {
        let rows = url_rows(&snapshot(1, None, 0, &["https://a.test"]));
        assert_eq!(rows[0].price, "N/A");
    }

    // ===== Chart Tests =====

    #[test]
    fn test_padded_domain_all_equal_prices() {
        let (min, max) = padded_domain(&[42.0, 42.0, 42.0]);

        assert!(min.is_finite() && max.is_finite());
        assert_eq!(min, 42.0 - Y_FALLBACK_PADDING);
        assert_eq!(max, 42.0 + Y_FALLBACK_PADDING);
        assert!(max > min);
    }

    #[test]
    fn test_padded_domain_uses_ten_percent_of_range() {
        let (min, max) = padded_domain(&[10.0, 30.0, 20.0]);
        assert!((min - 8.0).abs() < 1e-9);
        assert!((max - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_padded_domain_empty() {
        let (min, max) = padded_domain(&[]);
        assert!(max > min);
    }

    #[test]
    fn test_chart_series_sorted_ascending() {
        let snapshots = vec![
            snapshot(3, Some(30.0), 3, &[]),
            snapshot(1, Some(10.0), 1, &[]),
            snapshot(2, None, 2, &[]),
            snapshot(4, Some(20.0), 2, &[]),
        ];

        let series = ChartSeries::from_snapshots(&snapshots);
        assert_eq!(series.prices, vec![10.0, 20.0, 30.0]);
        assert_eq!(series.labels.len(), 3);
        assert!(series.y_min < 10.0 && series.y_max > 30.0);
    }

    #[test]
    fn test_chart_series_skips_non_finite_prices() {
        let snapshots = vec![
            snapshot(1, Some(f64::NAN), 1, &[]),
            snapshot(2, Some(12.0), 2, &[]),
        ];

        let series = ChartSeries::from_snapshots(&snapshots);
        assert_eq!(series.prices, vec![12.0]);
        assert!(series.y_min.is_finite() && series.y_max.is_finite());
    }

    // ===== Create Form Tests =====

    #[test]
    fn test_create_form_failure_shows_error_and_stays() {
        let state = Rc::new(CreateFormState::default()).reduce(CreateFormAction::Submit);
        assert!(state.submitting);

        let error = creation_error(StatusCode::BAD_REQUEST, "name required");
        let (action, created) = settle_create(Err(error));
        assert_eq!(action, CreateFormAction::Failed("name required".into()));
        assert!(created.is_none());

        let state = state.reduce(action);
        assert!(!state.submitting);
        assert_eq!(state.error.as_deref(), Some("name required"));
    }

    #[test]
    fn test_create_success_reports_product_and_invalidates_list() {
        let products_url = ApiConfig::default().products_url();
        cache::store(&products_url, Rc::new(Vec::<Product>::new()));

        let json = r#"{"id": 9, "name": "Kettle", "created_at": "2025-05-01T00:00:00Z"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        let (action, created) = settle_create(Ok(product));
        assert_eq!(action, CreateFormAction::Succeeded);
        assert_eq!(created.map(|p| p.id), Some(9));
        assert!(cache::cached::<Vec<Product>>(&products_url).is_none());
    }

    #[test]
    fn test_create_form_success_clears_error() {
        let state = Rc::new(CreateFormState::default())
            .reduce(CreateFormAction::Submit)
            .reduce(CreateFormAction::Failed("boom".into()))
            .reduce(CreateFormAction::Submit);
        assert!(state.error.is_none());

        let state = state.reduce(CreateFormAction::Succeeded);
        assert!(!state.submitting);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_create_form_ignores_double_submit() {
        let first = Rc::new(CreateFormState::default()).reduce(CreateFormAction::Submit);
        let second = first.clone().reduce(CreateFormAction::Submit);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_in_flight_guard_blocks_second_submit() {
        let in_flight = RefCell::new(false);
        assert!(try_begin(&in_flight));
        assert!(!try_begin(&in_flight));

        // Released once the request settles
        *in_flight.borrow_mut() = false;
        assert!(try_begin(&in_flight));
    }

    // ===== View Mode Tests =====

    #[test]
    fn test_view_mode_toggle_refetches_and_clears_error() {
        let state = Rc::new(SnapshotsState::default());
        assert_eq!(state.mode, ViewMode::Realtime);
        let initial_generation = state.fetch_generation;

        // Initial realtime fetch fails
        let state = state
            .reduce(SnapshotsAction::FetchStarted)
            .reduce(SnapshotsAction::Failed("Error 404: Not Found".into()));
        assert_eq!(state.error.as_deref(), Some("Error 404: Not Found"));
        assert!(state.visible().is_none());

        // Switch to history: a new fetch is requested and the error cleared on start
        let state = state.reduce(SnapshotsAction::SetMode(ViewMode::History));
        assert_eq!(state.fetch_generation, initial_generation + 1);
        let state = state.reduce(SnapshotsAction::FetchStarted);
        assert!(state.loading);
        assert!(state.error.is_none());

        let state = state.reduce(SnapshotsAction::Loaded(
            ViewMode::History,
            vec![snapshot(1, Some(5.0), 1, &[])],
        ));
        assert_eq!(state.visible().map(<[Snapshot]>::len), Some(1));

        // And back to realtime: another fetch
        let state = state.reduce(SnapshotsAction::SetMode(ViewMode::Realtime));
        assert_eq!(state.fetch_generation, initial_generation + 2);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_view_mode_same_mode_is_noop() {
        let state = Rc::new(SnapshotsState::default());
        let generation = state.fetch_generation;

        let next = Rc::clone(&state);
        let next = next.reduce(SnapshotsAction::SetMode(ViewMode::Realtime));
        assert!(Rc::ptr_eq(&state, &next));
        assert_eq!(next.fetch_generation, generation);
    }

    #[test]
    fn test_loaded_data_goes_to_requested_mode() {
        // A realtime response arriving after switching to history
        let state = Rc::new(SnapshotsState::default())
            .reduce(SnapshotsAction::SetMode(ViewMode::History))
            .reduce(SnapshotsAction::Loaded(
                ViewMode::Realtime,
                vec![snapshot(1, Some(5.0), 1, &[])],
            ));

        assert_eq!(state.latest.len(), 1);
        assert!(state.history.is_empty());
        assert_eq!(state.visible().map(<[Snapshot]>::len), Some(0));
    }

    // ===== QueryState Tests =====

    #[test]
    fn test_query_state_data_extraction() {
        let data = Rc::new(vec![1, 2, 3]);
        let loaded = QueryState::Loaded(data.clone());
        assert_eq!(loaded.data(), Some(&data));
        assert!(!loaded.is_loading());

        let message = "Error 500: Internal Server Error";
        let error: QueryState<Vec<i32>> = QueryState::Error(message.into());
        assert!(error.data().is_none());
        assert_eq!(error.error(), Some(message));

        assert!(QueryState::<Vec<i32>>::Loading.is_loading());
    }

    #[test]
    fn test_query_state_without_key_is_idle() {
        assert_eq!(QueryState::<Vec<i32>>::initial(None), QueryState::Idle);
        assert_eq!(
            QueryState::<Vec<i32>>::initial(Some("test://never-cached")),
            QueryState::Loading
        );
    }

    // ===== Cached Query Tests =====

    #[test]
    fn test_query_starts_loaded_from_cache() {
        let key = "test://products/cached";
        cache::store(key, Rc::new(vec![1, 2]));

        let state = QueryState::<Vec<i32>>::initial(Some(key));
        assert_eq!(state, QueryState::Loaded(Rc::new(vec![1, 2])));
    }

    #[test]
    fn test_successful_fetch_is_cached() {
        let key = "test://products/fresh";
        let next = settle(key, Ok(vec![7]));

        assert_eq!(next, Some(QueryState::Loaded(Rc::new(vec![7]))));
        assert_eq!(cache::cached::<Vec<i32>>(key).as_deref(), Some(&vec![7]));
    }

    #[test]
    fn test_failed_revalidation_keeps_cached_data() {
        let key = "test://products/stale";
        cache::store(key, Rc::new(vec![1]));

        let error = AppError::ApiError("Error 500: Internal Server Error".into());
        assert_eq!(settle::<Vec<i32>>(key, Err(error)), None);

        let state = QueryState::<Vec<i32>>::initial(Some(key));
        assert_eq!(state.data().map(|data| data.len()), Some(1));
    }

    #[test]
    fn test_failed_fetch_without_cache_is_error() {
        let key = "test://products/cold";
        let error = AppError::NotFound("Error 404: Not Found".into());

        let next = settle::<Vec<i32>>(key, Err(error));
        assert_eq!(next, Some(QueryState::Error("Error 404: Not Found".into())));
        assert!(cache::cached::<Vec<i32>>(key).is_none());
    }

    // ===== Route Tests =====

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_path("/"), Route::Products);
        assert_eq!(Route::from_path(""), Route::Products);
        assert_eq!(Route::from_path("/products/12"), Route::ProductDetail(12));
        assert_eq!(Route::from_path("/products/12/"), Route::ProductDetail(12));
        assert_eq!(Route::from_path("/products/abc"), Route::NotFound);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::ProductDetail(5).to_path(), "/products/5");
        let path = Route::ProductDetail(5).to_path();
        assert_eq!(Route::from_path(&path), Route::ProductDetail(5));
    }
}
