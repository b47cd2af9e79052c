#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use kse100_dashboard::models::{
        company::{Company, SortField},
        error::AppError,
        index::{IndexSnapshot, Trend},
        sector::Sector,
        table::{
            SortDirection, SortState, TableAction, TableState, filter_by_sector, visible_companies,
        },
    };
    use kse100_dashboard::services::api::decode;
    use kse100_dashboard::services::query::{QueryClient, QueryData, QueryKey, QueryOptions};
    use kse100_dashboard::utils::format::{format_currency, format_signed};
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::Callback;

    // Helper function to create a company row
    fn company(rank: u32, symbol: &str, sector: &str, price: f64, change: f64) -> Company {
        Company {
            rank,
            symbol: symbol.to_string(),
            name: format!("{symbol} Limited"),
            sector: sector.to_string(),
            price,
            change,
            change_percent: change / price * 100.0,
            market_cap: u64::from(rank) * 1_000_000_000,
            pe_ratio: 4.0 + f64::from(rank),
            dividend_yield: 10.0 - f64::from(rank),
            eps: price / 5.0,
            volume: 1_000_000 * u64::from(rank),
            year_high: price * 1.3,
            year_low: price * 0.7,
        }
    }

    // Helper function to create a realistic company list
    fn create_test_companies() -> Vec<Company> {
        vec![
            company(1, "HBL", "Commercial Banks", 125.5, 1.25),
            company(2, "OGDC", "Oil & Gas Exploration", 98.2, -0.8),
            company(3, "LUCK", "Cement", 720.0, 5.0),
            company(4, "MCB", "Commercial Banks", 210.0, 0.0),
            company(5, "ENGRO", "Fertilizer", 285.0, -2.5),
            company(6, "UBL", "Commercial Banks", 180.0, 1.1),
        ]
    }

    fn sector(id: u32, name: &str) -> Sector {
        Sector {
            id,
            name: name.to_string(),
            market_cap: 2_500_000_000_000,
            weight_percent: 33.4,
            companies_count: 18,
            day_change_percent: -0.65,
            avg_pe_ratio: 4.2,
            color: "#0088FE".to_string(),
        }
    }

    fn symbols(rows: &[Company]) -> Vec<&str> {
        rows.iter().map(|c| c.symbol.as_str()).collect()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::ApiError("HTTP 500".to_string()).to_string(),
            "API error: HTTP 500"
        );
        assert_eq!(
            AppError::DataError("bad".to_string()).to_string(),
            "Data error: bad"
        );
        assert_eq!(AppError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AppError::NotFound("/api/v1/index".to_string()).to_string(),
            "Not found: /api/v1/index"
        );
    }

    // ===== Decoding Tests =====

    #[test]
    fn test_decode_malformed_body() {
        let result: Result<Vec<Sector>, AppError> = decode("<html>Bad Gateway</html>");
        assert!(matches!(result, Err(AppError::DataError(msg)) if msg.starts_with("Malformed response")));
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let result: Result<IndexSnapshot, AppError> = decode(r#"{"symbol": "KSE100"}"#);
        assert!(matches!(result, Err(AppError::DataError(_))));
    }

    #[test]
    fn test_decode_rejects_duplicate_symbols() {
        let body = serde_json::json!([
            {"rank": 1, "symbol": "HBL", "name": "Habib Bank", "sector": "Commercial Banks",
             "price": 125.5, "change": 1.0, "change_percent": 0.8, "market_cap": 1,
             "pe_ratio": 4.0, "dividend_yield": 9.0, "eps": 25.0, "volume": 10,
             "year_high": 150.0, "year_low": 90.0},
            {"rank": 2, "symbol": "HBL", "name": "Habib Bank", "sector": "Commercial Banks",
             "price": 125.5, "change": 1.0, "change_percent": 0.8, "market_cap": 1,
             "pe_ratio": 4.0, "dividend_yield": 9.0, "eps": 25.0, "volume": 10,
             "year_high": 150.0, "year_low": 90.0}
        ])
        .to_string();

        let result: Result<Vec<Company>, AppError> = decode(&body);
        assert!(matches!(result, Err(AppError::DataError(_))));
    }

    // ===== Index Tests =====

    #[test]
    fn test_negative_change_renders_down() {
        let change = -5.25;
        assert_eq!(Trend::from_change(change), Trend::Down);
        assert_eq!(format_signed(change, 2), "-5.25");
    }

    #[test]
    fn test_market_cap_formatting() {
        assert_eq!(format_currency(2_500_000_000_000.0, true), "PKR 2.50T");
    }

    // ===== Table Tests =====

    #[test]
    fn test_toggle_reverses_every_column() {
        let companies = create_test_companies();

        // Keys are distinct per column except Sector, covered by the stability test
        for &field in SortField::all().iter().filter(|&&f| f != SortField::Sector) {
            let asc = visible_companies(
                &companies,
                None,
                SortState::new(field, SortDirection::Ascending),
            );
            let desc = visible_companies(
                &companies,
                None,
                SortState::new(field, SortDirection::Descending),
            );

            let mut reversed = asc;
            reversed.reverse();
            assert_eq!(symbols(&desc), symbols(&reversed), "column {field:?}");
        }
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let companies = create_test_companies();

        let asc = visible_companies(
            &companies,
            None,
            SortState::new(SortField::Sector, SortDirection::Ascending),
        );
        let banks: Vec<&str> = asc
            .iter()
            .filter(|c| c.sector == "Commercial Banks")
            .map(|c| c.symbol.as_str())
            .collect();
        assert_eq!(banks, vec!["HBL", "MCB", "UBL"]);

        let desc = visible_companies(
            &companies,
            None,
            SortState::new(SortField::Sector, SortDirection::Descending),
        );
        let banks: Vec<&str> = desc
            .iter()
            .filter(|c| c.sector == "Commercial Banks")
            .map(|c| c.symbol.as_str())
            .collect();
        assert_eq!(banks, vec!["HBL", "MCB", "UBL"]);
        assert_eq!(desc.first().map(|c| c.symbol.as_str()), Some("OGDC"));
    }

    #[test]
    fn test_filter_exact_sector() {
        let companies = create_test_companies();

        let rows = filter_by_sector(&companies, Some("Commercial Banks"));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|c| c.sector == "Commercial Banks"));

        assert!(filter_by_sector(&companies, Some("Textile Composite")).is_empty());
        assert_eq!(filter_by_sector(&companies, None).len(), companies.len());
    }

    #[test]
    fn test_select_same_sector_twice_clears() {
        let banks = sector(1, "Commercial Banks");
        let state = TableState::default()
            .apply(TableAction::SelectSector(banks.clone()))
            .apply(TableAction::SelectSector(banks));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_rank_then_price_sorting() {
        let companies = vec![
            company(2, "OGDC", "Oil & Gas Exploration", 98.2, 0.0),
            company(1, "HBL", "Commercial Banks", 125.5, 0.0),
            company(3, "LUCK", "Cement", 720.0, 0.0),
        ];

        let state = TableState::default();
        let rows = visible_companies(&companies, state.selected_name(), state.sort);
        assert_eq!(symbols(&rows), vec!["HBL", "OGDC", "LUCK"]);

        let state = state.apply(TableAction::SortBy(SortField::Rank));
        let rows = visible_companies(&companies, state.selected_name(), state.sort);
        assert_eq!(symbols(&rows), vec!["LUCK", "OGDC", "HBL"]);

        let state = state.apply(TableAction::SortBy(SortField::Price));
        assert_eq!(state.sort.direction, SortDirection::Ascending);
        let rows = visible_companies(&companies, state.selected_name(), state.sort);
        assert_eq!(symbols(&rows), vec!["OGDC", "HBL", "LUCK"]);
    }

    #[test]
    fn test_two_row_rank_and_price() {
        let companies = vec![
            company(2, "B", "Cement", 10.0, 0.0),
            company(1, "A", "Cement", 20.0, 0.0),
        ];

        let by_rank = visible_companies(
            &companies,
            None,
            SortState::new(SortField::Rank, SortDirection::Ascending),
        );
        let ranks: Vec<u32> = by_rank.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2]);

        let by_price = visible_companies(
            &companies,
            None,
            SortState::new(SortField::Price, SortDirection::Descending),
        );
        let prices: Vec<f64> = by_price.iter().map(|c| c.price).collect();
        assert_eq!(prices, vec![20.0, 10.0]);
    }

    #[test]
    fn test_empty_company_list() {
        let rows = visible_companies(&[], Some("Cement"), SortState::default());
        assert!(rows.is_empty());
    }

    // ===== Query Cache Tests =====

    #[test]
    fn test_single_flight_per_key() {
        let client = QueryClient::new();
        assert!(client.try_begin(QueryKey::Sectors));
        assert!(!client.try_begin(QueryKey::Sectors));
        assert!(client.try_begin(QueryKey::TopCompanies(30)));

        client.settle(QueryKey::Sectors, Ok(Rc::new(1u8) as QueryData), Utc::now());
        assert!(client.try_begin(QueryKey::Sectors));
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let client = QueryClient::new();
        let key = QueryKey::Index;

        client.try_begin(key);
        client.settle(key, Ok(Rc::new(vec![1u32, 2, 3]) as QueryData), Utc::now());
        client.try_begin(key);
        client.settle(key, Err(AppError::ApiError("HTTP 502".to_string())), Utc::now());

        let entry = client.entry(key);
        assert_eq!(entry.data::<Vec<u32>>().as_deref(), Some(&vec![1, 2, 3]));
        assert!(matches!(entry.error(), Some(AppError::ApiError(_))));
        assert!(!entry.is_fetching());
    }

    #[test]
    fn test_stale_time_controls_refetch() {
        let client = QueryClient::new();
        let key = QueryKey::Sectors;
        let options = QueryOptions::stale_after(300_000);
        let fetched_at = Utc.with_ymd_and_hms(2025, 10, 4, 9, 30, 0).unwrap();

        assert!(client.needs_fetch(key, options, fetched_at));

        client.try_begin(key);
        assert!(!client.needs_fetch(key, options, fetched_at));
        client.settle(key, Ok(Rc::new(()) as QueryData), fetched_at);

        assert!(!client.needs_fetch(key, options, fetched_at + Duration::minutes(4)));
        assert!(client.needs_fetch(key, options, fetched_at + Duration::minutes(6)));
    }

    #[test]
    fn test_subscribers_notified_until_dropped() {
        let client = QueryClient::new();
        let calls = Rc::new(Cell::new(0));

        let subscription = {
            let calls = calls.clone();
            client.subscribe(
                QueryKey::Health,
                Callback::from(move |()| calls.set(calls.get() + 1)),
            )
        };

        client.try_begin(QueryKey::Health);
        client.settle(QueryKey::Health, Ok(Rc::new(()) as QueryData), Utc::now());
        assert_eq!(calls.get(), 2);

        drop(subscription);
        client.try_begin(QueryKey::Health);
        assert_eq!(calls.get(), 2);
    }
}
