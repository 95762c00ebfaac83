#[cfg(test)]
mod tests {
    use bostad_dashboard::components::footer::{LINKS, SOURCE_URL};
    use bostad_dashboard::hooks::use_auth::LoginStatus;
    use bostad_dashboard::hooks::use_query::QueryState;
    use bostad_dashboard::models::{
        error::AppError,
        property::{Address, Property, PropertyDetail, PropertyType, QueuePosition},
        sorting::{FilterAction, SortColumn, SortState, VacancyFilter, sort_vacancies, visible_rows},
        user::{LoginOutcome, Session, UserDetails},
    };
    use bostad_dashboard::pages::Route;
    use bostad_dashboard::services::query_cache::{QueryClient, QueryData, QueryKey};
    use bostad_dashboard::utils::{deadline::is_urgent, geo::distinct_addresses};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use std::rc::Rc;
    use yew_router::Routable;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Helper function to create a listed property
    fn property(id: u32, position: Option<u32>, area: &str, street: &str) -> Property {
        Property {
            id,
            property_type: if id % 2 == 0 {
                PropertyType::Apartment
            } else {
                PropertyType::Dorm
            },
            area: area.to_string(),
            description: format!("Lägenhet {id}"),
            short_description: "1 rum och kök".to_string(),
            address: Address {
                street: street.to_string(),
                city: "Lund".to_string(),
                postal_code: "22362".to_string(),
            },
            floor: i8::try_from(id % 5).unwrap(),
            size_sqm: 20.0 + id as f32,
            reserved: id % 3 == 0,
            queue_position: QueuePosition {
                position,
                total_in_queue: 100 + id,
            },
            rent: 4_000 + id * 37 % 11 * 100,
            reserve_from: date(2026, 10, 10),
            reserve_until: date(2026, 10, 20 + id % 5),
            move_in: date(2026, 11, 1 + id % 3),
        }
    }

    fn collection() -> Vec<Property> {
        vec![
            property(1, Some(4), "Sparta", "Tornavägen 1"),
            property(2, None, "Delphi", "Ulrikedalsvägen 4"),
            property(3, Some(1), "Vildanden", "Vildandsvägen 7"),
            property(4, None, "Sparta", "Tornavägen 1"),
            property(5, Some(12), "Kämnärsrätten", "Kämnärsvägen 9"),
        ]
    }

    fn user() -> UserDetails {
        UserDetails {
            first_name: "Alva".to_string(),
            last_name: "Berg".to_string(),
        }
    }

    fn ids(rows: &[&Property]) -> Vec<u32> {
        rows.iter().map(|p| p.id).collect()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_retryable() {
        assert!(AppError::RateLimited.is_retryable());
        assert!(AppError::NoResult("geocode".into()).is_retryable());
        assert!(!AppError::Unauthenticated.is_retryable());
        assert!(!AppError::NotFound("x".into()).is_retryable());
    }

    // ===== Property Model Tests =====

    #[test]
    fn test_vacancy_list_deserialization() {
        let json = r#"[{
            "id": 4711,
            "property_type": "Dorm",
            "area": "Sparta",
            "description": "Korridorrum med egen toalett",
            "short_description": "Korridorrum",
            "address": { "street": "Tornavägen 1", "city": "Lund", "postal_code": "22363" },
            "floor": 3,
            "size_sqm": 18.5,
            "reserved": false,
            "queue_position": { "position": null, "total_in_queue": 57 },
            "rent": 4321,
            "reserve_from": "2026-10-14",
            "reserve_until": "2026-10-17",
            "move_in": "2026-11-01"
        }]"#;

        let list: Vec<Property> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].property_type, PropertyType::Dorm);
        assert_eq!(list[0].queue_position.position, None);
        assert_eq!(list[0].reserve_until, date(2026, 10, 17));
    }

    // ===== Sorting Tests =====

    #[test]
    fn test_sorting_is_idempotent_for_every_column() {
        let list = collection();
        for &column in SortColumn::table().iter().chain(SortColumn::dropdown()) {
            for desc in [false, true] {
                let sort = SortState::new(column, desc);
                let first = ids(&sort_vacancies(&list, &sort));
                let second = ids(&sort_vacancies(&list, &sort));
                assert_eq!(first, second, "{column:?} desc={desc}");
            }
        }
    }

    #[test]
    fn test_missing_queue_position_is_the_minimum() {
        let list = collection();

        let ascending = sort_vacancies(&list, &SortState::default());
        assert_eq!(ids(&ascending), vec![2, 4, 3, 1, 5]);

        let descending = sort_vacancies(&list, &SortState::new(SortColumn::QueuePosition, true));
        assert_eq!(ids(&descending), vec![5, 1, 3, 2, 4]);
    }

    #[test]
    fn test_dropdown_choice_resets_direction() {
        let sort = SortState::new(SortColumn::Rent, true);
        let toggled = sort.toggled(SortColumn::Rent);
        assert!(!toggled.desc);

        let selected = SortState::select(SortColumn::Floor);
        assert_eq!(selected, SortState::new(SortColumn::Floor, false));
        assert_eq!(sort.toggled(SortColumn::Area), SortState::select(SortColumn::Area));
    }

    #[test]
    fn test_filters_compose_with_sorting() {
        let list = collection();
        let filter = VacancyFilter {
            area: "spar".to_string(),
            property_type: Some(PropertyType::Apartment),
        };

        let rows = visible_rows(&list, &SortState::default(), &filter);
        assert_eq!(ids(&rows), vec![4]);

        let all = visible_rows(&list, &SortState::default(), &VacancyFilter::default());
        assert_eq!(all.len(), list.len());
    }

    #[test]
    fn test_type_choice_survives_area_search() {
        let list = collection();
        // The type select fires first, the debounced search lands afterwards.
        let filter = VacancyFilter::default()
            .apply(FilterAction::SetType(Some(PropertyType::Apartment)))
            .apply(FilterAction::SetArea("spar".to_string()));
        assert_eq!(ids(&visible_rows(&list, &SortState::default(), &filter)), vec![4]);

        let filter = filter.apply(FilterAction::SetArea(String::new()));
        let rows = visible_rows(&list, &SortState::default(), &filter);
        assert!(rows.iter().all(|p| p.property_type == PropertyType::Apartment));
    }

    // ===== Cache and Session Tests =====

    fn loaded_client() -> QueryClient {
        let client = QueryClient::new();
        let now = Utc::now();
        client.set_data(QueryKey::Vacancies, QueryData::Vacancies(Rc::new(collection())), now);
        client.set_data(
            QueryKey::User,
            QueryData::Session(Session::Unauthenticated),
            now,
        );
        client
    }

    #[test]
    fn test_login_replaces_session_and_refetches_vacancies() {
        let client = loaded_client();

        assert!(client.apply_login(&LoginOutcome::Success(user()), Utc::now()));
        assert_eq!(client.session(), Some(Session::Authenticated(user())));
        assert!(client.needs_fetch(&QueryKey::Vacancies));
        // Old list stays visible while refetching
        assert!(client.get(&QueryKey::Vacancies).is_some());
        assert!(!client.needs_fetch(&QueryKey::User));
    }

    #[test]
    fn test_invalid_credentials_leave_cache_alone() {
        let client = loaded_client();

        assert!(!client.apply_login(&LoginOutcome::InvalidCredentials, Utc::now()));
        assert_eq!(client.session(), Some(Session::Unauthenticated));
        assert!(!client.needs_fetch(&QueryKey::Vacancies));
    }

    #[test]
    fn test_logout_clears_queue_positions() {
        let client = loaded_client();
        client.apply_login(&LoginOutcome::Success(user()), Utc::now());
        client.set_data(
            QueryKey::Vacancy(3),
            QueryData::Vacancy(Rc::new(PropertyDetail::from(property(3, Some(1), "Vildanden", "Vildandsvägen 7")))),
            Utc::now(),
        );

        client.apply_logout(Utc::now());

        assert_eq!(client.session(), Some(Session::Unauthenticated));
        assert!(client.get(&QueryKey::Vacancies).is_none());
        assert!(client.get(&QueryKey::Vacancy(3)).is_none());
        assert!(client.needs_fetch(&QueryKey::Vacancies));
    }

    #[test]
    fn test_poll_in_flight_at_logout_is_discarded() {
        let client = loaded_client();
        client.apply_login(&LoginOutcome::Success(user()), Utc::now());
        let token = client.begin_fetch(&QueryKey::Vacancies).unwrap();

        client.apply_logout(Utc::now());
        // Answer to the request sent while signed in
        client.finish_fetch(
            &QueryKey::Vacancies,
            token,
            Ok(QueryData::Vacancies(Rc::new(collection()))),
            Utc::now(),
        );

        assert!(client.get(&QueryKey::Vacancies).is_none());
        assert!(client.needs_fetch(&QueryKey::Vacancies));
        assert!(!client.is_fetching(&QueryKey::Vacancies));
    }

    #[test]
    fn test_poll_in_flight_at_login_is_refetched() {
        let client = loaded_client();
        let token = client.begin_fetch(&QueryKey::Vacancies).unwrap();

        client.apply_login(&LoginOutcome::Success(user()), Utc::now());
        client.finish_fetch(
            &QueryKey::Vacancies,
            token,
            Ok(QueryData::Vacancies(Rc::new(Vec::new()))),
            Utc::now(),
        );

        // Still the list from before login, and due for a signed-in refetch
        let cached: Rc<Vec<Property>> = client.get_as(&QueryKey::Vacancies).unwrap();
        assert_eq!(cached.len(), collection().len());
        assert!(client.needs_fetch(&QueryKey::Vacancies));
    }

    #[test]
    fn test_session_lookup_in_flight_at_login_is_discarded() {
        let client = QueryClient::new();
        let token = client.begin_fetch(&QueryKey::User).unwrap();

        client.apply_login(&LoginOutcome::Success(user()), Utc::now());
        client.finish_fetch(
            &QueryKey::User,
            token,
            Ok(QueryData::Session(Session::Unauthenticated)),
            Utc::now(),
        );

        assert_eq!(client.session(), Some(Session::Authenticated(user())));
    }

    #[test]
    fn test_detail_is_seeded_from_list() {
        let client = loaded_client();

        let placeholder = client.vacancy_or_placeholder(3).unwrap();
        assert_eq!(placeholder.id, 3);
        assert_eq!(placeholder.area, "Vildanden");
        assert_eq!(placeholder.facing, None);
        assert!(client.vacancy_or_placeholder(99).is_none());

        let detail = PropertyDetail {
            facing: Some("Söder".to_string()),
            ..PropertyDetail::from(property(3, Some(1), "Vildanden", "Vildandsvägen 7"))
        };
        client.set_data(QueryKey::Vacancy(3), QueryData::Vacancy(Rc::new(detail)), Utc::now());
        assert_eq!(
            client.vacancy_or_placeholder(3).unwrap().facing.as_deref(),
            Some("Söder")
        );
    }

    #[test]
    fn test_query_state_hides_errors_behind_data() {
        let client = loaded_client();
        let token = client.begin_fetch(&QueryKey::Vacancies).unwrap();
        client.finish_fetch(
            &QueryKey::Vacancies,
            token,
            Err(AppError::ApiError("down".into())),
            Utc::now(),
        );

        let state: QueryState<Rc<Vec<Property>>> =
            QueryState::from_snapshot(client.snapshot(&QueryKey::Vacancies));
        assert!(state.data().is_some());
        assert!(state.error.is_some());
        assert_eq!(state.blocking_error(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_login_status_from_outcome() {
        assert_eq!(
            LoginStatus::from(&LoginOutcome::Success(user())),
            LoginStatus::Succeeded
        );
        assert_eq!(
            LoginStatus::from(&LoginOutcome::InvalidCredentials),
            LoginStatus::InvalidCredentials
        );
        assert!(!LoginStatus::default().is_pending());
    }

    // ===== Urgency Tests =====

    #[test]
    fn test_window_ending_within_a_day_is_urgent() {
        let until = date(2026, 10, 16);
        // Deadline is 2026-10-16 23:59:59.999 CEST = 21:59:59.999 UTC
        let deadline = Utc.with_ymd_and_hms(2026, 10, 16, 21, 59, 59).unwrap() + Duration::milliseconds(999);

        assert!(is_urgent(until, deadline - Duration::hours(23)));
        assert!(!is_urgent(until, deadline - Duration::hours(25)));
    }

    #[test]
    fn test_urgency_flips_while_displayed() {
        let until = date(2026, 10, 16);
        let deadline = Utc.with_ymd_and_hms(2026, 10, 16, 21, 59, 59).unwrap() + Duration::milliseconds(999);
        let before = deadline - Duration::seconds(86_401);

        assert!(!is_urgent(until, before));
        // Two one-second ticks later
        assert!(is_urgent(until, before + Duration::seconds(2)));
    }

    // ===== Geocoding Tests =====

    #[test]
    fn test_shared_address_geocodes_once() {
        let list = collection();
        let addresses = distinct_addresses(&list);
        assert_eq!(addresses.len(), 4);

        let client = QueryClient::new();
        let started = list
            .iter()
            .filter(|p| {
                let key = QueryKey::Geocode((&p.address).into());
                client.begin_fetch(&key).is_some()
            })
            .count();
        assert_eq!(started, 4);
    }

    // ===== Navigation Tests =====

    #[test]
    fn test_footer_links_resolve_to_routes() {
        let paths: Vec<String> = LINKS.iter().map(|(route, _)| route.to_path()).collect();
        assert_eq!(paths, vec!["/", "/historik"]);
        assert_eq!(Route::recognize("/historik"), Some(Route::History));
        assert!(SOURCE_URL.starts_with("https://github.com/"));
    }
}
