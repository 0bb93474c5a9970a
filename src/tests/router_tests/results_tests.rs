use crate::domain::{ListingType, SearchCriteria};
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::tests::utils::{body_string, fixed_clock, init_failing_app, init_test_app, FIXED_EXPORT};
use std::fs;

#[test]
fn location_only_submission_reaches_source_unchanged() {
    let app = init_test_app();

    let resp = app
        .post_form("location=Austin%2C+TX&listing_type=for_sale")
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    assert_eq!(
        app.calls(),
        vec![SearchCriteria {
            location: "Austin, TX".to_string(),
            listing_type: ListingType::ForSale,
            radius: None,
            mls_only: false,
            past_days: None,
            date_from: None,
            date_to: None,
            foreclosure: false,
            proxy: None,
        }]
    );
}

#[test]
fn every_field_is_forwarded() {
    let app = init_test_app();

    app.post_form(
        "location=78701&listing_type=sold&radius=1.5&mls_only=on&past_days=30\
         &date_from=2024-01-01&date_to=2024-02-01&foreclosure=&proxy=http%3A%2F%2Fproxy%3A8080",
    )
    .expect("Handler failed");

    let calls = app.calls();
    assert_eq!(calls.len(), 1);
    let c = &calls[0];
    assert_eq!(c.location, "78701");
    assert_eq!(c.listing_type, ListingType::Sold);
    assert_eq!(c.radius, Some(1.5));
    assert!(c.mls_only);
    assert_eq!(c.past_days, Some(30));
    assert_eq!(c.date_from.as_deref(), Some("2024-01-01"));
    assert_eq!(c.date_to.as_deref(), Some("2024-02-01"));
    assert!(c.foreclosure, "Empty checkbox value still counts as checked");
    assert_eq!(c.proxy.as_deref(), Some("http://proxy:8080"));
}

#[test]
fn results_page_hides_last_column() {
    let app = init_test_app();

    let body = body_string(app.post_form("location=Austin%2C+TX").unwrap());

    assert!(body.contains("<th>street</th><th>location</th></tr>"));
    assert!(body.contains("<td>1 Main St</td><td>Austin, TX</td>"));
    assert!(!body.contains("internal_id"));
    assert!(!body.contains("id-1"));
    assert!(body.contains(&format!(r#"href="/download/{FIXED_EXPORT}""#)));
}

#[test]
fn results_request_writes_one_matching_csv() {
    let app = init_test_app();

    app.post_form("location=Austin%2C+TX").unwrap();

    assert_eq!(app.exported_files(), vec![FIXED_EXPORT.to_string()]);

    let csv = fs::read_to_string(app.dir.path().join(FIXED_EXPORT)).unwrap();
    assert_eq!(
        csv,
        "street,location\n1 Main St,\"Austin, TX\"\n2 Oak Ave,\"Austin, TX\"\n"
    );
}

#[test]
fn same_second_requests_overwrite_each_other() {
    let app = init_test_app();

    app.post_form("location=Austin%2C+TX").unwrap();
    app.post_form("location=Denver%2C+CO&listing_type=for_rent").unwrap();

    assert_eq!(app.calls().len(), 2);
    assert_eq!(app.exported_files(), vec![FIXED_EXPORT.to_string()]);

    let csv = fs::read_to_string(app.dir.path().join(FIXED_EXPORT)).unwrap();
    assert!(csv.contains("Denver, CO"));
    assert!(!csv.contains("Austin, TX"));
}

#[test]
fn later_second_gets_its_own_file() {
    fn one_second_later() -> chrono::NaiveDateTime {
        fixed_clock() + chrono::Duration::seconds(1)
    }

    let mut app = init_test_app();
    app.post_form("location=Austin%2C+TX").unwrap();

    app.state.clock = one_second_later;
    app.post_form("location=Austin%2C+TX").unwrap();

    assert_eq!(
        app.exported_files(),
        vec![
            FIXED_EXPORT.to_string(),
            "property_results_2024-05-01_12-00-01.csv".to_string()
        ]
    );
}

#[test]
fn scrape_failure_is_a_generic_500_and_writes_nothing() {
    let app = init_failing_app();

    let err = app.post_form("location=Austin%2C+TX").unwrap_err();
    assert!(matches!(err, ServerError::Scrape(_)));
    assert!(app.exported_files().is_empty());

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 500);
    let body = body_string(resp);
    assert!(body.contains("Internal Server Error"));
    assert!(!body.contains("connection refused"));
}

#[test]
fn unusable_form_values_end_as_generic_500() {
    let app = init_test_app();

    for form in ["location=x&radius=far", "location=x&listing_type=auction"] {
        let err = app.post_form(form).unwrap_err();
        assert!(matches!(err, ServerError::Intake(_)), "{form}");

        let resp = error_to_response(err);
        assert_eq!(resp.status(), 500, "{form}");
        let body = body_string(resp);
        assert!(body.contains("Internal Server Error"));
        assert!(!body.contains("'far'"), "detail must not be echoed");
        assert!(!body.contains("'auction'"), "detail must not be echoed");
    }
    assert!(app.calls().is_empty());
    assert!(app.exported_files().is_empty());
}

#[test]
fn get_on_results_is_not_found() {
    let app = init_test_app();
    assert!(matches!(app.get("/results"), Err(ServerError::NotFound)));
}
