use crate::errors::ServerError;
use crate::tests::utils::{body_string, init_test_app};

#[test]
fn search_form_loads() {
    let app = init_test_app();

    let resp = app.get("/").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"action="/results""#));
    assert!(body.contains(r#"name="location""#));
    assert!(body.contains(r#"<option value="for_sale">For Sale</option>"#));
    assert!(body.contains(r#"name="mls_only""#));
    assert!(body.contains(r#"name="foreclosure""#));
    assert!(app.calls().is_empty(), "Form page must not scrape");
}

#[test]
fn stylesheet_is_served() {
    let app = init_test_app();

    let resp = app.get("/assets/main.css").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".data"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = init_test_app();
    assert!(matches!(app.get("/admin"), Err(ServerError::NotFound)));
}
