use actix_web::http::header::{CacheControl, CacheDirective, ContentType};
use actix_web::{HttpResponse, Responder};

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Employee Attendance System</title></head>
<body>
<h1>Employee Attendance System</h1>
<ul>
  <li><a href="/employees">Employees</a></li>
  <li><a href="/attendance">Attendance</a></li>
  <li><a href="/attendance/mark">Mark attendance</a></li>
  <li><a href="/attendance/report">Report</a></li>
</ul>
</body>
</html>
"#;

const PRIVACY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Privacy</title></head>
<body>
<h1>Privacy</h1>
<p>Employee and attendance records are stored only in this system's database.</p>
</body>
</html>
"#;

const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Error</title></head>
<body>
<h1>Error.</h1>
<p>An error occurred while processing your request.</p>
</body>
</html>
"#;

fn page(body: &'static str) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

pub async fn index() -> impl Responder {
    page(HOME_PAGE)
}

pub async fn privacy() -> impl Responder {
    page(PRIVACY_PAGE)
}

/// Response caching is disabled for this page.
pub async fn error() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header(CacheControl(vec![
            CacheDirective::NoStore,
            CacheDirective::NoCache,
            CacheDirective::MaxAge(0),
        ]))
        .body(ERROR_PAGE)
}
