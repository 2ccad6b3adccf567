pub mod attendance;
pub mod employee;
pub mod home;


use actix_web::http::header;
use actix_web::{Either, HttpResponse, web};

/// Submissions arrive either as JSON or as an urlencoded HTML form.
pub type Submission<T> = Either<web::Json<T>, web::Form<T>>;

pub fn submitted<T>(body: Submission<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Post/redirect/get: successful writes send the client back to a listing.
pub fn see_other(location: &'static str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
