use crate::api::{attendance, employee, home};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home::index)));

    cfg.service(
        web::scope("/home")
            .service(web::resource("").route(web::get().to(home::index)))
            .service(web::resource("/privacy").route(web::get().to(home::privacy)))
            .service(web::resource("/error").route(web::get().to(home::error))),
    );

    cfg.service(
        web::scope("/employees")
            // /employees
            .service(web::resource("").route(web::get().to(employee::list_employees)))
            // /employees/create
            .service(
                web::resource("/create")
                    .route(web::get().to(employee::create_form))
                    .route(web::post().to(employee::create_employee)),
            )
            // /employees/edit/{id}
            .service(
                web::resource("/edit/{id}")
                    .route(web::get().to(employee::edit_form))
                    .route(web::post().to(employee::update_employee)),
            )
            // /employees/details/{id}
            .service(
                web::resource("/details/{id}").route(web::get().to(employee::employee_details)),
            )
            // /employees/delete/{id}
            .service(
                web::resource("/delete/{id}").route(web::get().to(employee::delete_employee)),
            ),
    );

    cfg.service(
        web::scope("/attendance")
            // /attendance
            .service(web::resource("").route(web::get().to(attendance::list_attendance)))
            // /attendance/mark
            .service(
                web::resource("/mark")
                    .route(web::get().to(attendance::mark_form))
                    .route(web::post().to(attendance::mark_attendance)),
            )
            // /attendance/report
            .service(web::resource("/report").route(web::get().to(attendance::report))),
    );
}
