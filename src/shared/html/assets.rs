//! Stylesheet, scroll-motion driver and default logo, compiled into the binary.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{get, HttpResponse, Responder};

pub const SITE_CSS: &str = include_str!("../../../static/site.css");
pub const MOTION_JS: &str = include_str!("../../../static/motion.js");
pub const SAVVY_LOGO_SVG: &str = include_str!("../../../static/savvy-logo.svg");

const MAX_AGE_SECS: u32 = 3600;

fn asset(content_type: &'static str, body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(CacheControl(vec![
            CacheDirective::Public,
            CacheDirective::MaxAge(MAX_AGE_SECS),
        ]))
        .body(body)
}

#[get("/static/site.css")]
pub async fn site_css() -> impl Responder {
    asset("text/css; charset=utf-8", SITE_CSS)
}

#[get("/static/motion.js")]
pub async fn motion_js() -> impl Responder {
    asset("application/javascript; charset=utf-8", MOTION_JS)
}

#[get("/static/savvy-logo.svg")]
pub async fn savvy_logo() -> impl Responder {
    asset("image/svg+xml", SAVVY_LOGO_SVG)
}
