use crate::api::service;
use actix_web::{get, post, web, HttpResponse, Responder};
use chainview::{ConnectRequest, ResultResponse, SubscribeRequest, SubscriptionCreated};

#[post("/connect")]
async fn connect(body: web::Json<ConnectRequest>) -> impl Responder {
    log::info!("connect - {:?}", body);
    service::connect(body.address);
    HttpResponse::Ok().finish()
}

#[post("/disconnect")]
async fn disconnect() -> impl Responder {
    log::info!("disconnect");
    service::disconnect();
    HttpResponse::Ok().finish()
}

#[post("/subscribe")]
async fn subscribe(body: web::Json<SubscribeRequest>) -> impl Responder {
    log::info!("subscribe - {:?}", body);
    web::Json(SubscriptionCreated {
        id: service::subscribe(body.into_inner()).await,
    })
}

#[get("/result/{id}")]
async fn result(id: web::Path<service::SubscriptionId>) -> impl Responder {
    match service::result(*id).await {
        Some(result) => HttpResponse::Ok().json(result),
        None => HttpResponse::NotFound().finish(),
    }
}

#[post("/unsubscribe/{id}")]
async fn unsubscribe(id: web::Path<service::SubscriptionId>) -> impl Responder {
    if service::unsubscribe(*id).await {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

#[post("/read")]
async fn read(body: web::Json<SubscribeRequest>) -> impl Responder {
    log::info!("read - {:?}", body);
    web::Json(ResultResponse::from(service::read(body.into_inner()).await))
}

#[post("/refocus")]
async fn refocus() -> impl Responder {
    service::refocus();
    HttpResponse::Ok().finish()
}

#[post("/reconnected")]
async fn reconnected() -> impl Responder {
    service::reconnected();
    HttpResponse::Ok().finish()
}

#[get("/tokens")]
async fn tokens() -> impl Responder {
    web::Json(service::known_tokens())
}
